//! Asset directory pipeline.
//!
//! Reads JSON asset files from one directory, normalizes the differently
//! named fields each file uses, and serves the result through pagination
//! and substring search. Nothing is cached: every call rescans the disk.
//!
//! Layering, bottom-up:
//!
//! - [`source`]: lists `*.json` files and parses them into raw records.
//! - [`normalize`] / [`collector`]: alias resolution, filtering, paging, search.
//! - [`service`]: async façade that turns any failure into a uniform error.

pub mod collector;
pub mod error;
pub mod normalize;
pub mod observer;
pub mod service;
pub mod source;
pub mod types;

use std::path::PathBuf;

use collector::AssetCollector;
use observer::SharedObserver;
use service::AssetService;
use source::AssetSource;

/// Wire the reader, collector and service over `directory`, sharing one observer.
pub fn build_service(directory: impl Into<PathBuf>, observer: SharedObserver) -> AssetService {
    let source = AssetSource::new(directory, observer.clone());
    let collector = AssetCollector::new(source, observer.clone());
    AssetService::new(collector, observer)
}
