//! Observer hooks for the asset pipeline.
//!
//! Components receive an `Arc<dyn AssetObserver>` when constructed and
//! report what they do through it instead of logging directly. The default
//! [`TracingObserver`] forwards everything to `tracing`.

use std::path::Path;
use std::sync::Arc;

use crate::error::{CoreError, SourceError};
use crate::types::{NormalizedAsset, RawAsset};

/// Shared handle passed to each pipeline component.
pub type SharedObserver = Arc<dyn AssetObserver>;

/// Receives pipeline events. Every method defaults to a no-op.
pub trait AssetObserver: Send + Sync {
    fn directory_listed(&self, _dir: &Path, _file_count: usize) {}
    fn directory_failed(&self, _dir: &Path, _error: &SourceError) {}

    fn file_read(&self, _path: &Path, _record_count: usize) {}
    fn file_skipped(&self, _path: &Path, _error: &SourceError) {}

    fn record_extracted(&self, _asset: &NormalizedAsset) {}
    fn record_dropped(&self, _raw: &RawAsset) {}

    fn collection_progress(&self, _collected: usize) {}
    fn collection_finished(&self, _total: usize) {}

    fn search_matched(&self, _query: &str, _asset: &NormalizedAsset) {}
    fn search_missed(&self, _query: &str) {}

    fn operation_failed(&self, _operation: &'static str, _error: &CoreError) {}
}

/// Observer that discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl AssetObserver for NoopObserver {}

/// Observer that emits each event through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl TracingObserver {
    pub fn shared() -> SharedObserver {
        Arc::new(Self)
    }
}

impl AssetObserver for TracingObserver {
    fn directory_listed(&self, dir: &Path, file_count: usize) {
        tracing::info!(dir = %dir.display(), file_count, "Listed JSON files in asset directory");
    }

    fn directory_failed(&self, dir: &Path, error: &SourceError) {
        tracing::error!(dir = %dir.display(), error = %error, "Asset directory could not be listed");
    }

    fn file_read(&self, path: &Path, record_count: usize) {
        tracing::info!(path = %path.display(), record_count, "Read asset file");
    }

    fn file_skipped(&self, path: &Path, error: &SourceError) {
        tracing::error!(path = %path.display(), error = %error, "Skipping asset file");
    }

    fn record_extracted(&self, asset: &NormalizedAsset) {
        tracing::debug!(
            name = %asset.name,
            model = %asset.model,
            ip_address = %asset.ip_address,
            "Asset extracted",
        );
    }

    fn record_dropped(&self, raw: &RawAsset) {
        tracing::debug!(asset = %raw.as_value(), "Asset skipped due to missing fields");
    }

    fn collection_progress(&self, collected: usize) {
        tracing::debug!(collected, "Collecting assets");
    }

    fn collection_finished(&self, total: usize) {
        tracing::info!(total, "Total assets collected");
    }

    fn search_matched(&self, query: &str, asset: &NormalizedAsset) {
        tracing::info!(query, name = %asset.name, "Match found");
    }

    fn search_missed(&self, query: &str) {
        tracing::info!(query, "No match found");
    }

    fn operation_failed(&self, operation: &'static str, error: &CoreError) {
        tracing::error!(operation, error = %error, "Asset service operation failed");
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use super::*;

    /// Records a short label per event so tests can assert on what was reported.
    #[derive(Default)]
    pub struct RecordingObserver {
        events: Mutex<Vec<String>>,
    }

    impl RecordingObserver {
        pub fn events(&self) -> Vec<String> {
            self.events.lock().unwrap().clone()
        }

        pub fn count(&self, prefix: &str) -> usize {
            self.events()
                .iter()
                .filter(|e| e.starts_with(prefix))
                .count()
        }

        fn push(&self, event: String) {
            self.events.lock().unwrap().push(event);
        }
    }

    impl AssetObserver for RecordingObserver {
        fn directory_listed(&self, _dir: &Path, file_count: usize) {
            self.push(format!("directory_listed:{file_count}"));
        }

        fn directory_failed(&self, _dir: &Path, error: &SourceError) {
            self.push(format!("directory_failed:{error}"));
        }

        fn file_read(&self, path: &Path, record_count: usize) {
            let name = path.file_name().unwrap().to_string_lossy();
            self.push(format!("file_read:{name}:{record_count}"));
        }

        fn file_skipped(&self, path: &Path, _error: &SourceError) {
            let name = path.file_name().unwrap().to_string_lossy();
            self.push(format!("file_skipped:{name}"));
        }

        fn record_dropped(&self, _raw: &RawAsset) {
            self.push("record_dropped".into());
        }

        fn collection_finished(&self, total: usize) {
            self.push(format!("collection_finished:{total}"));
        }

        fn search_missed(&self, query: &str) {
            self.push(format!("search_missed:{query}"));
        }

        fn operation_failed(&self, operation: &'static str, _error: &CoreError) {
            self.push(format!("operation_failed:{operation}"));
        }
    }
}
