//! Normalizer/collector: turns the raw record stream into normalized assets,
//! and answers pagination and search over them.

use crate::error::CoreError;
use crate::normalize::extract_asset_info;
use crate::observer::SharedObserver;
use crate::source::AssetSource;
use crate::types::{AssetPage, NormalizedAsset, RawAsset};

// ---------------------------------------------------------------------------
// Pagination defaults
// ---------------------------------------------------------------------------

/// Page used when the caller does not ask for one.
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when the caller does not ask for one.
pub const DEFAULT_PER_PAGE: i64 = 5;

/// Collection progress is reported every this many assets.
const PROGRESS_INTERVAL: usize = 5;

/// Reject page numbers and sizes below 1.
pub fn validate_pagination(page: i64, per_page: i64) -> Result<(), CoreError> {
    if page < 1 {
        return Err(CoreError::Validation(format!(
            "page must be at least 1, got {page}"
        )));
    }
    if per_page < 1 {
        return Err(CoreError::Validation(format!(
            "per_page must be at least 1, got {per_page}"
        )));
    }
    Ok(())
}

/// Offset and length of the requested page. Both saturate instead of
/// overflowing, so absurd values simply land past the end.
fn page_window(page: i64, per_page: i64) -> (usize, usize) {
    let start = (page - 1).saturating_mul(per_page);
    (
        usize::try_from(start).unwrap_or(usize::MAX),
        usize::try_from(per_page).unwrap_or(usize::MAX),
    )
}

// ---------------------------------------------------------------------------
// Collector
// ---------------------------------------------------------------------------

pub struct AssetCollector {
    source: AssetSource,
    observer: SharedObserver,
}

impl AssetCollector {
    pub fn new(source: AssetSource, observer: SharedObserver) -> Self {
        Self { source, observer }
    }

    pub fn source(&self) -> &AssetSource {
        &self.source
    }

    fn normalize(&self, raw: RawAsset) -> Option<NormalizedAsset> {
        match extract_asset_info(&raw) {
            Some(asset) => {
                self.observer.record_extracted(&asset);
                Some(asset)
            }
            None => {
                self.observer.record_dropped(&raw);
                None
            }
        }
    }

    /// Every valid asset, in file-listing then record order.
    pub fn collect_all_assets(&self) -> Vec<NormalizedAsset> {
        let mut assets = Vec::new();
        for asset in self.source.records().filter_map(|raw| self.normalize(raw)) {
            assets.push(asset);
            if assets.len() % PROGRESS_INTERVAL == 0 {
                self.observer.collection_progress(assets.len());
            }
        }
        self.observer.collection_finished(assets.len());
        assets
    }

    /// One page of the collected assets.
    ///
    /// Pages past the end come back empty; `total` is always the full count.
    pub fn collect_assets_paginated(
        &self,
        page: i64,
        per_page: i64,
    ) -> Result<AssetPage, CoreError> {
        validate_pagination(page, per_page)?;

        let all = self.collect_all_assets();
        let total = all.len();
        let (skip, take) = page_window(page, per_page);
        let assets: Vec<NormalizedAsset> = all.into_iter().skip(skip).take(take).collect();

        Ok(AssetPage {
            assets,
            total,
            page,
            per_page,
        })
    }

    /// First asset whose name, model or IP address contains `query`,
    /// ignoring case. Stops reading files as soon as a match is found.
    pub fn match_asset(&self, query: &str) -> Option<NormalizedAsset> {
        let needle = query.to_lowercase();

        let found = self
            .source
            .records()
            .filter_map(|raw| self.normalize(raw))
            .find(|asset| asset.matches(&needle));

        match &found {
            Some(asset) => self.observer.search_matched(&needle, asset),
            None => self.observer.search_missed(&needle),
        }
        found
    }
}
