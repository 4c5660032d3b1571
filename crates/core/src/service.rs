//! Query façade between the collector and the HTTP boundary.
//!
//! The filesystem pass is blocking, so each call runs it on tokio's blocking
//! pool. Errors and panics from below come back as a [`ServiceError`] whose
//! message is the only failure text the boundary ever shows.

use std::sync::Arc;

use tokio::task::JoinError;

use crate::collector::AssetCollector;
use crate::error::CoreError;
use crate::observer::SharedObserver;
use crate::types::{AssetPage, MatchOutcome};

/// Failure text for the listing operation.
pub const FETCH_FAILED_MESSAGE: &str = "Error fetching assets";

/// Failure text for the search operation.
pub const SEARCH_FAILED_MESSAGE: &str = "Error during search";

/// Uniform failure returned by the service layer.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("{}", FETCH_FAILED_MESSAGE)]
    Fetch(#[source] CoreError),

    #[error("{}", SEARCH_FAILED_MESSAGE)]
    Search(#[source] CoreError),
}

impl ServiceError {
    /// The underlying cause, for logging.
    pub fn cause(&self) -> &CoreError {
        match self {
            Self::Fetch(err) | Self::Search(err) => err,
        }
    }
}

fn join_failure(err: JoinError) -> CoreError {
    if err.is_panic() {
        CoreError::Internal("asset task panicked".into())
    } else {
        CoreError::Internal(format!("asset task did not complete: {err}"))
    }
}

#[derive(Clone)]
pub struct AssetService {
    collector: Arc<AssetCollector>,
    observer: SharedObserver,
}

impl AssetService {
    pub fn new(collector: AssetCollector, observer: SharedObserver) -> Self {
        Self {
            collector: Arc::new(collector),
            observer,
        }
    }

    pub fn collector(&self) -> &AssetCollector {
        &self.collector
    }

    /// Fetch one page of assets.
    pub async fn get_paginated_assets(
        &self,
        page: i64,
        per_page: i64,
    ) -> Result<AssetPage, ServiceError> {
        let collector = Arc::clone(&self.collector);
        let result =
            tokio::task::spawn_blocking(move || collector.collect_assets_paginated(page, per_page))
                .await
                .map_err(join_failure)
                .and_then(|inner| inner);

        result.map_err(|err| {
            self.observer.operation_failed("get_paginated_assets", &err);
            ServiceError::Fetch(err)
        })
    }

    /// Find the first asset matching `query`, or the no-match sentinel.
    pub async fn find_asset_by_query(&self, query: String) -> Result<MatchOutcome, ServiceError> {
        let collector = Arc::clone(&self.collector);
        let result = tokio::task::spawn_blocking(move || collector.match_asset(&query))
            .await
            .map_err(join_failure);

        match result {
            Ok(found) => Ok(MatchOutcome::from(found)),
            Err(err) => {
                self.observer.operation_failed("find_asset_by_query", &err);
                Err(ServiceError::Search(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use assert_matches::assert_matches;
    use tempfile::TempDir;

    use super::*;
    use crate::observer::testing::RecordingObserver;
    use crate::source::AssetSource;
    use crate::types::NormalizedAsset;

    fn service(dir: &Path) -> (AssetService, Arc<RecordingObserver>) {
        let observer = Arc::new(RecordingObserver::default());
        let source = AssetSource::new(dir, observer.clone());
        let collector = AssetCollector::new(source, observer.clone());
        (AssetService::new(collector, observer.clone()), observer)
    }

    fn write_router(dir: &TempDir) {
        fs::write(
            dir.path().join("net.json"),
            r#"[{"name":"Router1","model":"RT-100","ip_address":"10.0.0.1"}]"#,
        )
        .unwrap();
    }

    #[tokio::test]
    async fn paginated_fetch_passes_through() {
        let dir = TempDir::new().unwrap();
        write_router(&dir);
        let (service, _) = service(dir.path());

        let page = service.get_paginated_assets(1, 5).await.unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.assets[0].name, "Router1");
    }

    #[tokio::test]
    async fn invalid_pagination_becomes_fetch_error() {
        let dir = TempDir::new().unwrap();
        let (service, observer) = service(dir.path());

        let err = service.get_paginated_assets(0, 5).await.unwrap_err();

        assert_matches!(err, ServiceError::Fetch(CoreError::Validation(_)));
        assert_eq!(err.to_string(), "Error fetching assets");
        assert_eq!(observer.count("operation_failed:get_paginated_assets"), 1);
    }

    #[tokio::test]
    async fn search_hit_returns_asset() {
        let dir = TempDir::new().unwrap();
        write_router(&dir);
        let (service, _) = service(dir.path());

        let outcome = service.find_asset_by_query("router".into()).await.unwrap();
        assert_eq!(
            outcome,
            MatchOutcome::Found(NormalizedAsset {
                name: "Router1".into(),
                model: "RT-100".into(),
                ip_address: "10.0.0.1".into(),
            })
        );
    }

    #[tokio::test]
    async fn search_miss_returns_sentinel() {
        let dir = TempDir::new().unwrap();
        write_router(&dir);
        let (service, _) = service(dir.path());

        let outcome = service.find_asset_by_query("switch".into()).await.unwrap();
        assert_eq!(outcome, MatchOutcome::no_match());
    }

    #[test]
    fn error_messages_are_uniform() {
        let fetch = ServiceError::Fetch(CoreError::Internal("disk".into()));
        let search = ServiceError::Search(CoreError::Internal("disk".into()));

        assert_eq!(fetch.to_string(), "Error fetching assets");
        assert_eq!(search.to_string(), "Error during search");
        assert_matches!(search.cause(), CoreError::Internal(_));
    }

    #[tokio::test]
    async fn panic_in_blocking_task_maps_to_internal() {
        let err = tokio::task::spawn_blocking(|| panic!("boom"))
            .await
            .map_err(join_failure)
            .unwrap_err();

        assert_matches!(err, CoreError::Internal(msg) if msg.contains("panicked"));
    }
}
