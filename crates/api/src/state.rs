use assetscope_core::service::AssetService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; the service holds no per-request state.
#[derive(Clone)]
pub struct AppState {
    /// Asset query façade over the configured directory.
    pub service: AssetService,
}
