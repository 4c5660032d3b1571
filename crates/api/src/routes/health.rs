use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the asset directory can currently be listed.
    pub assets_dir_readable: bool,
}

/// GET /health -- returns service status and asset directory reachability.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let source = state.service.collector().source().clone();
    let assets_dir_readable =
        tokio::task::spawn_blocking(move || source.try_list_asset_files().is_ok())
            .await
            .unwrap_or(false);

    let status = if assets_dir_readable { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        assets_dir_readable,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
