//! Route definitions for asset listing and search.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::assets;
use crate::state::AppState;

/// Asset routes, mounted at the root.
///
/// ```text
/// GET  /assets -> list_assets
/// POST /match  -> match_asset
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/assets", get(assets::list_assets))
        .route("/match", post(assets::match_asset))
}
