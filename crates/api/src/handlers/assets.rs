//! Handlers for asset listing and search.

use assetscope_core::collector::{DEFAULT_PAGE, DEFAULT_PER_PAGE};
use assetscope_core::types::{AssetPage, MatchOutcome};
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::query::{MatchRequest, PaginationParams};
use crate::state::AppState;

/// GET /assets
///
/// One page of normalized assets. `page` defaults to 1 and `per_page` to 5;
/// non-integer values are rejected.
pub async fn list_assets(
    State(state): State<AppState>,
    params: Result<Query<PaginationParams>, QueryRejection>,
) -> AppResult<Json<AssetPage>> {
    let Query(params) = params.map_err(|e| AppError::InvalidPagination(e.body_text()))?;
    let page = params.page.unwrap_or(DEFAULT_PAGE);
    let per_page = params.per_page.unwrap_or(DEFAULT_PER_PAGE);

    tracing::info!(page, per_page, "Received request to fetch assets");

    let assets = state.service.get_paginated_assets(page, per_page).await?;
    Ok(Json(assets))
}

/// POST /match
///
/// First asset whose name, model or IP address contains `search`
/// (case-insensitive), or `{"message": "No Asset Found"}`.
pub async fn match_asset(
    State(state): State<AppState>,
    body: Result<Json<MatchRequest>, JsonRejection>,
) -> AppResult<Json<MatchOutcome>> {
    let Json(request) = body.map_err(|e| AppError::InvalidSearch(e.body_text()))?;

    tracing::info!(query = %request.search, "Received search request");

    let outcome = state.service.find_asset_by_query(request.search).await?;
    Ok(Json(outcome))
}
