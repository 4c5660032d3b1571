use assetscope_core::service::{ServiceError, FETCH_FAILED_MESSAGE, SEARCH_FAILED_MESSAGE};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Every variant renders as HTTP 500 with a `{"message": ...}` body. The
/// message names the operation that failed and never the cause.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A failure reported by the asset service.
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// `page` / `per_page` query parameters that are not integers.
    #[error("Invalid pagination parameters: {0}")]
    InvalidPagination(String),

    /// A `/match` body that is not a JSON object with a string `search`.
    #[error("Invalid search request: {0}")]
    InvalidSearch(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    fn public_message(&self) -> &'static str {
        match self {
            AppError::Service(ServiceError::Fetch(_)) | AppError::InvalidPagination(_) => {
                FETCH_FAILED_MESSAGE
            }
            AppError::Service(ServiceError::Search(_)) | AppError::InvalidSearch(_) => {
                SEARCH_FAILED_MESSAGE
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Service(err) => {
                tracing::error!(error = %err, cause = %err.cause(), "Asset service error");
            }
            AppError::InvalidPagination(detail) | AppError::InvalidSearch(detail) => {
                tracing::error!(error = %detail, "Rejected request");
            }
        }

        let body = json!({ "message": self.public_message() });

        (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
    }
}
