use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::preview::ResolveError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Preview error: {0}")]
    Resolve(#[from] ResolveError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message): (StatusCode, String) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Resolve(ResolveError::FetchFailed(e)) => {
                tracing::warn!(error = ?e, "Preview fetch failed");
                // 504 needs a fetch client configured with a timeout.
                let status = if e.is_timeout() {
                    StatusCode::GATEWAY_TIMEOUT
                } else {
                    StatusCode::BAD_GATEWAY
                };
                (status, e.to_string())
            }
            AppError::Resolve(ResolveError::CacheUnavailable(e)) => {
                tracing::error!(error = ?e, "Preview cache unavailable");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Cache unavailable".into(),
                )
            }
            AppError::Resolve(ResolveError::CacheCorrupt(e)) => {
                tracing::error!(error = ?e, "Corrupt preview cache entry");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".into(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
