pub mod preview;

use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use crate::state::AppState;

pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let cache_ok = match state.previews.store().ping().await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = ?e, "Health check: cache ping failed");
            false
        }
    };

    let http_status = if cache_ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        http_status,
        Json(json!({
            "status": if cache_ok { "ok" } else { "degraded" },
            "service": "og-preview-server",
            "version": env!("CARGO_PKG_VERSION"),
            "cache": if cache_ok { "ok" } else { "unavailable" },
        })),
    )
}
