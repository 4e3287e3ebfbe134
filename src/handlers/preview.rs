use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::models::MetadataRecord;
use crate::state::AppState;

/// Query pairs in request order. Kept as a list so a repeated `url` does not
/// fail extraction.
pub type PreviewQuery = Vec<(String, String)>;

/// First `url` value in the query, or `""` when absent.
pub fn url_param(pairs: &[(String, String)]) -> &str {
    pairs
        .iter()
        .find(|(key, _)| key == "url")
        .map(|(_, value)| value.as_str())
        .unwrap_or_default()
}

/// GET /preview?url=<encoded-url>
///
/// Returns the page's Open Graph metadata, served from cache for an hour
/// after the first successful fetch. When `url` is given more than once the
/// first value is used.
pub async fn get_preview(
    State(state): State<AppState>,
    query: Result<Query<PreviewQuery>, QueryRejection>,
) -> AppResult<Json<MetadataRecord>> {
    let Query(pairs) = query.map_err(|e| AppError::Validation(e.body_text()))?;

    let url = url_param(&pairs);
    if url.is_empty() {
        return Err(AppError::Validation("url is required".into()));
    }

    tracing::info!(url = %url, "Preview requested");
    let record = state.previews.resolve(url).await?;
    Ok(Json(record))
}
