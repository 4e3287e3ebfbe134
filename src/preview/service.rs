use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, warn};

use super::extract::extract;
use super::fetch::{FetchError, PageFetcher};
use crate::cache::{CacheStore, StoreError};
use crate::models::MetadataRecord;

/// How long a resolved record stays in the cache.
pub const CACHE_TTL: Duration = Duration::from_secs(3600);

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("failed to decode cached data: {0}")]
    CacheCorrupt(#[source] serde_json::Error),

    #[error("failed to get data from cache: {0}")]
    CacheUnavailable(#[source] StoreError),

    #[error("failed to fetch html: {0}")]
    FetchFailed(#[from] FetchError),
}

/// Cache-aside resolution of preview metadata.
///
/// Lookups go to the store first, keyed by the requested URL exactly as
/// given. Misses fetch and parse the page, then write the record back with
/// [`CACHE_TTL`]. The write is best-effort: if it fails the record is still
/// returned. Concurrent misses for the same URL are not coalesced.
#[derive(Clone)]
pub struct PreviewService {
    store: Arc<dyn CacheStore>,
    fetcher: Arc<dyn PageFetcher>,
    ttl: Duration,
}

impl PreviewService {
    pub fn new(store: Arc<dyn CacheStore>, fetcher: Arc<dyn PageFetcher>) -> Self {
        Self {
            store,
            fetcher,
            ttl: CACHE_TTL,
        }
    }

    pub fn store(&self) -> &Arc<dyn CacheStore> {
        &self.store
    }

    pub async fn resolve(&self, url: &str) -> Result<MetadataRecord, ResolveError> {
        match self.store.get(url).await {
            Ok(Some(cached)) => {
                debug!(url = %url, "Preview cache hit");
                serde_json::from_str(&cached).map_err(ResolveError::CacheCorrupt)
            }
            Ok(None) => {
                debug!(url = %url, "Preview cache miss");
                self.fetch_and_store(url).await
            }
            Err(e) => Err(ResolveError::CacheUnavailable(e)),
        }
    }

    async fn fetch_and_store(&self, url: &str) -> Result<MetadataRecord, ResolveError> {
        let doc = self.fetcher.fetch(url).await?;
        let record = extract(&doc);

        match serde_json::to_string(&record) {
            Ok(encoded) => {
                if let Err(e) = self.store.set_with_ttl(url, &encoded, self.ttl).await {
                    warn!(error = ?e, url = %url, "Failed to write preview to cache");
                }
            }
            Err(e) => warn!(error = ?e, url = %url, "Failed to encode preview for cache"),
        }

        Ok(record)
    }
}
