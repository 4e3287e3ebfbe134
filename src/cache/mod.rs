//! Key-value stores backing the preview cache.
//!
//! [`CacheStore`] is the only surface the preview service sees. Two backends
//! implement it:
//! - [`RedisStore`] - shared Redis instance, used in every deployment
//! - [`MemoryStore`] - in-process map for local development and tests

mod memory;
mod redis;

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

pub use self::memory::MemoryStore;
pub use self::redis::RedisStore;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Redis error: {0}")]
    Redis(#[from] ::redis::RedisError),

    #[error("Cache store unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// String-keyed store with per-entry expiry.
///
/// `get` returns `Ok(None)` when the key is absent or expired. That outcome is
/// distinct from `Err`, which means the store itself could not be reached.
#[async_trait]
pub trait CacheStore: Send + Sync {
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Write `value` under `key`, replacing any previous entry. The entry
    /// expires `ttl` after the write.
    async fn set_with_ttl(&self, key: &str, value: &str, ttl: Duration) -> StoreResult<()>;

    /// Round-trip to the backend; used by the health endpoint.
    async fn ping(&self) -> StoreResult<()>;
}
