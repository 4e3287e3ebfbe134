use std::time::Duration;

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use tracing::info;

use super::{CacheStore, StoreResult};

/// Redis-backed store. Values are written with `SETEX`, so expiry is enforced
/// by Redis itself.
#[derive(Clone)]
pub struct RedisStore {
    conn: ConnectionManager,
}

impl RedisStore {
    /// Open a managed connection to `redis_url` and verify it with `PING`.
    pub async fn connect(redis_url: &str) -> StoreResult<Self> {
        info!("🔌 Connecting to Redis...");

        let client = redis::Client::open(redis_url).map_err(|e| {
            tracing::error!("Invalid Redis URL: {:?}", e);
            e
        })?;
        let conn = ConnectionManager::new(client).await.map_err(|e| {
            tracing::error!("Failed to connect to Redis: {:?}", e);
            e
        })?;

        let store = Self { conn };
        store.ping().await?;

        info!("✅ Redis connection established");
        Ok(store)
    }
}

#[async_trait]
impl CacheStore for RedisStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let mut conn = self.conn.clone();
        let value: Option<String> = conn.get(key).await?;
        Ok(value)
    }

    async fn set_with_ttl(&self, key: &str, value: &str, ttl: Duration) -> StoreResult<()> {
        let mut conn = self.conn.clone();
        // SETEX rejects a zero expiry.
        let seconds = ttl.as_secs().max(1);
        conn.set_ex::<_, _, ()>(key, value, seconds).await?;
        Ok(())
    }

    async fn ping(&self) -> StoreResult<()> {
        let mut conn = self.conn.clone();
        let _pong: String = redis::cmd("PING").query_async(&mut conn).await?;
        Ok(())
    }
}
