use std::time::Duration;

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use tracing::{debug, info};

use crate::cache::config::CacheConfig;
use crate::cache::error::CacheError;
use crate::cache::store::QuoteCache;

/// Redis-backed quote store.
///
/// The connection manager multiplexes a single connection and is cheap to
/// clone, so one instance serves every request task concurrently.
pub struct RedisQuoteCache {
    conn: ConnectionManager,
}

impl RedisQuoteCache {
    /// Connect to Redis and verify the server is reachable with a PING.
    pub async fn connect(config: &CacheConfig) -> Result<Self, CacheError> {
        let client = redis::Client::open(config.url())
            .map_err(|e| CacheError::Connect(e.to_string()))?;
        let mut conn = ConnectionManager::new(client)
            .await
            .map_err(|e| CacheError::Connect(e.to_string()))?;

        let _: String = redis::cmd("PING").query_async(&mut conn).await?;
        info!("Connected to redis at {}:{}", config.host, config.port);

        Ok(Self { conn })
    }
}

#[async_trait]
impl QuoteCache for RedisQuoteCache {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let mut conn = self.conn.clone();
        let value: Option<String> = conn.get(key).await?;
        debug!(
            "cache get {}: {}",
            key,
            if value.is_some() { "hit" } else { "miss" }
        );
        Ok(value)
    }

    async fn set(&self, key: &str, content: &str, ttl: Duration) -> Result<(), CacheError> {
        let mut conn = self.conn.clone();
        let _: () = conn.set_ex(key, content, ttl.as_secs()).await?;
        debug!("cached quote under {} for {}s", key, ttl.as_secs());
        Ok(())
    }
}
