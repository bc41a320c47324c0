use std::time::Duration;

use async_trait::async_trait;

use crate::cache::error::CacheError;

/// Key-value access to the daily quote store.
///
/// Keys are calendar dates at day granularity; implementations must be safe
/// to share across concurrently handled requests.
#[async_trait]
pub trait QuoteCache {
    /// Look up the content cached under `key`. `Ok(None)` means not found.
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Store `content` under `key`, expiring after `ttl`.
    async fn set(&self, key: &str, content: &str, ttl: Duration) -> Result<(), CacheError>;
}
