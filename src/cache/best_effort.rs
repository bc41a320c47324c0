use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::cache::store::QuoteCache;

/// Cache handle that never fails the request path.
///
/// Read errors collapse into misses and write errors are dropped after
/// logging, so a broken store degrades the service to fetching upstream on
/// every request instead of surfacing errors to clients.
#[derive(Clone)]
pub struct BestEffortCache {
    inner: Arc<dyn QuoteCache + Send + Sync>,
}

impl BestEffortCache {
    pub fn new(inner: Arc<dyn QuoteCache + Send + Sync>) -> Self {
        Self { inner }
    }

    /// Look up `key`, treating any store error as a miss.
    pub async fn get(&self, key: &str) -> Option<String> {
        match self.inner.get(key).await {
            Ok(value) => value,
            Err(e) => {
                debug!("treating cache read error as miss: {e}");
                None
            }
        }
    }

    /// Store `content` under `key`; failures are logged and discarded.
    pub async fn put(&self, key: &str, content: &str, ttl: Duration) {
        if let Err(e) = self.inner.set(key, content, ttl).await {
            warn!("failed to cache quote under {key}: {e}");
        }
    }
}
