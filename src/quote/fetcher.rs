use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::quote::error::FetchError;
use crate::quote::types::Quote;

/// Upstream random-quote endpoint.
const RANDOM_QUOTE_URL: &str = "https://api.quotable.io/random";

/// Source of fresh quotes.
#[async_trait]
pub trait QuoteFetcher {
    /// Fetch one random quote from upstream. A single failure surfaces to
    /// the caller; there is no retry.
    async fn fetch(&self) -> Result<Quote, FetchError>;
}

/// Fetches quotes from the public random-quote API over HTTP.
pub struct HttpQuoteFetcher {
    client: Client,
    endpoint: String,
}

impl Default for HttpQuoteFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpQuoteFetcher {
    pub fn new() -> Self {
        Self::with_endpoint(RANDOM_QUOTE_URL)
    }

    /// Point the fetcher at an alternate endpoint.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl QuoteFetcher for HttpQuoteFetcher {
    async fn fetch(&self) -> Result<Quote, FetchError> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let quote = response
            .json::<Quote>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))?;

        debug!("fetched quote {} by {}", quote.id, quote.author);
        Ok(quote)
    }
}
