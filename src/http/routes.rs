use std::sync::Arc;
use std::time::Duration;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::cache::BestEffortCache;
use crate::quote::QuoteFetcher;

/// How long a day's quote stays cached.
pub const QUOTE_TTL: Duration = Duration::from_secs(24 * 60 * 60);

const WELCOME: &str = "Welcome to the quote of the day! GET /quote for today's quote.\n";

#[derive(Clone)]
pub struct AppState {
    pub cache: BestEffortCache,
    pub fetcher: Arc<dyn QuoteFetcher + Send + Sync>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/quote", get(quote_of_the_day))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn index() -> &'static str {
    WELCOME
}

async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Serve today's quote, fetching and caching it on the first request of the
/// day.
///
/// Every path responds 200: an upstream failure puts the error text in the
/// body instead of setting an error status.
async fn quote_of_the_day(State(state): State<AppState>) -> String {
    let date_key = today_key();

    if let Some(cached) = state.cache.get(&date_key).await {
        debug!("serving cached quote for {date_key}");
        return cached;
    }

    match state.fetcher.fetch().await {
        Ok(quote) => {
            info!("fetched new quote for {date_key}");
            state.cache.put(&date_key, &quote.content, QUOTE_TTL).await;
            quote.content
        }
        Err(e) => e.to_string(),
    }
}

/// Day-granularity cache key from the process-local clock.
pub fn today_key() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_today_key_is_day_granular_iso_date() {
        let key = today_key();

        assert_eq!(key.len(), 10);
        chrono::NaiveDate::parse_from_str(&key, "%Y-%m-%d").unwrap();
    }
}
