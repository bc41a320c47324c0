use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio::net::TcpListener;
use tokio::time;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use qotd::cache::{BestEffortCache, CacheConfig, RedisQuoteCache};
use qotd::http::{router, AppState};
use qotd::quote::HttpQuoteFetcher;

#[derive(Parser)]
#[command(name = "qotd")]
#[command(about = "Quote-of-the-day HTTP service")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Args {
    #[arg(short, long, default_value = "8080")]
    port: u16,

    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    #[arg(long)]
    debug: bool,
}

/// Upper bound on waiting for in-flight requests after a shutdown signal.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(10);

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let filter_level = if args.debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("qotd={filter_level},tower_http=info").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    dotenvy::dotenv().ok();

    let cache_config = CacheConfig::from_env();

    // A failed initial connection is fatal; transient cache errors after
    // startup degrade to misses instead.
    let redis = RedisQuoteCache::connect(&cache_config)
        .await
        .unwrap_or_else(|e| {
            panic!(
                "failed to connect to redis at {}:{}: {e}",
                cache_config.host, cache_config.port
            )
        });

    let state = AppState {
        cache: BestEffortCache::new(Arc::new(redis)),
        fetcher: Arc::new(HttpQuoteFetcher::new()),
    };

    let app = router(state);

    let bind_addr = format!("{}:{}", args.host, args.port);
    let listener = TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind to {bind_addr}: {e}"));

    info!("Quote server started on {}", bind_addr);
    info!("   curl http://{}/quote", bind_addr);

    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
    let mut server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.await;
            })
            .await
            .unwrap_or_else(|e| panic!("server error: {e}"));
    });

    tokio::select! {
        _ = shutdown_signal() => {
            // Stop accepting connections, then give in-flight requests a
            // bounded window to drain.
            let _ = shutdown_tx.send(());
            if time::timeout(SHUTDOWN_GRACE, &mut server).await.is_err() {
                warn!(
                    "in-flight requests did not finish within {}s",
                    SHUTDOWN_GRACE.as_secs()
                );
            }
        }
        result = &mut server => {
            result.unwrap_or_else(|e| panic!("server task failed: {e}"));
        }
    }

    info!("Shutting down");
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received terminate signal");
        },
    }
}
