use std::sync::Arc;

use axum::{routing::get, Router};
use axum_prometheus::PrometheusMetricLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use og_preview_server::cache::{CacheStore, MemoryStore, RedisStore};
use og_preview_server::config::{CacheBackend, Config};
use og_preview_server::handlers;
use og_preview_server::preview::{HttpFetcher, PreviewService};
use og_preview_server::state::AppState;

#[tokio::main]
async fn main() {
    // Initialize tracing — JSON in production, human-readable in dev.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("og_preview_server=info,tower_http=info"));

    if std::env::var("APP_ENV").as_deref() == Ok("production") {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    info!("🚀 OG preview server starting...");

    let config = Config::from_env().expect("Failed to load configuration");
    info!("📝 Configuration loaded");

    // One store connection for the whole process, handed to the service.
    let store: Arc<dyn CacheStore> = match config.cache_backend {
        CacheBackend::Redis => Arc::new(
            RedisStore::connect(&config.redis_url)
                .await
                .expect("Failed to connect to Redis"),
        ),
        CacheBackend::Memory => {
            tracing::warn!("🧠 Using in-process cache; entries are not shared between instances");
            Arc::new(MemoryStore::new())
        }
    };

    let fetcher = Arc::new(HttpFetcher::new(reqwest::Client::new()));

    let app_state = AppState {
        previews: PreviewService::new(store, fetcher),
    };

    let cors = if config.is_dev {
        info!("🔓 CORS: permissive (dev mode)");
        CorsLayer::permissive()
    } else {
        info!("🔒 CORS: restrictive (production mode)");
        CorsLayer::new()
    };

    let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();

    let app = Router::new()
        .route("/health", get(handlers::health_check))
        .route(
            "/metrics",
            get(move || async move { metric_handle.render() }),
        )
        .route("/preview", get(handlers::preview::get_preview))
        .layer(TraceLayer::new_for_http())
        .layer(prometheus_layer)
        .layer(cors)
        .with_state(app_state);

    let addr = config.server_addr();
    info!("🎧 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .await
        .expect("Server failed to start");
}
