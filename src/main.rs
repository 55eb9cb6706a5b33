// src/main.rs

use std::net::SocketAddr;
use std::sync::Arc;

use cloudprep::config::Config;
use cloudprep::mappings::MappingCatalog;
use cloudprep::routes;
use cloudprep::sources::HttpStore;
use cloudprep::state::AppState;
use dotenvy::dotenv;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenv().ok();

    // Load configuration from environment
    let config = Config::from_env();

    let file_appender = tracing_appender::rolling::daily("logs", "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::new(&config.rust_log);
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    // Initialize Tracing (Logging)
    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    // Mapping tables are built once and shared read-only
    let catalog = match MappingCatalog::builtin() {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!("Failed to load mapping tables: {:?}", e);
            return;
        }
    };
    tracing::info!("Mapping tables loaded, {} services known", catalog.services().len());

    let store = match HttpStore::from_config(&config) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("Failed to build HTTP client: {:?}", e);
            return;
        }
    };
    tracing::info!("Exam data served from {}", config.exam_bucket_url);

    // Create AppState
    let state = AppState {
        config: config.clone(),
        catalog: Arc::new(catalog),
        store: Arc::new(store),
    };

    // Create the Axum application router
    let app = routes::create_router(state);

    // Bind to the listening address
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listening address");

    // Start the server
    axum::serve(listener, app).await.expect("Server error");
}
