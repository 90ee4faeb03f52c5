use axum::{
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use crate::config::ServeSettings;
use crate::storage::SqliteStore;

pub mod error;
pub mod routes;


/// Server state
///
/// The store is the only shared state. Each handler takes the lock for a
/// single statement and releases it before responding.
pub struct AppState {
    pub store: Mutex<SqliteStore>,
}

impl AppState {
    pub fn new(store: SqliteStore) -> Arc<Self> {
        Arc::new(Self {
            store: Mutex::new(store),
        })
    }
}

/// Build the API router with the frontend document root as fallback.
pub fn router(state: Arc<AppState>, static_dir: &Path) -> Router {
    Router::new()
        .route(
            "/api/stories",
            get(routes::list_stories).post(routes::create_story),
        )
        .route(
            "/api/proverbs",
            get(routes::list_proverbs).post(routes::create_proverb),
        )
        .route("/api/languages", get(routes::list_languages))
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn start_server(settings: ServeSettings) -> anyhow::Result<()> {
    crate::config::ensure_db_dir(&settings.database)?;
    let store = SqliteStore::open(&settings.database)?;
    tracing::info!("Opened database {}", settings.database.display());

    if !settings.static_dir.is_dir() {
        tracing::warn!(
            "Frontend directory {} not found; only the API will be served",
            settings.static_dir.display()
        );
    }

    let app = router(AppState::new(store), &settings.static_dir);

    let addr = SocketAddr::new(settings.host, settings.port);
    tracing::info!("Starting server on {}", addr);
    if !crate::output::is_quiet() {
        crate::ui::header(&format!("Server running at http://{}", addr));
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
