//! MNM Chatbot Backend
//!
//! Customer-service assistant for the Montería Natación Máster swim club,
//! with SQLite persistence and Tantivy document retrieval.

mod api;
mod auth;
mod bot;
mod cache;
mod config;
mod consent;
mod db;
mod documents;
mod errors;
mod faq;
mod models;
mod search;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use bot::{ChatEngine, EngineOptions};
use cache::ResponseCache;
use config::{Config, LogFormat};
use db::Repository;
use search::SearchIndex;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub search: Arc<SearchIndex>,
    pub engine: Arc<ChatEngine>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Wire the chat engine around an opened repository and index.
    pub fn new(repo: Arc<Repository>, search: Arc<SearchIndex>, config: Config) -> Self {
        let cache = ResponseCache::new(repo.clone(), config.cache_enabled);
        let engine = ChatEngine::new(
            repo.clone(),
            search.clone(),
            cache,
            EngineOptions {
                search_results: config.search_results,
                max_message_len: config.max_message_len,
            },
        );

        Self {
            repo,
            search,
            engine: Arc::new(engine),
            config: Arc::new(config),
        }
    }
}

fn init_logging(config: &Config) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let registry = tracing_subscriber::registry().with(env_filter);
    match config.log_format {
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().with_target(false).json())
            .init(),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!("Starting MNM Chatbot Backend");
    tracing::info!("Database path: {:?}", config.db_path);
    tracing::info!("Index path: {:?}", config.index_path);
    tracing::info!("Documents path: {:?}", config.docs_path);
    tracing::info!("Bind address: {}", config.bind_addr);

    // Warn if PSK is not configured
    if config.api_psk.is_none() {
        tracing::warn!("No API PSK configured (MNM_API_PSK). Admin authentication is disabled!");
    }

    // Initialize database
    let pool = db::init_database(&config.db_path).await?;
    let repo = Arc::new(Repository::new(pool));

    // Initialize search index
    let search = Arc::new(SearchIndex::open(&config.index_path)?);

    // Ingest documents and build the search index from the database
    tracing::info!("Loading club documents...");
    let report = documents::reindex(&repo, &search, &config.docs_path).await?;
    tracing::info!(
        "Search index built with {} chunks ({} documents ingested, {} unchanged)",
        report.indexed_chunks,
        report.ingested.len(),
        report.unchanged.len()
    );

    let bind_addr = config.bind_addr;
    let state = AppState::new(repo, search, config);

    if report.has_changes() {
        state.engine.cache().clear().await;
    } else {
        let purged = state.engine.cache().purge_expired().await;
        if purged > 0 {
            tracing::info!("Purged {} expired cache entries", purged);
        }
    }

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    tracing::info!("Server listening on {}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Clone PSK for the auth layer
    let psk = state.config.api_psk.clone();

    // Admin routes
    let admin_routes = Router::new()
        .route("/consents", get(api::list_consents))
        .route("/consents/{id}", get(api::get_consent))
        .route("/documents", get(api::list_documents))
        .route("/documents/reindex", post(api::reindex_documents))
        .route("/cache", delete(api::clear_cache))
        // Apply PSK auth middleware
        .layer(middleware::from_fn(move |req, next| {
            auth::psk_auth_layer(psk.clone(), req, next)
        }));

    // Public API routes
    let api_routes = Router::new()
        .route("/welcome", get(api::get_welcome))
        .route("/quick-queries", get(api::list_quick_queries))
        .route("/enrollment/steps/{step}", get(api::get_enrollment_step))
        .route("/chat", post(api::post_chat))
        .route("/conversations/{id}", get(api::get_conversation))
        .route("/conversations/{id}/messages", get(api::list_messages))
        .route("/documents/search", get(api::search_documents))
        .route("/consents", post(api::create_consent))
        .nest("/admin", admin_routes);

    // Health check (no auth required)
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
