//! Campus Board Backend
//!
//! Serves the local entity store over HTTP, a SQLite-backed CRUD API, and an optional
//! wallet nonce handshake.

mod api;
mod auth;
mod config;
mod db;
mod errors;
mod models;
mod slots;
mod store;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use auth::NonceRegistry;
use config::Config;
use db::Repository;
use slots::{DurableSlots, FileSlots};
use store::{IdentityProvider, LocalStore};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub local: Arc<Mutex<LocalStore>>,
    pub identity: Arc<IdentityProvider>,
    pub nonces: Arc<NonceRegistry>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Campus Board Backend");
    tracing::info!("Database path: {:?}", config.db_path);
    tracing::info!("Slot directory: {:?}", config.slot_dir);
    tracing::info!("Bind address: {}", config.bind_addr);

    if config.wallet_auth {
        tracing::warn!("Wallet auth routes enabled; issued tokens are placeholders");
    }

    // Initialize database
    let pool = db::init_database(&config.db_path).await?;
    let repo = Arc::new(Repository::new(pool));

    if config.seed_demo_data {
        db::seed_database(&repo).await?;
    }

    // Load the local store from its slot
    let slots: Arc<dyn DurableSlots> = Arc::new(FileSlots::open(&config.slot_dir)?);
    let local = Arc::new(Mutex::new(LocalStore::load(slots.clone())?));

    let state = AppState {
        repo,
        local: local.clone(),
        identity: Arc::new(IdentityProvider::new(slots)),
        nonces: Arc::new(NonceRegistry::new(config.nonce_ttl)),
        config: Arc::new(config.clone()),
    };

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Final flush on shutdown
    local.lock().await.flush()?;
    tracing::info!("Local store flushed, shutting down");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let local_routes = Router::new()
        .route("/", get(api::get_local_snapshot))
        .route("/identity", get(api::resolve_identity))
        // Suggestions
        .route("/suggestions", get(api::list_local_suggestions))
        .route("/suggestions", post(api::create_local_suggestion))
        .route("/suggestions/{id}", get(api::get_local_suggestion))
        .route("/suggestions/{id}", put(api::update_local_suggestion))
        .route("/suggestions/{id}", delete(api::delete_local_suggestion))
        .route("/suggestions/{id}/vote", post(api::vote_local_suggestion))
        .route("/suggestions/{id}/replies", post(api::reply_local_suggestion))
        .route(
            "/suggestions/{id}/replies/{reply_id}",
            delete(api::delete_local_suggestion_reply),
        )
        // Notes
        .route("/notes", get(api::list_local_notes))
        .route("/notes", post(api::create_local_note))
        .route("/notes/{id}", get(api::get_local_note))
        .route("/notes/{id}", put(api::update_local_note))
        .route("/notes/{id}", delete(api::delete_local_note))
        .route("/notes/{id}/vote", post(api::vote_local_note))
        // Requests
        .route("/requests", get(api::list_local_requests))
        .route("/requests", post(api::create_local_request))
        .route("/requests/{id}", get(api::get_local_request))
        .route("/requests/{id}", put(api::update_local_request))
        .route("/requests/{id}", delete(api::delete_local_request))
        .route("/requests/{id}/fulfill", post(api::fulfill_local_request))
        // Threads
        .route("/threads", get(api::list_local_threads))
        .route("/threads", post(api::create_local_thread))
        .route("/threads/{id}", get(api::get_local_thread))
        .route("/threads/{id}", put(api::update_local_thread))
        .route("/threads/{id}", delete(api::delete_local_thread))
        .route("/threads/{id}/replies", post(api::reply_local_thread))
        .route(
            "/threads/{id}/replies/{reply_id}",
            delete(api::delete_local_thread_reply),
        );

    let mut api_routes = Router::new()
        .nest("/local", local_routes)
        // Remote tables
        .route("/suggestions", get(api::list_suggestions))
        .route("/suggestions", post(api::create_suggestion))
        .route("/notes", get(api::list_notes))
        .route("/notes", post(api::create_note))
        .route("/requests", get(api::list_requests))
        .route("/requests", post(api::create_request));

    if state.config.wallet_auth {
        api_routes = api_routes
            .route("/auth/nonce", get(api::issue_nonce))
            .route("/auth/verify", post(api::verify_wallet));
    }

    // Health check
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
