pub mod auth;
mod handlers;
mod routes;

use crate::config::Config;
use crate::db::{Database, DbPool};
use crate::media_store::MediaStore;
use crate::moderation::{LogNotifier, ModerationNotifier};
use anyhow::Result;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Shared state for all API handlers.
#[derive(Clone)]
pub struct AppState {
    pub db: DbPool,
    pub media: MediaStore,
    pub notifier: Arc<dyn ModerationNotifier>,
}

/// Start the API server
pub async fn start_api_server(db: Arc<Database>) -> Result<()> {
    let config = Config::get();

    let state = AppState {
        db: db.get_pool().clone(),
        media: MediaStore::new(&config.media.root, &config.media.public_prefix),
        notifier: Arc::new(LogNotifier),
    };

    // Set up CORS
    let cors = if config.server.enable_cors {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
    };

    // Create router with all routes
    let app = Router::new()
        // General routes
        .route("/health", get(handlers::health::health_check))
        // Listing routes
        .route(
            "/api/listings",
            post(handlers::listings::create_listing).get(handlers::listings::get_listings),
        )
        .route("/api/listings/:id", get(handlers::listings::get_listing))
        // Add state and middleware
        .with_state(state)
        .layer(DefaultBodyLimit::max(config.server.max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Get bind address
    let addr = format!("{}:{}", config.server.host, config.server.port).parse::<SocketAddr>()?;

    // Start server
    info!("Starting API server on {}", addr);
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}
