//! Tour CMS Backend
//!
//! REST backend for a tour-and-travel marketing site and its admin content
//! panel, with SQLite persistence.

mod api;
mod config;
mod db;
mod errors;
mod models;
mod slug;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use db::Repository;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Tour CMS Backend");
    tracing::info!("Database path: {:?}", config.db_path);
    tracing::info!("Bind address: {}", config.bind_addr);

    // Initialize database
    let pool = db::init_database(&config.db_path).await?;
    let repo = Arc::new(Repository::new(pool));

    if config.seed_demo_data {
        db::seed_demo_data(&repo).await?;
    }

    // Create application state
    let state = AppState {
        repo,
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

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

    // API routes
    let api_routes = Router::new()
        // Tours
        .route("/tours", get(api::list_tours))
        .route("/tours", post(api::create_tour))
        .route("/tours/published", get(api::list_published_tours))
        .route("/tours/slug/{slug}", get(api::get_tour_by_slug))
        .route("/tours/{id}", get(api::get_tour))
        .route("/tours/{id}", put(api::update_tour))
        .route("/tours/{id}", delete(api::delete_tour))
        .route("/tours/{id}/similar", get(api::similar_tours))
        // Blogs
        .route("/blogs", get(api::list_blogs))
        .route("/blogs", post(api::create_blog))
        .route("/blogs/published", get(api::list_published_blogs))
        .route("/blogs/slug/{slug}", get(api::get_blog_by_slug))
        .route("/blogs/{id}", get(api::get_blog))
        .route("/blogs/{id}", put(api::update_blog))
        .route("/blogs/{id}", delete(api::delete_blog))
        // Homepage
        .route("/homepage", get(api::get_homepage))
        .route("/homepage", put(api::update_homepage))
        .route("/homepage/featured-tours", get(api::featured_tours))
        // Contact messages
        .route("/messages", get(api::list_messages))
        .route("/messages", post(api::create_message))
        .route("/messages/{id}/read", put(api::mark_message_read))
        .route("/messages/{id}", delete(api::delete_message))
        // Dashboard
        .route("/dashboard/stats", get(api::dashboard_stats));

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

#[cfg(test)]
mod tests;
