//! API Route Configuration

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{self, AppState};
use super::middleware::logging_middleware;

/// Create the router with the page flow, JSON API and middleware
pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/questions", get(handlers::get_questions))
        .route("/score", post(handlers::score_audit))
        .route("/stats", get(handlers::get_stats));

    Router::new()
        // Page flow
        .route("/", get(handlers::index))
        .route("/audit", post(handlers::start_audit))
        .route("/submit", post(handlers::submit_audit))
        .nest("/v1", api_v1)
        .route("/health", get(handlers::health_check))
        .fallback(handlers::not_found)
        .with_state(state)
        // Middleware (order matters - bottom runs first)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(middleware::from_fn(logging_middleware))
}
