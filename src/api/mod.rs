//! Local HTTP adapter

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

pub mod handlers;

/// Build the API router
pub fn create_router() -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/is-positive", get(handlers::is_positive))
        .route("/invoke", post(handlers::invoke))
        .layer(TraceLayer::new_for_http())
}
