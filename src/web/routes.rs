//! Route definitions

use super::handlers;
use super::state::AppState;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::index).post(handlers::search))
        .route("/export", get(handlers::export))
        .route("/health", get(handlers::health))
        .route("/favicon.ico", get(handlers::favicon))
        .layer(cors)
        .with_state(state)
}
