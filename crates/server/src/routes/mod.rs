//! HTTP route handlers for the order API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health            - Health check
//!
//! # Orders
//! GET  /api/orders        - List all orders
//! GET  /api/order/{id}    - Fetch a single order
//! POST /api/order/create  - Create an order
//! ```

pub mod orders;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the full application router over the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/orders", get(orders::list))
        .route("/api/order/{id}", get(orders::get_by_id))
        .route("/api/order/create", post(orders::create))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "OK"
}
