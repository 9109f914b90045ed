//! API routing
//!
//! - [`health`] - health check
//! - [`orders`] - order management
//! - [`invoices`] - invoice management

pub mod health;
pub mod invoices;
pub mod orders;

use axum::Router;
use axum::http::{HeaderValue, Method, header};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

/// Build the application router with tracing and CORS layers applied
pub fn router(state: ServerState) -> Router {
    let cors = cors_layer(&state.config.client_origin);

    Router::new()
        .merge(health::router())
        .merge(orders::router())
        .merge(invoices::router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// CORS for the admin UI: one configured origin, credentials allowed
fn cors_layer(client_origin: &str) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    match client_origin.parse::<HeaderValue>() {
        Ok(origin) => layer.allow_origin(origin),
        Err(_) => {
            tracing::warn!(origin = %client_origin, "Invalid CLIENT_ORIGIN, CORS origin not set");
            layer
        }
    }
}
