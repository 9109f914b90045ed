//! Health check route

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/health", get(health))
}

#[derive(Serialize)]
pub struct HealthResponse {
    /// ok | degraded
    status: &'static str,
    version: &'static str,
    /// ok | error
    database: &'static str,
}

pub async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    let db_ok = state
        .db
        .query("RETURN 1")
        .await
        .and_then(|r| r.check())
        .is_ok();

    Json(HealthResponse {
        status: if db_ok { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        database: if db_ok { "ok" } else { "error" },
    })
}
