//! HTTP handlers for the store service.

use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;

use crate::models::BlurbRecord;
use crate::startup::AppState;

/// Fixed status message.
pub async fn root() -> impl IntoResponse {
    Json(json!({
        "message": "Blurb Store API is running.",
        "usage": "GET /blurbs to list records, POST /blurbs to append one"
    }))
}

/// Liveness probe.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "store-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// List all stored blurbs in insertion order.
pub async fn list_blurbs(State(state): State<AppState>) -> Json<Vec<BlurbRecord>> {
    Json(state.repository.list().await)
}

/// Append a blurb record and echo it back.
///
/// Malformed bodies never reach this handler; the `Json` extractor
/// rejects them with a framework-standard status.
pub async fn create_blurb(
    State(state): State<AppState>,
    Json(record): Json<BlurbRecord>,
) -> Json<BlurbRecord> {
    let stored = state.repository.append(record).await;
    tracing::info!(id = stored.id, blurb_type = %stored.blurb_type, "Stored blurb record");
    Json(stored)
}
