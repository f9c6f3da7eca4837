use axum::{extract::State, routing::get, Json, Router};
use journal_core::TracingSink;
use serde_json::{json, Value};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Health check routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(liveness))
        .route("/health/ready", get(readiness))
}

/// Liveness check. Makes no provider call.
async fn liveness() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Readiness: the content provider answers a collection query.
async fn readiness(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let items = state
        .adapter()
        .list_published_items(&mut TracingSink)
        .await
        .map_err(|e| ApiError::Internal(format!("content provider check failed: {e}")))?;

    Ok(Json(json!({
        "status": "ok",
        "provider": "reachable",
        "published": items.len(),
    })))
}
