use axum::Json;
use serde_json::{Value, json};

/// Health check. Fixed body so callers can byte-match it.
pub async fn health_check() -> Json<Value> {
    Json(json!({ "message": "OK" }))
}
