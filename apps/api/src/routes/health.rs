use axum::Json;
use serde_json::{json, Value};

/// GET /health
/// Fixed liveness payload.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "OK",
        "message": "C-VisioN Backend is running"
    }))
}
