use axum::Json;
use serde_json::{json, Value};

/// GET /health - liveness probe.
pub async fn handle_health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "counsel-api",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
