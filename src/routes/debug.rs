use crate::constants::SCALE_PRESETS;
use crate::AppState;
use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;

/// GET /debug/health - liveness plus the effective mapping configuration
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "default_scale": state.config.default_scale,
        "scale_presets": SCALE_PRESETS,
    }))
}
