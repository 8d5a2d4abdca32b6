pub mod debug;
pub mod demo;
pub mod mapping;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/routes/map", post(mapping::map_route))
        .route("/routes/demo", get(demo::demo_route))
        .route("/debug/health", get(debug::health_check))
        .with_state(state)
}
