use crate::error::{AppError, Result};
use crate::models::{MapRouteRequest, MapRouteResponse, MappedRoute};
use crate::services::{CoordinateMapper, ScenePlanner};
use crate::AppState;
use axum::{extract::State, Json};
use std::sync::Arc;
use uuid::Uuid;

/// POST /routes/map
/// Map a geographic route into the AR-local frame and plan marker placements.
pub async fn map_route(
    State(state): State<Arc<AppState>>,
    Json(request): Json<MapRouteRequest>,
) -> Result<Json<MapRouteResponse>> {
    // Validate request
    request.validate().map_err(AppError::InvalidRequest)?;

    let scale = request.scale.unwrap_or(state.config.default_scale);

    let reference = match request.reference() {
        Some(reference) => reference,
        None => {
            if request.poi.is_some() || request.route.waypoint_count() > 0 {
                return Err(AppError::InvalidRequest(
                    "reference_point is required when the route's first segment is empty"
                        .to_string(),
                ));
            }
            // Nothing to map at all.
            return Ok(Json(MapRouteResponse {
                id: Uuid::new_v4(),
                reference_point: None,
                scale,
                segments: MappedRoute::default(),
                placements: Vec::new(),
                poi: None,
            }));
        }
    };

    tracing::info!(
        lat = reference.lat,
        lng = reference.lng,
        scale,
        segments = request.route.segments.len(),
        waypoints = request.route.waypoint_count(),
        "Mapping route: reference ({:.4}, {:.4}), scale {}",
        reference.lat,
        reference.lng,
        scale
    );

    let mapper = CoordinateMapper::new(reference, scale);
    let mapped = mapper.map_route(&request.route);
    let poi = request.poi.map(|p| mapper.map_point(&p));

    let policy = request.shape_policy.unwrap_or(state.config.shape_policy);
    let placements = ScenePlanner::new(policy).plan(&mapped);

    Ok(Json(MapRouteResponse {
        id: Uuid::new_v4(),
        reference_point: Some(reference),
        scale,
        segments: mapped,
        placements,
        poi,
    }))
}
