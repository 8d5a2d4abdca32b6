use crate::models::{GeoPoint, MapRouteRequest, Route, RouteSegment};
use axum::Json;

/// GET /routes/demo
/// A small surveyed walking route (two street edges in Bengaluru) ready to
/// POST to /routes/map, with the vehicle position as point of interest.
pub async fn demo_route() -> Json<MapRouteRequest> {
    Json(cherry_hills_request())
}

fn cherry_hills_request() -> MapRouteRequest {
    let segments = vec![
        RouteSegment::new(points(&[
            (12.950268, 77.641723),
            (12.950299, 77.641718),
            (12.950325, 77.641718),
            (12.950351, 77.641720),
            (12.950385, 77.641731),
            (12.950408, 77.641742),
            (12.950439, 77.641744),
        ])),
        RouteSegment::new(points(&[
            (12.950441, 77.641796),
            (12.950427, 77.641839),
            (12.950419, 77.641892),
            (12.950414, 77.641951),
            (12.950401, 77.642013),
            (12.950388, 77.642072),
            (12.950375, 77.642144),
            (12.950376, 77.642187),
        ])),
    ];

    MapRouteRequest {
        route: Route::new(segments),
        reference_point: None,
        scale: None,
        // Vehicle waiting at the far end of the route.
        poi: Some(GeoPoint::new(12.950376, 77.642187)),
        shape_policy: None,
    }
}

fn points(pairs: &[(f64, f64)]) -> Vec<GeoPoint> {
    pairs
        .iter()
        .map(|&(lat, lng)| GeoPoint::new(lat, lng))
        .collect()
}
