use crate::constants::SCALE_PRESETS;
use crate::models::{GeoPoint, LocalPoint, MappedRoute, MarkerPlacement, ShapePolicy};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One contiguous run of waypoints (a street edge). Order defines the
/// direction of travel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(transparent)]
pub struct RouteSegment {
    pub points: Vec<GeoPoint>,
}

impl RouteSegment {
    pub fn new(points: Vec<GeoPoint>) -> Self {
        RouteSegment { points }
    }
}

/// An ordered sequence of segments. Segments are assumed contiguous (the
/// last point of segment i sits near the first point of segment i+1), but
/// this is not enforced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(transparent)]
pub struct Route {
    pub segments: Vec<RouteSegment>,
}

impl Route {
    pub fn new(segments: Vec<RouteSegment>) -> Self {
        Route { segments }
    }

    /// Conventional reference point: the first point of the first segment.
    pub fn reference_point(&self) -> Option<GeoPoint> {
        self.segments
            .first()
            .and_then(|segment| segment.points.first())
            .copied()
    }

    pub fn waypoint_count(&self) -> usize {
        self.segments.iter().map(|s| s.points.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// POST /routes/map request body.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MapRouteRequest {
    pub route: Route,
    /// Defaults to the first point of the route's first segment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_point: Option<GeoPoint>,
    /// Defaults to the configured world scale. Must be one of the presets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    /// Optional point of interest (e.g. a vehicle position) mapped with the
    /// same reference point and scale as the route.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poi: Option<GeoPoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape_policy: Option<ShapePolicy>,
}

impl MapRouteRequest {
    /// Boundary validation. The mapping core itself never validates input.
    pub fn validate(&self) -> Result<(), String> {
        for segment in &self.route.segments {
            for point in &segment.points {
                point.validate()?;
            }
        }
        if let Some(ref reference) = self.reference_point {
            reference.validate()?;
        }
        if let Some(ref poi) = self.poi {
            poi.validate()?;
        }
        if let Some(scale) = self.scale {
            if !SCALE_PRESETS.contains(&scale) {
                return Err(format!(
                    "Invalid scale: {} (must be one of {:?})",
                    scale, SCALE_PRESETS
                ));
            }
        }
        Ok(())
    }

    /// Reference point to map against: the explicit one if given, otherwise
    /// the route's conventional first point.
    pub fn reference(&self) -> Option<GeoPoint> {
        self.reference_point.or_else(|| self.route.reference_point())
    }
}

/// POST /routes/map response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapRouteResponse {
    pub id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_point: Option<GeoPoint>,
    pub scale: f64,
    pub segments: MappedRoute,
    pub placements: Vec<Vec<MarkerPlacement>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poi: Option<LocalPoint>,
}
