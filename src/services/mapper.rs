use crate::models::{GeoPoint, LocalPoint, MappedRoute, Route};

/// Maps geographic coordinates into the AR-local frame around a fixed
/// reference point.
///
/// Equirectangular local-tangent-plane approximation: one degree of latitude
/// and one degree of longitude are treated as the same physical distance,
/// scaled by a single constant. Error grows with distance from the reference
/// point and with latitude, which is acceptable for street-scale routes.
///
/// The reference point and scale are captured at construction and cannot
/// change mid-pass, so every point of a route is mapped against the same
/// origin. Mapping is pure: same input, same output, no side effects.
#[derive(Debug, Clone, Copy)]
pub struct CoordinateMapper {
    reference: GeoPoint,
    scale: f64,
}

impl CoordinateMapper {
    pub fn new(reference: GeoPoint, scale: f64) -> Self {
        CoordinateMapper { reference, scale }
    }

    pub fn reference(&self) -> GeoPoint {
        self.reference
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Map a single geographic point. The reference point maps to exactly
    /// (0, 0, 0). Increasing latitude goes to the AR "forward" (negative-z)
    /// direction; the signed latitude delta keeps left/right and
    /// forward/back relative positioning intact.
    pub fn map_point(&self, point: &GeoPoint) -> LocalPoint {
        let lng_delta = (point.lng - self.reference.lng) * self.scale;
        let lat_delta = (point.lat - self.reference.lat) * self.scale;
        LocalPoint::new(lng_delta, 0.0, -lat_delta)
    }

    /// Map a whole route. The output mirrors the input segment for segment
    /// and point for point; an empty route maps to an empty result.
    pub fn map_route(&self, route: &Route) -> MappedRoute {
        MappedRoute {
            segments: route
                .segments
                .iter()
                .map(|segment| segment.points.iter().map(|p| self.map_point(p)).collect())
                .collect(),
        }
    }
}
