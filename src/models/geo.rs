use serde::{Deserialize, Serialize};

/// A geographic coordinate in decimal degrees.
///
/// Plain data: the mapping core performs no range checking, so NaN or
/// out-of-range values propagate through the arithmetic. The HTTP layer
/// validates incoming points with [`GeoPoint::validate`] before they reach
/// the mapper.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        GeoPoint { lat, lng }
    }

    /// Boundary validation for API input.
    pub fn validate(&self) -> Result<(), String> {
        if !self.lat.is_finite() || !(-90.0..=90.0).contains(&self.lat) {
            return Err(format!(
                "Invalid latitude: {} (must be finite and between -90 and 90)",
                self.lat
            ));
        }
        if !self.lng.is_finite() || !(-180.0..=180.0).contains(&self.lng) {
            return Err(format!(
                "Invalid longitude: {} (must be finite and between -180 and 180)",
                self.lng
            ));
        }
        Ok(())
    }
}
