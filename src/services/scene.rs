use crate::models::{Direction, MappedRoute, MarkerPlacement, ShapeKind, ShapePolicy};
use crate::services::classifier;
use rand::{Rng, RngExt};

/// Plans one marker per waypoint of a mapped route: position, sequential
/// label, shape kind, and an indicator heading derived from the direction of
/// travel toward the next waypoint.
///
/// Pure planning only. Node construction, materials and animation belong to
/// the rendering client.
#[derive(Debug, Clone, Copy)]
pub struct ScenePlanner {
    policy: ShapePolicy,
}

impl ScenePlanner {
    pub fn new(policy: ShapePolicy) -> Self {
        ScenePlanner { policy }
    }

    /// Walk the mapped route in iteration order and emit placements,
    /// structurally parallel to the input segments. Labels are 1-based and
    /// span segment boundaries. Each waypoint is oriented toward the next
    /// one (across segment boundaries too); the final waypoint keeps the
    /// heading it was approached with, and a single-waypoint route faces
    /// Forward.
    pub fn plan(&self, mapped: &MappedRoute) -> Vec<Vec<MarkerPlacement>> {
        let flat: Vec<_> = mapped.segments.iter().flatten().copied().collect();
        let mut rng = rand::rng();

        let mut placements = Vec::with_capacity(mapped.len());
        let mut index = 0usize;
        for segment in &mapped.segments {
            let mut markers = Vec::with_capacity(segment.len());
            for position in segment {
                let direction = if index + 1 < flat.len() {
                    classifier::classify(&flat[index], &flat[index + 1])
                } else if index > 0 {
                    classifier::classify(&flat[index - 1], &flat[index])
                } else {
                    Direction::Forward
                };
                markers.push(MarkerPlacement {
                    position: *position,
                    label: (index + 1) as u32,
                    shape: self.pick_shape(&mut rng),
                    direction,
                    yaw_radians: direction.yaw_radians(),
                });
                index += 1;
            }
            placements.push(markers);
        }
        placements
    }

    fn pick_shape<R: Rng>(&self, rng: &mut R) -> ShapeKind {
        match self.policy {
            ShapePolicy::Fixed(kind) => kind,
            ShapePolicy::Random => match rng.random_range(0..3) {
                0 => ShapeKind::Box,
                1 => ShapeKind::Pyramid,
                _ => ShapeKind::Capsule,
            },
        }
    }
}
