use crate::models::{Direction, LocalPoint};

/// Classify the travel direction between two consecutive local-frame points.
///
/// The dominant displacement axis decides lateral vs longitudinal movement;
/// an exact |dx| == |dz| tie counts as longitudinal. The mapper encodes
/// forward travel as negative z, so dz < 0 is Forward. Zero displacement
/// (repeated waypoints) defaults to Forward instead of failing.
pub fn classify(from: &LocalPoint, to: &LocalPoint) -> Direction {
    let dx = to.x - from.x;
    let dz = to.z - from.z;

    if dx == 0.0 && dz == 0.0 {
        return Direction::Forward;
    }
    if dx.abs() > dz.abs() {
        if dx > 0.0 {
            Direction::Right
        } else {
            Direction::Left
        }
    } else if dz > 0.0 {
        Direction::Backward
    } else {
        Direction::Forward
    }
}
