use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A point in the AR-local frame. (0, 0, 0) is the reference point of the
/// mapping pass that produced it; `y` is always 0 (no altitude modeling).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LocalPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl LocalPoint {
    pub const ORIGIN: LocalPoint = LocalPoint {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        LocalPoint { x, y, z }
    }
}

/// Local-frame counterpart of a [`Route`](crate::models::Route): same segment
/// count, same per-segment point count, same ordering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(transparent)]
pub struct MappedRoute {
    pub segments: Vec<Vec<LocalPoint>>,
}

impl MappedRoute {
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn waypoint_count(&self) -> usize {
        self.segments.iter().map(Vec::len).sum()
    }
}

/// Travel direction between two consecutive local-frame points.
///
/// The mapper puts "forward travel" (increasing latitude) on the negative-z
/// axis, so Forward means displacement toward -z.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Forward,
    Backward,
    Left,
    Right,
}

impl Direction {
    /// Rotation (radians, about the y axis) to apply to an indicator whose
    /// rest pose points toward -z.
    pub fn yaw_radians(&self) -> f64 {
        match self {
            Direction::Forward => 0.0,
            Direction::Left => std::f64::consts::FRAC_PI_2,
            Direction::Right => -std::f64::consts::FRAC_PI_2,
            Direction::Backward => std::f64::consts::PI,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Forward => write!(f, "forward"),
            Direction::Backward => write!(f, "backward"),
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
        }
    }
}

/// Marker geometry offered to the rendering client. A plain tagged variant;
/// the renderer maps each kind to its own node type.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Box,
    Pyramid,
    Capsule,
}

/// How the scene planner chooses marker geometry per waypoint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ShapePolicy {
    /// Every waypoint gets the same shape.
    Fixed(ShapeKind),
    /// Uniform pick among the three shape kinds.
    Random,
}

impl Default for ShapePolicy {
    fn default() -> Self {
        ShapePolicy::Fixed(ShapeKind::Capsule)
    }
}

impl FromStr for ShapePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "box" => Ok(ShapePolicy::Fixed(ShapeKind::Box)),
            "pyramid" => Ok(ShapePolicy::Fixed(ShapeKind::Pyramid)),
            "capsule" => Ok(ShapePolicy::Fixed(ShapeKind::Capsule)),
            "random" => Ok(ShapePolicy::Random),
            _ => Err(format!(
                "Invalid shape policy: '{}'. Use 'box', 'pyramid', 'capsule' or 'random'",
                s
            )),
        }
    }
}

/// Everything the rendering client needs to place one waypoint marker.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MarkerPlacement {
    pub position: LocalPoint,
    /// 1-based waypoint number, counted across all segments in order.
    pub label: u32,
    pub shape: ShapeKind,
    pub direction: Direction,
    /// Indicator rotation derived from `direction`, see
    /// [`Direction::yaw_radians`].
    pub yaw_radians: f64,
}
