pub mod geo;
pub mod local;
pub mod route;

pub use geo::GeoPoint;
pub use local::{Direction, LocalPoint, MappedRoute, MarkerPlacement, ShapeKind, ShapePolicy};
pub use route::{MapRouteRequest, MapRouteResponse, Route, RouteSegment};
