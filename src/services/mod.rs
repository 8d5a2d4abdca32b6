pub mod classifier;
pub mod mapper;
pub mod scene;

pub use classifier::classify;
pub use mapper::CoordinateMapper;
pub use scene::ScenePlanner;
