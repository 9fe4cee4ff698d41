pub mod aabb;
pub mod angle;

pub use aabb::Aabb2;
pub use angle::{degrees_to_radians, linspace};
pub use glam::DVec2;

pub type Point2 = DVec2;
pub type Vector2 = DVec2;
