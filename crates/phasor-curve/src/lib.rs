//! Phasor curve generation: sums of rotating complex exponentials sampled
//! over an evenly spaced sweep of angles.

pub mod config;
pub mod curve;
pub mod polyline;
pub mod sample;
pub mod sweep;

pub use config::CurveConfig;
pub use curve::{Curve, Phasor, PhasorSum};
pub use polyline::Polyline;
pub use sample::{generate, sample, PARALLEL_THRESHOLD};
pub use sweep::Sweep;
