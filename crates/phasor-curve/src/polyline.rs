//! Ordered sequences of sampled curve points.

use phasor_math::{Aabb2, Point2};
use serde::{Deserialize, Serialize};

/// Sampled curve points in sweep order; consecutive points are joined by segments.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<Point2>,
}

impl Polyline {
    pub fn new(points: Vec<Point2>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<Point2> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<Point2> {
        self.points.last().copied()
    }

    /// The x coordinate sequence.
    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    /// The y coordinate sequence.
    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }

    pub fn bounds(&self) -> Option<Aabb2> {
        Aabb2::from_points(&self.points)
    }

    /// Largest distance of any point from the origin.
    pub fn max_radius(&self) -> f64 {
        self.points.iter().map(|p| p.length()).fold(0.0, f64::max)
    }
}
