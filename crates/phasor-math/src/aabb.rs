use crate::{Point2, Vector2};
use serde::{Deserialize, Serialize};

/// Axis-Aligned Bounding Box in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb2 {
    pub min: Point2,
    pub max: Point2,
}

impl Aabb2 {
    pub fn new(min: Point2, max: Point2) -> Self {
        Self { min, max }
    }

    pub fn from_points(points: &[Point2]) -> Option<Self> {
        let (&first, rest) = points.split_first()?;
        let mut min = first;
        let mut max = first;
        for &p in rest {
            min = min.min(p);
            max = max.max(p);
        }
        Some(Self { min, max })
    }

    pub fn center(&self) -> Point2 {
        (self.min + self.max) * 0.5
    }

    pub fn extents(&self) -> Vector2 {
        self.max - self.min
    }

    /// Grow each side by `fraction` of the extent along that axis.
    pub fn with_margin(&self, fraction: f64) -> Self {
        let offset = self.extents() * fraction;
        Self {
            min: self.min - offset,
            max: self.max + offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::dvec2;

    #[test]
    fn test_from_points() {
        let pts = vec![dvec2(1.0, 2.0), dvec2(-1.0, 5.0), dvec2(3.0, -1.0)];
        let aabb = Aabb2::from_points(&pts).unwrap();
        assert_eq!(aabb.min, dvec2(-1.0, -1.0));
        assert_eq!(aabb.max, dvec2(3.0, 5.0));
    }

    #[test]
    fn test_from_points_empty() {
        assert!(Aabb2::from_points(&[]).is_none());
    }

    #[test]
    fn test_center_and_extents() {
        let aabb = Aabb2::new(dvec2(-1.0, 0.0), dvec2(3.0, 2.0));
        assert_eq!(aabb.center(), dvec2(1.0, 1.0));
        assert_eq!(aabb.extents(), dvec2(4.0, 2.0));
    }

    #[test]
    fn test_with_margin() {
        let aabb = Aabb2::new(dvec2(-2.0, -1.0), dvec2(2.0, 1.0)).with_margin(0.05);
        assert_relative_eq!(aabb.min.x, -2.2);
        assert_relative_eq!(aabb.min.y, -1.1);
        assert_relative_eq!(aabb.max.x, 2.2);
        assert_relative_eq!(aabb.max.y, 1.1);
    }
}
