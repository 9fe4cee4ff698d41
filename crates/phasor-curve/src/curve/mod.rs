//! Curve traits and implementations.

mod phasor;

use phasor_core::Tolerance;
use phasor_math::{degrees_to_radians, Point2};

use crate::sweep::Sweep;

pub use phasor::{Phasor, PhasorSum};

/// Trait for planar curves parameterized by an angle in radians.
pub trait Curve: Send + Sync {
    /// Evaluate the curve at angle `theta`.
    fn point_at(&self, theta: f64) -> Point2;

    /// Upper bound on the distance of any curve point from the origin.
    fn max_radius(&self) -> f64;

    /// Whether the curve returns to its starting point at the end of `sweep`.
    fn is_closed_over(&self, sweep: &Sweep, tolerance: Tolerance) -> bool {
        let start = self.point_at(0.0);
        let end = self.point_at(degrees_to_radians(sweep.degrees));
        tolerance.is_zero((end - start).length())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_irrational_frequency_never_closes() {
        let curve = PhasorSum::default();
        assert!(!curve.is_closed_over(&Sweep::new(360.0, 4), Tolerance::default()));
        assert!(!curve.is_closed_over(&Sweep::default(), Tolerance::loose()));
    }

    #[test]
    fn test_integer_frequencies_close_after_one_turn() {
        let full_turn = Sweep::new(360.0, 4);
        let unit = PhasorSum::new(vec![Phasor::unit(1.0)]).unwrap();
        assert!(unit.is_closed_over(&full_turn, Tolerance::default()));
        let doubled = PhasorSum::with_frequency(2.0).unwrap();
        assert!(doubled.is_closed_over(&full_turn, Tolerance::default()));
    }
}
