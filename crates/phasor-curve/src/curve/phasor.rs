//! Sums of rotating complex exponentials.

use std::f64::consts::PI;

use phasor_core::{PhasorError, Result, Validate};
use phasor_math::Point2;
use serde::{Deserialize, Serialize};

use super::Curve;

/// One rotating term `amplitude * e^(i * frequency * theta)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Phasor {
    pub amplitude: f64,
    pub frequency: f64,
}

impl Phasor {
    pub fn new(amplitude: f64, frequency: f64) -> Self {
        Self {
            amplitude,
            frequency,
        }
    }

    /// Unit amplitude term rotating at `frequency`.
    pub fn unit(frequency: f64) -> Self {
        Self::new(1.0, frequency)
    }

    /// Real and imaginary parts at `theta`.
    #[inline]
    pub fn at(&self, theta: f64) -> Point2 {
        let phase = self.frequency * theta;
        Point2::new(self.amplitude * phase.cos(), self.amplitude * phase.sin())
    }
}

/// The curve `z(theta) = sum_k a_k * e^(i * f_k * theta)`, drawn as `(Re z, Im z)`.
///
/// The default is two unit terms at frequencies 1 and `PI`, which never
/// closes because `PI` is irrational.
#[derive(Debug, Clone, PartialEq)]
pub struct PhasorSum {
    terms: Vec<Phasor>,
}

impl PhasorSum {
    pub fn new(terms: Vec<Phasor>) -> Result<Self> {
        let sum = Self { terms };
        sum.validate()?;
        Ok(sum)
    }

    /// Unit term at frequency 1 plus a unit term at `frequency`.
    pub fn with_frequency(frequency: f64) -> Result<Self> {
        Self::new(vec![Phasor::unit(1.0), Phasor::unit(frequency)])
    }

    pub fn terms(&self) -> &[Phasor] {
        &self.terms
    }
}

impl Default for PhasorSum {
    fn default() -> Self {
        Self {
            terms: vec![Phasor::unit(1.0), Phasor::unit(PI)],
        }
    }
}

impl Validate for PhasorSum {
    fn validate(&self) -> Result<()> {
        if self.terms.is_empty() {
            return Err(PhasorError::invalid_argument(
                "phasor sum needs at least one term",
            ));
        }
        for (i, term) in self.terms.iter().enumerate() {
            if !term.amplitude.is_finite() || !term.frequency.is_finite() {
                return Err(PhasorError::invalid_argument(format!(
                    "term {} is not finite: amplitude={}, frequency={}",
                    i, term.amplitude, term.frequency
                )));
            }
        }
        Ok(())
    }
}

impl Curve for PhasorSum {
    fn point_at(&self, theta: f64) -> Point2 {
        self.terms
            .iter()
            .fold(Point2::ZERO, |acc, term| acc + term.at(theta))
    }

    fn max_radius(&self) -> f64 {
        self.terms.iter().map(|t| t.amplitude.abs()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_origin_point() {
        let curve = PhasorSum::default();
        let p = curve.point_at(0.0);
        assert_eq!(p, Point2::new(2.0, 0.0));
    }

    #[test]
    fn test_matches_closed_form() {
        let curve = PhasorSum::default();
        for i in 0..50 {
            let theta = i as f64 * 0.37;
            let p = curve.point_at(theta);
            assert_eq!(p.x, theta.cos() + (PI * theta).cos());
            assert_eq!(p.y, theta.sin() + (PI * theta).sin());
        }
    }

    #[test]
    fn test_radius_bound() {
        let curve = PhasorSum::default();
        assert_eq!(curve.max_radius(), 2.0);
        for i in 0..1000 {
            let p = curve.point_at(i as f64 * 0.011);
            assert!(p.length_squared() <= 4.0 + 1e-12);
        }
    }

    #[test]
    fn test_with_frequency() {
        let curve = PhasorSum::with_frequency(3.0).unwrap();
        assert_eq!(curve.terms()[1], Phasor::unit(3.0));
        let p = curve.point_at(PI / 2.0);
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rejects_empty_and_non_finite() {
        assert!(matches!(
            PhasorSum::new(vec![]),
            Err(PhasorError::InvalidArgument(_))
        ));
        assert!(PhasorSum::new(vec![Phasor::new(f64::NAN, 1.0)]).is_err());
        assert!(PhasorSum::with_frequency(f64::INFINITY).is_err());
    }
}
