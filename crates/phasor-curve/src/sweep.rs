//! Evenly spaced angle sweeps.

use phasor_core::{PhasorError, Result, Validate};
use phasor_math::{degrees_to_radians, linspace};
use serde::{Deserialize, Serialize};

/// A closed sweep `[0, degrees]` sampled at `samples` evenly spaced angles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sweep {
    /// Total sweep range in degrees.
    pub degrees: f64,
    /// Number of sampled angles, endpoints included.
    pub samples: usize,
}

impl Sweep {
    pub const DEFAULT_TURNS: f64 = 113.0;
    pub const DEFAULT_DEGREES: f64 = Self::DEFAULT_TURNS * 360.0;
    pub const DEFAULT_SAMPLES: usize = 10_000;

    pub fn new(degrees: f64, samples: usize) -> Self {
        Self { degrees, samples }
    }

    /// Sweep over `turns` full revolutions.
    pub fn turns(turns: f64, samples: usize) -> Self {
        Self::new(turns * 360.0, samples)
    }

    /// The parameter sequence in degrees.
    pub fn parameters(&self) -> Vec<f64> {
        linspace(0.0, self.degrees, self.samples)
    }

    /// The parameter sequence converted to radians.
    pub fn angles(&self) -> Vec<f64> {
        self.parameters()
            .into_iter()
            .map(degrees_to_radians)
            .collect()
    }
}

impl Default for Sweep {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DEGREES, Self::DEFAULT_SAMPLES)
    }
}

impl Validate for Sweep {
    fn validate(&self) -> Result<()> {
        if self.samples == 0 {
            return Err(PhasorError::invalid_argument(
                "sample count must be at least 1",
            ));
        }
        if !self.degrees.is_finite() {
            return Err(PhasorError::invalid_argument(format!(
                "sweep range must be finite, got {}",
                self.degrees
            )));
        }
        Ok(())
    }
}
