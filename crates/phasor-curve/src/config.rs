//! Serializable description of a curve and its sweep.

use phasor_core::{Result, Validate};
use serde::{Deserialize, Serialize};

use crate::curve::{Phasor, PhasorSum};
use crate::sweep::Sweep;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveConfig {
    pub sweep: Sweep,
    pub terms: Vec<Phasor>,
}

impl CurveConfig {
    pub fn build(&self) -> Result<PhasorSum> {
        PhasorSum::new(self.terms.clone())
    }
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            sweep: Sweep::default(),
            terms: PhasorSum::default().terms().to_vec(),
        }
    }
}

impl Validate for CurveConfig {
    fn validate(&self) -> Result<()> {
        self.sweep.validate()?;
        self.build().map(|_| ())
    }
}
