//! Settings file handling.

use std::path::Path;

use anyhow::{Context, Result};
use phasor_core::Validate;
use phasor_curve::CurveConfig;
use phasor_render::RenderStyle;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Everything needed to produce one image. Missing fields take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub curve: CurveConfig,
    pub style: RenderStyle,
}

impl Settings {
    /// Load settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        let settings: Settings = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse settings file {}", path.display()))?;
        debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        self.curve.validate().context("Invalid curve settings")?;
        self.style.validate().context("Invalid render settings")?;
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize settings")
    }
}
