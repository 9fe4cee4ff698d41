//! Command-line argument parsing for phasor

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, ValueEnum};
use phasor_curve::{Phasor, Sweep};
use phasor_render::Color;

use crate::settings::Settings;

/// Phasor - render the curve e^(iθ) + e^(iπθ) to an image
#[derive(Parser, Debug)]
#[command(name = "phasor")]
#[command(author, version, long_about = None)]
#[command(about = "Render sums of rotating phasors to PNG, SVG, or JSON")]
pub struct Cli {
    /// Output file
    #[arg(short, long, value_name = "OUTPUT", default_value = "phasor.png")]
    pub output: PathBuf,

    /// Output format (inferred from the output extension when omitted)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// JSON settings file; flags override its values
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Sweep range in full turns of 360 degrees
    #[arg(long, conflicts_with = "degrees")]
    pub turns: Option<f64>,

    /// Sweep range in degrees
    #[arg(long)]
    pub degrees: Option<f64>,

    /// Number of samples along the sweep
    #[arg(short = 'n', long)]
    pub samples: Option<usize>,

    /// Angular frequency of the second phasor; other terms are kept
    #[arg(long)]
    pub frequency: Option<f64>,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Stroke width in pixels
    #[arg(long)]
    pub line_width: Option<f64>,

    /// Stroke color (#rrggbb, black, white, gray)
    #[arg(long)]
    pub line_color: Option<Color>,

    /// Background color (#rrggbb, black, white, gray)
    #[arg(long)]
    pub background: Option<Color>,

    /// Draw axis lines through the origin
    #[arg(long)]
    pub axes: bool,

    /// Print the effective settings as JSON and exit
    #[arg(long)]
    pub dump_config: bool,

    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// PNG raster image (default)
    Png,
    /// SVG vector image
    Svg,
    /// JSON with the x and y coordinate sequences
    Json,
}

impl Cli {
    /// Initialize logging based on verbosity
    pub fn init_logging(&self) {
        use tracing_subscriber::{fmt, EnvFilter};

        let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
        let Some(directive) = self.filter_directive(env) else {
            return;
        };

        fmt()
            .with_env_filter(EnvFilter::new(directive))
            .with_target(false)
            .init();
    }

    /// Filter directive for the subscriber: none when quiet, else a non-empty
    /// `RUST_LOG` value, else the level picked by `-v` count.
    fn filter_directive(&self, env: Option<String>) -> Option<String> {
        if self.quiet {
            return None;
        }
        if let Some(env) = env.filter(|e| !e.trim().is_empty()) {
            return Some(env);
        }

        let level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        Some(level.to_string())
    }

    /// Output format from the flag, else from the output extension, else PNG.
    pub fn output_format(&self) -> OutputFormat {
        if let Some(format) = self.format {
            return format;
        }
        match extension(&self.output).as_deref() {
            Some("svg") => OutputFormat::Svg,
            Some("json") => OutputFormat::Json,
            _ => OutputFormat::Png,
        }
    }

    /// Load the settings file, if any, and apply flag overrides.
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };
        self.apply(&mut settings);
        Ok(settings)
    }

    fn apply(&self, settings: &mut Settings) {
        let sweep = &mut settings.curve.sweep;
        if let Some(turns) = self.turns {
            *sweep = Sweep::turns(turns, sweep.samples);
        }
        if let Some(degrees) = self.degrees {
            sweep.degrees = degrees;
        }
        if let Some(samples) = self.samples {
            sweep.samples = samples;
        }
        if let Some(frequency) = self.frequency {
            let terms = &mut settings.curve.terms;
            match terms.get_mut(1) {
                Some(term) => term.frequency = frequency,
                None => terms.push(Phasor::unit(frequency)),
            }
        }

        let style = &mut settings.style;
        if let Some(width) = self.width {
            style.width = width;
        }
        if let Some(height) = self.height {
            style.height = height;
        }
        if let Some(line_width) = self.line_width {
            style.line_width = line_width;
        }
        if let Some(color) = self.line_color {
            style.line_color = color;
        }
        if let Some(color) = self.background {
            style.background = color;
        }
        if self.axes {
            style.show_axes = true;
        }
    }
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}
