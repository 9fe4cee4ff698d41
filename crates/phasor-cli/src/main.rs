//! Phasor - renders the sum of two rotating phasors as a static image.
//!
//! # Usage
//!
//! ```bash
//! # 113 turns, 10000 samples, white on black, 1000x1000 PNG
//! phasor -o phasor.png
//!
//! # Vector output with a different second frequency
//! phasor --frequency 2.718281828 -o e.svg
//!
//! # Raw coordinates
//! phasor -n 500 -o points.json
//! ```

mod cli;
mod settings;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use phasor_core::Tolerance;
use phasor_curve::{sample, Curve, Polyline};
use phasor_render::{save_png, save_svg, RasterRenderer, Renderer, SvgRenderer};
use serde::Serialize;
use tracing::info;

use cli::{Cli, OutputFormat};
use settings::Settings;

fn main() {
    let cli = Cli::parse();

    cli.init_logging();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let settings = cli.settings()?;

    if cli.dump_config {
        println!("{}", settings.to_json()?);
        return Ok(());
    }

    settings.validate()?;

    let curve = settings.curve.build().context("Invalid curve terms")?;
    let sweep = &settings.curve.sweep;
    let polyline = sample(&curve, sweep).context("Failed to generate curve")?;
    info!(
        samples = polyline.len(),
        max_radius = polyline.max_radius(),
        bound = curve.max_radius(),
        closed = curve.is_closed_over(sweep, Tolerance::loose()),
        "generated curve"
    );

    let format = cli.output_format();
    write_output(&polyline, &settings, format, &cli.output)?;

    info!(path = %cli.output.display(), ?format, "done");
    Ok(())
}

fn write_output(
    polyline: &Polyline,
    settings: &Settings,
    format: OutputFormat,
    path: &Path,
) -> Result<()> {
    match format {
        OutputFormat::Png => {
            let image = RasterRenderer
                .render(polyline, &settings.style)
                .context("Failed to rasterize curve")?;
            save_png(&image, path)?;
        }
        OutputFormat::Svg => {
            let svg = SvgRenderer
                .render(polyline, &settings.style)
                .context("Failed to render SVG")?;
            save_svg(&svg, path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
        OutputFormat::Json => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer(&mut writer, &CoordinateDump::from(polyline))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            writer.flush()?;
        }
    }
    Ok(())
}

/// The curve as two parallel coordinate sequences.
#[derive(Serialize)]
struct CoordinateDump {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl From<&Polyline> for CoordinateDump {
    fn from(polyline: &Polyline) -> Self {
        Self {
            x: polyline.xs(),
            y: polyline.ys(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phasor_curve::{generate, Sweep};

    fn small_settings() -> Settings {
        let mut settings = Settings::default();
        settings.curve.sweep = Sweep::new(720.0, 64);
        settings.style = settings.style.with_size(48, 48);
        settings
    }

    #[test]
    fn test_write_each_format() {
        let dir = tempfile::tempdir().unwrap();
        let settings = small_settings();
        let polyline = generate(&settings.curve).unwrap();

        for (format, name) in [
            (OutputFormat::Png, "out.png"),
            (OutputFormat::Svg, "out.svg"),
            (OutputFormat::Json, "out.json"),
        ] {
            let path = dir.path().join(name);
            write_output(&polyline, &settings, format, &path).unwrap();
            assert!(std::fs::metadata(&path).unwrap().len() > 0, "{} is empty", name);
        }
    }

    #[test]
    fn test_json_dump_has_both_sequences() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("points.json");
        let settings = small_settings();
        let polyline = generate(&settings.curve).unwrap();
        write_output(&polyline, &settings, OutputFormat::Json, &path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let xs = value["x"].as_array().unwrap();
        let ys = value["y"].as_array().unwrap();
        assert_eq!(xs.len(), 64);
        assert_eq!(ys.len(), 64);
        assert_eq!(xs[0].as_f64(), Some(2.0));
        assert_eq!(ys[0].as_f64(), Some(0.0));
    }

    #[test]
    fn test_missing_directory_is_reported() {
        let settings = small_settings();
        let polyline = generate(&settings.curve).unwrap();
        let path = Path::new("/nonexistent-dir/out.json");
        let err = write_output(&polyline, &settings, OutputFormat::Json, path).unwrap_err();
        assert!(format!("{:#}", err).contains("nonexistent-dir"));
    }
}
