//! Vector output through the plotters SVG backend.

use std::path::Path;

use phasor_core::{PhasorError, Result, Validate};
use phasor_curve::Polyline;
use plotters::prelude::*;
use tracing::{debug, info};

use crate::frame::Frame;
use crate::plot;
use crate::renderer::Renderer;
use crate::style::RenderStyle;

/// Renders a polyline as a standalone SVG document.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgRenderer;

impl Renderer for SvgRenderer {
    type Output = String;

    fn render(&self, polyline: &Polyline, style: &RenderStyle) -> Result<String> {
        style.validate()?;
        let bounds = polyline
            .bounds()
            .ok_or_else(|| PhasorError::Render("cannot render an empty polyline".into()))?;
        let frame = Frame::fit(&bounds, style);

        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (style.width, style.height))
                .into_drawing_area();
            plot::draw(&root, polyline, style, &frame)?;
        }

        info!(points = polyline.len(), bytes = svg.len(), "rendered svg");
        Ok(svg)
    }
}

/// Write an SVG document to `path`.
pub fn save_svg(svg: &str, path: &Path) -> Result<()> {
    std::fs::write(path, svg)?;
    debug!(path = %path.display(), "wrote svg");
    Ok(())
}
