//! Raster output through the plotters bitmap backend.

use std::path::Path;

use image::{ImageFormat, RgbImage};
use phasor_core::{PhasorError, Result, Validate};
use phasor_curve::Polyline;
use plotters::prelude::*;
use tracing::{debug, info};

use crate::frame::Frame;
use crate::plot;
use crate::renderer::Renderer;
use crate::style::RenderStyle;

/// Renders a polyline to an [`RgbImage`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RasterRenderer;

impl Renderer for RasterRenderer {
    type Output = RgbImage;

    fn render(&self, polyline: &Polyline, style: &RenderStyle) -> Result<RgbImage> {
        style.validate()?;
        let bounds = polyline
            .bounds()
            .ok_or_else(|| PhasorError::Render("cannot render an empty polyline".into()))?;
        let frame = Frame::fit(&bounds, style);

        let mut buffer = vec![0u8; style.buffer_len()?];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (style.width, style.height))
                .into_drawing_area();
            plot::draw(&root, polyline, style, &frame)?;
        }

        let image = RgbImage::from_raw(style.width, style.height, buffer)
            .ok_or_else(|| PhasorError::Render("bitmap buffer has the wrong size".into()))?;
        info!(
            points = polyline.len(),
            width = style.width,
            height = style.height,
            "rasterized curve"
        );
        Ok(image)
    }
}

/// Write `image` as a PNG file.
pub fn save_png(image: &RgbImage, path: &Path) -> Result<()> {
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| PhasorError::Render(format!("failed to write {}: {}", path.display(), e)))?;
    debug!(path = %path.display(), "wrote png");
    Ok(())
}
