//! Shared plotters drawing for every backend.

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::Color as _;
use phasor_core::{PhasorError, Result};
use phasor_curve::Polyline;

use crate::color::Color;
use crate::frame::Frame;
use crate::style::RenderStyle;

impl From<Color> for RGBColor {
    fn from(color: Color) -> Self {
        RGBColor(color.r, color.g, color.b)
    }
}

/// Stroke style for a width in pixels.
///
/// Backends take whole-pixel widths, so anything thinner than a pixel is
/// drawn one pixel wide with its width as opacity.
pub(crate) fn stroke(color: Color, width: f64) -> ShapeStyle {
    let alpha = width.min(1.0);
    ShapeStyle {
        color: RGBColor::from(color).mix(alpha),
        filled: false,
        stroke_width: width.round().max(1.0) as u32,
    }
}

/// Fill the background and draw `polyline` onto `root`.
///
/// No mesh is configured, so the chart has no axes, labels, or ticks unless
/// `style.show_axes` asks for axis lines through the origin.
pub(crate) fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    polyline: &Polyline,
    style: &RenderStyle,
    frame: &Frame,
) -> Result<()> {
    root.fill(&RGBColor::from(style.background)).map_err(draw_error)?;

    let pad = style.padding as i32;
    let area = root.margin(pad, pad, pad, pad);
    let view = frame.view;
    let mut chart = ChartBuilder::on(&area)
        .build_cartesian_2d(view.min.x..view.max.x, view.min.y..view.max.y)
        .map_err(draw_error)?;

    if style.show_axes {
        let axis = stroke(style.axis_color, 1.0);
        chart
            .draw_series(LineSeries::new(
                [(view.min.x, 0.0), (view.max.x, 0.0)],
                axis,
            ))
            .map_err(draw_error)?;
        chart
            .draw_series(LineSeries::new(
                [(0.0, view.min.y), (0.0, view.max.y)],
                axis,
            ))
            .map_err(draw_error)?;
    }

    let line = stroke(style.line_color, style.line_width);
    if let [only] = polyline.points() {
        let radius = (style.line_width * 0.5).ceil().max(1.0) as i32;
        chart
            .draw_series(std::iter::once(Circle::new(
                (only.x, only.y),
                radius,
                line.filled(),
            )))
            .map_err(draw_error)?;
    } else {
        chart
            .draw_series(LineSeries::new(
                polyline.points().iter().map(|p| (p.x, p.y)),
                line,
            ))
            .map_err(draw_error)?;
    }

    root.present().map_err(draw_error)?;
    Ok(())
}

fn draw_error<E: std::error::Error + Send + Sync>(err: DrawingAreaErrorKind<E>) -> PhasorError {
    PhasorError::Render(format!("failed to draw curve: {}", err))
}
