use phasor_core::Result;
use phasor_curve::Polyline;

use crate::style::RenderStyle;

/// Draws connected line segments through a polyline.
pub trait Renderer {
    type Output;

    fn render(&self, polyline: &Polyline, style: &RenderStyle) -> Result<Self::Output>;
}
