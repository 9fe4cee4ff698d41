use phasor_math::{Aabb2, DVec2};

use crate::style::RenderStyle;

/// The world-space region shown in an image.
#[derive(Debug, Clone, Copy)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub view: Aabb2,
}

impl Frame {
    /// Fit `bounds` into the image described by `style`.
    ///
    /// The bounds are grown by the style margin; an axis with no extent is
    /// widened by one unit on each side. With square aspect the view is
    /// enlarged along one axis so both axes share a scale, keeping the data
    /// centered.
    pub fn fit(bounds: &Aabb2, style: &RenderStyle) -> Self {
        let mut data = *bounds;
        let size = data.extents();
        if size.x <= f64::EPSILON {
            data.min.x -= 1.0;
            data.max.x += 1.0;
        }
        if size.y <= f64::EPSILON {
            data.min.y -= 1.0;
            data.max.y += 1.0;
        }
        let data = data.with_margin(style.margin);

        let view = if style.square_aspect {
            let avail = plot_area(style);
            let scale = avail / data.extents();
            let half_view = avail * 0.5 / scale.x.min(scale.y);
            let center = data.center();
            Aabb2::new(center - half_view, center + half_view)
        } else {
            data
        };

        Self {
            width: style.width,
            height: style.height,
            view,
        }
    }

    /// Pixels per world unit along each axis.
    pub fn scale(&self, style: &RenderStyle) -> DVec2 {
        plot_area(style) / self.view.extents()
    }
}

/// Image size less padding on both sides.
fn plot_area(style: &RenderStyle) -> DVec2 {
    let pad = 2.0 * f64::from(style.padding);
    DVec2::new(f64::from(style.width) - pad, f64::from(style.height) - pad)
}
