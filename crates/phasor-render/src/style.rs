use phasor_core::{PhasorError, Result, Validate};
use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Presentation preferences handed to a [`Renderer`](crate::Renderer).
///
/// Defaults draw thin white strokes on black, fill a square 1000x1000 image
/// with no padding and hide the axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    pub line_color: Color,
    /// Stroke width in pixels; widths below one pixel draw a translucent hairline.
    pub line_width: f64,
    pub background: Color,
    /// Use the same scale on both axes.
    pub square_aspect: bool,
    pub show_axes: bool,
    pub axis_color: Color,
    /// Blank border around the plot area, in pixels.
    pub padding: u32,
    /// Data margin on each side as a fraction of the data span.
    pub margin: f64,
}

impl RenderStyle {
    pub const DEFAULT_SIZE: u32 = 1000;
    pub const DEFAULT_LINE_WIDTH: f64 = 0.5;
    pub const DEFAULT_MARGIN: f64 = 0.05;
    /// Largest image, in pixels, a renderer will allocate.
    pub const MAX_PIXELS: u64 = 1 << 28;

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Bytes needed for an RGB bitmap of this size.
    pub fn buffer_len(&self) -> Result<usize> {
        let pixels = u64::from(self.width) * u64::from(self.height);
        if pixels > Self::MAX_PIXELS {
            return Err(PhasorError::invalid_argument(format!(
                "image size {}x{} exceeds {} pixels",
                self.width,
                self.height,
                Self::MAX_PIXELS
            )));
        }
        usize::try_from(pixels * 3).map_err(|_| {
            PhasorError::invalid_argument(format!(
                "image size {}x{} does not fit in memory",
                self.width, self.height
            ))
        })
    }

    pub fn with_line_width(mut self, line_width: f64) -> Self {
        self.line_width = line_width;
        self
    }
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            width: Self::DEFAULT_SIZE,
            height: Self::DEFAULT_SIZE,
            line_color: Color::WHITE,
            line_width: Self::DEFAULT_LINE_WIDTH,
            background: Color::BLACK,
            square_aspect: true,
            show_axes: false,
            axis_color: Color::GRAY,
            padding: 0,
            margin: Self::DEFAULT_MARGIN,
        }
    }
}

impl Validate for RenderStyle {
    fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(PhasorError::invalid_argument(format!(
                "image size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        self.buffer_len()?;
        if 2 * u64::from(self.padding) >= u64::from(self.width.min(self.height)) {
            return Err(PhasorError::invalid_argument(format!(
                "padding {} leaves no room in a {}x{} image",
                self.padding, self.width, self.height
            )));
        }
        if !self.line_width.is_finite() || self.line_width <= 0.0 {
            return Err(PhasorError::invalid_argument(format!(
                "line width must be positive, got {}",
                self.line_width
            )));
        }
        if !(0.0..0.5).contains(&self.margin) {
            return Err(PhasorError::invalid_argument(format!(
                "margin must be in [0, 0.5), got {}",
                self.margin
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let style = RenderStyle::default();
        assert!(style.validate().is_ok());
        assert_eq!(style.line_color, Color::WHITE);
        assert_eq!(style.background, Color::BLACK);
        assert!(!style.show_axes);
        assert_eq!(style.padding, 0);
    }

    #[test]
    fn test_invalid_styles() {
        assert!(RenderStyle::default().with_size(0, 10).validate().is_err());
        assert!(RenderStyle::default().with_line_width(0.0).validate().is_err());
        assert!(RenderStyle::default().with_line_width(f64::NAN).validate().is_err());
        let padded = RenderStyle {
            padding: 50,
            ..RenderStyle::default().with_size(100, 100)
        };
        assert!(padded.validate().is_err());
        let margin = RenderStyle {
            margin: 0.5,
            ..Default::default()
        };
        assert!(margin.validate().is_err());
    }

    #[test]
    fn test_oversized_images_rejected() {
        let huge = RenderStyle::default().with_size(u32::MAX, u32::MAX);
        assert!(matches!(huge.validate(), Err(PhasorError::InvalidArgument(_))));
        let wide = RenderStyle::default().with_size(1 << 20, 1 << 10);
        assert!(wide.validate().is_err());
        let ok = RenderStyle::default().with_size(1 << 14, 1 << 14);
        assert_eq!(ok.buffer_len().unwrap(), 3 << 28);
    }

    #[test]
    fn test_partial_json() {
        let style: RenderStyle =
            serde_json::from_str(r##"{"line_color": "#ff0000", "width": 640}"##).unwrap();
        assert_eq!(style.line_color, Color::rgb(255, 0, 0));
        assert_eq!(style.width, 640);
        assert_eq!(style.height, RenderStyle::DEFAULT_SIZE);
    }
}
