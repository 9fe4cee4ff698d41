pub mod color;
pub mod frame;
mod plot;
pub mod raster;
pub mod renderer;
pub mod style;
pub mod svg;

// Re-export main types
pub use color::Color;
pub use frame::Frame;
pub use raster::{save_png, RasterRenderer};
pub use renderer::Renderer;
pub use style::RenderStyle;
pub use svg::{save_svg, SvgRenderer};
