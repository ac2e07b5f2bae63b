// File: crates/sales-render/src/lib.rs
// Summary: Renderer crate; turns a ChartSpec into SVG markup or (feature `raster`) PNG bytes.

pub mod scale;
pub mod svg;
#[cfg(feature = "raster")]
pub mod raster;

use sales_core::types::{HEIGHT, WIDTH};

pub use scale::Projection;
pub use svg::render_svg;
#[cfg(feature = "raster")]
pub use raster::render_png_bytes;

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    /// Title, tick and axis text. Off gives font-independent output.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { width: WIDTH, height: HEIGHT, draw_labels: true }
    }
}
