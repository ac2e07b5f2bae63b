// File: crates/sales-render/src/scale.rs
// Summary: Maps chart coordinates (days, sales) to pixels inside the plot area.

use sales_core::{ChartSpec, PlotWindow};

use crate::RenderOptions;

#[derive(Clone, Copy, Debug)]
pub struct Projection {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub window: PlotWindow,
}

impl Projection {
    pub fn new(spec: &ChartSpec, opts: &RenderOptions) -> Self {
        let m = spec.theme.margins;
        let left = m.left as f64;
        let top = m.top as f64;
        // keep at least one pixel of plot area on tiny figures
        let right = left + (opts.width as f64 - m.hsum() as f64).max(1.0);
        let bottom = top + (opts.height as f64 - m.vsum() as f64).max(1.0);
        Self { left, top, right, bottom, window: PlotWindow::from_spec(spec) }
    }

    pub fn width(&self) -> f64 { self.right - self.left }
    pub fn height(&self) -> f64 { self.bottom - self.top }

    #[inline]
    pub fn sx(&self, x: f64) -> f64 {
        self.left + (x - self.window.x_min) / self.window.x_span().max(1e-9) * self.width()
    }

    #[inline]
    pub fn sy(&self, y: f64) -> f64 {
        self.bottom - (y - self.window.y_min) / self.window.y_span().max(1e-9) * self.height()
    }
}
