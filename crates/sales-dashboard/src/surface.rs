// File: crates/sales-dashboard/src/surface.rs
// Summary: Chart surface that keeps the latest spec together with its rendered SVG markup.

use sales_core::{ChartSpec, ChartSurface};
use sales_render::{render_svg, RenderOptions};

#[derive(Clone, Debug)]
pub struct SvgSurface {
    opts: RenderOptions,
    pub spec: Option<ChartSpec>,
    pub markup: String,
}

impl SvgSurface {
    pub fn new(opts: RenderOptions) -> Self {
        Self { opts, spec: None, markup: String::new() }
    }
}

impl ChartSurface for SvgSurface {
    fn replace_chart(&mut self, spec: ChartSpec) {
        self.markup = render_svg(&spec, &self.opts);
        self.spec = Some(spec);
    }
}
