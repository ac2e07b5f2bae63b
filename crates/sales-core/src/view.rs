// File: crates/sales-core/src/view.rs
// Summary: Plot window: the data-space rectangle a renderer maps onto the plot area.

use crate::chart::ChartSpec;

/// Days shown around the marker when there is no data.
const EMPTY_HALF_SPAN_DAYS: f64 = 15.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotWindow {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl PlotWindow {
    /// Axis ranges from the spec, widened so the marker is always inside.
    /// Empty specs get a window centred on the marker with y in [0, 1].
    pub fn from_spec(spec: &ChartSpec) -> Self {
        let mx = spec.marker.x();
        let (mut x_min, mut x_max) = spec
            .x_axis
            .range
            .unwrap_or((mx - EMPTY_HALF_SPAN_DAYS, mx + EMPTY_HALF_SPAN_DAYS));
        let (y_min, mut y_max) = spec.y_axis.range.unwrap_or((0.0, 1.0));

        x_min = x_min.min(mx);
        x_max = x_max.max(mx);
        if (x_max - x_min).abs() < 1e-9 { x_max = x_min + 1.0; }
        if (y_max - y_min).abs() < 1e-9 { y_max = y_min + 1.0; }
        Self { x_min, x_max, y_min, y_max }
    }

    pub fn x_span(&self) -> f64 { self.x_max - self.x_min }
    pub fn y_span(&self) -> f64 { self.y_max - self.y_min }
}
