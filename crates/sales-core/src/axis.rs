// File: crates/sales-core/src/axis.rs
// Summary: Axis model with label and optional data range.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub label: String,
    /// `None` leaves the range to the renderer's empty-state default.
    pub range: Option<(f64, f64)>,
}

impl Axis {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into(), range: None }
    }

    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.range = Some((min, max));
        self
    }

    pub fn date() -> Self { Self::new("Date") }

    pub fn sales() -> Self { Self::new("Total Sales ($)") }
}
