// File: crates/sales-core/src/marker.rs
// Summary: Vertical reference marker (the price-increase line) drawn over the chart independent of data.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::record::{date_to_x, PRICE_INCREASE_DATE};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineDash {
    Solid,
    Dash,
}

impl LineDash {
    /// SVG `stroke-dasharray` value; `None` for solid lines.
    pub const fn dasharray(&self) -> Option<&'static str> {
        match self {
            LineDash::Solid => None,
            LineDash::Dash => Some("8,6"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnnotationPosition {
    #[serde(rename = "top left")]
    TopLeft,
    #[serde(rename = "top right")]
    TopRight,
}

/// A full-height line at a fixed date with a text annotation near the top.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VerticalMarker {
    pub date: NaiveDate,
    pub label: String,
    pub color: String,
    pub dash: LineDash,
    pub annotation_position: AnnotationPosition,
}

impl VerticalMarker {
    /// Red dashed line at 2021-01-15 labelled "Price Increase Date".
    pub fn price_increase() -> Self {
        Self {
            date: PRICE_INCREASE_DATE,
            label: "Price Increase Date".into(),
            color: "#ff0000".into(),
            dash: LineDash::Dash,
            annotation_position: AnnotationPosition::TopRight,
        }
    }

    /// X coordinate in days since epoch.
    pub fn x(&self) -> f64 { date_to_x(self.date) }

    /// Line endpoints spanning `[y_min, y_max]` in chart coordinates.
    pub fn segment(&self, y_min: f64, y_max: f64) -> [(f64, f64); 2] {
        let x = self.x();
        [(x, y_min), (x, y_max)]
    }
}

impl Default for VerticalMarker {
    fn default() -> Self { Self::price_increase() }
}
