// File: crates/sales-core/src/theme.rs
// Summary: Figure colours and typography, as CSS colour strings so any renderer can use them.

use serde::{Deserialize, Serialize};

use crate::types::Margins;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    /// Whole-figure background.
    pub paper_background: String,
    /// Background inside the plot area.
    pub plot_background: String,
    pub grid: String,
    pub axis_line: String,
    pub axis_label: String,
    pub title: String,
    pub line_stroke: String,
    pub font_family: String,
    pub margins: Margins,
}

impl Theme {
    /// Light theme used by the sales dashboard.
    pub fn light() -> Self {
        Self {
            name: "light".into(),
            paper_background: "#ffffff".into(),
            plot_background: "#f9f9f9".into(),
            grid: "#e5e5ea".into(),
            axis_line: "#444450".into(),
            axis_label: "#2c3e50".into(),
            title: "#2c3e50".into(),
            line_stroke: "#636efa".into(),
            font_family: "Arial, sans-serif".into(),
            margins: Margins::default(),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark".into(),
            paper_background: "#121214".into(),
            plot_background: "#1b1b1f".into(),
            grid: "#28282d".into(),
            axis_line: "#b4b4be".into(),
            axis_label: "#ebebf5".into(),
            title: "#ebebf5".into(),
            line_stroke: "#40a0ff".into(),
            font_family: "Arial, sans-serif".into(),
            margins: Margins::default(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_default()
}

/// Parse `#rrggbb` into RGB components.
pub fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 { return None; }
    let c = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    Some((c(0)?, c(2)?, c(4)?))
}
