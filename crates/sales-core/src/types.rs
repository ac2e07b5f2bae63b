// File: crates/sales-core/src/types.rs
// Summary: Shared layout types and constants (figure size, margins).

use serde::{Deserialize, Serialize};

/// Default figure width in pixels.
pub const WIDTH: u32 = 900;
/// Default figure height in pixels (the chart node is 600px tall).
pub const HEIGHT: u32 = 600;

/// Space between the figure edge and the plot area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Margins {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Margins {
    /// Create new margins (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Pixels taken from the figure width by the side margins.
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Pixels taken from the figure height by the title band and the bottom margin.
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Margins {
    fn default() -> Self {
        // room for the title and marker annotation on top
        Self::new(40, 40, 80, 40)
    }
}
