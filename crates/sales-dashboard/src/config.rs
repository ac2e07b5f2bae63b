// File: crates/sales-dashboard/src/config.rs
// Summary: Dashboard configuration with defaults; no flags or environment variables are read.

use std::net::SocketAddr;
use std::path::PathBuf;

use sales_core::FallbackDataset;
use sales_render::RenderOptions;

/// Default input file, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "formatted_output.csv";

#[derive(Clone, Debug)]
pub struct DashboardConfig {
    pub data_path: PathBuf,
    pub bind: SocketAddr,
    /// Show the region radio group. Off gives the single-chart dashboard.
    pub region_filter: bool,
    /// Log at debug level instead of info.
    pub debug: bool,
    /// Theme preset name (see `sales_core::theme::presets`).
    pub theme: String,
    pub render: RenderOptions,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            bind: SocketAddr::from(([127, 0, 0, 1], 8050)),
            region_filter: true,
            debug: false,
            theme: "light".into(),
            render: RenderOptions::default(),
        }
    }
}

impl DashboardConfig {
    pub fn with_data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_path = path.into();
        self
    }

    pub fn with_bind(mut self, bind: SocketAddr) -> Self {
        self.bind = bind;
        self
    }

    pub fn with_region_filter(mut self, enabled: bool) -> Self {
        self.region_filter = enabled;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_theme(mut self, name: impl Into<String>) -> Self {
        self.theme = name.into();
        self
    }

    /// Demo data matching the dashboard variant.
    pub fn fallback_dataset(&self) -> FallbackDataset {
        if self.region_filter { FallbackDataset::Regional } else { FallbackDataset::Compact }
    }
}
