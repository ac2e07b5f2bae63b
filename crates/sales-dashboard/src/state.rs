// File: crates/sales-dashboard/src/state.rs
// Summary: Shared, read-only application state handed to every request handler.

use std::sync::Arc;

use sales_core::theme;
use sales_core::{ChartBuilder, DataStore, ReactiveController};
use sales_render::RenderOptions;

use crate::config::DashboardConfig;

#[derive(Clone, Debug)]
pub struct AppState {
    pub controller: ReactiveController,
    pub render: RenderOptions,
}

impl AppState {
    pub fn new(controller: ReactiveController, render: RenderOptions) -> Self {
        Self { controller, render }
    }

    /// Load the store described by `config` (falling back on errors) and wire the controller.
    pub fn from_config(config: &DashboardConfig) -> Self {
        let store = Arc::new(DataStore::load(&config.data_path, config.fallback_dataset()));
        if store.is_fallback() {
            tracing::info!(records = store.len(), "serving built-in demo data");
        }
        let controller = ReactiveController::new(store)
            .with_builder(ChartBuilder::new(theme::find(&config.theme)))
            .with_region_filter(config.region_filter);
        Self::new(controller, config.render)
    }

    pub fn region_filter(&self) -> bool { self.controller.region_filter() }
}
