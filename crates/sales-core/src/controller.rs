// File: crates/sales-core/src/controller.rs
// Summary: Reactive controller binding the region control's selection events to filter -> build -> chart replacement.
// Notes:
// - Every event recomputes from the shared, immutable store; nothing is cached between calls.
// - The controller never touches a display directly; it hands each new spec to a `ChartSurface`.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::chart::{ChartBuilder, ChartSpec};
use crate::error::DashboardError;
use crate::filter::{filter, RegionSelector};
use crate::store::DataStore;

/// Element id of the region radio group.
pub const REGION_CONTROL_ID: &str = "region-radio";
/// Element id of the single chart node that gets replaced on each update.
pub const CHART_ID: &str = "sales-line-chart";

/// A value change on a named UI control, as delivered by the hosting runtime.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionEvent {
    pub control_id: String,
    pub value: String,
}

impl SelectionEvent {
    pub fn region(value: impl Into<String>) -> Self {
        Self { control_id: REGION_CONTROL_ID.to_string(), value: value.into() }
    }
}

/// Anything that displays a chart. `replace_chart` discards the previous chart entirely.
pub trait ChartSurface {
    fn chart_id(&self) -> &str { CHART_ID }
    fn replace_chart(&mut self, spec: ChartSpec);
}

/// Keeps only the latest spec; useful for JSON responses and tests.
#[derive(Clone, Debug, Default)]
pub struct LatestChart {
    pub current: Option<ChartSpec>,
    pub replacements: usize,
}

impl ChartSurface for LatestChart {
    fn replace_chart(&mut self, spec: ChartSpec) {
        self.current = Some(spec);
        self.replacements += 1;
    }
}

#[derive(Clone, Debug)]
pub struct ReactiveController {
    store: Arc<DataStore>,
    builder: ChartBuilder,
    region_filter: bool,
}

impl ReactiveController {
    /// Controller with the region control enabled.
    pub fn new(store: Arc<DataStore>) -> Self {
        Self { store, builder: ChartBuilder::default(), region_filter: true }
    }

    pub fn with_builder(mut self, builder: ChartBuilder) -> Self {
        self.builder = builder;
        self
    }

    /// `false` gives the single-chart dashboard: the selector is always `All`.
    pub fn with_region_filter(mut self, enabled: bool) -> Self {
        self.region_filter = enabled;
        self
    }

    pub fn store(&self) -> &Arc<DataStore> { &self.store }
    pub fn region_filter(&self) -> bool { self.region_filter }

    /// Recompute the chart for `selector` from scratch.
    pub fn on_selection_change(&self, selector: RegionSelector) -> ChartSpec {
        let selector = if self.region_filter { selector } else { RegionSelector::All };
        let records = filter(&self.store, selector);
        tracing::debug!(%selector, points = records.len(), "rebuilding chart");
        self.builder.build(records, selector)
    }

    /// Chart shown before any interaction.
    pub fn initial_chart(&self) -> ChartSpec {
        self.on_selection_change(RegionSelector::default())
    }

    /// Validate `event`, recompute, and replace the chart on `surface`.
    /// Returns the selector the new chart was built for.
    pub fn handle_event<S: ChartSurface + ?Sized>(
        &self,
        event: &SelectionEvent,
        surface: &mut S,
    ) -> Result<RegionSelector, DashboardError> {
        if event.control_id != REGION_CONTROL_ID {
            return Err(DashboardError::UnknownControl(event.control_id.clone()));
        }
        let selector = event.value.parse::<RegionSelector>()?;
        let spec = self.on_selection_change(selector);
        let applied = spec.selector;
        surface.replace_chart(spec);
        Ok(applied)
    }
}
