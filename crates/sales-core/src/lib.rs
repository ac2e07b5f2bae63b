// File: crates/sales-core/src/lib.rs
// Summary: Core library entry point; exports the sales data model, store, filter, chart builder, and controller.

pub mod axis;
pub mod chart;
pub mod controller;
pub mod error;
pub mod filter;
pub mod grid;
pub mod marker;
pub mod record;
pub mod series;
pub mod store;
pub mod theme;
pub mod types;
pub mod view;

pub use axis::Axis;
pub use chart::{build, ChartBuilder, ChartSpec};
pub use controller::{ChartSurface, LatestChart, ReactiveController, SelectionEvent, CHART_ID, REGION_CONTROL_ID};
pub use error::{DashboardError, LoadError, SelectorError};
pub use filter::{filter, RegionSelector};
pub use marker::VerticalMarker;
pub use record::{Region, SalesRecord, PRICE_INCREASE_DATE};
pub use series::ChartPoint;
pub use store::{DataSource, DataStore, FallbackDataset};
pub use theme::Theme;
pub use view::PlotWindow;
