// File: crates/sales-core/src/chart.rs
// Summary: ChartSpec (renderer-agnostic figure description) and the builder that derives it from records.

use serde::{Deserialize, Serialize};

use crate::axis::Axis;
use crate::filter::RegionSelector;
use crate::marker::VerticalMarker;
use crate::record::SalesRecord;
use crate::series::{extent, ChartPoint};
use crate::theme::Theme;

/// Everything a renderer needs to draw one sales chart. Replaced wholesale on each update.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub title: String,
    pub selector: RegionSelector,
    /// One unified series, in date order.
    pub points: Vec<ChartPoint>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub marker: VerticalMarker,
    pub theme: Theme,
}

impl ChartSpec {
    pub fn is_empty(&self) -> bool { self.points.is_empty() }
}

/// Title shown above the chart for `selector`.
pub fn chart_title(selector: RegionSelector) -> String {
    format!("Sales Over Time (Region: {})", selector.label())
}

/// Builds `ChartSpec`s; holds presentation settings that do not depend on data.
#[derive(Clone, Debug, Default)]
pub struct ChartBuilder {
    pub theme: Theme,
    pub marker: VerticalMarker,
}

impl ChartBuilder {
    pub fn new(theme: Theme) -> Self {
        Self { theme, marker: VerticalMarker::price_increase() }
    }

    /// Map records (already filtered for `selector`) to a chart description.
    /// The marker and title are present even when `records` is empty.
    pub fn build<'a, I>(&self, records: I, selector: RegionSelector) -> ChartSpec
    where
        I: IntoIterator<Item = &'a SalesRecord>,
    {
        let points = records.into_iter().map(ChartPoint::from_record).collect::<Vec<_>>();

        let mut x_axis = Axis::date();
        let mut y_axis = Axis::sales();
        if let Some(((x_min, mut x_max), (y_min, mut y_max))) = extent(&points) {
            if (x_max - x_min).abs() < 1e-9 { x_max = x_min + 1.0; }
            if (y_max - y_min).abs() < 1e-9 { y_max = y_min + 1.0; }
            let ym = (y_max - y_min) * 0.02;
            x_axis = x_axis.with_range(x_min, x_max);
            y_axis = y_axis.with_range(y_min - ym, y_max + ym);
        }

        ChartSpec {
            title: chart_title(selector),
            selector,
            points,
            x_axis,
            y_axis,
            marker: self.marker.clone(),
            theme: self.theme.clone(),
        }
    }
}

/// `ChartBuilder::default().build(records, selector)`.
pub fn build<'a, I>(records: I, selector: RegionSelector) -> ChartSpec
where
    I: IntoIterator<Item = &'a SalesRecord>,
{
    ChartBuilder::default().build(records, selector)
}
