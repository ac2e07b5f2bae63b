// File: crates/sales-core/src/series.rs
// Summary: Chart point model; one point per sales record, with hover text naming the region.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::record::{date_to_x, Region, SalesRecord};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub sales: f64,
    pub region: Region,
    /// Tooltip content, `<br>`-separated lines.
    pub hover: String,
}

impl ChartPoint {
    pub fn from_record(record: &SalesRecord) -> Self {
        Self {
            date: record.date,
            sales: record.sales,
            region: record.region,
            hover: hover_text(record),
        }
    }

    /// (x, y) in chart coordinates: days since epoch, sales.
    #[inline]
    pub fn xy(&self) -> (f64, f64) { (date_to_x(self.date), self.sales) }

    /// Tooltip lines without markup, for renderers that cannot show `<br>`.
    pub fn hover_lines(&self) -> impl Iterator<Item = &str> {
        self.hover.split("<br>")
    }
}

pub fn hover_text(record: &SalesRecord) -> String {
    format!(
        "Region: {}<br>Date: {}<br>Sales: {:.2}",
        record.region,
        record.date.format("%Y-%m-%d"),
        record.sales
    )
}

/// Min/max over the (x, y) coordinates of `points`; `None` when empty.
pub fn extent(points: &[ChartPoint]) -> Option<((f64, f64), (f64, f64))> {
    let mut it = points.iter().map(ChartPoint::xy);
    let (x0, y0) = it.next()?;
    let init = ((x0, x0), (y0, y0));
    Some(it.fold(init, |((xl, xh), (yl, yh)), (x, y)| ((xl.min(x), xh.max(x)), (yl.min(y), yh.max(y)))))
}
