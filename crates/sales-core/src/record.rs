// File: crates/sales-core/src/record.rs
// Summary: Sales record model, fixed region labels, and date <-> axis coordinate helpers.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::SelectorError;

/// The price-increase date drawn as a reference marker on every chart.
pub const PRICE_INCREASE_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2021, 1, 15) {
    Some(d) => d,
    None => panic!("invalid price-increase date"),
};

/// Origin for the numeric X coordinate (days since this date).
pub const EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(1970, 1, 1) {
    Some(d) => d,
    None => panic!("invalid epoch"),
};

/// Sales territory. The set is closed; anything else is rejected at parse time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    North,
    East,
    South,
    West,
}

impl Region {
    /// All regions in the order the dashboard offers them.
    pub const ALL: [Region; 4] = [Region::North, Region::East, Region::South, Region::West];

    /// Lowercase value used on the wire and in form controls.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Region::North => "north",
            Region::East => "east",
            Region::South => "south",
            Region::West => "west",
        }
    }

    /// Capitalized label shown to users.
    pub const fn label(&self) -> &'static str {
        match self {
            Region::North => "North",
            Region::East => "East",
            Region::South => "South",
            Region::West => "West",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Region {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Region::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SelectorError { value: s.to_string() })
    }
}

/// One row of the sales table.
/// Contract: `sales` is finite and non-negative (checked by the CSV loader).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub date: NaiveDate,
    pub sales: f64,
    pub region: Region,
}

impl SalesRecord {
    pub fn new(date: NaiveDate, sales: f64, region: Region) -> Self {
        Self { date, sales, region }
    }
}

/// Map a calendar date to the chart X coordinate (days since 1970-01-01).
#[inline]
pub fn date_to_x(date: NaiveDate) -> f64 {
    (date.num_days_from_ce() - EPOCH.num_days_from_ce()) as f64
}

/// Inverse of [`date_to_x`]; fractional days are rounded to the nearest day.
pub fn x_to_date(x: f64) -> Option<NaiveDate> {
    if !x.is_finite() {
        return None;
    }
    let days = i32::try_from(x.round() as i64).ok()?;
    NaiveDate::from_num_days_from_ce_opt(EPOCH.num_days_from_ce().checked_add(days)?)
}
