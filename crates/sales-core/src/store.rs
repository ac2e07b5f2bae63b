// File: crates/sales-core/src/store.rs
// Summary: Immutable, date-sorted record store loaded from CSV with a built-in fallback dataset.
// Notes:
// - `DataStore::load` never fails: any problem with the file is logged and the
//   fallback dataset is served instead, so the dashboard is always demonstrable.
// - Records are sorted once at construction and never mutated afterwards.

use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::error::LoadError;
use crate::record::{Region, SalesRecord};

const DATE_COLUMNS: &[&str] = &["date", "day", "datetime", "timestamp"];
const SALES_COLUMNS: &[&str] = &["sales", "total_sales", "amount", "revenue"];
const REGION_COLUMNS: &[&str] = &["region", "territory"];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Built-in demo data used when the CSV source is unavailable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FallbackDataset {
    /// 12 records, one region per date, Jan 1 .. Feb 20 2021.
    Compact,
    /// 48 records across all regions; North reports only in January.
    Regional,
}

/// Where the records of a store came from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    File(PathBuf),
    Reader,
    Records,
    Fallback(FallbackDataset),
}

/// Ordered (ascending by date, stable) sales records for the whole session.
#[derive(Clone, Debug)]
pub struct DataStore {
    records: Vec<SalesRecord>,
    source: DataSource,
}

impl DataStore {
    /// Build a store from arbitrary records; sorts them by date.
    pub fn from_records(records: Vec<SalesRecord>) -> Self {
        Self::sorted(records, DataSource::Records)
    }

    /// Load `path`, falling back to `fallback` on any error.
    pub fn load(path: impl AsRef<Path>, fallback: FallbackDataset) -> Self {
        let path = path.as_ref();
        match Self::from_csv_path(path) {
            Ok(store) => {
                tracing::info!(
                    path = %path.display(),
                    records = store.len(),
                    "loaded sales data"
                );
                store
            }
            Err(error) => {
                tracing::warn!(
                    path = %path.display(),
                    %error,
                    dataset = ?fallback,
                    "could not load sales data; using built-in dataset"
                );
                Self::fallback(fallback)
            }
        }
    }

    /// Strict CSV load from a file path.
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut store = Self::from_reader(file)?;
        store.source = DataSource::File(path.to_path_buf());
        Ok(store)
    }

    /// Strict CSV load from any reader. The first row must be a header.
    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self, LoadError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr
            .headers()?
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').trim().to_lowercase())
            .collect::<Vec<_>>();
        tracing::debug!(?headers, "csv headers");

        let idx = |names: &[&str]| -> Option<usize> {
            headers.iter().position(|h| names.contains(&h.as_str()))
        };
        let i_date = idx(DATE_COLUMNS).ok_or(LoadError::MissingColumn("date"))?;
        let i_sales = idx(SALES_COLUMNS).ok_or(LoadError::MissingColumn("sales"))?;
        let i_region = idx(REGION_COLUMNS).ok_or(LoadError::MissingColumn("region"))?;

        let mut out = Vec::new();
        for rec in rdr.records() {
            let rec = rec?;
            let line = rec.position().map(|p| p.line()).unwrap_or_default();
            let field = |i: usize| rec.get(i).unwrap_or("");

            let raw = field(i_date);
            let date = parse_date(raw)
                .ok_or_else(|| LoadError::InvalidDate { line, value: raw.to_string() })?;

            let raw = field(i_sales);
            let sales = parse_sales(raw)
                .ok_or_else(|| LoadError::InvalidSales { line, value: raw.to_string() })?;

            let raw = field(i_region);
            let region = raw
                .parse::<Region>()
                .map_err(|_| LoadError::UnknownRegion { line, value: raw.to_string() })?;

            out.push(SalesRecord::new(date, sales, region));
        }

        if out.is_empty() {
            return Err(LoadError::Empty);
        }
        Ok(Self::sorted(out, DataSource::Reader))
    }

    /// One of the built-in datasets.
    pub fn fallback(dataset: FallbackDataset) -> Self {
        let records = match dataset {
            FallbackDataset::Compact => compact_records(),
            FallbackDataset::Regional => regional_records(),
        };
        Self::sorted(records, DataSource::Fallback(dataset))
    }

    fn sorted(mut records: Vec<SalesRecord>, source: DataSource) -> Self {
        // stable: equal dates keep source order
        records.sort_by_key(|r| r.date);
        Self { records, source }
    }

    pub fn records(&self) -> &[SalesRecord] { &self.records }
    pub fn iter(&self) -> std::slice::Iter<'_, SalesRecord> { self.records.iter() }
    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }
    pub fn source(&self) -> &DataSource { &self.source }

    /// True when the records are the built-in demo data.
    pub fn is_fallback(&self) -> bool { matches!(self.source, DataSource::Fallback(_)) }

    /// First and last date, if any.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.records.first()?.date, self.records.last()?.date))
    }
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }
    DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive())
}

/// Accepts `1234.5`, `$1,234.50`. Negative or non-finite amounts are rejected.
fn parse_sales(s: &str) -> Option<f64> {
    let cleaned = s.trim().trim_start_matches('$').replace(',', "");
    let v = cleaned.trim().parse::<f64>().ok()?;
    (v.is_finite() && v >= 0.0).then_some(v)
}

// ---- built-in datasets -------------------------------------------------------

fn day(month: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(2021, month, d)
}

fn compact_records() -> Vec<SalesRecord> {
    // Before the price increase: Jan 1..14; after: Jan 16 onward.
    const ROWS: [(u32, u32, f64); 12] = [
        (1, 1, 100.0), (1, 5, 120.0), (1, 10, 80.0), (1, 14, 150.0),
        (1, 16, 110.0), (1, 20, 180.0), (1, 25, 160.0), (1, 30, 200.0),
        (2, 5, 190.0), (2, 10, 210.0), (2, 15, 220.0), (2, 20, 250.0),
    ];
    const ROTATION: [Region; 4] = [Region::North, Region::South, Region::East, Region::West];
    ROWS.iter()
        .zip(ROTATION.iter().cycle())
        .filter_map(|(&(m, d, sales), &region)| Some(SalesRecord::new(day(m, d)?, sales, region)))
        .collect()
}

fn regional_records() -> Vec<SalesRecord> {
    const JAN: [(u32, u32); 8] = [(1, 1), (1, 5), (1, 10), (1, 14), (1, 16), (1, 20), (1, 25), (1, 30)];
    const FEB: [(u32, u32); 8] = [(2, 3), (2, 5), (2, 8), (2, 10), (2, 13), (2, 15), (2, 18), (2, 20)];

    const NORTH: [f64; 8] = [100.0, 120.0, 80.0, 150.0, 110.0, 180.0, 160.0, 200.0];
    const EAST: [f64; 8] = [90.0, 95.0, 105.0, 98.0, 140.0, 150.0, 145.0, 165.0];
    const SOUTH: [f64; 16] = [
        120.0, 115.0, 125.0, 130.0, 170.0, 175.0, 180.0, 185.0,
        190.0, 188.0, 195.0, 200.0, 205.0, 198.0, 210.0, 215.0,
    ];
    const WEST: [f64; 16] = [
        80.0, 85.0, 90.0, 88.0, 120.0, 125.0, 118.0, 130.0,
        135.0, 140.0, 138.0, 145.0, 150.0, 148.0, 155.0, 160.0,
    ];

    let jan_feb = JAN.iter().chain(FEB.iter()).copied().collect::<Vec<_>>();

    let mut out = Vec::with_capacity(48);
    let mut push = |region: Region, dates: &[(u32, u32)], sales: &[f64]| {
        for (&(m, d), &amount) in dates.iter().zip(sales) {
            if let Some(date) = day(m, d) {
                out.push(SalesRecord::new(date, amount, region));
            }
        }
    };
    push(Region::North, &JAN, &NORTH);
    push(Region::East, &JAN, &EAST);
    push(Region::South, &jan_feb, &SOUTH);
    push(Region::West, &jan_feb, &WEST);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sales_parser_accepts_currency_formatting() {
        assert_eq!(parse_sales("$1,234.50"), Some(1234.5));
        assert_eq!(parse_sales(" 42 "), Some(42.0));
        assert_eq!(parse_sales("-3"), None);
        assert_eq!(parse_sales("NaN"), None);
        assert_eq!(parse_sales("abc"), None);
    }

    #[test]
    fn date_parser_accepts_common_layouts() {
        let want = NaiveDate::from_ymd_opt(2021, 1, 15).unwrap();
        for s in ["2021-01-15", "2021/01/15", "01/15/2021", "2021-01-15 08:30:00", "2021-01-15T08:30:00", "2021-01-15T08:30:00Z"] {
            assert_eq!(parse_date(s), Some(want), "{s}");
        }
        assert_eq!(parse_date("15.01.2021"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn built_in_datasets_have_expected_sizes() {
        assert_eq!(compact_records().len(), 12);
        assert_eq!(regional_records().len(), 48);
    }
}
