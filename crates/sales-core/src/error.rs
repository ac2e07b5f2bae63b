// File: crates/sales-core/src/error.rs
// Summary: Error types for loading the sales table and handling selection events.

use std::path::PathBuf;

use thiserror::Error;

/// Why a CSV source could not become a `DataStore`.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing required column `{0}`")]
    MissingColumn(&'static str),
    #[error("line {line}: invalid date `{value}`")]
    InvalidDate { line: u64, value: String },
    #[error("line {line}: invalid sales amount `{value}`")]
    InvalidSales { line: u64, value: String },
    #[error("line {line}: unknown region `{value}`")]
    UnknownRegion { line: u64, value: String },
    #[error("no data rows")]
    Empty,
}

/// A selector value outside {all, north, east, south, west}.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown region selector `{value}`")]
pub struct SelectorError {
    pub value: String,
}

/// Rejected UI events.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashboardError {
    #[error("no control with id `{0}`")]
    UnknownControl(String),
    #[error(transparent)]
    InvalidSelector(#[from] SelectorError),
}
