// File: crates/sales-dashboard/tests/config.rs
// Purpose: Config defaults and how they shape the loaded state.

use std::io::Write;

use sales_core::{DataSource, FallbackDataset};
use sales_dashboard::{AppState, DashboardConfig};

#[test]
fn defaults_match_the_filterable_dashboard() {
    let config = DashboardConfig::default();
    assert_eq!(config.data_path, std::path::PathBuf::from("formatted_output.csv"));
    assert_eq!(config.bind.port(), 8050);
    assert!(config.region_filter);
    assert_eq!(config.fallback_dataset(), FallbackDataset::Regional);
    assert_eq!(config.clone().with_region_filter(false).fallback_dataset(), FallbackDataset::Compact);
}

#[test]
fn missing_data_file_serves_variant_fallback() {
    let dir = tempfile::tempdir().unwrap();
    let config = DashboardConfig::default()
        .with_data_path(dir.path().join("nope.csv"))
        .with_region_filter(false)
        .with_theme("dark");
    let state = AppState::from_config(&config);
    assert_eq!(state.controller.store().source(), &DataSource::Fallback(FallbackDataset::Compact));
    assert!(!state.region_filter());
    assert_eq!(state.controller.initial_chart().theme.name, "dark");
}

#[test]
fn csv_file_is_used_when_valid() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "date,sales,region\n2021-01-20,50,east\n2021-01-10,40,west").unwrap();
    let config = DashboardConfig::default().with_data_path(file.path());
    let state = AppState::from_config(&config);
    let store = state.controller.store();
    assert_eq!(store.len(), 2);
    assert!(!store.is_fallback());
    assert_eq!(store.records()[0].sales, 40.0);
}
