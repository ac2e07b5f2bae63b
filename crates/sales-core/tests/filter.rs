// File: crates/sales-core/tests/filter.rs
// Purpose: Region filtering preserves order and selects exactly the matching records.

use chrono::NaiveDate;
use sales_core::{filter, DataStore, FallbackDataset, Region, RegionSelector, SalesRecord};

#[test]
fn every_selector_returns_only_matching_records_in_order() {
    let store = DataStore::fallback(FallbackDataset::Regional);
    for selector in RegionSelector::OPTIONS {
        let subset = filter(&store, selector);
        assert!(subset.iter().all(|r| selector.matches(r)));

        // subset is a subsequence of the store
        let mut it = store.iter();
        for rec in &subset {
            assert!(it.any(|r| std::ptr::eq(r, *rec)), "order broken for {selector}");
        }
    }
    assert_eq!(filter(&store, RegionSelector::All).len(), store.len());
}

#[test]
fn north_on_regional_fallback_is_eight_january_records() {
    let store = DataStore::fallback(FallbackDataset::Regional);
    let north = filter(&store, RegionSelector::Region(Region::North));
    assert_eq!(north.len(), 8);
    assert_eq!(north.first().unwrap().date, NaiveDate::from_ymd_opt(2021, 1, 1).unwrap());
    assert_eq!(north.last().unwrap().date, NaiveDate::from_ymd_opt(2021, 1, 30).unwrap());
    assert!(north.windows(2).all(|w| w[0].date <= w[1].date));
}

#[test]
fn region_absent_from_store_yields_nothing() {
    let d = NaiveDate::from_ymd_opt(2021, 1, 3).unwrap();
    let store = DataStore::from_records(vec![
        SalesRecord::new(d, 10.0, Region::North),
        SalesRecord::new(d, 12.0, Region::South),
    ]);
    assert!(filter(&store, Region::West.into()).is_empty());
}
