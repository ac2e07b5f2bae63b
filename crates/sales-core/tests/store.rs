// File: crates/sales-core/tests/store.rs
// Purpose: CSV loading, date ordering, and fallback behaviour of the data store.

use std::io::Write;

use chrono::NaiveDate;
use sales_core::{DataSource, DataStore, FallbackDataset, LoadError, Region};

fn date(m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, m, d).unwrap()
}

fn write_csv(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write csv");
    file.flush().unwrap();
    file
}

#[test]
fn out_of_order_rows_are_sorted_by_date() {
    let csv = "sales,date,region\n\
               300,2021-02-01,north\n\
               100,2021-01-01,south\n\
               200,2021-01-15,east\n";
    let file = write_csv(csv);

    let store = DataStore::from_csv_path(file.path()).expect("load");
    let dates = store.iter().map(|r| r.date).collect::<Vec<_>>();
    assert_eq!(dates, vec![date(1, 1), date(1, 15), date(2, 1)]);
    assert_eq!(store.records()[0].region, Region::South);
    assert_eq!(store.source(), &DataSource::File(file.path().to_path_buf()));
}

#[test]
fn equal_dates_keep_source_order() {
    let csv = "date,sales,region\n2021-01-05,1,west\n2021-01-01,2,north\n2021-01-05,3,east\n";
    let store = DataStore::from_reader(csv.as_bytes()).expect("load");
    let sales = store.iter().map(|r| r.sales).collect::<Vec<_>>();
    assert_eq!(sales, vec![2.0, 1.0, 3.0]);
}

#[test]
fn headers_are_case_insensitive_and_extra_columns_ignored() {
    let csv = "Product, Sales ,DATE,Region\npink morsel,$1,250.00,2021-01-20,SOUTH\n";
    // quoted amount keeps the thousands separator inside one field
    let csv = csv.replace("$1,250.00", "\"$1,250.00\"");
    let store = DataStore::from_reader(csv.as_bytes()).expect("load");
    assert_eq!(store.len(), 1);
    assert_eq!(store.records()[0].sales, 1250.0);
    assert_eq!(store.records()[0].region, Region::South);
}

#[test]
fn malformed_rows_are_reported() {
    let bad_date = "date,sales,region\nnot-a-date,10,north\n";
    assert!(matches!(DataStore::from_reader(bad_date.as_bytes()), Err(LoadError::InvalidDate { .. })));

    let bad_sales = "date,sales,region\n2021-01-01,lots,north\n";
    assert!(matches!(DataStore::from_reader(bad_sales.as_bytes()), Err(LoadError::InvalidSales { .. })));

    let bad_region = "date,sales,region\n2021-01-01,10,central\n";
    assert!(matches!(DataStore::from_reader(bad_region.as_bytes()), Err(LoadError::UnknownRegion { .. })));

    let missing = "date,amount_sold,region\n2021-01-01,10,north\n";
    assert!(matches!(DataStore::from_reader(missing.as_bytes()), Err(LoadError::MissingColumn("sales"))));

    let empty = "date,sales,region\n";
    assert!(matches!(DataStore::from_reader(empty.as_bytes()), Err(LoadError::Empty)));
}

#[test]
fn missing_file_falls_back_without_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = DataStore::load(dir.path().join("formatted_output.csv"), FallbackDataset::Compact);
    assert!(store.is_fallback());
    assert_eq!(store.len(), 12);
    assert_eq!(store.date_range(), Some((date(1, 1), date(2, 20))));
}

#[test]
fn malformed_file_falls_back_to_regional_dataset() {
    let file = write_csv("date,sales,region\n2021-01-01,10,north\n2021-13-40,5,east\n");
    let store = DataStore::load(file.path(), FallbackDataset::Regional);
    assert_eq!(store.source(), &DataSource::Fallback(FallbackDataset::Regional));
    assert_eq!(store.len(), 48);
}

#[test]
fn fallback_datasets_are_sorted_and_cover_every_region() {
    for dataset in [FallbackDataset::Compact, FallbackDataset::Regional] {
        let store = DataStore::fallback(dataset);
        assert!(store.records().windows(2).all(|w| w[0].date <= w[1].date), "{dataset:?}");
        for region in Region::ALL {
            assert!(store.iter().any(|r| r.region == region), "{dataset:?} lacks {region}");
        }
        let (first, last) = store.date_range().unwrap();
        assert!(first < sales_core::PRICE_INCREASE_DATE && last > sales_core::PRICE_INCREASE_DATE);
    }
}
