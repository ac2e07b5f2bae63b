// File: crates/sales-render/tests/svg.rs
// Purpose: SVG output contains the series, hover text, and a marker that survives empty selections.

use sales_core::{build, filter, DataStore, FallbackDataset, Region, RegionSelector};
use sales_render::{render_svg, Projection, RenderOptions};

fn regional() -> DataStore {
    DataStore::fallback(FallbackDataset::Regional)
}

#[test]
fn full_chart_has_polyline_dots_and_title() {
    let store = regional();
    let spec = build(filter(&store, RegionSelector::All), RegionSelector::All);
    let svg = render_svg(&spec, &RenderOptions::default());

    assert!(svg.starts_with("<svg"));
    assert!(svg.ends_with("</svg>"));
    assert_eq!(svg.matches("<polyline").count(), 1);
    assert_eq!(svg.matches("<circle").count(), 48);
    assert!(svg.contains("Sales Over Time (Region: All)"));
    assert!(svg.contains("Region: South\nDate: 2021-02-20"));
}

#[test]
fn marker_is_drawn_even_without_points() {
    let store = DataStore::from_records(Vec::new());
    let selector = RegionSelector::Region(Region::East);
    let spec = build(filter(&store, selector), selector);
    let svg = render_svg(&spec, &RenderOptions::default());

    assert!(svg.contains(r#"class="marker" data-date="2021-01-15""#));
    assert!(svg.contains("Price Increase Date"));
    assert!(svg.contains("stroke-dasharray"));
    assert!(!svg.contains("<polyline"));
    assert!(svg.contains("No data for this selection"));
}

#[test]
fn marker_stays_inside_plot_when_data_is_after_it() {
    let store = regional();
    let after = store.iter().filter(|r| r.date > sales_core::PRICE_INCREASE_DATE).collect::<Vec<_>>();
    let spec = build(after, RegionSelector::All);
    let opts = RenderOptions::default();
    let p = Projection::new(&spec, &opts);
    let px = p.sx(spec.marker.x());
    assert!(px >= p.left - 1e-6 && px <= p.right + 1e-6);
}

#[test]
fn labels_can_be_turned_off() {
    let store = regional();
    let spec = build(store.records(), RegionSelector::All);
    let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
    let svg = render_svg(&spec, &opts);
    assert!(!svg.contains("<text"));
    assert!(svg.contains(r#"class="marker""#));
}

#[test]
fn plot_area_is_the_figure_minus_margins() {
    let store = regional();
    let spec = build(store.records(), RegionSelector::All);
    let p = Projection::new(&spec, &RenderOptions::default());
    assert_eq!((p.left, p.top, p.right, p.bottom), (40.0, 80.0, 860.0, 560.0));
    assert_eq!(p.width(), 900.0 - spec.theme.margins.hsum() as f64);
    assert_eq!(p.height(), 600.0 - spec.theme.margins.vsum() as f64);

    // figures smaller than the margins still keep a one-pixel plot
    let tiny = RenderOptions { width: 50, height: 50, draw_labels: false };
    let p = Projection::new(&spec, &tiny);
    assert_eq!((p.width(), p.height()), (1.0, 1.0));
}
