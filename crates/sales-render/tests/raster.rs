// File: crates/sales-render/tests/raster.rs
// Purpose: PNG rendering produces a decodable image of the requested size (feature `raster`).
#![cfg(feature = "raster")]

use sales_core::{build, DataStore, FallbackDataset, RegionSelector};
use sales_render::{render_png_bytes, RenderOptions};

#[test]
fn render_png_has_requested_size() {
    let store = DataStore::fallback(FallbackDataset::Compact);
    let spec = build(store.records(), RegionSelector::All);
    let opts = RenderOptions { width: 640, height: 400, draw_labels: false };

    let bytes = render_png_bytes(&spec, &opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let img = image::load_from_memory(&bytes).expect("decode png").to_rgba8();
    assert_eq!((img.width(), img.height()), (640, 400));
    // paper background is opaque white
    assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 255]);
}

#[test]
fn empty_spec_still_renders() {
    let spec = build(std::iter::empty(), RegionSelector::All);
    let bytes = render_png_bytes(&spec, &RenderOptions::default()).expect("render bytes");
    assert!(!bytes.is_empty());
}
