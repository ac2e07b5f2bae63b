// File: crates/sales-render/tests/snapshot.rs
// Purpose: Golden SVG snapshot harness with bless flow.
// Behavior:
// - Renders the compact fallback dataset deterministically (labels off).
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, compares text for exact match against the committed snapshot.
// - A missing snapshot is a failure; bless it with UPDATE_SNAPSHOTS=1.

use sales_core::{build, DataStore, FallbackDataset, RegionSelector};
use sales_render::{render_svg, RenderOptions};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

#[test]
fn golden_compact_chart() {
    let store = DataStore::fallback(FallbackDataset::Compact);
    let spec = build(store.records(), RegionSelector::All);
    let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
    let svg = render_svg(&spec, &opts);

    let snap_path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/compact_chart.svg");
    if bless_mode() {
        if let Some(parent) = snap_path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(&snap_path, &svg).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), svg.len());
        return;
    }

    assert!(
        snap_path.exists(),
        "[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.",
        snap_path.display()
    );
    let want = std::fs::read_to_string(&snap_path).expect("read snapshot");
    assert_eq!(svg, want, "SVG differs: {}", snap_path.display());
}

#[test]
fn compact_chart_snapshot_pins_the_marker_and_every_point() {
    let snap_path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/compact_chart.svg");
    let want = std::fs::read_to_string(&snap_path).expect("read snapshot");
    assert_eq!(want.matches("<circle").count(), 12);
    assert!(want.contains(r#"<g class="marker" data-date="2021-01-15">"#));
    assert!(!want.contains("<text"));
}
