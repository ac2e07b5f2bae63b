// File: crates/sales-dashboard/src/layout.rs
// Summary: Single-page layout: header, description, region radio group, and the chart node.
// Notes:
// - The chart node (`#sales-line-chart`) is created once; the inline script only replaces its contents.
// - In the single-chart variant the radio group is left out entirely.

use std::fmt::Write as _;

use sales_core::{ChartSpec, RegionSelector, CHART_ID, REGION_CONTROL_ID};
use sales_render::render_svg;
use sales_render::svg::escape;

use crate::state::AppState;

pub const HEADER: &str = "Soul Foods: Pink Morsel Sales Visualizer";

pub const DESCRIPTION: &str = "This interactive chart visualizes the daily sales of Pink Morsels, allowing us to \
easily compare sales performance before and after the price increase on January 15, 2021. \
Observe the trend to determine the impact of the price change.";

const STYLE: &str = r#"
body { margin: 0; }
.page { font-family: Arial, sans-serif; padding: 20px; background-color: #e0f2f7; min-height: 100vh;
        display: flex; flex-direction: column; align-items: center; box-sizing: border-box; }
h1 { text-align: center; color: #2c3e50; margin-bottom: 20px; font-size: 2.5em; }
.content { max-width: 900px; width: 95%; margin: auto; border: 1px solid #b3e0ff; border-radius: 12px;
           padding: 25px; box-shadow: 0 6px 12px rgba(0,0,0,0.15); background-color: #ffffff; }
.content p { text-align: center; color: #34495e; margin-bottom: 30px; font-size: 1.1em; }
.radio-items { display: flex; justify-content: center; gap: 18px; margin-bottom: 20px; color: #2c3e50; }
.graph { height: 600px; width: 100%; min-width: 300px; }
.graph svg { width: 100%; height: 100%; }
"#;

const SCRIPT: &str = r#"
(function () {
  var group = document.getElementById('region-radio');
  if (!group) { return; }
  group.addEventListener('change', function (ev) {
    if (!ev.target || ev.target.type !== 'radio') { return; }
    fetch('/api/selection', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify({ control_id: group.id, value: ev.target.value })
    })
      .then(function (res) { return res.ok ? res.json() : null; })
      .then(function (update) {
        if (!update) { return; }
        var node = document.getElementById(update.target);
        if (node) { node.innerHTML = update.svg; }
      });
  });
})();
"#;

/// Full HTML page with the initial chart (selector `All`) already embedded.
pub fn render_page(state: &AppState) -> String {
    let initial = state.controller.initial_chart();
    page_with_chart(&initial, &render_svg(&initial, &state.render), state.region_filter())
}

/// Page markup around an already-rendered chart.
pub fn page_with_chart(spec: &ChartSpec, chart_svg: &str, region_filter: bool) -> String {
    let mut out = String::with_capacity(chart_svg.len() + 4096);
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(out, "<title>{}</title>", escape(HEADER));
    let _ = writeln!(out, "<style>{STYLE}</style>\n</head>\n<body>\n<div class=\"page\">");
    let _ = writeln!(out, "<h1>{}</h1>", escape(HEADER));
    out.push_str("<div class=\"content\">\n");
    let _ = writeln!(out, "<p>{}</p>", escape(DESCRIPTION));
    if region_filter {
        out.push_str(&radio_items(spec.selector));
    }
    let _ = writeln!(out, "<div id=\"{CHART_ID}\" class=\"graph\">{chart_svg}</div>");
    out.push_str("</div>\n</div>\n");
    let _ = writeln!(out, "<script>{SCRIPT}</script>\n</body>\n</html>");
    out
}

/// The region radio group; `checked` marks the current selection.
pub fn radio_items(checked: RegionSelector) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "<div id=\"{REGION_CONTROL_ID}\" class=\"radio-items\" role=\"radiogroup\">");
    for option in RegionSelector::OPTIONS {
        let _ = writeln!(
            out,
            "<label><input type=\"radio\" name=\"region\" value=\"{}\"{}> {}</label>",
            option.as_str(),
            if option == checked { " checked" } else { "" },
            option.label()
        );
    }
    out.push_str("</div>\n");
    out
}
