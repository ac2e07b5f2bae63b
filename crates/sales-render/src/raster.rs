// File: crates/sales-render/src/raster.rs
// Summary: Headless PNG rendering of a ChartSpec using Skia CPU raster surfaces.

use anyhow::Result;
use skia_safe as skia;

use sales_core::grid::{date_ticks, linspace};
use sales_core::theme::parse_hex;
use sales_core::ChartSpec;

use crate::scale::Projection;
use crate::RenderOptions;

/// Render `spec` to PNG bytes.
pub fn render_png_bytes(spec: &ChartSpec, opts: &RenderOptions) -> Result<Vec<u8>> {
    let mut surface = skia::surfaces::raster_n32_premul((opts.width as i32, opts.height as i32))
        .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
    let canvas = surface.canvas();
    let p = Projection::new(spec, opts);
    let theme = &spec.theme;

    canvas.clear(color(&theme.paper_background));
    let mut plot_bg = skia::Paint::default();
    plot_bg.set_color(color(&theme.plot_background));
    canvas.draw_rect(rect(&p), &plot_bg);

    draw_grid(canvas, spec, &p, opts);
    draw_axes(canvas, spec, &p, opts);
    draw_line_series(canvas, spec, &p);
    draw_marker(canvas, spec, &p, opts);

    if opts.draw_labels {
        let mut paint_text = skia::Paint::default();
        paint_text.set_anti_alias(true);
        paint_text.set_color(color(&theme.title));
        let mut font = skia::Font::default();
        font.set_size(20.0);
        canvas.draw_str(&spec.title, (p.left as f32, (p.top * 0.5).max(20.0) as f32), &font, &paint_text);
    }

    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

// ---- helpers ----------------------------------------------------------------

fn color(css: &str) -> skia::Color {
    let (r, g, b) = parse_hex(css).unwrap_or((0, 0, 0));
    skia::Color::from_rgb(r, g, b)
}

fn rect(p: &Projection) -> skia::Rect {
    skia::Rect::from_ltrb(p.left as f32, p.top as f32, p.right as f32, p.bottom as f32)
}

fn draw_grid(canvas: &skia::Canvas, spec: &ChartSpec, p: &Projection, opts: &RenderOptions) {
    let mut paint = skia::Paint::default();
    paint.set_color(color(&spec.theme.grid));
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    let mut paint_text = skia::Paint::default();
    paint_text.set_anti_alias(true);
    paint_text.set_color(color(&spec.theme.axis_label));
    let mut font = skia::Font::default();
    font.set_size(11.0);

    let w = &p.window;
    // horizontals
    for y in linspace(w.y_min, w.y_max, 6) {
        let py = p.sy(y) as f32;
        canvas.draw_line((p.left as f32, py), (p.right as f32, py), &paint);
        if opts.draw_labels {
            canvas.draw_str(format!("{y:.0}"), (2.0, py + 4.0), &font, &paint_text);
        }
    }
    // verticals
    for (x, date) in date_ticks(w.x_min, w.x_max, 6) {
        let px = p.sx(x) as f32;
        canvas.draw_line((px, p.top as f32), (px, p.bottom as f32), &paint);
        if opts.draw_labels {
            let label = date.format("%b %d").to_string();
            canvas.draw_str(&label, (px - 18.0, p.bottom as f32 + 14.0), &font, &paint_text);
        }
    }
}

fn draw_axes(canvas: &skia::Canvas, spec: &ChartSpec, p: &Projection, opts: &RenderOptions) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(color(&spec.theme.axis_line));
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.5);

    let (l, t, r, b) = (p.left as f32, p.top as f32, p.right as f32, p.bottom as f32);
    canvas.draw_line((l, b), (r, b), &axis_paint);
    canvas.draw_line((l, t), (l, b), &axis_paint);

    if opts.draw_labels {
        let mut paint_text = skia::Paint::default();
        paint_text.set_anti_alias(true);
        paint_text.set_color(color(&spec.theme.axis_label));
        let mut font = skia::Font::default();
        font.set_size(13.0);
        canvas.draw_str(&spec.x_axis.label, ((l + r) * 0.5 - 16.0, b + 32.0), &font, &paint_text);
        canvas.draw_str(&spec.y_axis.label, (l, t - 8.0), &font, &paint_text);
    }
}

fn draw_line_series(canvas: &skia::Canvas, spec: &ChartSpec, p: &Projection) {
    let stroke_color = color(&spec.theme.line_stroke);
    let mut dot = skia::Paint::default();
    dot.set_anti_alias(true);
    dot.set_color(stroke_color);

    let pts = spec
        .points
        .iter()
        .map(|pt| {
            let (x, y) = pt.xy();
            (p.sx(x) as f32, p.sy(y) as f32)
        })
        .collect::<Vec<_>>();

    if pts.len() >= 2 {
        let mut path = skia::Path::new();
        path.move_to(pts[0]);
        for &pt in pts.iter().skip(1) {
            path.line_to(pt);
        }
        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(2.0);
        stroke.set_color(stroke_color);
        canvas.draw_path(&path, &stroke);
    }
    for &pt in &pts {
        canvas.draw_circle(pt, 3.5, &dot);
    }
}

fn draw_marker(canvas: &skia::Canvas, spec: &ChartSpec, p: &Projection, opts: &RenderOptions) {
    let m = &spec.marker;
    let [(x, y0), (_, y1)] = m.segment(p.window.y_min, p.window.y_max);
    let px = p.sx(x) as f32;

    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(2.0);
    paint.set_color(color(&m.color));
    if let Some(dash) = m.dash.dasharray() {
        let intervals = dash.split(',').filter_map(|v| v.trim().parse::<f32>().ok()).collect::<Vec<_>>();
        paint.set_path_effect(skia::PathEffect::dash(&intervals, 0.0));
    }
    canvas.draw_line((px, p.sy(y0) as f32), (px, p.sy(y1) as f32), &paint);

    if opts.draw_labels {
        let mut paint_text = skia::Paint::default();
        paint_text.set_anti_alias(true);
        paint_text.set_color(color(&m.color));
        let mut font = skia::Font::default();
        font.set_size(12.0);
        canvas.draw_str(&m.label, (px + 4.0, p.top as f32 + 14.0), &font, &paint_text);
    }
}
