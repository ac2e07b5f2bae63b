// File: crates/sales-render/src/svg.rs
// Summary: Headless SVG rendering of a ChartSpec (grid, axes, series polyline with hover titles, price-increase marker).

use std::fmt::Write as _;

use sales_core::grid::{date_ticks, linspace};
use sales_core::ChartSpec;

use crate::scale::Projection;
use crate::RenderOptions;

const X_TICKS: usize = 6;
const Y_TICKS: usize = 6;

/// Render `spec` to a standalone `<svg>` document.
pub fn render_svg(spec: &ChartSpec, opts: &RenderOptions) -> String {
    let p = Projection::new(spec, opts);
    let theme = &spec.theme;
    let mut out = String::with_capacity(4096 + spec.points.len() * 160);

    // writing into a String cannot fail
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" class="sales-chart" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="{font}">"#,
        w = opts.width,
        h = opts.height,
        font = escape(&theme.font_family),
    );
    let _ = write!(
        out,
        r#"<rect width="{}" height="{}" fill="{}"/>"#,
        opts.width,
        opts.height,
        escape(&theme.paper_background)
    );
    let _ = write!(
        out,
        r#"<rect class="plot" x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}"/>"#,
        p.left,
        p.top,
        p.width(),
        p.height(),
        escape(&theme.plot_background)
    );

    draw_grid(&mut out, spec, &p, opts);
    draw_axes(&mut out, spec, &p, opts);
    draw_series(&mut out, spec, &p);
    draw_marker(&mut out, spec, &p, opts);

    if opts.draw_labels {
        let _ = write!(
            out,
            r#"<text class="title" x="{:.1}" y="{:.1}" font-size="20" fill="{}">{}</text>"#,
            p.left,
            (p.top * 0.5).max(20.0),
            escape(&theme.title),
            escape(&spec.title)
        );
        if spec.is_empty() {
            let _ = write!(
                out,
                r#"<text class="empty" x="{:.1}" y="{:.1}" text-anchor="middle" font-size="14" fill="{}">No data for this selection</text>"#,
                (p.left + p.right) * 0.5,
                (p.top + p.bottom) * 0.5,
                escape(&theme.axis_label)
            );
        }
    }

    out.push_str("</svg>");
    out
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(out: &mut String, spec: &ChartSpec, p: &Projection, opts: &RenderOptions) {
    let theme = &spec.theme;
    let w = &p.window;

    out.push_str(r#"<g class="grid">"#);
    for y in linspace(w.y_min, w.y_max, Y_TICKS) {
        let py = p.sy(y);
        let _ = write!(
            out,
            r#"<line x1="{:.1}" y1="{py:.1}" x2="{:.1}" y2="{py:.1}" stroke="{}" stroke-width="1"/>"#,
            p.left,
            p.right,
            escape(&theme.grid)
        );
        if opts.draw_labels {
            let _ = write!(
                out,
                r#"<text x="{:.1}" y="{:.1}" text-anchor="end" font-size="11" fill="{}">{:.0}</text>"#,
                p.left - 4.0,
                py + 4.0,
                escape(&theme.axis_label),
                y
            );
        }
    }
    for (x, date) in date_ticks(w.x_min, w.x_max, X_TICKS) {
        let px = p.sx(x);
        let _ = write!(
            out,
            r#"<line x1="{px:.1}" y1="{:.1}" x2="{px:.1}" y2="{:.1}" stroke="{}" stroke-width="1"/>"#,
            p.top,
            p.bottom,
            escape(&theme.grid)
        );
        if opts.draw_labels {
            let _ = write!(
                out,
                r#"<text x="{px:.1}" y="{:.1}" text-anchor="middle" font-size="11" fill="{}">{}</text>"#,
                p.bottom + 14.0,
                escape(&theme.axis_label),
                date.format("%b %d")
            );
        }
    }
    out.push_str("</g>");
}

fn draw_axes(out: &mut String, spec: &ChartSpec, p: &Projection, opts: &RenderOptions) {
    let theme = &spec.theme;
    let stroke = escape(&theme.axis_line);
    let _ = write!(
        out,
        r#"<g class="axes"><line x1="{l:.1}" y1="{b:.1}" x2="{r:.1}" y2="{b:.1}" stroke="{stroke}" stroke-width="1.5"/><line x1="{l:.1}" y1="{t:.1}" x2="{l:.1}" y2="{b:.1}" stroke="{stroke}" stroke-width="1.5"/>"#,
        l = p.left,
        r = p.right,
        t = p.top,
        b = p.bottom,
    );
    if opts.draw_labels {
        let fill = escape(&theme.axis_label);
        let _ = write!(
            out,
            r#"<text class="x-label" x="{:.1}" y="{:.1}" text-anchor="middle" font-size="13" fill="{fill}">{}</text>"#,
            (p.left + p.right) * 0.5,
            p.bottom + 32.0,
            escape(&spec.x_axis.label)
        );
        let cy = (p.top + p.bottom) * 0.5;
        let _ = write!(
            out,
            r#"<text class="y-label" x="12" y="{cy:.1}" transform="rotate(-90 12 {cy:.1})" text-anchor="middle" font-size="13" fill="{fill}">{}</text>"#,
            escape(&spec.y_axis.label)
        );
    }
    out.push_str("</g>");
}

fn draw_series(out: &mut String, spec: &ChartSpec, p: &Projection) {
    if spec.points.is_empty() {
        return;
    }
    let stroke = escape(&spec.theme.line_stroke);

    out.push_str(r#"<g class="series">"#);
    if spec.points.len() >= 2 {
        out.push_str(r#"<polyline fill="none" stroke-width="2" stroke=""#);
        out.push_str(&stroke);
        out.push_str(r#"" points=""#);
        for (i, pt) in spec.points.iter().enumerate() {
            let (x, y) = pt.xy();
            if i > 0 { out.push(' '); }
            let _ = write!(out, "{:.1},{:.1}", p.sx(x), p.sy(y));
        }
        out.push_str(r#""/>"#);
    }
    // one hoverable dot per point; <title> is the browser tooltip
    for pt in &spec.points {
        let (x, y) = pt.xy();
        let tip = pt.hover_lines().collect::<Vec<_>>().join("\n");
        let _ = write!(
            out,
            r#"<circle cx="{:.1}" cy="{:.1}" r="3.5" fill="{stroke}" data-region="{}"><title>{}</title></circle>"#,
            p.sx(x),
            p.sy(y),
            pt.region.as_str(),
            escape(&tip)
        );
    }
    out.push_str("</g>");
}

fn draw_marker(out: &mut String, spec: &ChartSpec, p: &Projection, opts: &RenderOptions) {
    let m = &spec.marker;
    let [(x, y0), (_, y1)] = m.segment(p.window.y_min, p.window.y_max);
    let px = p.sx(x);
    let color = escape(&m.color);

    let _ = write!(
        out,
        r#"<g class="marker" data-date="{}"><line x1="{px:.1}" y1="{:.1}" x2="{px:.1}" y2="{:.1}" stroke="{color}" stroke-width="2""#,
        m.date.format("%Y-%m-%d"),
        p.sy(y0),
        p.sy(y1),
    );
    if let Some(dash) = m.dash.dasharray() {
        let _ = write!(out, r#" stroke-dasharray="{dash}""#);
    }
    out.push_str("/>");

    if opts.draw_labels {
        use sales_core::marker::AnnotationPosition;
        let (tx, anchor) = match m.annotation_position {
            AnnotationPosition::TopRight => (px + 4.0, "start"),
            AnnotationPosition::TopLeft => (px - 4.0, "end"),
        };
        let _ = write!(
            out,
            r#"<text x="{tx:.1}" y="{:.1}" text-anchor="{anchor}" font-size="12" fill="{color}">{}</text>"#,
            p.top + 14.0,
            escape(&m.label)
        );
    }
    out.push_str("</g>");
}

/// Minimal XML escaping for text and attribute values.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
