//! SVG serialization of a laid-out timeline.

use crate::layout::{EventGeometry, Shape, TimelineLayout};
use crate::types::Event;
use crate::xml_helpers::escape_xml;

use super::colors::{
    palette, FONT_FAMILY, LABEL_FONT_SIZE, LABEL_FONT_WEIGHT, NODE_STROKE_WIDTH,
};

/// `data-kind` value marking an event group.
pub const EVENT_KIND: &str = "event";

/// Render placed events into a standalone SVG document.
///
/// Events are emitted in slice order, one `<g>` per event carrying
/// `data-title`, `data-start-year`, `data-end-year` and `data-lane`. The
/// output ends with exactly one newline and contains nothing that varies
/// between runs.
pub fn render_svg(events: &[Event], lane_count: usize, layout: &TimelineLayout) -> String {
    let size = layout.canvas_size(lane_count);
    let g = &layout.geometry;
    let guide_y = g.top_margin.saturating_add(layout.track_height(lane_count));
    let axis_end = g.left_margin.saturating_add(layout.scale.axis_width());

    let mut lines: Vec<String> = Vec::with_capacity(events.len() * 4 + 4);
    lines.push(format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="{FONT_FAMILY}">"#,
        w = size.width,
        h = size.height,
    ));
    lines.push(format!(
        r#"  <rect x="0" y="0" width="{}" height="{}" fill="{}" />"#,
        size.width,
        size.height,
        palette::BACKGROUND
    ));
    // Keeps the placement scale visible once imported
    lines.push(format!(
        r#"  <line x1="{}" y1="{guide_y}" x2="{axis_end}" y2="{guide_y}" stroke="{}" stroke-width="1" />"#,
        g.left_margin,
        palette::TRACK_GUIDE
    ));

    for event in events {
        push_event(&mut lines, event, &layout.event_geometry(event));
    }

    lines.push("</svg>".to_string());

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn push_event(lines: &mut Vec<String>, event: &Event, geom: &EventGeometry) {
    let label = escape_xml(&event.title);

    lines.push(format!(
        r#"  <g data-kind="{EVENT_KIND}" data-title="{label}" data-start-year="{}" data-end-year="{}" data-lane="{}">"#,
        event.start_year, event.end_year, event.lane
    ));

    match geom.shape {
        Shape::Circle { cx, cy, r } => lines.push(format!(
            r#"    <circle cx="{cx}" cy="{cy}" r="{r}" fill="{}" stroke="{}" stroke-width="{NODE_STROKE_WIDTH}" />"#,
            palette::NODE_FILL,
            palette::INK
        )),
        Shape::RoundedRect {
            x,
            y,
            width,
            height,
            rx,
        } => lines.push(format!(
            r#"    <rect x="{x}" y="{y}" width="{width}" height="{height}" rx="{rx}" fill="{}" stroke="{}" stroke-width="{NODE_STROKE_WIDTH}" />"#,
            palette::NODE_FILL,
            palette::INK
        )),
    }

    lines.push(format!(
        r#"    <text x="{}" y="{}" font-size="{LABEL_FONT_SIZE}" font-weight="{LABEL_FONT_WEIGHT}" fill="{}">{label}</text>"#,
        geom.label_x,
        geom.label_y,
        palette::INK
    ));
    lines.push("  </g>".to_string());
}
