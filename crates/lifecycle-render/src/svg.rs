//! SVG output for a [`Frame`].

use crate::scene::{Frame, NodeView};
use crate::theme::Theme;
use crate::viewport::Viewport;
use lifecycle_layout::{LayoutEdge, LayoutMode, Point, Polar};
use std::fmt::Write as _;

/// Render a frame as a standalone SVG document
pub fn render_svg(frame: &Frame, viewport: &Viewport, theme: &Theme) -> String {
    let mut svg = String::new();
    let (w, h) = (frame.width, frame.height);

    let _ = write!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" class=\"lifecycle-viz\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">"
    );
    let _ = write!(
        svg,
        "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
        theme.background
    );
    let _ = write!(svg, "<g class=\"viewport\" transform=\"{}\">", viewport.transform());

    for edge in &frame.edges {
        if let Some(d) = link_path(frame, edge) {
            let _ = write!(
                svg,
                "<path class=\"link\" data-target=\"{}\" d=\"{d}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"/>",
                edge.target, theme.link_color, theme.link_width
            );
        }
    }

    for node in frame.nodes.values() {
        svg.push_str(&node_svg(frame.mode, node, theme));
    }

    svg.push_str("</g></svg>");
    svg
}

fn node_svg(mode: LayoutMode, node: &NodeView, theme: &Theme) -> String {
    let class = if node.has_hidden_children {
        "node collapsed"
    } else {
        "node"
    };
    let fill = theme.fill(node.has_hidden_children);
    let Point { x, y } = node.position;
    let r = theme.node_radius;
    let offset = theme.label_offset;

    let (transform, shape, label_attrs) = match (mode, node.polar) {
        (LayoutMode::Radial, Some(polar)) => {
            let (lx, anchor, flip) = radial_label(polar, offset);
            (
                format!("translate({x:.2},{y:.2}) rotate({:.2})", polar.rotation_degrees()),
                format!(
                    "<circle r=\"{r}\" fill=\"{fill}\" stroke=\"{}\" stroke-width=\"1\"/>",
                    theme.node_stroke
                ),
                format!("x=\"{lx}\" text-anchor=\"{anchor}\"{flip}"),
            )
        }
        _ => (
            format!("translate({x:.2},{y:.2})"),
            format!(
                "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" rx=\"2\" fill=\"{fill}\" stroke=\"{}\" stroke-width=\"1\"/>",
                -r,
                -r,
                r * 2.0,
                r * 2.0,
                theme.node_stroke
            ),
            format!("x=\"{offset}\" text-anchor=\"start\""),
        ),
    };

    format!(
        "<g class=\"{class}\" data-id=\"{}\" data-kind=\"{}\" transform=\"{transform}\">{shape}<text dy=\"0.31em\" {label_attrs} font-family=\"{}\" font-size=\"{}\" fill=\"{}\">{}</text><title>{}</title></g>",
        node.id,
        node.kind,
        theme.font_family,
        theme.font_size,
        theme.text_color,
        escape_xml(&node.name),
        escape_xml(&node.tooltip)
    )
}

/// Label x offset, anchor and flip for a radial node
fn radial_label(polar: Polar, offset: f64) -> (f64, &'static str, &'static str) {
    if polar.is_left_half() {
        (-offset, "end", " transform=\"rotate(180)\"")
    } else {
        (offset, "start", "")
    }
}

fn link_path(frame: &Frame, edge: &LayoutEdge) -> Option<String> {
    let source = frame.nodes.get(&edge.source)?;
    let target = frame.nodes.get(&edge.target)?;

    match (frame.mode, source.polar, target.polar) {
        (LayoutMode::Radial, Some(s), Some(t)) => {
            let mid = (s.radius + t.radius) / 2.0;
            let p0 = source.position;
            let c1 = Polar::new(s.angle, mid).project(frame.centre);
            let c2 = Polar::new(t.angle, mid).project(frame.centre);
            let p1 = target.position;
            Some(format!(
                "M{:.2},{:.2}C{:.2},{:.2} {:.2},{:.2} {:.2},{:.2}",
                p0.x, p0.y, c1.x, c1.y, c2.x, c2.y, p1.x, p1.y
            ))
        }
        _ => {
            let (s, t) = (source.position, target.position);
            let mx = (s.x + t.x) / 2.0;
            Some(format!(
                "M{:.2},{:.2}C{mx:.2},{:.2} {mx:.2},{:.2} {:.2},{:.2}",
                s.x, s.y, s.y, t.y, t.x, t.y
            ))
        }
    }
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
