use crate::layout::{Layout, Point};
use friendgraph_core::{SocialGraph, UserProfile};
use std::collections::HashSet;
use std::fmt::Write;

const BACKGROUND: &str = "#121212";
const NODE_FILL: &str = "#85fb64";
const SELECTED_FILL: &str = "#4da3ff";
const RECOMMENDED_FILL: &str = "#ffb347";
const EDGE_STROKE: &str = "gray";
const PANEL_TEXT: &str = "#cccccc";
const NODE_RADIUS: f64 = 15.0;

/// Canvas settings. The left `panel_width` pixels hold the text panel.
#[derive(Debug, Clone)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
    pub panel_width: u32,
    pub margin: f64,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            panel_width: 260,
            margin: 40.0,
        }
    }
}

/// What the picture should call out.
#[derive(Debug, Default)]
pub struct Highlight<'a> {
    pub selected: Option<&'a UserProfile>,
    pub recommended: Vec<&'a UserProfile>,
}

impl Canvas {
    fn project(&self, p: Point) -> (f64, f64) {
        let left = self.panel_width as f64 + self.margin;
        let usable_w = (self.width as f64 - left - self.margin).max(1.0);
        let usable_h = (self.height as f64 - 2.0 * self.margin).max(1.0);
        (
            left + (p.x + 1.0) / 2.0 * usable_w,
            self.margin + (p.y + 1.0) / 2.0 * usable_h,
        )
    }
}

pub fn render_svg(graph: &SocialGraph, layout: &Layout, canvas: &Canvas, highlight: &Highlight<'_>) -> String {
    let recommended: HashSet<&str> = highlight
        .recommended
        .iter()
        .map(|u| u.name.as_str())
        .collect();
    let selected = highlight.selected.map(|u| u.name.as_str());

    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = canvas.width,
        h = canvas.height
    );
    let _ = writeln!(out, r#"<rect width="100%" height="100%" fill="{}"/>"#, BACKGROUND);

    render_panel(&mut out, canvas, highlight);

    let _ = writeln!(out, r#"<g class="edges" stroke="{}" stroke-width="1.5">"#, EDGE_STROKE);
    for (a, b) in graph.connections() {
        let (Some(pa), Some(pb)) = (layout.position(&a.name), layout.position(&b.name)) else {
            continue;
        };
        let (x1, y1) = canvas.project(pa);
        let (x2, y2) = canvas.project(pb);
        let _ = writeln!(
            out,
            r#"<line class="edge" data-from="{}" data-to="{}" x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}"/>"#,
            escape(&a.name),
            escape(&b.name),
            x1,
            y1,
            x2,
            y2
        );
    }
    let _ = writeln!(out, "</g>");

    let _ = writeln!(out, r#"<g class="nodes">"#);
    for user in graph.users() {
        let Some(p) = layout.position(&user.name) else {
            continue;
        };
        let (x, y) = canvas.project(p);
        let (class, fill) = if selected == Some(user.name.as_str()) {
            ("node selected", SELECTED_FILL)
        } else if recommended.contains(user.name.as_str()) {
            ("node recommended", RECOMMENDED_FILL)
        } else {
            ("node", NODE_FILL)
        };
        let name = escape(&user.name);
        let _ = writeln!(
            out,
            r#"<circle class="{}" data-user="{}" cx="{:.1}" cy="{:.1}" r="{}" fill="{}"><title>{}</title></circle>"#,
            class,
            name,
            x,
            y,
            NODE_RADIUS,
            fill,
            escape(&user.to_string())
        );
        let _ = writeln!(
            out,
            r#"<text class="label" x="{:.1}" y="{:.1}" fill="white" font-family="sans-serif" font-size="10" font-weight="bold" text-anchor="middle" dominant-baseline="central">{}</text>"#,
            x, y, name
        );
    }
    let _ = writeln!(out, "</g>");
    let _ = writeln!(out, "</svg>");
    out
}

fn render_panel(out: &mut String, canvas: &Canvas, highlight: &Highlight<'_>) {
    let _ = writeln!(
        out,
        r#"<g class="panel" font-family="sans-serif" font-size="13" fill="{}">"#,
        PANEL_TEXT
    );
    let mut y = 30.0;
    let selected = highlight
        .selected
        .map(|u| escape(&u.name))
        .unwrap_or_else(|| "(none)".to_string());
    let _ = writeln!(out, r#"<text x="16" y="{:.0}" fill="white">Selected User: {}</text>"#, y, selected);
    y += 30.0;
    let _ = writeln!(out, r#"<text x="16" y="{:.0}" fill="white">Recommended Friends:</text>"#, y);

    for user in &highlight.recommended {
        y += 20.0;
        if y > canvas.height as f64 - 10.0 {
            break;
        }
        let _ = writeln!(
            out,
            r#"<text class="recommendation" x="24" y="{:.0}">{} ({})</text>"#,
            y,
            escape(&user.name),
            user.age
        );
    }
    let _ = writeln!(out, "</g>");
}

fn escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape(r#"<a & "b">"#), "&lt;a &amp; &quot;b&quot;&gt;");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_projection_stays_right_of_panel() {
        let canvas = Canvas::default();
        let (x, y) = canvas.project(Point { x: -1.0, y: -1.0 });
        assert_eq!((x, y), (300.0, 40.0));
        let (x, y) = canvas.project(Point { x: 1.0, y: 1.0 });
        assert_eq!((x, y), (760.0, 560.0));
    }
}
