// File: crates/chart-core/src/svg.rs
// Summary: Serialise a Scene to standalone SVG markup.

use std::fmt::Write as _;

use crate::curve::{num, to_svg_path};
use crate::scene::{Group, Node, Scene};

impl Scene {
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        // writing into a String cannot fail
        let _ = write!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" overflow="visible">"#,
            w = num(self.width),
            h = num(self.height)
        );
        let _ = write!(
            out,
            "<style>.dot{{cursor:move}}.selected{{stroke:{sel};stroke-width:3px;fill:{sel}}}.drag-active{{fill:{act}}}</style>",
            sel = self.marker_styles.selected.to_css(),
            act = self.marker_styles.active.to_css()
        );
        let _ = write!(out, r#"<rect width="100%" height="100%" fill="{}"/>"#, self.background.to_css());
        write_group(&mut out, &self.root);
        out.push_str("</svg>");
        out
    }
}

fn write_group(out: &mut String, g: &Group) {
    out.push_str("<g");
    if let Some(id) = &g.id {
        let _ = write!(out, r#" id="{}""#, escape(id));
    }
    if let Some(class) = &g.class {
        let _ = write!(out, r#" class="{}""#, escape(class));
    }
    if let Some(t) = g.translate {
        let _ = write!(out, r#" transform="translate({},{})""#, num(t.x), num(t.y));
    }
    if let Some(clip) = &g.clip_path {
        let _ = write!(out, r#" clip-path="url(#{})""#, escape(clip));
    }
    out.push('>');
    for child in &g.children {
        write_node(out, child);
    }
    out.push_str("</g>");
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Group(g) => write_group(out, g),
        Node::Path(p) => {
            out.push_str("<path");
            if let Some(class) = &p.class {
                let _ = write!(out, r#" class="{}""#, escape(class));
            }
            let fill = p.fill.map(|c| c.to_css()).unwrap_or_else(|| "none".into());
            let _ = write!(
                out,
                r#" fill="{}" stroke="{}" stroke-width="{}" stroke-linejoin="round" stroke-linecap="round" d="{}"/>"#,
                fill,
                p.stroke.to_css(),
                num(p.stroke_width),
                to_svg_path(&p.commands)
            );
        }
        Node::Marker(m) => {
            // presentation attribute, so the .selected/.drag-active rules win
            let _ = write!(
                out,
                r#"<circle class="{}" data-series="{}" data-index="{}" r="{}" cx="{}" cy="{}" fill="{}"/>"#,
                m.class(),
                m.datum.series,
                m.datum.index,
                num(m.radius),
                num(m.center.x),
                num(m.center.y),
                m.fill.to_css()
            );
        }
        Node::Line(l) => {
            let _ = write!(
                out,
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}"/>"#,
                num(l.from.x),
                num(l.from.y),
                num(l.to.x),
                num(l.to.y),
                l.stroke.to_css()
            );
        }
        Node::Text(t) => {
            let _ = write!(
                out,
                r#"<text x="{}" y="{}" dy="{}em" text-anchor="{}" font-size="{}" font-family="sans-serif" fill="{}">{}</text>"#,
                num(t.at.x),
                num(t.at.y),
                num(t.dy_em),
                t.anchor.as_str(),
                num(t.font_size),
                t.fill.to_css(),
                escape(&t.text)
            );
        }
        Node::Rect(r) => {
            out.push_str("<rect");
            if let Some(class) = &r.class {
                let _ = write!(out, r#" class="{}""#, escape(class));
            }
            let _ = write!(
                out,
                r#" x="{}" y="{}" width="{}" height="{}" fill="{}""#,
                num(r.rect.left),
                num(r.rect.top),
                num(r.rect.width()),
                num(r.rect.height()),
                r.fill.to_css()
            );
            if let Some(stroke) = r.stroke {
                let _ = write!(out, r#" stroke="{}""#, stroke.to_css());
            }
            out.push_str("/>");
        }
        Node::ClipPath(c) => {
            let _ = write!(
                out,
                r#"<defs><clipPath id="{}"><rect x="{}" y="{}" width="{}" height="{}"/></clipPath></defs>"#,
                escape(&c.id),
                num(c.rect.left),
                num(c.rect.top),
                num(c.rect.width()),
                num(c.rect.height())
            );
        }
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
