// File: crates/chart-core/src/scene.rs
// Summary: Retained scene graph (groups, paths, markers, text) shared by the SVG, Skia and Dioxus front ends.

use crate::curve::PathCommand;
use crate::geometry::{Point, Rect};
use crate::series::MarkerRef;
use crate::theme::Color;

/// Group ids the renderer relies on when patching.
pub const X_AXIS_ID: &str = "x-axis";
pub const Y_AXIS_ID: &str = "y-axis";
pub const CONTENT_ID: &str = "content";
pub const BRUSH_ID: &str = "brush";
pub const CLIP_ID: &str = "clip";

pub fn series_layer_id(series: usize) -> String {
    format!("series-{series}")
}

#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Group(Group),
    Path(PathNode),
    Marker(Marker),
    Line(LineNode),
    Text(TextNode),
    Rect(RectNode),
    ClipPath(ClipPathNode),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Group {
    pub id: Option<String>,
    pub class: Option<String>,
    pub translate: Option<Point>,
    /// Id of a `ClipPath` node applied to the group.
    pub clip_path: Option<String>,
    pub children: Vec<Node>,
}

impl Group {
    pub fn new() -> Self { Self::default() }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn translated(mut self, by: Point) -> Self {
        self.translate = Some(by);
        self
    }

    pub fn clipped(mut self, clip_id: impl Into<String>) -> Self {
        self.clip_path = Some(clip_id.into());
        self
    }

    pub fn push(&mut self, node: Node) {
        self.children.push(node);
    }

    /// Depth-first search for a group with `id`, including `self`.
    pub fn find(&self, id: &str) -> Option<&Group> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|n| match n {
            Node::Group(g) => g.find(id),
            _ => None,
        })
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut Group> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        self.children.iter_mut().find_map(|n| match n {
            Node::Group(g) => g.find_mut(id),
            _ => None,
        })
    }

    /// Swap the direct child group carrying `replacement`'s id. Returns false when absent.
    pub fn replace_child(&mut self, replacement: Group) -> bool {
        let Some(id) = replacement.id.clone() else { return false };
        for child in &mut self.children {
            if let Node::Group(g) = child {
                if g.id.as_deref() == Some(id.as_str()) {
                    *g = replacement;
                    return true;
                }
            }
        }
        false
    }

    pub fn markers(&self) -> Vec<&Marker> {
        let mut out = Vec::new();
        collect_markers(self, &mut out);
        out
    }

    pub fn for_each_marker_mut(&mut self, f: &mut impl FnMut(&mut Marker)) {
        for child in &mut self.children {
            match child {
                Node::Marker(m) => f(m),
                Node::Group(g) => g.for_each_marker_mut(f),
                _ => {}
            }
        }
    }
}

fn collect_markers<'a>(group: &'a Group, out: &mut Vec<&'a Marker>) {
    for child in &group.children {
        match child {
            Node::Marker(m) => out.push(m),
            Node::Group(g) => collect_markers(g, out),
            _ => {}
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PathNode {
    pub class: Option<String>,
    pub commands: Vec<PathCommand>,
    pub stroke: Color,
    pub stroke_width: f64,
    pub fill: Option<Color>,
}

/// Circle bound to one sample.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub datum: MarkerRef,
    pub center: Point,
    pub radius: f64,
    pub fill: Color,
    /// Being dragged (`drag-active`).
    pub active: bool,
    /// Inside the select brush (`selected`).
    pub selected: bool,
}

impl Marker {
    pub fn class(&self) -> String {
        let mut class = String::from("dot");
        if self.selected { class.push_str(" selected"); }
        if self.active { class.push_str(" drag-active"); }
        class
    }

    /// Fill after the class rules apply: active over selected over base colour.
    pub fn effective_fill(&self, styles: &MarkerStyles) -> Color {
        if self.active {
            styles.active
        } else if self.selected {
            styles.selected
        } else {
            self.fill
        }
    }

    pub fn contains(&self, p: Point) -> bool {
        self.center.distance_sq(p) <= self.radius * self.radius
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LineNode {
    pub from: Point,
    pub to: Point,
    pub stroke: Color,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextNode {
    pub at: Point,
    pub text: String,
    pub anchor: TextAnchor,
    /// Baseline shift in ems.
    pub dy_em: f64,
    pub fill: Color,
    pub font_size: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RectNode {
    pub class: Option<String>,
    pub rect: Rect,
    pub fill: Color,
    pub stroke: Option<Color>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ClipPathNode {
    pub id: String,
    pub rect: Rect,
}

/// Colours applied through the marker classes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerStyles {
    pub selected: Color,
    pub active: Color,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub background: Color,
    pub marker_styles: MarkerStyles,
    pub root: Group,
}

impl Scene {
    pub fn find_group(&self, id: &str) -> Option<&Group> {
        self.root.find(id)
    }

    pub fn series_layer(&self, series: usize) -> Option<&Group> {
        self.root.find(&series_layer_id(series))
    }

    /// Number of series layers currently drawn.
    pub fn series_layer_count(&self) -> usize {
        self.find_group(CONTENT_ID)
            .map(|c| {
                c.children
                    .iter()
                    .filter(|n| matches!(n, Node::Group(g) if g.class.as_deref() == Some("series")))
                    .count()
            })
            .unwrap_or(0)
    }

    /// All markers in draw order (later ones paint on top).
    pub fn markers(&self) -> Vec<&Marker> {
        self.root.markers()
    }

    pub fn marker(&self, datum: MarkerRef) -> Option<&Marker> {
        self.series_layer(datum.series)?.markers().into_iter().find(|m| m.datum == datum)
    }

    pub fn line_path(&self, series: usize) -> Option<&PathNode> {
        self.series_layer(series)?.children.iter().find_map(|n| match n {
            Node::Path(p) if p.class.as_deref() == Some("line") => Some(p),
            _ => None,
        })
    }

    /// Current brush rectangle, if one is shown.
    pub fn brush_overlay(&self) -> Option<Rect> {
        self.find_group(BRUSH_ID)?.children.iter().find_map(|n| match n {
            Node::Rect(r) => Some(r.rect),
            _ => None,
        })
    }

    /// Topmost marker under a plot-local point.
    pub fn hit_test(&self, p: Point) -> Option<MarkerRef> {
        self.markers().into_iter().rev().find(|m| m.contains(p)).map(|m| m.datum)
    }
}
