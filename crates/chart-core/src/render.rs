// File: crates/chart-core/src/render.rs
// Summary: Scene renderer: full redraw, per-series patch, and marker style updates.

use std::collections::BTreeSet;

use tracing::{debug, trace};

use crate::axis::{Axis, AxisOrient};
use crate::curve::monotone_x;
use crate::geometry::{Point, Rect};
use crate::scene::{
    series_layer_id, ClipPathNode, Group, Marker, MarkerStyles, Node, PathNode, RectNode, Scene, BRUSH_ID,
    CLIP_ID, CONTENT_ID, X_AXIS_ID, Y_AXIS_ID,
};
use crate::series::MarkerRef;
use crate::state::ChartState;
use crate::theme::Theme;

pub const LINE_WIDTH: f64 = 1.5;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub full_redraws: u64,
    pub series_patches: u64,
    pub horizontal_redraws: u64,
}

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub theme: Theme,
    pub x_ticks: usize,
    pub y_ticks: usize,
    /// Reserve a brush layer beneath the series.
    pub brush_layer: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { theme: Theme::light(), x_ticks: 10, y_ticks: 10, brush_layer: false }
    }
}

pub struct SceneRenderer {
    opts: RenderOptions,
    scene: Scene,
    active: Option<MarkerRef>,
    selected: BTreeSet<MarkerRef>,
    overlay: Option<Rect>,
    stats: RenderStats,
}

impl SceneRenderer {
    /// Create a renderer and draw the initial scene.
    pub fn new(opts: RenderOptions, state: &ChartState) -> Self {
        let scene = empty_scene(&opts.theme);
        let mut r = Self { opts, scene, active: None, selected: BTreeSet::new(), overlay: None, stats: RenderStats::default() };
        r.full_redraw(state);
        r
    }

    pub fn scene(&self) -> &Scene { &self.scene }
    pub fn stats(&self) -> RenderStats { self.stats }
    pub fn active(&self) -> Option<MarkerRef> { self.active }
    pub fn selected(&self) -> &BTreeSet<MarkerRef> { &self.selected }

    /// Discard everything drawn so far and rebuild from `state`.
    pub fn full_redraw(&mut self, state: &ChartState) {
        let layout = state.layout();
        let (w, h) = (layout.inner_width(), layout.inner_height());
        let theme = self.opts.theme;

        let mut root = Group::new().translated(layout.origin());
        root.push(Node::Group(self.x_axis(state)));
        root.push(Node::Group(self.y_axis(state)));
        root.push(Node::ClipPath(ClipPathNode { id: CLIP_ID.into(), rect: Rect::from_ltwh(0.0, 0.0, w, h) }));

        let mut content = Group::new().with_id(CONTENT_ID).clipped(CLIP_ID);
        if self.opts.brush_layer {
            content.push(Node::Group(self.brush_group()));
        }
        for series in 0..state.store().series_count() {
            content.push(Node::Group(self.series_layer(state, series)));
        }
        root.push(Node::Group(content));

        self.scene = Scene {
            width: layout.svg_width,
            height: layout.svg_height,
            background: theme.background,
            marker_styles: MarkerStyles { selected: theme.selected, active: theme.active },
            root,
        };
        self.stats.full_redraws += 1;
        debug!(series = state.store().series_count(), width = w, height = h, "full redraw");
    }

    /// Rebuild one series' path and markers; every other node is left as is.
    pub fn patch_series(&mut self, state: &ChartState, series: usize) {
        let layer = self.series_layer(state, series);
        let patched = self
            .scene
            .root
            .find_mut(CONTENT_ID)
            .map(|content| content.replace_child(layer))
            .unwrap_or(false);
        if patched {
            self.stats.series_patches += 1;
            trace!(series, "patched series layer");
        } else {
            debug!(series, "series layer missing; falling back to full redraw");
            self.full_redraw(state);
        }
    }

    /// Rebuild the X axis and every series after the X domain changed.
    pub fn redraw_horizontal(&mut self, state: &ChartState) {
        let axis = self.x_axis(state);
        let layers: Vec<Group> = (0..state.store().series_count()).map(|s| self.series_layer(state, s)).collect();
        let axis_ok = self.scene.root.replace_child(axis);
        let layers_ok = match self.scene.root.find_mut(CONTENT_ID) {
            Some(content) => layers.into_iter().all(|layer| content.replace_child(layer)),
            None => false,
        };
        if axis_ok && layers_ok {
            self.stats.horizontal_redraws += 1;
            debug!(domain = ?state.scales().x.domain, "redrew horizontal axis and series");
        } else {
            self.full_redraw(state);
        }
    }

    /// Flag the dragged marker and raise it above its siblings; `None` clears the flag.
    pub fn set_active(&mut self, marker: Option<MarkerRef>) {
        let previous = std::mem::replace(&mut self.active, marker);
        self.scene.root.for_each_marker_mut(&mut |m: &mut Marker| m.active = Some(m.datum) == marker);
        if let Some(target) = marker {
            if let Some(layer) = self.scene.root.find_mut(&series_layer_id(target.series)) {
                raise_marker(layer, target);
            }
        }
        trace!(?previous, ?marker, "active marker changed");
    }

    pub fn set_selected(&mut self, selected: BTreeSet<MarkerRef>) {
        self.scene.root.for_each_marker_mut(&mut |m: &mut Marker| m.selected = selected.contains(&m.datum));
        self.selected = selected;
    }

    pub fn set_brush_overlay(&mut self, overlay: Option<Rect>) {
        self.overlay = overlay;
        let group = self.brush_group();
        if let Some(content) = self.scene.root.find_mut(CONTENT_ID) {
            content.replace_child(group);
        }
    }

    fn x_axis(&self, state: &ChartState) -> Group {
        let h = state.layout().inner_height();
        Axis::from_scale(&state.scales().x, AxisOrient::Bottom, self.opts.x_ticks)
            .to_group(X_AXIS_ID, &self.opts.theme)
            .translated(Point::new(0.0, h))
    }

    fn y_axis(&self, state: &ChartState) -> Group {
        Axis::from_scale(&state.scales().y, AxisOrient::Left, self.opts.y_ticks).to_group(Y_AXIS_ID, &self.opts.theme)
    }

    fn brush_group(&self) -> Group {
        let mut group = Group::new().with_id(BRUSH_ID).with_class("brush");
        if let Some(rect) = self.overlay {
            group.push(Node::Rect(RectNode {
                class: Some("selection".into()),
                rect,
                fill: self.opts.theme.brush_fill,
                stroke: Some(self.opts.theme.brush_stroke),
            }));
        }
        group
    }

    fn series_layer(&self, state: &ChartState, series: usize) -> Group {
        let color = self.opts.theme.series_color(series);
        let mut layer = Group::new().with_id(series_layer_id(series)).with_class("series");
        let Some(s) = state.store().get(series) else { return layer };

        let points: Vec<Point> = s
            .samples()
            .iter()
            .map(|sample| {
                let (x, y) = state.scales().position(sample.index(), sample.value());
                Point::new(x, y)
            })
            .collect();

        layer.push(Node::Path(PathNode {
            class: Some("line".into()),
            commands: monotone_x(&points),
            stroke: color,
            stroke_width: LINE_WIDTH,
            fill: None,
        }));
        for (sample, center) in s.samples().iter().zip(points) {
            let datum = MarkerRef::new(series, sample.index());
            layer.push(Node::Marker(Marker {
                datum,
                center,
                radius: state.dot_radius(),
                fill: color,
                active: self.active == Some(datum),
                selected: self.selected.contains(&datum),
            }));
        }
        if let Some(active) = self.active.filter(|a| a.series == series) {
            raise_marker(&mut layer, active);
        }
        layer
    }
}

fn empty_scene(theme: &Theme) -> Scene {
    Scene {
        width: 0.0,
        height: 0.0,
        background: theme.background,
        marker_styles: MarkerStyles { selected: theme.selected, active: theme.active },
        root: Group::new(),
    }
}

/// Move a marker to the end of its layer so it paints above its siblings.
fn raise_marker(layer: &mut Group, target: MarkerRef) {
    let pos = layer.children.iter().position(|n| matches!(n, Node::Marker(m) if m.datum == target));
    if let Some(pos) = pos {
        let node = layer.children.remove(pos);
        layer.children.push(node);
    }
}
