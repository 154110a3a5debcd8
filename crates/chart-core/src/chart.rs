// File: crates/chart-core/src/chart.rs
// Summary: Chart facade: owns state, renderer, readout and controllers; routes pointer events to them.

use std::collections::BTreeSet;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::brush::{BrushController, BrushInput, BrushOutcome, PointerButton};
use crate::config::ChartConfig;
use crate::drag::{DragController, DragInput, DragOutcome};
use crate::error::Result;
use crate::geometry::Point;
use crate::readout::Readout;
use crate::render::{RenderOptions, SceneRenderer};
use crate::scene::Scene;
use crate::series::{MarkerRef, SampleStore};
use crate::state::ChartState;
use crate::types::{PlotLayout, Viewport};

/// Pointer input in plot-local pixels (origin at the inner plot's top-left).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ChartEvent {
    /// `target` is the marker under the pointer, if the caller knows it.
    PointerDown { at: Point, button: PointerButton, target: Option<MarkerRef> },
    PointerMove { at: Point },
    PointerUp { at: Point },
    ContextMenu,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Response {
    /// Nothing visible changed.
    Ignored,
    /// The scene or readout changed.
    Redrawn,
    /// The host should cancel its default handling (context menu).
    PreventDefault,
}

pub struct Chart {
    config: ChartConfig,
    state: ChartState,
    renderer: SceneRenderer,
    readout: Readout,
    drag: DragController,
    brush: Option<BrushController>,
}

impl Chart {
    /// Mount `store`. Its shape wins over `series_count`/`sample_count` in the config.
    pub fn new(mut config: ChartConfig, store: SampleStore, viewport: Viewport) -> Result<Self> {
        config.series_count = store.series_count();
        config.sample_count = store.sample_count();
        config.validate()?;
        let layout = layout_for(&config, viewport);
        let state = ChartState::new(store, layout, config.dot_radius);
        let opts = RenderOptions {
            theme: config.theme(),
            x_ticks: config.x_ticks,
            y_ticks: config.y_ticks,
            brush_layer: config.brush,
        };
        let renderer = SceneRenderer::new(opts, &state);
        let readout = Readout::from_store(state.store());
        let brush = config.brush.then(|| BrushController::new(Duration::from_millis(config.zoom_idle_ms)));
        info!(
            series = state.store().series_count(),
            samples = state.store().sample_count(),
            brush = config.brush,
            "chart mounted"
        );
        Ok(Self { config, state, renderer, readout, drag: DragController::new(), brush })
    }

    /// Mount with uniform random values, seeded from the config when set.
    pub fn with_random_data(config: ChartConfig, viewport: Viewport) -> Result<Self> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let store = SampleStore::random(config.series_count, config.sample_count, &mut rng)?;
        Self::new(config, store, viewport)
    }

    pub fn config(&self) -> &ChartConfig { &self.config }
    pub fn state(&self) -> &ChartState { &self.state }
    pub fn scene(&self) -> &Scene { self.renderer.scene() }
    pub fn renderer(&self) -> &SceneRenderer { &self.renderer }
    pub fn readout(&self) -> &Readout { &self.readout }
    pub fn drag(&self) -> &DragController { &self.drag }
    pub fn brush(&self) -> Option<&BrushController> { self.brush.as_ref() }

    pub fn to_svg(&self) -> String { self.scene().to_svg() }

    /// Marker under a plot-local point, for hosts without element targets.
    pub fn hit_test(&self, at: Point) -> Option<MarkerRef> {
        self.scene().hit_test(at)
    }

    /// New viewport: layout and scales are recomputed, brush state is dropped
    /// and everything is redrawn.
    pub fn resize(&mut self, viewport: Viewport) {
        let layout = layout_for(&self.config, viewport);
        if layout == *self.state.layout() {
            return;
        }
        self.state.relayout(layout);
        // brush rectangles are in the old pixel space
        if let Some(brush) = self.brush.as_mut() {
            brush.cancel();
        }
        self.renderer.set_brush_overlay(None);
        self.renderer.set_selected(BTreeSet::new());
        self.renderer.full_redraw(&self.state);
        self.readout.refresh(self.state.store());
        debug!(width = layout.svg_width, height = layout.svg_height, "chart resized");
    }

    /// Force a full redraw with unchanged data.
    pub fn redraw(&mut self) {
        self.renderer.full_redraw(&self.state);
        self.readout.refresh(self.state.store());
    }

    pub fn handle(&mut self, event: ChartEvent, now: Duration) -> Response {
        match event {
            ChartEvent::ContextMenu => Response::PreventDefault,
            ChartEvent::PointerDown { at, button, target } => self.pointer_down(at, button, target, now),
            ChartEvent::PointerMove { at } => {
                if self.drag.is_dragging() {
                    let outcome = self.drag.handle(DragInput::PointerMove { y: at.y }, &mut self.state);
                    self.apply_drag(outcome)
                } else {
                    self.route_brush(BrushInput::Move { at }, now)
                }
            }
            ChartEvent::PointerUp { at } => {
                if self.drag.is_dragging() {
                    let outcome = self.drag.handle(DragInput::PointerUp, &mut self.state);
                    self.apply_drag(outcome)
                } else {
                    self.route_brush(BrushInput::End { at }, now)
                }
            }
        }
    }

    /// Advance time; fires the brush idle reset when due.
    pub fn tick(&mut self, now: Duration) -> Response {
        let Some(brush) = self.brush.as_mut() else { return Response::Ignored };
        let outcome = brush.poll(now, &mut self.state);
        self.apply_brush(outcome)
    }

    fn pointer_down(&mut self, at: Point, button: PointerButton, target: Option<MarkerRef>, now: Duration) -> Response {
        match (target, button) {
            (Some(target), PointerButton::Primary) => {
                let outcome = self.drag.handle(DragInput::PointerDown { target }, &mut self.state);
                self.apply_drag(outcome)
            }
            // markers only take primary-button drags
            (Some(_), _) => Response::Ignored,
            (None, button) => self.route_brush(BrushInput::Start { button, at }, now),
        }
    }

    fn apply_drag(&mut self, outcome: DragOutcome) -> Response {
        match outcome {
            DragOutcome::Started(selection) => {
                self.renderer.set_active(Some(selection));
                Response::Redrawn
            }
            DragOutcome::Updated { selection, .. } => {
                self.readout.refresh_series(self.state.store(), selection.series);
                self.renderer.patch_series(&self.state, selection.series);
                Response::Redrawn
            }
            DragOutcome::Ended(_) => {
                self.renderer.set_active(None);
                Response::Redrawn
            }
            DragOutcome::OutOfRange { .. } | DragOutcome::Ignored => Response::Ignored,
        }
    }

    fn route_brush(&mut self, input: BrushInput, now: Duration) -> Response {
        let Some(brush) = self.brush.as_mut() else { return Response::Ignored };
        let outcome = brush.handle(input, now, &mut self.state);
        self.apply_brush(outcome)
    }

    fn apply_brush(&mut self, outcome: BrushOutcome) -> Response {
        match outcome {
            BrushOutcome::Selecting { overlay, selected } => {
                self.renderer.set_brush_overlay(Some(overlay));
                self.renderer.set_selected(selected);
                Response::Redrawn
            }
            BrushOutcome::Spanning { overlay } => {
                self.renderer.set_brush_overlay(Some(overlay));
                Response::Redrawn
            }
            BrushOutcome::SelectionCleared => {
                self.renderer.set_brush_overlay(None);
                self.renderer.set_selected(BTreeSet::new());
                Response::Redrawn
            }
            BrushOutcome::Zoomed { .. } | BrushOutcome::DomainReset { .. } => {
                self.renderer.set_brush_overlay(None);
                self.renderer.redraw_horizontal(&self.state);
                Response::Redrawn
            }
            BrushOutcome::ResetScheduled { .. } => {
                self.renderer.set_brush_overlay(None);
                Response::Redrawn
            }
            BrushOutcome::Ignored => Response::Ignored,
        }
    }
}

fn layout_for(config: &ChartConfig, viewport: Viewport) -> PlotLayout {
    PlotLayout::from_viewport(viewport, config.width_fraction, config.height_fraction, config.margin)
}
