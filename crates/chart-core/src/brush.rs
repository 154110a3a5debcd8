// File: crates/chart-core/src/brush.rs
// Summary: Brush controller: rectangle select (primary button) and horizontal zoom (secondary button).
// Notes:
// - Time is injected as the elapsed `Duration` since mount; the idle reset is
//   a deadline that `poll` compares against.

use std::collections::BTreeSet;
use std::time::Duration;

use tracing::debug;

use crate::geometry::{Point, Rect};
use crate::series::MarkerRef;
use crate::state::ChartState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Auxiliary,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BrushKind {
    /// Full rectangle; highlights enclosed markers.
    Select,
    /// Horizontal span over the full plot height; rescales the X domain.
    Zoom,
}

impl BrushKind {
    pub fn for_button(button: PointerButton) -> Option<Self> {
        match button {
            PointerButton::Primary => Some(BrushKind::Select),
            PointerButton::Secondary => Some(BrushKind::Zoom),
            PointerButton::Auxiliary => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BrushInput {
    Start { button: PointerButton, at: Point },
    Move { at: Point },
    End { at: Point },
}

#[derive(Clone, Debug, PartialEq)]
pub enum BrushOutcome {
    /// Select brush in progress (or kept after release).
    Selecting { overlay: Rect, selected: BTreeSet<MarkerRef> },
    /// Zoom brush in progress.
    Spanning { overlay: Rect },
    /// Select brush released with no area; highlight dropped.
    SelectionCleared,
    /// X domain narrowed to the brushed span.
    Zoomed { domain: (f64, f64) },
    /// Empty zoom brush; the X domain resets at `deadline` unless a new zoom brush starts.
    ResetScheduled { deadline: Duration },
    /// Idle timer fired; X domain back to its home bounds.
    DomainReset { domain: (f64, f64) },
    Ignored,
}

#[derive(Clone, Copy, Debug)]
struct Gesture {
    kind: BrushKind,
    origin: Point,
    current: Point,
}

#[derive(Debug)]
pub struct BrushController {
    idle_delay: Duration,
    gesture: Option<Gesture>,
    reset_deadline: Option<Duration>,
}

impl BrushController {
    pub fn new(idle_delay: Duration) -> Self {
        Self { idle_delay, gesture: None, reset_deadline: None }
    }

    pub fn is_brushing(&self) -> bool { self.gesture.is_some() }

    pub fn active_kind(&self) -> Option<BrushKind> { self.gesture.map(|g| g.kind) }

    pub fn reset_deadline(&self) -> Option<Duration> { self.reset_deadline }

    /// Drop the gesture in progress and any pending reset. Used when the
    /// pixel space changes under them.
    pub fn cancel(&mut self) {
        if let Some(g) = self.gesture.take() {
            debug!(kind = ?g.kind, "brush gesture aborted");
        }
        self.reset_deadline = None;
    }

    pub fn handle(&mut self, input: BrushInput, now: Duration, chart: &mut ChartState) -> BrushOutcome {
        match input {
            BrushInput::Start { button, at } => self.start(button, at, chart),
            BrushInput::Move { at } => self.update(at, chart),
            BrushInput::End { at } => self.end(at, now, chart),
        }
    }

    /// Fire the idle reset if its deadline has passed.
    pub fn poll(&mut self, now: Duration, chart: &mut ChartState) -> BrushOutcome {
        match self.reset_deadline {
            Some(deadline) if now >= deadline => {
                self.reset_deadline = None;
                chart.reset_x();
                let domain = chart.scales().x.domain;
                debug!(?domain, "zoom idle timer fired; domain reset");
                BrushOutcome::DomainReset { domain }
            }
            _ => BrushOutcome::Ignored,
        }
    }

    fn start(&mut self, button: PointerButton, at: Point, chart: &ChartState) -> BrushOutcome {
        if self.gesture.is_some() {
            return BrushOutcome::Ignored;
        }
        let Some(kind) = BrushKind::for_button(button) else { return BrushOutcome::Ignored };
        let origin = chart.plot_rect().clamp_point(at);
        if kind == BrushKind::Zoom && self.reset_deadline.take().is_some() {
            debug!("zoom brush started; pending domain reset cancelled");
        }
        self.gesture = Some(Gesture { kind, origin, current: origin });
        debug!(?kind, x = origin.x, y = origin.y, "brush started");
        self.progress(chart)
    }

    fn update(&mut self, at: Point, chart: &ChartState) -> BrushOutcome {
        let Some(g) = self.gesture.as_mut() else { return BrushOutcome::Ignored };
        g.current = chart.plot_rect().clamp_point(at);
        self.progress(chart)
    }

    fn end(&mut self, at: Point, now: Duration, chart: &mut ChartState) -> BrushOutcome {
        let Some(mut g) = self.gesture.take() else { return BrushOutcome::Ignored };
        g.current = chart.plot_rect().clamp_point(at);
        match g.kind {
            BrushKind::Select => {
                let overlay = selection_rect(&g, chart);
                if overlay.width() <= 0.0 || overlay.height() <= 0.0 {
                    debug!("select brush released empty; highlight cleared");
                    return BrushOutcome::SelectionCleared;
                }
                BrushOutcome::Selecting { overlay, selected: brushed(overlay, chart) }
            }
            BrushKind::Zoom => {
                let (x0, x1) = (g.origin.x.min(g.current.x), g.origin.x.max(g.current.x));
                if x1 - x0 > 0.0 {
                    chart.zoom_x(x0, x1);
                    self.reset_deadline = None;
                    let domain = chart.scales().x.domain;
                    debug!(?domain, "zoom brush applied");
                    BrushOutcome::Zoomed { domain }
                } else {
                    let deadline = now + self.idle_delay;
                    self.reset_deadline = Some(deadline);
                    debug!(?deadline, "empty zoom brush; domain reset scheduled");
                    BrushOutcome::ResetScheduled { deadline }
                }
            }
        }
    }

    fn progress(&self, chart: &ChartState) -> BrushOutcome {
        let Some(g) = self.gesture else { return BrushOutcome::Ignored };
        match g.kind {
            BrushKind::Select => {
                let overlay = selection_rect(&g, chart);
                BrushOutcome::Selecting { overlay, selected: brushed(overlay, chart) }
            }
            BrushKind::Zoom => BrushOutcome::Spanning { overlay: selection_rect(&g, chart) },
        }
    }
}

fn selection_rect(g: &Gesture, chart: &ChartState) -> Rect {
    match g.kind {
        BrushKind::Select => Rect::from_corners(g.origin, g.current),
        BrushKind::Zoom => {
            let h = chart.layout().inner_height();
            Rect::from_corners(Point::new(g.origin.x, 0.0), Point::new(g.current.x, h))
        }
    }
}

/// Markers whose centre lies inside `area`, edges included.
pub fn brushed(area: Rect, chart: &ChartState) -> BTreeSet<MarkerRef> {
    chart.marker_positions().filter(|(_, p)| area.contains(*p)).map(|(m, _)| m).collect()
}
