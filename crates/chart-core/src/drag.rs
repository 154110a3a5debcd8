// File: crates/chart-core/src/drag.rs
// Summary: Drag controller as an explicit Idle -> Dragging -> Idle state machine.
// Notes:
// - Inputs are typed and carry plot-local pixels, so the machine runs without
//   any windowing or DOM layer.
// - Moves outside [0, plot height) are dropped rather than clamped.

use tracing::{debug, trace};

use crate::series::MarkerRef;
use crate::state::ChartState;

/// The sample a drag gesture is editing. Fixed for the gesture's lifetime.
pub type Selection = MarkerRef;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragInput {
    /// Pointer pressed over a marker bound to `target`.
    PointerDown { target: MarkerRef },
    /// Current pointer Y, plot-local pixels.
    PointerMove { y: f64 },
    PointerUp,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(Selection),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragOutcome {
    Started(Selection),
    /// The selection's value changed; its series needs a patch and readout refresh.
    Updated { selection: Selection, value: f64 },
    /// Pointer outside the plot's vertical bounds; value frozen.
    OutOfRange { selection: Selection, y: f64 },
    Ended(Selection),
    /// Input did not apply in the current state, or the target is unknown.
    Ignored,
}

#[derive(Debug, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self { Self::default() }

    pub fn state(&self) -> DragState { self.state }

    pub fn selection(&self) -> Option<Selection> {
        match self.state {
            DragState::Dragging(sel) => Some(sel),
            DragState::Idle => None,
        }
    }

    pub fn is_dragging(&self) -> bool { matches!(self.state, DragState::Dragging(_)) }

    pub fn handle(&mut self, input: DragInput, chart: &mut ChartState) -> DragOutcome {
        match (self.state, input) {
            (DragState::Idle, DragInput::PointerDown { target }) => {
                if !chart.store().contains(target) {
                    debug!(?target, "drag target matches no sample; ignoring");
                    return DragOutcome::Ignored;
                }
                self.state = DragState::Dragging(target);
                debug!(?target, "drag started");
                DragOutcome::Started(target)
            }
            (DragState::Dragging(selection), DragInput::PointerMove { y }) => {
                let height = chart.layout().inner_height();
                // -0.0 counts as inside, matching a sign test on the pointer
                if !(y >= 0.0 && y < height) {
                    trace!(?selection, y, height, "drag outside plot; update skipped");
                    return DragOutcome::OutOfRange { selection, y };
                }
                let value = chart.scales().y.invert(y);
                match chart.set_value(selection.series, selection.index, value) {
                    Ok(value) => {
                        trace!(?selection, y, value, "drag moved");
                        DragOutcome::Updated { selection, value }
                    }
                    Err(err) => {
                        debug!(?selection, %err, "drag update rejected");
                        DragOutcome::Ignored
                    }
                }
            }
            (DragState::Dragging(selection), DragInput::PointerUp) => {
                self.state = DragState::Idle;
                debug!(?selection, "drag ended");
                DragOutcome::Ended(selection)
            }
            (state, input) => {
                trace!(?state, ?input, "drag input ignored in current state");
                DragOutcome::Ignored
            }
        }
    }
}
