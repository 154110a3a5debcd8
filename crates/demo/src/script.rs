// File: crates/demo/src/script.rs
// Summary: Scripted gesture replay: JSON5 steps drive a Chart against a virtual clock.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use chart_core::{Chart, ChartEvent, MarkerRef, Point, PointerButton, Response, Viewport};
use serde::Deserialize;
use tracing::{debug, info};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Button {
    #[default]
    Primary,
    Secondary,
    Auxiliary,
}

impl From<Button> for PointerButton {
    fn from(b: Button) -> Self {
        match b {
            Button::Primary => PointerButton::Primary,
            Button::Secondary => PointerButton::Secondary,
            Button::Auxiliary => PointerButton::Auxiliary,
        }
    }
}

/// One scripted input. Coordinates are plot-local pixels.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Down {
        x: f64,
        y: f64,
        #[serde(default)]
        button: Button,
        /// `[series, index]`; hit-tested from the position when absent.
        #[serde(default)]
        marker: Option<(usize, usize)>,
    },
    Move { x: f64, y: f64 },
    Up { x: f64, y: f64 },
    /// Advance the clock, firing any due timers.
    Wait { ms: u64 },
    ContextMenu,
    Resize { width: f64, height: f64 },
}

pub fn load_script(path: &Path) -> Result<Vec<Step>> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading script {}", path.display()))?;
    parse_script(&text).with_context(|| format!("parsing script {}", path.display()))
}

pub fn parse_script(text: &str) -> Result<Vec<Step>> {
    Ok(json5::from_str(text)?)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub steps: usize,
    pub redraws: usize,
    pub prevented: usize,
    pub elapsed: Duration,
}

/// Feed every step to `chart`. Time starts at zero and only `wait` advances it.
pub fn replay(chart: &mut Chart, steps: &[Step]) -> ReplaySummary {
    let mut summary = ReplaySummary::default();
    let mut now = Duration::ZERO;
    for (i, step) in steps.iter().enumerate() {
        let response = match *step {
            Step::Down { x, y, button, marker } => {
                let at = Point::new(x, y);
                let target = match marker {
                    Some((series, index)) => Some(MarkerRef::new(series, index)),
                    None => chart.hit_test(at),
                };
                chart.handle(ChartEvent::PointerDown { at, button: button.into(), target }, now)
            }
            Step::Move { x, y } => chart.handle(ChartEvent::PointerMove { at: Point::new(x, y) }, now),
            Step::Up { x, y } => chart.handle(ChartEvent::PointerUp { at: Point::new(x, y) }, now),
            Step::Wait { ms } => {
                now += Duration::from_millis(ms);
                chart.tick(now)
            }
            Step::ContextMenu => chart.handle(ChartEvent::ContextMenu, now),
            Step::Resize { width, height } => {
                chart.resize(Viewport::new(width, height));
                Response::Redrawn
            }
        };
        debug!(step = i, ?step, ?response, "replayed");
        match response {
            Response::Redrawn => summary.redraws += 1,
            Response::PreventDefault => summary.prevented += 1,
            Response::Ignored => {}
        }
        summary.steps += 1;
    }
    summary.elapsed = now;
    info!(steps = summary.steps, redraws = summary.redraws, "replay finished");
    summary
}
