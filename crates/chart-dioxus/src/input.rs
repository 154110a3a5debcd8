// File: crates/chart-dioxus/src/input.rs
// Summary: Host-side glue shared by the desktop component: client-to-plot mapping, clock, reset timing.

use std::time::{Duration, Instant};

use chart_core::{Chart, Point, Viewport};

/// Maps window client coordinates to the chart's plot-local pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerMapper {
    /// Client position of the svg's top-left corner.
    pub svg_origin: Point,
}

impl PointerMapper {
    pub fn new(svg_origin: Point) -> Self { Self { svg_origin } }

    pub fn to_plot(&self, chart: &Chart, client: Point) -> Point {
        let svg = Point::new(client.x - self.svg_origin.x, client.y - self.svg_origin.y);
        chart.state().layout().to_plot(svg)
    }
}

/// Monotonic time since the component mounted.
#[derive(Clone, Copy, Debug)]
pub struct HostClock {
    start: Instant,
}

impl HostClock {
    pub fn start() -> Self { Self { start: Instant::now() } }

    pub fn now(&self) -> Duration { self.start.elapsed() }
}

/// Time left until the brush idle reset fires, if one is pending.
pub fn pending_reset(chart: &Chart, now: Duration) -> Option<Duration> {
    let deadline = chart.brush()?.reset_deadline()?;
    Some(deadline.saturating_sub(now))
}

/// Logical window size to a chart viewport.
pub fn viewport_from_logical(width: f64, height: f64) -> Viewport {
    Viewport::new(width.max(0.0), height.max(0.0))
}
