// File: crates/chart-dioxus/tests/input.rs
// Purpose: Client-to-plot mapping and idle-reset timing used by the desktop component.

use std::time::Duration;

use chart_core::{Chart, ChartConfig, ChartEvent, Insets, Point, PointerButton, SampleStore, Viewport};
use chart_dioxus::{pending_reset, viewport_from_logical, PointerMapper};

fn chart(brush: bool) -> Chart {
    let cfg = ChartConfig { brush, margin: Insets::new(40, 20, 20, 30), ..ChartConfig::default() };
    let store = SampleStore::from_values(vec![vec![0.5; 10]]).unwrap();
    Chart::new(cfg, store, Viewport::new(1000.0, 500.0)).unwrap()
}

#[test]
fn client_points_are_shifted_by_svg_origin_and_margins() {
    let chart = chart(false);
    let mapper = PointerMapper::new(Point::new(8.0, 8.0));
    assert_eq!(mapper.to_plot(&chart, Point::new(48.0, 28.0)), Point::new(0.0, 0.0));
    assert_eq!(mapper.to_plot(&chart, Point::new(148.5, 128.0)), Point::new(100.5, 100.0));
    // the default mapper assumes the svg sits at the window origin
    assert_eq!(PointerMapper::default().to_plot(&chart, Point::new(40.0, 20.0)), Point::default());
}

#[test]
fn pending_reset_counts_down_to_the_deadline() {
    let mut chart = chart(true);
    assert_eq!(pending_reset(&chart, Duration::ZERO), None);

    let at = Point::new(100.0, 50.0);
    chart.handle(ChartEvent::PointerDown { at, button: PointerButton::Secondary, target: None }, Duration::from_millis(100));
    chart.handle(ChartEvent::PointerUp { at }, Duration::from_millis(100));
    assert_eq!(pending_reset(&chart, Duration::from_millis(200)), Some(Duration::from_millis(250)));
    assert_eq!(pending_reset(&chart, Duration::from_millis(900)), Some(Duration::ZERO));
}

#[test]
fn plain_chart_never_schedules_resets() {
    assert_eq!(pending_reset(&chart(false), Duration::from_secs(1)), None);
}

#[test]
fn negative_logical_sizes_are_clamped() {
    assert_eq!(viewport_from_logical(-5.0, 300.0), Viewport::new(0.0, 300.0));
}
