// File: crates/chart-core/tests/render.rs
// Purpose: Scene structure checks: full redraw idempotence, per-series patching, line paths and resize.

use std::time::Duration;

use chart_core::curve::PathCommand;
use chart_core::scene::{Node, CONTENT_ID, X_AXIS_ID, Y_AXIS_ID};
use chart_core::{
    Chart, ChartConfig, ChartEvent, Insets, MarkerRef, Point, PointerButton, Response, SampleStore, Viewport,
};

fn flat_config(series_count: usize) -> ChartConfig {
    ChartConfig {
        series_count,
        margin: Insets::uniform(0),
        width_fraction: 1.0,
        height_fraction: 1.0,
        ..ChartConfig::default()
    }
}

fn seeded_chart(series_count: usize) -> Chart {
    let cfg = ChartConfig { seed: Some(42), ..flat_config(series_count) };
    Chart::with_random_data(cfg, Viewport::new(900.0, 300.0)).expect("chart")
}

fn drag(chart: &mut Chart, target: MarkerRef, ys: &[f64]) {
    let at = chart.scene().marker(target).unwrap().center;
    chart.handle(ChartEvent::PointerDown { at, button: PointerButton::Primary, target: Some(target) }, Duration::ZERO);
    for &y in ys {
        chart.handle(ChartEvent::PointerMove { at: Point::new(at.x, y) }, Duration::ZERO);
    }
    chart.handle(ChartEvent::PointerUp { at }, Duration::ZERO);
}

#[test]
fn full_redraw_is_idempotent() {
    let mut chart = seeded_chart(3);
    let first = chart.scene().clone();
    let svg = chart.to_svg();
    chart.redraw();
    chart.redraw();
    assert_eq!(chart.scene(), &first);
    assert_eq!(chart.to_svg(), svg);
    assert_eq!(chart.renderer().stats().full_redraws, 3);
}

#[test]
fn scene_has_axes_clip_and_one_layer_per_series() {
    let chart = seeded_chart(3);
    let scene = chart.scene();
    assert!(scene.find_group(X_AXIS_ID).is_some());
    assert!(scene.find_group(Y_AXIS_ID).is_some());
    let content = scene.find_group(CONTENT_ID).unwrap();
    assert_eq!(content.clip_path.as_deref(), Some("clip"));
    assert_eq!(scene.series_layer_count(), 3);
    assert_eq!(scene.markers().len(), 30);
    // no brush layer without the brush variant
    assert!(scene.find_group("brush").is_none());
}

#[test]
fn line_path_visits_every_marker() {
    let chart = seeded_chart(2);
    for series in 0..2 {
        let path = chart.scene().line_path(series).unwrap();
        assert!(matches!(path.commands[0], PathCommand::MoveTo(_)));
        let vertices: Vec<Point> = path.commands.iter().filter_map(PathCommand::end_point).collect();
        assert_eq!(vertices.len(), 10);
        for (index, v) in vertices.iter().enumerate() {
            let m = chart.scene().marker(MarkerRef::new(series, index)).unwrap();
            assert_eq!(*v, m.center);
        }
    }
}

#[test]
fn markers_sit_on_the_scales() {
    let chart = seeded_chart(1);
    let state = chart.state();
    for (datum, p) in state.marker_positions() {
        let sample = state.store().sample(datum).unwrap();
        assert!((p.x - datum.index as f64 * 100.0).abs() < 1e-9);
        assert!((p.y - (1.0 - sample.value()) * 300.0).abs() < 1e-9);
        assert_eq!(chart.scene().marker(datum).unwrap().center, p);
    }
}

#[test]
fn patch_leaves_other_series_untouched() {
    let mut chart = seeded_chart(3);
    let before = chart.scene().clone();
    drag(&mut chart, MarkerRef::new(1, 4), &[20.0, 40.0]);

    let stats = chart.renderer().stats();
    assert_eq!(stats.full_redraws, 1);
    assert_eq!(stats.series_patches, 2);

    let after = chart.scene();
    assert_eq!(after.series_layer(0), before.series_layer(0));
    assert_eq!(after.series_layer(2), before.series_layer(2));
    assert_ne!(after.series_layer(1), before.series_layer(1));
    assert_eq!(after.find_group(X_AXIS_ID), before.find_group(X_AXIS_ID));
    assert_eq!(after.find_group(Y_AXIS_ID), before.find_group(Y_AXIS_ID));
    assert!((after.marker(MarkerRef::new(1, 4)).unwrap().center.y - 40.0).abs() < 1e-9);
}

#[test]
fn dragged_marker_paints_last_in_its_layer() {
    let mut chart = seeded_chart(1);
    let target = MarkerRef::new(0, 2);
    let at = chart.scene().marker(target).unwrap().center;
    chart.handle(ChartEvent::PointerDown { at, button: PointerButton::Primary, target: Some(target) }, Duration::ZERO);
    chart.handle(ChartEvent::PointerMove { at: Point::new(at.x, 150.0) }, Duration::ZERO);

    let layer = chart.scene().series_layer(0).unwrap();
    match layer.children.last() {
        Some(Node::Marker(m)) => {
            assert_eq!(m.datum, target);
            assert!(m.active);
            assert_eq!(m.class(), "dot drag-active");
        }
        other => panic!("expected the active marker last, got {other:?}"),
    }
    assert_eq!(chart.hit_test(Point::new(at.x, 150.0)), Some(target));
}

#[test]
fn resize_relayouts_and_redraws() {
    let mut chart = seeded_chart(2);
    chart.resize(Viewport::new(450.0, 150.0));
    let scene = chart.scene();
    assert_eq!((scene.width, scene.height), (450.0, 150.0));
    let last = scene.marker(MarkerRef::new(0, 9)).unwrap();
    assert!((last.center.x - 450.0).abs() < 1e-9);
    assert_eq!(chart.renderer().stats().full_redraws, 2);

    // same viewport: nothing to do
    chart.resize(Viewport::new(450.0, 150.0));
    assert_eq!(chart.renderer().stats().full_redraws, 2);
}

#[test]
fn context_menu_is_suppressed() {
    let mut chart = seeded_chart(1);
    assert_eq!(chart.handle(ChartEvent::ContextMenu, Duration::ZERO), Response::PreventDefault);
}

#[test]
fn same_seed_same_scene() {
    let a = seeded_chart(3);
    let b = seeded_chart(3);
    assert_eq!(a.to_svg(), b.to_svg());
    assert_eq!(a.readout(), b.readout());
}

#[test]
fn explicit_store_is_rendered_verbatim() {
    let store = SampleStore::from_values(vec![vec![0.0, 1.0]]).unwrap();
    let chart = Chart::new(flat_config(1), store, Viewport::new(100.0, 100.0)).unwrap();
    assert_eq!(chart.scene().marker(MarkerRef::new(0, 0)).unwrap().center, Point::new(0.0, 100.0));
    assert_eq!(chart.scene().marker(MarkerRef::new(0, 1)).unwrap().center, Point::new(100.0, 0.0));
}

#[test]
fn store_shape_overrides_config_counts() {
    let store = SampleStore::from_values(vec![vec![0.1, 0.2, 0.3], vec![0.4, 0.5, 0.6]]).unwrap();
    let cfg = ChartConfig { sample_count: 10, ..flat_config(1) };
    let chart = Chart::new(cfg, store, Viewport::new(200.0, 100.0)).unwrap();
    assert_eq!(chart.config().series_count, 2);
    assert_eq!(chart.config().sample_count, 3);
    assert_eq!(chart.scene().series_layer_count(), 2);
    assert_eq!(chart.state().scales().x.domain, (0.0, 2.0));
}
