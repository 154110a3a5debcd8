// File: crates/chart-render-skia/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use chart_core::{Chart, ChartConfig, Color, Insets, SampleStore, Viewport};
use chart_render_skia::SkiaRenderer;

fn flat_chart(values: Vec<f64>, w: f64, h: f64) -> Chart {
    let cfg = ChartConfig { margin: Insets::uniform(0), width_fraction: 1.0, height_fraction: 1.0, ..ChartConfig::default() };
    let store = SampleStore::from_values(vec![values]).expect("store");
    Chart::new(cfg, store, Viewport::new(w, h)).expect("chart")
}

fn pixel(px: &[u8], row_bytes: usize, x: usize, y: usize) -> [u8; 4] {
    let i = y * row_bytes + x * 4;
    [px[i], px[i + 1], px[i + 2], px[i + 3]]
}

#[test]
fn render_rgba8_buffer() {
    let chart = flat_chart(vec![0.5; 10], 320.0, 200.0);
    let frame = SkiaRenderer::without_labels().render_to_rgba8(chart.scene()).expect("rgba render");
    assert_eq!((frame.width, frame.height), (320, 200));
    assert_eq!(frame.width as usize * frame.height as usize * 4, frame.pixels.len());
    assert_eq!(frame.row_bytes, frame.width as usize * 4);

    // Check background alpha in top-left pixel (RGBA)
    assert_eq!(frame.pixels[3], 255);
}

#[test]
fn marker_centres_take_the_series_colour() {
    let chart = flat_chart(vec![0.5; 10], 900.0, 300.0);
    let frame = SkiaRenderer::without_labels().render_to_rgba8(chart.scene()).expect("rgba render");
    // index 3 sits at (300, 150), away from the clip edge
    let Color { r, g, b, .. } = Color::STEELBLUE;
    assert_eq!(pixel(&frame.pixels, frame.row_bytes, 300, 150), [r, g, b, 255]);
    // empty plot area keeps the background
    let bg = chart.scene().background;
    assert_eq!(pixel(&frame.pixels, frame.row_bytes, 450, 40), [bg.r, bg.g, bg.b, 255]);
}

#[test]
fn empty_scene_is_an_error() {
    let chart = flat_chart(vec![0.5], 0.0, 0.0);
    assert!(SkiaRenderer::new().render_to_rgba8(chart.scene()).is_err());
}
