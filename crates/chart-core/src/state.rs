// File: crates/chart-core/src/state.rs
// Summary: Explicitly owned chart state: sample store, plot layout and the scales derived from them.

use crate::error::Result;
use crate::geometry::{Point, Rect};
use crate::scale::Scales;
use crate::series::{MarkerRef, SampleStore};
use crate::types::PlotLayout;

#[derive(Clone, Debug)]
pub struct ChartState {
    store: SampleStore,
    layout: PlotLayout,
    scales: Scales,
    dot_radius: f64,
}

impl ChartState {
    pub fn new(store: SampleStore, layout: PlotLayout, dot_radius: f64) -> Self {
        let scales = Scales::for_layout(&layout, store.sample_count());
        Self { store, layout, scales, dot_radius }
    }

    pub fn store(&self) -> &SampleStore { &self.store }
    pub fn layout(&self) -> &PlotLayout { &self.layout }
    pub fn scales(&self) -> &Scales { &self.scales }
    pub fn dot_radius(&self) -> f64 { self.dot_radius }

    /// Inner plot rectangle in plot-local coordinates.
    pub fn plot_rect(&self) -> Rect {
        Rect::from_ltwh(0.0, 0.0, self.layout.inner_width(), self.layout.inner_height())
    }

    /// Write a sample value; the single mutation entry point of the store.
    pub fn set_value(&mut self, series: usize, index: usize, value: f64) -> Result<f64> {
        self.store.set_value(series, index, value)
    }

    /// Plot-local pixel position of a sample.
    pub fn marker_position(&self, marker: MarkerRef) -> Option<Point> {
        let sample = self.store.sample(marker)?;
        let (x, y) = self.scales.position(sample.index(), sample.value());
        Some(Point::new(x, y))
    }

    /// Positions of every sample in series order, then index order.
    pub fn marker_positions(&self) -> impl Iterator<Item = (MarkerRef, Point)> + '_ {
        self.store.series().iter().enumerate().flat_map(move |(si, s)| {
            s.samples().iter().map(move |sample| {
                let (x, y) = self.scales.position(sample.index(), sample.value());
                (MarkerRef::new(si, sample.index()), Point::new(x, y))
            })
        })
    }

    /// New pixel dimensions; scales are rebuilt, so any zoom is dropped.
    pub fn relayout(&mut self, layout: PlotLayout) {
        self.layout = layout;
        self.scales = Scales::for_layout(&layout, self.store.sample_count());
    }

    pub fn zoom_x(&mut self, px0: f64, px1: f64) {
        self.scales.zoom_x(px0, px1);
    }

    pub fn reset_x(&mut self) {
        self.scales.reset_x();
    }
}
