// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (viewport, margins, plot layout).

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Samples per series when nothing else is configured.
pub const SAMPLE_COUNT: usize = 10;
/// Upper bound on series; one per palette slot.
pub const MAX_SERIES: usize = 3;
/// Marker radius in pixels.
pub const DOT_RADIUS: f64 = 8.0;
/// Share of the viewport the svg occupies horizontally.
pub const WIDTH_FRACTION: f64 = 0.8;
/// Share of the viewport the svg occupies vertically.
pub const HEIGHT_FRACTION: f64 = 0.7;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    pub const fn uniform(px: u32) -> Self { Self::new(px, px, px, px) }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::uniform(40)
    }
}

/// Browser/window inner size as reported by the viewport sizer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 800.0)
    }
}

/// Pixel dimensions of the svg and of the inner plot area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotLayout {
    pub svg_width: f64,
    pub svg_height: f64,
    pub margin: Insets,
}

impl PlotLayout {
    pub fn from_viewport(viewport: Viewport, width_fraction: f64, height_fraction: f64, margin: Insets) -> Self {
        Self {
            svg_width: (viewport.width * width_fraction).max(0.0),
            svg_height: (viewport.height * height_fraction).max(0.0),
            margin,
        }
    }

    /// Width of the clipped plot region; never negative.
    pub fn inner_width(&self) -> f64 {
        (self.svg_width - self.margin.hsum() as f64).max(0.0)
    }

    /// Height of the clipped plot region; never negative.
    pub fn inner_height(&self) -> f64 {
        (self.svg_height - self.margin.vsum() as f64).max(0.0)
    }

    /// Convert svg-root coordinates to plot-local ones.
    pub fn to_plot(&self, svg_point: Point) -> Point {
        Point::new(svg_point.x - self.margin.left as f64, svg_point.y - self.margin.top as f64)
    }

    pub fn origin(&self) -> Point {
        Point::new(self.margin.left as f64, self.margin.top as f64)
    }
}
