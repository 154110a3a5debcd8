// File: crates/chart-core/src/config.rs
// Summary: Chart configuration (JSON5-loadable) with defaults for the draggable and brushable variants.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, Result};
use crate::series::validate_series_count;
use crate::theme::{self, Theme};
use crate::types::{Insets, DOT_RADIUS, HEIGHT_FRACTION, SAMPLE_COUNT, WIDTH_FRACTION};

fn default_series_count() -> usize { 1 }
fn default_sample_count() -> usize { SAMPLE_COUNT }
fn default_dot_radius() -> f64 { DOT_RADIUS }
fn default_width_fraction() -> f64 { WIDTH_FRACTION }
fn default_height_fraction() -> f64 { HEIGHT_FRACTION }
fn default_ticks() -> usize { 10 }
fn default_zoom_idle_ms() -> u64 { 350 }
fn default_theme() -> String { "light".to_string() }

/// Upper bound on requested ticks per axis.
pub const MAX_TICKS: usize = 1000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Number of series (1..=3).
    #[serde(default = "default_series_count")]
    pub series_count: usize,

    /// Samples per series.
    #[serde(default = "default_sample_count")]
    pub sample_count: usize,

    #[serde(default)]
    pub margin: Insets,

    #[serde(default = "default_dot_radius")]
    pub dot_radius: f64,

    /// Svg width as a share of the viewport width.
    #[serde(default = "default_width_fraction")]
    pub width_fraction: f64,

    /// Svg height as a share of the viewport height.
    #[serde(default = "default_height_fraction")]
    pub height_fraction: f64,

    #[serde(default = "default_ticks")]
    pub x_ticks: usize,

    #[serde(default = "default_ticks")]
    pub y_ticks: usize,

    /// Delay before an empty zoom brush resets the X domain.
    #[serde(default = "default_zoom_idle_ms")]
    pub zoom_idle_ms: u64,

    /// Enable rectangle-select and horizontal-zoom brushes.
    #[serde(default)]
    pub brush: bool,

    #[serde(default = "default_theme")]
    pub theme: String,

    /// Seed for the initial random values; entropy when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            series_count: default_series_count(),
            sample_count: default_sample_count(),
            margin: Insets::default(),
            dot_radius: default_dot_radius(),
            width_fraction: default_width_fraction(),
            height_fraction: default_height_fraction(),
            x_ticks: default_ticks(),
            y_ticks: default_ticks(),
            zoom_idle_ms: default_zoom_idle_ms(),
            brush: false,
            theme: default_theme(),
            seed: None,
        }
    }
}

impl ChartConfig {
    /// The brush/zoom variant: tighter margins, smaller markers, brushes on.
    pub fn brushable() -> Self {
        Self {
            margin: Insets::new(40, 20, 20, 30),
            dot_radius: 5.0,
            brush: true,
            ..Self::default()
        }
    }

    /// Load configuration from a JSON5 file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json5(&content)
    }

    pub fn from_json5(content: &str) -> Result<Self> {
        let config: Self = json5::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        validate_series_count(self.series_count)?;
        if self.sample_count == 0 {
            return Err(ChartError::InvalidConfig("sample_count must be at least 1".into()));
        }
        if !(self.dot_radius.is_finite() && self.dot_radius > 0.0) {
            return Err(ChartError::InvalidConfig(format!("dot_radius must be positive, got {}", self.dot_radius)));
        }
        for (name, n) in [("x_ticks", self.x_ticks), ("y_ticks", self.y_ticks)] {
            if n > MAX_TICKS {
                return Err(ChartError::InvalidConfig(format!("{name} must be at most {MAX_TICKS}, got {n}")));
            }
        }
        for (name, f) in [("width_fraction", self.width_fraction), ("height_fraction", self.height_fraction)] {
            if !(f > 0.0 && f <= 1.0) {
                return Err(ChartError::InvalidConfig(format!("{name} must be in (0, 1], got {f}")));
            }
        }
        Ok(())
    }

    pub fn theme(&self) -> Theme {
        theme::find(&self.theme)
    }
}
