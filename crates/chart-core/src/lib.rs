// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the draggable chart model, scene graph and controllers.

pub mod axis;
pub mod brush;
pub mod chart;
pub mod config;
pub mod curve;
pub mod drag;
pub mod error;
pub mod geometry;
pub mod readout;
pub mod render;
pub mod scale;
pub mod scene;
pub mod series;
pub mod state;
pub mod svg;
pub mod theme;
pub mod types;

pub use axis::{Axis, AxisOrient};
pub use brush::{BrushController, BrushInput, BrushKind, BrushOutcome, PointerButton};
pub use chart::{Chart, ChartEvent, Response};
pub use config::ChartConfig;
pub use drag::{DragController, DragInput, DragOutcome, DragState, Selection};
pub use error::ChartError;
pub use geometry::{Point, Rect};
pub use readout::{Readout, ReadoutRow};
pub use render::{RenderOptions, RenderStats, SceneRenderer};
pub use scale::{LinearScale, Scales};
pub use scene::{Marker, Node, Scene};
pub use series::{MarkerRef, Sample, SampleStore, Series};
pub use state::ChartState;
pub use theme::{Color, Theme};
pub use types::{Insets, PlotLayout, Viewport};
