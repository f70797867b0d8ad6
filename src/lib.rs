//! Nearest-point cursor tooltip for GPUI time-series charts

pub mod config;
pub mod context;
pub mod cursor;
pub mod data_types;
pub mod engine;
pub mod generator;
pub mod scales;
pub mod surface;
pub mod theme;
pub mod transform;
pub mod utils;
pub mod view_controller;

pub use config::CursorConfig;
pub use context::CursorContext;
pub use cursor::{CursorController, CursorEvents, CursorSettings};
pub use data_types::{AxisKind, AxisRange, Series, TimeSample, TooltipState};
pub use engine::{ChartEngine, XyChart};
pub use surface::{render_tooltip, SharedOverlay, TooltipOverlay, TooltipSurface};
