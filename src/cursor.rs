//! Custom cursor: finds the series point nearest to the pointer and places a
//! tooltip next to it.
//!
//! The computation is a pure function of the pointer position, the chart's
//! series and its visible X interval. [`CursorController`] only adds the
//! surface writes on top of it.

use crate::config::CursorConfig;
use crate::data_types::{
    ArrowPlacement, AxisKind, AxisRange, NearestPoint, TooltipLine, TooltipState,
};
use crate::engine::ChartEngine;
use crate::surface::TooltipSurface;
use crate::utils::date_formatter::format_offset_date;
use crate::utils::{round_px, PixelsExt};
use chrono::NaiveDate;
use gpui::{Pixels, Point, Size};
use tracing::{debug, trace};

/// Chart events the cursor reacts to.
pub trait CursorEvents {
    fn on_pointer_move(&mut self, engine: &dyn ChartEngine, position: Point<Pixels>);

    fn on_pointer_leave(&mut self);

    fn on_drag_start(&mut self);

    fn on_axis_interval_change(&mut self, axis: AxisKind);
}

/// Parameters of the cursor that do not change per event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorSettings {
    /// Date that x = 0 corresponds to in the tooltip header.
    pub header_date_origin: NaiveDate,
    /// Gap between the point and the tooltip edge.
    pub gap: f32,
}

impl From<&CursorConfig> for CursorSettings {
    fn from(config: &CursorConfig) -> Self {
        Self {
            header_date_origin: config.header_date_origin,
            gap: config.tooltip_gap,
        }
    }
}

impl Default for CursorSettings {
    fn default() -> Self {
        Self::from(&CursorConfig::default())
    }
}

/// Per-series nearest sample for a screen position, in series order.
pub fn solve_nearest(engine: &dyn ChartEngine, position: Point<Pixels>) -> Vec<Option<Point<f64>>> {
    (0..engine.series_count())
        .map(|i| engine.solve_nearest_from_screen(i, position))
        .collect()
}

/// Picks the result whose y is closest to `pointer_y`.
///
/// A later candidate only wins when strictly closer, so ties go to the
/// earliest series.
pub fn select_nearest(results: &[Option<Point<f64>>], pointer_y: f64) -> Option<(usize, Point<f64>)> {
    results
        .iter()
        .enumerate()
        .filter_map(|(i, r)| r.map(|p| (i, p)))
        .fold(None, |best, (i, p)| match best {
            None => Some((i, p)),
            Some((_, b)) => {
                if (pointer_y - p.y).abs() < (pointer_y - b.y).abs() {
                    Some((i, p))
                } else {
                    best
                }
            }
        })
}

/// X beyond which the tooltip flips to the left of the point.
pub fn flip_threshold(x_interval: &AxisRange) -> f64 {
    x_interval.max / 1.5
}

/// Top-left corner of the tooltip and its arrow for a point at `anchor`.
pub fn place_tooltip(
    anchor: Point<Pixels>,
    data_x: f64,
    x_interval: &AxisRange,
    tooltip: Size<Pixels>,
    gap: f32,
) -> (Point<Pixels>, ArrowPlacement) {
    let sx = anchor.x.as_f32();
    let top = round_px(anchor.y.as_f32() - tooltip.height.as_f32() / 2.0);

    if data_x > flip_threshold(x_interval) {
        let left = round_px(sx - tooltip.width.as_f32() - gap);
        (Point::new(left, top), ArrowPlacement::right_edge(tooltip.width))
    } else {
        let left = round_px(sx + gap);
        (Point::new(left, top), ArrowPlacement::left_edge())
    }
}

pub fn format_header(data_x: f64, origin: NaiveDate) -> String {
    format!("Date: {}", format_offset_date(data_x, origin))
}

/// `+` for strictly positive values, nothing otherwise; `-` when absent.
pub fn format_signed_value(value: Option<f64>, format: impl Fn(f64) -> String) -> String {
    match value {
        Some(v) if v > 0.0 => format!("+{}", format(v)),
        Some(v) => format(v),
        None => "-".to_string(),
    }
}

/// Full tooltip state for a pointer position.
pub fn compute_tooltip(
    engine: &dyn ChartEngine,
    position: Point<Pixels>,
    tooltip: Size<Pixels>,
    settings: &CursorSettings,
) -> TooltipState {
    let pointer = engine.screen_to_data(position);
    let results = solve_nearest(engine, position);

    let Some((series_index, location)) = select_nearest(&results, pointer.y) else {
        return TooltipState::hidden();
    };

    let screen = engine.data_to_screen(location);
    let (tooltip_pos, arrow) =
        place_tooltip(screen, location.x, &engine.x_interval(), tooltip, settings.gap);

    let lines = results
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let series = engine.series(i);
            TooltipLine {
                name: series.name.clone(),
                color: series.color,
                value: format_signed_value(r.map(|p| p.y), |v| engine.format_value(v)),
            }
        })
        .collect();

    TooltipState {
        visible: true,
        position: tooltip_pos,
        arrow,
        header: format_header(location.x, settings.header_date_origin),
        lines,
        nearest: Some(NearestPoint {
            series_index,
            location,
            screen,
        }),
    }
}

/// Drives a [`TooltipSurface`] from chart events.
pub struct CursorController<S: TooltipSurface> {
    surface: S,
    settings: CursorSettings,
}

impl<S: TooltipSurface> CursorController<S> {
    pub fn new(surface: S, settings: CursorSettings) -> Self {
        Self { surface, settings }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn settings(&self) -> &CursorSettings {
        &self.settings
    }

    /// Recomputes the tooltip for `position` and writes it to the surface.
    pub fn show_cursor_at(&mut self, engine: &dyn ChartEngine, position: Point<Pixels>) -> TooltipState {
        let state = compute_tooltip(engine, position, self.surface.measured_size(), &self.settings);
        match &state.nearest {
            Some(nearest) => {
                trace!(series = nearest.series_index, x = nearest.location.x, y = nearest.location.y, "cursor on point");
                self.surface.show(&state);
            }
            None => self.hide("no nearest point"),
        }
        state
    }

    pub fn hide(&mut self, reason: &str) {
        if self.surface.is_visible() {
            debug!(reason, "hiding cursor tooltip");
        }
        self.surface.hide();
    }
}

impl<S: TooltipSurface> CursorEvents for CursorController<S> {
    fn on_pointer_move(&mut self, engine: &dyn ChartEngine, position: Point<Pixels>) {
        self.show_cursor_at(engine, position);
    }

    fn on_pointer_leave(&mut self) {
        self.hide("pointer left plot");
    }

    fn on_drag_start(&mut self) {
        self.hide("drag started");
    }

    fn on_axis_interval_change(&mut self, axis: AxisKind) {
        trace!(?axis, "axis interval changed");
        self.hide("axis interval changed");
    }
}
