//! The chart the cursor runs against: series, axes and coordinate transforms.

use crate::cursor::CursorEvents;
use crate::data_types::{AxisKind, AxisRange, Series};
use crate::scales;
use crate::transform::PlotTransform;
use crate::utils::PixelsExt;
use crate::view_controller::ViewController;
use gpui::{Bounds, Pixels, Point};
use tracing::{debug, trace};

/// Queries the cursor controller needs from a chart.
pub trait ChartEngine {
    fn screen_to_data(&self, point: Point<Pixels>) -> Point<f64>;

    fn data_to_screen(&self, point: Point<f64>) -> Point<Pixels>;

    fn series_count(&self) -> usize;

    fn series(&self, index: usize) -> &Series;

    /// Sample of series `index` nearest (in x) to a screen position.
    fn solve_nearest_from_screen(&self, index: usize, position: Point<Pixels>) -> Option<Point<f64>>;

    fn x_interval(&self) -> AxisRange;

    /// Value axis formatter.
    fn format_value(&self, value: f64) -> String;

    fn plot_bounds(&self) -> Bounds<Pixels>;
}

/// Pixels the pointer must travel with a button held before it counts as a drag.
const DRAG_THRESHOLD: f32 = 3.0;
const ZOOM_SENSITIVITY: f32 = 200.0;

#[derive(Clone, Debug, Default)]
struct PointerTracker {
    inside: bool,
    press: Option<Point<Pixels>>,
    last: Option<Point<Pixels>>,
    dragging: bool,
}

/// XY chart with a time X axis and a value Y axis.
#[derive(Clone, Debug, Default)]
pub struct XyChart {
    x_axis: AxisRange,
    y_axis: AxisRange,
    series: Vec<Series>,
    bounds: Bounds<Pixels>,
    pointer: PointerTracker,
}

impl XyChart {
    pub fn new(bounds: Bounds<Pixels>) -> Self {
        Self::with_intervals(bounds, AxisRange::new(0.0, 1.0), AxisRange::new(0.0, 1.0))
    }

    /// Chart with initial visible intervals. Later changes go through
    /// `set_x_interval`/`set_y_interval`.
    pub fn with_intervals(bounds: Bounds<Pixels>, x_axis: AxisRange, y_axis: AxisRange) -> Self {
        Self {
            x_axis,
            y_axis,
            bounds,
            ..Default::default()
        }
    }

    pub fn x_axis(&self) -> AxisRange {
        self.x_axis
    }

    pub fn y_axis(&self) -> AxisRange {
        self.y_axis
    }

    pub fn add_series(&mut self, series: Series) -> usize {
        self.series.push(series);
        self.series.len() - 1
    }

    pub fn series_list(&self) -> &[Series] {
        &self.series
    }

    pub fn series_mut(&mut self, index: usize) -> Option<&mut Series> {
        self.series.get_mut(index)
    }

    /// Moves or resizes the plot area. Returns whether the bounds changed.
    pub fn set_bounds(&mut self, bounds: Bounds<Pixels>) -> bool {
        if self.bounds == bounds {
            return false;
        }
        self.bounds = bounds;
        true
    }

    pub fn transform(&self) -> PlotTransform {
        PlotTransform::for_bounds(self.x_axis.as_tuple(), self.y_axis.as_tuple(), self.bounds)
    }

    /// Fits X exactly to the data and Y with `y_margin_pct` padding.
    pub fn fit_axes(&mut self, y_margin_pct: f64, events: &mut dyn CursorEvents) {
        let mut x = (f64::INFINITY, f64::NEG_INFINITY);
        let mut y = (f64::INFINITY, f64::NEG_INFINITY);
        for s in &self.series {
            if let Some((lo, hi)) = s.x_bounds() {
                x = (x.0.min(lo), x.1.max(hi));
            }
            if let Some((lo, hi)) = s.y_bounds() {
                y = (y.0.min(lo), y.1.max(hi));
            }
        }
        let mut x_range = self.x_axis;
        let mut y_range = self.y_axis;
        ViewController::auto_fit_axis(&mut x_range, x.0, x.1, 0.0);
        ViewController::auto_fit_axis(&mut y_range, y.0, y.1, y_margin_pct);
        debug!(x = ?x_range, y = ?y_range, "fitted axes");
        self.set_x_interval(x_range, events);
        self.set_y_interval(y_range, events);
    }

    /// Sets the visible X interval, notifying `events` if it changed.
    pub fn set_x_interval(&mut self, range: AxisRange, events: &mut dyn CursorEvents) {
        if self.x_axis != range {
            self.x_axis = range;
            events.on_axis_interval_change(AxisKind::X);
        }
    }

    /// Sets the visible Y interval, notifying `events` if it changed.
    pub fn set_y_interval(&mut self, range: AxisRange, events: &mut dyn CursorEvents) {
        if self.y_axis != range {
            self.y_axis = range;
            events.on_axis_interval_change(AxisKind::Y);
        }
    }

    pub fn contains(&self, position: Point<Pixels>) -> bool {
        let (x, y) = (position.x.as_f32(), position.y.as_f32());
        let left = self.bounds.origin.x.as_f32();
        let top = self.bounds.origin.y.as_f32();
        x >= left
            && x <= left + self.bounds.size.width.as_f32()
            && y >= top
            && y <= top + self.bounds.size.height.as_f32()
    }

    pub fn pointer_down(&mut self, position: Point<Pixels>) {
        if self.contains(position) {
            self.pointer.press = Some(position);
            self.pointer.last = Some(position);
        }
    }

    pub fn pointer_up(&mut self) {
        self.pointer.press = None;
        self.pointer.last = None;
        self.pointer.dragging = false;
    }

    /// Routes a raw pointer move to hover, leave or drag handling.
    pub fn pointer_move(&mut self, position: Point<Pixels>, events: &mut dyn CursorEvents) {
        if let Some(press) = self.pointer.press {
            if !self.pointer.dragging {
                let moved = position - press;
                if moved.x.as_f32().hypot(moved.y.as_f32()) < DRAG_THRESHOLD {
                    return;
                }
                self.pointer.dragging = true;
                events.on_drag_start();
            }
            self.drag_to(position, events);
            return;
        }

        let inside = self.contains(position);
        if inside {
            self.pointer.inside = true;
            events.on_pointer_move(&*self, position);
        } else if self.pointer.inside {
            self.pointer.inside = false;
            events.on_pointer_leave();
        }
    }

    /// Zooms X around the pointer. Positive `delta` zooms in.
    pub fn scroll(&mut self, delta: f32, position: Point<Pixels>, events: &mut dyn CursorEvents) {
        if delta == 0.0 || !self.contains(position) {
            return;
        }
        let width = self.bounds.size.width.as_f32();
        let pivot_pct = ViewController::map_to_pct(
            (position.x - self.bounds.origin.x).as_f32(),
            width,
        );
        let factor = ViewController::compute_zoom_factor(delta, ZOOM_SENSITIVITY);
        let mut range = self.x_axis;
        ViewController::zoom_axis_at(&mut range, pivot_pct, factor);
        self.set_x_interval(range, events);
    }

    fn drag_to(&mut self, position: Point<Pixels>, events: &mut dyn CursorEvents) {
        let Some(last) = self.pointer.last else {
            return;
        };
        let delta = position - last;
        self.pointer.last = Some(position);
        trace!(dx = delta.x.as_f32(), dy = delta.y.as_f32(), "drag pan");

        let mut x = self.x_axis;
        ViewController::pan_axis(&mut x, delta.x.as_f32(), self.bounds.size.width.as_f32(), false);
        self.set_x_interval(x, events);

        let mut y = self.y_axis;
        ViewController::pan_axis(&mut y, delta.y.as_f32(), self.bounds.size.height.as_f32(), true);
        self.set_y_interval(y, events);
    }
}

impl ChartEngine for XyChart {
    fn screen_to_data(&self, point: Point<Pixels>) -> Point<f64> {
        self.transform().screen_to_data(point)
    }

    fn data_to_screen(&self, point: Point<f64>) -> Point<Pixels> {
        self.transform().data_to_screen(point)
    }

    fn series_count(&self) -> usize {
        self.series.len()
    }

    fn series(&self, index: usize) -> &Series {
        &self.series[index]
    }

    fn solve_nearest_from_screen(&self, index: usize, position: Point<Pixels>) -> Option<Point<f64>> {
        let data = self.screen_to_data(position);
        self.series
            .get(index)?
            .nearest_by_x(data.x)
            .map(|s| Point::new(s.x, s.y))
    }

    fn x_interval(&self) -> AxisRange {
        self.x_axis
    }

    fn format_value(&self, value: f64) -> String {
        scales::format_value(value)
    }

    fn plot_bounds(&self) -> Bounds<Pixels> {
        self.bounds
    }
}
