//! Chart plus cursor, built once at startup and fed with input events.

use crate::config::CursorConfig;
use crate::cursor::{CursorController, CursorSettings};
use crate::data_types::{AxisRange, Series, TooltipState};
use crate::engine::{ChartEngine, XyChart};
use crate::generator::generate_series_data;
use crate::surface::TooltipSurface;
use crate::theme::ChartTheme;
use crate::utils::PixelsExt;
use eyre::{Result, WrapErr};
use gpui::{px, Bounds, Pixels, Point};
use tracing::info;

pub struct CursorContext<S: TooltipSurface> {
    pub chart: XyChart,
    pub cursor: CursorController<S>,
}

impl<S: TooltipSurface> CursorContext<S> {
    pub fn new(chart: XyChart, surface: S, settings: CursorSettings) -> Self {
        Self {
            chart,
            cursor: CursorController::new(surface, settings),
        }
    }

    /// Generates sample series for `config`, adds them to a chart and fits
    /// the axes.
    pub fn from_config(
        config: &CursorConfig,
        theme: &ChartTheme,
        bounds: Bounds<Pixels>,
        surface: S,
    ) -> Result<Self> {
        config.validate().wrap_err("cannot build cursor chart")?;

        let mut chart = XyChart::new(bounds);
        let data = generate_series_data(config);
        for (i, (name, samples)) in config.series_names.iter().zip(data).enumerate() {
            let series = Series::new(format!("series-{i}"), name.clone(), theme.series_color(i))
                .with_samples(samples);
            chart.add_series(series);
        }
        let mut ctx = Self::new(chart, surface, CursorSettings::from(config));
        ctx.fit_axes(config.y_fit_margin);
        info!(series = ctx.chart.series_list().len(), "cursor chart ready");

        Ok(ctx)
    }

    /// Fits both axes to the data. Hides the tooltip if an interval changed.
    pub fn fit_axes(&mut self, y_margin_pct: f64) {
        self.chart.fit_axes(y_margin_pct, &mut self.cursor);
    }

    /// Moves or resizes the plot area. The tooltip is hidden when the bounds
    /// actually change, since its position is no longer valid.
    pub fn set_bounds(&mut self, bounds: Bounds<Pixels>) {
        if self.chart.set_bounds(bounds) {
            self.cursor.hide("plot resized");
        }
    }

    pub fn pointer_move(&mut self, position: Point<Pixels>) {
        self.chart.pointer_move(position, &mut self.cursor);
    }

    pub fn pointer_down(&mut self, position: Point<Pixels>) {
        self.chart.pointer_down(position);
    }

    pub fn pointer_up(&mut self) {
        self.chart.pointer_up();
    }

    pub fn scroll(&mut self, delta: f32, position: Point<Pixels>) {
        self.chart.scroll(delta, position, &mut self.cursor);
    }

    pub fn set_x_interval(&mut self, range: AxisRange) {
        self.chart.set_x_interval(range, &mut self.cursor);
    }

    pub fn set_y_interval(&mut self, range: AxisRange) {
        self.chart.set_y_interval(range, &mut self.cursor);
    }

    pub fn show_cursor_at(&mut self, position: Point<Pixels>) -> TooltipState {
        self.cursor.show_cursor_at(&self.chart, position)
    }

    /// Shows the cursor at a fraction of the plot area, as done at startup.
    pub fn show_initial_cursor(&mut self, fraction: (f32, f32)) -> TooltipState {
        let bounds = self.chart.plot_bounds();
        let position = Point::new(
            bounds.origin.x + px(bounds.size.width.as_f32() * fraction.0),
            bounds.origin.y + px(bounds.size.height.as_f32() * fraction.1),
        );
        self.show_cursor_at(position)
    }
}
