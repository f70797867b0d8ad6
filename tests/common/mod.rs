#![allow(dead_code)]

use gpui::{point, px, size, Bounds, Pixels, Size};
use gpui_chart_cursor::data_types::TooltipState;
use gpui_chart_cursor::{AxisRange, Series, TimeSample, TooltipSurface, XyChart};

/// Surface that records what the controller asked for.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub shows: usize,
    pub hides: usize,
    pub visible: bool,
    pub last: Option<TooltipState>,
}

impl TooltipSurface for RecordingSurface {
    fn measured_size(&self) -> Size<Pixels> {
        size(px(142.0), px(100.0))
    }

    fn show(&mut self, state: &TooltipState) {
        self.shows += 1;
        self.visible = true;
        self.last = Some(state.clone());
    }

    fn hide(&mut self) {
        self.hides += 1;
        self.visible = false;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }
}

/// 600x400 plot at the origin showing x in [0, 300] and y in [0, 100]:
/// screen x = 2 * x, screen y = 400 - 4 * y.
pub fn plain_chart() -> XyChart {
    XyChart::with_intervals(
        Bounds::new(point(px(0.0), px(0.0)), size(px(600.0), px(400.0))),
        AxisRange::new(0.0, 300.0),
        AxisRange::new(0.0, 100.0),
    )
}

pub fn series(name: &str, points: &[(f64, f64)]) -> Series {
    Series::new(name, name, gpui::white()).with_samples(
        points.iter().map(|&(x, y)| TimeSample::new(x, y)).collect(),
    )
}
