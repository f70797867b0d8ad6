//! Rendering surface for the cursor tooltip.

use crate::data_types::{ArrowSide, TooltipState};
use crate::theme::TooltipTheme;
use crate::utils::PixelsExt;
use gpui::prelude::*;
use gpui::*;
use parking_lot::RwLock;
use std::sync::Arc;

/// Where the cursor controller writes its output.
pub trait TooltipSurface {
    /// Size of the tooltip as currently rendered, used to centre it on the point.
    fn measured_size(&self) -> Size<Pixels>;

    /// Applies position, arrow and content, then makes the tooltip opaque.
    fn show(&mut self, state: &TooltipState);

    /// Fades the tooltip out, leaving its last content in place.
    fn hide(&mut self);

    fn is_visible(&self) -> bool;
}

/// Tooltip state as seen by the view: last content plus current opacity.
#[derive(Clone, Debug)]
pub struct TooltipOverlay {
    pub theme: TooltipTheme,
    pub state: TooltipState,
    pub opacity: f32,
    line_count: usize,
}

impl TooltipOverlay {
    pub fn new(theme: TooltipTheme, line_count: usize) -> Self {
        Self {
            theme,
            state: TooltipState::hidden(),
            opacity: 0.0,
            line_count,
        }
    }

    pub fn shared(self) -> SharedOverlay {
        Arc::new(RwLock::new(self))
    }
}

impl TooltipSurface for TooltipOverlay {
    fn measured_size(&self) -> Size<Pixels> {
        let t = &self.theme;
        let body = t.line_height.as_f32() * self.line_count as f32 + t.body_padding_y.as_f32() * 2.0;
        size(t.width, px(t.header_height.as_f32() + body))
    }

    fn show(&mut self, state: &TooltipState) {
        self.line_count = state.lines.len();
        self.state = state.clone();
        self.opacity = 1.0;
    }

    fn hide(&mut self) {
        self.opacity = 0.0;
    }

    fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }
}

/// Overlay shared between the cursor controller and the view that paints it.
pub type SharedOverlay = Arc<RwLock<TooltipOverlay>>;

impl TooltipSurface for SharedOverlay {
    fn measured_size(&self) -> Size<Pixels> {
        self.read().measured_size()
    }

    fn show(&mut self, state: &TooltipState) {
        self.write().show(state);
    }

    fn hide(&mut self) {
        self.write().hide();
    }

    fn is_visible(&self) -> bool {
        self.read().is_visible()
    }
}

/// Builds the tooltip element: a date header, one coloured row per series and
/// an arrow on the edge facing the selected point.
pub fn render_tooltip(overlay: &TooltipOverlay) -> impl IntoElement {
    let theme = &overlay.theme;
    let state = &overlay.state;

    let rows = state.lines.iter().map(|line| {
        div()
            .flex()
            .justify_between()
            .my(px(5.0))
            .text_color(line.color)
            .child(div().mr(px(10.0)).child(format!("{}:", line.name)))
            .child(line.value.clone())
    });

    let arrow_glyph = match state.arrow.side {
        ArrowSide::Left => "◀",
        ArrowSide::Right => "▶",
    };
    let arrow_half = theme.arrow_size.as_f32() / 2.0;
    let arrow_x = match state.arrow.side {
        ArrowSide::Left => state.arrow.offset_x.as_f32() - theme.arrow_size.as_f32(),
        ArrowSide::Right => state.arrow.offset_x.as_f32(),
    };

    div()
        .absolute()
        .left(state.position.x)
        .top(state.position.y)
        .w(theme.width)
        .opacity(overlay.opacity)
        .bg(theme.background)
        .border_2()
        .border_color(theme.border)
        .rounded(theme.border_radius)
        .text_color(theme.text)
        .child(
            div()
                .h(theme.header_height)
                .px(px(7.0))
                .flex()
                .items_center()
                .bg(theme.header_background)
                .text_size(theme.header_font_size)
                .child(state.header.clone()),
        )
        .child(
            div()
                .flex()
                .flex_col()
                .py(theme.body_padding_y)
                .px(theme.body_padding_x)
                .text_size(theme.value_font_size)
                .font_weight(FontWeight::BLACK)
                .children(rows),
        )
        .child(
            div()
                .absolute()
                .left(px(arrow_x))
                .top(relative(0.49))
                .mt(px(-arrow_half))
                .text_size(theme.arrow_size)
                .text_color(theme.border)
                .child(arrow_glyph),
        )
}
