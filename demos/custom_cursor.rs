use gpui::prelude::*;
use gpui::*;
use gpui_chart_cursor::theme::ChartTheme;
use gpui_chart_cursor::utils::date_formatter::{determine_date_format, format_axis_offset};
use gpui_chart_cursor::utils::PixelsExt;
use gpui_chart_cursor::{render_tooltip, CursorConfig, CursorContext, SharedOverlay, TooltipOverlay};

const MARGIN_LEFT: f32 = 60.0;
const MARGIN_RIGHT: f32 = 40.0;
const MARGIN_TOP: f32 = 50.0;
const MARGIN_BOTTOM: f32 = 40.0;

struct CursorDemo {
    config: CursorConfig,
    theme: ChartTheme,
    overlay: SharedOverlay,
    ctx: CursorContext<SharedOverlay>,
    started: bool,
}

impl CursorDemo {
    fn new(config: CursorConfig) -> eyre::Result<Self> {
        let theme = ChartTheme::default();
        let overlay = TooltipOverlay::new(theme.tooltip.clone(), config.series_names.len()).shared();
        let ctx = CursorContext::from_config(&config, &theme, Bounds::default(), overlay.clone())?;
        Ok(Self {
            config,
            theme,
            overlay,
            ctx,
            started: false,
        })
    }

    fn plot_bounds(window: &Window) -> Bounds<Pixels> {
        let viewport = window.viewport_size();
        let width = (viewport.width.as_f32() - MARGIN_LEFT - MARGIN_RIGHT).max(1.0);
        let height = (viewport.height.as_f32() - MARGIN_TOP - MARGIN_BOTTOM).max(1.0);
        Bounds::new(
            point(px(MARGIN_LEFT), px(MARGIN_TOP)),
            size(px(width), px(height)),
        )
    }

    fn handle_mouse_move(&mut self, event: &MouseMoveEvent, _window: &mut Window, cx: &mut Context<Self>) {
        self.ctx.pointer_move(event.position);
        cx.notify();
    }

    fn handle_mouse_down(&mut self, event: &MouseDownEvent, _window: &mut Window, cx: &mut Context<Self>) {
        self.ctx.pointer_down(event.position);
        cx.notify();
    }

    fn handle_mouse_up(&mut self, _event: &MouseUpEvent, _window: &mut Window, cx: &mut Context<Self>) {
        self.ctx.pointer_up();
        cx.notify();
    }

    fn handle_scroll(&mut self, event: &ScrollWheelEvent, _window: &mut Window, cx: &mut Context<Self>) {
        let delta = event.delta.pixel_delta(px(20.0)).y.as_f32();
        self.ctx.scroll(delta, event.position);
        cx.notify();
    }

    fn x_tick_labels(&self) -> Vec<AnyElement> {
        let transform = self.ctx.chart.transform();
        let (min, max) = self.ctx.chart.x_axis().as_tuple();
        let format = determine_date_format((max - min) / 1000.0);
        let label_top = transform.bounds.origin.y + transform.bounds.size.height + px(6.0);

        transform
            .x_scale
            .ticks(6)
            .into_iter()
            .map(|tick| {
                let label = format_axis_offset(tick, self.config.date_origin, self.config.timezone, format);
                div()
                    .absolute()
                    .left(transform.x_data_to_screen(tick) - px(24.0))
                    .top(label_top)
                    .text_size(self.theme.axis_label_size)
                    .text_color(self.theme.axis_label)
                    .child(label)
                    .into_any_element()
            })
            .collect()
    }
}

impl Render for CursorDemo {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let bounds = Self::plot_bounds(window);
        self.ctx.set_bounds(bounds);
        if !self.started {
            self.started = true;
            self.ctx.show_initial_cursor(self.config.initial_pointer);
        }

        let chart = self.ctx.chart.clone();
        let theme = self.theme.clone();
        let tooltip = render_tooltip(&self.overlay.read());

        div()
            .size_full()
            .relative()
            .bg(self.theme.background)
            .cursor(CursorStyle::Crosshair)
            .on_mouse_move(cx.listener(Self::handle_mouse_move))
            .on_mouse_down(MouseButton::Left, cx.listener(Self::handle_mouse_down))
            .on_mouse_up(MouseButton::Left, cx.listener(Self::handle_mouse_up))
            .on_scroll_wheel(cx.listener(Self::handle_scroll))
            .child(
                div()
                    .absolute()
                    .top(px(12.0))
                    .left(px(MARGIN_LEFT))
                    .text_color(self.theme.title)
                    .child(self.config.title.clone()),
            )
            .child(
                div()
                    .absolute()
                    .top(px(MARGIN_TOP - 18.0))
                    .left(px(4.0))
                    .text_size(self.theme.axis_label_size)
                    .text_color(self.theme.axis_label)
                    .child(self.config.y_axis_title.clone()),
            )
            .child(
                canvas(|_, _, _| {}, move |_, (), window, _cx| {
                    let transform = chart.transform();
                    window.paint_quad(fill(transform.bounds, theme.plot_background));

                    for series in chart.series_list() {
                        let mut builder = PathBuilder::stroke(theme.line_width);
                        for (i, sample) in series.samples().iter().enumerate() {
                            let p = transform.data_to_screen(point(sample.x, sample.y));
                            if i == 0 {
                                builder.move_to(p);
                            } else {
                                builder.line_to(p);
                            }
                        }
                        if let Ok(path) = builder.build() {
                            window.paint_path(path, series.color);
                        }

                        let half = theme.point_size.as_f32() / 2.0;
                        for sample in series.samples() {
                            let p = transform.data_to_screen(point(sample.x, sample.y));
                            let marker = Bounds::new(
                                point(p.x - px(half), p.y - px(half)),
                                size(theme.point_size, theme.point_size),
                            );
                            window.paint_quad(fill(marker, series.color));
                        }
                    }
                })
                .size_full(),
            )
            .children(self.x_tick_labels())
            .child(tooltip)
    }
}

fn main() -> eyre::Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => CursorConfig::from_path(path)?,
        None => CursorConfig::default(),
    };
    let demo = CursorDemo::new(config)?;

    Application::new().run(move |cx: &mut App| {
        if let Err(err) = cx.open_window(WindowOptions::default(), |_window, cx| cx.new(|_| demo)) {
            tracing::error!(?err, "failed to open window");
            cx.quit();
        }
    });
    Ok(())
}
