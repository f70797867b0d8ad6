use gpui::{point, px, size, Bounds, Point};
use gpui_chart_cursor::cursor::{format_header, format_signed_value};
use gpui_chart_cursor::scales::format_value;
use gpui_chart_cursor::theme::ChartTheme;
use gpui_chart_cursor::{ChartEngine, CursorConfig, CursorContext, TooltipOverlay, TooltipSurface};

fn config() -> CursorConfig {
    CursorConfig {
        seed: Some(7),
        ..CursorConfig::default()
    }
}

#[test]
fn test_pointer_on_first_sample_of_second_series() {
    let config = config();
    let theme = ChartTheme::default();
    let overlay = TooltipOverlay::new(theme.tooltip.clone(), config.series_names.len());
    let bounds = Bounds::new(point(px(50.0), px(50.0)), size(px(800.0), px(600.0)));
    let mut ctx = CursorContext::from_config(&config, &theme, bounds, overlay).unwrap();

    // Same 20 points in every series
    let shared = ctx.chart.series_list()[0].samples().to_vec();
    assert_eq!(shared.len(), 20);
    for i in 1..3 {
        ctx.chart.series_mut(i).unwrap().set_samples(shared.clone());
    }
    ctx.fit_axes(config.y_fit_margin);

    let first = ctx.chart.series_list()[1].samples()[0];
    let pointer = ctx.chart.data_to_screen(Point::new(first.x, first.y));
    ctx.pointer_move(pointer);

    let surface = ctx.cursor.surface();
    assert!(surface.is_visible());
    assert_eq!(surface.state.header, format_header(first.x, config.header_date_origin));
    assert_eq!(surface.state.header, "Date: 1/1/2021");
    assert_eq!(surface.state.lines.len(), 3);

    let line = &surface.state.lines[1];
    assert_eq!(line.name, "Stock Price B");
    assert_eq!(line.value, format_signed_value(Some(first.y), format_value));
    assert_eq!(line.value.starts_with('+'), first.y > 0.0);
}

#[test]
fn test_initial_cursor_is_shown() {
    let config = config();
    let theme = ChartTheme::default();
    let overlay = TooltipOverlay::new(theme.tooltip.clone(), config.series_names.len()).shared();
    let bounds = Bounds::new(point(px(0.0), px(0.0)), size(px(1000.0), px(500.0)));
    let mut ctx = CursorContext::from_config(&config, &theme, bounds, overlay.clone()).unwrap();

    let state = ctx.show_initial_cursor(config.initial_pointer);
    assert!(state.visible);
    assert!(overlay.read().is_visible());
    // 40% across a fully fitted X axis is left of the flip threshold
    assert_eq!(overlay.read().state.arrow.side, gpui_chart_cursor::data_types::ArrowSide::Left);
}

#[test]
fn test_from_config_rejects_invalid_config() {
    let config = CursorConfig {
        series_names: vec![],
        ..CursorConfig::default()
    };
    let theme = ChartTheme::default();
    let overlay = TooltipOverlay::new(theme.tooltip.clone(), 0);
    assert!(CursorContext::from_config(&config, &theme, Bounds::default(), overlay).is_err());
}
