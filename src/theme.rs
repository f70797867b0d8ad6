use gpui::*;

#[derive(Clone, Debug)]
pub struct ChartTheme {
    pub background: Hsla,
    pub plot_background: Hsla,
    pub axis_label: Hsla,
    pub axis_label_size: Pixels,
    pub title: Hsla,
    pub line_width: Pixels,
    pub point_size: Pixels,
    /// Colours handed out to series in insertion order.
    pub series_palette: Vec<Hsla>,
    pub tooltip: TooltipTheme,
}

impl ChartTheme {
    pub fn series_color(&self, index: usize) -> Hsla {
        if self.series_palette.is_empty() {
            return gpui::white();
        }
        self.series_palette[index % self.series_palette.len()]
    }
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            background: gpui::black(),
            plot_background: rgb(0x1c1c1c).into(),
            axis_label: gpui::white().alpha(0.8),
            axis_label_size: px(11.0),
            title: gpui::white(),
            line_width: px(2.0),
            point_size: px(6.0),
            series_palette: vec![
                rgb(0xeb7a3a).into(),
                rgb(0x3aa0eb).into(),
                rgb(0x6ecf5a).into(),
            ],
            tooltip: TooltipTheme::default(),
        }
    }
}

/// Look of the cursor tooltip panel.
#[derive(Clone, Debug)]
pub struct TooltipTheme {
    pub width: Pixels,
    pub background: Hsla,
    pub border: Hsla,
    pub border_radius: Pixels,
    pub header_background: Hsla,
    pub header_height: Pixels,
    pub header_font_size: Pixels,
    pub text: Hsla,
    pub value_font_size: Pixels,
    pub line_height: Pixels,
    pub body_padding_y: Pixels,
    pub body_padding_x: Pixels,
    pub arrow_size: Pixels,
}

impl Default for TooltipTheme {
    fn default() -> Self {
        Self {
            width: px(142.0),
            background: rgba(0x181818e6).into(),
            border: gpui::white(),
            border_radius: px(5.0),
            header_background: rgb(0x808080).into(),
            header_height: px(28.0),
            header_font_size: px(10.0),
            text: gpui::white(),
            value_font_size: px(13.0),
            line_height: px(26.0),
            body_padding_y: px(5.0),
            body_padding_x: px(14.0),
            arrow_size: px(10.0),
        }
    }
}
