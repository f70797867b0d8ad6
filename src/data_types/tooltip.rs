use gpui::{px, Hsla, Pixels, Point};

/// Nearest sample picked for the cursor, in both coordinate spaces.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NearestPoint {
    pub series_index: usize,
    pub location: Point<f64>,
    pub screen: Point<Pixels>,
}

/// Edge of the tooltip the arrow sits on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ArrowSide {
    /// Tooltip is right of the point, arrow points left.
    #[default]
    Left,
    /// Tooltip is left of the point, arrow points right.
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArrowPlacement {
    pub side: ArrowSide,
    /// Horizontal offset of the arrow inside the tooltip box.
    pub offset_x: Pixels,
    pub rotation_deg: f32,
}

impl ArrowPlacement {
    pub fn left_edge() -> Self {
        Self {
            side: ArrowSide::Left,
            offset_x: px(-1.0),
            rotation_deg: 45.0,
        }
    }

    pub fn right_edge(tooltip_width: Pixels) -> Self {
        Self {
            side: ArrowSide::Right,
            offset_x: tooltip_width,
            rotation_deg: -135.0,
        }
    }
}

impl Default for ArrowPlacement {
    fn default() -> Self {
        Self::left_edge()
    }
}

/// One row of the tooltip body.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipLine {
    pub name: String,
    pub color: Hsla,
    pub value: String,
}

/// Everything needed to draw the tooltip for one pointer position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TooltipState {
    pub visible: bool,
    pub position: Point<Pixels>,
    pub arrow: ArrowPlacement,
    pub header: String,
    pub lines: Vec<TooltipLine>,
    pub nearest: Option<NearestPoint>,
}

impl TooltipState {
    pub fn hidden() -> Self {
        Self::default()
    }
}
