use gpui::{px, Pixels};

pub mod date_formatter;

pub trait PixelsExt {
    fn as_f32(&self) -> f32;
}

impl PixelsExt for Pixels {
    fn as_f32(&self) -> f32 {
        f32::from(*self)
    }
}

/// Rounds to a whole pixel, the way CSS `left`/`top` values are snapped.
pub fn round_px(value: f32) -> Pixels {
    px(value.round())
}
