use crate::data_types::AxisRange;

/// ViewController handles the business logic of interactions (zoom, pan, fit)
/// independently of the GPUI infrastructure to facilitate testing.
pub struct ViewController;

impl ViewController {
    /// Calculates and applies a pan on an axis based on a pixel delta.
    pub fn pan_axis(range: &mut AxisRange, delta_pixels: f32, total_pixels: f32, is_y: bool) {
        if total_pixels <= 0.0 {
            return;
        }
        let ratio = range.span() / total_pixels as f64;

        // Dragging right pulls earlier data into view, so X moves against the
        // pointer. Screen Y grows downwards while values grow upwards.
        let delta_data = if is_y {
            delta_pixels as f64 * ratio
        } else {
            -delta_pixels as f64 * ratio
        };

        range.pan(delta_data);
    }

    /// Zooms on an axis at a specific pivot point (expressed as a percentage of the domain).
    pub fn zoom_axis_at(range: &mut AxisRange, pivot_pct: f64, factor: f64) {
        const MIN_SPAN: f64 = 1e-9;
        let mut new_factor = factor;

        if range.span() * factor < MIN_SPAN {
            new_factor = MIN_SPAN / range.span();
        }

        let pivot_data = range.min + range.span() * pivot_pct;
        range.zoom_at(pivot_data, pivot_pct, new_factor);
    }

    /// Calculates a zoom factor based on a pixel delta.
    pub fn compute_zoom_factor(delta: f32, sensitivity: f32) -> f64 {
        let factor = 1.0 + (delta.abs() / sensitivity) as f64;
        if delta > 0.0 {
            1.0 / factor
        } else {
            factor
        }
    }

    /// Calculates the new bounds for an auto-fit with an optional margin.
    pub fn compute_auto_fit(min: f64, max: f64, margin_pct: f64) -> (f64, f64) {
        if min == f64::INFINITY || max == f64::NEG_INFINITY {
            return (0.0, 100.0);
        }

        let span = if (max - min).abs() < f64::EPSILON {
            1.0 // Avoids a zero span
        } else {
            max - min
        };

        (min - span * margin_pct, max + span * margin_pct)
    }

    /// Applies an auto-fit on a given axis.
    pub fn auto_fit_axis(range: &mut AxisRange, data_min: f64, data_max: f64, margin_pct: f64) {
        let (new_min, new_max) = Self::compute_auto_fit(data_min, data_max, margin_pct);
        range.min = new_min;
        range.max = new_max;
    }

    /// Position of `pixels` along `total_pixels` as a fraction in `[0, 1]`.
    pub fn map_to_pct(pixels: f32, total_pixels: f32) -> f64 {
        if total_pixels <= 0.0 {
            return 0.0;
        }
        (pixels / total_pixels).clamp(0.0, 1.0) as f64
    }
}
