use d3rs::scale::{LinearScale, Scale as D3Scale};

/// Linear mapping between a data domain and a pixel range.
#[derive(Clone)]
pub struct ChartScale {
    inner: LinearScale,
    domain: (f64, f64),
    range: (f32, f32),
}

impl ChartScale {
    pub fn new_linear(domain: (f64, f64), range: (f32, f32)) -> Self {
        let domain = widen_degenerate(domain.0, domain.1);
        Self {
            inner: build(domain, range),
            domain,
            range,
        }
    }

    pub fn map(&self, value: f64) -> f32 {
        let res = self.inner.scale(value) as f32;
        if res.is_nan() || res.is_infinite() {
            0.0
        } else {
            res
        }
    }

    pub fn invert(&self, pixel: f32) -> f64 {
        self.inner.invert(pixel as f64).unwrap_or(0.0)
    }

    pub fn range(&self) -> (f32, f32) {
        self.range
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        self.inner.ticks(count)
    }

    pub fn update_domain(&mut self, min: f64, max: f64) {
        self.domain = widen_degenerate(min, max);
        self.inner = build(self.domain, self.range);
    }

    pub fn update_range(&mut self, min: f32, max: f32) {
        self.range = (min, max);
        self.inner = build(self.domain, self.range);
    }

    /// Value axis label: 4 decimals for tiny values, none above 1000, 2 otherwise.
    pub fn format_value(&self, value: f64) -> String {
        format_value(value)
    }
}

pub fn format_value(value: f64) -> String {
    if value.abs() < 0.001 && value.abs() > 0.0 {
        format!("{:.4}", value)
    } else if value.abs() > 1000.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

fn widen_degenerate(min: f64, max: f64) -> (f64, f64) {
    if (max - min).abs() < f64::EPSILON {
        (min - 0.5, max + 0.5)
    } else {
        (min, max)
    }
}

fn build(domain: (f64, f64), range: (f32, f32)) -> LinearScale {
    LinearScale::new()
        .domain(domain.0, domain.1)
        .range(range.0 as f64, range.1 as f64)
}
