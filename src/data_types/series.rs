use gpui::Hsla;
use serde::{Deserialize, Serialize};

/// One sample of a time-series. `x` is a millisecond offset from the date origin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeSample {
    pub x: f64,
    pub y: f64,
}

impl TimeSample {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A named, coloured, x-ordered sequence of samples.
#[derive(Clone, Debug)]
pub struct Series {
    pub id: String,
    pub name: String,
    pub color: Hsla,
    samples: Vec<TimeSample>,
}

impl Series {
    pub fn new(id: impl Into<String>, name: impl Into<String>, color: Hsla) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color,
            samples: Vec::new(),
        }
    }

    pub fn with_samples(mut self, samples: Vec<TimeSample>) -> Self {
        self.set_samples(samples);
        self
    }

    /// Replaces all samples. Input is sorted by x so lookups can bisect.
    pub fn set_samples(&mut self, mut samples: Vec<TimeSample>) {
        samples.sort_by(|a, b| a.x.total_cmp(&b.x));
        self.samples = samples;
    }

    pub fn add(&mut self, samples: impl IntoIterator<Item = TimeSample>) {
        self.samples.extend(samples);
        self.samples.sort_by(|a, b| a.x.total_cmp(&b.x));
    }

    pub fn samples(&self) -> &[TimeSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn x_bounds(&self) -> Option<(f64, f64)> {
        Some((self.samples.first()?.x, self.samples.last()?.x))
    }

    pub fn y_bounds(&self) -> Option<(f64, f64)> {
        self.samples.iter().fold(None, |acc, s| match acc {
            None => Some((s.y, s.y)),
            Some((lo, hi)) => Some((lo.min(s.y), hi.max(s.y))),
        })
    }

    /// Sample whose x is closest to `x`.
    ///
    /// Returns `None` for an empty series or when `x` falls more than half a
    /// mean sample step outside the series' x range. Equidistant neighbours
    /// resolve to the earlier sample.
    pub fn nearest_by_x(&self, x: f64) -> Option<TimeSample> {
        let (first, last) = self.x_bounds()?;
        if x.is_nan() {
            return None;
        }
        if self.samples.len() == 1 {
            return Some(self.samples[0]);
        }

        let tolerance = (last - first) / (self.samples.len() - 1) as f64 / 2.0;
        if x < first - tolerance || x > last + tolerance {
            return None;
        }

        let idx = self.samples.partition_point(|s| s.x < x);
        let after = self.samples.get(idx);
        let before = idx.checked_sub(1).and_then(|i| self.samples.get(i));

        match (before, after) {
            (Some(b), Some(a)) => {
                if (a.x - x).abs() < (x - b.x).abs() {
                    Some(*a)
                } else {
                    Some(*b)
                }
            }
            (Some(b), None) => Some(*b),
            (None, Some(a)) => Some(*a),
            (None, None) => None,
        }
    }
}
