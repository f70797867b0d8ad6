//! Sample data for the cursor demo.

use crate::config::CursorConfig;
use crate::data_types::TimeSample;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::debug;

/// Random walk with unit x steps.
#[derive(Clone, Debug)]
pub struct ProgressiveTraceGenerator {
    number_of_points: usize,
    seed: u64,
}

impl ProgressiveTraceGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            number_of_points: 1000,
            seed,
        }
    }

    pub fn with_number_of_points(mut self, n: usize) -> Self {
        self.number_of_points = n;
        self
    }

    /// `x = i`; `y` starts in `[0, 1)` and moves by up to +-1 per step.
    pub fn generate(&self) -> Vec<TimeSample> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut y: f64 = rng.random();
        (0..self.number_of_points)
            .map(|i| {
                let sample = TimeSample::new(i as f64, y);
                y += (rng.random::<f64>() - 0.5) * 2.0;
                sample
            })
            .collect()
    }
}

/// One trace per configured series, generated in parallel and scaled to
/// `data_frequency_ms` steps.
pub fn generate_series_data(config: &CursorConfig) -> Vec<Vec<TimeSample>> {
    let base_seed = config.seed.unwrap_or_else(|| rand::rng().random());
    let frequency = config.data_frequency_ms;

    let data: Vec<Vec<TimeSample>> = (0..config.series_names.len())
        .into_par_iter()
        .map(|i| {
            ProgressiveTraceGenerator::new(base_seed.wrapping_add(i as u64))
                .with_number_of_points(config.sample_count)
                .generate()
                .into_iter()
                .map(|s| TimeSample::new(s.x * frequency, s.y))
                .collect()
        })
        .collect();

    debug!(series = data.len(), points = config.sample_count, seed = base_seed, "generated sample data");
    data
}
