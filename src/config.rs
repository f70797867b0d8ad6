//! Demo configuration for the cursor chart.

use chrono::NaiveDate;
use chrono_tz::Tz;
use eyre::{bail, Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::utils::date_formatter::DAY_MS;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CursorConfig {
    pub title: String,
    pub y_axis_title: String,
    pub series_names: Vec<String>,
    pub sample_count: usize,
    /// Date matching x = 0 on the time axis.
    pub date_origin: NaiveDate,
    /// Date matching x = 0 in the tooltip header. Kept apart from the axis
    /// origin, the header counts from its own epoch.
    pub header_date_origin: NaiveDate,
    pub timezone: Tz,
    /// X step between generated samples, in milliseconds.
    pub data_frequency_ms: f64,
    /// Horizontal gap between the selected point and the tooltip box.
    pub tooltip_gap: f32,
    /// Startup cursor position as fractions of the plot size.
    pub initial_pointer: (f32, f32),
    /// Relative padding added around the Y data range when fitting.
    pub y_fit_margin: f64,
    /// Fixed seed for sample generation; random when absent.
    pub seed: Option<u64>,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            title: "Custom Cursor".to_string(),
            y_axis_title: "Stock price variation €".to_string(),
            series_names: vec![
                "Stock Price A".to_string(),
                "Stock Price B".to_string(),
                "Stock Price C".to_string(),
            ],
            sample_count: 20,
            date_origin: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap_or_default(),
            header_date_origin: NaiveDate::from_ymd_opt(2021, 1, 1).unwrap_or_default(),
            timezone: Tz::UTC,
            data_frequency_ms: 30.0 * DAY_MS,
            tooltip_gap: 10.0,
            initial_pointer: (0.4, 0.5),
            y_fit_margin: 0.05,
            seed: None,
        }
    }
}

impl CursorConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).wrap_err("invalid cursor config JSON")?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read config {}", path.display()))?;
        Self::from_json_str(&raw).wrap_err_with(|| format!("in {}", path.display()))
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).wrap_err("failed to serialize cursor config")
    }

    pub fn validate(&self) -> Result<()> {
        if self.series_names.is_empty() {
            bail!("at least one series name is required");
        }
        if self.sample_count == 0 {
            bail!("sample_count must be greater than zero");
        }
        if !(self.data_frequency_ms.is_finite() && self.data_frequency_ms > 0.0) {
            bail!("data_frequency_ms must be a positive number, got {}", self.data_frequency_ms);
        }
        let (fx, fy) = self.initial_pointer;
        if !(0.0..=1.0).contains(&fx) || !(0.0..=1.0).contains(&fy) {
            bail!("initial_pointer fractions must be within [0, 1], got ({fx}, {fy})");
        }
        Ok(())
    }
}
