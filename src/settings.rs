//! Calculator settings: input ranges and defaults for the SIP form
//!
//! These bounds describe the sliders a front end offers. The projection engine
//! never consults them; callers use [`CalculatorSettings::out_of_range`] to warn
//! or reject before projecting.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::projection::{InvalidInput, ProjectionInput};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid {name} range: {reason}")]
    InvalidRange { name: &'static str, reason: String },
}

/// Bounds, granularity and starting value of one input
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

impl SliderRange {
    pub const fn new(min: f64, max: f64, step: f64, default: f64) -> Self {
        Self { min, max, step, default }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    fn validate(&self, name: &'static str) -> Result<(), SettingsError> {
        let reason = if !(self.min.is_finite() && self.max.is_finite() && self.step.is_finite()) {
            Some("bounds must be finite".to_string())
        } else if self.min > self.max {
            Some(format!("min {} is above max {}", self.min, self.max))
        } else if self.step <= 0.0 {
            Some(format!("step {} must be positive", self.step))
        } else if !self.contains(self.default) {
            Some(format!("default {} lies outside {}..={}", self.default, self.min, self.max))
        } else {
            None
        };

        match reason {
            Some(reason) => Err(SettingsError::InvalidRange { name, reason }),
            None => Ok(()),
        }
    }
}

/// Ranges for the three SIP calculator inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorSettings {
    pub monthly_contribution: SliderRange,
    pub return_rate_percent: SliderRange,
    pub horizon_years: SliderRange,
}

impl Default for CalculatorSettings {
    fn default() -> Self {
        Self {
            monthly_contribution: SliderRange::new(0.0, 100_000.0, 1_000.0, 5_000.0),
            return_rate_percent: SliderRange::new(0.0, 30.0, 1.0, 12.0),
            horizon_years: SliderRange::new(0.0, 40.0, 1.0, 10.0),
        }
    }
}

impl CalculatorSettings {
    /// Load settings from a JSON file; missing sections keep their defaults
    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        self.monthly_contribution.validate("monthly contribution")?;
        self.return_rate_percent.validate("return rate")?;
        self.horizon_years.validate("horizon")
    }

    /// Projection input built from the default slider positions
    pub fn default_input(&self) -> Result<ProjectionInput, InvalidInput> {
        ProjectionInput::new(
            self.monthly_contribution.default,
            self.return_rate_percent.default,
            self.horizon_years.default.round() as u32,
        )
    }

    /// Describe every input that falls outside its slider range
    pub fn out_of_range(&self, input: &ProjectionInput) -> Vec<String> {
        let checks = [
            ("monthly contribution", input.monthly_contribution(), &self.monthly_contribution),
            ("return rate", input.annual_return_rate_percent(), &self.return_rate_percent),
            ("horizon", f64::from(input.horizon_years()), &self.horizon_years),
        ];

        checks
            .iter()
            .filter(|(_, value, range)| !range.contains(*value))
            .map(|(name, value, range)| {
                format!("{} {} is outside {}..={}", name, value, range.min, range.max)
            })
            .collect()
    }
}
