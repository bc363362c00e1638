//! Batch runner for projecting many SIP cases at once
//!
//! Cases are independent, so they are projected in parallel; output order
//! always follows input order.

mod loader;
mod writer;

pub use loader::{load_cases, load_cases_from_reader};
pub use writer::{write_series, write_summary};

use log::{info, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use thiserror::Error;

use crate::projection::{InvalidInput, ProjectionEngine, ProjectionInput, ProjectionResult};
use crate::settings::CalculatorSettings;

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// One named projection request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchCase {
    pub case_id: String,
    pub monthly_contribution: f64,
    pub annual_return_pct: f64,
    pub horizon_years: u32,
}

impl BatchCase {
    pub fn input(&self) -> Result<ProjectionInput, InvalidInput> {
        ProjectionInput::new(self.monthly_contribution, self.annual_return_pct, self.horizon_years)
    }
}

/// Result of projecting one case
#[derive(Debug, Clone, PartialEq)]
pub struct BatchOutcome {
    pub case_id: String,
    pub result: Result<ProjectionResult, InvalidInput>,
}

/// Projects batches of cases, optionally flagging inputs beyond the calculator ranges
#[derive(Debug, Clone, Default)]
pub struct BatchRunner {
    settings: Option<CalculatorSettings>,
}

impl BatchRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Warn about cases outside these settings' ranges (they are still projected)
    pub fn with_settings(settings: CalculatorSettings) -> Self {
        Self { settings: Some(settings) }
    }

    /// Project every case in parallel
    pub fn run(&self, cases: &[BatchCase]) -> Vec<BatchOutcome> {
        let start = Instant::now();

        let outcomes: Vec<BatchOutcome> = cases
            .par_iter()
            .map(|case| BatchOutcome {
                case_id: case.case_id.clone(),
                result: self.project_case(case),
            })
            .collect();

        let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
        info!(
            "Projected {} cases ({} invalid) in {:?}",
            outcomes.len(),
            failed,
            start.elapsed()
        );
        outcomes
    }

    fn project_case(&self, case: &BatchCase) -> Result<ProjectionResult, InvalidInput> {
        let input = case.input().map_err(|e| {
            warn!("Case {}: {}", case.case_id, e);
            e
        })?;

        if let Some(settings) = &self.settings {
            for issue in settings.out_of_range(&input) {
                warn!("Case {}: {}", case.case_id, issue);
            }
        }

        Ok(ProjectionEngine::new(&input).project())
    }
}
