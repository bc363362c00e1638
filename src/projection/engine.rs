//! Closed-form SIP projection engine
//!
//! Contributions are made at the start of each month (annuity due) and grow at
//! a monthly compounded rate of `annual_rate / 100 / 12`. Every yearly snapshot
//! is the closed-form value at that truncated horizon, not a running total, so
//! no snapshot depends on the rounding of the one before it.

use log::{debug, warn};

use super::input::{InvalidInput, ProjectionInput};
use super::series::{ProjectionResult, YearlySnapshot};

/// Contributions per projection year
pub const MONTHS_PER_YEAR: u32 = 12;

/// Project a SIP from raw inputs
///
/// Fails with [`InvalidInput`] when contribution <= 0, rate < 0, horizon == 0
/// or a value is not finite. There is no other failure mode.
pub fn project(
    monthly_contribution: f64,
    annual_return_rate_percent: f64,
    horizon_years: u32,
) -> Result<ProjectionResult, InvalidInput> {
    let input = ProjectionInput::new(monthly_contribution, annual_return_rate_percent, horizon_years)?;
    Ok(ProjectionEngine::new(&input).project())
}

/// Projection engine for a single validated input
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    /// Amount contributed at the start of each month
    contribution: f64,

    /// Monthly periodic rate as a decimal
    monthly_rate: f64,

    /// ln(1 + monthly_rate), cached for the per-year powers
    log_growth: f64,

    horizon_years: u32,
}

impl ProjectionEngine {
    pub fn new(input: &ProjectionInput) -> Self {
        let monthly_rate = input.monthly_rate();
        Self {
            contribution: input.monthly_contribution(),
            monthly_rate,
            log_growth: monthly_rate.ln_1p(),
            horizon_years: input.horizon_years(),
        }
    }

    /// Run the projection over the full horizon
    pub fn project(&self) -> ProjectionResult {
        let series: Vec<YearlySnapshot> = (1..=self.horizon_years)
            .map(|year| self.year_end(year))
            .collect();

        let result = ProjectionResult::from_series(series);
        debug!(
            "Projected {} years at {:.6} monthly: invested={} returns={} total={}",
            self.horizon_years,
            self.monthly_rate,
            result.total_invested,
            result.total_returns,
            result.total_value,
        );
        result
    }

    /// Rounded position at the end of `year`, or `None` outside `1..=horizon`
    pub fn snapshot(&self, year: u32) -> Option<YearlySnapshot> {
        (1..=self.horizon_years)
            .contains(&year)
            .then(|| self.year_end(year))
    }

    fn year_end(&self, year: u32) -> YearlySnapshot {
        let months = u64::from(year) * u64::from(MONTHS_PER_YEAR);
        let invested = whole_units(self.invested_after(months));
        let total = whole_units(self.value_after(months));
        YearlySnapshot::new(year, invested, total)
    }

    /// Principal contributed after `months` contributions
    pub fn invested_after(&self, months: u64) -> f64 {
        self.contribution * months as f64
    }

    /// Unrounded maturity value after `months` contributions
    ///
    /// FV = P * ((1 + i)^n - 1) / i * (1 + i), with `(1 + i)^n - 1` taken as
    /// `expm1(n * ln(1 + i))` so very small rates do not cancel to zero.
    /// A zero rate has no growth term and reduces to P * n.
    pub fn value_after(&self, months: u64) -> f64 {
        if self.monthly_rate == 0.0 {
            return self.invested_after(months);
        }

        let growth = (months as f64 * self.log_growth).exp_m1();
        self.contribution * (growth / self.monthly_rate) * (1.0 + self.monthly_rate)
    }
}

/// Round to the nearest whole currency unit, half away from zero
///
/// Values beyond the `i64` range saturate.
fn whole_units(value: f64) -> i64 {
    let rounded = value.round();
    if !rounded.is_finite() || rounded >= i64::MAX as f64 || rounded <= i64::MIN as f64 {
        warn!("Projected amount {} exceeds the representable range; saturating", value);
    }
    rounded as i64
}
