//! Validated inputs for a SIP projection

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Which projection input a validation failure refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    MonthlyContribution,
    AnnualReturnRate,
    HorizonYears,
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InputField::MonthlyContribution => "monthly contribution",
            InputField::AnnualReturnRate => "annual return rate",
            InputField::HorizonYears => "investment horizon",
        };
        f.write_str(name)
    }
}

/// Violated projection input constraint
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InvalidInput {
    #[error("monthly contribution must be positive (got {0})")]
    NonPositiveContribution(f64),

    #[error("annual return rate must not be negative (got {0}%)")]
    NegativeReturnRate(f64),

    #[error("investment horizon must be at least one year")]
    ZeroHorizon,

    #[error("{0} must be a finite number")]
    NotFinite(InputField),
}

impl InvalidInput {
    /// The input the violated constraint applies to
    pub fn field(&self) -> InputField {
        match self {
            InvalidInput::NonPositiveContribution(_) => InputField::MonthlyContribution,
            InvalidInput::NegativeReturnRate(_) => InputField::AnnualReturnRate,
            InvalidInput::ZeroHorizon => InputField::HorizonYears,
            InvalidInput::NotFinite(field) => *field,
        }
    }
}

/// Inputs to a single SIP projection
///
/// Construction goes through [`ProjectionInput::new`], so a value of this type
/// always satisfies: contribution > 0, rate >= 0, horizon >= 1. Upper limits
/// (slider ranges and the like) are left to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawProjectionInput")]
pub struct ProjectionInput {
    /// Amount contributed at the start of every month, in whole currency units
    monthly_contribution: f64,

    /// Expected annual growth as a percentage (12.0 means 12%)
    annual_return_rate_percent: f64,

    /// Number of years the contribution continues
    horizon_years: u32,
}

impl ProjectionInput {
    pub fn new(
        monthly_contribution: f64,
        annual_return_rate_percent: f64,
        horizon_years: u32,
    ) -> Result<Self, InvalidInput> {
        if !monthly_contribution.is_finite() {
            return Err(InvalidInput::NotFinite(InputField::MonthlyContribution));
        }
        if !annual_return_rate_percent.is_finite() {
            return Err(InvalidInput::NotFinite(InputField::AnnualReturnRate));
        }
        if monthly_contribution <= 0.0 {
            return Err(InvalidInput::NonPositiveContribution(monthly_contribution));
        }
        if annual_return_rate_percent < 0.0 {
            return Err(InvalidInput::NegativeReturnRate(annual_return_rate_percent));
        }
        if horizon_years == 0 {
            return Err(InvalidInput::ZeroHorizon);
        }

        Ok(Self {
            monthly_contribution,
            annual_return_rate_percent,
            horizon_years,
        })
    }

    pub fn monthly_contribution(&self) -> f64 {
        self.monthly_contribution
    }

    pub fn annual_return_rate_percent(&self) -> f64 {
        self.annual_return_rate_percent
    }

    pub fn horizon_years(&self) -> u32 {
        self.horizon_years
    }

    /// Periodic (monthly) growth rate as a decimal
    pub fn monthly_rate(&self) -> f64 {
        self.annual_return_rate_percent / 100.0 / 12.0
    }
}

#[derive(Deserialize)]
struct RawProjectionInput {
    monthly_contribution: f64,
    annual_return_rate_percent: f64,
    horizon_years: u32,
}

impl TryFrom<RawProjectionInput> for ProjectionInput {
    type Error = InvalidInput;

    fn try_from(raw: RawProjectionInput) -> Result<Self, Self::Error> {
        ProjectionInput::new(
            raw.monthly_contribution,
            raw.annual_return_rate_percent,
            raw.horizon_years,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_valid_input() {
        let input = ProjectionInput::new(5000.0, 12.0, 10).unwrap();
        assert_eq!(input.monthly_contribution(), 5000.0);
        assert_eq!(input.horizon_years(), 10);
        assert!((input.monthly_rate() - 0.01).abs() < 1e-15);
    }

    #[test]
    fn test_zero_rate_is_allowed() {
        assert!(ProjectionInput::new(1000.0, 0.0, 1).is_ok());
    }

    #[test]
    fn test_boundary_rejection() {
        assert_eq!(
            ProjectionInput::new(0.0, 12.0, 10),
            Err(InvalidInput::NonPositiveContribution(0.0))
        );
        assert_eq!(
            ProjectionInput::new(5000.0, 12.0, 0),
            Err(InvalidInput::ZeroHorizon)
        );
        assert_eq!(
            ProjectionInput::new(5000.0, -1.0, 10),
            Err(InvalidInput::NegativeReturnRate(-1.0))
        );
        assert!(matches!(
            ProjectionInput::new(-250.0, 12.0, 10),
            Err(InvalidInput::NonPositiveContribution(_))
        ));
    }

    #[test]
    fn test_non_finite_values_rejected() {
        let err = ProjectionInput::new(f64::NAN, 12.0, 10).unwrap_err();
        assert_eq!(err.field(), InputField::MonthlyContribution);

        let err = ProjectionInput::new(5000.0, f64::INFINITY, 10).unwrap_err();
        assert_eq!(err, InvalidInput::NotFinite(InputField::AnnualReturnRate));
    }

    #[test]
    fn test_error_names_constraint() {
        let err = ProjectionInput::new(5000.0, 12.0, 0).unwrap_err();
        assert_eq!(err.field(), InputField::HorizonYears);
        assert_eq!(err.to_string(), "investment horizon must be at least one year");
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: ProjectionInput = serde_json::from_str(
            r#"{"monthly_contribution": 5000, "annual_return_rate_percent": 12, "horizon_years": 10}"#,
        )
        .unwrap();
        assert_eq!(ok.horizon_years(), 10);

        let bad = serde_json::from_str::<ProjectionInput>(
            r#"{"monthly_contribution": 0, "annual_return_rate_percent": 12, "horizon_years": 10}"#,
        );
        assert!(bad.is_err());
    }
}
