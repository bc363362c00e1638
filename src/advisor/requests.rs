//! Form inputs for the advisor flows and their validation rules

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{AdvisorError, FieldIssue};
use crate::risk::RiskProfile;

/// Minimum age accepted by every advisor form
pub const MIN_AGE: u32 = 18;

/// Minimum length of a financial goals description
pub const MIN_GOALS_CHARS: usize = 10;

/// Collects field issues across one form
#[derive(Default)]
struct Issues(Vec<FieldIssue>);

impl Issues {
    fn check(&mut self, ok: bool, field: &'static str, message: &str) {
        if !ok {
            self.0.push(FieldIssue { field, message: message.to_string() });
        }
    }

    fn finish(self) -> Result<(), AdvisorError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(AdvisorError::Validation(self.0))
        }
    }
}

fn long_enough(text: &str) -> bool {
    text.chars().count() >= MIN_GOALS_CHARS
}

/// Input to the personalised plan generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    pub age: u32,
    /// Annual income in rupees
    pub annual_income: f64,
    pub risk_tolerance: RiskProfile,
    pub financial_goals: String,
}

impl PlanRequest {
    pub fn validate(&self) -> Result<(), AdvisorError> {
        let mut issues = Issues::default();
        issues.check(self.age >= MIN_AGE, "age", "Must be 18 or older.");
        issues.check(self.annual_income >= 1.0, "annualIncome", "Please enter your annual income.");
        issues.check(
            long_enough(&self.financial_goals),
            "financialGoals",
            "Please describe your financial goals in a bit more detail.",
        );
        issues.finish()
    }
}

/// How long the investor intends to stay invested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeHorizon {
    #[serde(rename = "Short-term (1-3 years)")]
    ShortTerm,
    #[serde(rename = "Medium-term (3-7 years)")]
    MediumTerm,
    #[serde(rename = "Long-term (7+ years)")]
    LongTerm,
}

impl TimeHorizon {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeHorizon::ShortTerm => "Short-term (1-3 years)",
            TimeHorizon::MediumTerm => "Medium-term (3-7 years)",
            TimeHorizon::LongTerm => "Long-term (7+ years)",
        }
    }
}

impl fmt::Display for TimeHorizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input to the product finder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    pub age: u32,
    /// Monthly income in rupees
    pub monthly_income: f64,
    pub risk_tolerance: RiskProfile,
    pub financial_goals: String,
    pub time_horizon: TimeHorizon,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub existing_investments: Option<String>,
}

impl ProductRequest {
    pub fn validate(&self) -> Result<(), AdvisorError> {
        let mut issues = Issues::default();
        issues.check(self.age >= MIN_AGE, "age", "Must be 18 or older.");
        issues.check(self.monthly_income >= 1.0, "monthlyIncome", "Please enter your monthly income.");
        issues.check(
            long_enough(&self.financial_goals),
            "financialGoals",
            "Please describe your financial goals.",
        );
        issues.finish()
    }
}

/// A free-form question for the concept explainer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplainRequest {
    pub question: String,
    /// Indian language for the answer, e.g. "Hindi"; English when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_language: Option<String>,
}

impl ExplainRequest {
    pub fn validate(&self) -> Result<(), AdvisorError> {
        let mut issues = Issues::default();
        issues.check(!self.question.trim().is_empty(), "question", "Please enter a question.");
        issues.finish()
    }

    /// Requested language, falling back to English
    pub fn language(&self) -> &str {
        self.preferred_language
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .unwrap_or("English")
    }
}
