//! Risk-tolerance profiles and the scoring quiz

mod quiz;

pub use quiz::{QuizOption, QuizQuestion, RiskAssessment, RiskQuiz};

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Highest score still classed as conservative
pub const CONSERVATIVE_MAX_SCORE: u32 = 4;

/// Highest score still classed as moderate
pub const MODERATE_MAX_SCORE: u32 = 7;

/// Investor risk appetite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskProfile {
    Conservative,
    Moderate,
    Aggressive,
}

impl RiskProfile {
    /// Classify a quiz score: <= 4 conservative, <= 7 moderate, else aggressive
    pub fn from_score(score: u32) -> Self {
        if score <= CONSERVATIVE_MAX_SCORE {
            RiskProfile::Conservative
        } else if score <= MODERATE_MAX_SCORE {
            RiskProfile::Moderate
        } else {
            RiskProfile::Aggressive
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskProfile::Conservative => "Conservative",
            RiskProfile::Moderate => "Moderate",
            RiskProfile::Aggressive => "Aggressive",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            RiskProfile::Conservative => {
                "You prefer safety and capital preservation. You're comfortable with lower, but more predictable returns."
            }
            RiskProfile::Moderate => {
                "You're willing to take on some risk for better returns, but still value a balanced approach to investing."
            }
            RiskProfile::Aggressive => {
                "You are comfortable with higher risk for the potential of high returns. You understand that markets can be volatile."
            }
        }
    }
}

impl fmt::Display for RiskProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a set of quiz answers could not be scored
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("question {question_id} has not been answered")]
    Unanswered { question_id: u32 },

    #[error("{value} is not an option for question {question_id}")]
    InvalidOption { question_id: u32, value: u32 },

    #[error("question {question_id} is not part of this quiz")]
    UnknownQuestion { question_id: u32 },

    #[error("{given} answers given but the quiz has {expected} questions")]
    TooManyAnswers { given: usize, expected: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_thresholds() {
        assert_eq!(RiskProfile::from_score(3), RiskProfile::Conservative);
        assert_eq!(RiskProfile::from_score(4), RiskProfile::Conservative);
        assert_eq!(RiskProfile::from_score(5), RiskProfile::Moderate);
        assert_eq!(RiskProfile::from_score(7), RiskProfile::Moderate);
        assert_eq!(RiskProfile::from_score(8), RiskProfile::Aggressive);
        assert_eq!(RiskProfile::from_score(9), RiskProfile::Aggressive);
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&RiskProfile::Moderate).unwrap(), "\"Moderate\"");
        let parsed: RiskProfile = serde_json::from_str("\"Aggressive\"").unwrap();
        assert_eq!(parsed, RiskProfile::Aggressive);
    }
}
