//! SIP Planner - projection engine and planning toolkit for Indian retail investors
//!
//! This library provides:
//! - SIP return projections with a year-by-year breakdown for charting
//! - Rupee formatting with Indian digit grouping
//! - A point-scored risk-tolerance quiz
//! - Validation, prompts and response parsing for language-model advisor flows
//! - Parallel batch projections over CSV inputs
//! - Beginner learning-hub content

pub mod projection;
pub mod format;
pub mod risk;
pub mod advisor;
pub mod batch;
pub mod settings;
pub mod learn;

// Re-export commonly used types
pub use projection::{project, InvalidInput, ProjectionEngine, ProjectionInput, ProjectionResult, YearlySnapshot};
pub use format::{format_amount, format_currency};
pub use risk::{RiskProfile, RiskQuiz};
pub use batch::BatchRunner;
pub use settings::CalculatorSettings;
