//! SIP projection engine and its result types

mod input;
mod engine;
mod series;

pub use input::{InputField, InvalidInput, ProjectionInput};
pub use engine::{project, ProjectionEngine, MONTHS_PER_YEAR};
pub use series::{ChartPoint, ProjectionResult, YearlySnapshot};
