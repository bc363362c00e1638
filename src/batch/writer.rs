//! Write batch outcomes as CSV

use csv::Writer;
use serde::Serialize;
use std::io::Write;

use super::{BatchError, BatchOutcome};

#[derive(Serialize)]
struct SummaryRow<'a> {
    #[serde(rename = "CaseId")]
    case_id: &'a str,
    #[serde(rename = "TotalInvested")]
    total_invested: Option<i64>,
    #[serde(rename = "TotalReturns")]
    total_returns: Option<i64>,
    #[serde(rename = "TotalValue")]
    total_value: Option<i64>,
    #[serde(rename = "Error")]
    error: Option<String>,
}

#[derive(Serialize)]
struct SeriesRow<'a> {
    #[serde(rename = "CaseId")]
    case_id: &'a str,
    #[serde(rename = "Year")]
    year: u32,
    #[serde(rename = "Invested")]
    invested: i64,
    #[serde(rename = "Returns")]
    returns: i64,
    #[serde(rename = "Total")]
    total: i64,
}

/// One row per case; invalid cases carry the error and no totals
pub fn write_summary<W: Write>(writer: W, outcomes: &[BatchOutcome]) -> Result<(), BatchError> {
    let mut csv = Writer::from_writer(writer);
    for outcome in outcomes {
        let row = match &outcome.result {
            Ok(result) => SummaryRow {
                case_id: &outcome.case_id,
                total_invested: Some(result.total_invested),
                total_returns: Some(result.total_returns),
                total_value: Some(result.total_value),
                error: None,
            },
            Err(e) => SummaryRow {
                case_id: &outcome.case_id,
                total_invested: None,
                total_returns: None,
                total_value: None,
                error: Some(e.to_string()),
            },
        };
        csv.serialize(row)?;
    }
    csv.flush()?;
    Ok(())
}

/// One row per case and year, successful cases only
pub fn write_series<W: Write>(writer: W, outcomes: &[BatchOutcome]) -> Result<(), BatchError> {
    let mut csv = Writer::from_writer(writer);
    for outcome in outcomes {
        let Ok(result) = &outcome.result else {
            continue;
        };
        for snapshot in &result.yearly_series {
            csv.serialize(SeriesRow {
                case_id: &outcome.case_id,
                year: snapshot.year,
                invested: snapshot.invested_to_date,
                returns: snapshot.returns_to_date,
                total: snapshot.total_to_date,
            })?;
        }
    }
    csv.flush()?;
    Ok(())
}
