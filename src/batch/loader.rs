//! Load projection cases from CSV

use csv::Reader;
use std::path::Path;

use super::{BatchCase, BatchError};

/// Raw CSV row
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "CaseId")]
    case_id: String,
    #[serde(rename = "MonthlyContribution")]
    monthly_contribution: f64,
    #[serde(rename = "AnnualReturnPct")]
    annual_return_pct: f64,
    #[serde(rename = "HorizonYears")]
    horizon_years: u32,
}

impl From<CsvRow> for BatchCase {
    fn from(row: CsvRow) -> Self {
        BatchCase {
            case_id: row.case_id,
            monthly_contribution: row.monthly_contribution,
            annual_return_pct: row.annual_return_pct,
            horizon_years: row.horizon_years,
        }
    }
}

/// Load all cases from a CSV file
pub fn load_cases<P: AsRef<Path>>(path: P) -> Result<Vec<BatchCase>, BatchError> {
    let reader = Reader::from_path(path)?;
    collect_cases(reader)
}

/// Load cases from any reader (e.g., string buffer, request body)
pub fn load_cases_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<BatchCase>, BatchError> {
    collect_cases(Reader::from_reader(reader))
}

fn collect_cases<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<BatchCase>, BatchError> {
    let mut cases = Vec::new();
    for result in reader.deserialize() {
        let row: CsvRow = result?;
        cases.push(row.into());
    }
    Ok(cases)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_cases_from_reader() {
        let data = "CaseId,MonthlyContribution,AnnualReturnPct,HorizonYears\n\
                    retire,5000,12,10\n\
                    house,15000.5,8.5,7\n";
        let cases = load_cases_from_reader(data.as_bytes()).unwrap();

        assert_eq!(cases.len(), 2);
        assert_eq!(cases[0].case_id, "retire");
        assert_eq!(cases[0].horizon_years, 10);
        assert_eq!(cases[1].monthly_contribution, 15000.5);
        assert_eq!(cases[1].annual_return_pct, 8.5);
    }

    #[test]
    fn test_invalid_values_still_load() {
        // Zero contribution is a projection error, not a parse error
        let data = "CaseId,MonthlyContribution,AnnualReturnPct,HorizonYears\nbad,0,12,10\n";
        let cases = load_cases_from_reader(data.as_bytes()).unwrap();
        assert_eq!(cases[0].monthly_contribution, 0.0);
    }

    #[test]
    fn test_unparseable_row_is_an_error() {
        let data = "CaseId,MonthlyContribution,AnnualReturnPct,HorizonYears\nx,abc,12,10\n";
        assert!(matches!(load_cases_from_reader(data.as_bytes()), Err(BatchError::Csv(_))));

        let data = "CaseId,MonthlyContribution,AnnualReturnPct,HorizonYears\nx,5000,12,-3\n";
        assert!(load_cases_from_reader(data.as_bytes()).is_err());
    }

    #[test]
    fn test_missing_file() {
        assert!(load_cases("does/not/exist.csv").is_err());
    }
}
