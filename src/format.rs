//! Currency and chart label formatting
//!
//! Amounts are shown with a fixed `Rs` marker, no fractional digits, and Indian
//! digit grouping: the last three digits, then groups of two
//! (`Rs 11,61,695` rather than `Rs 1,161,695`).

use crate::projection::ProjectionResult;

/// Currency marker prefixed to every amount
pub const CURRENCY_MARKER: &str = "Rs";

const ONE_LAKH: f64 = 100_000.0;

/// Format an amount, rounding to the nearest whole unit
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return format!("{} {}", CURRENCY_MARKER, value);
    }
    format_amount(value.round() as i64)
}

/// Format an amount already in whole units
pub fn format_amount(value: i64) -> String {
    let grouped = group_indian(&value.unsigned_abs().to_string());
    if value < 0 {
        format!("{} -{}", CURRENCY_MARKER, grouped)
    } else {
        format!("{} {}", CURRENCY_MARKER, grouped)
    }
}

/// Y-axis label in lakhs, e.g. `Rs 6L`
pub fn format_lakhs_axis(value: f64) -> String {
    format!("{} {}L", CURRENCY_MARKER, value / ONE_LAKH)
}

/// X-axis label for a projection year
pub fn format_year_axis(year: u32) -> String {
    format!("Yr {}", year)
}

/// One-line summary shown above a projection
pub fn projection_headline(result: &ProjectionResult) -> String {
    format!(
        "After {} years, your investment could be worth {}.",
        result.horizon_years(),
        format_amount(result.total_value)
    )
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (front, pair) = rest.split_at(rest.len() - 2);
        groups.push(pair);
        rest = front;
    }
    groups.push(rest);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}
