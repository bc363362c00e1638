//! Projection output structures

use serde::{Deserialize, Serialize};

/// Position of the projection at the end of one year
///
/// All amounts are whole currency units. `returns_to_date` is derived from the
/// two rounded figures, so `invested_to_date + returns_to_date == total_to_date`
/// holds exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearlySnapshot {
    /// Year of the projection (1-indexed)
    pub year: u32,

    /// Principal contributed through this year
    pub invested_to_date: i64,

    /// Growth earned through this year
    pub returns_to_date: i64,

    /// Maturity value at this year boundary
    pub total_to_date: i64,
}

impl YearlySnapshot {
    /// Build a snapshot from rounded invested and total figures
    pub fn new(year: u32, invested_to_date: i64, total_to_date: i64) -> Self {
        Self {
            year,
            invested_to_date,
            returns_to_date: total_to_date - invested_to_date,
            total_to_date,
        }
    }
}

/// One bar of a stacked invested/returns chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub year: u32,
    pub invested: i64,
    pub returns: i64,
    pub total: i64,
}

impl From<&YearlySnapshot> for ChartPoint {
    fn from(snapshot: &YearlySnapshot) -> Self {
        Self {
            year: snapshot.year,
            invested: snapshot.invested_to_date,
            returns: snapshot.returns_to_date,
            total: snapshot.total_to_date,
        }
    }
}

/// Complete projection result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Principal contributed over the full horizon
    pub total_invested: i64,

    /// Growth over the full horizon
    pub total_returns: i64,

    /// Maturity value at the end of the horizon
    pub total_value: i64,

    /// One snapshot per year, year-ascending
    pub yearly_series: Vec<YearlySnapshot>,
}

impl ProjectionResult {
    /// Assemble a result whose totals come from the final-year snapshot
    pub(crate) fn from_series(yearly_series: Vec<YearlySnapshot>) -> Self {
        let (total_invested, total_returns, total_value) = yearly_series
            .last()
            .map(|s| (s.invested_to_date, s.returns_to_date, s.total_to_date))
            .unwrap_or((0, 0, 0));

        Self {
            total_invested,
            total_returns,
            total_value,
            yearly_series,
        }
    }

    /// Number of years covered
    pub fn horizon_years(&self) -> u32 {
        self.yearly_series.len() as u32
    }

    /// Snapshot for a given 1-indexed year
    pub fn snapshot(&self, year: u32) -> Option<&YearlySnapshot> {
        if year == 0 {
            return None;
        }
        self.yearly_series.get(year as usize - 1)
    }

    /// Series in the shape a stacked bar chart consumes
    pub fn chart_points(&self) -> Vec<ChartPoint> {
        self.yearly_series.iter().map(ChartPoint::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_derives_returns() {
        let s = YearlySnapshot::new(3, 180_000, 216_431);
        assert_eq!(s.returns_to_date, 36_431);
        assert_eq!(s.invested_to_date + s.returns_to_date, s.total_to_date);
    }

    #[test]
    fn test_result_totals_follow_last_year() {
        let series = vec![
            YearlySnapshot::new(1, 60_000, 64_047),
            YearlySnapshot::new(2, 120_000, 136_216),
        ];
        let result = ProjectionResult::from_series(series);

        assert_eq!(result.total_invested, 120_000);
        assert_eq!(result.total_returns, 16_216);
        assert_eq!(result.total_value, 136_216);
        assert_eq!(result.horizon_years(), 2);
        assert_eq!(result.snapshot(1).map(|s| s.total_to_date), Some(64_047));
        assert!(result.snapshot(0).is_none());
        assert!(result.snapshot(3).is_none());
    }

    #[test]
    fn test_chart_points_mirror_series() {
        let result = ProjectionResult::from_series(vec![YearlySnapshot::new(1, 12_000, 12_809)]);
        let points = result.chart_points();

        assert_eq!(
            points,
            vec![ChartPoint { year: 1, invested: 12_000, returns: 809, total: 12_809 }]
        );
    }
}
