//! Projection output: yearly points, the full result and its summary

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::error::DataError;

/// One year of the snowball chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    /// Year index, 0 is today
    pub year: u32,

    /// Asset value entering the year, rounded to whole KRW
    pub asset: f64,

    /// Principal contributed through this year
    pub invested: f64,

    /// Monthly dividend at this year's asset level, rounded to whole KRW
    pub monthly_dividend: f64,
}

/// Complete projection result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// ETF the projection was run for, if it came from the catalog
    pub ticker: Option<String>,

    /// Annual dividend yield used, in percent
    pub annual_yield_pct: f64,

    /// Annual price growth rate used (0.046 = 4.6%)
    pub price_growth_rate: f64,

    pub monthly_contribution: f64,

    /// Yearly points, year 0 first
    pub points: Vec<ProjectionPoint>,
}

impl ProjectionResult {
    pub fn new(annual_yield_pct: f64, price_growth_rate: f64, monthly_contribution: f64) -> Self {
        Self {
            ticker: None,
            annual_yield_pct,
            price_growth_rate,
            monthly_contribution,
            points: Vec::new(),
        }
    }

    pub fn add_point(&mut self, point: ProjectionPoint) {
        self.points.push(point);
    }

    pub fn horizon_years(&self) -> u32 {
        self.points.last().map(|p| p.year).unwrap_or(0)
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let last = self.points.last();
        let final_asset = last.map(|p| p.asset).unwrap_or(0.0);
        let total_invested = last.map(|p| p.invested).unwrap_or(0.0);

        ProjectionSummary {
            ticker: self.ticker.clone(),
            years: self.horizon_years(),
            final_asset,
            total_invested,
            total_gain: final_asset - total_invested,
            final_monthly_dividend: last.map(|p| p.monthly_dividend).unwrap_or(0.0),
            principal_multiple: if total_invested > 0.0 {
                Some(final_asset / total_invested)
            } else {
                None
            },
        }
    }

    /// Write chart-ready rows: year,asset,invested,monthly_dividend
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), DataError> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for point in &self.points {
            csv_writer.serialize(point)?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub ticker: Option<String>,
    pub years: u32,
    pub final_asset: f64,
    pub total_invested: f64,
    pub total_gain: f64,
    pub final_monthly_dividend: f64,
    /// Final asset over principal; absent when nothing was invested
    pub principal_multiple: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ProjectionResult {
        let mut result = ProjectionResult::new(0.0, 0.08, 1_000_000.0);
        result.add_point(ProjectionPoint { year: 0, asset: 0.0, invested: 0.0, monthly_dividend: 0.0 });
        result.add_point(ProjectionPoint {
            year: 1,
            asset: 12_000_000.0,
            invested: 12_000_000.0,
            monthly_dividend: 0.0,
        });
        result.add_point(ProjectionPoint {
            year: 2,
            asset: 24_960_000.0,
            invested: 24_000_000.0,
            monthly_dividend: 0.0,
        });
        result
    }

    #[test]
    fn test_summary() {
        let summary = sample().summary();
        assert_eq!(summary.years, 2);
        assert_eq!(summary.final_asset, 24_960_000.0);
        assert_eq!(summary.total_gain, 960_000.0);
        assert_eq!(summary.principal_multiple, Some(1.04));
    }

    #[test]
    fn test_summary_without_principal() {
        let mut result = ProjectionResult::new(3.4, 0.046, 0.0);
        result.add_point(ProjectionPoint { year: 0, asset: 0.0, invested: 0.0, monthly_dividend: 0.0 });
        assert_eq!(result.summary().principal_multiple, None);
    }

    #[test]
    fn test_write_csv() {
        let mut buf = Vec::new();
        sample().write_csv(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "year,asset,invested,monthly_dividend");
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[3], "2,24960000.0,24000000.0,0.0");
    }
}
