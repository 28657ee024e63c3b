//! Running balance carried from one projection year to the next

use super::points::ProjectionPoint;

/// Portfolio state entering a projection year
#[derive(Debug, Clone)]
pub struct ProjectionState {
    /// Projection year (0-indexed)
    pub year: u32,

    /// Total asset value entering the year, unrounded
    pub asset: f64,

    /// Cumulative principal contributed so far
    pub invested: f64,
}

impl ProjectionState {
    /// Start of the projection: everything held is principal
    pub fn from_initial(initial_balance: f64) -> Self {
        Self {
            year: 0,
            asset: initial_balance,
            invested: initial_balance,
        }
    }

    /// Monthly dividend the current asset level would pay
    pub fn monthly_dividend(&self, dividend_rate: f64) -> f64 {
        (self.asset * dividend_rate) / 12.0
    }

    /// Rounded output row for the current year
    pub fn snapshot(&self, dividend_rate: f64) -> ProjectionPoint {
        ProjectionPoint {
            year: self.year,
            asset: self.asset.round(),
            invested: self.invested,
            monthly_dividend: self.monthly_dividend(dividend_rate).round(),
        }
    }

    /// Compound one year: a year of contributions, reinvested dividends and
    /// price growth, all taken on the asset entering the year
    pub fn advance_year(&mut self, monthly_contribution: f64, dividend_rate: f64, growth_rate: f64) {
        let yearly_contribution = monthly_contribution * 12.0;
        let yearly_dividend = self.asset * dividend_rate;
        let yearly_growth = self.asset * growth_rate;

        self.asset = self.asset + yearly_contribution + yearly_dividend + yearly_growth;
        self.invested += yearly_contribution;
        self.year += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_advance_uses_opening_asset() {
        let mut state = ProjectionState::from_initial(1_000_000.0);
        state.advance_year(10_000.0, 0.05, 0.03);

        // 1,000,000 + 120,000 + 50,000 + 30,000
        assert_relative_eq!(state.asset, 1_200_000.0);
        assert_relative_eq!(state.invested, 1_120_000.0);
        assert_eq!(state.year, 1);
    }

    #[test]
    fn test_snapshot_rounds_asset_and_dividend() {
        let state = ProjectionState {
            year: 3,
            asset: 1_000_000.6,
            invested: 900_000.0,
        };
        let point = state.snapshot(0.034);
        assert_eq!(point.asset, 1_000_001.0);
        assert_eq!(point.invested, 900_000.0);
        // 1,000,000.6 * 0.034 / 12 = 2833.335
        assert_eq!(point.monthly_dividend, 2_833.0);
    }
}
