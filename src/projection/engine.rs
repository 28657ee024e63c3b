//! Dividend snowball projection engine
//!
//! Year-by-year simulation where dividends and assumed price growth are
//! reinvested alongside new monthly contributions. Each point is emitted
//! before the year is compounded, so year `k` shows the asset after `k`
//! annual steps. Contributions and the displayed dividend are monthly, but
//! dividends and growth compound annually.

use serde::{Deserialize, Serialize};

use super::growth::PriceGrowth;
use super::points::{ProjectionPoint, ProjectionResult};
use super::state::ProjectionState;
use crate::error::{non_negative, CalcError};
use crate::etf::EtfRecord;

/// Longest horizon a projection accepts
pub const MAX_HORIZON_YEARS: u32 = 100;

/// Lowest annual price growth rate; below -100% the asset would turn negative
pub const MIN_GROWTH_RATE: f64 = -1.0;

/// Configuration for a projection run
#[derive(Debug, Clone, Copy)]
pub struct ProjectionConfig {
    /// Number of years to project; the result has one more point than this
    pub horizon_years: u32,

    /// Price appreciation assumption
    pub growth: PriceGrowth,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            horizon_years: 10,
            growth: PriceGrowth::default(),
        }
    }
}

/// Money going into a projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionInput {
    /// Starting balance in KRW
    pub initial_balance: f64,

    /// Amount added every month in KRW
    pub monthly_contribution: f64,

    /// Annual dividend yield in percent
    pub annual_yield_pct: f64,
}

impl ProjectionInput {
    pub fn new(initial_balance: f64, monthly_contribution: f64, annual_yield_pct: f64) -> Self {
        Self {
            initial_balance,
            monthly_contribution,
            annual_yield_pct,
        }
    }

    /// Reject negative or non-finite amounts and yields
    pub fn validate(&self) -> Result<(), CalcError> {
        non_negative("initial_balance", self.initial_balance)?;
        non_negative("monthly_contribution", self.monthly_contribution)?;
        non_negative("annual_yield_pct", self.annual_yield_pct)?;
        Ok(())
    }
}

/// Main projection engine
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Run the projection; fails before producing any point on bad input
    pub fn project(&self, input: &ProjectionInput) -> Result<ProjectionResult, CalcError> {
        input.validate()?;
        if self.config.horizon_years > MAX_HORIZON_YEARS {
            return Err(CalcError::invalid("horizon_years", self.config.horizon_years as f64));
        }

        let dividend_rate = input.annual_yield_pct / 100.0;
        let growth_rate = self.config.growth.annual_rate(input.annual_yield_pct);
        if !growth_rate.is_finite() || growth_rate < MIN_GROWTH_RATE {
            return Err(CalcError::invalid("price_growth_rate", growth_rate));
        }

        log::debug!(
            "Projecting {} years: initial={} monthly={} yield={}% growth={:.4}",
            self.config.horizon_years,
            input.initial_balance,
            input.monthly_contribution,
            input.annual_yield_pct,
            growth_rate
        );

        let mut result =
            ProjectionResult::new(input.annual_yield_pct, growth_rate, input.monthly_contribution);
        result.points.reserve(self.config.horizon_years as usize + 1);

        let mut state = ProjectionState::from_initial(input.initial_balance);
        loop {
            result.add_point(state.snapshot(dividend_rate));

            if state.year == self.config.horizon_years {
                break;
            }
            state.advance_year(input.monthly_contribution, dividend_rate, growth_rate);
        }

        Ok(result)
    }

    /// Project a holding in one ETF, using its yield
    pub fn project_etf(
        &self,
        etf: &EtfRecord,
        initial_balance: f64,
        monthly_contribution: f64,
    ) -> Result<ProjectionResult, CalcError> {
        let input = ProjectionInput::new(initial_balance, monthly_contribution, etf.yield_pct);
        let mut result = self.project(&input)?;
        result.ticker = Some(etf.ticker.clone());
        Ok(result)
    }
}

/// Project with the default growth assumption
pub fn project(
    initial_balance: f64,
    monthly_contribution: f64,
    horizon_years: u32,
    annual_yield_pct: f64,
) -> Result<Vec<ProjectionPoint>, CalcError> {
    let engine = ProjectionEngine::new(ProjectionConfig {
        horizon_years,
        ..Default::default()
    });
    let input = ProjectionInput::new(initial_balance, monthly_contribution, annual_yield_pct);
    Ok(engine.project(&input)?.points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_horizon_single_point() {
        let points = project(10_000_000.0, 500_000.0, 0, 3.4).unwrap();
        assert_eq!(
            points,
            vec![ProjectionPoint {
                year: 0,
                asset: 10_000_000.0,
                invested: 10_000_000.0,
                monthly_dividend: 28_333.0,
            }]
        );
    }

    #[test]
    fn test_contributions_only_with_zero_yield() {
        let points = project(0.0, 1_000_000.0, 2, 0.0).unwrap();
        let assets: Vec<f64> = points.iter().map(|p| p.asset).collect();
        let invested: Vec<f64> = points.iter().map(|p| p.invested).collect();

        // Year 2 includes 8% growth on the 12,000,000 held during year 1
        assert_eq!(assets, vec![0.0, 12_000_000.0, 24_960_000.0]);
        assert_eq!(invested, vec![0.0, 12_000_000.0, 24_000_000.0]);
        assert!(points.iter().all(|p| p.monthly_dividend == 0.0));
    }

    #[test]
    fn test_length_is_horizon_plus_one() {
        for horizon in [0u32, 1, 5, 10, 30] {
            let points = project(1_000_000.0, 100_000.0, horizon, 3.4).unwrap();
            assert_eq!(points.len(), horizon as usize + 1);
            for (idx, point) in points.iter().enumerate() {
                assert_eq!(point.year as usize, idx);
            }
        }
    }

    #[test]
    fn test_principal_grows_by_yearly_contribution() {
        let points = project(10_000_000.0, 500_000.0, 10, 7.5).unwrap();
        for pair in points.windows(2) {
            assert_relative_eq!(pair[1].invested - pair[0].invested, 6_000_000.0);
        }
        assert_eq!(points[10].invested, 70_000_000.0);
    }

    #[test]
    fn test_no_contribution_keeps_principal_flat() {
        let points = project(10_000_000.0, 0.0, 5, 3.4).unwrap();
        assert!(points.iter().all(|p| p.invested == 10_000_000.0));
        assert!(points.windows(2).all(|w| w[1].asset > w[0].asset));
    }

    #[test]
    fn test_first_step_compounds_dividend_and_growth() {
        // yield 3.4% -> growth 4.6%; one year on 10,000,000 adds 6,000,000 + 340,000 + 460,000
        let points = project(10_000_000.0, 500_000.0, 1, 3.4).unwrap();
        assert_eq!(points[1].asset, 16_800_000.0);
        // 16,800,000 * 0.034 / 12 = 47,600
        assert_eq!(points[1].monthly_dividend, 47_600.0);
    }

    #[test]
    fn test_zero_growth_policy() {
        let engine = ProjectionEngine::new(ProjectionConfig {
            horizon_years: 1,
            growth: PriceGrowth::None,
        });
        let result = engine.project(&ProjectionInput::new(10_000_000.0, 0.0, 5.0)).unwrap();
        assert_eq!(result.price_growth_rate, 0.0);
        assert_eq!(result.points[1].asset, 10_500_000.0);
    }

    #[test]
    fn test_rejects_invalid_input() {
        assert!(matches!(
            project(-1.0, 0.0, 1, 3.4),
            Err(CalcError::InvalidArgument { name: "initial_balance", .. })
        ));
        assert!(matches!(
            project(0.0, -1.0, 1, 3.4),
            Err(CalcError::InvalidArgument { name: "monthly_contribution", .. })
        ));
        assert!(matches!(
            project(0.0, 0.0, 1, f64::INFINITY),
            Err(CalcError::InvalidArgument { name: "annual_yield_pct", .. })
        ));
        assert!(project(0.0, 0.0, 1, -0.5).is_err());
    }

    #[test]
    fn test_rejects_non_finite_growth() {
        fn broken(_: f64) -> f64 {
            f64::NAN
        }
        let engine = ProjectionEngine::new(ProjectionConfig {
            horizon_years: 3,
            growth: PriceGrowth::Custom(broken),
        });
        let result = engine.project(&ProjectionInput::new(1.0, 1.0, 1.0));
        assert!(matches!(
            result,
            Err(CalcError::InvalidArgument { name: "price_growth_rate", .. })
        ));
    }

    #[test]
    fn test_rejects_growth_below_total_loss() {
        let engine = ProjectionEngine::new(ProjectionConfig {
            horizon_years: 2,
            growth: PriceGrowth::Fixed(-250.0),
        });
        let result = engine.project(&ProjectionInput::new(10_000_000.0, 0.0, 0.0));
        assert!(matches!(
            result,
            Err(CalcError::InvalidArgument { name: "price_growth_rate", .. })
        ));

        // -100% wipes the holding but stays non-negative
        let engine = ProjectionEngine::new(ProjectionConfig {
            horizon_years: 1,
            growth: PriceGrowth::Fixed(-100.0),
        });
        let result = engine.project(&ProjectionInput::new(10_000_000.0, 0.0, 0.0)).unwrap();
        assert_eq!(result.points[1].asset, 0.0);
    }

    #[test]
    fn test_horizon_limit() {
        assert_eq!(project(0.0, 1.0, MAX_HORIZON_YEARS, 3.4).unwrap().len(), 101);
        assert!(matches!(
            project(0.0, 1.0, MAX_HORIZON_YEARS + 1, 3.4),
            Err(CalcError::InvalidArgument { name: "horizon_years", .. })
        ));
        assert!(matches!(
            project(0.0, 1.0, 3_000_000_000, 3.4),
            Err(CalcError::InvalidArgument { name: "horizon_years", .. })
        ));
    }

    #[test]
    fn test_project_etf_tags_ticker() {
        let etf = EtfRecord::new("JEPI", "JPMorgan Equity Premium", 75000.0, 7.5, "Medium", "Covered call");
        let result = ProjectionEngine::default().project_etf(&etf, 1_000_000.0, 0.0).unwrap();
        assert_eq!(result.ticker.as_deref(), Some("JEPI"));
        assert_relative_eq!(result.price_growth_rate, 0.01);
        assert_eq!(result.points.len(), 11);
    }

    #[test]
    fn test_deterministic() {
        let a = project(3_000_000.0, 250_000.0, 20, 5.98).unwrap();
        let b = project(3_000_000.0, 250_000.0, 20, 5.98).unwrap();
        assert_eq!(a, b);
    }
}
