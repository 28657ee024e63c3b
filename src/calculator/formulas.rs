//! Closed-form dividend formulas
//!
//! Amounts are KRW, yields are percentages (3.4 means 3.4% a year).

use crate::error::{non_negative, CalcError};

/// Yield substituted when a zero yield would make required capital infinite
pub const YIELD_FLOOR_PCT: f64 = 0.01;

/// Principal whose annual dividend covers `monthly_cost_target` every month
///
/// The yield is floored at [`YIELD_FLOOR_PCT`], so a zero-yield ETF gives a
/// large finite answer instead of infinity.
pub fn required_capital(monthly_cost_target: f64, annual_yield_pct: f64) -> Result<f64, CalcError> {
    let target = non_negative("monthly_cost_target", monthly_cost_target)?;
    let yield_pct = non_negative("annual_yield_pct", annual_yield_pct)?.max(YIELD_FLOOR_PCT);

    let annual_target = target * 12.0;
    Ok(annual_target / (yield_pct / 100.0))
}

/// Whole units needed to hold `capital`, rounded up; 0 when the price is unknown
pub fn required_shares(capital: f64, unit_price: f64) -> Result<u64, CalcError> {
    let capital = non_negative("capital", capital)?;
    if unit_price > 0.0 && unit_price.is_finite() {
        Ok((capital / unit_price).ceil() as u64)
    } else {
        Ok(0)
    }
}

/// Pre-tax monthly dividend on `invested_amount`
pub fn monthly_dividend(invested_amount: f64, annual_yield_pct: f64) -> Result<f64, CalcError> {
    let amount = non_negative("invested_amount", invested_amount)?;
    let yield_pct = non_negative("annual_yield_pct", annual_yield_pct)?;
    Ok((amount * (yield_pct / 100.0)) / 12.0)
}

pub fn annual_dividend(invested_amount: f64, annual_yield_pct: f64) -> Result<f64, CalcError> {
    Ok(monthly_dividend(invested_amount, annual_yield_pct)? * 12.0)
}

/// Whole units `amount` can buy, rounded down; 0 when the price is unknown
pub fn purchasable_shares(amount: f64, unit_price: f64) -> Result<u64, CalcError> {
    let amount = non_negative("amount", amount)?;
    if unit_price > 0.0 && unit_price.is_finite() {
        Ok((amount / unit_price).floor() as u64)
    } else {
        Ok(0)
    }
}

/// Rule of 72: approximate years for money to double at `annual_rate_pct`
pub fn years_to_double(annual_rate_pct: f64) -> Result<f64, CalcError> {
    if annual_rate_pct.is_finite() && annual_rate_pct > 0.0 {
        Ok(72.0 / annual_rate_pct)
    } else {
        Err(CalcError::invalid("annual_rate_pct", annual_rate_pct))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_required_capital_basic() {
        // 150,000/month at 3.4% needs 1,800,000 / 0.034
        let capital = required_capital(150_000.0, 3.4).unwrap();
        assert_relative_eq!(capital, 52_941_176.470588, max_relative = 1e-9);
    }

    #[test]
    fn test_required_capital_zero_yield_uses_floor() {
        let capital = required_capital(150_000.0, 0.0).unwrap();
        assert!(capital.is_finite());
        // 1,800,000 a year over a 0.01% yield
        assert_relative_eq!(capital, 18_000_000_000.0, max_relative = 1e-12);
    }

    #[test]
    fn test_required_capital_monotonic() {
        let low = required_capital(17_000.0, 3.4).unwrap();
        let high = required_capital(80_000.0, 3.4).unwrap();
        assert!(high > low);

        let low_yield = required_capital(80_000.0, 0.8).unwrap();
        let high_yield = required_capital(80_000.0, 7.5).unwrap();
        assert!(high_yield < low_yield);
    }

    #[test]
    fn test_required_capital_rejects_negative_inputs() {
        assert!(matches!(
            required_capital(-1.0, 3.4),
            Err(CalcError::InvalidArgument { name: "monthly_cost_target", .. })
        ));
        assert!(matches!(
            required_capital(1.0, -3.4),
            Err(CalcError::InvalidArgument { name: "annual_yield_pct", .. })
        ));
        assert!(required_capital(1.0, f64::NAN).is_err());
    }

    #[test]
    fn test_required_shares_rounds_up() {
        assert_eq!(required_shares(210_001.0, 105_000.0).unwrap(), 3);
        assert_eq!(required_shares(210_000.0, 105_000.0).unwrap(), 2);
        assert_eq!(required_shares(210_000.0, 0.0).unwrap(), 0);
    }

    #[test]
    fn test_monthly_dividend() {
        // 10,000,000 at 7.5% -> 750,000 a year -> 62,500 a month
        assert_relative_eq!(monthly_dividend(10_000_000.0, 7.5).unwrap(), 62_500.0);
        assert_eq!(monthly_dividend(10_000_000.0, 0.0).unwrap(), 0.0);
        assert!(monthly_dividend(-5.0, 3.4).is_err());
    }

    #[test]
    fn test_dividend_identity() {
        for &(amount, y) in &[(0.0, 3.4), (1_000_000.0, 0.8), (12_345_678.0, 3.68), (5e9, 9.64)] {
            let annual = annual_dividend(amount, y).unwrap();
            assert_relative_eq!(annual, amount * y / 100.0, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_purchasable_shares_rounds_down() {
        assert_eq!(purchasable_shares(10_000_000.0, 105_000.0).unwrap(), 95);
        assert_eq!(purchasable_shares(10_000_000.0, 0.0).unwrap(), 0);
    }

    #[test]
    fn test_years_to_double() {
        assert_relative_eq!(years_to_double(4.0).unwrap(), 18.0);
        assert_relative_eq!(years_to_double(8.0).unwrap(), 9.0);
        assert_relative_eq!(years_to_double(12.0).unwrap(), 6.0);
        assert!(years_to_double(0.0).is_err());
    }

    #[test]
    fn test_formulas_are_deterministic() {
        let a = required_capital(300_000.0, 5.98).unwrap();
        let b = required_capital(300_000.0, 5.98).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());

        let a = monthly_dividend(12_345_678.0, 3.68).unwrap();
        let b = monthly_dividend(12_345_678.0, 3.68).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
    }
}
