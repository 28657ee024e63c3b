//! Goal plans and dividend quotes resolved against the ETF catalog

use serde::Serialize;

use super::formulas::{
    annual_dividend, monthly_dividend, purchasable_shares, required_capital, required_shares,
};
use crate::error::CalcError;
use crate::etf::EtfCatalog;
use crate::goals::LifeGoal;

/// How much of one ETF covers a life goal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalPlan {
    pub goal: LifeGoal,
    pub ticker: String,
    pub yield_pct: f64,
    pub unit_price: f64,
    pub required_capital: f64,
    pub required_shares: u64,
    /// Dividend the required capital earns at the ETF's actual yield, rounded
    /// to whole KRW; falls short of the goal when the yield floor applied
    pub annual_dividend: f64,
}

/// Income from investing a fixed amount in one ETF
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DividendQuote {
    pub ticker: String,
    pub name: String,
    pub amount: f64,
    pub unit_price: f64,
    pub yield_pct: f64,
    pub risk: String,
    pub sector: String,
    /// Pre-tax monthly dividend, floored to whole KRW
    pub monthly_dividend: f64,
    /// Unrounded monthly figure times twelve, floored to whole KRW
    pub annual_dividend: f64,
    pub purchasable_shares: u64,
}

/// Size a holding in the selected ETF so its dividends pay for `goal`
pub fn plan_for_goal(
    goal: &LifeGoal,
    catalog: &EtfCatalog,
    ticker: Option<&str>,
) -> Result<GoalPlan, CalcError> {
    let etf = catalog.select(ticker)?;
    let capital = required_capital(goal.monthly_cost, etf.yield_pct)?;
    let shares = required_shares(capital, etf.price)?;

    Ok(GoalPlan {
        goal: *goal,
        ticker: etf.ticker.clone(),
        yield_pct: etf.yield_pct,
        unit_price: etf.price,
        required_capital: capital,
        required_shares: shares,
        annual_dividend: annual_dividend(capital, etf.yield_pct)?.round(),
    })
}

/// Quote the dividend income of `amount` in the selected ETF
pub fn quote_for_amount(
    amount: f64,
    catalog: &EtfCatalog,
    ticker: Option<&str>,
) -> Result<DividendQuote, CalcError> {
    let etf = catalog.select(ticker)?;
    let monthly = monthly_dividend(amount, etf.yield_pct)?;

    Ok(DividendQuote {
        ticker: etf.ticker.clone(),
        name: etf.name.clone(),
        amount,
        unit_price: etf.price,
        yield_pct: etf.yield_pct,
        risk: etf.risk.clone(),
        sector: etf.sector.clone(),
        monthly_dividend: monthly.floor(),
        annual_dividend: (monthly * 12.0).floor(),
        purchasable_shares: purchasable_shares(amount, etf.price)?,
    })
}
