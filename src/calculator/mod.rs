//! Dividend calculators: required capital for a goal and income for an amount

mod formulas;
mod plan;

pub use formulas::{
    annual_dividend, monthly_dividend, purchasable_shares, required_capital, required_shares,
    years_to_double, YIELD_FLOOR_PCT,
};
pub use plan::{plan_for_goal, quote_for_amount, DividendQuote, GoalPlan};
