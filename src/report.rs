//! Plain-text rendering for the command line

use std::fmt::Write;

use crate::calculator::{DividendQuote, GoalPlan};
use crate::etf::EtfCatalog;
use crate::goals::LifeGoal;
use crate::projection::ProjectionResult;

/// Round to whole KRW and group thousands: 1234567.8 -> "1,234,568"
pub fn format_krw(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0.0 {
        grouped.push('-');
    }
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

pub fn etf_table(catalog: &EtfCatalog) -> String {
    let mut out = String::new();
    if let Some(date) = catalog.updated_at() {
        let _ = writeln!(out, "Updated: {}", date);
    }
    let _ = writeln!(
        out,
        "{:<6} {:<32} {:>12} {:>7} {:<10} {}",
        "Ticker", "Name", "Price", "Yield", "Risk", "Sector"
    );
    let _ = writeln!(out, "{}", "-".repeat(90));
    for etf in catalog.records() {
        let _ = writeln!(
            out,
            "{:<6} {:<32} {:>12} {:>6.2}% {:<10} {}",
            etf.ticker,
            etf.name,
            format_krw(etf.price),
            etf.yield_pct,
            etf.risk,
            etf.sector
        );
    }
    out
}

pub fn goals_table(goals: &[LifeGoal]) -> String {
    let mut out = String::new();
    for goal in goals {
        let _ = writeln!(
            out,
            "{:>2}. {:<26} {:>10} KRW/month  ({})",
            goal.id,
            goal.title,
            format_krw(goal.monthly_cost),
            goal.description
        );
    }
    out
}

pub fn goal_plan_text(plan: &GoalPlan) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Goal:             {}", plan.goal.title);
    let _ = writeln!(out, "Monthly cost:     {} KRW", format_krw(plan.goal.monthly_cost));
    let _ = writeln!(out, "ETF:              {} ({}% a year)", plan.ticker, plan.yield_pct);
    let _ = writeln!(out, "Required capital: {} KRW", format_krw(plan.required_capital));
    let _ = writeln!(
        out,
        "Required units:   {} at {} KRW",
        plan.required_shares,
        format_krw(plan.unit_price)
    );
    let _ = writeln!(out, "Annual dividend:  {} KRW", format_krw(plan.annual_dividend));
    out
}

pub fn dividend_quote_text(quote: &DividendQuote) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Investment:       {} KRW in {} ({})", format_krw(quote.amount), quote.ticker, quote.name);
    let _ = writeln!(out, "Monthly dividend: {} KRW (pre-tax)", format_krw(quote.monthly_dividend));
    let _ = writeln!(out, "Annual dividend:  {} KRW", format_krw(quote.annual_dividend));
    let _ = writeln!(out, "Unit price:       {} KRW", format_krw(quote.unit_price));
    let _ = writeln!(out, "Units affordable: {}", quote.purchasable_shares);
    let _ = writeln!(out, "Risk / sector:    {} / {}", quote.risk, quote.sector);
    out
}

pub fn projection_table(result: &ProjectionResult) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} yield {:.2}%, price growth {:.2}%, {} KRW/month",
        result.ticker.as_deref().unwrap_or("Custom"),
        result.annual_yield_pct,
        result.price_growth_rate * 100.0,
        format_krw(result.monthly_contribution)
    );
    let _ = writeln!(out, "{:>4} {:>18} {:>18} {:>14}", "Year", "Asset", "Invested", "Monthly div");
    let _ = writeln!(out, "{}", "-".repeat(57));
    for point in &result.points {
        let _ = writeln!(
            out,
            "{:>4} {:>18} {:>18} {:>14}",
            point.year,
            format_krw(point.asset),
            format_krw(point.invested),
            format_krw(point.monthly_dividend)
        );
    }
    out
}

pub fn comparison_table(results: &[ProjectionResult]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<6} {:>7} {:>18} {:>18} {:>14} {:>7}",
        "Ticker", "Yield", "Final asset", "Invested", "Monthly div", "x"
    );
    let _ = writeln!(out, "{}", "-".repeat(75));
    for result in results {
        let summary = result.summary();
        let multiple = summary
            .principal_multiple
            .map(|m| format!("{:.2}", m))
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            out,
            "{:<6} {:>6.2}% {:>18} {:>18} {:>14} {:>7}",
            summary.ticker.as_deref().unwrap_or("-"),
            result.annual_yield_pct,
            format_krw(summary.final_asset),
            format_krw(summary.total_invested),
            format_krw(summary.final_monthly_dividend),
            multiple
        );
    }
    out
}
