//! JSON request/response boundary for serverless deployment
//!
//! Every request is independent: it reads the shared catalog and computes
//! from scratch.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculator::{plan_for_goal, quote_for_amount, DividendQuote, GoalPlan};
use crate::error::{horizon_years, non_negative, CalcError};
use crate::etf::{EtfCatalog, EtfRecord};
use crate::goals::{default_goal, find_goal, LifeGoal, LIFE_GOALS};
use crate::projection::{
    PriceGrowth, ProjectionConfig, ProjectionEngine, ProjectionInput, ProjectionResult,
    ProjectionSummary,
};
use crate::scenario::ScenarioRunner;

fn default_amount() -> f64 { 10_000_000.0 }
fn default_initial_balance() -> f64 { 10_000_000.0 }
fn default_monthly_contribution() -> f64 { 500_000.0 }
fn default_years() -> i64 { 10 }

/// Incoming request, tagged by `operation`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum Request {
    /// Capital needed for a goal; `monthly_cost` overrides the goal's cost
    RequiredCapital {
        #[serde(default)]
        goal_id: Option<u32>,
        #[serde(default)]
        monthly_cost: Option<f64>,
        #[serde(default)]
        ticker: Option<String>,
    },

    MonthlyDividend {
        #[serde(default = "default_amount")]
        amount: f64,
        #[serde(default)]
        ticker: Option<String>,
    },

    /// Snowball projection; `annual_yield_pct` bypasses the catalog
    Project {
        #[serde(default = "default_initial_balance")]
        initial_balance: f64,
        #[serde(default = "default_monthly_contribution")]
        monthly_contribution: f64,
        #[serde(default = "default_years")]
        years: i64,
        #[serde(default)]
        ticker: Option<String>,
        #[serde(default)]
        annual_yield_pct: Option<f64>,
        /// Fixed price growth in percent instead of the yield-coupled default
        #[serde(default)]
        price_growth_pct: Option<f64>,
    },

    Compare {
        #[serde(default = "default_initial_balance")]
        initial_balance: f64,
        #[serde(default = "default_monthly_contribution")]
        monthly_contribution: f64,
        #[serde(default = "default_years")]
        years: i64,
        #[serde(default)]
        price_growth_pct: Option<f64>,
    },

    Goals,

    Etfs,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "operation", content = "result", rename_all = "snake_case")]
pub enum Response {
    RequiredCapital(GoalPlan),
    MonthlyDividend(DividendQuote),
    Project {
        projection: ProjectionResult,
        summary: ProjectionSummary,
    },
    Compare(Vec<ProjectionSummary>),
    Goals(Vec<LifeGoal>),
    Etfs {
        updated_at: Option<NaiveDate>,
        etfs: Vec<EtfRecord>,
    },
}

fn growth_policy(price_growth_pct: Option<f64>) -> Result<PriceGrowth, CalcError> {
    match price_growth_pct {
        Some(pct) if pct.is_finite() => Ok(PriceGrowth::Fixed(pct)),
        Some(pct) => Err(CalcError::invalid("price_growth_pct", pct)),
        None => Ok(PriceGrowth::default()),
    }
}

/// Handle one request against the catalog
pub fn handle(catalog: &EtfCatalog, request: Request) -> Result<Response, CalcError> {
    log::debug!("Handling {:?}", request);

    match request {
        Request::RequiredCapital { goal_id, monthly_cost, ticker } => {
            let mut goal = match goal_id {
                Some(id) => *find_goal(id)
                    .ok_or_else(|| CalcError::NoReferenceData(format!("unknown life goal {}", id)))?,
                None => *default_goal(),
            };
            if let Some(cost) = monthly_cost {
                goal = LifeGoal {
                    id: 0,
                    title: "Custom goal",
                    monthly_cost: non_negative("monthly_cost", cost)?,
                    description: "Caller-supplied monthly cost",
                };
            }
            Ok(Response::RequiredCapital(plan_for_goal(&goal, catalog, ticker.as_deref())?))
        }

        Request::MonthlyDividend { amount, ticker } => Ok(Response::MonthlyDividend(
            quote_for_amount(amount, catalog, ticker.as_deref())?,
        )),

        Request::Project {
            initial_balance,
            monthly_contribution,
            years,
            ticker,
            annual_yield_pct,
            price_growth_pct,
        } => {
            let engine = ProjectionEngine::new(ProjectionConfig {
                horizon_years: horizon_years(years)?,
                growth: growth_policy(price_growth_pct)?,
            });
            let projection = match annual_yield_pct {
                Some(yield_pct) => engine.project(&ProjectionInput::new(
                    initial_balance,
                    monthly_contribution,
                    yield_pct,
                ))?,
                None => {
                    let etf = catalog.select(ticker.as_deref())?;
                    engine.project_etf(etf, initial_balance, monthly_contribution)?
                }
            };
            let summary = projection.summary();
            Ok(Response::Project { projection, summary })
        }

        Request::Compare {
            initial_balance,
            monthly_contribution,
            years,
            price_growth_pct,
        } => {
            let runner = ScenarioRunner::new(ProjectionConfig {
                horizon_years: horizon_years(years)?,
                growth: growth_policy(price_growth_pct)?,
            });
            let results = runner.run_catalog(catalog, initial_balance, monthly_contribution)?;
            Ok(Response::Compare(results.iter().map(|r| r.summary()).collect()))
        }

        Request::Goals => Ok(Response::Goals(LIFE_GOALS.to_vec())),

        Request::Etfs => Ok(Response::Etfs {
            updated_at: catalog.updated_at(),
            etfs: catalog.records().to_vec(),
        }),
    }
}
