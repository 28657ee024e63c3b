//! Dividend Life - dividend ETF planning calculators
//!
//! This library provides:
//! - ETF reference data loading with a built-in fallback list
//! - Required capital to cover a monthly "life goal" with dividends
//! - Monthly dividend income for an investment amount
//! - Year-by-year dividend snowball projections with pluggable growth assumptions
//! - Batch comparison across the ETF catalog

pub mod error;
pub mod etf;
pub mod goals;
pub mod calculator;
pub mod projection;
pub mod scenario;
pub mod service;
pub mod report;

// Re-export commonly used types
pub use error::{CalcError, DataError};
pub use etf::{EtfCatalog, EtfRecord};
pub use goals::{LifeGoal, LIFE_GOALS};
pub use calculator::{monthly_dividend, required_capital, required_shares};
pub use projection::{project, PriceGrowth, ProjectionConfig, ProjectionEngine, ProjectionPoint, ProjectionResult};
pub use scenario::ScenarioRunner;
