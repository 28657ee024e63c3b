//! Dividend snowball projection

mod engine;
mod growth;
mod points;
mod state;

pub use engine::{
    project, ProjectionConfig, ProjectionEngine, ProjectionInput, MAX_HORIZON_YEARS,
    MIN_GROWTH_RATE,
};
pub use growth::PriceGrowth;
pub use points::{ProjectionPoint, ProjectionResult, ProjectionSummary};
pub use state::ProjectionState;
