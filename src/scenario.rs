//! Scenario runner for comparing projections
//!
//! Holds one projection config and runs it across ETFs, inputs, or a set of
//! alternative configs.

use rayon::prelude::*;

use crate::error::CalcError;
use crate::etf::EtfCatalog;
use crate::projection::{ProjectionConfig, ProjectionEngine, ProjectionInput, ProjectionResult};

/// Pre-configured runner for batch projections
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new(ProjectionConfig { horizon_years: 20, ..Default::default() });
/// for result in runner.run_catalog(&catalog, 10_000_000.0, 500_000.0)? {
///     println!("{:?}", result.summary());
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    config: ProjectionConfig,
}

impl ScenarioRunner {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    /// Run a single projection
    pub fn run(&self, input: &ProjectionInput) -> Result<ProjectionResult, CalcError> {
        ProjectionEngine::new(self.config).project(input)
    }

    /// Project the same money into every ETF of the catalog, in catalog order
    pub fn run_catalog(
        &self,
        catalog: &EtfCatalog,
        initial_balance: f64,
        monthly_contribution: f64,
    ) -> Result<Vec<ProjectionResult>, CalcError> {
        if catalog.is_empty() {
            return Err(CalcError::NoReferenceData("empty ETF catalog".into()));
        }

        let engine = ProjectionEngine::new(self.config);
        let results = catalog
            .records()
            .par_iter()
            .map(|etf| engine.project_etf(etf, initial_balance, monthly_contribution))
            .collect::<Result<Vec<_>, _>>()?;

        log::info!(
            "Projected {} ETFs over {} years",
            results.len(),
            self.config.horizon_years
        );
        Ok(results)
    }

    /// Run many inputs with the same config
    pub fn run_batch(&self, inputs: &[ProjectionInput]) -> Result<Vec<ProjectionResult>, CalcError> {
        let engine = ProjectionEngine::new(self.config);
        inputs.par_iter().map(|input| engine.project(input)).collect()
    }

    /// Run one input under several configs (e.g. growth assumptions)
    pub fn run_scenarios(
        &self,
        input: &ProjectionInput,
        configs: &[ProjectionConfig],
    ) -> Result<Vec<ProjectionResult>, CalcError> {
        configs
            .iter()
            .map(|config| ProjectionEngine::new(*config).project(input))
            .collect()
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut ProjectionConfig {
        &mut self.config
    }
}
