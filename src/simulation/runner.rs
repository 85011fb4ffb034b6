use tracing::event;

use super::config::SimulationConfig;
use super::engine::TrialEngine;
use super::error::Result;
use super::result::SimulationResult;
use super::series::aggregate;

/// Runs a configured Monty Hall simulation end to end
///
/// This struct orchestrates a run by:
/// 1. Validating the configuration up front
/// 2. Building a seeded or entropy-backed trial engine
/// 3. Running the trials and aggregating the cumulative series
/// 4. Producing a [`SimulationResult`] ready for reporting
#[derive(Debug)]
pub struct MontyHallSimulation {
    config: SimulationConfig,
}

impl MontyHallSimulation {
    /// Create a simulation from a configuration.
    ///
    /// Fails with [`super::SimulationError::InvalidTrialCount`] if the
    /// configured trial count is negative; no trials run in that case.
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the simulation configuration
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Run the simulation and return the aggregated result
    pub fn run(&self) -> Result<SimulationResult> {
        event!(
            tracing::Level::INFO,
            num_trials = self.config.num_trials,
            seed = self.config.seed,
            "Starting Monty Hall simulation"
        );

        let mut engine = match self.config.seed {
            Some(seed) => TrialEngine::from_seed(seed),
            None => TrialEngine::from_entropy(),
        };

        let outcomes = engine.run(self.config.num_trials)?;
        let series = aggregate(&outcomes);

        event!(
            tracing::Level::INFO,
            num_trials = series.len(),
            switch_wins = series.total_switch_wins(),
            stay_wins = series.total_stay_wins(),
            "Simulation complete"
        );

        Ok(SimulationResult::new(series, self.config.clone()))
    }
}
