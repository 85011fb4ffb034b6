use std::path::PathBuf;

use super::error::{Result, SimulationError};

/// Configuration for running a Monty Hall simulation
///
/// The trial count is kept signed so that a caller handing us a bad value
/// gets a typed error instead of a silent wrap.
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Number of trials to run
    pub num_trials: i64,
    /// Optional random seed for reproducibility
    pub seed: Option<u64>,
    /// Optional directory to save the result artifacts
    pub output_dir: Option<PathBuf>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            num_trials: 100_000,
            seed: None,
            output_dir: None,
        }
    }
}

impl SimulationConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the simulation configuration
    ///
    /// Zero trials is allowed and yields an empty series.
    pub fn validate(&self) -> Result<()> {
        if self.num_trials < 0 {
            return Err(SimulationError::InvalidTrialCount(self.num_trials));
        }
        Ok(())
    }
}
