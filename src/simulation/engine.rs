use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::core::{Trial, TrialOutcome};

use super::error::{Result, SimulationError};

/// Runs independent Monty Hall trials against an injected random source.
///
/// The random source is the only state; trials share nothing with each
/// other, so outcomes arrive in call order and any draw sequence from the
/// source maps to exactly one outcome sequence.
///
/// # Type Parameters
///
/// * `R` - The random number generator type (defaults to `StdRng`)
#[derive(Debug)]
pub struct TrialEngine<R = StdRng>
where
    R: Rng,
{
    rng: R,
}

impl TrialEngine<StdRng> {
    /// Create an engine seeded from thread-local entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_rng(&mut rand::rng()))
    }

    /// Create an engine with a fixed seed for reproducible runs.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R> TrialEngine<R>
where
    R: Rng,
{
    /// Create an engine around any random source.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Run a single trial and score it for both strategies.
    pub fn run_trial(&mut self) -> TrialOutcome {
        Trial::generate(&mut self.rng).outcome()
    }

    /// Run `num_trials` trials and collect their outcomes in call order.
    ///
    /// Zero trials yields an empty vector. A negative count fails with
    /// [`SimulationError::InvalidTrialCount`] before any trial runs.
    pub fn run(&mut self, num_trials: i64) -> Result<Vec<TrialOutcome>> {
        if num_trials < 0 {
            return Err(SimulationError::InvalidTrialCount(num_trials));
        }
        Ok((0..num_trials).map(|_| self.run_trial()).collect())
    }
}
