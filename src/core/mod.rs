/// Module for the `Door` type and uniform door sampling.
mod door;
/// Export `Door`
pub use self::door::Door;

/// Module for a single game instance and its outcome.
mod trial;
/// Export `Trial` and `TrialOutcome`
pub use self::trial::{Trial, TrialOutcome};
