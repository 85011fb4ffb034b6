//! Trial simulation and result aggregation for the Monty Hall problem
//!
//! This module runs independent random trials of the game, folds the
//! per-trial outcomes into a cumulative win series for the switch and stay
//! strategies, and renders the series as Markdown, JSON, and CSV.
//!
//! # Example
//!
//! ```ignore
//! use monty_sim::simulation::{MontyHallSimulation, SimulationConfig};
//!
//! let config = SimulationConfig {
//!     num_trials: 100_000,
//!     seed: Some(42),
//!     ..Default::default()
//! };
//!
//! let result = MontyHallSimulation::new(config)?.run()?;
//!
//! println!(
//!     "switch won {:.1}% of trials, stay won {:.1}%",
//!     result.series().switch_win_rate() * 100.0,
//!     result.series().stay_win_rate() * 100.0,
//! );
//!
//! result.save_to_dir(&output_dir)?;
//! ```

mod config;
mod engine;
mod error;
mod result;
mod runner;
mod series;

pub use config::SimulationConfig;
pub use engine::TrialEngine;
pub use error::{Result, SimulationError};
pub use result::SimulationResult;
pub use runner::MontyHallSimulation;
pub use series::{ResultSeries, SeriesEntry, aggregate};
