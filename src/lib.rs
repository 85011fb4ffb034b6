//! A crate for simulating the Monty Hall problem.
//!
//! The contestant picks one of three doors, the host opens a different door
//! that hides a goat, and the contestant either stays with the first pick or
//! switches to the remaining closed door. Running many independent trials
//! shows that switching wins about two thirds of the time while staying wins
//! about one third.
//!
//! The [`core`] module holds the game-domain types ([`core::Door`],
//! [`core::Trial`], [`core::TrialOutcome`]). The [`simulation`] module runs
//! trials, aggregates the cumulative win series, and renders the results.

/// Core game-domain types: doors, trials, and per-trial outcomes.
pub mod core;

/// Trial engine, cumulative aggregation, and result reporting.
pub mod simulation;
