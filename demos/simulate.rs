extern crate monty_sim;

mod common;

use std::path::PathBuf;

use clap::Parser;
use monty_sim::simulation::{MontyHallSimulation, SimulationConfig};

#[derive(Parser, Debug)]
#[command(
    name = "simulate",
    about = "Simulate the Monty Hall problem",
    long_about = "Run repeated random trials of the Monty Hall game and report\n\
                  cumulative win counts for the switch and stay strategies."
)]
struct Args {
    /// Tracing/logging options
    #[command(flatten)]
    tracing: common::TracingArgs,

    /// Number of trials to run
    #[arg(short = 'n', long, default_value_t = 100_000)]
    trials: i64,

    /// Random seed for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,

    /// Directory to save results.json, results.csv, and results.md
    #[arg(short, long, default_value = "results")]
    output_dir: PathBuf,
}

fn main() {
    let args = Args::parse();
    args.tracing.init_tracing();

    let config = SimulationConfig {
        num_trials: args.trials,
        seed: args.seed,
        output_dir: Some(args.output_dir.clone()),
    };

    let simulation = MontyHallSimulation::new(config).expect("Trial count should be non-negative");

    println!("Starting Monty Hall simulation...");
    println!("Number of trials: {}", args.trials);
    println!();

    let result = simulation.run().expect("Simulation should complete");
    let series = result.series();

    println!("Results:");
    println!("========");
    println!(
        "Switch: {} wins ({:.2}%)",
        series.total_switch_wins(),
        series.switch_win_rate() * 100.0
    );
    println!(
        "Stay:   {} wins ({:.2}%)",
        series.total_stay_wins(),
        series.stay_win_rate() * 100.0
    );

    result
        .save_to_dir(&args.output_dir)
        .expect("Should be able to write result artifacts");
    println!();
    println!("Artifacts written to {}", args.output_dir.display());
}
