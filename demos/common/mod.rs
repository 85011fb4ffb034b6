//! Shared utilities for monty_sim demo programs.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// CLI arguments for controlling tracing/logging output.
///
/// Embed into a demo's CLI with `#[command(flatten)]`.
#[derive(clap::Args, Debug, Clone)]
pub struct TracingArgs {
    /// Increase logging verbosity (can be repeated: -v, -vv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Suppress all output except warnings and errors
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

impl TracingArgs {
    /// Initialize the tracing subscriber based on CLI arguments.
    ///
    /// `RUST_LOG` takes precedence when set; otherwise the verbosity flags
    /// pick the level (quiet: warn, default: info, -v: debug, -vv: trace).
    ///
    /// # Panics
    ///
    /// Panics if the subscriber has already been set.
    pub fn init_tracing(&self) {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            let level = if self.quiet {
                "warn"
            } else {
                match self.verbosity {
                    0 => "info",
                    1 => "debug",
                    _ => "trace",
                }
            };
            EnvFilter::new(format!("{level},monty_sim={level}"))
        };

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().compact())
            .init();
    }
}
