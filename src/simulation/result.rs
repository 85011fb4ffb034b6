use std::path::Path;

use super::config::SimulationConfig;
use super::error::Result;
use super::series::ResultSeries;

/// Results of a Monty Hall simulation run
#[derive(Debug, Clone)]
pub struct SimulationResult {
    /// The cumulative win series
    series: ResultSeries,
    /// The configuration used for this run
    config: SimulationConfig,
}

impl SimulationResult {
    /// Create a new simulation result
    pub fn new(series: ResultSeries, config: SimulationConfig) -> Self {
        Self { series, config }
    }

    /// Get the cumulative win series
    pub fn series(&self) -> &ResultSeries {
        &self.series
    }

    /// Get the configuration used
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Format results as Markdown output
    pub fn to_markdown(&self) -> String {
        let mut output = String::new();

        output.push_str("# Monty Hall Simulation Results\n\n");

        output.push_str("## Configuration\n\n");
        output.push_str(&format!("- **Trials**: {}\n", self.series.len()));
        if let Some(seed) = self.config.seed {
            output.push_str(&format!("- **Random Seed**: {}\n", seed));
        }
        output.push('\n');

        output.push_str("## Totals\n\n");
        output.push_str("| Strategy | Wins | Win Rate |\n");
        output.push_str("|----------|------|----------|\n");
        output.push_str(&format!(
            "| Switch | {} | {:.1}% |\n",
            self.series.total_switch_wins(),
            self.series.switch_win_rate() * 100.0
        ));
        output.push_str(&format!(
            "| Stay | {} | {:.1}% |\n",
            self.series.total_stay_wins(),
            self.series.stay_win_rate() * 100.0
        ));
        output.push('\n');

        output
    }

    /// Serialize the cumulative series to JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.series).map_err(Into::into)
    }

    /// Render the cumulative series as CSV with a header row
    pub fn to_csv(&self) -> String {
        let mut output = String::from("trial,switch_wins,stay_wins\n");
        for entry in self.series.entries() {
            output.push_str(&format!(
                "{},{},{}\n",
                entry.trial, entry.switch_wins, entry.stay_wins
            ));
        }
        output
    }

    /// Save results to JSON, CSV, and Markdown files
    pub fn save_to_dir(&self, output_dir: &Path) -> Result<()> {
        std::fs::create_dir_all(output_dir)?;

        let json_path = output_dir.join("results.json");
        std::fs::write(&json_path, self.to_json()?)?;

        let csv_path = output_dir.join("results.csv");
        std::fs::write(&csv_path, self.to_csv())?;

        let md_path = output_dir.join("results.md");
        std::fs::write(&md_path, self.to_markdown())?;

        Ok(())
    }
}
