use serde::{Deserialize, Serialize};

use crate::core::TrialOutcome;

/// Cumulative win counts after a single trial
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesEntry {
    /// The 1-based trial number this entry covers up to
    pub trial: usize,
    /// Switch-strategy wins among trials 1..=trial
    pub switch_wins: u64,
    /// Stay-strategy wins among trials 1..=trial
    pub stay_wins: u64,
}

/// The cumulative win series for both strategies, one entry per trial
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSeries {
    entries: Vec<SeriesEntry>,
}

/// Fold per-trial outcomes into the cumulative win series.
///
/// Entry `i` counts the wins among the first `i + 1` outcomes, so counts
/// never decrease and grow by at most one per step. An empty input yields
/// an empty series.
pub fn aggregate(outcomes: &[TrialOutcome]) -> ResultSeries {
    let mut entries = Vec::with_capacity(outcomes.len());
    let mut switch_wins = 0u64;
    let mut stay_wins = 0u64;

    for (i, outcome) in outcomes.iter().enumerate() {
        switch_wins += u64::from(outcome.switch_wins);
        stay_wins += u64::from(outcome.stay_wins);
        entries.push(SeriesEntry {
            trial: i + 1,
            switch_wins,
            stay_wins,
        });
    }

    ResultSeries { entries }
}

impl ResultSeries {
    /// Number of trials covered by the series
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the series covers no trials
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in trial order
    pub fn entries(&self) -> &[SeriesEntry] {
        &self.entries
    }

    /// The final entry, if any trials ran
    pub fn last(&self) -> Option<&SeriesEntry> {
        self.entries.last()
    }

    /// Total switch-strategy wins across all trials
    pub fn total_switch_wins(&self) -> u64 {
        self.last().map_or(0, |e| e.switch_wins)
    }

    /// Total stay-strategy wins across all trials
    pub fn total_stay_wins(&self) -> u64 {
        self.last().map_or(0, |e| e.stay_wins)
    }

    /// Fraction of trials the switch strategy won (0.0 for an empty series)
    pub fn switch_win_rate(&self) -> f64 {
        if self.entries.is_empty() {
            0.0
        } else {
            self.total_switch_wins() as f64 / self.entries.len() as f64
        }
    }

    /// Fraction of trials the stay strategy won (0.0 for an empty series)
    pub fn stay_win_rate(&self) -> f64 {
        if self.entries.is_empty() {
            0.0
        } else {
            self.total_stay_wins() as f64 / self.entries.len() as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(switch_wins: bool, stay_wins: bool) -> TrialOutcome {
        TrialOutcome {
            switch_wins,
            stay_wins,
        }
    }

    #[test]
    fn test_aggregate_empty() {
        let series = aggregate(&[]);
        assert!(series.is_empty());
        assert_eq!(series.total_switch_wins(), 0);
        assert_eq!(series.total_stay_wins(), 0);
        assert_eq!(series.switch_win_rate(), 0.0);
        assert_eq!(series.stay_win_rate(), 0.0);
    }

    #[test]
    fn test_aggregate_counts_each_strategy() {
        let outcomes = vec![
            outcome(true, false),
            outcome(false, true),
            outcome(true, false),
        ];
        let series = aggregate(&outcomes);

        assert_eq!(series.len(), 3);
        assert_eq!(
            series.entries(),
            &[
                SeriesEntry {
                    trial: 1,
                    switch_wins: 1,
                    stay_wins: 0
                },
                SeriesEntry {
                    trial: 2,
                    switch_wins: 1,
                    stay_wins: 1
                },
                SeriesEntry {
                    trial: 3,
                    switch_wins: 2,
                    stay_wins: 1
                },
            ]
        );
        assert_eq!(series.total_switch_wins(), 2);
        assert_eq!(series.total_stay_wins(), 1);
    }

    #[test]
    fn test_series_length_matches_input() {
        let outcomes = vec![outcome(false, true); 123];
        assert_eq!(aggregate(&outcomes).len(), 123);
    }

    #[test]
    fn test_counts_are_monotonic_with_unit_steps() {
        use rand::{Rng, SeedableRng, rngs::StdRng};

        let mut rng = StdRng::seed_from_u64(3);
        let outcomes: Vec<TrialOutcome> = (0..1_000)
            .map(|_| {
                let stay = rng.random_bool(1.0 / 3.0);
                outcome(!stay, stay)
            })
            .collect();

        let series = aggregate(&outcomes);
        let mut prev = SeriesEntry {
            trial: 0,
            switch_wins: 0,
            stay_wins: 0,
        };
        for entry in series.entries() {
            assert_eq!(entry.trial, prev.trial + 1);
            assert!(entry.switch_wins >= prev.switch_wins);
            assert!(entry.stay_wins >= prev.stay_wins);
            assert!(entry.switch_wins - prev.switch_wins <= 1);
            assert!(entry.stay_wins - prev.stay_wins <= 1);
            prev = *entry;
        }
    }

    #[test]
    fn test_win_rates() {
        let outcomes = vec![
            outcome(true, false),
            outcome(true, false),
            outcome(false, true),
            outcome(true, false),
        ];
        let series = aggregate(&outcomes);
        assert_eq!(series.switch_win_rate(), 0.75);
        assert_eq!(series.stay_win_rate(), 0.25);
    }
}
