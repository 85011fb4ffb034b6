use rand::Rng;

use super::Door;

/// A single Monty Hall game instance.
///
/// Two independent uniform draws (the prize door and the contestant's first
/// pick) determine everything else: the host reveals a goat door that the
/// contestant did not pick, and the switch choice is the one remaining
/// closed door.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Trial {
    /// The door hiding the prize.
    pub prize_door: Door,
    /// The contestant's initial pick.
    pub contestant_choice: Door,
    /// The goat door the host opens.
    pub host_reveal: Door,
    /// The remaining closed door a switching contestant ends up on.
    pub switch_choice: Door,
}

/// The per-trial result for both strategies.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct TrialOutcome {
    /// True when switching to the remaining door wins the prize.
    pub switch_wins: bool,
    /// True when keeping the initial pick wins the prize.
    pub stay_wins: bool,
}

impl Trial {
    /// Play out one game from two fresh uniform draws.
    pub fn generate<R: Rng>(rng: &mut R) -> Trial {
        Trial::from_draws(Door::sample(rng), Door::sample(rng))
    }

    /// Play out one game from fixed draws.
    ///
    /// The host opens the first door in [`Door::ALL`] order that is neither
    /// the prize door nor the contestant's pick. When the contestant's pick
    /// is the prize door two goat doors qualify and the first one is opened;
    /// the tie-break is unobservable in aggregate outcomes.
    pub fn from_draws(prize_door: Door, contestant_choice: Door) -> Trial {
        let host_reveal = Door::ALL
            .into_iter()
            .find(|&door| door != prize_door && door != contestant_choice)
            .expect("three doors always leave a goat door to reveal");

        let switch_choice = Door::ALL
            .into_iter()
            .find(|&door| door != contestant_choice && door != host_reveal)
            .expect("three doors always leave a door to switch to");

        Trial {
            prize_door,
            contestant_choice,
            host_reveal,
            switch_choice,
        }
    }

    /// Score the trial for both strategies.
    pub fn outcome(&self) -> TrialOutcome {
        TrialOutcome {
            switch_wins: self.switch_choice == self.prize_door,
            stay_wins: self.contestant_choice == self.prize_door,
        }
    }
}
