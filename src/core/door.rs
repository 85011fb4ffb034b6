use rand::Rng;

/// One of the three doors in the game.
///
/// Doors are semantically interchangeable; no door is special before the
/// prize is placed. The variant order only fixes the scan order used when
/// the host has more than one goat door to choose from.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum Door {
    /// Door number zero.
    Zero,
    /// Door number one.
    One,
    /// Door number two.
    Two,
}

impl Door {
    /// All doors in their fixed scan order.
    pub const ALL: [Door; 3] = [Door::Zero, Door::One, Door::Two];

    /// Draw a door uniformly at random.
    pub fn sample<R: Rng>(rng: &mut R) -> Door {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// The door's numeric identifier (0, 1, or 2).
    pub fn index(self) -> usize {
        match self {
            Door::Zero => 0,
            Door::One => 1,
            Door::Two => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_indexes_match_scan_order() {
        for (i, door) in Door::ALL.iter().enumerate() {
            assert_eq!(door.index(), i);
        }
    }

    #[test]
    fn test_sample_is_roughly_uniform() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut counts = [0usize; 3];
        let draws = 30_000;

        for _ in 0..draws {
            counts[Door::sample(&mut rng).index()] += 1;
        }

        // Each door should land near a third of the draws.
        for &count in &counts {
            assert!(count > draws / 3 - 1000, "count too low: {}", count);
            assert!(count < draws / 3 + 1000, "count too high: {}", count);
        }
    }

    #[test]
    fn test_sample_covers_all_doors() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut seen = [false; 3];
        for _ in 0..100 {
            seen[Door::sample(&mut rng).index()] = true;
        }
        assert_eq!(seen, [true, true, true]);
    }
}
