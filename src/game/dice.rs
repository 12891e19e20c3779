//! Dice rolling mechanics.

use rand::Rng;
use serde::Serialize;

pub const DEFAULT_SIDES: u32 = 20;
pub const DEFAULT_COUNT: u32 = 1;
pub const MIN_SIDES: u32 = 2;
pub const MAX_SIDES: u32 = 1000;
pub const MAX_COUNT: u32 = 20;

/// Outcome of rolling `count` dice with `sides` faces each
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DiceRoll {
    pub sides: u32,
    pub rolls: Vec<u32>,
    pub total: u32,
}

impl DiceRoll {
    pub fn describe(&self) -> String {
        if self.rolls.len() == 1 {
            format!("Rolled a d{}: {}", self.sides, self.total)
        } else {
            let rolls = self
                .rolls
                .iter()
                .map(u32::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            format!(
                "Rolled {}d{}: [{rolls}] (total {})",
                self.rolls.len(),
                self.sides,
                self.total
            )
        }
    }
}

/// Check bounds for a requested roll. Callers map a violation to their
/// own error type.
pub fn validate(sides: u32, count: u32) -> Result<(), String> {
    if !(MIN_SIDES..=MAX_SIDES).contains(&sides) {
        return Err(format!(
            "sides must be between {MIN_SIDES} and {MAX_SIDES}, got {sides}"
        ));
    }
    if !(1..=MAX_COUNT).contains(&count) {
        return Err(format!("count must be between 1 and {MAX_COUNT}, got {count}"));
    }
    Ok(())
}

/// Roll with the process RNG. Bounds must have been validated.
pub fn roll(sides: u32, count: u32) -> DiceRoll {
    roll_with(&mut rand::rng(), sides, count)
}

/// Roll with a caller-supplied RNG
pub fn roll_with<R: Rng + ?Sized>(rng: &mut R, sides: u32, count: u32) -> DiceRoll {
    let rolls: Vec<u32> = (0..count).map(|_| rng.random_range(1..=sides)).collect();
    let total = rolls.iter().sum();
    DiceRoll {
        sides,
        rolls,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn rolls_stay_within_die_faces() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let roll = roll_with(&mut rng, 6, 3);
            assert_eq!(roll.rolls.len(), 3);
            assert!(roll.rolls.iter().all(|&r| (1..=6).contains(&r)));
            assert_eq!(roll.total, roll.rolls.iter().sum::<u32>());
        }
    }

    #[test]
    fn seeded_rolls_are_reproducible() {
        let first = roll_with(&mut StdRng::seed_from_u64(42), 20, 4);
        let second = roll_with(&mut StdRng::seed_from_u64(42), 20, 4);
        assert_eq!(first, second);
    }

    #[test]
    fn validate_rejects_out_of_range_requests() {
        assert!(validate(1, 1).is_err());
        assert!(validate(MAX_SIDES + 1, 1).is_err());
        assert!(validate(6, 0).is_err());
        assert!(validate(6, MAX_COUNT + 1).is_err());
        assert!(validate(DEFAULT_SIDES, DEFAULT_COUNT).is_ok());
    }

    #[test]
    fn describe_mentions_the_die_and_total() {
        let single = DiceRoll {
            sides: 20,
            rolls: vec![17],
            total: 17,
        };
        assert_eq!(single.describe(), "Rolled a d20: 17");

        let multiple = DiceRoll {
            sides: 6,
            rolls: vec![2, 5],
            total: 7,
        };
        assert!(multiple.describe().contains("2d6"));
        assert!(multiple.describe().contains("total 7"));
    }
}
