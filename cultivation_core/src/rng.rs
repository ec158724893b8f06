//! RollSource - Injected uniform randomness
//!
//! Every probabilistic rule draws through this trait instead of a global
//! generator. Any `rand::Rng` is a `RollSource`, so production callers pass
//! `thread_rng()` or a seeded `StdRng`, and tests can pass [`ScriptedRolls`]
//! to force specific branches.

use rand::Rng;
use std::collections::VecDeque;

/// Source of independent uniform draws in `[0, 1)`
pub trait RollSource {
    fn roll(&mut self) -> f64;

    /// Roll against a probability; `true` when the draw lands under it
    fn chance(&mut self, probability: f64) -> bool {
        self.roll() < probability
    }

    /// Pick an index in `0..len` uniformly (`len` must be non-zero)
    fn pick(&mut self, len: usize) -> usize {
        let index = (self.roll() * len as f64) as usize;
        index.min(len.saturating_sub(1))
    }

    /// Uniform integer in `min..=max`
    fn range_inclusive(&mut self, min: i64, max: i64) -> i64 {
        if max <= min {
            return min;
        }
        let span = (max - min + 1) as usize;
        min + self.pick(span) as i64
    }
}

impl<R: Rng + ?Sized> RollSource for R {
    fn roll(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// A fixed sequence of draws, consumed front to back
///
/// Once the script runs out every further draw returns `fallback`
/// (0.0 unless set), which passes every probability check.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRolls {
    rolls: VecDeque<f64>,
    fallback: f64,
    consumed: usize,
}

impl ScriptedRolls {
    pub fn new(rolls: impl IntoIterator<Item = f64>) -> Self {
        ScriptedRolls {
            rolls: rolls.into_iter().collect(),
            fallback: 0.0,
            consumed: 0,
        }
    }

    /// Value returned after the script is exhausted
    pub fn with_fallback(mut self, fallback: f64) -> Self {
        self.fallback = fallback;
        self
    }

    /// Number of draws taken so far
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Draws left in the script
    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl RollSource for ScriptedRolls {
    fn roll(&mut self) -> f64 {
        self.consumed += 1;
        self.rolls.pop_front().unwrap_or(self.fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_scripted_rolls_in_order() {
        let mut rolls = ScriptedRolls::new([0.1, 0.7]);
        assert!((rolls.roll() - 0.1).abs() < f64::EPSILON);
        assert!((rolls.roll() - 0.7).abs() < f64::EPSILON);
        assert_eq!(rolls.consumed(), 2);
        assert_eq!(rolls.remaining(), 0);
    }

    #[test]
    fn test_scripted_rolls_fallback() {
        let mut rolls = ScriptedRolls::new([]).with_fallback(0.99);
        assert!((rolls.roll() - 0.99).abs() < f64::EPSILON);
        assert!(!rolls.chance(0.5));
    }

    #[test]
    fn test_pick_stays_in_bounds() {
        let mut rolls = ScriptedRolls::new([0.0, 0.5, 0.999_999]);
        assert_eq!(rolls.pick(6), 0);
        assert_eq!(rolls.pick(6), 3);
        assert_eq!(rolls.pick(6), 5);
    }

    #[test]
    fn test_range_inclusive() {
        let mut rolls = ScriptedRolls::new([0.0, 0.999_999]);
        assert_eq!(rolls.range_inclusive(5, 15), 5);
        assert_eq!(rolls.range_inclusive(5, 15), 15);
        assert_eq!(rolls.range_inclusive(7, 7), 7);
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let mut a = ChaCha8Rng::seed_from_u64(42);
        let mut b = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..16 {
            let x = a.roll();
            assert!((0.0..1.0).contains(&x));
            assert!((x - b.roll()).abs() < f64::EPSILON);
        }
    }
}
