//! Seeded randomness source for dice rolls and deck shuffling
//!
//! The whole engine's reproducibility guarantee (spec §8.1 property 6: same
//! seed + same decisions → byte-identical event streams) rests on this one
//! module never touching any randomness source other than this RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Result of rolling two six-sided dice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRoll {
    pub d1: u8,
    pub d2: u8,
}

impl DiceRoll {
    pub fn total(&self) -> u8 {
        self.d1 + self.d2
    }

    pub fn is_doubles(&self) -> bool {
        self.d1 == self.d2
    }
}

/// Deterministic PRNG wrapper. Construct once per game from a seed; every
/// dice roll and every deck shuffle draws from this single stream so replay
/// from the seed reproduces the game exactly.
#[derive(Clone)]
pub struct GameRng {
    inner: StdRng,
}

impl GameRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate a seed from the OS RNG, for games with no configured seed.
    pub fn fresh_seed() -> u64 {
        rand::thread_rng().gen()
    }

    pub fn roll_dice(&mut self) -> DiceRoll {
        DiceRoll {
            d1: self.inner.gen_range(1..=6),
            d2: self.inner.gen_range(1..=6),
        }
    }

    /// Fisher-Yates shuffle, drawing from this RNG's stream.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.inner.gen_range(0..=i);
            items.swap(i, j);
        }
    }

    pub fn gen_range(&mut self, low: u32, high: u32) -> u32 {
        self.inner.gen_range(low..high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = GameRng::from_seed(42);
        let mut b = GameRng::from_seed(42);
        for _ in 0..200 {
            assert_eq!(a.roll_dice(), b.roll_dice());
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = GameRng::from_seed(1);
        let mut b = GameRng::from_seed(2);
        let rolls_a: Vec<_> = (0..50).map(|_| a.roll_dice()).collect();
        let rolls_b: Vec<_> = (0..50).map(|_| b.roll_dice()).collect();
        assert_ne!(rolls_a, rolls_b);
    }

    #[test]
    fn dice_in_range() {
        let mut rng = GameRng::from_seed(7);
        for _ in 0..500 {
            let roll = rng.roll_dice();
            assert!((1..=6).contains(&roll.d1));
            assert!((1..=6).contains(&roll.d2));
        }
    }

    #[test]
    fn shuffle_is_deterministic_per_seed() {
        let mut a = GameRng::from_seed(99);
        let mut b = GameRng::from_seed(99);
        let mut items_a: Vec<u32> = (0..16).collect();
        let mut items_b: Vec<u32> = (0..16).collect();
        a.shuffle(&mut items_a);
        b.shuffle(&mut items_b);
        assert_eq!(items_a, items_b);
    }
}
