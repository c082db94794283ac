//! RNG module - deterministic random field generation
//!
//! Provides a simple LCG so that a seed always produces the same field, and
//! [`random_field`], which picks random dimensions and fills every cell with a
//! random state.

use tracing::debug;

use crate::field::{FieldError, TicTacToeField};
use crate::types::{Cell, RANDOM_FIELD_MAX, RANDOM_FIELD_MIN};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // High bits of an LCG are far better distributed than the low ones.
        (self.next_u32() >> 16) % max.max(1)
    }

    /// Generate random value in range [min, max]
    pub fn range_inclusive(&mut self, min: usize, max: usize) -> usize {
        let span = (max - min + 1) as u32;
        min + self.next_range(span) as usize
    }

    /// Random cell state, each equally likely.
    pub fn next_cell(&mut self) -> Cell {
        Cell::ALL[self.next_range(Cell::ALL.len() as u32) as usize]
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Build a field of random size with every cell set to a random state.
pub fn random_field(rng: &mut SimpleRng) -> Result<TicTacToeField, FieldError> {
    let rows = rng.range_inclusive(RANDOM_FIELD_MIN, RANDOM_FIELD_MAX);
    let columns = rng.range_inclusive(RANDOM_FIELD_MIN, RANDOM_FIELD_MAX);

    let mut field = TicTacToeField::new(rows, columns)?;
    for row in 0..rows as i32 {
        for column in 0..columns as i32 {
            field.set(row, column, rng.next_cell());
        }
    }

    debug!(rows, columns, "generated random field");
    Ok(field)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        let same = (0..100).filter(|_| rng1.next_u32() == rng2.next_u32()).count();
        assert!(same < 5);
    }

    #[test]
    fn test_zero_seed_is_usable() {
        let mut rng = SimpleRng::new(0);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn test_range_inclusive_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            let v = rng.range_inclusive(RANDOM_FIELD_MIN, RANDOM_FIELD_MAX);
            assert!((RANDOM_FIELD_MIN..=RANDOM_FIELD_MAX).contains(&v));
        }
    }

    #[test]
    fn test_next_cell_covers_all_states() {
        let mut rng = SimpleRng::new(99);
        let mut seen = [false; 3];
        for _ in 0..300 {
            let idx = match rng.next_cell() {
                Cell::Empty => 0,
                Cell::PlayerOne => 1,
                Cell::PlayerTwo => 2,
            };
            seen[idx] = true;
        }
        assert_eq!(seen, [true; 3]);
    }

    #[test]
    fn test_random_field_dimensions_and_determinism() {
        let a = random_field(&mut SimpleRng::new(42)).unwrap();
        let b = random_field(&mut SimpleRng::new(42)).unwrap();

        assert!((RANDOM_FIELD_MIN..=RANDOM_FIELD_MAX).contains(&a.rows()));
        assert!((RANDOM_FIELD_MIN..=RANDOM_FIELD_MAX).contains(&a.columns()));
        assert_eq!(a.rows(), b.rows());
        assert_eq!(a.columns(), b.columns());
        assert_eq!(a.cells(), b.cells());
        assert_eq!(a.observer_count(), 0);
    }
}
