//! Deadline sequences for demonstration and testing.
//!
//! Provides the classic 10-task example and uniformly random sequences
//! where every deadline is drawn from `0..count`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Default 10-task example, deadlines as 0-based slots.
pub const DEFAULT_DEADLINES: [usize; 10] = [0, 6, 1, 9, 2, 5, 3, 3, 6, 0];

pub fn default_deadlines() -> Vec<usize> {
    DEFAULT_DEADLINES.to_vec()
}

/// Draws `count` deadlines uniformly from `0..count`.
pub fn random_deadlines<R: Rng>(count: usize, rng: &mut R) -> Vec<usize> {
    (0..count).map(|_| rng.random_range(0..count)).collect()
}

/// Reproducible [`random_deadlines`]; without a seed the thread-local RNG is used.
pub fn random_deadlines_seeded(count: usize, seed: Option<u64>) -> Vec<usize> {
    match seed {
        Some(seed) => random_deadlines(count, &mut StdRng::seed_from_u64(seed)),
        None => random_deadlines(count, &mut rand::rng()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;

    #[test]
    fn test_default_deadlines() {
        let deadlines = default_deadlines();
        assert_eq!(deadlines.len(), 10);
        assert_eq!(deadlines, DEFAULT_DEADLINES);
    }

    #[test]
    fn test_random_in_range() {
        let mut rng = SmallRng::seed_from_u64(42);
        for count in 1..50 {
            let deadlines = random_deadlines(count, &mut rng);
            assert_eq!(deadlines.len(), count);
            assert!(deadlines.iter().all(|&d| d < count));
        }
    }

    #[test]
    fn test_random_zero_count() {
        assert!(random_deadlines_seeded(0, Some(1)).is_empty());
        assert!(random_deadlines_seeded(0, None).is_empty());
    }

    #[test]
    fn test_seeded_is_reproducible() {
        assert_eq!(
            random_deadlines_seeded(25, Some(7)),
            random_deadlines_seeded(25, Some(7))
        );
    }
}
