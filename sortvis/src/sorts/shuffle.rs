// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

/// A random permutation of `0..size`. The same `maybe_seed` always yields the same
/// permutation; `None` shuffles with the thread local generator.
#[must_use]
pub fn generate_shuffled_vec(size: usize, maybe_seed: Option<u64>) -> Vec<usize> {
    let mut acc: Vec<usize> = (0..size).collect();
    match maybe_seed {
        Some(seed) => acc.shuffle(&mut StdRng::seed_from_u64(seed)),
        None => acc.shuffle(&mut rand::rng()),
    }
    acc
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test_case(None; "unseeded")]
    #[test_case(Some(42); "seeded")]
    fn test_is_permutation(maybe_seed: Option<u64>) {
        let mut it = generate_shuffled_vec(50, maybe_seed);
        it.sort_unstable();
        assert_eq2!(it, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_same_seed_same_shuffle() {
        assert_eq2!(
            generate_shuffled_vec(30, Some(7)),
            generate_shuffled_vec(30, Some(7))
        );
        assert_ne!(
            generate_shuffled_vec(30, Some(7)),
            generate_shuffled_vec(30, Some(8))
        );
    }

    #[test]
    fn test_empty_and_single() {
        assert!(generate_shuffled_vec(0, Some(1)).is_empty());
        assert_eq2!(generate_shuffled_vec(1, None), vec![0]);
    }
}
