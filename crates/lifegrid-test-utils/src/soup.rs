//! Seeded random initial states.

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Cells of a `rows x cols` grid that are Alive with probability
/// `density_percent / 100`, row-major.
///
/// Deterministic for a given `seed`.
pub fn random_soup(rows: u32, cols: u32, density_percent: u32, seed: u64) -> Vec<(u32, u32)> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut alive = Vec::new();
    for r in 0..rows {
        for c in 0..cols {
            if rng.next_u32() % 100 < density_percent {
                alive.push((r, c));
            }
        }
    }
    alive
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_soup() {
        assert_eq!(random_soup(8, 8, 40, 7), random_soup(8, 8, 40, 7));
    }

    #[test]
    fn density_extremes() {
        assert!(random_soup(6, 6, 0, 1).is_empty());
        assert_eq!(random_soup(6, 6, 100, 1).len(), 36);
    }
}
