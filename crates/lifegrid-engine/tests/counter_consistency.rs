//! Integration test: the incremental live-cell total always matches a full
//! scan of the grid.

use lifegrid_engine::{LockstepWorld, WorldConfig};
use lifegrid_test_utils::random_soup;
use proptest::prelude::*;

fn check_run(rows: u32, cols: u32, density: u32, seed: u64, iterations: u64) {
    let alive = random_soup(rows, cols, density, seed);
    let mut w = LockstepWorld::new(WorldConfig {
        rows,
        cols,
        alive,
        iterations,
    })
    .unwrap();
    assert_eq!(w.live_cells(), w.snapshot().live_count_scan());

    while !w.is_terminated() {
        let result = w.step().unwrap();
        let scanned = result.snapshot.live_count_scan();
        assert_eq!(
            result.metrics.live_cells, scanned,
            "generation {} of {rows}x{cols} seed {seed}",
            result.snapshot.generation()
        );
    }
    assert_eq!(w.live_cells(), w.snapshot().live_count_scan());
}

#[test]
fn dense_soup_stays_consistent() {
    check_run(32, 32, 50, 0xC0FFEE, 100);
}

#[test]
fn narrow_strip_stays_consistent() {
    check_run(2, 40, 45, 3, 60);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn tracker_matches_scan(
        rows in 1u32..16,
        cols in 1u32..16,
        density in 0u32..=100,
        seed in any::<u64>(),
        iterations in 0u64..24,
    ) {
        let alive = random_soup(rows, cols, density, seed);
        let mut w = LockstepWorld::new(WorldConfig { rows, cols, alive, iterations }).unwrap();
        prop_assert_eq!(w.live_cells(), w.snapshot().live_count_scan());
        while !w.is_terminated() {
            let result = w.step().unwrap();
            let births_minus_deaths = result.metrics.births as i64 - result.metrics.deaths as i64;
            prop_assert!(births_minus_deaths.abs() as u64 <= (rows * cols) as u64);
            prop_assert_eq!(result.metrics.live_cells, result.snapshot.live_count_scan());
        }
        prop_assert_eq!(w.generation().0, iterations);
    }
}
