//! Integration test: known Life patterns evolve as expected on the torus.

use lifegrid_core::Generation;
use lifegrid_engine::{LockstepWorld, WorldConfig};
use lifegrid_test_utils::fixtures::{
    translate, Pattern, BLINKER_HORIZONTAL, BLINKER_VERTICAL, BLOCK, GLIDER,
};
use lifegrid_test_utils::picture;

fn world(rows: u32, cols: u32, alive: Vec<(u32, u32)>, iterations: u64) -> LockstepWorld {
    LockstepWorld::new(WorldConfig {
        rows,
        cols,
        alive,
        iterations,
    })
    .unwrap()
}

fn run(w: &mut LockstepWorld, n: u64) {
    for _ in 0..n {
        w.step().unwrap();
    }
}

fn placed(p: &Pattern, row: u32, col: u32, rows: u32, cols: u32) -> Vec<(u32, u32)> {
    p.at(row, col, rows, cols)
}

// ── Still lifes and oscillators ─────────────────────────────────────

#[test]
fn block_is_a_still_life() {
    let start = placed(&BLOCK, 2, 2, 6, 6);
    let mut w = world(6, 6, start.clone(), 5);
    for _ in 0..5 {
        let result = w.step().unwrap();
        assert_eq!(result.snapshot.alive_cells(), start);
        assert_eq!(result.metrics.live_cells, 4);
    }
}

#[test]
fn block_across_the_corner_is_still() {
    // A block split over all four corners is still a block on the torus.
    let start = placed(&BLOCK, 5, 5, 6, 6);
    assert_eq!(start, vec![(0, 0), (0, 5), (5, 0), (5, 5)]);
    let mut w = world(6, 6, start.clone(), 3);
    run(&mut w, 3);
    assert_eq!(w.snapshot().alive_cells(), start);
}

#[test]
fn blinker_has_period_two() {
    let horizontal = placed(&BLINKER_HORIZONTAL, 1, 1, 5, 5);
    let vertical = placed(&BLINKER_VERTICAL, 1, 1, 5, 5);
    let mut w = world(5, 5, horizontal.clone(), 4);

    w.step().unwrap();
    assert_eq!(w.snapshot().alive_cells(), vertical);
    w.step().unwrap();
    assert_eq!(w.snapshot().alive_cells(), horizontal);
    run(&mut w, 2);
    assert_eq!(w.snapshot().alive_cells(), horizontal);
    assert_eq!(w.live_cells(), 3);
}

#[test]
fn empty_grid_stays_empty() {
    let mut w = world(7, 3, vec![], 10);
    run(&mut w, 10);
    assert_eq!(w.live_cells(), 0);
    assert_eq!(w.snapshot().live_count_scan(), 0);
    assert_eq!(w.generation(), Generation(10));
}

// ── Gliders ─────────────────────────────────────────────────────────

#[test]
fn glider_translates_diagonally() {
    let start = placed(&GLIDER, 1, 1, 8, 8);
    let mut w = world(8, 8, start.clone(), 4);
    run(&mut w, GLIDER.period);
    let expected = translate(&start, 1, 1, 8, 8);
    let snap = w.snapshot();
    assert_eq!(snap.alive_cells(), expected, "\n{}", picture(&snap));
    assert_eq!(w.live_cells(), 5);
}

#[test]
fn glider_crosses_the_wrap() {
    // Start against the bottom-right edges so every phase straddles them.
    let start = placed(&GLIDER, 6, 6, 8, 8);
    let mut w = world(8, 8, start.clone(), 8);
    run(&mut w, 4);
    assert_eq!(w.snapshot().alive_cells(), translate(&start, 1, 1, 8, 8));
    run(&mut w, 4);
    assert_eq!(w.snapshot().alive_cells(), translate(&start, 2, 2, 8, 8));
}

#[test]
fn glider_returns_home_after_full_orbit() {
    // On an 8x8 torus the glider needs 32 generations to come back.
    let start = placed(&GLIDER, 0, 0, 8, 8);
    let mut w = world(8, 8, start.clone(), 32);
    run(&mut w, 32);
    assert_eq!(w.snapshot().alive_cells(), start);
    assert_eq!(w.live_cells(), 5);
}

// ── Degenerate tori ─────────────────────────────────────────────────

#[test]
fn single_cell_torus_dies() {
    // The lone cell is its own eight neighbours: overcrowded.
    let mut w = world(1, 1, vec![(0, 0)], 1);
    run(&mut w, 1);
    assert_eq!(w.live_cells(), 0);
}

#[test]
fn single_row_torus() {
    // With one row, the row offsets wrap back onto the same row: a cell
    // sees each horizontal neighbour three times and itself twice.
    let mut w = world(1, 5, vec![(0, 2)], 1);
    let result = w.step().unwrap();
    assert_eq!(result.snapshot.alive_cells(), vec![(0, 1), (0, 2), (0, 3)]);
}
