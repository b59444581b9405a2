//! Torus compliance test helpers.
//!
//! These functions verify the invariants the engine relies on: a fixed
//! eight-entry neighbourhood, neighbour symmetry, and a complete,
//! deterministic canonical ordering.

use crate::torus::Torus;
use indexmap::IndexSet;

/// Assert that `b in neighbours(a)` implies `a in neighbours(b)`.
pub fn assert_neighbours_symmetric(space: &Torus) {
    for (r, c) in space.canonical_ordering() {
        for (nr, nc) in space.neighbours(r, c) {
            assert!(
                space.neighbours(nr, nc).contains(&(r, c)),
                "neighbour symmetry violated: ({nr}, {nc}) in N({r}, {c}) but not vice versa"
            );
        }
    }
}

/// Assert that no cell lists itself as a neighbour when both axes are
/// at least 3 long.
pub fn assert_no_self_neighbours(space: &Torus) {
    if space.rows() < 3 || space.cols() < 3 {
        return;
    }
    for (r, c) in space.canonical_ordering() {
        assert!(
            !space.neighbours(r, c).contains(&(r, c)),
            "({r}, {c}) is its own neighbour on a {}x{} torus",
            space.rows(),
            space.cols()
        );
    }
}

/// Assert that on a grid of at least 3x3 every neighbourhood has 8
/// distinct cells.
pub fn assert_neighbourhoods_distinct(space: &Torus) {
    if space.rows() < 3 || space.cols() < 3 {
        return;
    }
    for (r, c) in space.canonical_ordering() {
        let unique: IndexSet<_> = space.neighbours(r, c).into_iter().collect();
        assert_eq!(unique.len(), 8, "N({r}, {c}) has duplicates");
    }
}

/// Assert that two calls to `canonical_ordering` return the same result.
pub fn assert_canonical_ordering_deterministic(space: &Torus) {
    let a: Vec<_> = space.canonical_ordering().collect();
    let b: Vec<_> = space.canonical_ordering().collect();
    assert_eq!(a, b, "canonical_ordering is non-deterministic");
}

/// Assert that `canonical_ordering` returns exactly `cell_count` unique
/// coords, each at its own flat index.
pub fn assert_canonical_ordering_complete(space: &Torus) {
    let ordering: IndexSet<_> = space.canonical_ordering().collect();
    assert_eq!(
        ordering.len(),
        space.cell_count(),
        "canonical_ordering has {} unique cells, expected {}",
        ordering.len(),
        space.cell_count()
    );
    for (i, &(r, c)) in ordering.iter().enumerate() {
        assert_eq!(space.index(r, c), i, "index({r}, {c}) != rank {i}");
        assert_eq!(space.coord(i), (r, c));
    }
}

/// Run all compliance checks on a torus.
pub fn run_full_compliance(space: &Torus) {
    assert_neighbours_symmetric(space);
    assert_no_self_neighbours(space);
    assert_neighbourhoods_distinct(space);
    assert_canonical_ordering_deterministic(space);
    assert_canonical_ordering_complete(space);
}
