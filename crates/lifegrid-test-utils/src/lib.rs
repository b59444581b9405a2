//! Test utilities for lifegrid development.
//!
//! Provides well-known Life patterns ([`fixtures`]), seeded random soups
//! ([`soup`]), and helpers for building and inspecting grids.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod soup;

use lifegrid_arena::{PingPongGrid, Snapshot};
use lifegrid_core::CellState;
use lifegrid_space::Torus;

pub use fixtures::Pattern;
pub use soup::random_soup;

/// A grid on `rows x cols` with `alive` seeded.
///
/// # Panics
///
/// Panics on invalid dimensions or out-of-range cells.
pub fn grid_with(rows: u32, cols: u32, alive: &[(u32, u32)]) -> PingPongGrid {
    let space = Torus::new(rows, cols).expect("valid test dimensions");
    let mut grid = PingPongGrid::new(space);
    grid.seed_alive(alive.iter().copied())
        .expect("test cells inside grid");
    grid
}

/// Compact `@`/`.` picture of a snapshot, one line per row.
///
/// Useful in assertion messages.
pub fn picture(snapshot: &Snapshot<'_>) -> String {
    let rows = snapshot.space().rows();
    let mut out = String::new();
    for r in 0..rows {
        out.extend(snapshot.row(r).iter().map(|s: &CellState| s.glyph()));
        out.push('\n');
    }
    out
}
