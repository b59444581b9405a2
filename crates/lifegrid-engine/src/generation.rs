//! Generation engine: one application of the B3/S23 rule to every cell.
//!
//! [`GenerationEngine::advance`] reads only the settled current buffer,
//! writes the new state of every cell into the next buffer, updates the
//! [`LiveCellTracker`] once per transition, and commits exactly once.
//!
//! The tracker is a running total. A missed or doubled transition would
//! corrupt every later count, so each cell is visited exactly once per
//! generation in canonical order.

use lifegrid_arena::PingPongGrid;
use lifegrid_core::{CellReader, CellState, Generation, StepError};
use lifegrid_space::Torus;

use crate::neighbours::count_live_neighbours;
use crate::tracker::LiveCellTracker;

/// Transitions observed while computing one generation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TransitionStats {
    /// The generation that was committed.
    pub generation: Generation,
    /// Dead cells that became Alive.
    pub births: u64,
    /// Alive cells that became Dead.
    pub deaths: u64,
}

/// The standard Life rule.
///
/// | Current | Live neighbours | Next  |
/// |---------|-----------------|-------|
/// | Alive   | 2 or 3          | Alive |
/// | Alive   | otherwise       | Dead  |
/// | Dead    | exactly 3       | Alive |
/// | Dead    | otherwise       | Dead  |
pub fn next_state(current: CellState, live_neighbours: u8) -> CellState {
    match (current, live_neighbours) {
        (CellState::Alive, 2) | (CellState::Alive, 3) => CellState::Alive,
        (CellState::Dead, 3) => CellState::Alive,
        _ => CellState::Dead,
    }
}

/// Applies the Life rule over a fixed torus.
#[derive(Clone, Copy, Debug)]
pub struct GenerationEngine {
    space: Torus,
}

impl GenerationEngine {
    /// Create an engine for grids on `space`.
    pub fn new(space: Torus) -> Self {
        Self { space }
    }

    /// Topology this engine evaluates.
    pub fn space(&self) -> &Torus {
        &self.space
    }

    /// Compute and commit one generation.
    ///
    /// Every cell's next state is written explicitly, unchanged cells
    /// included. Returns `Err(StepError::Consistency)` if the tracker would
    /// underflow or the grid rejects the commit; the run must then abort,
    /// since the grid and the tracker no longer agree.
    ///
    /// # Panics
    ///
    /// Panics if `grid` was built on a different topology.
    pub fn advance(
        &self,
        grid: &mut PingPongGrid,
        tracker: &mut LiveCellTracker,
    ) -> Result<TransitionStats, StepError> {
        assert_eq!(
            grid.space(),
            &self.space,
            "grid topology does not match engine topology"
        );
        let computing = grid.generation().next();
        let mut births = 0;
        let mut deaths = 0;

        {
            let mut guard = grid.begin_generation();
            for (row, col) in self.space.canonical_ordering() {
                let current = guard.current.cell(row, col);
                let n = count_live_neighbours(&self.space, &guard.current, row, col);
                let next = next_state(current, n);
                match (current, next) {
                    (CellState::Alive, CellState::Dead) => {
                        tracker.decrement(computing)?;
                        deaths += 1;
                    }
                    (CellState::Dead, CellState::Alive) => {
                        tracker.increment();
                        births += 1;
                    }
                    _ => {}
                }
                guard.next.set(row, col, next);
            }
        }

        let generation = grid.commit()?;
        Ok(TransitionStats {
            generation,
            births,
            deaths,
        })
    }
}
