//! Write access to the next buffer during a generation.

use lifegrid_core::CellState;
use lifegrid_space::Torus;

/// Mutable access to the next buffer, tracking which cells were written.
///
/// Created by [`PingPongGrid::begin_generation`](crate::PingPongGrid::begin_generation)
/// as part of a [`GenerationGuard`](crate::GenerationGuard). Writes are
/// counted per distinct cell so that commit can verify full coverage.
pub struct NextWriter<'a> {
    cells: &'a mut [CellState],
    written: &'a mut [bool],
    written_count: &'a mut usize,
    space: Torus,
}

impl<'a> NextWriter<'a> {
    pub(crate) fn new(
        cells: &'a mut [CellState],
        written: &'a mut [bool],
        written_count: &'a mut usize,
        space: Torus,
    ) -> Self {
        Self {
            cells,
            written,
            written_count,
            space,
        }
    }

    /// Write `state` into the next buffer at `(row, col)`.
    ///
    /// Writing the same cell twice keeps the last value and counts once.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of bounds.
    pub fn set(&mut self, row: u32, col: u32, state: CellState) {
        assert!(
            self.space.contains(row, col),
            "next-buffer write ({row}, {col}) outside {}x{} grid",
            self.space.rows(),
            self.space.cols()
        );
        let idx = self.space.index(row, col);
        self.cells[idx] = state;
        if !self.written[idx] {
            self.written[idx] = true;
            *self.written_count += 1;
        }
    }

    /// Distinct cells written so far this generation.
    pub fn written(&self) -> usize {
        *self.written_count
    }
}
