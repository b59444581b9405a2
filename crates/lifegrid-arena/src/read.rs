//! Read-only view of a committed generation.

use lifegrid_core::{CellReader, CellState, Generation};
use lifegrid_space::Torus;

/// Borrowed view of the grid's current buffer.
///
/// A `Snapshot` only ever points at a fully committed buffer: the
/// [`PingPongGrid`](crate::PingPongGrid) hands out snapshots between
/// generations, and the generation guard pairs one with a writer for the
/// other buffer.
#[derive(Clone, Copy, Debug)]
pub struct Snapshot<'a> {
    cells: &'a [CellState],
    space: Torus,
    generation: Generation,
}

impl<'a> Snapshot<'a> {
    pub(crate) fn new(cells: &'a [CellState], space: Torus, generation: Generation) -> Self {
        debug_assert_eq!(cells.len(), space.cell_count());
        Self {
            cells,
            space,
            generation,
        }
    }

    /// The generation this buffer holds.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Topology of the underlying grid.
    pub fn space(&self) -> &Torus {
        &self.space
    }

    /// State at `(row, col)`, or `None` if out of bounds.
    pub fn get(&self, row: u32, col: u32) -> Option<CellState> {
        self.space
            .contains(row, col)
            .then(|| self.cells[self.space.index(row, col)])
    }

    /// One row of cells, left to right.
    ///
    /// # Panics
    ///
    /// Panics if `row >= rows`.
    pub fn row(&self, row: u32) -> &'a [CellState] {
        assert!(row < self.space.rows(), "row {row} out of bounds");
        let cols = self.space.cols() as usize;
        let start = row as usize * cols;
        &self.cells[start..start + cols]
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &'a [CellState] {
        self.cells
    }

    /// Count Alive cells by scanning the whole buffer.
    ///
    /// O(rows * cols). The engine never uses this for its running total;
    /// it exists for verification and reporting.
    pub fn live_count_scan(&self) -> u64 {
        self.cells.iter().filter(|c| c.is_alive()).count() as u64
    }

    /// Coordinates of every Alive cell in row-major order.
    pub fn alive_cells(&self) -> Vec<(u32, u32)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_alive())
            .map(|(i, _)| self.space.coord(i))
            .collect()
    }
}

impl CellReader for Snapshot<'_> {
    fn rows(&self) -> u32 {
        self.space.rows()
    }

    fn cols(&self) -> u32 {
        self.space.cols()
    }

    fn cell(&self, row: u32, col: u32) -> CellState {
        assert!(
            self.space.contains(row, col),
            "cell ({row}, {col}) outside {}x{} grid",
            self.space.rows(),
            self.space.cols()
        );
        self.cells[self.space.index(row, col)]
    }
}
