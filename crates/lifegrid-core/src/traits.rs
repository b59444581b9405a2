//! Core abstraction trait for reading grid state.

use crate::cell::CellState;

/// Read-only access to a settled grid buffer.
///
/// Implemented by arena views so that neighbour counting and rendering do
/// not depend on the concrete buffer layout. Implementors only ever expose
/// a fully committed generation.
pub trait CellReader {
    /// Number of rows.
    fn rows(&self) -> u32;

    /// Number of columns.
    fn cols(&self) -> u32;

    /// State of the cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside `[0, rows) x [0, cols)`. Callers
    /// wrap coordinates before reading.
    fn cell(&self, row: u32, col: u32) -> CellState;
}
