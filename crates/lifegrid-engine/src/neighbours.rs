//! Moore-neighbourhood live-cell counting with toroidal wrap.

use lifegrid_core::CellReader;
use lifegrid_space::Torus;

/// Count Alive cells among the eight Moore neighbours of `(row, col)`.
///
/// Each axis is wrapped independently: one step before index 0 is the
/// last index, one step past the end is index 0. The result is always in
/// `[0, 8]`. The reader must hold the settled pre-generation state.
pub fn count_live_neighbours<R>(space: &Torus, reader: &R, row: u32, col: u32) -> u8
where
    R: CellReader + ?Sized,
{
    debug_assert_eq!(space.rows(), reader.rows());
    debug_assert_eq!(space.cols(), reader.cols());
    space
        .neighbours(row, col)
        .into_iter()
        .filter(|&(r, c)| reader.cell(r, c).is_alive())
        .count() as u8
}
