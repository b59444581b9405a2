//! 2D torus with 8-connected (Moore) neighbourhood.

use crate::error::SpaceError;
use crate::wrap::wrap_axis;

/// All 8 Moore offsets in row-major scan order: NW, N, NE, W, E, SW, S, SE.
pub const MOORE_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A two-dimensional rectangular grid with periodic boundaries.
///
/// Each cell has coordinate `(row, col)`. Neighbours are the eight
/// cardinal and diagonal cells, with both axes wrapped so that the grid's
/// opposite edges are adjacent. Dimensions are fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Torus {
    rows: u32,
    cols: u32,
}

impl Torus {
    /// Maximum dimension size: offsets are applied in signed arithmetic.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Maximum number of cells. Every grid holds several buffers of this
    /// length, so larger requests are refused before anything is allocated.
    pub const MAX_CELLS: usize = 1 << 28;

    /// Create a torus with `rows * cols` cells.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if either dimension is 0,
    /// `Err(SpaceError::DimensionTooLarge)` if either exceeds `i32::MAX`,
    /// or `Err(SpaceError::CellCountOverflow)` if `rows * cols` exceeds
    /// [`MAX_CELLS`](Self::MAX_CELLS).
    pub fn new(rows: u32, cols: u32) -> Result<Self, SpaceError> {
        if rows == 0 || cols == 0 {
            return Err(SpaceError::EmptySpace);
        }
        if rows > Self::MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                name: "rows",
                value: rows,
                max: Self::MAX_DIM,
            });
        }
        if cols > Self::MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                name: "cols",
                value: cols,
                max: Self::MAX_DIM,
            });
        }
        let cells = u64::from(rows) * u64::from(cols);
        if cells > Self::MAX_CELLS as u64 {
            return Err(SpaceError::CellCountOverflow {
                rows,
                cols,
                max: Self::MAX_CELLS,
            });
        }
        Ok(Self { rows, cols })
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    /// Always returns `false`: construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `(row, col)` lies inside the grid.
    pub fn contains(&self, row: u32, col: u32) -> bool {
        row < self.rows && col < self.cols
    }

    /// Check that `(row, col)` is in bounds.
    pub fn check_bounds(&self, row: u32, col: u32) -> Result<(), SpaceError> {
        if self.contains(row, col) {
            Ok(())
        } else {
            Err(SpaceError::CoordOutOfBounds {
                row,
                col,
                bounds: format!("[0, {}) x [0, {})", self.rows, self.cols),
            })
        }
    }

    /// Row-major flat index of an in-bounds coordinate.
    pub fn index(&self, row: u32, col: u32) -> usize {
        debug_assert!(self.contains(row, col));
        (row as usize) * (self.cols as usize) + col as usize
    }

    /// Inverse of [`index`](Self::index).
    pub fn coord(&self, index: usize) -> (u32, u32) {
        let cols = self.cols as usize;
        ((index / cols) as u32, (index % cols) as u32)
    }

    /// The eight Moore neighbours of `(row, col)` with toroidal wrap.
    ///
    /// Returned in [`MOORE_OFFSETS`] order. On axes of length 1 or 2 the
    /// same cell may appear more than once (possibly the cell itself);
    /// each occurrence counts separately.
    pub fn neighbours(&self, row: u32, col: u32) -> [(u32, u32); 8] {
        let r = i64::from(row);
        let c = i64::from(col);
        MOORE_OFFSETS.map(|(dr, dc)| {
            (
                wrap_axis(r + i64::from(dr), self.rows),
                wrap_axis(c + i64::from(dc), self.cols),
            )
        })
    }

    /// All cells in row-major canonical order:
    /// `(0,0), (0,1), ..., (rows-1, cols-1)`.
    pub fn canonical_ordering(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        (0..self.rows).flat_map(move |r| (0..self.cols).map(move |c| (r, c)))
    }
}
