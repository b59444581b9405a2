//! Error types for space operations.

use std::fmt;

/// Errors arising from space construction or coordinate checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpaceError {
    /// A coordinate is outside the bounds of the space.
    CoordOutOfBounds {
        /// Row of the offending coordinate.
        row: u32,
        /// Column of the offending coordinate.
        col: u32,
        /// Human-readable description of the valid range.
        bounds: String,
    },
    /// Attempted to construct a space with zero cells.
    EmptySpace,
    /// A dimension exceeds the maximum supported size.
    DimensionTooLarge {
        /// Which dimension (e.g. "rows", "cols").
        name: &'static str,
        /// The requested value.
        value: u32,
        /// The maximum allowed value.
        max: u32,
    },
    /// `rows * cols` exceeds the maximum supported cell count.
    CellCountOverflow {
        /// Requested rows.
        rows: u32,
        /// Requested columns.
        cols: u32,
        /// The maximum allowed cell count.
        max: usize,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CoordOutOfBounds { row, col, bounds } => {
                write!(f, "coordinate ({row}, {col}) out of bounds: {bounds}")
            }
            Self::EmptySpace => write!(f, "space must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum {max}")
            }
            Self::CellCountOverflow { rows, cols, max } => {
                write!(f, "cell count {rows} x {cols} exceeds maximum {max}")
            }
        }
    }
}

impl std::error::Error for SpaceError {}
