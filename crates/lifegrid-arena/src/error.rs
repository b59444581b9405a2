//! Arena-specific error types.

use std::error::Error;
use std::fmt;

use lifegrid_core::Generation;
use lifegrid_space::SpaceError;

/// Errors that can occur while seeding the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// A seed coordinate is outside the grid.
    CellOutOfBounds(SpaceError),
    /// Seeding was attempted after the first generation committed.
    AlreadyAdvanced {
        /// The grid's current generation.
        generation: Generation,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CellOutOfBounds(e) => write!(f, "seed cell rejected: {e}"),
            Self::AlreadyAdvanced { generation } => {
                write!(
                    f,
                    "grid can only be seeded before the first generation (now at {generation})"
                )
            }
        }
    }
}

impl Error for ArenaError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::CellOutOfBounds(e) => Some(e),
            Self::AlreadyAdvanced { .. } => None,
        }
    }
}

impl From<SpaceError> for ArenaError {
    fn from(e: SpaceError) -> Self {
        Self::CellOutOfBounds(e)
    }
}
