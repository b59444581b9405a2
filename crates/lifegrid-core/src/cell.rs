//! Binary cell state.

use std::fmt;

/// State of a single grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    /// The cell is empty.
    #[default]
    Dead,
    /// The cell holds a live organism.
    Alive,
}

impl CellState {
    /// `true` for [`CellState::Alive`].
    pub fn is_alive(self) -> bool {
        matches!(self, Self::Alive)
    }

    /// The ASCII glyph used by frame dumps: `@` alive, `.` dead.
    pub fn glyph(self) -> char {
        match self {
            Self::Alive => '@',
            Self::Dead => '.',
        }
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive {
            Self::Alive
        } else {
            Self::Dead
        }
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_dead() {
        assert_eq!(CellState::default(), CellState::Dead);
    }

    #[test]
    fn glyphs_match_dump_format() {
        assert_eq!(CellState::Alive.to_string(), "@");
        assert_eq!(CellState::Dead.to_string(), ".");
    }

    #[test]
    fn from_bool() {
        assert!(CellState::from(true).is_alive());
        assert!(!CellState::from(false).is_alive());
    }
}
