//! Strongly-typed identifiers.

use std::fmt;

/// Monotonically increasing generation counter.
///
/// `Generation(0)` is the seeded initial state. Incremented each time the
/// grid commits a fully computed next buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Generation(pub u64);

impl Generation {
    /// The seeded state before any generation has run.
    pub const INITIAL: Self = Self(0);

    /// The generation that follows this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Generation {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
