//! Incrementally maintained live-cell total.

use lifegrid_core::{ConsistencyError, Generation};

/// Running count of Alive cells, owned by one simulation instance.
///
/// Updated once per cell transition by the generation engine; never
/// recomputed by scanning. After each committed generation it equals the
/// number of Alive cells in the current buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LiveCellTracker {
    live: u64,
}

impl LiveCellTracker {
    /// A tracker starting at `live`.
    pub fn new(live: u64) -> Self {
        Self { live }
    }

    /// Record a birth.
    pub fn increment(&mut self) {
        self.live += 1;
    }

    /// Record a death.
    ///
    /// Returns `Err(ConsistencyError::CounterUnderflow)` if the count is
    /// already zero; the count is left unchanged.
    pub fn decrement(&mut self, generation: Generation) -> Result<(), ConsistencyError> {
        self.live = self
            .live
            .checked_sub(1)
            .ok_or(ConsistencyError::CounterUnderflow { generation })?;
        Ok(())
    }

    /// Current total.
    pub fn value(&self) -> u64 {
        self.live
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increments_and_decrements() {
        let mut t = LiveCellTracker::new(2);
        t.increment();
        t.decrement(Generation(1)).unwrap();
        t.decrement(Generation(1)).unwrap();
        assert_eq!(t.value(), 1);
    }

    #[test]
    fn decrement_past_zero_is_an_error() {
        let mut t = LiveCellTracker::default();
        assert_eq!(
            t.decrement(Generation(7)),
            Err(ConsistencyError::CounterUnderflow {
                generation: Generation(7)
            })
        );
        assert_eq!(t.value(), 0);
    }
}
