//! Error types shared across the lifegrid workspace.
//!
//! Consistency errors signal a defect in the engine, not a recoverable
//! condition; callers abort the run when they see one.

use std::error::Error;
use std::fmt;

use crate::id::Generation;

/// Internal consistency violations detected by the grid or the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConsistencyError {
    /// The live-cell counter would have gone below zero.
    CounterUnderflow {
        /// Generation being computed when the underflow was detected.
        generation: Generation,
    },
    /// The current and next buffers have different lengths at commit.
    BufferMismatch {
        /// Length of the current buffer.
        current: usize,
        /// Length of the next buffer.
        next: usize,
    },
    /// Commit was attempted before every cell of the next buffer was
    /// written for this generation.
    IncompleteGeneration {
        /// Distinct cells written since the previous commit.
        written: usize,
        /// Total cells in the grid.
        expected: usize,
    },
}

impl fmt::Display for ConsistencyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CounterUnderflow { generation } => {
                write!(f, "live-cell counter underflow in generation {generation}")
            }
            Self::BufferMismatch { current, next } => {
                write!(
                    f,
                    "buffer size mismatch at commit: current {current}, next {next}"
                )
            }
            Self::IncompleteGeneration { written, expected } => {
                write!(
                    f,
                    "commit with {written} of {expected} next-buffer cells written"
                )
            }
        }
    }
}

impl Error for ConsistencyError {}

/// Errors from advancing the simulation by one generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepError {
    /// The grid or counter failed an internal consistency check.
    Consistency(ConsistencyError),
    /// The iteration budget is exhausted; the run has terminated.
    Terminated {
        /// Number of generations the run was configured for.
        iterations: u64,
    },
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Consistency(e) => write!(f, "internal consistency error: {e}"),
            Self::Terminated { iterations } => {
                write!(f, "run terminated after {iterations} generations")
            }
        }
    }
}

impl Error for StepError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Consistency(e) => Some(e),
            Self::Terminated { .. } => None,
        }
    }
}

impl From<ConsistencyError> for StepError {
    fn from(e: ConsistencyError) -> Self {
        Self::Consistency(e)
    }
}
