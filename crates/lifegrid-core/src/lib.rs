//! Core types and traits for the lifegrid simulation.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the workspace: cell
//! state, generation IDs, the [`CellReader`] trait, and error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod id;
pub mod traits;

pub use cell::CellState;
pub use error::{ConsistencyError, StepError};
pub use id::Generation;
pub use traits::CellReader;
