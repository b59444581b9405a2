//! Double-buffered cell storage for lifegrid simulations.
//!
//! # Architecture
//!
//! The grid uses a ping-pong design:
//!
//! ```text
//! PingPongGrid
//! ├── buffer_a: Vec<CellState>  ←── current (even generations) / next (odd)
//! ├── buffer_b: Vec<CellState>  ←── next (even generations) / current (odd)
//! └── written: Vec<bool>        ←── next-buffer coverage for this generation
//! ```
//!
//! Rule evaluation reads only the current buffer through a [`Snapshot`]
//! and writes only the next buffer through a [`NextWriter`]; the two are
//! handed out together by [`PingPongGrid::begin_generation`] as disjoint
//! borrows. [`PingPongGrid::commit`] swaps the roles of the buffers and
//! refuses to do so unless every cell of the next buffer was written.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod pingpong;
pub mod read;
pub mod write;

pub use error::ArenaError;
pub use pingpong::{Buffer, GenerationGuard, PingPongGrid};
pub use read::Snapshot;
pub use write::NextWriter;
