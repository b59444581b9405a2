//! Toroidal grid topology for lifegrid simulations.
//!
//! This crate defines [`Torus`], a fixed-size rectangular lattice whose
//! opposite edges are adjacent, and the 8-connected Moore neighbourhood
//! used by the Life rule. Coordinates are `(row, col)` pairs with row 0
//! at the top.
//!
//! Neighbour lookups never fall outside the grid: each axis is wrapped
//! independently with [`wrap_axis`], so a cell on the top edge sees the
//! bottom edge as its northern neighbours.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod torus;
pub mod wrap;

#[cfg(test)]
pub(crate) mod compliance;

pub use error::SpaceError;
pub use torus::{Torus, MOORE_OFFSETS};
pub use wrap::wrap_axis;
