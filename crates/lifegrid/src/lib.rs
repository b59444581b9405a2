//! lifegrid: Conway's Game of Life (B3/S23) on a toroidal grid.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all lifegrid sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use lifegrid::prelude::*;
//!
//! // A glider on an 8x8 torus.
//! let config = WorldConfig {
//!     rows: 8,
//!     cols: 8,
//!     alive: vec![(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
//!     iterations: 4,
//! };
//! let mut world = LockstepWorld::new(config).unwrap();
//! while !world.is_terminated() {
//!     world.step().unwrap();
//! }
//! assert_eq!(world.generation(), Generation(4));
//! assert_eq!(
//!     world.snapshot().alive_cells(),
//!     vec![(1, 2), (2, 3), (3, 1), (3, 2), (3, 3)]
//! );
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `lifegrid-core` | `CellState`, `Generation`, `CellReader`, core errors |
//! | [`space`] | `lifegrid-space` | `Torus` topology and axis wrap |
//! | [`arena`] | `lifegrid-arena` | `PingPongGrid`, `Snapshot`, generation guard |
//! | [`engine`] | `lifegrid-engine` | Rule engine, lockstep world, animation bridge |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Cell state, generation ids, and core errors (`lifegrid-core`).
pub use lifegrid_core as types;

/// Toroidal topology (`lifegrid-space`).
pub use lifegrid_space as space;

/// Double-buffered grid storage (`lifegrid-arena`).
///
/// [`arena::PingPongGrid`] owns both buffers; [`arena::Snapshot`] is the
/// read view of the current generation.
pub use lifegrid_arena as arena;

/// Generation engine and run loop (`lifegrid-engine`).
///
/// [`engine::LockstepWorld`] for stepping a run, [`engine::AnimationBridge`]
/// for feeding a renderer from a worker thread.
pub use lifegrid_engine as engine;

/// Common imports for typical lifegrid usage.
pub mod prelude {
    // Core types
    pub use lifegrid_core::{CellReader, CellState, Generation};

    // Errors
    pub use lifegrid_core::{ConsistencyError, StepError};

    // Space and storage
    pub use lifegrid_arena::{PingPongGrid, Snapshot};
    pub use lifegrid_space::Torus;

    // Engine
    pub use lifegrid_engine::{
        AnimationBridge, ConfigError, FrameDisplay, LockstepWorld, OutputMode, Palette,
        RunConfig, StepMetrics, StepResult, WorldConfig,
    };
}
