//! Simulation engine for lifegrid.
//!
//! Advances a B3/S23 grid one generation at a time and hands generations
//! to a renderer running on its own schedule.
//!
//! - [`count_live_neighbours`] evaluates the toroidal Moore neighbourhood.
//! - [`GenerationEngine`] applies the rule to every cell and commits once.
//! - [`LiveCellTracker`] keeps the incremental live-cell total.
//! - [`LockstepWorld`] owns all of the above and runs the iteration budget.
//! - [`AnimationBridge`] moves encoded frames from a worker thread to the
//!   renderer over a single-slot channel.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod animation;
pub mod config;
pub mod generation;
pub mod lockstep;
pub mod metrics;
pub mod neighbours;
pub mod render;
pub mod tracker;

pub use animation::{
    animate, AnimationBridge, AnimationHandle, BridgeError, FrameSender, RendererDisconnected,
};
pub use config::{ConfigError, OutputMode, RunConfig, WorldConfig, DEFAULT_PACING};
pub use generation::{next_state, GenerationEngine, TransitionStats};
pub use lockstep::{LockstepWorld, RunState, StepResult};
pub use metrics::StepMetrics;
pub use neighbours::count_live_neighbours;
pub use render::{Color3, Frame, FrameBuffer, FrameDisplay, Palette, RenderError};
pub use tracker::LiveCellTracker;
