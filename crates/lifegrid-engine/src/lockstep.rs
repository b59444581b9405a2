//! Lockstep (synchronous) simulation world.
//!
//! [`LockstepWorld`] is the primary user-facing API. Each call to
//! [`step()`](LockstepWorld::step) computes and commits one generation and
//! returns a snapshot of the result. [`play()`](LockstepWorld::play) drives
//! the remaining budget in a loop.
//!
//! # Ownership model
//!
//! `LockstepWorld` is [`Send`] so it can be handed to the animation
//! worker. All mutating methods take `&mut self`, and `step()` returns a
//! [`Snapshot`] that borrows from `self`, so the live-cell total and the
//! grid can only be observed between generations.

use std::ops::ControlFlow;
use std::thread;
use std::time::{Duration, Instant};

use lifegrid_arena::{PingPongGrid, Snapshot};
use lifegrid_core::{Generation, StepError};
use lifegrid_space::Torus;

use crate::config::{ConfigError, WorldConfig};
use crate::generation::GenerationEngine;
use crate::metrics::StepMetrics;
use crate::tracker::LiveCellTracker;

// Compile-time assertion: LockstepWorld can move to a worker thread.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<LockstepWorld>();
    }
};

// ── RunState ────────────────────────────────────────────────────

/// Lifecycle of a run: `Initialized → Advancing* → Terminated`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    /// Seeded, no generation computed yet.
    Initialized,
    /// At least one generation computed, budget not yet exhausted.
    Advancing,
    /// Budget exhausted, or the run aborted on a consistency error.
    Terminated,
}

// ── StepResult ──────────────────────────────────────────────────

/// Result of a successful [`LockstepWorld::step()`] call.
pub struct StepResult<'w> {
    /// Read-only snapshot of the grid after this generation.
    pub snapshot: Snapshot<'w>,
    /// Metrics for this generation.
    pub metrics: StepMetrics,
}

// ── LockstepWorld ───────────────────────────────────────────────

/// Single-threaded simulation world.
///
/// # Example
///
/// ```
/// use lifegrid_engine::{LockstepWorld, WorldConfig};
///
/// let mut world = LockstepWorld::new(WorldConfig {
///     rows: 5,
///     cols: 5,
///     alive: vec![(2, 1), (2, 2), (2, 3)],
///     iterations: 2,
/// })
/// .unwrap();
/// world.step().unwrap();
/// assert_eq!(world.live_cells(), 3);
/// ```
pub struct LockstepWorld {
    grid: PingPongGrid,
    engine: GenerationEngine,
    tracker: LiveCellTracker,
    iterations: u64,
    state: RunState,
    last_metrics: StepMetrics,
}

impl LockstepWorld {
    /// Create a world from a [`WorldConfig`].
    ///
    /// Validates the configuration, seeds the grid and initialises the
    /// live-cell tracker from the number of distinct seed cells. A
    /// zero-iteration budget yields a world that is already terminated.
    pub fn new(config: WorldConfig) -> Result<Self, ConfigError> {
        let space = config.validate()?;
        let mut grid = PingPongGrid::new(space);
        let live = grid.seed_alive(config.alive.iter().copied())?;
        if live < config.alive.len() {
            log::warn!(
                "{} duplicate seed cell(s) ignored",
                config.alive.len() - live
            );
        }
        log::info!(
            "world {}x{} seeded with {live} live cells, {} iterations",
            space.rows(),
            space.cols(),
            config.iterations
        );

        let state = if config.iterations == 0 {
            RunState::Terminated
        } else {
            RunState::Initialized
        };
        Ok(Self {
            grid,
            engine: GenerationEngine::new(space),
            tracker: LiveCellTracker::new(live as u64),
            iterations: config.iterations,
            state,
            last_metrics: StepMetrics {
                live_cells: live as u64,
                ..StepMetrics::default()
            },
        })
    }

    /// Compute and commit one generation.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::Terminated`] once the budget is exhausted, and
    /// [`StepError::Consistency`] if the engine detects an internal
    /// inconsistency. A consistency error terminates the run.
    pub fn step(&mut self) -> Result<StepResult<'_>, StepError> {
        if self.state == RunState::Terminated {
            return Err(StepError::Terminated {
                iterations: self.iterations,
            });
        }

        let start = Instant::now();
        let stats = match self.engine.advance(&mut self.grid, &mut self.tracker) {
            Ok(stats) => stats,
            Err(e) => {
                self.state = RunState::Terminated;
                return Err(e);
            }
        };
        let metrics = StepMetrics {
            total_us: start.elapsed().as_micros() as u64,
            births: stats.births,
            deaths: stats.deaths,
            live_cells: self.tracker.value(),
        };

        log::debug!(
            "generation {}: +{} -{} live={}",
            stats.generation,
            metrics.births,
            metrics.deaths,
            metrics.live_cells
        );

        self.state = if stats.generation.0 >= self.iterations {
            RunState::Terminated
        } else {
            RunState::Advancing
        };
        self.last_metrics = metrics.clone();
        Ok(StepResult {
            snapshot: self.grid.snapshot(),
            metrics,
        })
    }

    /// Run the remaining budget.
    ///
    /// `on_generation` is called after each commit; returning
    /// [`ControlFlow::Break`] stops the loop early. When `pacing` is set,
    /// the loop sleeps that long after each generation that does not
    /// break. Returns the number of generations computed by this call.
    pub fn play<F>(
        &mut self,
        pacing: Option<Duration>,
        mut on_generation: F,
    ) -> Result<u64, StepError>
    where
        F: FnMut(&StepResult<'_>) -> ControlFlow<()>,
    {
        let mut computed = 0;
        while !self.is_terminated() {
            let result = self.step()?;
            computed += 1;
            if on_generation(&result).is_break() {
                log::debug!("generation loop stopped early after {computed}");
                break;
            }
            if let Some(delay) = pacing {
                thread::sleep(delay);
            }
        }
        Ok(computed)
    }

    /// Read-only snapshot of the current generation.
    pub fn snapshot(&self) -> Snapshot<'_> {
        self.grid.snapshot()
    }

    /// Live-cell total after the last committed generation.
    pub fn live_cells(&self) -> u64 {
        self.tracker.value()
    }

    /// Last committed generation (0 before the first step).
    pub fn generation(&self) -> Generation {
        self.grid.generation()
    }

    /// Configured iteration budget.
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// Generations still to compute.
    pub fn remaining(&self) -> u64 {
        if self.is_terminated() {
            0
        } else {
            self.iterations - self.generation().0
        }
    }

    /// Current lifecycle state.
    pub fn run_state(&self) -> RunState {
        self.state
    }

    /// Whether no further generation will be computed.
    pub fn is_terminated(&self) -> bool {
        self.state == RunState::Terminated
    }

    /// Metrics from the most recent generation.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }

    /// The grid topology.
    pub fn space(&self) -> &Torus {
        self.grid.space()
    }
}

impl std::fmt::Debug for LockstepWorld {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LockstepWorld")
            .field("space", self.grid.space())
            .field("generation", &self.grid.generation())
            .field("iterations", &self.iterations)
            .field("live_cells", &self.tracker.value())
            .field("state", &self.state)
            .finish()
    }
}
