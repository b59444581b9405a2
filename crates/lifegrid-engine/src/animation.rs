//! Hand-off of successive generations to a renderer on another thread.
//!
//! ```text
//!   worker thread ("lifegrid-gen")            renderer thread (caller)
//!   ─────────────────────────────             ────────────────────────
//!   run_fn(context, &mut FrameSender)         AnimationHandle::run_event_loop
//!     loop:                                     loop up to N frames:
//!       step world                                frame_rx.recv()
//!       paint frame_buffer_mut()                  display.present(&frame)
//!       signal_frame_ready() ──[bounded(1)]──▶
//!                                               drop receiver, join worker
//! ```
//!
//! Each signalled frame is an owned copy of the worker's surface, so the
//! renderer can never observe a frame that is still being painted. When the
//! renderer stops (budget reached or display failure) it drops the
//! receiver; the worker's next `signal_frame_ready` fails and the worker
//! winds down. The bridge itself never sleeps; pacing belongs to `run_fn`.

use std::error::Error;
use std::fmt;
use std::ops::ControlFlow;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use lifegrid_core::{Generation, StepError};

use crate::lockstep::LockstepWorld;
use crate::render::{Frame, FrameBuffer, FrameDisplay, Palette, RenderError};

const WORKER_THREAD_NAME: &str = "lifegrid-gen";

// ── Errors ──────────────────────────────────────────────────────

/// Failures of the animation bridge.
#[derive(Debug)]
pub enum BridgeError {
    /// The worker thread could not be created. Fatal.
    WorkerSpawnFailed {
        /// OS-level reason.
        reason: String,
    },
    /// The worker thread panicked.
    WorkerPanicked,
    /// The display failed to present a frame.
    Render(RenderError),
    /// The simulation failed on the worker.
    Step(StepError),
}

impl fmt::Display for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WorkerSpawnFailed { reason } => {
                write!(f, "could not start generation worker: {reason}")
            }
            Self::WorkerPanicked => write!(f, "generation worker panicked"),
            Self::Render(e) => write!(f, "render: {e}"),
            Self::Step(e) => write!(f, "step: {e}"),
        }
    }
}

impl Error for BridgeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Render(e) => Some(e),
            Self::Step(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RenderError> for BridgeError {
    fn from(e: RenderError) -> Self {
        Self::Render(e)
    }
}

impl From<StepError> for BridgeError {
    fn from(e: StepError) -> Self {
        Self::Step(e)
    }
}

/// The renderer has stopped accepting frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RendererDisconnected;

impl fmt::Display for RendererDisconnected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "renderer disconnected")
    }
}

impl Error for RendererDisconnected {}

// ── FrameSender ─────────────────────────────────────────────────

/// Worker-side end of the bridge.
///
/// Owns the surface the worker paints into; every
/// [`signal_frame_ready`](Self::signal_frame_ready) ships a copy of it.
pub struct FrameSender {
    buffer: FrameBuffer,
    frame_tx: Sender<Frame>,
}

impl FrameSender {
    /// The surface to paint the next frame into.
    pub fn frame_buffer_mut(&mut self) -> &mut FrameBuffer {
        &mut self.buffer
    }

    /// Hand the painted surface to the renderer.
    ///
    /// Blocks while the renderer still holds an undelivered frame. Returns
    /// `Err(RendererDisconnected)` once the renderer has stopped.
    pub fn signal_frame_ready(
        &mut self,
        generation: Generation,
        live_cells: u64,
    ) -> Result<(), RendererDisconnected> {
        self.frame_tx
            .send(Frame {
                generation,
                live_cells,
                buffer: self.buffer.clone(),
            })
            .map_err(|_| RendererDisconnected)
    }
}

// ── AnimationBridge ─────────────────────────────────────────────

/// Builder for an animation session over a fixed surface size.
#[derive(Debug)]
pub struct AnimationBridge {
    surface: FrameBuffer,
}

impl AnimationBridge {
    /// Create a bridge whose surface matches a `rows x cols` grid.
    pub fn new(rows: u32, cols: u32) -> Self {
        Self {
            surface: FrameBuffer::new(rows, cols),
        }
    }

    /// Spawn the worker thread running `run_fn(context, &mut sender)`.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::WorkerSpawnFailed`] if the thread cannot be
    /// created; no work has started in that case.
    pub fn start<C, R, F>(self, run_fn: F, context: C) -> Result<AnimationHandle<R>, BridgeError>
    where
        C: Send + 'static,
        R: Send + 'static,
        F: FnOnce(C, &mut FrameSender) -> R + Send + 'static,
    {
        let (frame_tx, frame_rx) = crossbeam_channel::bounded(1);
        let mut sender = FrameSender {
            buffer: self.surface,
            frame_tx,
        };
        let worker = thread::Builder::new()
            .name(WORKER_THREAD_NAME.into())
            .spawn(move || run_fn(context, &mut sender))
            .map_err(|e| BridgeError::WorkerSpawnFailed {
                reason: e.to_string(),
            })?;
        log::info!("animation worker started");
        Ok(AnimationHandle { frame_rx, worker })
    }
}

// ── AnimationHandle ─────────────────────────────────────────────

/// Renderer-side end of a running bridge.
pub struct AnimationHandle<R> {
    frame_rx: Receiver<Frame>,
    worker: JoinHandle<R>,
}

impl<R> AnimationHandle<R> {
    /// Present up to `iterations` frames, then join the worker.
    ///
    /// Stops early if the worker finishes without sending more frames.
    /// On a display failure the receiver is dropped so the worker stops,
    /// the worker is joined, and the display error is returned.
    ///
    /// # Errors
    ///
    /// [`BridgeError::Render`] if the display fails,
    /// [`BridgeError::WorkerPanicked`] if the worker panicked.
    pub fn run_event_loop<D>(self, display: &mut D, iterations: u64) -> Result<R, BridgeError>
    where
        D: FrameDisplay + ?Sized,
    {
        let Self { frame_rx, worker } = self;
        let mut presented = 0u64;
        let mut failure = None;

        while presented < iterations {
            let Ok(frame) = frame_rx.recv() else {
                log::debug!("worker finished after {presented} frames");
                break;
            };
            if let Err(e) = display.present(&frame) {
                log::warn!("display failed at generation {}: {e}", frame.generation);
                failure = Some(e);
                break;
            }
            presented += 1;
        }

        drop(frame_rx);
        let joined = worker.join();
        log::info!("animation worker stopped after {presented} frames");

        if let Some(e) = failure {
            return Err(BridgeError::Render(e));
        }
        joined.map_err(|_| BridgeError::WorkerPanicked)
    }
}

impl<R> fmt::Debug for AnimationHandle<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationHandle")
            .field("worker", &self.worker.thread().name())
            .finish()
    }
}

// ── animate ─────────────────────────────────────────────────────

/// Standard worker body: play `world` to completion, one frame per
/// generation.
///
/// Sleeps `pacing` after each generation. Stops early, without error, if
/// the renderer disconnects. Returns the world so its final state can be
/// reported.
///
/// # Errors
///
/// [`BridgeError::Render`] if a generation cannot be encoded into the
/// surface, [`BridgeError::Step`] if the world fails to advance.
pub fn animate(
    mut world: LockstepWorld,
    sender: &mut FrameSender,
    palette: Palette,
    pacing: Option<Duration>,
) -> Result<LockstepWorld, BridgeError> {
    let mut encode_error = None;
    world.play(pacing, |result| {
        let generation = result.snapshot.generation();
        if let Err(e) = sender.frame_buffer_mut().paint(&result.snapshot, &palette) {
            log::warn!("cannot encode generation {generation}: {e}");
            encode_error = Some(e);
            return ControlFlow::Break(());
        }
        match sender.signal_frame_ready(generation, result.metrics.live_cells) {
            Ok(()) => ControlFlow::Continue(()),
            Err(RendererDisconnected) => {
                log::debug!("renderer disconnected at generation {generation}");
                ControlFlow::Break(())
            }
        }
    })?;
    if let Some(e) = encode_error {
        return Err(BridgeError::Render(e));
    }
    Ok(world)
}
