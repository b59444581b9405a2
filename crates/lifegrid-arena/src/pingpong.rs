//! Double-buffered ping-pong grid.
//!
//! [`PingPongGrid`] maintains two cell buffers that alternate between the
//! "current" (readable, authoritative) and "next" (writable) roles. On
//! [`PingPongGrid::commit`] the next buffer becomes current and the old
//! current buffer becomes the next staging buffer.
//!
//! The lifecycle per generation is:
//! 1. `begin_generation()`: clear write coverage, split into reader + writer
//! 2. The engine writes **every** cell through the `NextWriter`
//! 3. `commit()`: verify coverage, swap buffers, advance the generation
//! 4. `snapshot()`: borrow the new current buffer

use indexmap::IndexSet;
use lifegrid_core::{CellState, ConsistencyError, Generation};
use lifegrid_space::Torus;

use crate::error::ArenaError;
use crate::read::Snapshot;
use crate::write::NextWriter;

/// Names one of the two buffers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Buffer {
    /// The authoritative state of the last committed generation.
    Current,
    /// The staging buffer being filled for the following generation.
    Next,
}

/// Generation guard providing read access to the current buffer and
/// write access to the next buffer.
///
/// Created by [`PingPongGrid::begin_generation()`] and dropped before
/// [`PingPongGrid::commit()`]. Holds disjoint borrows of the two buffers,
/// so rule evaluation cannot observe partially-updated state.
#[must_use]
pub struct GenerationGuard<'a> {
    /// Read-only view of the settled current generation.
    pub current: Snapshot<'a>,
    /// Write access to the next buffer.
    pub next: NextWriter<'a>,
}

/// Double-buffered cell storage with ping-pong swap.
///
/// # Buffer layout
///
/// ```text
/// buffer_a  ←─── current (b_is_current = false) / next (b_is_current = true)
/// buffer_b  ←─── next    (b_is_current = false) / current (b_is_current = true)
/// ```
#[derive(Debug, Clone)]
pub struct PingPongGrid {
    space: Torus,
    buffer_a: Vec<CellState>,
    buffer_b: Vec<CellState>,
    /// Cells of the next buffer written since the last commit.
    written: Vec<bool>,
    written_count: usize,
    b_is_current: bool,
    generation: Generation,
}

impl PingPongGrid {
    /// Create an all-dead grid on the given topology.
    pub fn new(space: Torus) -> Self {
        let n = space.cell_count();
        Self {
            space,
            buffer_a: vec![CellState::Dead; n],
            buffer_b: vec![CellState::Dead; n],
            written: vec![false; n],
            written_count: 0,
            b_is_current: false,
            generation: Generation::INITIAL,
        }
    }

    /// Topology of the grid.
    pub fn space(&self) -> &Torus {
        &self.space
    }

    /// Last committed generation.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Mark `cells` Alive in both buffers.
    ///
    /// Only permitted before the first commit. All coordinates are checked
    /// before any cell is written, so a rejected call leaves the grid
    /// unchanged. Duplicate coordinates set the cell once.
    ///
    /// Returns the number of cells that changed from Dead to Alive.
    pub fn seed_alive<I>(&mut self, cells: I) -> Result<usize, ArenaError>
    where
        I: IntoIterator<Item = (u32, u32)>,
    {
        if self.generation != Generation::INITIAL {
            return Err(ArenaError::AlreadyAdvanced {
                generation: self.generation,
            });
        }
        let mut unique = IndexSet::new();
        for (row, col) in cells {
            self.space.check_bounds(row, col)?;
            unique.insert((row, col));
        }

        let mut newly_alive = 0;
        for (row, col) in unique {
            let idx = self.space.index(row, col);
            if !self.buffer_a[idx].is_alive() {
                newly_alive += 1;
            }
            self.buffer_a[idx] = CellState::Alive;
            self.buffer_b[idx] = CellState::Alive;
        }
        Ok(newly_alive)
    }

    /// Value at `(row, col)` in the named buffer.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of bounds. Callers wrap neighbour
    /// coordinates before reading.
    pub fn cell_at(&self, buffer: Buffer, row: u32, col: u32) -> CellState {
        assert!(
            self.space.contains(row, col),
            "cell ({row}, {col}) outside {}x{} grid",
            self.space.rows(),
            self.space.cols()
        );
        let idx = self.space.index(row, col);
        match buffer {
            Buffer::Current => self.current_cells()[idx],
            Buffer::Next => self.next_cells()[idx],
        }
    }

    /// Write `state` into the next buffer at `(row, col)`.
    ///
    /// Equivalent to writing through a [`GenerationGuard`]; counts towards
    /// the commit coverage check.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of bounds.
    pub fn set_next(&mut self, row: u32, col: u32, state: CellState) {
        self.next_writer().set(row, col, state);
    }

    /// Begin computing a new generation.
    ///
    /// Clears write coverage left by any aborted generation and returns a
    /// [`GenerationGuard`] with disjoint borrows of both buffers. The guard
    /// must be dropped before calling [`commit()`](Self::commit).
    pub fn begin_generation(&mut self) -> GenerationGuard<'_> {
        self.written.fill(false);
        self.written_count = 0;

        let (current, next) = if self.b_is_current {
            (&self.buffer_b, &mut self.buffer_a)
        } else {
            (&self.buffer_a, &mut self.buffer_b)
        };
        Self::make_guard(
            current,
            next,
            &mut self.written,
            &mut self.written_count,
            self.space,
            self.generation,
        )
    }

    /// Helper to construct a guard from split borrows.
    fn make_guard<'a>(
        current: &'a [CellState],
        next: &'a mut [CellState],
        written: &'a mut [bool],
        written_count: &'a mut usize,
        space: Torus,
        generation: Generation,
    ) -> GenerationGuard<'a> {
        GenerationGuard {
            current: Snapshot::new(current, space, generation),
            next: NextWriter::new(next, written, written_count, space),
        }
    }

    /// Make the next buffer the new current buffer.
    ///
    /// Returns `Err(ConsistencyError::IncompleteGeneration)` unless every
    /// cell of the next buffer was written since the previous commit, and
    /// `Err(ConsistencyError::BufferMismatch)` if the buffers differ in
    /// size. On success the old current buffer becomes the next staging
    /// buffer; its contents are stale and must be fully overwritten again.
    pub fn commit(&mut self) -> Result<Generation, ConsistencyError> {
        if self.buffer_a.len() != self.buffer_b.len() {
            let (current, next) = if self.b_is_current {
                (self.buffer_b.len(), self.buffer_a.len())
            } else {
                (self.buffer_a.len(), self.buffer_b.len())
            };
            return Err(ConsistencyError::BufferMismatch { current, next });
        }
        let expected = self.space.cell_count();
        if self.written_count != expected {
            return Err(ConsistencyError::IncompleteGeneration {
                written: self.written_count,
                expected,
            });
        }

        self.b_is_current = !self.b_is_current;
        self.generation = self.generation.next();
        self.written.fill(false);
        self.written_count = 0;
        Ok(self.generation)
    }

    /// Read-only snapshot of the current generation.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot::new(self.current_cells(), self.space, self.generation)
    }

    fn current_cells(&self) -> &[CellState] {
        if self.b_is_current {
            &self.buffer_b
        } else {
            &self.buffer_a
        }
    }

    fn next_cells(&self) -> &[CellState] {
        if self.b_is_current {
            &self.buffer_a
        } else {
            &self.buffer_b
        }
    }

    fn next_writer(&mut self) -> NextWriter<'_> {
        let next = if self.b_is_current {
            &mut self.buffer_a
        } else {
            &mut self.buffer_b
        };
        NextWriter::new(next, &mut self.written, &mut self.written_count, self.space)
    }
}
