//! Colour frame encoding and the renderer-facing display trait.
//!
//! A [`FrameBuffer`] is a row-major array of [`Color3`] pixels whose origin
//! is the lower-left corner, while the grid's origin is the upper-left. Grid
//! cell `(i, j)` therefore lands at pixel index `(R - (i + 1)) * C + j`.

use std::error::Error;
use std::fmt;
use std::io;

use lifegrid_arena::Snapshot;
use lifegrid_core::{CellState, Generation};

/// An RGB colour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color3 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color3 {
    /// Construct a colour from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Unpainted surface.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Default colour of Dead cells.
    pub const GREEN: Self = Self::new(0, 255, 0);
    /// Default colour of Alive cells.
    pub const PINK: Self = Self::new(255, 105, 180);
}

/// Colours used for each cell state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Colour of Alive cells.
    pub alive: Color3,
    /// Colour of Dead cells.
    pub dead: Color3,
}

impl Palette {
    /// Colour for `state`.
    pub fn color(&self, state: CellState) -> Color3 {
        match state {
            CellState::Alive => self.alive,
            CellState::Dead => self.dead,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            alive: Color3::PINK,
            dead: Color3::GREEN,
        }
    }
}

/// Pixel index of grid cell `(row, col)` in a lower-left-origin surface.
///
/// # Examples
///
/// ```
/// use lifegrid_engine::render::surface_index;
///
/// // The grid's top-left cell is the surface's top row.
/// assert_eq!(surface_index(3, 4, 0, 0), 8);
/// // The grid's bottom-right cell is near the surface origin.
/// assert_eq!(surface_index(3, 4, 2, 3), 3);
/// ```
pub fn surface_index(rows: u32, cols: u32, row: u32, col: u32) -> usize {
    (rows - (row + 1)) as usize * cols as usize + col as usize
}

/// Colour surface matching the grid's dimensions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    rows: u32,
    cols: u32,
    pixels: Vec<Color3>,
}

impl FrameBuffer {
    /// Create an all-black surface of `rows x cols` pixels.
    pub fn new(rows: u32, cols: u32) -> Self {
        Self {
            rows,
            cols,
            pixels: vec![Color3::BLACK; rows as usize * cols as usize],
        }
    }

    /// Surface height.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Surface width.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// All pixels, lower-left origin, row-major.
    pub fn pixels(&self) -> &[Color3] {
        &self.pixels
    }

    /// Pixel row `y` counted from the bottom edge.
    ///
    /// # Panics
    ///
    /// Panics if `y >= rows`.
    pub fn scanline(&self, y: u32) -> &[Color3] {
        assert!(y < self.rows, "scanline {y} outside surface of {} rows", self.rows);
        let start = y as usize * self.cols as usize;
        &self.pixels[start..start + self.cols as usize]
    }

    /// Colour at grid cell `(row, col)`.
    pub fn cell_color(&self, row: u32, col: u32) -> Color3 {
        self.pixels[surface_index(self.rows, self.cols, row, col)]
    }

    /// Encode every cell of `snapshot` into the surface.
    ///
    /// Returns `Err(RenderError::DimensionMismatch)` if the snapshot's grid
    /// does not match the surface.
    pub fn paint(
        &mut self,
        snapshot: &Snapshot<'_>,
        palette: &Palette,
    ) -> Result<(), RenderError> {
        let space = snapshot.space();
        if space.rows() != self.rows || space.cols() != self.cols {
            return Err(RenderError::DimensionMismatch {
                surface: (self.rows, self.cols),
                grid: (space.rows(), space.cols()),
            });
        }
        for row in 0..self.rows {
            for (col, &state) in snapshot.row(row).iter().enumerate() {
                let idx = surface_index(self.rows, self.cols, row, col as u32);
                self.pixels[idx] = palette.color(state);
            }
        }
        Ok(())
    }
}

/// One signalled frame: an owned copy of the surface plus its metadata.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    /// Generation the frame shows.
    pub generation: Generation,
    /// Live-cell total for that generation.
    pub live_cells: u64,
    /// Encoded surface.
    pub buffer: FrameBuffer,
}

/// A renderer that presents frames on its own thread.
pub trait FrameDisplay {
    /// Show `frame`. An error stops the event loop.
    fn present(&mut self, frame: &Frame) -> Result<(), RenderError>;
}

/// Errors raised while encoding or presenting frames.
#[derive(Debug)]
pub enum RenderError {
    /// Surface and grid dimensions differ.
    DimensionMismatch {
        /// Surface `(rows, cols)`.
        surface: (u32, u32),
        /// Grid `(rows, cols)`.
        grid: (u32, u32),
    },
    /// Writing to the output device failed.
    Io(io::Error),
    /// The display refused the frame.
    Display {
        /// Why the frame was refused.
        reason: String,
    },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch { surface, grid } => write!(
                f,
                "surface {}x{} does not match grid {}x{}",
                surface.0, surface.1, grid.0, grid.1
            ),
            Self::Io(e) => write!(f, "display i/o: {e}"),
            Self::Display { reason } => write!(f, "display failed: {reason}"),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for RenderError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifegrid_arena::PingPongGrid;
    use lifegrid_space::Torus;

    #[test]
    fn new_surface_is_black() {
        let fb = FrameBuffer::new(2, 3);
        assert_eq!(fb.pixels().len(), 6);
        assert!(fb.pixels().iter().all(|&c| c == Color3::BLACK));
    }

    #[test]
    fn default_palette_matches_cell_states() {
        let p = Palette::default();
        assert_eq!(p.color(CellState::Alive), Color3::PINK);
        assert_eq!(p.color(CellState::Dead), Color3::GREEN);
    }

    #[test]
    fn paint_flips_rows() {
        let mut grid = PingPongGrid::new(Torus::new(3, 2).unwrap());
        grid.seed_alive([(0, 1)]).unwrap();
        let mut fb = FrameBuffer::new(3, 2);
        fb.paint(&grid.snapshot(), &Palette::default()).unwrap();

        // Grid row 0 is the top scanline.
        assert_eq!(fb.scanline(2), &[Color3::GREEN, Color3::PINK]);
        assert_eq!(fb.scanline(0), &[Color3::GREEN, Color3::GREEN]);
        assert_eq!(fb.pixels()[5], Color3::PINK);
        assert_eq!(fb.cell_color(0, 1), Color3::PINK);
    }

    #[test]
    fn paint_rejects_wrong_dimensions() {
        let grid = PingPongGrid::new(Torus::new(3, 2).unwrap());
        let mut fb = FrameBuffer::new(2, 3);
        let err = fb.paint(&grid.snapshot(), &Palette::default()).unwrap_err();
        assert!(matches!(
            err,
            RenderError::DimensionMismatch {
                surface: (2, 3),
                grid: (3, 2)
            }
        ));
    }

    #[test]
    fn io_error_chains_source() {
        let err = RenderError::from(io::Error::new(io::ErrorKind::BrokenPipe, "gone"));
        assert!(err.source().is_some());
        assert!(err.to_string().contains("gone"));
    }
}
