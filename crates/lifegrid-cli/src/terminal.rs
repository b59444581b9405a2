//! 24-bit ANSI terminal renderer for the visual output mode.

use std::io::Write;

use lifegrid::engine::{Frame, FrameDisplay, RenderError};

use crate::ascii::CLEAR_SCREEN;

/// Paints each frame as two-character colour blocks, top row first.
pub struct TerminalDisplay<W: Write> {
    out: W,
}

impl<W: Write> TerminalDisplay<W> {
    /// Render to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Recover the underlying writer.
    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> FrameDisplay for TerminalDisplay<W> {
    fn present(&mut self, frame: &Frame) -> Result<(), RenderError> {
        let surface = &frame.buffer;
        let mut text = String::from(CLEAR_SCREEN);
        // Scanline 0 is the bottom edge of the surface.
        for y in (0..surface.rows()).rev() {
            for px in surface.scanline(y) {
                text.push_str(&format!("\x1b[48;2;{};{};{}m  ", px.r, px.g, px.b));
            }
            text.push_str("\x1b[0m\n");
        }
        text.push_str(&format!(
            "Round: {}  Live cells: {}\n",
            frame.generation, frame.live_cells
        ));
        self.out.write_all(text.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}
