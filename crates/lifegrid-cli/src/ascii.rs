//! Textual frame dump for the ascii output mode.

use std::io::{self, Write};

use lifegrid::arena::Snapshot;

/// ANSI sequence that clears the screen and homes the cursor.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Writes `Round:`/grid/`Live cells:` frames to a diagnostic stream.
pub struct AsciiDumper<W: Write> {
    out: W,
    clear_screen: bool,
}

impl<W: Write> AsciiDumper<W> {
    /// Dump frames to `out`, clearing the screen before each if asked.
    pub fn new(out: W, clear_screen: bool) -> Self {
        Self { out, clear_screen }
    }

    /// Write one frame for `snapshot`, labelled with its generation.
    pub fn dump(&mut self, snapshot: &Snapshot<'_>, live_cells: u64) -> io::Result<()> {
        if self.clear_screen {
            self.out.write_all(CLEAR_SCREEN.as_bytes())?;
        }
        write_frame(&mut self.out, snapshot, live_cells)?;
        self.out.flush()
    }

    /// Recover the underlying writer.
    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Write `Round: N`, each row as ` @`/` .` cells, then `Live cells: N` and
/// a blank line.
pub fn write_frame<W: Write + ?Sized>(
    out: &mut W,
    snapshot: &Snapshot<'_>,
    live_cells: u64,
) -> io::Result<()> {
    writeln!(out, "Round: {}", snapshot.generation())?;
    let mut line = String::with_capacity(snapshot.space().cols() as usize * 2 + 1);
    for row in 0..snapshot.space().rows() {
        line.clear();
        for cell in snapshot.row(row) {
            line.push(' ');
            line.push(cell.glyph());
        }
        line.push('\n');
        out.write_all(line.as_bytes())?;
    }
    writeln!(out, "Live cells: {live_cells}")?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifegrid::arena::PingPongGrid;
    use lifegrid::space::Torus;

    fn grid() -> PingPongGrid {
        let mut g = PingPongGrid::new(Torus::new(2, 3).unwrap());
        g.seed_alive([(0, 1), (1, 2)]).unwrap();
        g
    }

    #[test]
    fn frame_format() {
        let g = grid();
        let mut out = Vec::new();
        write_frame(&mut out, &g.snapshot(), 2).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Round: 0\n . @ .\n . . @\nLive cells: 2\n\n"
        );
    }

    #[test]
    fn dumper_clears_when_asked() {
        let g = grid();
        let mut dumper = AsciiDumper::new(Vec::new(), true);
        dumper.dump(&g.snapshot(), 2).unwrap();
        let text = String::from_utf8(dumper.into_inner()).unwrap();
        assert!(text.starts_with(CLEAR_SCREEN));
        assert!(text.ends_with("Live cells: 2\n\n"));

        let mut plain = AsciiDumper::new(Vec::new(), false);
        plain.dump(&g.snapshot(), 2).unwrap();
        assert!(String::from_utf8(plain.into_inner()).unwrap().starts_with("Round: 0\n"));
    }
}
