//! Well-known Life patterns, placed at an origin on a torus.

/// A set of live cells relative to `(0, 0)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    pub cells: &'static [(u32, u32)],
    /// Generations after which the pattern repeats (possibly displaced).
    pub period: u64,
}

/// 2x2 still life.
pub const BLOCK: Pattern = Pattern {
    cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
    period: 1,
};

/// Period-2 oscillator, horizontal phase.
pub const BLINKER_HORIZONTAL: Pattern = Pattern {
    cells: &[(1, 0), (1, 1), (1, 2)],
    period: 2,
};

/// Period-2 oscillator, vertical phase.
pub const BLINKER_VERTICAL: Pattern = Pattern {
    cells: &[(0, 1), (1, 1), (2, 1)],
    period: 2,
};

/// South-east glider: after 4 generations it is displaced by (+1, +1).
pub const GLIDER: Pattern = Pattern {
    cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    period: 4,
};

impl Pattern {
    /// Cells shifted to `(row, col)` on a `rows x cols` torus, row-major.
    pub fn at(&self, row: u32, col: u32, rows: u32, cols: u32) -> Vec<(u32, u32)> {
        translate(self.cells, row as i64, col as i64, rows, cols)
    }
}

/// Shift `cells` by `(dr, dc)` with toroidal wrap, sorted row-major.
pub fn translate(cells: &[(u32, u32)], dr: i64, dc: i64, rows: u32, cols: u32) -> Vec<(u32, u32)> {
    let mut out: Vec<(u32, u32)> = cells
        .iter()
        .map(|&(r, c)| {
            (
                (r as i64 + dr).rem_euclid(rows as i64) as u32,
                (c as i64 + dc).rem_euclid(cols as i64) as u32,
            )
        })
        .collect();
    out.sort_unstable();
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_wraps_both_axes() {
        assert_eq!(translate(&[(0, 0), (4, 4)], 1, -1, 5, 5), vec![(0, 3), (1, 4)]);
    }

    #[test]
    fn at_places_pattern() {
        assert_eq!(BLOCK.at(3, 3, 4, 4), vec![(0, 0), (0, 3), (3, 0), (3, 3)]);
    }
}
