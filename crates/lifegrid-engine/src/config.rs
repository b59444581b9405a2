//! World and run configuration, validation, and error types.
//!
//! [`WorldConfig`] describes what is simulated (dimensions, seed cells,
//! iteration budget). [`RunConfig`] describes how a run is surfaced
//! (output mode, pacing, screen clearing). Both are immutable once the run
//! starts.

use std::error::Error;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use lifegrid_arena::ArenaError;
use lifegrid_space::{SpaceError, Torus};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while validating a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Grid dimensions or a seed coordinate are invalid.
    Space(SpaceError),
    /// The grid rejected the seed cells.
    Arena(ArenaError),
    /// The output mode is not one of the recognised values.
    UnknownOutputMode {
        /// The rejected value as given.
        value: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Space(e) => write!(f, "space: {e}"),
            Self::Arena(e) => write!(f, "arena: {e}"),
            Self::UnknownOutputMode { value } => {
                write!(
                    f,
                    "unknown output mode {value:?} (expected 0|none, 1|ascii, 2|visual)"
                )
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Space(e) => Some(e),
            Self::Arena(e) => Some(e),
            Self::UnknownOutputMode { .. } => None,
        }
    }
}

impl From<SpaceError> for ConfigError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}

impl From<ArenaError> for ConfigError {
    fn from(e: ArenaError) -> Self {
        Self::Arena(e)
    }
}

// ── WorldConfig ────────────────────────────────────────────────────

/// Everything needed to construct a [`LockstepWorld`](crate::LockstepWorld).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WorldConfig {
    /// Number of grid rows. Must be positive.
    pub rows: u32,
    /// Number of grid columns. Must be positive.
    pub cols: u32,
    /// Cells that start Alive. Duplicates are allowed.
    pub alive: Vec<(u32, u32)>,
    /// Number of generations to run.
    pub iterations: u64,
}

impl WorldConfig {
    /// Check dimensions and seed coordinates.
    ///
    /// Returns the validated topology on success. Every seed cell must lie
    /// in `[0, rows) x [0, cols)`.
    pub fn validate(&self) -> Result<Torus, ConfigError> {
        let space = Torus::new(self.rows, self.cols)?;
        for &(row, col) in &self.alive {
            space.check_bounds(row, col)?;
        }
        Ok(space)
    }
}

// ── OutputMode ─────────────────────────────────────────────────────

/// How generations are surfaced while the simulation runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OutputMode {
    /// No per-generation output; only the final summary.
    #[default]
    None,
    /// Textual frame dump after every generation.
    Ascii,
    /// Colour frames handed to a renderer through the animation bridge.
    Visual,
}

impl OutputMode {
    /// Whether per-generation pacing applies in this mode.
    pub fn is_paced(self) -> bool {
        !matches!(self, Self::None)
    }
}

impl FromStr for OutputMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "0" | "none" => Ok(Self::None),
            "1" | "ascii" => Ok(Self::Ascii),
            "2" | "visual" => Ok(Self::Visual),
            _ => Err(ConfigError::UnknownOutputMode {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::Ascii => "ascii",
            Self::Visual => "visual",
        };
        f.write_str(name)
    }
}

// ── RunConfig ──────────────────────────────────────────────────────

/// Delay after each generation when output is paced.
pub const DEFAULT_PACING: Duration = Duration::from_millis(750);

/// Presentation parameters for one run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    /// Output mode.
    pub output: OutputMode,
    /// Delay after each generation in paced modes.
    pub pacing: Duration,
    /// Clear the terminal before each ASCII frame.
    pub clear_screen: bool,
}

impl RunConfig {
    /// Pacing to apply in the generation loop, if any.
    ///
    /// `None` for [`OutputMode::None`] and for a zero delay.
    pub fn effective_pacing(&self) -> Option<Duration> {
        (self.output.is_paced() && !self.pacing.is_zero()).then_some(self.pacing)
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            output: OutputMode::None,
            pacing: DEFAULT_PACING,
            clear_screen: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(rows: u32, cols: u32, alive: Vec<(u32, u32)>) -> WorldConfig {
        WorldConfig {
            rows,
            cols,
            alive,
            iterations: 5,
        }
    }

    #[test]
    fn valid_config_yields_topology() {
        let space = config(4, 6, vec![(0, 0), (3, 5)]).validate().unwrap();
        assert_eq!((space.rows(), space.cols()), (4, 6));
    }

    #[test]
    fn zero_dimension_rejected() {
        let err = config(0, 6, vec![]).validate().unwrap_err();
        assert_eq!(err, ConfigError::Space(SpaceError::EmptySpace));
        assert!(err.source().is_some());
    }

    #[test]
    fn seed_outside_grid_rejected() {
        let err = config(4, 6, vec![(1, 1), (4, 0)]).validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Space(SpaceError::CoordOutOfBounds { row: 4, col: 0, .. })
        ));
    }

    #[test]
    fn duplicate_seeds_are_valid() {
        assert!(config(3, 3, vec![(1, 1), (1, 1)]).validate().is_ok());
    }

    #[test]
    fn output_mode_parses_numbers_and_names() {
        assert_eq!("0".parse::<OutputMode>().unwrap(), OutputMode::None);
        assert_eq!("1".parse::<OutputMode>().unwrap(), OutputMode::Ascii);
        assert_eq!("2".parse::<OutputMode>().unwrap(), OutputMode::Visual);
        assert_eq!("ASCII".parse::<OutputMode>().unwrap(), OutputMode::Ascii);
        assert_eq!("visual".parse::<OutputMode>().unwrap(), OutputMode::Visual);
    }

    #[test]
    fn output_mode_rejects_anything_else() {
        for bad in ["3", "-1", "", "01x", "graphical"] {
            let err = bad.parse::<OutputMode>().unwrap_err();
            assert_eq!(
                err,
                ConfigError::UnknownOutputMode {
                    value: bad.to_string()
                }
            );
        }
    }

    #[test]
    fn pacing_only_in_paced_modes() {
        let mut run = RunConfig::default();
        assert_eq!(run.effective_pacing(), None);
        run.output = OutputMode::Ascii;
        assert_eq!(run.effective_pacing(), Some(DEFAULT_PACING));
        run.pacing = Duration::ZERO;
        assert_eq!(run.effective_pacing(), None);
    }
}
