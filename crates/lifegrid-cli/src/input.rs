//! Reader for the configuration source file.
//!
//! The file holds whitespace-separated decimal integers:
//!
//! ```text
//! rows cols iterations pair_count
//! row col
//! row col
//! ...
//! ```
//!
//! Exactly `pair_count` pairs must follow, and nothing else.

use std::error::Error;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::{FromStr, SplitWhitespace};

use lifegrid::engine::{ConfigError, WorldConfig};

/// Upper bound on pre-allocated seed capacity; the rest grows on demand.
const MAX_PREALLOCATED_PAIRS: usize = 1 << 16;

/// Errors reading or validating a configuration file.
#[derive(Debug)]
pub enum InputError {
    /// The file could not be read.
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },
    /// The file ended before a required value.
    MissingValue {
        /// Which value was expected.
        what: String,
    },
    /// A token is not a non-negative integer in range.
    InvalidInteger {
        /// Which value was being read.
        what: String,
        /// The offending token.
        token: String,
    },
    /// Tokens remain after the declared pairs.
    TrailingData {
        /// First unexpected token.
        token: String,
    },
    /// The values parsed but do not describe a valid world.
    Config(ConfigError),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot read {}: {source}", path.display()),
            Self::MissingValue { what } => write!(f, "unexpected end of input, expected {what}"),
            Self::InvalidInteger { what, token } => {
                write!(f, "invalid {what}: {token:?} is not a non-negative integer in range")
            }
            Self::TrailingData { token } => {
                write!(f, "unexpected data after the declared cells: {token:?}")
            }
            Self::Config(e) => write!(f, "invalid configuration: {e}"),
        }
    }
}

impl Error for InputError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for InputError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_whitespace(),
        }
    }

    fn next<T: FromStr>(&mut self, what: impl Fn() -> String) -> Result<T, InputError> {
        let token = self
            .inner
            .next()
            .ok_or_else(|| InputError::MissingValue { what: what() })?;
        token.parse().map_err(|_| InputError::InvalidInteger {
            what: what(),
            token: token.to_string(),
        })
    }

    fn finish(mut self) -> Result<(), InputError> {
        match self.inner.next() {
            Some(token) => Err(InputError::TrailingData {
                token: token.to_string(),
            }),
            None => Ok(()),
        }
    }
}

/// Parse configuration text into a validated [`WorldConfig`].
pub fn parse_config(text: &str) -> Result<WorldConfig, InputError> {
    let mut tokens = Tokens::new(text);
    let rows: u32 = tokens.next(|| "row count".into())?;
    let cols: u32 = tokens.next(|| "column count".into())?;
    let iterations: u64 = tokens.next(|| "iteration count".into())?;
    let pairs: usize = tokens.next(|| "live-cell pair count".into())?;

    let mut alive = Vec::with_capacity(pairs.min(MAX_PREALLOCATED_PAIRS));
    for i in 0..pairs {
        let row: u32 = tokens.next(|| format!("row of live cell {}", i + 1))?;
        let col: u32 = tokens.next(|| format!("column of live cell {}", i + 1))?;
        alive.push((row, col));
    }
    tokens.finish()?;

    let config = WorldConfig {
        rows,
        cols,
        alive,
        iterations,
    };
    config.validate()?;
    Ok(config)
}

/// Read and parse the configuration file at `path`.
pub fn read_config(path: &Path) -> Result<WorldConfig, InputError> {
    let text = fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("read {} bytes from {}", text.len(), path.display());
    parse_config(&text)
}
