//! CLI command implementations for Solit.

pub(crate) mod play;
pub(crate) mod run;

mod output;

use clap::ValueEnum;
use solit::Coord;
use std::error::Error;
use std::fmt;

/// Output format for the `run` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// One scripted click: a grid position, or a miss.
///
/// Positions off the grid or on a corner block are kept and resolve to no
/// slot, like a click beside the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Click(pub(crate) Option<Coord>);

/// Parse a click argument: `row,col`, or `-` for a miss.
///
/// # Errors
///
/// Returns an error if the argument is neither form.
pub(crate) fn parse_click(arg: &str) -> Result<Click, CliError> {
    let arg = arg.trim();
    if arg == "-" {
        return Ok(Click(None));
    }

    let (row, col) = arg
        .split_once(',')
        .ok_or_else(|| CliError::new(format!("expected row,col or -, got '{arg}'")))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<usize>()
            .map_err(|e| CliError::new(format!("bad coordinate '{part}' in '{arg}': {e}")))
    };

    Ok(Click(Some(Coord::new(parse(row)?, parse(col)?))))
}

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::new(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::new(format!("JSON output failed: {e}"))
    }
}
