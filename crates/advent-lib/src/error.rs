use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the puzzle library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a puzzle identifier does not match any registered solver.
    #[error("unknown puzzle: {name}{}", format_suggestions(.suggestions))]
    UnknownPuzzle {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when a puzzle identifier cannot be parsed at all.
    #[error("invalid puzzle id '{id}'; expected a form like aoc24:p16a")]
    InvalidPuzzleId { id: String },

    /// Raised when puzzle input does not follow the expected text format.
    #[error("failed to parse {puzzle} input: {message}")]
    Parse {
        puzzle: &'static str,
        message: String,
    },

    /// Raised when a character grid is empty or not rectangular.
    #[error("malformed grid: {message}")]
    MalformedGrid { message: String },

    /// Raised when a grid lacks a required marker such as `S` or `E`.
    #[error("grid has no '{marker}' marker")]
    MissingMarker { marker: char },

    /// Raised when a puzzle input has no answer under the puzzle rules.
    #[error("{puzzle} has no solution: {message}")]
    NoSolution {
        puzzle: &'static str,
        message: String,
    },

    /// Raised when a search or simulation exceeds its safety cap.
    #[error("{puzzle} exceeded its iteration limit of {limit}")]
    IterationLimit { puzzle: &'static str, limit: usize },

    /// Raised when a puzzle parameter override cannot be interpreted.
    #[error("invalid value '{value}' for parameter {key}")]
    InvalidParameter { key: String, value: String },

    /// Raised when the full puzzle input could not be found on disk.
    #[error("puzzle input not found at {path}")]
    InputNotFound { path: PathBuf },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve a data directory for puzzle inputs")]
    DataDirUnavailable,

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON fixture errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Shorthand for a [`Error::Parse`] raised by the named puzzle.
    pub fn parse(puzzle: &'static str, message: impl Into<String>) -> Self {
        Error::Parse {
            puzzle,
            message: message.into(),
        }
    }

    /// Shorthand for a [`Error::NoSolution`] raised by the named puzzle.
    pub fn no_solution(puzzle: &'static str, message: impl Into<String>) -> Self {
        Error::NoSolution {
            puzzle,
            message: message.into(),
        }
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
