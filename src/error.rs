//! Typed errors for the text-processing core.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Error taxonomy for core operations
///
/// Core operations never swallow failures: every fallible call returns one
/// of these variants for the caller to interpret and present. The library
/// itself produces no user-facing text.
#[derive(Error, Debug)]
pub enum Error {
    /// Required text input was absent
    ///
    /// Absence is distinct from emptiness: an empty string is processed
    /// normally, a missing one is rejected.
    #[error("required text input is missing")]
    InvalidInput,

    /// Pattern failed to compile against the regex grammar
    #[error("invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        /// The pattern string that failed to compile
        pattern: String,
        /// The underlying regex compile error
        #[source]
        source: Box<regex::Error>,
    },

    /// Neither a preset name nor a custom pattern was supplied
    ///
    /// Caller-level validation; raised before any matcher operation runs.
    #[error("no regex pattern provided or selected")]
    NoPatternSelected,

    /// File open/read/write failure, wrapping the underlying cause
    #[error("I/O failure on {path}: {source}")]
    Io {
        /// Path of the file the operation was acting on
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Unexpected internal fault during summarization
    ///
    /// Not the short-circuit path: returning input text unchanged when it
    /// has too few sentences is a success.
    #[error("summarization failed: {message}")]
    Summarization {
        /// Description of the internal fault
        message: String,
    },
}

impl Error {
    /// Build an `InvalidPattern` from a failed compile
    pub(crate) fn invalid_pattern(pattern: &str, source: regex::Error) -> Self {
        Self::InvalidPattern {
            pattern: pattern.to_string(),
            source: Box::new(source),
        }
    }

    /// Build an `Io` error carrying the offending path
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
