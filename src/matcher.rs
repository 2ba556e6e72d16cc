//! Regex search and replace over plain text.
//!
//! Patterns are compiled on every call and discarded afterwards: callers
//! hand in pattern strings, not compiled objects, so there is no cache to
//! invalidate and both operations stay pure functions over their inputs.

use crate::error::{Error, Result};
use regex::Regex;

/// Find every non-overlapping match of `pattern` in `text`.
///
/// Matches are returned in left-to-right scan order. An empty `text` or a
/// pattern that never matches yields an empty vector, not an error.
///
/// # Errors
/// `Error::InvalidPattern` when `pattern` does not compile.
pub fn find_all(text: &str, pattern: &str) -> Result<Vec<String>> {
    let re = compile(pattern)?;
    Ok(re.find_iter(text).map(|m| m.as_str().to_string()).collect())
}

/// Replace every non-overlapping match of `pattern` in `text` with
/// `replacement`.
///
/// `replacement` may reference capture groups with `$1`/`${name}` syntax.
/// A missing (`None`) input is rejected with `Error::InvalidInput`; an
/// empty string passes through and comes back empty.
pub fn replace_all(text: Option<&str>, pattern: &str, replacement: &str) -> Result<String> {
    // WHY: absent text is a caller bug, not an empty document
    let text = text.ok_or(Error::InvalidInput)?;
    let re = compile(pattern)?;
    Ok(re.replace_all(text, replacement).into_owned())
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| Error::invalid_pattern(pattern, e))
}
