//! Batch line processing: a per-line filter + transform pipeline.
//!
//! Filter and transform are plain closures supplied by the caller; there is
//! no strategy hierarchy. The in-memory form is a lazy iterator adaptor,
//! the file-backed form streams lines with async buffered I/O and only
//! materializes its output.

use crate::error::{Error, Result};
use regex::Regex;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};

/// Default filter: keep every line
pub fn keep_all(_line: &str) -> bool {
    true
}

/// Default transform: emit the line unchanged
pub fn identity(line: &str) -> String {
    line.to_string()
}

/// Lazily filter and transform lines.
///
/// For each line in order: if `filter(line)` is true, emit
/// `transform(line)`, otherwise skip it. The returned iterator is finite
/// and non-restartable; nothing runs until it is consumed.
pub fn process_lines<I, S, F, T>(lines: I, mut filter: F, mut transform: T) -> impl Iterator<Item = String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    F: FnMut(&str) -> bool,
    T: FnMut(&str) -> String,
{
    lines.into_iter().filter_map(move |line| {
        let line = line.as_ref();
        filter(line).then(|| transform(line))
    })
}

/// Build a filter keeping lines that contain a match of `pattern`.
///
/// # Errors
/// `Error::InvalidPattern` when `pattern` does not compile.
pub fn matching_filter(pattern: &str) -> Result<impl FnMut(&str) -> bool> {
    let re = Regex::new(pattern).map_err(|e| Error::invalid_pattern(pattern, e))?;
    Ok(move |line: &str| re.is_match(line))
}

/// Filter and transform a file line by line.
///
/// Lines stream through the filter/transform pair as they are read; the
/// input file is never held in memory whole. Read failures propagate
/// immediately as `Error::Io`, no retries.
pub async fn process_file<P, F, T>(path: P, mut filter: F, mut transform: T) -> Result<Vec<String>>
where
    P: AsRef<Path>,
    F: FnMut(&str) -> bool,
    T: FnMut(&str) -> String,
{
    let path = path.as_ref();
    debug!("Starting batch processing of file: {}", path.display());

    let file = File::open(path).await.map_err(|e| {
        warn!("Failed to open file {}: {}", path.display(), e);
        Error::io(path, e)
    })?;

    let reader = BufReader::new(file);
    let mut lines = reader.lines();
    let mut output = Vec::new();
    let mut lines_in = 0u64;

    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                lines_in += 1;
                if filter(&line) {
                    output.push(transform(&line));
                }
            }
            Ok(None) => break,
            Err(e) => {
                warn!("Read error in {} at line {}: {}", path.display(), lines_in + 1, e);
                return Err(Error::io(path, e));
            }
        }
    }

    info!(
        "Batch processed {}: {} lines in, {} lines out",
        path.display(),
        lines_in,
        output.len()
    );
    Ok(output)
}
