//! Async file read/write for the processing core.
//!
//! File handles are scoped acquisitions released on every exit path;
//! open/close and failure events are emitted through `tracing` so an
//! operator can observe them against whatever subscriber the embedding
//! application installed. The library never installs one itself.

use crate::error::{Error, Result};
use std::path::Path;
use tracing::{debug, info, warn};

/// Statistics for a single file read
#[derive(Debug, Clone)]
pub struct ReadStats {
    pub file_path: String,
    pub lines_read: u64,
    pub bytes_read: u64,
    pub duration_ms: u64,
}

/// Read an entire UTF-8 text file into a string.
///
/// # Errors
/// `Error::Io` wrapping the underlying cause, carrying the path.
pub async fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
    let (content, _stats) = read_with_stats(path).await?;
    Ok(content)
}

/// Read an entire UTF-8 text file, reporting read statistics.
pub async fn read_with_stats<P: AsRef<Path>>(path: P) -> Result<(String, ReadStats)> {
    let path = path.as_ref();
    let start_time = std::time::Instant::now();
    debug!("Starting read of file: {}", path.display());

    let content = tokio::fs::read_to_string(path).await.map_err(|e| {
        warn!("Failed to read file {}: {}", path.display(), e);
        Error::io(path, e)
    })?;

    let stats = ReadStats {
        file_path: path.display().to_string(),
        lines_read: content.lines().count() as u64,
        bytes_read: content.len() as u64,
        duration_ms: start_time.elapsed().as_millis() as u64,
    };
    info!(
        "Read {}: {} lines, {} bytes in {}ms",
        stats.file_path, stats.lines_read, stats.bytes_read, stats.duration_ms
    );
    Ok((content, stats))
}

/// Write `content` to a file, creating or truncating it.
///
/// # Errors
/// `Error::Io` wrapping the underlying cause, carrying the path.
pub async fn write_string<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    debug!("Starting write of file: {}", path.display());

    tokio::fs::write(path, content).await.map_err(|e| {
        warn!("Failed to write file {}: {}", path.display(), e);
        Error::io(path, e)
    })?;

    info!("Wrote {}: {} bytes", path.display(), content.len());
    Ok(())
}
