//! Per-run statistics record for the CLI's `--stats-out` output.

use serde::{Deserialize, Serialize};

/// Statistics for one CLI operation, serialized to JSON when requested
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RunStats {
    /// Operation name (find, replace, count, summarize, batch)
    pub operation: String,
    /// Bytes of input text processed
    pub input_bytes: u64,
    /// Bytes of output produced
    pub output_bytes: u64,
    /// Wall-clock duration in milliseconds
    pub duration_ms: u64,
    /// Outcome (success; failures never get this far)
    pub status: String,
}

impl RunStats {
    pub fn success(operation: &str, input_bytes: u64, output_bytes: u64, duration_ms: u64) -> Self {
        Self {
            operation: operation.to_string(),
            input_bytes,
            output_bytes,
            duration_ms,
            status: "success".to_string(),
        }
    }
}
