//! Naive extractive summarization.
//!
//! Sentences are scored by the summed document-wide frequency of their
//! words; the top `k` are emitted in score-descending order. There is no
//! stemming, stopword removal, or semantic model.

use crate::error::{Error, Result};
use tracing::debug;

pub mod scoring;
pub mod splitter;

pub use splitter::split_sentences;

/// Summarize `text` to its `k` highest-scoring sentences.
///
/// When `text` already has `k` or fewer sentences it is returned unchanged,
/// byte for byte. Otherwise the selected sentences are joined with a single
/// space, ordered by descending score; equal scores keep their original
/// document order (stable sort). `k == 0` yields an empty string.
///
/// # Errors
/// `Error::Summarization` on an internal selection fault; never on the
/// short-circuit path.
pub fn summarize(text: &str, k: usize) -> Result<String> {
    let sentences = splitter::split_sentences(text);
    if sentences.len() <= k {
        // Short-circuit: nothing to trim, no re-join
        return Ok(text.to_string());
    }

    let table = scoring::build_frequency_table(&sentences);
    debug!(
        sentences = sentences.len(),
        distinct_words = table.len(),
        k,
        "Scoring sentences for summary"
    );

    let mut scored: Vec<(&str, u64)> = sentences
        .iter()
        .map(|s| (*s, scoring::score_sentence(s, &table)))
        .collect();
    // WHY: stable sort on score alone keeps document order among ties
    scored.sort_by(|a, b| b.1.cmp(&a.1));

    let selected: Vec<&str> = scored.iter().take(k).map(|(s, _)| *s).collect();
    if selected.len() != k {
        return Err(Error::Summarization {
            message: format!("selected {} of {} requested sentences", selected.len(), k),
        });
    }

    Ok(selected.join(" "))
}
