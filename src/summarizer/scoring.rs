//! Frequency-based sentence scoring.
//!
//! The summarizer keeps its own word rule, separate from the frequency
//! module: lowercase the sentence, strip every character outside `[a-z ]`,
//! split on whitespace, drop blanks. "don't" therefore scores as "dont",
//! not as two words.

use std::collections::HashMap;

/// Words of a sentence under the summarizer's lowercase/strip rule
pub fn sentence_words(sentence: &str) -> Vec<String> {
    let stripped: String = sentence
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || *c == ' ')
        .collect();
    stripped.split_whitespace().map(str::to_string).collect()
}

/// Build the document-wide frequency table over all sentences combined
pub fn build_frequency_table(sentences: &[&str]) -> HashMap<String, u64> {
    let mut table = HashMap::new();
    for sentence in sentences {
        for word in sentence_words(sentence) {
            *table.entry(word).or_insert(0) += 1;
        }
    }
    table
}

/// Score a sentence as the sum of its words' global frequencies.
///
/// A word appearing twice in one sentence contributes its frequency twice.
pub fn score_sentence(sentence: &str, table: &HashMap<String, u64>) -> u64 {
    sentence_words(sentence)
        .iter()
        .map(|word| table.get(word).copied().unwrap_or(0))
        .sum()
}
