//! Word-frequency counting.
//!
//! Tokenization rule: lowercase the text, split on runs of non-word
//! characters (`[^A-Za-z0-9_]`), then keep only tokens made purely of
//! ASCII letters. A token carrying a digit or underscore is dropped
//! entirely, never partially cleaned.

use rayon::prelude::*;
use std::collections::HashMap;

/// Number of tokens each parallel worker counts before merging
const PARALLEL_CHUNK: usize = 4096;

/// Count word occurrences in `text`.
///
/// Traversal order of the returned table is unspecified; only the
/// key/count pairs are part of the contract.
pub fn count(text: &str) -> HashMap<String, u64> {
    let lowered = text.to_lowercase();
    let mut table = HashMap::new();
    for token in tokens(&lowered) {
        *table.entry(token.to_string()).or_insert(0) += 1;
    }
    table
}

/// Count word occurrences with data-parallel workers.
///
/// Tokens are partitioned into disjoint chunks, each worker builds a
/// partial table, and partials are merged by summing counts per key.
/// WHY: the merge is associative and commutative, so the result is
/// identical to [`count`] for any partitioning.
pub fn count_parallel(text: &str) -> HashMap<String, u64> {
    let lowered = text.to_lowercase();
    let token_list: Vec<&str> = tokens(&lowered).collect();

    let partials: Vec<HashMap<&str, u64>> = token_list
        .par_chunks(PARALLEL_CHUNK)
        .map(|chunk| {
            let mut partial = HashMap::new();
            for token in chunk {
                *partial.entry(*token).or_insert(0) += 1;
            }
            partial
        })
        .collect();

    let mut table = HashMap::new();
    for partial in partials {
        for (token, n) in partial {
            *table.entry(token.to_string()).or_insert(0) += n;
        }
    }
    table
}

fn tokens(lowered: &str) -> impl Iterator<Item = &str> {
    lowered
        .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .filter(|t| !t.is_empty() && t.chars().all(|c| c.is_ascii_alphabetic()))
}
