//! Sentence boundary detection for summarization.
//!
//! A boundary occurs immediately after a `.`, `!`, or `?` that is followed
//! by one or more whitespace characters. The whitespace run is the
//! separator and belongs to neither sentence. Punctuation not followed by
//! whitespace (abbreviation dots, "3.14", "Wow!!") does not split.

/// Split `text` into sentences, borrowing slices of the source.
///
/// Text after the last boundary becomes the final sentence even without
/// terminating punctuation; a trailing separator leaves no empty sentence
/// behind.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if !matches!(ch, '.' | '!' | '?') {
            continue;
        }
        let followed_by_whitespace = chars.peek().is_some_and(|&(_, next)| next.is_whitespace());
        if !followed_by_whitespace {
            continue;
        }

        let end = idx + ch.len_utf8();
        sentences.push(&text[start..end]);

        // consume the separator whitespace run
        start = end;
        while let Some(&(ws_idx, ws_ch)) = chars.peek() {
            if !ws_ch.is_whitespace() {
                break;
            }
            start = ws_idx + ws_ch.len_utf8();
            chars.next();
        }
    }

    if start < text.len() {
        sentences.push(&text[start..]);
    }
    sentences
}
