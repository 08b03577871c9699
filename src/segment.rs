//! Sentence segmentation and word counting.
//!
//! Sentences are split on boundaries located immediately after one of
//! `. ! ?` and followed by whitespace; the whitespace run is consumed, so
//! consecutive whitespace collapses into a single split point. This is a
//! punctuation heuristic, not sentence-boundary disambiguation: abbreviations
//! like "e.g." followed by a space do split.

/// A lazy, finite iterator over the sentence-like units of one text.
///
/// Restartable by calling [`sentences`] again on the same text.
pub struct Sentences<'a> {
    remaining: &'a str,
}

/// Iterate the sentences of `text`.
///
/// Empty or whitespace-only input yields nothing. Trailing text without a
/// terminal punctuation mark is yielded as a final sentence.
pub fn sentences(text: &str) -> Sentences<'_> {
    Sentences { remaining: text }
}

impl<'a> Iterator for Sentences<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.remaining.trim().is_empty() {
            self.remaining = "";
            return None;
        }

        let mut after_terminal = false;
        for (idx, ch) in self.remaining.char_indices() {
            if ch.is_whitespace() && after_terminal {
                let sentence = &self.remaining[..idx];
                self.remaining = self.remaining[idx..].trim_start();
                return Some(sentence);
            }
            after_terminal = matches!(ch, '.' | '!' | '?');
        }

        let sentence = self.remaining;
        self.remaining = "";
        Some(sentence)
    }
}

/// Number of nonempty whitespace-separated tokens in `text`.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
