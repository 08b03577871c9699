//! Overlong-sentence detection.

use crate::document::Document;
use crate::finding::{Category, Finding};
use crate::segment::{sentences, word_count};

/// Default word-count limit above which a sentence is flagged.
pub const DEFAULT_WORD_LIMIT: usize = 15;

/// Checker flagging sentences that exceed a word-count limit.
///
/// Sentences are evaluated independently; a paragraph may yield zero or many
/// findings. A sentence with exactly the limit is not flagged.
#[derive(Debug, Clone)]
pub struct AtomicityChecker {
    word_limit: usize,
}

impl AtomicityChecker {
    pub fn new() -> Self {
        Self {
            word_limit: DEFAULT_WORD_LIMIT,
        }
    }

    pub fn with_word_limit(mut self, word_limit: usize) -> Self {
        self.word_limit = word_limit;
        self
    }

    pub fn word_limit(&self) -> usize {
        self.word_limit
    }

    /// Scan every sentence of every non-blank paragraph.
    pub fn check(&self, document: &Document) -> Vec<Finding> {
        let mut findings = Vec::new();

        for paragraph in document.paragraphs() {
            let text = paragraph.plain_text();
            if text.trim().is_empty() {
                continue;
            }

            for sentence in sentences(&text) {
                if word_count(sentence) > self.word_limit {
                    findings.push(Finding {
                        category: Category::Atomicity,
                        span: sentence.to_string(),
                        message: format!(
                            "Sentence exceeds {} words and may be too complex for atomicity.",
                            self.word_limit
                        ),
                    });
                }
            }
        }

        findings
    }
}

impl Default for AtomicityChecker {
    fn default() -> Self {
        Self::new()
    }
}
