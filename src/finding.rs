//! Findings produced by the checkers, prior to annotation.

/// The class of writing-quality defect a finding reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// A sentence exceeding the word-count limit.
    Atomicity,
    /// A lexically ambiguous term.
    Ambiguity,
}

impl Category {
    /// The display label used as the comment author for this category.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Atomicity => "Atomicity",
            Category::Ambiguity => "Ambiguity",
        }
    }
}

/// A detected defect: the triggering text span plus the review message.
///
/// Findings are transient values; the annotator converts each one into a
/// comment anchored to the runs containing its span.
#[derive(Debug, Clone, PartialEq)]
pub struct Finding {
    pub category: Category,
    /// The exact text that triggered the finding (a sentence or a word form).
    pub span: String,
    pub message: String,
}
