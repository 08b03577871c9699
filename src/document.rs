//! Paragraph/run document model with inline comment anchors.
//!
//! A [`Document`] is an ordered sequence of [`Paragraph`]s plus the comment
//! collection owned by the document. Each paragraph is an ordered,
//! index-addressable sequence of [`Inline`] elements: literal text runs and
//! the three comment-anchor markers. Anchoring a comment never edits run
//! text; it replaces one run element with the fixed sub-sequence
//! `{range-start, run, range-end, reference}` via a vector splice.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The smallest addressable text unit: a literal string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    pub text: String,
}

impl Run {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// One element of a paragraph's child sequence.
///
/// The comment markers carry the id of the comment they anchor. A reference
/// marker stands where the original container places its synthetic
/// comment-reference run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Inline {
    Run(Run),
    CommentRangeStart { id: u32 },
    CommentRangeEnd { id: u32 },
    CommentReference { id: u32 },
}

/// A review comment owned by the document's comment collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: u32,
    pub author: String,
    pub date: DateTime<Utc>,
    pub body: String,
}

/// Address of a run inside a document: paragraph index + child index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunAddress {
    pub paragraph: usize,
    pub child: usize,
}

/// An ordered sequence of inline elements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    children: Vec<Inline>,
}

impl Paragraph {
    pub fn new(children: Vec<Inline>) -> Self {
        Self { children }
    }

    /// A paragraph holding a single run with the given text.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            children: vec![Inline::Run(Run::new(text))],
        }
    }

    pub fn children(&self) -> &[Inline] {
        &self.children
    }

    /// Concatenated text of all runs, with no separators inserted.
    pub fn plain_text(&self) -> String {
        let mut text = String::new();
        for child in &self.children {
            if let Inline::Run(run) = child {
                text.push_str(&run.text);
            }
        }
        text
    }

    /// Replace the run at `child` with `{start, run, end, reference}`,
    /// all three markers tagged with `comment_id`.
    pub(crate) fn wrap_run(&mut self, child: usize, comment_id: u32) {
        debug_assert!(
            matches!(self.children.get(child), Some(Inline::Run(_))),
            "wrap_run target must be a run element"
        );
        let run = self.children[child].clone();
        self.children.splice(
            child..=child,
            [
                Inline::CommentRangeStart { id: comment_id },
                run,
                Inline::CommentRangeEnd { id: comment_id },
                Inline::CommentReference { id: comment_id },
            ],
        );
    }
}

/// A structured document: paragraphs plus the comment collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    paragraphs: Vec<Paragraph>,
    #[serde(default)]
    comments: Vec<Comment>,
}

impl Document {
    pub fn new(paragraphs: Vec<Paragraph>) -> Self {
        Self {
            paragraphs,
            comments: Vec::new(),
        }
    }

    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    pub fn paragraph_mut(&mut self, index: usize) -> Option<&mut Paragraph> {
        self.paragraphs.get_mut(index)
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }

    pub(crate) fn push_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
    }

    /// Concatenated text of every run in the document.
    ///
    /// No separators are inserted at run or paragraph boundaries, so words
    /// that abut a paragraph break may merge in the flattened text.
    pub fn plain_text(&self) -> String {
        let mut text = String::new();
        for paragraph in &self.paragraphs {
            text.push_str(&paragraph.plain_text());
        }
        text
    }

    /// Addresses of every run whose own text contains `span` as a literal,
    /// case-insensitive substring, in paragraph order then child order.
    ///
    /// Matching is per run: a span that only appears when two adjacent runs'
    /// texts are concatenated is not found. Callers that depend on anchoring
    /// must treat an empty result as "span not locatable", not an error.
    pub fn find_runs_containing(&self, span: &str) -> Vec<RunAddress> {
        let needle = span.to_lowercase();
        let mut addresses = Vec::new();
        for (paragraph_idx, paragraph) in self.paragraphs.iter().enumerate() {
            for (child_idx, child) in paragraph.children.iter().enumerate() {
                if let Inline::Run(run) = child {
                    if run.text.to_lowercase().contains(&needle) {
                        addresses.push(RunAddress {
                            paragraph: paragraph_idx,
                            child: child_idx,
                        });
                    }
                }
            }
        }
        addresses
    }
}
