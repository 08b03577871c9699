//! Review-comment annotation engine for structured paragraph/run documents.
//!
//! `redline` analyzes a document for two classes of writing-quality defects —
//! overlong ("non-atomic") sentences and lexically ambiguous terms — and
//! produces an annotated copy with inline review comments anchored to the
//! exact text spans that triggered each finding.
//!
//! ## Core Types
//!
//! - [`Document`] / [`Paragraph`] / [`Inline`] - the paragraph/run tree with
//!   inline comment anchors
//! - [`AtomicityChecker`] / [`AmbiguityChecker`] - the two defect detectors
//! - [`Finding`] - a detected defect prior to annotation
//! - [`Reviewer`] - the orchestrator: check, annotate, and thread comment ids
//!
//! ## Example
//!
//! ```
//! use redline::{Document, Paragraph, Reviewer};
//!
//! let mut document = Document::new(vec![Paragraph::from_text(
//!     "The deployment must be fast.",
//! )]);
//! Reviewer::new().process(&mut document);
//!
//! // "fast" matched the ambiguity lexicon.
//! assert_eq!(document.comment_count(), 1);
//! assert_eq!(document.comments()[0].author, "Ambiguity");
//! ```

mod ambiguity;
mod annotate;
mod atomicity;
mod container;
mod display;
mod document;
mod error;
mod finding;
mod pipeline;
mod segment;

pub use ambiguity::{AmbiguityChecker, DEFAULT_STEMS};
pub use annotate::annotate;
pub use atomicity::{AtomicityChecker, DEFAULT_WORD_LIMIT};
pub use container::{load_document, save_document};
pub use display::AnnotatedParagraph;
pub use document::{Comment, Document, Inline, Paragraph, Run, RunAddress};
pub use error::{ReviewError, ReviewResult};
pub use finding::{Category, Finding};
pub use pipeline::{checked_filename, Reviewer};
pub use segment::{sentences, word_count, Sentences};
