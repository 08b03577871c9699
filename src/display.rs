//! Debug rendering of annotated paragraphs.
//!
//! Renders a paragraph's flattened text on one line, with an aligned rail
//! under each anchored span naming the comment it belongs to:
//!
//! ```text
//! Deployment is fast and cheap.
//!               ╰──╯ #1 Ambiguity
//! ```
//!
//! Intended for tests and diagnostics; the rendering has no effect on the
//! container bytes.

use std::fmt::Write as _;

use unicode_width::UnicodeWidthStr;

use crate::document::{Comment, Document, Inline, Paragraph};

struct Anchor {
    id: u32,
    start: usize,
    end: usize,
}

/// Display adapter for one paragraph of an annotated document.
pub struct AnnotatedParagraph<'a> {
    paragraph: &'a Paragraph,
    comments: &'a [Comment],
}

impl<'a> AnnotatedParagraph<'a> {
    pub fn new(document: &'a Document, index: usize) -> Option<Self> {
        document.paragraphs().get(index).map(|paragraph| Self {
            paragraph,
            comments: document.comments(),
        })
    }

    fn author_of(&self, id: u32) -> &str {
        self.comments
            .iter()
            .find(|comment| comment.id == id)
            .map(|comment| comment.author.as_str())
            .unwrap_or("?")
    }
}

impl std::fmt::Display for AnnotatedParagraph<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut line = String::new();
        let mut anchors: Vec<Anchor> = Vec::new();

        for child in self.paragraph.children() {
            match child {
                Inline::Run(run) => line.push_str(&run.text),
                Inline::CommentRangeStart { id } => anchors.push(Anchor {
                    id: *id,
                    start: UnicodeWidthStr::width(line.as_str()),
                    end: UnicodeWidthStr::width(line.as_str()),
                }),
                Inline::CommentRangeEnd { id } => {
                    let width = UnicodeWidthStr::width(line.as_str());
                    if let Some(anchor) =
                        anchors.iter_mut().rev().find(|anchor| anchor.id == *id)
                    {
                        anchor.end = width;
                    }
                }
                Inline::CommentReference { .. } => {}
            }
        }

        f.write_str(&line)?;

        for anchor in &anchors {
            f.write_char('\n')?;
            for _ in 0..anchor.start {
                f.write_char(' ')?;
            }
            f.write_char('╰')?;
            for _ in (anchor.start + 1)..anchor.end.saturating_sub(1) {
                f.write_char('─')?;
            }
            if anchor.end > anchor.start + 1 {
                f.write_char('╯')?;
            }
            write!(f, " #{} {}", anchor.id, self.author_of(anchor.id))?;
        }

        Ok(())
    }
}
