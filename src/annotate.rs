//! Converting findings into anchored review comments.

use chrono::Utc;

use crate::document::{Comment, Document};
use crate::finding::Finding;

/// Turn one finding into a comment with id `next_id`, anchored around every
/// run whose text contains the finding's span.
///
/// The comment is always appended to the document's collection and the id is
/// always consumed, even when zero runs match — the result is then an orphan
/// comment with no anchor in the body. Re-running annotation for the same
/// finding creates a second, independent comment; nothing is deduplicated.
///
/// Returns `next_id + 1`.
pub fn annotate(document: &mut Document, finding: &Finding, next_id: u32) -> u32 {
    document.push_comment(Comment {
        id: next_id,
        author: finding.category.label().to_string(),
        date: Utc::now(),
        body: finding.message.clone(),
    });

    let matches = document.find_runs_containing(&finding.span);
    if matches.is_empty() {
        tracing::debug!(span = %finding.span, id = next_id, "no run contains span; comment left unanchored");
    }

    // Splice back-to-front so the collected child indices stay valid.
    for address in matches.iter().rev() {
        if let Some(paragraph) = document.paragraph_mut(address.paragraph) {
            paragraph.wrap_run(address.child, next_id);
        }
    }

    next_id + 1
}
