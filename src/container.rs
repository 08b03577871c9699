//! Byte-level load/save of the JSON document container.
//!
//! The container is the serde representation of [`Document`]: a `paragraphs`
//! array of inline-element sequences plus a `comments` collection. The
//! `comments` field may be absent in source documents; `paragraphs` is the
//! body and is required.

use crate::document::Document;
use crate::error::{ReviewError, ReviewResult};

/// Parse container bytes into a [`Document`].
///
/// Fails with [`ReviewError::InvalidFormat`] before any mutation when the
/// bytes are not well-formed JSON or do not have the container's shape.
pub fn load_document(bytes: &[u8]) -> ReviewResult<Document> {
    serde_json::from_slice(bytes).map_err(|err| ReviewError::InvalidFormat {
        message: err.to_string(),
    })
}

/// Serialize a [`Document`] back to container bytes.
pub fn save_document(document: &Document) -> ReviewResult<Vec<u8>> {
    serde_json::to_vec_pretty(document).map_err(|err| ReviewError::Serialize {
        message: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Inline, Paragraph, Run};

    #[test]
    fn test_load_rejects_malformed_bytes() {
        let err = load_document(b"not a container").unwrap_err();
        assert!(matches!(err, ReviewError::InvalidFormat { .. }));
    }

    #[test]
    fn test_load_rejects_missing_body() {
        let err = load_document(br#"{"comments": []}"#).unwrap_err();
        assert!(matches!(err, ReviewError::InvalidFormat { .. }));
    }

    #[test]
    fn test_comments_collection_is_optional_on_load() {
        let document = load_document(
            br#"{"paragraphs": [{"children": [{"kind": "run", "text": "Hello."}]}]}"#,
        )
        .unwrap();
        assert_eq!(document.comment_count(), 0);
        assert_eq!(document.plain_text(), "Hello.");
    }

    #[test]
    fn test_round_trip_preserves_markers() {
        let mut document = Document::new(vec![Paragraph::new(vec![
            Inline::Run(Run::new("Hello.")),
        ])]);
        document.paragraph_mut(0).unwrap().wrap_run(0, 1);

        let bytes = save_document(&document).unwrap();
        let reloaded = load_document(&bytes).unwrap();
        assert_eq!(reloaded.paragraphs(), document.paragraphs());
    }
}
