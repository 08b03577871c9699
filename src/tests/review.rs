//! End-to-end review behavior across checkers, annotator, and container.

use crate::document::{Document, Inline, Paragraph, Run};
use crate::error::ReviewError;
use crate::pipeline::Reviewer;
use crate::{load_document, save_document};

// 16 words: one over the default limit.
const LONG_SENTENCE: &str =
    "The system shall always respond fast to every request from every client under all load conditions.";

fn sample_document() -> Document {
    Document::new(vec![
        Paragraph::from_text(LONG_SENTENCE),
        Paragraph::from_text("Setup is simple."),
    ])
}

#[test]
fn test_ids_are_sequential_with_atomicity_before_ambiguity() {
    let mut document = sample_document();
    Reviewer::new().process(&mut document);

    let ids: Vec<u32> = document.comments().iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    let authors: Vec<&str> = document
        .comments()
        .iter()
        .map(|c| c.author.as_str())
        .collect();
    assert_eq!(authors, vec!["Atomicity", "Ambiguity", "Ambiguity"]);

    // Ambiguity findings arrive in lexicon order: "fast" before "simple".
    assert!(document.comments()[1].body.contains("'fast'"));
    assert!(document.comments()[2].body.contains("'simple'"));
}

#[test]
fn test_every_comment_is_anchored_when_spans_are_within_runs() {
    let mut document = sample_document();
    Reviewer::new().process(&mut document);

    for comment in document.comments() {
        let id = comment.id;
        let anchored = document
            .paragraphs()
            .iter()
            .flat_map(|p| p.children())
            .any(|child| matches!(child, Inline::CommentRangeStart { id: start } if *start == id));
        assert!(anchored, "comment {id} has no anchor");
    }
}

#[test]
fn test_processing_twice_doubles_the_comments() {
    let mut document = sample_document();
    let reviewer = Reviewer::new();

    reviewer.process(&mut document);
    let first_pass = document.comment_count();
    reviewer.process(&mut document);

    // No deduplication across passes: the counts double and the new ids
    // continue where the first pass stopped.
    assert_eq!(document.comment_count(), first_pass * 2);
    let ids: Vec<u32> = document.comments().iter().map(|c| c.id).collect();
    assert_eq!(ids, (1..=first_pass as u32 * 2).collect::<Vec<u32>>());
}

#[test]
fn test_ids_continue_after_pre_existing_comments() {
    let bytes = br#"{
        "paragraphs": [
            {"children": [{"kind": "run", "text": "A fast reply."}]}
        ],
        "comments": [
            {"id": 1, "author": "Reviewer", "date": "2024-01-01T00:00:00Z", "body": "first"},
            {"id": 2, "author": "Reviewer", "date": "2024-01-01T00:00:00Z", "body": "second"}
        ]
    }"#;

    let mut document = load_document(bytes).unwrap();
    Reviewer::new().process(&mut document);

    assert_eq!(document.comment_count(), 3);
    assert_eq!(document.comments()[2].id, 3);
    assert_eq!(document.comments()[2].author, "Ambiguity");
}

#[test]
fn test_checkers_can_run_separately() {
    let mut atomicity_only = sample_document();
    Reviewer::empty()
        .with_atomicity(crate::AtomicityChecker::new())
        .process(&mut atomicity_only);
    assert_eq!(atomicity_only.comment_count(), 1);
    assert_eq!(atomicity_only.comments()[0].author, "Atomicity");

    let mut ambiguity_only = sample_document();
    Reviewer::empty()
        .with_ambiguity(crate::AmbiguityChecker::new())
        .process(&mut ambiguity_only);
    assert_eq!(ambiguity_only.comment_count(), 2);
    assert!(ambiguity_only
        .comments()
        .iter()
        .all(|c| c.author == "Ambiguity"));
}

#[test]
fn test_review_bytes_round_trip() {
    let bytes =
        br#"{"paragraphs": [{"children": [{"kind": "run", "text": "Parsing is fast."}]}]}"#;

    let annotated = Reviewer::new().review_bytes(bytes).unwrap();
    let document = load_document(&annotated).unwrap();

    assert_eq!(document.comment_count(), 1);
    assert_eq!(document.comments()[0].id, 1);
    assert_eq!(
        document.paragraphs()[0].children(),
        &[
            Inline::CommentRangeStart { id: 1 },
            Inline::Run(Run::new("Parsing is fast.")),
            Inline::CommentRangeEnd { id: 1 },
            Inline::CommentReference { id: 1 },
        ]
    );
}

#[test]
fn test_malformed_bytes_fail_before_any_output() {
    let err = Reviewer::new().review_bytes(b"garbage").unwrap_err();
    assert!(matches!(err, ReviewError::InvalidFormat { .. }));
}

#[test]
fn test_span_across_runs_leaves_an_orphan_comment() {
    // "simple" only exists across the two runs, so the ambiguity comment
    // cannot be anchored; it still consumes an id.
    let mut document = Document::new(vec![Paragraph::new(vec![
        Inline::Run(Run::new("This is sim")),
        Inline::Run(Run::new("ple enough.")),
    ])]);
    Reviewer::new().process(&mut document);

    assert_eq!(document.comment_count(), 1);
    assert!(document.comments()[0].body.contains("'simple'"));
    let any_marker = document
        .paragraphs()
        .iter()
        .flat_map(|p| p.children())
        .any(|child| !matches!(child, Inline::Run(_)));
    assert!(!any_marker);
}

#[test]
fn test_annotated_document_survives_serialization() {
    let mut document = sample_document();
    Reviewer::new().process(&mut document);

    let bytes = save_document(&document).unwrap();
    let reloaded = load_document(&bytes).unwrap();

    assert_eq!(reloaded.comment_count(), document.comment_count());
    assert_eq!(reloaded.paragraphs(), document.paragraphs());
}
