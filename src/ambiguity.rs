//! Ambiguous-term detection.
//!
//! A fixed lexicon of word stems denoting vague qualities is matched against
//! the whole-document plain text. Each stem matches whole words beginning
//! with it: word-boundary-delimited, case-insensitive, with an arbitrary
//! word-character suffix. The suffix is deliberate — it catches inflected
//! forms ("faster", "simplest"), at the cost of also catching derivations
//! like "fastened".

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::document::Document;
use crate::finding::{Category, Finding};

/// Default lexicon of vague-quality word stems, in match order.
pub const DEFAULT_STEMS: &[&str] = &[
    "fast",
    "convenient",
    "easy",
    "simple",
    "efficient",
    "optimal",
    "large",
    "small",
    "modern",
];

#[derive(Debug, Clone)]
struct StemPattern {
    stem: String,
    pattern: Regex,
}

fn compile_stem(stem: &str) -> StemPattern {
    // regex::escape keeps arbitrary stems valid as literal prefixes.
    let pattern = Regex::new(&format!(r"(?i)\b{}\w*\b", regex::escape(stem)))
        .expect("escaped stem compiles");
    StemPattern {
        stem: stem.to_string(),
        pattern,
    }
}

static DEFAULT_PATTERNS: Lazy<Vec<StemPattern>> =
    Lazy::new(|| DEFAULT_STEMS.iter().map(|stem| compile_stem(stem)).collect());

/// Checker flagging word forms that start with an ambiguous stem.
///
/// Matched forms are deduplicated globally across all stems: one finding per
/// distinct form in the document, ordered by lexicon order then scan order.
#[derive(Debug, Clone)]
pub struct AmbiguityChecker {
    patterns: Vec<StemPattern>,
}

impl AmbiguityChecker {
    /// Checker with the default vague-quality lexicon.
    pub fn new() -> Self {
        Self {
            patterns: DEFAULT_PATTERNS.clone(),
        }
    }

    /// Checker with a custom stem lexicon, matched in iteration order.
    pub fn from_stems<I, S>(stems: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            patterns: stems
                .into_iter()
                .map(|stem| compile_stem(stem.as_ref()))
                .collect(),
        }
    }

    /// The stems this checker matches, in match order.
    pub fn stems(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(|p| p.stem.as_str())
    }

    /// Scan the whole-document plain text for ambiguous word forms.
    pub fn check(&self, document: &Document) -> Vec<Finding> {
        let text = document.plain_text();
        let mut seen = HashSet::new();
        let mut findings = Vec::new();

        for StemPattern { pattern, .. } in &self.patterns {
            for matched in pattern.find_iter(&text) {
                let form = matched.as_str().to_string();
                if seen.insert(form.clone()) {
                    findings.push(Finding {
                        category: Category::Ambiguity,
                        message: format!(
                            "The term '{form}' is likely ambiguous. Make sure to clarify its intended meaning."
                        ),
                        span: form,
                    });
                }
            }
        }

        findings
    }
}

impl Default for AmbiguityChecker {
    fn default() -> Self {
        Self::new()
    }
}
