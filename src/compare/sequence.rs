//! Index-aligned sentence and paragraph comparison.
//!
//! Fragments are compared strictly by position: fragment `i` of the
//! original against fragment `i` of the modified text. There is no
//! resynchronization, so a single inserted sentence makes every following
//! sentence look modified. The structural pipeline aligns paragraphs with
//! LCS instead; this mode is the cheap, lower-fidelity alternative.

use crate::result::{ChangeCollector, Position};
use regex::Regex;

/// Unit of index-aligned comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    /// Split on `.`, `!` or `?` followed by whitespace; compared exactly
    Sentence,
    /// Split on blank lines; compared after trimming
    Paragraph,
}

/// Splits texts into fragments and compares them index by index.
pub struct SequenceAligner {
    sentence_boundary: Regex,
    paragraph_boundary: Regex,
}

impl SequenceAligner {
    /// Create an aligner.
    pub fn new() -> Self {
        Self {
            sentence_boundary: Regex::new(r"[.!?]\s+").unwrap(),
            paragraph_boundary: Regex::new(r"\n\s*\n").unwrap(),
        }
    }

    /// Split `text` into non-empty fragments. Boundaries are dropped, so a
    /// sentence fragment loses its terminal punctuation.
    pub fn split<'a>(&self, granularity: Granularity, text: &'a str) -> Vec<&'a str> {
        let boundary = match granularity {
            Granularity::Sentence => &self.sentence_boundary,
            Granularity::Paragraph => &self.paragraph_boundary,
        };
        boundary
            .split(text)
            .filter(|s| !s.trim().is_empty())
            .collect()
    }

    /// Compare two texts fragment by fragment.
    ///
    /// Only-original fragments are deletions, only-modified fragments are
    /// additions and unequal pairs are modifications, each positioned at
    /// the fragment's 1-based index.
    pub fn compare(
        &self,
        granularity: Granularity,
        text1: &str,
        text2: &str,
        collector: &mut ChangeCollector,
    ) {
        let original = self.split(granularity, text1);
        let modified = self.split(granularity, text2);
        log::debug!(
            "{:?} comparison: {} vs {} fragments",
            granularity,
            original.len(),
            modified.len()
        );

        for i in 0..original.len().max(modified.len()) {
            let position = Position::paragraph(i + 1);
            match (original.get(i), modified.get(i)) {
                (Some(a), None) => collector.deleted(*a, position),
                (None, Some(b)) => collector.added(*b, position),
                (Some(a), Some(b)) => {
                    let equal = match granularity {
                        Granularity::Sentence => a == b,
                        Granularity::Paragraph => a.trim() == b.trim(),
                    };
                    if !equal {
                        collector.modified(*a, *b, position);
                    }
                }
                (None, None) => {}
            }
        }
    }
}

impl Default for SequenceAligner {
    fn default() -> Self {
        Self::new()
    }
}
