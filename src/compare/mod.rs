//! Comparison engine.
//!
//! Two pipelines produce a [`ComparisonResult`]:
//!
//! - **Text**: normalize both texts, then diff them at the configured
//!   [`DetailLevel`] (characters, words, sentences or paragraphs).
//! - **Structural**: align paragraphs by fuzzy LCS, report gaps as
//!   additions and deletions, matched pairs as modifications or formatting
//!   changes, then compare tables.

mod alignment;
mod char_diff;
mod cleanup;
mod edit_script;
mod format;
mod normalize;
mod options;
mod sequence;
mod similarity;
mod structural;
mod table;
mod text;
mod word_diff;

pub use alignment::{align_paragraphs, MatchedPair};
pub use char_diff::diff_characters;
pub use cleanup::cleanup_semantic;
pub use edit_script::{coalesce, edit_script, Edit, EditOp};
pub use format::{compare_runs, describe_formatting_change, formatting_equal};
pub use normalize::Normalizer;
pub use options::{ComparisonMode, ComparisonOptions, ComparisonTuning, DetailLevel, DisplayMode};
pub use sequence::{Granularity, SequenceAligner};
pub use similarity::{are_similar, similarity};
pub use table::compare_tables;
pub use word_diff::{diff_words, TokenTable};

use crate::error::{Error, Result};
use crate::model::{Document, DocumentInfo};
use crate::result::{Change, ChangeCollector, ComparisonResult};
use rayon::prelude::*;

/// Compare two documents with the pipeline selected by `options.mode`.
///
/// In [`ComparisonMode::Auto`] the structural pipeline runs when both
/// documents carry a structural model and the text pipeline otherwise.
pub fn compare_documents(
    original: &Document,
    modified: &Document,
    options: &ComparisonOptions,
) -> Result<ComparisonResult> {
    match options.mode {
        ComparisonMode::Text => Ok(compare_text_documents(original, modified, options)),
        ComparisonMode::Structural => compare_structural(original, modified, options),
        ComparisonMode::Auto => {
            if original.has_structure() && modified.has_structure() {
                compare_structural(original, modified, options)
            } else {
                Ok(compare_text_documents(original, modified, options))
            }
        }
    }
}

/// Compare two plain texts. Never fails.
pub fn compare_texts(text1: &str, text2: &str, options: &ComparisonOptions) -> ComparisonResult {
    let original = DocumentInfo::new("original").with_size(text1.len() as u64);
    let modified = DocumentInfo::new("modified").with_size(text2.len() as u64);
    ComparisonResult::new(original, modified, diff_text(text1, text2, options))
}

/// Compare the structural models of two documents.
///
/// Fails with [`Error::MissingStructure`] when either document has none,
/// and with [`Error::AlignmentTooLarge`] when the paragraph counts exceed
/// the configured alignment limit.
pub fn compare_structural(
    original: &Document,
    modified: &Document,
    options: &ComparisonOptions,
) -> Result<ComparisonResult> {
    let structure_a = original
        .structure
        .as_ref()
        .ok_or_else(|| Error::MissingStructure(original.name().to_string()))?;
    let structure_b = modified
        .structure
        .as_ref()
        .ok_or_else(|| Error::MissingStructure(modified.name().to_string()))?;

    log_reserved_toggles(options);
    log::debug!(
        "Structural comparison: {} ({} paragraphs) vs {} ({} paragraphs)",
        original.name(),
        structure_a.paragraph_count(),
        modified.name(),
        structure_b.paragraph_count()
    );

    let mut collector = ChangeCollector::new();
    structural::compare_structure(structure_a, structure_b, options, &mut collector)?;

    Ok(ComparisonResult::new(
        original.info.clone(),
        modified.info.clone(),
        collector.finish(),
    ))
}

/// Compare many document pairs in parallel.
///
/// Each pair is compared independently; results are returned in input
/// order.
pub fn compare_batch(
    pairs: &[(Document, Document)],
    options: &ComparisonOptions,
) -> Vec<Result<ComparisonResult>> {
    log::debug!("Comparing {} document pairs", pairs.len());
    pairs
        .par_iter()
        .map(|(original, modified)| compare_documents(original, modified, options))
        .collect()
}

fn compare_text_documents(
    original: &Document,
    modified: &Document,
    options: &ComparisonOptions,
) -> ComparisonResult {
    let changes = diff_text(&original.content, &modified.content, options);
    ComparisonResult::new(original.info.clone(), modified.info.clone(), changes)
}

fn diff_text(
    text1: &str,
    text2: &str,
    options: &ComparisonOptions,
) -> Vec<Change> {
    log_reserved_toggles(options);
    log::debug!(
        "Text comparison at {:?} level: {} vs {} bytes",
        options.detail_level,
        text1.len(),
        text2.len()
    );

    let mut collector = ChangeCollector::new();
    text::compare_text(text1, text2, options, &mut collector);
    log::debug!("Text comparison produced {} changes", collector.len());
    collector.finish()
}

fn log_reserved_toggles(options: &ComparisonOptions) {
    let toggles = options.reserved_toggles();
    if !toggles.is_empty() {
        log::debug!("Options without effect yet: {}", toggles.join(", "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DocumentStructure;
    use crate::result::ChangeType;

    fn structured(name: &str, paragraphs: &[&str]) -> Document {
        Document::from_structure(name, DocumentStructure::from_paragraphs(paragraphs.iter().copied()))
    }

    #[test]
    fn test_compare_texts_identical() {
        let result = compare_texts("same text", "same text", &ComparisonOptions::default());
        assert!(result.is_identical());
        assert_eq!(result.statistics().total_changes, 0);
    }

    #[test]
    fn test_auto_mode_uses_structure() {
        let a = structured("a.docx", &["A", "B"]);
        let b = structured("b.docx", &["A", "C", "B"]);
        let result = compare_documents(&a, &b, &ComparisonOptions::default()).unwrap();

        assert_eq!(result.statistics().added, 1);
        assert_eq!(result.statistics().total_changes, 1);
        assert_eq!(result.original().name, "a.docx");
    }

    #[test]
    fn test_auto_mode_falls_back_to_text() {
        let a = Document::from_text("a.txt", "hello");
        let b = structured("b.docx", &["hello world"]);
        let result = compare_documents(&a, &b, &ComparisonOptions::default()).unwrap();

        assert_eq!(result.changes().len(), 1);
        assert_eq!(result.changes()[0].change_type, ChangeType::Added);
    }

    #[test]
    fn test_text_mode_ignores_structure() {
        let a = structured("a", &["A", "B"]);
        let b = structured("b", &["A", "C", "B"]);
        let options = ComparisonOptions::new()
            .with_mode(ComparisonMode::Text)
            .with_detail_level(DetailLevel::Paragraph);
        let result = compare_documents(&a, &b, &options).unwrap();

        assert_eq!(result.statistics().modified, 1);
        assert_eq!(result.statistics().added, 1);
    }

    #[test]
    fn test_structural_requires_structure() {
        let a = Document::from_text("plain.txt", "text");
        let b = structured("b", &["text"]);
        let options = ComparisonOptions::new().with_mode(ComparisonMode::Structural);

        let err = compare_documents(&a, &b, &options).unwrap_err();
        assert!(matches!(err, Error::MissingStructure(ref name) if name == "plain.txt"));
    }

    #[test]
    fn test_batch_preserves_order() {
        let pairs = vec![
            (Document::from_text("1", "a"), Document::from_text("1", "a")),
            (Document::from_text("2", "a"), Document::from_text("2", "ab")),
            (
                Document::from_text("3", "x"),
                structured("3", &["x"]),
            ),
        ];
        let results = compare_batch(&pairs, &ComparisonOptions::default());

        assert_eq!(results.len(), 3);
        assert!(results[0].as_ref().unwrap().is_identical());
        assert_eq!(results[1].as_ref().unwrap().statistics().added, 1);
        assert_eq!(results[2].as_ref().unwrap().original().name, "3");
    }
}
