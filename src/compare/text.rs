//! Plain text pipeline.

use super::char_diff::diff_characters;
use super::normalize::Normalizer;
use super::sequence::{Granularity, SequenceAligner};
use super::word_diff::diff_words;
use super::{ComparisonOptions, DetailLevel};
use crate::result::ChangeCollector;

/// Normalize both texts and diff them at the configured detail level.
///
/// Change contents are taken from the normalized texts, so with the
/// default case-insensitive options they are lower-cased. Collapsing
/// whitespace also joins blank-line separated paragraphs.
pub fn compare_text(
    text1: &str,
    text2: &str,
    options: &ComparisonOptions,
    collector: &mut ChangeCollector,
) {
    let normalizer = Normalizer::new(options);
    let text1 = normalizer.normalize(text1);
    let text2 = normalizer.normalize(text2);

    match options.detail_level {
        DetailLevel::Character => diff_characters(&text1, &text2, &options.tuning, collector),
        DetailLevel::Word => diff_words(&text1, &text2, &options.tuning, collector),
        DetailLevel::Sentence => {
            SequenceAligner::new().compare(Granularity::Sentence, &text1, &text2, collector)
        }
        DetailLevel::Paragraph => {
            SequenceAligner::new().compare(Granularity::Paragraph, &text1, &text2, collector)
        }
    }
}
