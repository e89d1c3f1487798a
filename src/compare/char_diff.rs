//! Character-level differ.

use super::cleanup::cleanup_semantic;
use super::edit_script::{edit_script, EditOp};
use super::ComparisonTuning;
use crate::result::{ChangeCollector, Position};

/// Diff two texts character by character and record one change per
/// deletion or insertion segment.
///
/// Positions are estimated from the character offset in the original text,
/// which advances over deleted and equal segments only.
pub fn diff_characters(
    text1: &str,
    text2: &str,
    tuning: &ComparisonTuning,
    collector: &mut ChangeCollector,
) {
    if text1 == text2 {
        return;
    }

    let old: Vec<char> = text1.chars().collect();
    let new: Vec<char> = text2.chars().collect();
    let edits = cleanup_semantic(edit_script(&old, &new));
    log::debug!(
        "Character diff: {} -> {} chars, {} segments",
        old.len(),
        new.len(),
        edits.len()
    );

    let mut offset = 0;
    for edit in &edits {
        let position = Position::paragraph(tuning.paragraph_for_char(offset));
        match edit.op {
            EditOp::Delete => collector.deleted(edit.text(), position),
            EditOp::Insert => collector.added(edit.text(), position),
            EditOp::Equal => {}
        }
        if edit.op != EditOp::Insert {
            offset += edit.len();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::{Change, ChangeType};

    fn diff(a: &str, b: &str) -> Vec<Change> {
        let mut collector = ChangeCollector::new();
        diff_characters(a, b, &ComparisonTuning::default(), &mut collector);
        collector.finish()
    }

    #[test]
    fn test_identical_texts() {
        assert!(diff("같은 문장", "같은 문장").is_empty());
        assert!(diff("", "").is_empty());
    }

    #[test]
    fn test_appended_text() {
        let changes = diff("안녕하세요", "안녕하세요 반갑습니다");
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].change_type, ChangeType::Added);
        assert_eq!(changes[0].content, " 반갑습니다");
        assert_eq!(changes[0].after_content.as_deref(), Some(" 반갑습니다"));
    }

    #[test]
    fn test_deleted_text() {
        let changes = diff("hello cruel world", "hello world");
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].change_type, ChangeType::Deleted);
        assert_eq!(changes[0].before_content.as_deref(), Some(changes[0].content.as_str()));
    }

    #[test]
    fn test_disjoint_texts() {
        let changes = diff("abc", "xyz");
        assert_eq!(changes.len(), 2);
        assert_eq!(changes[0].change_type, ChangeType::Deleted);
        assert_eq!(changes[0].content, "abc");
        assert_eq!(changes[1].change_type, ChangeType::Added);
        assert_eq!(changes[1].content, "xyz");
    }

    #[test]
    fn test_position_from_offset() {
        let original = "a".repeat(250);
        let modified = format!("{}b", original);
        let changes = diff(&original, &modified);
        assert_eq!(changes.len(), 1);
        // offset 250 / 100 + 1
        assert_eq!(changes[0].position.paragraph, 3);
        assert_eq!(changes[0].position.page, 1);
    }

    #[test]
    fn test_custom_chars_per_paragraph() {
        let tuning = ComparisonTuning {
            chars_per_paragraph: 10,
            ..ComparisonTuning::default()
        };
        let mut collector = ChangeCollector::new();
        diff_characters("0123456789012345", "0123456789012345!", &tuning, &mut collector);
        let changes = collector.finish();
        assert_eq!(changes[0].position.paragraph, 2);
    }
}
