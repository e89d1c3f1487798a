//! Change collection with sequential id assignment.

use super::{Change, ChangeType, Position};

/// Collects changes emitted by the comparison stages.
///
/// Ids are `change-<n>`, numbered from 0 in emission order, so they are
/// unique within one result but not stable across runs.
#[derive(Debug, Default)]
pub struct ChangeCollector {
    changes: Vec<Change>,
}

impl ChangeCollector {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, change_type: ChangeType, content: String, position: Position) -> &mut Change {
        let id = format!("change-{}", self.changes.len());
        self.changes
            .push(Change::new(id, change_type, content, position));
        let last = self.changes.len() - 1;
        &mut self.changes[last]
    }

    /// Record content present only in the modified document.
    pub fn added(&mut self, content: impl Into<String>, position: Position) {
        let content = content.into();
        let change = self.push(ChangeType::Added, content.clone(), position);
        change.after_content = Some(content);
    }

    /// Record content present only in the original document.
    pub fn deleted(&mut self, content: impl Into<String>, position: Position) {
        let content = content.into();
        let change = self.push(ChangeType::Deleted, content.clone(), position);
        change.before_content = Some(content);
    }

    /// Record a change whose display content differs from its before/after
    /// values (table summaries).
    pub fn summarized(
        &mut self,
        change_type: ChangeType,
        content: impl Into<String>,
        before: Option<String>,
        after: Option<String>,
        position: Position,
    ) {
        let change = self.push(change_type, content.into(), position);
        change.before_content = before;
        change.after_content = after;
    }

    /// Record text that differs between the versions. Content is the new text.
    pub fn modified(&mut self, before: impl Into<String>, after: impl Into<String>, position: Position) {
        let after = after.into();
        let change = self.push(ChangeType::Modified, after.clone(), position);
        change.before_content = Some(before.into());
        change.after_content = Some(after);
    }

    /// Record a formatting-only change on `text`.
    pub fn format_changed(&mut self, text: &str, description: &str, position: Position) {
        let content = format!("\"{}\" - {}", text, description);
        let change = self.push(ChangeType::FormatChanged, content, position);
        change.before_content = Some(text.to_string());
        change.after_content = Some(text.to_string());
    }

    /// Number of changes collected so far.
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Check if nothing was collected.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Finish collection.
    pub fn finish(self) -> Vec<Change> {
        self.changes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids() {
        let mut collector = ChangeCollector::new();
        collector.added("a", Position::paragraph(1));
        collector.deleted("b", Position::paragraph(2));
        collector.modified("c", "d", Position::paragraph(3));

        let changes = collector.finish();
        let ids: Vec<_> = changes.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["change-0", "change-1", "change-2"]);
    }

    #[test]
    fn test_before_after_content() {
        let mut collector = ChangeCollector::new();
        collector.added("new", Position::paragraph(1));
        collector.deleted("old", Position::paragraph(1));
        collector.modified("before", "after", Position::paragraph(1));
        collector.format_changed("foo", "굵게 적용", Position::paragraph(1));

        let changes = collector.finish();
        assert_eq!(changes[0].after_content.as_deref(), Some("new"));
        assert_eq!(changes[0].before_content, None);
        assert_eq!(changes[1].before_content.as_deref(), Some("old"));
        assert_eq!(changes[2].content, "after");
        assert_eq!(changes[2].before_content.as_deref(), Some("before"));
        assert_eq!(changes[3].content, "\"foo\" - 굵게 적용");
        assert_eq!(changes[3].before_content.as_deref(), Some("foo"));
    }
}
