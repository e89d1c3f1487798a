//! Filtering and ordering of change lists for navigation.

use super::{Change, ChangeType};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sort key for change lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Paragraph index
    #[default]
    Position,
    /// Change type wire name
    Type,
    /// Content length
    Size,
    /// Metadata timestamp (changes without one sort last)
    Time,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending
    #[default]
    Asc,
    /// Descending
    Desc,
}

/// Selection and ordering of changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChangeFilter {
    /// Types to keep (empty = all)
    pub types: Vec<ChangeType>,
    /// Sort key
    pub sort_by: SortBy,
    /// Sort direction
    pub sort_order: SortOrder,
}

impl ChangeFilter {
    /// Create a filter that keeps everything in position order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only the given type (may be called repeatedly).
    pub fn with_type(mut self, change_type: ChangeType) -> Self {
        if !self.types.contains(&change_type) {
            self.types.push(change_type);
        }
        self
    }

    /// Set the sort key.
    pub fn sort_by(mut self, sort_by: SortBy) -> Self {
        self.sort_by = sort_by;
        self
    }

    /// Sort in descending order.
    pub fn descending(mut self) -> Self {
        self.sort_order = SortOrder::Desc;
        self
    }

    /// Check whether a change passes the type filter.
    pub fn matches(&self, change: &Change) -> bool {
        self.types.is_empty() || self.types.contains(&change.change_type)
    }

    /// Select and order changes. Sorting is stable, so equal keys keep
    /// emission order.
    pub fn apply<'a>(&self, changes: &'a [Change]) -> Vec<&'a Change> {
        let mut selected: Vec<&Change> = changes.iter().filter(|c| self.matches(c)).collect();
        selected.sort_by(|a, b| {
            let ordering = self.compare(a, b);
            match self.sort_order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });
        selected
    }

    fn compare(&self, a: &Change, b: &Change) -> Ordering {
        match self.sort_by {
            SortBy::Position => a.position.paragraph.cmp(&b.position.paragraph),
            SortBy::Type => a.change_type.as_str().cmp(b.change_type.as_str()),
            SortBy::Size => a.content_len().cmp(&b.content_len()),
            SortBy::Time => {
                let ta = a.metadata.as_ref().and_then(|m| m.timestamp);
                let tb = b.metadata.as_ref().and_then(|m| m.timestamp);
                match (ta, tb) {
                    (Some(x), Some(y)) => x.cmp(&y),
                    (Some(_), None) => Ordering::Less,
                    (None, Some(_)) => Ordering::Greater,
                    (None, None) => Ordering::Equal,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::{ChangeCollector, Position};

    fn sample_changes() -> Vec<Change> {
        let mut collector = ChangeCollector::new();
        collector.deleted("long deleted text", Position::paragraph(3));
        collector.added("a", Position::paragraph(1));
        collector.modified("x", "mid", Position::paragraph(2));
        collector.added("bb", Position::paragraph(1));
        collector.finish()
    }

    #[test]
    fn test_filter_by_type() {
        let changes = sample_changes();
        let filter = ChangeFilter::new().with_type(ChangeType::Added);
        let selected = filter.apply(&changes);

        assert_eq!(selected.len(), 2);
        assert!(selected.iter().all(|c| c.change_type == ChangeType::Added));
    }

    #[test]
    fn test_sort_by_position_is_stable() {
        let changes = sample_changes();
        let ids: Vec<_> = ChangeFilter::new()
            .apply(&changes)
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(ids, ["change-1", "change-3", "change-2", "change-0"]);
    }

    #[test]
    fn test_sort_by_size_descending() {
        let changes = sample_changes();
        let selected = ChangeFilter::new()
            .sort_by(SortBy::Size)
            .descending()
            .apply(&changes);
        assert_eq!(selected[0].content, "long deleted text");
        assert_eq!(selected.last().unwrap().content, "a");
    }

    #[test]
    fn test_sort_by_type() {
        let changes = sample_changes();
        let selected = ChangeFilter::new().sort_by(SortBy::Type).apply(&changes);
        let types: Vec<_> = selected.iter().map(|c| c.change_type).collect();
        assert_eq!(
            types,
            [
                ChangeType::Added,
                ChangeType::Added,
                ChangeType::Deleted,
                ChangeType::Modified
            ]
        );
    }
}
