//! Table comparison by index and row count.
//!
//! Cell contents are never compared.

use crate::model::Table;
use crate::result::{ChangeCollector, ChangeType, Position};

/// Compare two table lists index by index.
pub fn compare_tables(original: &[Table], modified: &[Table], collector: &mut ChangeCollector) {
    log::debug!(
        "Comparing {} vs {} tables",
        original.len(),
        modified.len()
    );

    for i in 0..original.len().max(modified.len()) {
        let position = Position::paragraph(i + 1);
        match (original.get(i), modified.get(i)) {
            (None, Some(table)) => collector.summarized(
                ChangeType::Added,
                format!("표 추가됨 ({}행)", table.row_count()),
                None,
                Some(format!("표 {}", i + 1)),
                position,
            ),
            (Some(table), None) => collector.summarized(
                ChangeType::Deleted,
                format!("표 삭제됨 ({}행)", table.row_count()),
                Some(format!("표 {}", i + 1)),
                None,
                position,
            ),
            (Some(a), Some(b)) if a.row_count() != b.row_count() => collector.summarized(
                ChangeType::Modified,
                format!("표 행 개수 변경 ({} → {})", a.row_count(), b.row_count()),
                Some(format!("{}행", a.row_count())),
                Some(format!("{}행", b.row_count())),
                position,
            ),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::Change;

    fn table(rows: usize) -> Table {
        Table::from_strings((0..rows).map(|r| vec![format!("r{}", r)]))
    }

    fn compare(a: &[Table], b: &[Table]) -> Vec<Change> {
        let mut collector = ChangeCollector::new();
        compare_tables(a, b, &mut collector);
        collector.finish()
    }

    #[test]
    fn test_added_table() {
        let changes = compare(&[table(2)], &[table(2), table(3)]);
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].change_type, ChangeType::Added);
        assert_eq!(changes[0].content, "표 추가됨 (3행)");
        assert_eq!(changes[0].after_content.as_deref(), Some("표 2"));
        assert_eq!(changes[0].position.paragraph, 2);
    }

    #[test]
    fn test_deleted_table() {
        let changes = compare(&[table(4)], &[]);
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].change_type, ChangeType::Deleted);
        assert_eq!(changes[0].content, "표 삭제됨 (4행)");
        assert_eq!(changes[0].before_content.as_deref(), Some("표 1"));
    }

    #[test]
    fn test_row_count_change() {
        let changes = compare(&[table(2)], &[table(5)]);
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].change_type, ChangeType::Modified);
        assert_eq!(changes[0].content, "표 행 개수 변경 (2 → 5)");
        assert_eq!(changes[0].before_content.as_deref(), Some("2행"));
        assert_eq!(changes[0].after_content.as_deref(), Some("5행"));
    }

    #[test]
    fn test_cell_edits_ignored() {
        let a = Table::from_strings([["a", "b"]]);
        let b = Table::from_strings([["x", "y"]]);
        assert!(compare(&[a], &[b]).is_empty());
    }
}
