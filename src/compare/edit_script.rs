//! Minimal edit scripts over arbitrary symbol sequences.
//!
//! The script is computed with Myers' algorithm over slices of any
//! hashable symbol, so characters and interned word ids share one core.

use similar::{Algorithm, DiffOp};
use std::hash::Hash;

/// Kind of an edit segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOp {
    /// Present in both sequences
    Equal,
    /// Present only in the old sequence
    Delete,
    /// Present only in the new sequence
    Insert,
}

/// A run of symbols sharing one edit operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit<T> {
    /// Operation
    pub op: EditOp,
    /// Symbols covered by the operation
    pub items: Vec<T>,
}

impl<T> Edit<T> {
    /// Create a segment.
    pub fn new(op: EditOp, items: Vec<T>) -> Self {
        Self { op, items }
    }

    /// Number of symbols in the segment.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the segment is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Edit<char> {
    /// Segment text.
    pub fn text(&self) -> String {
        self.items.iter().collect()
    }
}

/// Compute the edit script turning `old` into `new`.
///
/// Adjacent segments never share an operation, and within every stretch
/// between two equalities the deletion comes before the insertion.
pub fn edit_script<T>(old: &[T], new: &[T]) -> Vec<Edit<T>>
where
    T: Clone + Eq + Hash + Ord,
{
    let ops = similar::capture_diff_slices(Algorithm::Myers, old, new);

    let mut edits = Vec::with_capacity(ops.len() + 1);
    for op in ops {
        match op {
            DiffOp::Equal { old_index, len, .. } => {
                edits.push(Edit::new(EditOp::Equal, old[old_index..old_index + len].to_vec()));
            }
            DiffOp::Delete {
                old_index, old_len, ..
            } => {
                edits.push(Edit::new(
                    EditOp::Delete,
                    old[old_index..old_index + old_len].to_vec(),
                ));
            }
            DiffOp::Insert {
                new_index, new_len, ..
            } => {
                edits.push(Edit::new(
                    EditOp::Insert,
                    new[new_index..new_index + new_len].to_vec(),
                ));
            }
            DiffOp::Replace {
                old_index,
                old_len,
                new_index,
                new_len,
            } => {
                edits.push(Edit::new(
                    EditOp::Delete,
                    old[old_index..old_index + old_len].to_vec(),
                ));
                edits.push(Edit::new(
                    EditOp::Insert,
                    new[new_index..new_index + new_len].to_vec(),
                ));
            }
        }
    }

    coalesce(edits)
}

/// Merge neighbouring segments of the same kind, group each stretch of
/// changes into one deletion followed by one insertion, and drop empty
/// segments.
pub fn coalesce<T>(edits: Vec<Edit<T>>) -> Vec<Edit<T>> {
    let mut result: Vec<Edit<T>> = Vec::with_capacity(edits.len());
    let mut deleted: Vec<T> = Vec::new();
    let mut inserted: Vec<T> = Vec::new();

    fn flush<T>(result: &mut Vec<Edit<T>>, deleted: &mut Vec<T>, inserted: &mut Vec<T>) {
        if !deleted.is_empty() {
            result.push(Edit::new(EditOp::Delete, std::mem::take(deleted)));
        }
        if !inserted.is_empty() {
            result.push(Edit::new(EditOp::Insert, std::mem::take(inserted)));
        }
    }

    for edit in edits {
        match edit.op {
            EditOp::Delete => deleted.extend(edit.items),
            EditOp::Insert => inserted.extend(edit.items),
            EditOp::Equal => {
                if edit.items.is_empty() {
                    continue;
                }
                flush(&mut result, &mut deleted, &mut inserted);
                match result.last_mut() {
                    Some(last) if last.op == EditOp::Equal => last.items.extend(edit.items),
                    _ => result.push(edit),
                }
            }
        }
    }
    flush(&mut result, &mut deleted, &mut inserted);

    result
}
