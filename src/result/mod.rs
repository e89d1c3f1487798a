//! Comparison output: changes, statistics and review state.

mod change;
mod collector;
mod filter;
mod json;

pub use change::{Change, ChangeMetadata, ChangeStatus, ChangeType, Position};
pub use collector::ChangeCollector;
pub use filter::{ChangeFilter, SortBy, SortOrder};
pub use json::{to_json, JsonFormat};

use crate::error::{Error, Result};
use crate::model::DocumentInfo;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Result of comparing two documents.
///
/// Created once per comparison. Afterwards only the review status of
/// individual changes can be modified, through [`set_status`],
/// [`accept`] and [`reject`]; everything else is read-only.
///
/// [`set_status`]: ComparisonResult::set_status
/// [`accept`]: ComparisonResult::accept
/// [`reject`]: ComparisonResult::reject
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonResult {
    original: DocumentInfo,
    modified: DocumentInfo,
    changes: Vec<Change>,
    statistics: Statistics,
    compared_at: DateTime<Utc>,
}

impl ComparisonResult {
    /// Build a result from collected changes, computing statistics.
    pub fn new(original: DocumentInfo, modified: DocumentInfo, changes: Vec<Change>) -> Self {
        let statistics = Statistics::from_changes(&changes);
        Self {
            original,
            modified,
            changes,
            statistics,
            compared_at: Utc::now(),
        }
    }

    /// Identity of the original document.
    pub fn original(&self) -> &DocumentInfo {
        &self.original
    }

    /// Identity of the modified document.
    pub fn modified(&self) -> &DocumentInfo {
        &self.modified
    }

    /// Changes in emission order.
    pub fn changes(&self) -> &[Change] {
        &self.changes
    }

    /// Per-type change counts.
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// When the comparison ran.
    pub fn compared_at(&self) -> DateTime<Utc> {
        self.compared_at
    }

    /// Check if the documents are identical under the used options.
    pub fn is_identical(&self) -> bool {
        self.changes.is_empty()
    }

    /// Look up a change by id.
    pub fn get(&self, id: &str) -> Option<&Change> {
        self.changes.iter().find(|c| c.id == id)
    }

    /// Set the review status of a change.
    pub fn set_status(&mut self, id: &str, status: ChangeStatus) -> Result<()> {
        let change = self
            .changes
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| Error::ChangeNotFound(id.to_string()))?;
        change.set_status(status)
    }

    /// Accept a change.
    pub fn accept(&mut self, id: &str) -> Result<()> {
        self.set_status(id, ChangeStatus::Accepted)
    }

    /// Reject a change.
    pub fn reject(&mut self, id: &str) -> Result<()> {
        self.set_status(id, ChangeStatus::Rejected)
    }

    /// Count changes per review status.
    pub fn review_progress(&self) -> ReviewProgress {
        let mut progress = ReviewProgress::default();
        for change in &self.changes {
            match change.status() {
                ChangeStatus::Pending => progress.pending += 1,
                ChangeStatus::Accepted => progress.accepted += 1,
                ChangeStatus::Rejected => progress.rejected += 1,
            }
        }
        progress
    }

    /// Changes selected and ordered by `filter`.
    pub fn filtered(&self, filter: &ChangeFilter) -> Vec<&Change> {
        filter.apply(&self.changes)
    }
}

/// Per-type change counts.
///
/// `total_changes` always equals the number of changes and the sum of the
/// per-type counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    /// Total number of changes
    pub total_changes: usize,
    /// Number of added changes
    pub added: usize,
    /// Number of deleted changes
    pub deleted: usize,
    /// Number of modified changes
    pub modified: usize,
    /// Number of moved changes
    pub moved: usize,
    /// Number of formatting changes
    pub format_changed: usize,
}

impl Statistics {
    /// Count changes per type.
    pub fn from_changes(changes: &[Change]) -> Self {
        let mut stats = Self::default();
        for change in changes {
            stats.record(change.change_type);
        }
        stats
    }

    fn record(&mut self, change_type: ChangeType) {
        self.total_changes += 1;
        match change_type {
            ChangeType::Added => self.added += 1,
            ChangeType::Deleted => self.deleted += 1,
            ChangeType::Modified => self.modified += 1,
            ChangeType::Moved => self.moved += 1,
            ChangeType::FormatChanged => self.format_changed += 1,
        }
    }

    /// Count for a single change type.
    pub fn count(&self, change_type: ChangeType) -> usize {
        match change_type {
            ChangeType::Added => self.added,
            ChangeType::Deleted => self.deleted,
            ChangeType::Modified => self.modified,
            ChangeType::Moved => self.moved,
            ChangeType::FormatChanged => self.format_changed,
        }
    }
}

/// Review state counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewProgress {
    /// Changes awaiting review
    pub pending: usize,
    /// Accepted changes
    pub accepted: usize,
    /// Rejected changes
    pub rejected: usize,
}

impl ReviewProgress {
    /// Check if every change has been reviewed.
    pub fn is_complete(&self) -> bool {
        self.pending == 0
    }
}
