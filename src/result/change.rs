//! Change records and review status.

use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of difference between the two documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeType {
    /// Content present only in the modified document
    Added,
    /// Content present only in the original document
    Deleted,
    /// Content present in both but with different text
    Modified,
    /// Content relocated (reserved; not emitted by the engine)
    Moved,
    /// Same text with different run formatting
    FormatChanged,
}

impl ChangeType {
    /// All change types in display order.
    pub const ALL: [ChangeType; 5] = [
        ChangeType::Added,
        ChangeType::Deleted,
        ChangeType::Modified,
        ChangeType::Moved,
        ChangeType::FormatChanged,
    ];

    /// Wire name, as used in serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeType::Added => "added",
            ChangeType::Deleted => "deleted",
            ChangeType::Modified => "modified",
            ChangeType::Moved => "moved",
            ChangeType::FormatChanged => "format_changed",
        }
    }

    /// Short Korean display label.
    pub fn label(&self) -> &'static str {
        match self {
            ChangeType::Added => "추가",
            ChangeType::Deleted => "삭제",
            ChangeType::Modified => "수정",
            ChangeType::Moved => "이동",
            ChangeType::FormatChanged => "서식",
        }
    }

    /// Parse a wire name.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

impl fmt::Display for ChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Review status of a change.
///
/// ```text
/// Pending ──▶ Accepted ◀──▶ Rejected ◀── Pending
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeStatus {
    /// Awaiting review
    #[default]
    Pending,
    /// Accepted by the reviewer
    Accepted,
    /// Rejected by the reviewer
    Rejected,
}

impl ChangeStatus {
    /// Wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeStatus::Pending => "pending",
            ChangeStatus::Accepted => "accepted",
            ChangeStatus::Rejected => "rejected",
        }
    }

    /// Check whether moving to `to` is allowed.
    ///
    /// Re-applying the current status is allowed and has no effect. Nothing
    /// returns to `Pending` once reviewed.
    pub fn can_transition(&self, to: ChangeStatus) -> bool {
        use ChangeStatus::*;
        matches!(
            (*self, to),
            (Pending, Pending)
                | (Pending, Accepted)
                | (Pending, Rejected)
                | (Accepted, Accepted)
                | (Accepted, Rejected)
                | (Rejected, Rejected)
                | (Rejected, Accepted)
        )
    }

    /// Compute the next status or fail with
    /// [`Error::InvalidStatusTransition`].
    pub fn transition(self, to: ChangeStatus) -> Result<ChangeStatus> {
        if self.can_transition(to) {
            Ok(to)
        } else {
            Err(Error::InvalidStatusTransition { from: self, to })
        }
    }
}

impl fmt::Display for ChangeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Location of a change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// Page number. Always 1: pagination is not computed.
    pub page: u32,

    /// 1-based paragraph index (an estimate in text modes)
    pub paragraph: usize,

    /// Line within the paragraph, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
}

impl Position {
    /// Position at a 1-based paragraph index on the first page.
    pub fn paragraph(paragraph: usize) -> Self {
        Self {
            page: 1,
            paragraph,
            line: None,
        }
    }
}

/// Review metadata attached by the host application.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChangeMetadata {
    /// Author of the change
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Time of the change
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,

    /// Free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A single difference between two documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Change {
    /// Identifier, unique within one comparison result
    pub id: String,

    /// Kind of change
    #[serde(rename = "type")]
    pub change_type: ChangeType,

    /// Display content
    pub content: String,

    /// Content in the original document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before_content: Option<String>,

    /// Content in the modified document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after_content: Option<String>,

    /// Location of the change
    pub position: Position,

    /// Review status
    #[serde(default)]
    status: ChangeStatus,

    /// Host-supplied metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ChangeMetadata>,
}

impl Change {
    pub(crate) fn new(id: String, change_type: ChangeType, content: String, position: Position) -> Self {
        Self {
            id,
            change_type,
            content,
            before_content: None,
            after_content: None,
            position,
            status: ChangeStatus::Pending,
            metadata: None,
        }
    }

    /// Current review status.
    pub fn status(&self) -> ChangeStatus {
        self.status
    }

    /// Move to a new review status, enforcing the allowed transitions.
    pub fn set_status(&mut self, status: ChangeStatus) -> Result<()> {
        self.status = self.status.transition(status)?;
        Ok(())
    }

    /// Check whether the change still awaits review.
    pub fn is_pending(&self) -> bool {
        self.status == ChangeStatus::Pending
    }

    /// Length of the display content in characters.
    pub fn content_len(&self) -> usize {
        self.content.chars().count()
    }
}
