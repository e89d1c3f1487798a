//! Error types for docdiff library.

use crate::result::ChangeStatus;
use std::io;
use thiserror::Error;

/// Result type alias for docdiff operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during document comparison.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A document has no structural model, so structure-aware comparison
    /// cannot run.
    #[error("Cannot compare structurally: {0} has no structural model")]
    MissingStructure(String),

    /// The paragraph alignment table would exceed the configured cell limit.
    #[error(
        "Paragraph alignment too large: {original} x {modified} paragraphs exceeds {limit} cells"
    )]
    AlignmentTooLarge {
        /// Paragraph count of the original document
        original: usize,
        /// Paragraph count of the modified document
        modified: usize,
        /// Configured cell limit
        limit: usize,
    },

    /// No change with the given id exists in the result.
    #[error("Change not found: {0}")]
    ChangeNotFound(String),

    /// The requested review status change is not allowed.
    #[error("Invalid status transition: {from} -> {to}")]
    InvalidStatusTransition {
        /// Current status
        from: ChangeStatus,
        /// Requested status
        to: ChangeStatus,
    },

    /// Error serializing or deserializing comparison data.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::AlignmentTooLarge {
            original: 10,
            modified: 20,
            limit: 100,
        };
        assert_eq!(
            err.to_string(),
            "Paragraph alignment too large: 10 x 20 paragraphs exceeds 100 cells"
        );

        let err = Error::InvalidStatusTransition {
            from: ChangeStatus::Accepted,
            to: ChangeStatus::Pending,
        };
        assert_eq!(
            err.to_string(),
            "Invalid status transition: accepted -> pending"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Serialization(_)));
    }
}
