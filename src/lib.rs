//! # docdiff
//!
//! Document comparison engine for Rust.
//!
//! This library compares two versions of a document and produces a
//! structured, reviewable list of differences with aggregate statistics.
//!
//! ## Quick Start
//!
//! ```
//! use docdiff::{compare_texts, ComparisonOptions, ChangeType};
//!
//! let result = compare_texts("안녕하세요", "안녕하세요 반갑습니다", &ComparisonOptions::default());
//! assert_eq!(result.statistics().added, 1);
//! assert_eq!(result.changes()[0].change_type, ChangeType::Added);
//! ```
//!
//! ## Features
//!
//! - **Multiple granularities**: characters, words, sentences, paragraphs
//! - **Structure awareness**: fuzzy LCS paragraph alignment, run formatting
//!   and table comparison
//! - **Review workflow**: accept/reject changes, filter and sort them
//! - **CJK support**: diffs operate on Unicode scalar values
//! - **Parallel processing**: Uses Rayon for batches of document pairs

pub mod compare;
pub mod error;
pub mod model;
pub mod result;

// Re-export commonly used types
pub use compare::{
    are_similar, compare_batch, compare_documents, compare_structural, compare_texts,
    similarity, ComparisonMode, ComparisonOptions, ComparisonTuning, DetailLevel, DisplayMode,
};
pub use error::{Error, Result};
pub use model::{
    Alignment, Document, DocumentInfo, DocumentStructure, Paragraph, RunFormatting, Table,
    TableCell, TableRow, TextRun,
};
pub use result::{
    to_json, Change, ChangeFilter, ChangeStatus, ChangeType, ComparisonResult, JsonFormat,
    Position, ReviewProgress, SortBy, SortOrder, Statistics,
};

use chrono::{DateTime, Utc};
use std::path::Path;

/// Read a document from disk.
///
/// Files with a `.json` extension are deserialized as a [`Document`]
/// (the output of a document extractor). Anything else is read as UTF-8
/// plain text. Size and modification time are taken from the file system
/// unless the JSON document already carries them.
///
/// # Example
///
/// ```no_run
/// use docdiff::read_document;
///
/// let doc = read_document("contract_v1.txt").unwrap();
/// println!("{} bytes", doc.info.size);
/// ```
pub fn read_document<P: AsRef<Path>>(path: P) -> Result<Document> {
    let path = path.as_ref();
    let metadata = std::fs::metadata(path)?;
    let content = std::fs::read_to_string(path)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let mut document = if is_json {
        let mut document: Document = serde_json::from_str(&content)?;
        if document.info.name.is_empty() {
            document.info.name = name;
        }
        document
    } else {
        Document::from_text(name, content)
    };

    if document.info.size == 0 {
        document.info.size = metadata.len();
    }
    if document.info.last_modified.is_none() {
        document.info.last_modified = metadata.modified().ok().map(DateTime::<Utc>::from);
    }

    log::debug!(
        "Read {} ({} bytes, structure: {})",
        document.name(),
        document.info.size,
        document.has_structure()
    );
    Ok(document)
}

/// Compare two files on disk with default options.
///
/// # Example
///
/// ```no_run
/// use docdiff::compare_files;
///
/// let result = compare_files("v1.txt", "v2.txt").unwrap();
/// println!("{} changes", result.statistics().total_changes);
/// ```
pub fn compare_files<P: AsRef<Path>, Q: AsRef<Path>>(
    original: P,
    modified: Q,
) -> Result<ComparisonResult> {
    DocDiff::new().compare_files(original, modified)
}

/// Builder for configuring and running comparisons.
///
/// # Example
///
/// ```
/// use docdiff::{DocDiff, DetailLevel};
///
/// let result = DocDiff::new()
///     .case_sensitive()
///     .with_detail_level(DetailLevel::Word)
///     .compare_texts("the quick fox", "the slow fox");
/// assert_eq!(result.statistics().total_changes, 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DocDiff {
    options: ComparisonOptions,
}

impl DocDiff {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the given options.
    pub fn with_options(options: ComparisonOptions) -> Self {
        Self { options }
    }

    /// Treat upper and lower case as different.
    pub fn case_sensitive(mut self) -> Self {
        self.options = self.options.with_case_sensitive(true);
        self
    }

    /// Collapse whitespace runs before comparing.
    pub fn ignore_whitespace(mut self) -> Self {
        self.options = self.options.with_whitespace(false);
        self
    }

    /// Skip run formatting comparison.
    pub fn without_formatting(mut self) -> Self {
        self.options = self.options.with_formatting(false);
        self
    }

    /// Skip table comparison.
    pub fn without_tables(mut self) -> Self {
        self.options = self.options.with_tables(false);
        self
    }

    /// Set the text-mode detail level.
    pub fn with_detail_level(mut self, level: DetailLevel) -> Self {
        self.options = self.options.with_detail_level(level);
        self
    }

    /// Set the comparison mode.
    pub fn with_mode(mut self, mode: ComparisonMode) -> Self {
        self.options = self.options.with_mode(mode);
        self
    }

    /// Set tuning parameters.
    pub fn with_tuning(mut self, tuning: ComparisonTuning) -> Self {
        self.options = self.options.with_tuning(tuning);
        self
    }

    /// Apply Unicode NFC normalization before comparing.
    pub fn normalize_unicode(mut self) -> Self {
        self.options = self.options.with_unicode_normalization(true);
        self
    }

    /// Configured options.
    pub fn options(&self) -> &ComparisonOptions {
        &self.options
    }

    /// Compare two documents.
    pub fn compare(&self, original: &Document, modified: &Document) -> Result<ComparisonResult> {
        compare_documents(original, modified, &self.options)
    }

    /// Compare two plain texts.
    pub fn compare_texts(&self, original: &str, modified: &str) -> ComparisonResult {
        compare_texts(original, modified, &self.options)
    }

    /// Read and compare two files.
    pub fn compare_files<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        original: P,
        modified: Q,
    ) -> Result<ComparisonResult> {
        let original = read_document(original)?;
        let modified = read_document(modified)?;
        self.compare(&original, &modified)
    }

    /// Compare many document pairs in parallel.
    pub fn compare_batch(&self, pairs: &[(Document, Document)]) -> Vec<Result<ComparisonResult>> {
        compare_batch(pairs, &self.options)
    }
}
