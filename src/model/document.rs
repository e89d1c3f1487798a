//! Document-level types.

use super::{Paragraph, Table};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A document version handed to the comparison engine.
///
/// Text and structure are produced by an extraction layer outside this
/// crate; the engine only reads them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    /// Identity of the source file
    #[serde(default)]
    pub info: DocumentInfo,

    /// Plain extracted text
    #[serde(default)]
    pub content: String,

    /// Parsed structural model, if the extractor produced one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structure: Option<DocumentStructure>,
}

impl Document {
    /// Create a text-only document. Size is the UTF-8 byte length of the text.
    pub fn from_text(name: impl Into<String>, content: impl Into<String>) -> Self {
        let content = content.into();
        Self {
            info: DocumentInfo::new(name).with_size(content.len() as u64),
            content,
            structure: None,
        }
    }

    /// Create a document from a structural model.
    ///
    /// The plain text is the paragraphs' text joined by blank lines.
    pub fn from_structure(name: impl Into<String>, structure: DocumentStructure) -> Self {
        let content = structure.plain_text();
        Self {
            info: DocumentInfo::new(name).with_size(content.len() as u64),
            content,
            structure: Some(structure),
        }
    }

    /// Check if a structural model is available.
    pub fn has_structure(&self) -> bool {
        self.structure.is_some()
    }

    /// Document name.
    pub fn name(&self) -> &str {
        &self.info.name
    }
}

/// Identity of a document file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentInfo {
    /// File name
    pub name: String,

    /// File size in bytes
    #[serde(default)]
    pub size: u64,

    /// Last modification time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,
}

impl DocumentInfo {
    /// Create document info with a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: 0,
            last_modified: None,
        }
    }

    /// Set size and return self.
    pub fn with_size(mut self, size: u64) -> Self {
        self.size = size;
        self
    }
}

/// Structural model of a document body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentStructure {
    /// Body paragraphs in document order
    #[serde(default)]
    pub paragraphs: Vec<Paragraph>,

    /// Body tables in document order
    #[serde(default)]
    pub tables: Vec<Table>,
}

impl DocumentStructure {
    /// Create an empty structure.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a structure from plain paragraph strings.
    pub fn from_paragraphs<S: Into<String>>(paragraphs: impl IntoIterator<Item = S>) -> Self {
        Self {
            paragraphs: paragraphs.into_iter().map(Paragraph::with_text).collect(),
            tables: Vec::new(),
        }
    }

    /// Add a paragraph.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.paragraphs.push(paragraph);
    }

    /// Add a table.
    pub fn add_table(&mut self, table: Table) {
        self.tables.push(table);
    }

    /// Get the number of paragraphs.
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    /// Plain text of all paragraphs separated by blank lines.
    pub fn plain_text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.plain_text())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_from_text() {
        let doc = Document::from_text("a.txt", "안녕");
        assert_eq!(doc.name(), "a.txt");
        assert_eq!(doc.info.size, 6);
        assert!(!doc.has_structure());
    }

    #[test]
    fn test_document_from_structure() {
        let structure = DocumentStructure::from_paragraphs(["First", "Second"]);
        let doc = Document::from_structure("a.docx", structure);

        assert!(doc.has_structure());
        assert_eq!(doc.content, "First\n\nSecond");
    }

    #[test]
    fn test_document_json_roundtrip_keeps_structure() {
        let mut structure = DocumentStructure::from_paragraphs(["Hello"]);
        structure.add_table(Table::from_strings([["a", "b"]]));
        let doc = Document::from_structure("x.docx", structure);

        let json = serde_json::to_string(&doc).unwrap();
        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(back.structure, doc.structure);
        assert_eq!(back.info, doc.info);
    }
}
