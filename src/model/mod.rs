//! Document model types consumed by the comparison engine.
//!
//! The model is the boundary with the extraction layer: plain text plus an
//! optional paragraph/run/table structure. Paragraphs and runs live in plain
//! `Vec`s and are addressed by index only.

mod document;
mod paragraph;
mod table;

pub use document::{Document, DocumentInfo, DocumentStructure};
pub use paragraph::{
    Alignment, Indentation, Numbering, Paragraph, RunFormatting, Spacing, TextRun,
};
pub use table::{Table, TableCell, TableRow};
