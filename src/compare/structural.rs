//! Structure-aware pipeline: paragraph alignment, run formatting, tables.

use super::alignment::align_paragraphs;
use super::format::compare_runs;
use super::normalize::Normalizer;
use super::table::compare_tables;
use super::ComparisonOptions;
use crate::error::Result;
use crate::model::{DocumentStructure, Paragraph};
use crate::result::{ChangeCollector, Position};

/// Compare two structural models.
///
/// For each aligned pair, the original and modified paragraphs in the gap
/// before it are reported first (deletions, then additions), followed by
/// the pair's own changes. Blank unmatched paragraphs are not reported.
///
/// Normalized text only decides which paragraphs are paired. A pair whose
/// raw text differs is MODIFIED even if the edit is case or whitespace only.
pub fn compare_structure(
    original: &DocumentStructure,
    modified: &DocumentStructure,
    options: &ComparisonOptions,
    collector: &mut ChangeCollector,
) -> Result<()> {
    let normalizer = Normalizer::new(options);
    let keys = |paragraphs: &[Paragraph]| -> Vec<String> {
        paragraphs
            .iter()
            .map(|p| normalizer.paragraph_key(&p.plain_text()))
            .collect()
    };
    let keys_a = keys(original.paragraphs.as_slice());
    let keys_b = keys(modified.paragraphs.as_slice());

    let pairs = align_paragraphs(
        &keys_a,
        &keys_b,
        options.tuning.similarity_threshold,
        options.tuning.max_alignment_cells,
    )?;

    let (mut i, mut j) = (0, 0);
    for pair in &pairs {
        report_deleted(&original.paragraphs[i..pair.original], i, collector);
        report_added(&modified.paragraphs[j..pair.modified], j, collector);

        let old = &original.paragraphs[pair.original];
        let new = &modified.paragraphs[pair.modified];
        if old.plain_text() == new.plain_text() {
            if options.compare_formatting {
                compare_runs(old, new, pair.modified, collector);
            }
        } else if !old.is_blank() && !new.is_blank() {
            collector.modified(
                old.plain_text(),
                new.plain_text(),
                Position::paragraph(pair.modified + 1),
            );
        }

        i = pair.original + 1;
        j = pair.modified + 1;
    }
    report_deleted(&original.paragraphs[i..], i, collector);
    report_added(&modified.paragraphs[j..], j, collector);

    if options.compare_tables {
        compare_tables(&original.tables, &modified.tables, collector);
    }

    log::debug!("Structural comparison produced {} changes", collector.len());
    Ok(())
}

fn report_deleted(paragraphs: &[Paragraph], start: usize, collector: &mut ChangeCollector) {
    for (offset, paragraph) in paragraphs.iter().enumerate() {
        if !paragraph.is_blank() {
            collector.deleted(paragraph.plain_text(), Position::paragraph(start + offset + 1));
        }
    }
}

fn report_added(paragraphs: &[Paragraph], start: usize, collector: &mut ChangeCollector) {
    for (offset, paragraph) in paragraphs.iter().enumerate() {
        if !paragraph.is_blank() {
            collector.added(paragraph.plain_text(), Position::paragraph(start + offset + 1));
        }
    }
}
