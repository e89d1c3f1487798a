//! Run-level formatting comparison.

use crate::model::{Paragraph, RunFormatting};
use crate::result::{ChangeCollector, Position};
use std::fmt::Display;

/// Check whether two run formattings are equal for comparison purposes.
///
/// Font family is ignored; an unset attribute differs from an explicit
/// `false`.
pub fn formatting_equal(a: &RunFormatting, b: &RunFormatting) -> bool {
    a.bold == b.bold
        && a.italic == b.italic
        && a.underline == b.underline
        && a.strike == b.strike
        && a.color == b.color
        && a.font_size == b.font_size
        && a.highlight == b.highlight
}

/// Describe how formatting changed from `old` to `new`, e.g.
/// `굵게 적용, 색상 변경 (000000 → FF0000)`.
pub fn describe_formatting_change(old: &RunFormatting, new: &RunFormatting) -> String {
    let mut parts: Vec<String> = Vec::new();

    toggle(&mut parts, "굵게", old.bold, new.bold);
    toggle(&mut parts, "기울임", old.italic, new.italic);
    toggle(&mut parts, "밑줄", old.underline, new.underline);
    toggle(&mut parts, "취소선", old.strike, new.strike);

    if old.color != new.color {
        parts.push(format!(
            "색상 변경 ({} → {})",
            value(&old.color),
            value(&new.color)
        ));
    }
    if old.font_size != new.font_size {
        parts.push(format!(
            "크기 변경 ({}pt → {}pt)",
            value(&old.font_size),
            value(&new.font_size)
        ));
    }
    if old.highlight != new.highlight {
        parts.push(format!(
            "강조 변경 ({} → {})",
            value(&old.highlight),
            value(&new.highlight)
        ));
    }

    parts.join(", ")
}

fn toggle(parts: &mut Vec<String>, label: &str, old: Option<bool>, new: Option<bool>) {
    if old != new {
        let action = if new == Some(true) { "적용" } else { "해제" };
        parts.push(format!("{} {}", label, action));
    }
}

fn value<T: Display>(value: &Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "기본".to_string(),
    }
}

/// Compare the runs of two paragraphs with equal text and record one
/// formatting change per differing run.
///
/// Runs are paired by index; a run without a counterpart or with
/// different text is skipped.
pub fn compare_runs(
    original: &Paragraph,
    modified: &Paragraph,
    paragraph_index: usize,
    collector: &mut ChangeCollector,
) {
    for (old_run, new_run) in original.runs.iter().zip(&modified.runs) {
        if old_run.text != new_run.text {
            continue;
        }
        if !formatting_equal(&old_run.formatting, &new_run.formatting) {
            let description = describe_formatting_change(&old_run.formatting, &new_run.formatting);
            collector.format_changed(
                &old_run.text,
                &description,
                Position::paragraph(paragraph_index + 1),
            );
        }
    }
}
