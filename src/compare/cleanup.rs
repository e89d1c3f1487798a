//! Semantic cleanup of character edit scripts.
//!
//! A raw minimal edit script tends to interleave tiny equalities with the
//! real edits ("c" + "a" → "ca", "t" → "r", ...). These passes trade
//! minimality for readability: short equalities sandwiched between larger
//! edits are folded into the edits, and the remaining single edits are
//! slid to word, sentence or line boundaries.

use super::edit_script::{coalesce, Edit, EditOp};

/// Run all cleanup passes over a character edit script.
pub fn cleanup_semantic(edits: Vec<Edit<char>>) -> Vec<Edit<char>> {
    let mut edits = factor_affixes(edits);
    if eliminate_equalities(&mut edits) {
        edits = factor_affixes(edits);
    }
    shift_to_boundaries(&mut edits);
    extract_overlaps(&mut edits);
    edits.retain(|edit| !edit.is_empty());
    edits
}

/// Coalesce the script and move text shared by a deletion and its
/// insertion out into the surrounding equalities.
fn factor_affixes(edits: Vec<Edit<char>>) -> Vec<Edit<char>> {
    let mut out: Vec<Edit<char>> = Vec::with_capacity(edits.len() + 2);
    let mut iter = coalesce(edits).into_iter().peekable();

    while let Some(edit) = iter.next() {
        if edit.op == EditOp::Delete {
            if let Some(insert) = iter.next_if(|next| next.op == EditOp::Insert) {
                let mut deleted = edit.items;
                let mut inserted = insert.items;

                let prefix = common_prefix(&deleted, &inserted);
                if prefix > 0 {
                    out.push(Edit::new(EditOp::Equal, deleted[..prefix].to_vec()));
                    deleted.drain(..prefix);
                    inserted.drain(..prefix);
                }

                let suffix = common_suffix(&deleted, &inserted);
                let tail = inserted.split_off(inserted.len() - suffix);
                deleted.truncate(deleted.len() - suffix);

                out.push(Edit::new(EditOp::Delete, deleted));
                out.push(Edit::new(EditOp::Insert, inserted));
                out.push(Edit::new(EditOp::Equal, tail));
                continue;
            }
        }
        out.push(edit);
    }

    coalesce(out)
}

/// Turn equalities that are no longer than the edits on both sides into a
/// deletion plus an insertion. Returns whether anything changed.
fn eliminate_equalities(edits: &mut Vec<Edit<char>>) -> bool {
    let mut changed = false;
    let mut equalities: Vec<usize> = Vec::new();
    let mut last_equality: Option<usize> = None;
    let (mut inserted_before, mut deleted_before) = (0usize, 0usize);
    let (mut inserted_after, mut deleted_after) = (0usize, 0usize);

    let mut pointer = 0;
    while pointer < edits.len() {
        let len = edits[pointer].len();
        match edits[pointer].op {
            EditOp::Equal => {
                equalities.push(pointer);
                inserted_before = inserted_after;
                deleted_before = deleted_after;
                inserted_after = 0;
                deleted_after = 0;
                last_equality = Some(len);
            }
            op => {
                if op == EditOp::Insert {
                    inserted_after += len;
                } else {
                    deleted_after += len;
                }

                let collapse = match (last_equality, equalities.last()) {
                    (Some(eq_len), Some(_)) => {
                        eq_len <= inserted_before.max(deleted_before)
                            && eq_len <= inserted_after.max(deleted_after)
                    }
                    _ => false,
                };

                if collapse {
                    if let Some(at) = equalities.pop() {
                        let items = edits[at].items.clone();
                        edits[at].op = EditOp::Insert;
                        edits.insert(at, Edit::new(EditOp::Delete, items));
                    }
                    // The previous equality has to be evaluated again.
                    equalities.pop();
                    inserted_before = 0;
                    deleted_before = 0;
                    inserted_after = 0;
                    deleted_after = 0;
                    last_equality = None;
                    changed = true;

                    pointer = equalities.last().map_or(0, |&at| at + 1);
                    continue;
                }
            }
        }
        pointer += 1;
    }

    changed
}

/// Slide single edits surrounded by equalities so that they start and end
/// on the most natural boundary.
fn shift_to_boundaries(edits: &mut Vec<Edit<char>>) {
    let mut pointer = 1;
    while pointer + 1 < edits.len() {
        if edits[pointer - 1].op != EditOp::Equal || edits[pointer + 1].op != EditOp::Equal {
            pointer += 1;
            continue;
        }

        let mut before = edits[pointer - 1].items.clone();
        let mut edit = edits[pointer].items.clone();
        let mut after = edits[pointer + 1].items.clone();

        // Shift the edit as far left as possible.
        let offset = common_suffix(&before, &edit);
        if offset > 0 {
            let common = edit[edit.len() - offset..].to_vec();
            before.truncate(before.len() - offset);

            let mut shifted = common.clone();
            shifted.extend_from_slice(&edit[..edit.len() - offset]);
            edit = shifted;

            let mut extended = common;
            extended.extend(after);
            after = extended;
        }

        // Step right one character at a time, keeping the best scoring split.
        let mut best = (before.clone(), edit.clone(), after.clone());
        let mut best_score = boundary_score(&before, &edit) + boundary_score(&edit, &after);
        while !edit.is_empty() && !after.is_empty() && edit[0] == after[0] {
            before.push(edit.remove(0));
            edit.push(after.remove(0));
            let score = boundary_score(&before, &edit) + boundary_score(&edit, &after);
            // >= favours splits further right on ties
            if score >= best_score {
                best_score = score;
                best = (before.clone(), edit.clone(), after.clone());
            }
        }

        let (best_before, best_edit, best_after) = best;
        if edits[pointer - 1].items != best_before {
            let mut removed = 0;
            let mut at = pointer;
            if best_before.is_empty() {
                edits.remove(pointer - 1);
                at -= 1;
                removed += 1;
            } else {
                edits[pointer - 1].items = best_before;
            }
            edits[at].items = best_edit;
            if best_after.is_empty() {
                edits.remove(at + 1);
                removed += 1;
            } else {
                edits[at + 1].items = best_after;
            }
            pointer = (pointer + 1 - removed).max(1);
            continue;
        }
        pointer += 1;
    }
}

/// Split overlapping deletion/insertion pairs ("abcxxx" → "xxxdef") so the
/// shared part becomes an equality, when it covers at least half of either.
fn extract_overlaps(edits: &mut Vec<Edit<char>>) {
    let mut pointer = 1;
    while pointer < edits.len() {
        if edits[pointer - 1].op == EditOp::Delete && edits[pointer].op == EditOp::Insert {
            let deletion = edits[pointer - 1].items.clone();
            let insertion = edits[pointer].items.clone();
            let forward = common_overlap(&deletion, &insertion);
            let reverse = common_overlap(&insertion, &deletion);

            if forward >= reverse {
                if forward > 0 && (forward * 2 >= deletion.len() || forward * 2 >= insertion.len()) {
                    edits.insert(pointer, Edit::new(EditOp::Equal, insertion[..forward].to_vec()));
                    edits[pointer - 1].items = deletion[..deletion.len() - forward].to_vec();
                    edits[pointer + 1].items = insertion[forward..].to_vec();
                    pointer += 1;
                }
            } else if reverse * 2 >= deletion.len() || reverse * 2 >= insertion.len() {
                edits.insert(pointer, Edit::new(EditOp::Equal, deletion[..reverse].to_vec()));
                edits[pointer - 1] = Edit::new(
                    EditOp::Insert,
                    insertion[..insertion.len() - reverse].to_vec(),
                );
                edits[pointer + 1] = Edit::new(EditOp::Delete, deletion[reverse..].to_vec());
                pointer += 1;
            }
            pointer += 1;
        }
        pointer += 1;
    }
}

/// Score how natural the boundary between `one` and `two` is, from 0
/// (mid-word) to 6 (edge of the text).
fn boundary_score(one: &[char], two: &[char]) -> u8 {
    let (Some(&last), Some(&first)) = (one.last(), two.first()) else {
        return 6;
    };

    let non_alnum_1 = !last.is_alphanumeric();
    let non_alnum_2 = !first.is_alphanumeric();
    let whitespace_1 = non_alnum_1 && last.is_whitespace();
    let whitespace_2 = non_alnum_2 && first.is_whitespace();
    let line_break_1 = whitespace_1 && last.is_control();
    let line_break_2 = whitespace_2 && first.is_control();
    let blank_line_1 = line_break_1 && ends_with_blank_line(one);
    let blank_line_2 = line_break_2 && starts_with_blank_line(two);

    if blank_line_1 || blank_line_2 {
        5
    } else if line_break_1 || line_break_2 {
        4
    } else if non_alnum_1 && !whitespace_1 && whitespace_2 {
        // End of sentence
        3
    } else if whitespace_1 || whitespace_2 {
        2
    } else if non_alnum_1 || non_alnum_2 {
        1
    } else {
        0
    }
}

fn ends_with_blank_line(text: &[char]) -> bool {
    text.ends_with(&['\n', '\n']) || text.ends_with(&['\n', '\r', '\n'])
}

fn starts_with_blank_line(text: &[char]) -> bool {
    let rest = if text.first() == Some(&'\r') {
        &text[1..]
    } else {
        text
    };
    rest.starts_with(&['\n', '\n']) || rest.starts_with(&['\n', '\r', '\n'])
}

fn common_prefix(a: &[char], b: &[char]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

fn common_suffix(a: &[char], b: &[char]) -> usize {
    a.iter()
        .rev()
        .zip(b.iter().rev())
        .take_while(|(x, y)| x == y)
        .count()
}

/// Length of the longest suffix of `a` that is a prefix of `b`.
fn common_overlap(a: &[char], b: &[char]) -> usize {
    let max = a.len().min(b.len());
    (1..=max)
        .rev()
        .find(|&k| a[a.len() - k..] == b[..k])
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::edit_script::edit_script;

    fn edit(op: EditOp, text: &str) -> Edit<char> {
        Edit::new(op, text.chars().collect())
    }

    fn render(edits: &[Edit<char>]) -> Vec<(EditOp, String)> {
        edits.iter().map(|e| (e.op, e.text())).collect()
    }

    fn clean(a: &str, b: &str) -> Vec<(EditOp, String)> {
        let old: Vec<char> = a.chars().collect();
        let new: Vec<char> = b.chars().collect();
        render(&cleanup_semantic(edit_script(&old, &new)))
    }

    #[test]
    fn test_factor_affixes() {
        let edits = vec![edit(EditOp::Delete, "abcX"), edit(EditOp::Insert, "abcY")];
        assert_eq!(
            render(&factor_affixes(edits)),
            [
                (EditOp::Equal, "abc".to_string()),
                (EditOp::Delete, "X".to_string()),
                (EditOp::Insert, "Y".to_string()),
            ]
        );
    }

    #[test]
    fn test_eliminate_small_equality() {
        // "b" is shorter than the edits on both sides.
        let mut edits = vec![
            edit(EditOp::Delete, "a"),
            edit(EditOp::Equal, "b"),
            edit(EditOp::Delete, "c"),
        ];
        assert!(eliminate_equalities(&mut edits));
        assert_eq!(
            render(&factor_affixes(edits)),
            [
                (EditOp::Delete, "abc".to_string()),
                (EditOp::Insert, "b".to_string()),
            ]
        );
    }

    #[test]
    fn test_keep_large_equality() {
        let mut edits = vec![
            edit(EditOp::Delete, "ab"),
            edit(EditOp::Equal, "cde"),
            edit(EditOp::Delete, "x"),
            edit(EditOp::Equal, "f"),
            edit(EditOp::Insert, "g"),
        ];
        // "f" is sandwiched by single-char edits and collapses; "cde" survives.
        assert!(eliminate_equalities(&mut edits));
        assert!(!edits
            .iter()
            .any(|e| e.op == EditOp::Equal && e.text() == "f"));
        assert!(edits
            .iter()
            .any(|e| e.op == EditOp::Equal && e.text() == "cde"));
    }

    #[test]
    fn test_shift_to_word_boundary() {
        let mut edits = vec![
            edit(EditOp::Equal, "The c"),
            edit(EditOp::Insert, "ow and the c"),
            edit(EditOp::Equal, "at."),
        ];
        shift_to_boundaries(&mut edits);
        assert_eq!(
            render(&edits),
            [
                (EditOp::Equal, "The ".to_string()),
                (EditOp::Insert, "cow and the ".to_string()),
                (EditOp::Equal, "cat.".to_string()),
            ]
        );
    }

    #[test]
    fn test_extract_overlap() {
        let mut edits = vec![edit(EditOp::Delete, "abcxxx"), edit(EditOp::Insert, "xxxdef")];
        extract_overlaps(&mut edits);
        assert_eq!(
            render(&edits),
            [
                (EditOp::Delete, "abc".to_string()),
                (EditOp::Equal, "xxx".to_string()),
                (EditOp::Insert, "def".to_string()),
            ]
        );
    }

    #[test]
    fn test_extract_reverse_overlap() {
        let mut edits = vec![edit(EditOp::Delete, "xxxabc"), edit(EditOp::Insert, "defxxx")];
        extract_overlaps(&mut edits);
        assert_eq!(
            render(&edits),
            [
                (EditOp::Insert, "def".to_string()),
                (EditOp::Equal, "xxx".to_string()),
                (EditOp::Delete, "abc".to_string()),
            ]
        );
    }

    #[test]
    fn test_boundary_scores() {
        let c = |s: &str| s.chars().collect::<Vec<_>>();
        assert_eq!(boundary_score(&c(""), &c("a")), 6);
        assert_eq!(boundary_score(&c("a\n\n"), &c("b")), 5);
        assert_eq!(boundary_score(&c("a\n"), &c("b")), 4);
        assert_eq!(boundary_score(&c("a."), &c(" b")), 3);
        assert_eq!(boundary_score(&c("a "), &c("b")), 2);
        assert_eq!(boundary_score(&c("a,"), &c("b")), 1);
        assert_eq!(boundary_score(&c("ab"), &c("cd")), 0);
    }

    #[test]
    fn test_cleanup_merges_fragmented_edits() {
        let result = clean("mouse", "sofas");
        // A fully rewritten word is reported as one deletion and one insertion.
        assert_eq!(
            result,
            [
                (EditOp::Delete, "mouse".to_string()),
                (EditOp::Insert, "sofas".to_string()),
            ]
        );
    }

    #[test]
    fn test_cleanup_identical() {
        assert_eq!(clean("same", "same"), [(EditOp::Equal, "same".to_string())]);
        assert!(clean("", "").is_empty());
    }
}
