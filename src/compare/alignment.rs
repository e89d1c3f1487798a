//! LCS paragraph alignment with fuzzy matching.

use super::similarity::are_similar;
use crate::error::{Error, Result};

/// A pair of aligned paragraph indices (0-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchedPair {
    /// Index in the original document
    pub original: usize,
    /// Index in the modified document
    pub modified: usize,
}

/// Align two paragraph sequences by their longest common subsequence,
/// where two paragraphs match when their keys are similar enough.
///
/// Pairs are returned in increasing order of both indices. Fails with
/// [`Error::AlignmentTooLarge`] when the `m x n` table would exceed
/// `max_cells`.
pub fn align_paragraphs(
    keys_a: &[String],
    keys_b: &[String],
    threshold: f64,
    max_cells: usize,
) -> Result<Vec<MatchedPair>> {
    let m = keys_a.len();
    let n = keys_b.len();

    let cells = m.saturating_mul(n);
    if cells > max_cells {
        log::warn!(
            "Paragraph alignment of {} x {} exceeds the limit of {} cells",
            m,
            n,
            max_cells
        );
        return Err(Error::AlignmentTooLarge {
            original: m,
            modified: n,
            limit: max_cells,
        });
    }
    log::debug!("Aligning {} x {} paragraphs", m, n);

    let width = n + 1;
    let mut similar = vec![false; cells];
    let mut dp = vec![0u32; (m + 1) * width];

    for i in 1..=m {
        for j in 1..=n {
            let matched = are_similar(&keys_a[i - 1], &keys_b[j - 1], threshold);
            similar[(i - 1) * n + (j - 1)] = matched;
            dp[i * width + j] = if matched {
                dp[(i - 1) * width + (j - 1)] + 1
            } else {
                dp[(i - 1) * width + j].max(dp[i * width + (j - 1)])
            };
        }
    }

    let mut pairs = Vec::with_capacity(dp[m * width + n] as usize);
    let (mut i, mut j) = (m, n);
    while i > 0 && j > 0 {
        if similar[(i - 1) * n + (j - 1)] {
            pairs.push(MatchedPair {
                original: i - 1,
                modified: j - 1,
            });
            i -= 1;
            j -= 1;
        } else if dp[(i - 1) * width + j] >= dp[i * width + (j - 1)] {
            i -= 1;
        } else {
            j -= 1;
        }
    }
    pairs.reverse();

    log::debug!("Matched {} paragraph pairs", pairs.len());
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn align(a: &[&str], b: &[&str]) -> Vec<(usize, usize)> {
        align_paragraphs(&keys(a), &keys(b), 0.9, 1_000_000)
            .unwrap()
            .into_iter()
            .map(|p| (p.original, p.modified))
            .collect()
    }

    #[test]
    fn test_identical_sequences() {
        assert_eq!(align(&["a", "b", "c"], &["a", "b", "c"]), [(0, 0), (1, 1), (2, 2)]);
    }

    #[test]
    fn test_insertion_keeps_neighbours_matched() {
        assert_eq!(align(&["A", "B"], &["A", "C", "B"]), [(0, 0), (1, 2)]);
    }

    #[test]
    fn test_deletion() {
        assert_eq!(align(&["A", "X", "B"], &["A", "B"]), [(0, 0), (2, 1)]);
    }

    #[test]
    fn test_fuzzy_match() {
        let a = ["the quick brown fox jumps"];
        let b = ["the quick brown fox jumped"];
        assert_eq!(align(&a, &b), [(0, 0)]);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(align(&[], &["a"]).is_empty());
        assert!(align(&["a"], &[]).is_empty());
        assert!(align(&[], &[]).is_empty());
    }

    #[test]
    fn test_pairs_strictly_increasing() {
        let a = ["p1", "p2", "p3", "p4", "p5"];
        let b = ["p2", "p1", "p3", "p5", "p4"];
        let pairs = align(&a, &b);
        for window in pairs.windows(2) {
            assert!(window[0].0 < window[1].0);
            assert!(window[0].1 < window[1].1);
        }
        assert_eq!(pairs.len(), 3);
    }

    #[test]
    fn test_size_cap() {
        let a = keys(&["a"; 10]);
        let b = keys(&["b"; 10]);
        let err = align_paragraphs(&a, &b, 0.9, 99).unwrap_err();
        assert!(matches!(
            err,
            Error::AlignmentTooLarge {
                original: 10,
                modified: 10,
                limit: 99
            }
        ));
        assert!(align_paragraphs(&a, &b, 0.9, 100).is_ok());
    }
}
