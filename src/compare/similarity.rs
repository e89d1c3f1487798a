//! Levenshtein-based similarity scoring.

/// Percentage similarity of two strings in `[0, 100]`, rounded to two
/// decimals. Two empty strings are 100% similar.
pub fn similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 100.0;
    }

    let distance = strsim::levenshtein(a, b);
    let score = (max_len - distance) as f64 / max_len as f64 * 100.0;
    (score * 100.0).round() / 100.0
}

/// Check whether two (already normalized) strings are similar enough to
/// be treated as the same paragraph.
///
/// Equal strings always match; an empty string never matches a non-empty
/// one. Otherwise `1 - distance / max_len >= threshold`.
pub fn are_similar(a: &str, b: &str, threshold: f64) -> bool {
    if a == b {
        return true;
    }

    let len_a = a.chars().count();
    let len_b = b.chars().count();
    if len_a == 0 || len_b == 0 {
        return false;
    }

    let max_len = len_a.max(len_b) as f64;

    // The distance is at least the length difference.
    let gap = len_a.abs_diff(len_b) as f64;
    if 1.0 - gap / max_len < threshold {
        return false;
    }

    let distance = strsim::levenshtein(a, b) as f64;
    1.0 - distance / max_len >= threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_similarity_identical() {
        assert_eq!(similarity("hello", "hello"), 100.0);
        assert_eq!(similarity("", ""), 100.0);
    }

    #[test]
    fn test_similarity_one_empty() {
        assert_eq!(similarity("", "abc"), 0.0);
        assert_eq!(similarity("abc", ""), 0.0);
    }

    #[test]
    fn test_similarity_rounding() {
        // distance 1 over 3 chars = 66.666...
        assert_eq!(similarity("abc", "abd"), 66.67);
    }

    #[test]
    fn test_similarity_symmetric() {
        let pairs = [("kitten", "sitting"), ("안녕하세요", "안녕"), ("", "x")];
        for (a, b) in pairs {
            assert_eq!(similarity(a, b), similarity(b, a));
        }
    }

    #[test]
    fn test_similarity_disjoint_korean() {
        let score = similarity("안녕하세요", "xyz123");
        assert!(score < 50.0);
        assert!(score >= 0.0);
    }

    #[test]
    fn test_are_similar_threshold() {
        // 1 edit in 10 chars = 0.9
        assert!(are_similar("abcdefghij", "abcdefghiX", 0.9));
        // 2 edits in 10 chars = 0.8
        assert!(!are_similar("abcdefghij", "abcdefghXY", 0.9));
        assert!(are_similar("abcdefghij", "abcdefghXY", 0.8));
    }

    #[test]
    fn test_are_similar_empty() {
        assert!(are_similar("", "", 0.9));
        assert!(!are_similar("", "a", 0.0));
    }

    #[test]
    fn test_are_similar_length_gap() {
        assert!(!are_similar("a", "a very long paragraph", 0.9));
    }
}
