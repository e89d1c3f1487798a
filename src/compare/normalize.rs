//! Case and whitespace normalization applied before diffing.

use super::ComparisonOptions;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Applies the case/whitespace options to raw text.
pub struct Normalizer {
    case_sensitive: bool,
    compare_whitespace: bool,
    normalize_unicode: bool,
    whitespace_regex: Regex,
}

impl Normalizer {
    /// Create a normalizer for the given options.
    pub fn new(options: &ComparisonOptions) -> Self {
        Self {
            case_sensitive: options.case_sensitive,
            compare_whitespace: options.compare_whitespace,
            normalize_unicode: options.normalize_unicode,
            whitespace_regex: Regex::new(r"\s+").unwrap(),
        }
    }

    /// Normalize a text. Lower-cases unless case sensitive, collapses every
    /// whitespace run to one space unless whitespace is compared.
    pub fn normalize(&self, text: &str) -> String {
        let mut result = if self.normalize_unicode {
            text.nfc().collect()
        } else {
            text.to_string()
        };

        if !self.case_sensitive {
            result = result.to_lowercase();
        }

        if !self.compare_whitespace {
            result = self.whitespace_regex.replace_all(&result, " ").into_owned();
        }

        result
    }

    /// Key used to match paragraphs: normalized text, trimmed when
    /// whitespace is ignored.
    pub fn paragraph_key(&self, text: &str) -> String {
        let normalized = self.normalize(text);
        if self.compare_whitespace {
            normalized
        } else {
            normalized.trim().to_string()
        }
    }
}
