//! Comparison options and configuration.

use serde::{Deserialize, Serialize};

/// Options controlling a document comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonOptions {
    /// Compare run formatting of matched paragraphs (structural mode)
    pub compare_formatting: bool,

    /// Treat upper and lower case as different
    pub case_sensitive: bool,

    /// Treat whitespace differences as changes
    pub compare_whitespace: bool,

    /// Compare tables (structural mode)
    pub compare_tables: bool,

    /// Reserved: headers and footers are not compared yet
    pub compare_headers_footers: bool,

    /// Reserved: footnotes are not compared yet
    pub compare_footnotes: bool,

    /// Reserved: fields are not compared yet
    pub compare_fields: bool,

    /// Reserved: text boxes are not compared yet
    pub compare_text_boxes: bool,

    /// Reserved: comments are not compared yet
    pub compare_comments: bool,

    /// Granularity of text-mode comparison
    pub detail_level: DetailLevel,

    /// How a renderer should display the result (not used by the engine)
    pub display_mode: DisplayMode,

    /// Text or structure-aware comparison
    pub mode: ComparisonMode,

    /// Apply Unicode NFC normalization before comparing
    pub normalize_unicode: bool,

    /// Thresholds and heuristics
    pub tuning: ComparisonTuning,
}

impl ComparisonOptions {
    /// Create new comparison options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text-mode detail level.
    pub fn with_detail_level(mut self, level: DetailLevel) -> Self {
        self.detail_level = level;
        self
    }

    /// Enable or disable case sensitivity.
    pub fn with_case_sensitive(mut self, sensitive: bool) -> Self {
        self.case_sensitive = sensitive;
        self
    }

    /// Enable or disable whitespace comparison.
    pub fn with_whitespace(mut self, compare: bool) -> Self {
        self.compare_whitespace = compare;
        self
    }

    /// Enable or disable formatting comparison.
    pub fn with_formatting(mut self, compare: bool) -> Self {
        self.compare_formatting = compare;
        self
    }

    /// Enable or disable table comparison.
    pub fn with_tables(mut self, compare: bool) -> Self {
        self.compare_tables = compare;
        self
    }

    /// Set the comparison mode.
    pub fn with_mode(mut self, mode: ComparisonMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the display mode.
    pub fn with_display_mode(mut self, mode: DisplayMode) -> Self {
        self.display_mode = mode;
        self
    }

    /// Enable or disable Unicode NFC normalization.
    pub fn with_unicode_normalization(mut self, normalize: bool) -> Self {
        self.normalize_unicode = normalize;
        self
    }

    /// Set tuning parameters.
    pub fn with_tuning(mut self, tuning: ComparisonTuning) -> Self {
        self.tuning = tuning;
        self
    }

    /// Names of reserved toggles that are switched on.
    pub(crate) fn reserved_toggles(&self) -> Vec<&'static str> {
        [
            ("headers_footers", self.compare_headers_footers),
            ("footnotes", self.compare_footnotes),
            ("fields", self.compare_fields),
            ("text_boxes", self.compare_text_boxes),
            ("comments", self.compare_comments),
        ]
        .into_iter()
        .filter_map(|(name, on)| on.then_some(name))
        .collect()
    }
}

impl Default for ComparisonOptions {
    fn default() -> Self {
        Self {
            compare_formatting: true,
            case_sensitive: false,
            compare_whitespace: true,
            compare_tables: true,
            compare_headers_footers: true,
            compare_footnotes: true,
            compare_fields: true,
            compare_text_boxes: true,
            compare_comments: true,
            detail_level: DetailLevel::Character,
            display_mode: DisplayMode::SideBySide,
            mode: ComparisonMode::Auto,
            normalize_unicode: false,
            tuning: ComparisonTuning::default(),
        }
    }
}

/// Granularity of text-mode comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailLevel {
    /// Character-level edit script with semantic cleanup
    #[default]
    Character,
    /// Word-level edit script
    Word,
    /// Index-aligned sentences
    Sentence,
    /// Index-aligned blank-line separated paragraphs
    Paragraph,
}

/// Display hint for renderers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    /// Original and modified side by side
    #[default]
    SideBySide,
    /// Single interleaved view
    Unified,
    /// Modified document with markup
    Modified,
}

/// Which pipeline to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComparisonMode {
    /// Structural when both documents carry a structure, text otherwise
    #[default]
    Auto,
    /// Plain text at the configured detail level
    Text,
    /// Paragraph alignment, formatting and tables
    Structural,
}

/// Tunable constants of the comparison heuristics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonTuning {
    /// Minimum normalized similarity (0.0-1.0) for two paragraphs to be
    /// aligned as the same paragraph
    pub similarity_threshold: f64,

    /// Characters per estimated paragraph in character mode
    pub chars_per_paragraph: usize,

    /// Words per estimated paragraph in word mode
    pub words_per_paragraph: usize,

    /// Maximum cells (m x n) of the paragraph alignment table
    pub max_alignment_cells: usize,
}

impl ComparisonTuning {
    /// Estimated 1-based paragraph for a character offset.
    pub fn paragraph_for_char(&self, offset: usize) -> usize {
        offset / self.chars_per_paragraph.max(1) + 1
    }

    /// Estimated 1-based paragraph for a word offset.
    pub fn paragraph_for_word(&self, offset: usize) -> usize {
        offset / self.words_per_paragraph.max(1) + 1
    }
}

impl Default for ComparisonTuning {
    fn default() -> Self {
        Self {
            similarity_threshold: 0.9,
            chars_per_paragraph: 100,
            words_per_paragraph: 50,
            max_alignment_cells: 16_000_000,
        }
    }
}
