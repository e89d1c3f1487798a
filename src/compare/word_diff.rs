//! Word-level differ.
//!
//! Tokens are interned into `u32` symbols so the generic edit-script core
//! can run over them without any limit on the number of distinct words.

use super::edit_script::{edit_script, EditOp};
use super::ComparisonTuning;
use crate::result::{ChangeCollector, Position};
use std::collections::HashMap;

/// Growable token to symbol table shared by both sides of one comparison.
#[derive(Debug, Default)]
pub struct TokenTable {
    ids: HashMap<String, u32>,
    tokens: Vec<String>,
}

impl TokenTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Symbol for `token`, assigning the next free one on first sight.
    pub fn intern(&mut self, token: &str) -> u32 {
        if let Some(&id) = self.ids.get(token) {
            return id;
        }
        let id = self.tokens.len() as u32;
        self.tokens.push(token.to_string());
        self.ids.insert(token.to_string(), id);
        id
    }

    /// Split `text` on whitespace and intern every token.
    pub fn encode(&mut self, text: &str) -> Vec<u32> {
        text.split_whitespace().map(|token| self.intern(token)).collect()
    }

    /// Token text of a symbol.
    pub fn token(&self, id: u32) -> Option<&str> {
        self.tokens.get(id as usize).map(String::as_str)
    }

    /// Join the tokens of `ids` with single spaces.
    pub fn decode(&self, ids: &[u32]) -> String {
        ids.iter()
            .filter_map(|&id| self.token(id))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if no token was interned.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Diff two texts word by word and record one change per deletion or
/// insertion segment.
pub fn diff_words(
    text1: &str,
    text2: &str,
    tuning: &ComparisonTuning,
    collector: &mut ChangeCollector,
) {
    let mut table = TokenTable::new();
    let old = table.encode(text1);
    let new = table.encode(text2);
    let edits = edit_script(&old, &new);
    log::debug!(
        "Word diff: {} -> {} tokens, {} distinct, {} segments",
        old.len(),
        new.len(),
        table.len(),
        edits.len()
    );

    let mut offset = 0;
    for edit in &edits {
        let position = Position::paragraph(tuning.paragraph_for_word(offset));
        match edit.op {
            EditOp::Delete => collector.deleted(table.decode(&edit.items), position),
            EditOp::Insert => collector.added(table.decode(&edit.items), position),
            EditOp::Equal => {}
        }
        if edit.op != EditOp::Insert {
            offset += edit.len();
        }
    }
}
