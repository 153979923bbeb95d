//! Parser output consumed by offset mapping.
//!
//! One document per source text. Each sentence carries the labeled-bracket
//! parse string and the offsets of its tokens, in leaf order.

use serde::{Deserialize, Serialize};

use crate::Span;

/// All parsed sentences of one source document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedDocument {
    pub sentences: Vec<ParsedSentence>,
}

impl ParsedDocument {
    /// Sentence by 1-based tree number, as used by `treeNumber` in records.
    pub fn sentence(&self, tree_number: u32) -> Option<&ParsedSentence> {
        let index = usize::try_from(tree_number).ok()?.checked_sub(1)?;
        self.sentences.get(index)
    }
}

/// A sentence: parse tree plus token offsets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedSentence {
    pub parse: String,
    pub tokens: Vec<TokenOffsets>,
}

impl ParsedSentence {
    pub fn token_spans(&self) -> Vec<Span> {
        self.tokens.iter().map(TokenOffsets::span).collect()
    }

    /// Span of the whole sentence, from first to last token.
    pub fn span(&self) -> Option<Span> {
        let first = self.tokens.first()?;
        let last = self.tokens.last()?;
        Some(Span::cover(first.span(), last.span()))
    }
}

/// Token metadata from the external tokenizer.
///
/// Field aliases accept the tokenizer's own naming.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenOffsets {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,
    #[serde(alias = "characterOffsetBegin")]
    pub begin: u32,
    #[serde(alias = "characterOffsetEnd")]
    pub end: u32,
}

impl TokenOffsets {
    #[inline]
    pub fn span(&self) -> Span {
        Span::new(self.begin, self.end)
    }
}
