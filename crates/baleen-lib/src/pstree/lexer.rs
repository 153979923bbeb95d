//! Lexer for labeled-bracket parse strings.
//!
//! Produces span-based tokens without storing text - text is sliced from the
//! parse string only when needed.

use logos::Logos;
use rowan::TextRange;
use std::ops::Range;

use super::syntax_kind::SyntaxKind;

/// Zero-copy token: kind + span, text retrieved via [`token_text`] when needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: SyntaxKind,
    pub span: TextRange,
}

impl Token {
    #[inline]
    pub fn new(kind: SyntaxKind, span: TextRange) -> Self {
        Self { kind, span }
    }

    #[inline]
    pub fn offset(&self) -> usize {
        u32::from(self.span.start()) as usize
    }
}

fn range_to_text_range(range: Range<usize>) -> TextRange {
    TextRange::new((range.start as u32).into(), (range.end as u32).into())
}

/// Tokenizes a parse string into a vector of span-based tokens.
///
/// Every character falls into one of the kinds, so Logos never reports an
/// error here; should it ever, the span is kept as an `Atom`.
pub fn lex(source: &str) -> Vec<Token> {
    SyntaxKind::lexer(source)
        .spanned()
        .map(|(kind, span)| {
            Token::new(kind.unwrap_or(SyntaxKind::Atom), range_to_text_range(span))
        })
        .collect()
}

/// Retrieves the text slice for a token. O(1) slice into source.
#[inline]
pub fn token_text<'s>(source: &'s str, token: &Token) -> &'s str {
    &source[std::ops::Range::<usize>::from(token.span)]
}
