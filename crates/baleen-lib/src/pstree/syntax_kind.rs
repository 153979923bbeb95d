//! Token kinds of the labeled-bracket notation.
//!
//! Logos is derived directly on this enum. The notation has only three
//! meaningful symbols; everything that is neither a bracket nor whitespace
//! is an `Atom`, which the tree builder later interprets as a label or a leaf.

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum SyntaxKind {
    #[token("(")]
    ParenOpen = 0,

    #[token(")")]
    ParenClose,

    /// Run of non-bracket, non-whitespace characters: a label or a leaf.
    #[regex(r"[^\s()]+")]
    Atom,

    #[regex(r"\s+")]
    Whitespace,
}

impl SyntaxKind {
    #[inline]
    pub fn is_trivia(self) -> bool {
        self == SyntaxKind::Whitespace
    }
}
