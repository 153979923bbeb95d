//! Phrase-structure trees in labeled-bracket notation.
//!
//! - `lexer` - bracket/atom tokens over the parse string
//! - `tree` - arena tree with bottom-up span propagation
//! - `offsets` - pre-order node numbering and the offset map

mod lexer;
mod offsets;
mod syntax_kind;
mod tree;

#[cfg(test)]
mod tree_tests;

pub use lexer::{Token, lex, token_text};
pub use offsets::{LeafMode, NodeNumbering, NodeOffsets, TreeOptions, map_offsets};
pub use syntax_kind::SyntaxKind;
pub use tree::{NodeId, NodeKind, ParseNode, ParseTree, Preorder};

/// Errors that make a parse tree unusable for its document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("malformed parse tree at offset {offset}: {reason}")]
    MalformedTree { offset: usize, reason: Malformed },

    /// Leaf number `leaves` found no token span; only `tokens` were given.
    #[error("parse tree has more leaves than token spans (leaf {leaves}, {tokens} spans)")]
    TokenExhaustion { leaves: usize, tokens: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Malformed {
    #[error("closing bracket without an open node")]
    UnmatchedClose,
    #[error("node closed without children")]
    EmptyNode,
    #[error("node left open at end of input")]
    Unclosed,
    #[error("second top-level tree")]
    MultipleRoots,
    #[error("leaf outside of any node")]
    StrayLeaf,
    #[error("no tree in input")]
    NoTree,
}
