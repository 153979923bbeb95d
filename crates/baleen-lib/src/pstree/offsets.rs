//! Node number to character offset mapping.

use baleen_core::Span;
use serde::{Deserialize, Serialize};

use super::Error;
use super::tree::ParseTree;

/// How runs of atoms between brackets are split into leaves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LeafMode {
    /// Every whitespace-delimited atom is a leaf.
    #[default]
    Whitespace,
    /// Everything up to the next bracket is one leaf, so a token such as
    /// `8 1/2` that contains a space stays aligned with a single span.
    Bracketed,
}

/// Which nodes receive a pre-order number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeNumbering {
    /// Bracketed nodes only; one number per `(`.
    #[default]
    Phrases,
    /// Bracketed nodes and leaves, numbered the way tree matchers count
    /// them: 0 is a virtual wrapper around the whole parse, so the parser's
    /// root is 1.
    All,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct TreeOptions {
    pub leaf_mode: LeafMode,
    pub numbering: NodeNumbering,
}

/// Spans of all numbered nodes; position is the node number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeOffsets(Vec<Span>);

impl NodeOffsets {
    #[inline]
    pub fn get(&self, node_number: u32) -> Option<Span> {
        self.0.get(node_number as usize).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, Span)> + '_ {
        self.0.iter().enumerate().map(|(n, &span)| (n as u32, span))
    }

    pub fn as_slice(&self) -> &[Span] {
        &self.0
    }
}

impl FromIterator<Span> for NodeOffsets {
    fn from_iter<I: IntoIterator<Item = Span>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Maps every node of `parse` to its absolute character span.
///
/// `tokens` are the offsets of the parse's leaves in the source text, left
/// to right. Fails on unbalanced or empty brackets and when the parse has
/// more leaves than `tokens`.
pub fn map_offsets(parse: &str, tokens: &[Span], options: &TreeOptions) -> Result<NodeOffsets, Error> {
    let tree = ParseTree::build(parse, tokens, options.leaf_mode)?;
    Ok(tree.offsets(options.numbering))
}
