//! Arena-backed phrase-structure tree.
//!
//! Construction walks the token stream once with a cursor on the innermost
//! open node; parent links replace the call stack, so nesting depth is bounded
//! only by memory. Spans are assigned bottom-up: a terminal takes its token's
//! span when created, a phrase takes first-child start and last-child end when
//! its closing bracket is seen.

use std::fmt::Write as _;

use baleen_core::Span;

use super::lexer::{Token, lex, token_text};
use super::offsets::{LeafMode, NodeNumbering, NodeOffsets};
use super::syntax_kind::SyntaxKind;
use super::{Error, Malformed};

/// Index into the tree arena. Arena order is creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Bracketed node, e.g. `(NP ...)`. PTB roots are often unlabeled.
    Phrase { label: Option<String> },
    /// Leaf; `token` is its position in the token span sequence.
    Terminal { text: String, token: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNode {
    pub kind: NodeKind,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub span: Span,
}

impl ParseNode {
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self.kind, NodeKind::Terminal { .. })
    }

    pub fn label(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Phrase { label } => label.as_deref(),
            NodeKind::Terminal { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTree {
    nodes: Vec<ParseNode>,
}

impl ParseTree {
    /// Builds the tree for `source`, aligning leaves with `tokens` left to right.
    ///
    /// Surplus token spans are ignored.
    pub fn build(source: &str, tokens: &[Span], leaf_mode: LeafMode) -> Result<Self, Error> {
        let symbols: Vec<Token> = lex(source)
            .into_iter()
            .filter(|t| !t.kind.is_trivia())
            .collect();

        let mut nodes: Vec<ParseNode> = Vec::new();
        let mut cursor: Option<NodeId> = None;
        let mut consumed = 0usize;
        let mut pos = 0usize;

        while let Some(symbol) = symbols.get(pos) {
            match symbol.kind {
                SyntaxKind::ParenOpen => {
                    if cursor.is_none() && !nodes.is_empty() {
                        return Err(malformed(symbol.offset(), Malformed::MultipleRoots));
                    }
                    let label = match symbols.get(pos + 1) {
                        Some(next) if next.kind == SyntaxKind::Atom => {
                            pos += 1;
                            Some(token_text(source, next).to_owned())
                        }
                        _ => None,
                    };
                    let id = push(&mut nodes, NodeKind::Phrase { label }, cursor, Span::default());
                    cursor = Some(id);
                }
                SyntaxKind::ParenClose => {
                    let Some(id) = cursor else {
                        return Err(malformed(symbol.offset(), Malformed::UnmatchedClose));
                    };
                    let node = &nodes[id.index()];
                    let (Some(first), Some(last)) = (node.children.first(), node.children.last())
                    else {
                        return Err(malformed(symbol.offset(), Malformed::EmptyNode));
                    };
                    let span = Span::cover(nodes[first.index()].span, nodes[last.index()].span);
                    let node = &mut nodes[id.index()];
                    node.span = span;
                    cursor = node.parent;
                }
                SyntaxKind::Atom => {
                    let Some(parent) = cursor else {
                        return Err(malformed(symbol.offset(), Malformed::StrayLeaf));
                    };
                    let mut last = symbol;
                    if leaf_mode == LeafMode::Bracketed {
                        while let Some(next) = symbols.get(pos + 1)
                            && next.kind == SyntaxKind::Atom
                        {
                            last = next;
                            pos += 1;
                        }
                    }
                    let text = &source[symbol.offset()..usize::from(last.span.end())];
                    let Some(&span) = tokens.get(consumed) else {
                        return Err(Error::TokenExhaustion {
                            leaves: consumed + 1,
                            tokens: tokens.len(),
                        });
                    };
                    let kind = NodeKind::Terminal {
                        text: text.to_owned(),
                        token: consumed,
                    };
                    push(&mut nodes, kind, Some(parent), span);
                    consumed += 1;
                }
                SyntaxKind::Whitespace => {}
            }
            pos += 1;
        }

        if cursor.is_some() {
            return Err(malformed(source.len(), Malformed::Unclosed));
        }
        if nodes.is_empty() {
            return Err(malformed(0, Malformed::NoTree));
        }

        Ok(Self { nodes })
    }

    #[inline]
    pub fn root(&self) -> &ParseNode {
        &self.nodes[NodeId::ROOT.index()]
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &ParseNode {
        &self.nodes[id.index()]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_terminal()).count()
    }

    /// Nodes in pre-order, root first.
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder {
            tree: self,
            stack: vec![(NodeId::ROOT, 0)],
        }
    }

    /// Node spans indexed by pre-order number.
    pub fn offsets(&self, numbering: NodeNumbering) -> NodeOffsets {
        match numbering {
            NodeNumbering::Phrases => self
                .preorder()
                .filter(|(_, node, _)| !node.is_terminal())
                .map(|(_, node, _)| node.span)
                .collect(),
            NodeNumbering::All => std::iter::once(self.root().span)
                .chain(self.preorder().map(|(_, node, _)| node.span))
                .collect(),
        }
    }

    /// Indented rendering with spans, one node per line.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for (_, node, depth) in self.preorder() {
            let indent = "  ".repeat(depth);
            let _ = match &node.kind {
                NodeKind::Phrase { label } => {
                    writeln!(out, "{indent}{} {}", label.as_deref().unwrap_or("_"), node.span)
                }
                NodeKind::Terminal { text, .. } => {
                    writeln!(out, "{indent}{text:?} {}", node.span)
                }
            };
        }
        out
    }
}

/// Explicit-stack pre-order walk yielding `(id, node, depth)`.
pub struct Preorder<'t> {
    tree: &'t ParseTree,
    stack: Vec<(NodeId, usize)>,
}

impl<'t> Iterator for Preorder<'t> {
    type Item = (NodeId, &'t ParseNode, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (id, depth) = self.stack.pop()?;
        let node = self.tree.nodes.get(id.index())?;
        self.stack
            .extend(node.children.iter().rev().map(|&child| (child, depth + 1)));
        Some((id, node, depth))
    }
}

fn push(nodes: &mut Vec<ParseNode>, kind: NodeKind, parent: Option<NodeId>, span: Span) -> NodeId {
    let id = NodeId(nodes.len() as u32);
    nodes.push(ParseNode {
        kind,
        parent,
        children: Vec::new(),
        span,
    });
    if let Some(parent) = parent {
        nodes[parent.index()].children.push(id);
    }
    id
}

fn malformed(offset: usize, reason: Malformed) -> Error {
    Error::MalformedTree { offset, reason }
}
