use baleen_core::Span;

use super::offsets::LeafMode;
use super::tree::{NodeId, NodeKind, ParseTree};
use super::{Error, Malformed};

fn spans(pairs: &[(u32, u32)]) -> Vec<Span> {
    pairs.iter().copied().map(Span::from).collect()
}

fn dump(parse: &str, tokens: &[(u32, u32)]) -> String {
    ParseTree::build(parse, &spans(tokens), LeafMode::Whitespace)
        .expect("valid tree")
        .dump()
}

fn build_err(parse: &str, tokens: &[(u32, u32)]) -> Error {
    ParseTree::build(parse, &spans(tokens), LeafMode::Whitespace).expect_err("invalid tree")
}

#[test]
fn simple_sentence() {
    let out = dump(
        "(S (NP (DT the) (NN cat)) (VP (VBD sat)))",
        &[(0, 3), (4, 7), (8, 11)],
    );
    insta::assert_snapshot!(out, @r#"
    S 0..11
      NP 0..7
        DT 0..3
          "the" 0..3
        NN 4..7
          "cat" 4..7
      VP 8..11
        VBD 8..11
          "sat" 8..11
    "#);
}

#[test]
fn unlabeled_root() {
    let out = dump("( (S (NN Ice) (VBZ melts)))", &[(100, 103), (104, 109)]);
    insta::assert_snapshot!(out, @r#"
    _ 100..109
      S 100..109
        NN 100..103
          "Ice" 100..103
        VBZ 104..109
          "melts" 104..109
    "#);
}

#[test]
fn spans_come_from_tokens_not_parse_string() {
    // Source text had extra spacing; the parse string does not.
    let tree = ParseTree::build("(NP (JJ sea) (NN ice))", &spans(&[(10, 13), (17, 20)]), LeafMode::Whitespace)
        .unwrap();

    assert_eq!(tree.root().span, Span::new(10, 20));
    assert_eq!(tree.leaf_count(), 2);
}

#[test]
fn arena_order_is_preorder() {
    let tree = ParseTree::build(
        "(S (NP (DT the) (NN cat)) (VP (VBD sat) (PP (IN on) (NP (DT the) (NN mat)))))",
        &spans(&[(0, 3), (4, 7), (8, 11), (12, 14), (15, 18), (19, 22)]),
        LeafMode::Whitespace,
    )
    .unwrap();

    let order: Vec<usize> = tree.preorder().map(|(id, _, _)| id.index()).collect();
    let expected: Vec<usize> = (0..tree.len()).collect();
    assert_eq!(order, expected);
}

#[test]
fn parent_links() {
    let tree =
        ParseTree::build("(S (NP (NN cats)) (VP (VBP purr)))", &spans(&[(0, 4), (5, 9)]), LeafMode::Whitespace)
            .unwrap();

    let root = tree.root();
    assert!(root.parent.is_none());
    assert_eq!(root.label(), Some("S"));

    for (id, node, _) in tree.preorder().skip(1) {
        let parent = node.parent.expect("non-root has parent");
        assert!(tree.node(parent).children.contains(&id));
    }
    assert_eq!(tree.node(NodeId::ROOT).children.len(), 2);
}

#[test]
fn terminal_records_token_position() {
    let tree = ParseTree::build("(NP (DT the) (NN cat))", &spans(&[(0, 3), (4, 7)]), LeafMode::Whitespace)
        .unwrap();

    let terminals: Vec<(String, usize)> = tree
        .preorder()
        .filter_map(|(_, node, _)| match &node.kind {
            NodeKind::Terminal { text, token } => Some((text.clone(), *token)),
            NodeKind::Phrase { .. } => None,
        })
        .collect();

    assert_eq!(terminals, vec![("the".to_owned(), 0), ("cat".to_owned(), 1)]);
}

#[test]
fn bracketed_leaf_mode_joins_atoms() {
    let parse = "(NP (CD 8 1/2) (NNS inches))";
    let tokens = spans(&[(0, 5), (6, 12)]);

    let tree = ParseTree::build(parse, &tokens, LeafMode::Bracketed).unwrap();
    insta::assert_snapshot!(tree.dump(), @r#"
    NP 0..12
      CD 0..5
        "8 1/2" 0..5
      NNS 6..12
        "inches" 6..12
    "#);

    // Whitespace mode sees three leaves and runs out of spans.
    let err = ParseTree::build(parse, &tokens, LeafMode::Whitespace).unwrap_err();
    assert_eq!(err, Error::TokenExhaustion { leaves: 3, tokens: 2 });
}

#[test]
fn deep_nesting_does_not_recurse() {
    let depth = 100_000;
    let parse = format!("{}(NN x){}", "(X ".repeat(depth), ")".repeat(depth));
    let tree = ParseTree::build(&parse, &spans(&[(5, 6)]), LeafMode::Whitespace).unwrap();

    assert_eq!(tree.len(), depth + 2);
    assert_eq!(tree.root().span, Span::new(5, 6));
    assert_eq!(tree.preorder().count(), depth + 2);
}

#[test]
fn unbalanced_is_malformed() {
    let err = build_err("(S (NP (DT the))", &[(0, 3)]);
    assert_eq!(
        err,
        Error::MalformedTree {
            offset: 16,
            reason: Malformed::Unclosed
        }
    );
}

#[test]
fn unmatched_close_is_malformed() {
    let err = build_err("(NN cat))", &[(0, 3)]);
    assert_eq!(
        err,
        Error::MalformedTree {
            offset: 8,
            reason: Malformed::UnmatchedClose
        }
    );
}

#[test]
fn empty_brackets_are_malformed() {
    let err = build_err("(S (NP) (NN cat))", &[(0, 3)]);
    assert_eq!(
        err,
        Error::MalformedTree {
            offset: 6,
            reason: Malformed::EmptyNode
        }
    );

    // A lone label is consumed as the label, leaving the node empty.
    let err = build_err("(cat)", &[(0, 3)]);
    assert!(matches!(
        err,
        Error::MalformedTree {
            reason: Malformed::EmptyNode,
            ..
        }
    ));
}

#[test]
fn second_root_is_malformed() {
    let err = build_err("(NN cat) (NN dog)", &[(0, 3), (4, 7)]);
    assert_eq!(
        err,
        Error::MalformedTree {
            offset: 9,
            reason: Malformed::MultipleRoots
        }
    );
}

#[test]
fn stray_leaf_is_malformed() {
    let err = build_err("cat (NN dog)", &[(0, 3)]);
    assert_eq!(
        err,
        Error::MalformedTree {
            offset: 0,
            reason: Malformed::StrayLeaf
        }
    );
}

#[test]
fn blank_input_is_malformed() {
    let err = build_err("  \n", &[]);
    assert_eq!(
        err,
        Error::MalformedTree {
            offset: 0,
            reason: Malformed::NoTree
        }
    );
}

#[test]
fn error_messages() {
    let err = build_err("(S (NP (DT the))", &[(0, 3)]);
    assert_eq!(
        err.to_string(),
        "malformed parse tree at offset 16: node left open at end of input"
    );

    let err = build_err("(NP (DT the) (NN cat))", &[(0, 3)]);
    assert_eq!(
        err.to_string(),
        "parse tree has more leaves than token spans (leaf 2, 1 spans)"
    );
}
