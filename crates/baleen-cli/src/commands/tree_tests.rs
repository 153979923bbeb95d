use baleen_core::{ParsedDocument, ParsedSentence, TokenOffsets};
use baleen_lib::pstree::LeafMode;

use super::tree::{render_tree, select_sentences};

fn sentence(parse: &str, spans: &[(u32, u32)]) -> ParsedSentence {
    ParsedSentence {
        parse: parse.to_owned(),
        tokens: spans
            .iter()
            .map(|&(begin, end)| TokenOffsets {
                word: None,
                begin,
                end,
            })
            .collect(),
    }
}

fn document() -> ParsedDocument {
    ParsedDocument {
        sentences: vec![
            sentence("(ROOT (NP (NN Ice)))", &[(0, 3)]),
            sentence("(ROOT (NP (CD 8 1/2) (NNS inches)))", &[(4, 9), (10, 16)]),
        ],
    }
}

#[test]
fn renders_tree_with_spans() {
    let doc = document();
    let out = render_tree(&doc.sentences[1], LeafMode::Bracketed).unwrap();
    insta::assert_snapshot!(out, @r#"
    ROOT 4..16
      NP 4..16
        CD 4..9
          "8 1/2" 4..9
        NNS 10..16
          "inches" 10..16
    "#);
}

#[test]
fn render_reports_token_shortage() {
    let doc = document();
    let err = render_tree(&doc.sentences[1], LeafMode::Whitespace).unwrap_err();
    assert_eq!(
        err.to_string(),
        "parse tree has more leaves than token spans (leaf 3, 2 spans)"
    );
}

#[test]
fn select_all_or_one() {
    let doc = document();

    let all: Vec<u32> = select_sentences(&doc, None).unwrap().into_iter().map(|(n, _)| n).collect();
    assert_eq!(all, [1, 2]);

    let one = select_sentences(&doc, Some(2)).unwrap();
    assert_eq!(one.len(), 1);
    assert_eq!(one[0].1.tokens.len(), 2);

    let err = select_sentences(&doc, Some(3)).unwrap_err();
    assert_eq!(err, "tree 3 not in document (2 sentences)");
}
