use baleen_core::{ParsedDocument, Span, VariableRecord};
use indoc::indoc;

use super::enrich::{DocumentJob, EnrichError, add_offsets, enrich_batch, group_by_filename};
use crate::pstree::{self, Malformed, TreeOptions};

/// "The cat sat. Sea ice melts."
fn document() -> ParsedDocument {
    serde_json::from_str(indoc! {r#"
        {
          "sentences": [
            {
              "parse": "(ROOT (S (NP (DT The) (NN cat)) (VP (VBD sat)) (. .)))",
              "tokens": [
                { "word": "The", "characterOffsetBegin": 0, "characterOffsetEnd": 3 },
                { "word": "cat", "characterOffsetBegin": 4, "characterOffsetEnd": 7 },
                { "word": "sat", "characterOffsetBegin": 8, "characterOffsetEnd": 11 },
                { "word": ".", "characterOffsetBegin": 11, "characterOffsetEnd": 12 }
              ]
            },
            {
              "parse": "(ROOT (S (NP (NN Sea) (NN ice)) (VP (VBZ melts)) (. .)))",
              "tokens": [
                { "characterOffsetBegin": 13, "characterOffsetEnd": 16 },
                { "characterOffsetBegin": 17, "characterOffsetEnd": 20 },
                { "characterOffsetBegin": 21, "characterOffsetEnd": 26 },
                { "characterOffsetBegin": 26, "characterOffsetEnd": 27 }
              ]
            }
          ]
        }
    "#})
    .unwrap()
}

fn record(key: &str, tree: u32, node: u32, sub_str: &str) -> VariableRecord {
    VariableRecord::observed(key, "doc1.parse", tree, node, sub_str)
}

#[test]
fn offsets_for_each_tree() {
    // ROOT=0 S=1 NP=2
    let mut records = vec![
        record("1", 1, 2, "The cat"),
        record("2", 2, 2, "Sea ice"),
        record("3", 2, 4, "ice"),
    ];

    let updated = add_offsets(&mut records, &document(), &TreeOptions::default()).unwrap();

    assert_eq!(updated, 3);
    assert_eq!(records[0].span(), Some(Span::new(0, 7)));
    assert_eq!(records[1].span(), Some(Span::new(13, 20)));
    assert_eq!(records[2].span(), Some(Span::new(17, 20)));
    assert_eq!(records[2].char_offset_begin, Some(17));
    assert_eq!(records[2].char_offset_end, Some(20));
}

#[test]
fn tree_number_out_of_range() {
    let mut records = vec![record("1", 1, 2, "The cat"), record("2", 3, 0, "x")];

    let err = add_offsets(&mut records, &document(), &TreeOptions::default()).unwrap_err();

    assert_eq!(
        err,
        EnrichError::TreeOutOfRange {
            key: "2".to_owned(),
            tree_number: 3,
            sentences: 2
        }
    );
    // Nothing is written on failure.
    assert_eq!(records[0].span(), None);

    let mut records = vec![record("1", 0, 0, "x")];
    let err = add_offsets(&mut records, &document(), &TreeOptions::default()).unwrap_err();
    assert!(matches!(err, EnrichError::TreeOutOfRange { tree_number: 0, .. }));
}

#[test]
fn node_number_out_of_range() {
    let mut records = vec![record("7", 1, 8, "x")];

    let err = add_offsets(&mut records, &document(), &TreeOptions::default()).unwrap_err();

    assert_eq!(
        err.to_string(),
        "record 7: node 8 is not in tree 1 (8 nodes)"
    );
}

#[test]
fn record_from_another_file_is_rejected() {
    // Tree 1 node 2 exists in this document too; it must not be used.
    let mut records = vec![
        record("1", 1, 2, "The cat"),
        VariableRecord::observed("2", "doc2.parse", 1, 2, "Arctic ice"),
    ];

    let err = add_offsets(&mut records, &document(), &TreeOptions::default()).unwrap_err();

    assert_eq!(
        err,
        EnrichError::ForeignRecord {
            key: "2".to_owned(),
            filename: "doc2.parse".to_owned(),
            expected: "doc1.parse".to_owned(),
        }
    );
    assert_eq!(err.to_string(), "record 2: comes from doc2.parse, not doc1.parse");
    assert_eq!(records[0].span(), None);
    assert_eq!(records[1].span(), None);
}

#[test]
fn records_grouped_by_filename() {
    let records = vec![
        VariableRecord::observed("1", "b.parse", 1, 1, "x"),
        VariableRecord::observed("2", "a.parse", 1, 1, "y"),
        VariableRecord::observed("3", "b.parse", 2, 1, "z"),
    ];

    let groups = group_by_filename(records);

    let keys: Vec<(&str, Vec<&str>)> = groups
        .iter()
        .map(|(filename, recs)| (filename.as_str(), recs.iter().map(|r| r.key.as_str()).collect()))
        .collect();
    assert_eq!(keys, vec![("b.parse", vec!["1", "3"]), ("a.parse", vec!["2"])]);
}

#[test]
fn broken_tree_is_reported_with_tree_number() {
    let mut doc = document();
    doc.sentences[1].tokens.truncate(2);
    let mut records = vec![record("1", 2, 2, "Sea ice")];

    let err = add_offsets(&mut records, &doc, &TreeOptions::default()).unwrap_err();

    assert_eq!(
        err,
        EnrichError::Tree {
            tree_number: 2,
            source: pstree::Error::TokenExhaustion { leaves: 3, tokens: 2 }
        }
    );
    assert_eq!(
        err.to_string(),
        "tree 2: parse tree has more leaves than token spans (leaf 3, 2 spans)"
    );
}

#[test]
fn batch_keeps_going_after_failure() {
    let mut broken = document();
    broken.sentences[0].parse = "(ROOT (S (NP (DT The) (NN cat))".to_owned();

    let jobs = vec![
        DocumentJob {
            name: "a".to_owned(),
            records: vec![record("1", 1, 2, "The cat")],
            document: document(),
        },
        DocumentJob {
            name: "b".to_owned(),
            records: vec![record("1", 1, 2, "The cat")],
            document: broken,
        },
        DocumentJob {
            name: "c".to_owned(),
            records: vec![record("1", 2, 3, "ice")],
            document: document(),
        },
    ];

    let report = enrich_batch(jobs, &TreeOptions::default());

    assert_eq!(report.to_string(), "2 succeeded, 1 failed");
    assert!(!report.is_clean());

    let names: Vec<&str> = report.succeeded.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, ["a", "c"]);
    assert_eq!(report.succeeded[1].records[0].span(), Some(Span::new(13, 16)));

    assert_eq!(report.failed[0].name, "b");
    assert!(matches!(
        report.failed[0].error,
        EnrichError::Tree {
            tree_number: 1,
            source: pstree::Error::MalformedTree {
                reason: Malformed::Unclosed,
                ..
            }
        }
    ));
}

#[test]
fn empty_batch() {
    let report = enrich_batch(Vec::new(), &TreeOptions::default());
    assert!(report.is_clean());
    assert_eq!(report.to_string(), "0 succeeded, 0 failed");
}
