//! Tests for CLI dispatch logic.
//!
//! These tests verify:
//! 1. Global flags are accepted before and after the subcommand
//! 2. Params extraction: optional flags stay unset so config can fill them
//! 3. Value validation happens in clap

use std::path::PathBuf;

use baleen_lib::prune::CollapseLabel;
use baleen_lib::pstree::{LeafMode, NodeNumbering};

use super::*;
use crate::cli::commands::{enrich_command, offsets_command, prune_command, tree_command};

#[test]
fn global_flags_after_subcommand() {
    let m = build_cli()
        .try_get_matches_from(["baleen", "prune", "graph.json", "-vv", "--config", "b.toml"])
        .unwrap();

    let global = GlobalParams::from_matches(&m);
    assert_eq!(global.verbose, 2);
    assert_eq!(global.config, Some(PathBuf::from("b.toml")));
}

#[test]
fn global_flags_before_subcommand() {
    let m = build_cli()
        .try_get_matches_from(["baleen", "-v", "tree", "doc.json"])
        .unwrap();

    let global = GlobalParams::from_matches(&m);
    assert_eq!(global.verbose, 1);
    assert_eq!(global.config, None);
    assert_eq!(m.subcommand_name(), Some("tree"));
}

#[test]
fn subcommand_is_required() {
    assert!(build_cli().try_get_matches_from(["baleen"]).is_err());
}

#[test]
fn tree_params() {
    let m = tree_command()
        .try_get_matches_from(["tree", "doc.json", "--sentence", "2", "--leaf-mode", "bracketed"])
        .unwrap();

    let params = TreeParams::from_matches(&m);
    assert_eq!(params.document, PathBuf::from("doc.json"));
    assert_eq!(params.sentence, Some(2));
    assert_eq!(params.leaf_mode, Some(LeafMode::Bracketed));
}

#[test]
fn sentence_numbers_start_at_one() {
    let result = tree_command().try_get_matches_from(["tree", "doc.json", "--sentence", "0"]);
    assert!(result.is_err());
}

#[test]
fn offsets_params_default_to_unset() {
    let m = offsets_command().try_get_matches_from(["offsets", "doc.json"]).unwrap();

    let params = OffsetsParams::from_matches(&m);
    assert_eq!(params.sentence, None);
    assert_eq!(params.leaf_mode, None);
    assert_eq!(params.numbering, None);
    assert!(!params.compact);

    let m = offsets_command()
        .try_get_matches_from(["offsets", "doc.json", "--numbering", "all", "--compact"])
        .unwrap();
    let params = OffsetsParams::from_matches(&m);
    assert_eq!(params.numbering, Some(NodeNumbering::All));
    assert!(params.compact);
}

#[test]
fn enrich_params() {
    let m = enrich_command()
        .try_get_matches_from([
            "enrich",
            "a.json",
            "b.json",
            "--documents",
            "parsed",
            "-o",
            "out",
            "--strict",
        ])
        .unwrap();

    let params = EnrichParams::from_matches(&m);
    assert_eq!(params.records, [PathBuf::from("a.json"), PathBuf::from("b.json")]);
    assert_eq!(params.documents, PathBuf::from("parsed"));
    assert_eq!(params.output, PathBuf::from("out"));
    assert!(params.strict);
}

#[test]
fn enrich_requires_documents_and_output() {
    let result = enrich_command().try_get_matches_from(["enrich", "a.json", "-o", "out"]);
    assert!(result.is_err());

    let result = enrich_command().try_get_matches_from(["enrich", "a.json", "--documents", "parsed"]);
    assert!(result.is_err());
}

#[test]
fn prune_params() {
    let m = prune_command()
        .try_get_matches_from([
            "prune",
            "graph.json",
            "-o",
            "pruned.json",
            "--batch-size",
            "100",
            "--collapse-label",
            "drop",
        ])
        .unwrap();

    let params = PruneParams::from_matches(&m);
    assert_eq!(params.graph, PathBuf::from("graph.json"));
    assert_eq!(params.output, Some(PathBuf::from("pruned.json")));
    assert_eq!(params.batch_size, Some(100));
    assert_eq!(params.fuel, None);
    assert_eq!(params.collapse_label, Some(CollapseLabel::Drop));
}

#[test]
fn prune_rejects_unknown_policy() {
    let result = prune_command().try_get_matches_from(["prune", "graph.json", "--collapse-label", "concat"]);
    assert!(result.is_err());
}

#[test]
fn help_lists_subcommands() {
    let help = build_cli().render_help().to_string();
    for name in ["tree", "offsets", "enrich", "filter", "graph", "prune"] {
        assert!(help.contains(name), "missing {name} in help");
    }
}
