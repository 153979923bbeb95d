//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.
//! `--config` and `-v` are global and accepted after any subcommand.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("baleen")
        .about("Character offsets for parse trees and tentailment graph pruning")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(config_arg())
        .arg(verbose_arg())
        .subcommand(tree_command())
        .subcommand(offsets_command())
        .subcommand(enrich_command())
        .subcommand(filter_command())
        .subcommand(graph_command())
        .subcommand(prune_command())
}

/// Show parse trees with spans.
pub fn tree_command() -> Command {
    Command::new("tree")
        .about("Show parse trees of a document with character spans")
        .after_help(
            r#"EXAMPLES:
  baleen tree doc.json                    # every sentence
  baleen tree doc.json --sentence 3       # third tree only
  baleen tree doc.json --leaf-mode bracketed"#,
        )
        .arg(document_arg())
        .arg(sentence_arg())
        .arg(leaf_mode_arg())
}

/// Print node offsets as JSON.
pub fn offsets_command() -> Command {
    Command::new("offsets")
        .about("Print character offsets of every numbered node")
        .after_help(
            r#"EXAMPLES:
  baleen offsets doc.json --sentence 1
  baleen offsets doc.json --numbering all --compact"#,
        )
        .arg(document_arg())
        .arg(sentence_arg())
        .arg(leaf_mode_arg())
        .arg(numbering_arg())
        .arg(compact_arg())
}

/// Add offsets to record files.
pub fn enrich_command() -> Command {
    Command::new("enrich")
        .about("Add charOffsetBegin/charOffsetEnd to variable records")
        .after_help(
            r#"Each record's parsed document is looked up in --documents by the stem of
its filename: `a.parse` -> `DIR/a.json`. Output keeps the records file name;
records read from stdin are written as `stdin.json`.

EXAMPLES:
  baleen enrich vars/*.json --documents parsed/ -o vars-offsets/
  baleen enrich vars/*.json --documents parsed/ -o out/ --strict"#,
        )
        .arg(records_list_arg())
        .arg(documents_dir_arg())
        .arg(output_dir_arg())
        .arg(strict_arg())
        .arg(leaf_mode_arg())
        .arg(numbering_arg())
}

/// Preprocessing filter.
pub fn filter_command() -> Command {
    Command::new("filter")
        .about("Drop empty variables and variables with deleted descendants")
        .arg(records_arg())
        .arg(output_file_arg())
}

/// Build the graph snapshot.
pub fn graph_command() -> Command {
    Command::new("graph")
        .about("Build a tentailment graph snapshot from variable records")
        .arg(records_list_arg())
        .arg(output_file_arg())
}

/// Prune a graph snapshot.
pub fn prune_command() -> Command {
    Command::new("prune")
        .about("Deduplicate edges and collapse non-branching tentailment chains")
        .after_help(
            r#"EXAMPLES:
  baleen prune graph.json -o pruned.json
  baleen prune graph.json --batch-size 1000 --collapse-label drop"#,
        )
        .arg(graph_arg())
        .arg(output_file_arg())
        .arg(batch_size_arg())
        .arg(fuel_arg())
        .arg(collapse_label_arg())
}
