//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Configuration file (--config).
pub fn config_arg() -> Arg {
    Arg::new("config")
        .long("config")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .global(true)
        .help("Configuration file (default: ./baleen.toml if present)")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .global(true)
        .help("Verbosity level (-v for info, -vv for debug); RUST_LOG takes precedence")
}

/// Parser output for one document (positional).
pub fn document_arg() -> Arg {
    Arg::new("document")
        .value_name("DOCUMENT")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Parsed document in JSON, or - for stdin")
}

/// One variable records file (positional).
pub fn records_arg() -> Arg {
    Arg::new("records")
        .value_name("RECORDS")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Variable records in JSON, or - for stdin")
}

/// Several variable records files (positional).
pub fn records_list_arg() -> Arg {
    Arg::new("records")
        .value_name("RECORDS")
        .required(true)
        .num_args(1..)
        .value_parser(value_parser!(PathBuf))
        .help("Variable records files in JSON, one per document")
}

/// Graph snapshot (positional).
pub fn graph_arg() -> Arg {
    Arg::new("graph")
        .value_name("GRAPH")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Graph snapshot in JSON, or - for stdin")
}

/// Restrict to one sentence (--sentence).
pub fn sentence_arg() -> Arg {
    Arg::new("sentence")
        .long("sentence")
        .value_name("N")
        .value_parser(value_parser!(u32).range(1..))
        .help("Tree number (1-based); all sentences if omitted")
}

/// Leaf splitting (--leaf-mode).
pub fn leaf_mode_arg() -> Arg {
    Arg::new("leaf_mode")
        .long("leaf-mode")
        .value_name("MODE")
        .value_parser(["whitespace", "bracketed"])
        .help("How atoms between brackets become leaves")
}

/// Node numbering (--numbering).
pub fn numbering_arg() -> Arg {
    Arg::new("numbering")
        .long("numbering")
        .value_name("MODE")
        .value_parser(["phrases", "all"])
        .help("Number bracketed nodes only, or leaves too")
}

/// Directory of parsed documents (--documents).
pub fn documents_dir_arg() -> Arg {
    Arg::new("documents")
        .long("documents")
        .value_name("DIR")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Directory with one parsed document per source file")
}

/// Write output to file (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write output to file (default: stdout)")
}

/// Write outputs to a directory (-o/--output).
pub fn output_dir_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("DIR")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Output directory")
}

/// Fail on any document failure (--strict).
pub fn strict_arg() -> Arg {
    Arg::new("strict")
        .long("strict")
        .action(ArgAction::SetTrue)
        .help("Exit with an error if any document fails")
}

/// Output compact JSON (--compact).
pub fn compact_arg() -> Arg {
    Arg::new("compact")
        .long("compact")
        .action(ArgAction::SetTrue)
        .help("Output compact JSON")
}

/// Rewrites per batch (--batch-size).
pub fn batch_size_arg() -> Arg {
    Arg::new("batch_size")
        .long("batch-size")
        .value_name("N")
        .value_parser(value_parser!(usize))
        .help("Maximum rewrites per committed batch")
}

/// Batch limit (--fuel).
pub fn fuel_arg() -> Arg {
    Arg::new("fuel")
        .long("fuel")
        .value_name("N")
        .value_parser(value_parser!(u32))
        .help("Maximum number of batches before giving up")
}

/// Label of collapsed edges (--collapse-label).
pub fn collapse_label_arg() -> Arg {
    Arg::new("collapse_label")
        .long("collapse-label")
        .value_name("POLICY")
        .value_parser(["join", "drop"])
        .help("Transform name for edges replacing collapsed variables")
}
