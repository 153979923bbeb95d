use std::path::PathBuf;

use baleen_core::ParsedDocument;
use baleen_lib::Config;
use baleen_lib::pstree::{LeafMode, NodeNumbering, NodeOffsets, TreeOptions, map_offsets};
use serde::Serialize;

use super::files::{or_exit, read_json};
use super::tree::select_sentences;

pub struct OffsetsArgs {
    pub document: PathBuf,
    pub sentence: Option<u32>,
    pub leaf_mode: Option<LeafMode>,
    pub numbering: Option<NodeNumbering>,
    pub compact: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeOffsets {
    pub tree_number: u32,
    pub offsets: NodeOffsets,
}

pub fn run(args: OffsetsArgs, config: &Config) {
    let document: ParsedDocument = or_exit(read_json(&args.document));
    let options = TreeOptions {
        leaf_mode: args.leaf_mode.unwrap_or(config.offsets.leaf_mode),
        numbering: args.numbering.unwrap_or(config.offsets.numbering),
    };

    let trees = or_exit(collect_offsets(&document, args.sentence, &options));
    let output = if args.compact {
        serde_json::to_string(&trees)
    } else {
        serde_json::to_string_pretty(&trees)
    };
    println!("{}", or_exit(output));
}

/// Offsets of the selected trees. The first broken tree fails the command.
pub fn collect_offsets(
    document: &ParsedDocument,
    only: Option<u32>,
    options: &TreeOptions,
) -> Result<Vec<TreeOffsets>, String> {
    select_sentences(document, only)?
        .into_iter()
        .map(|(tree_number, sentence)| {
            map_offsets(&sentence.parse, &sentence.token_spans(), options)
                .map(|offsets| TreeOffsets { tree_number, offsets })
                .map_err(|e| format!("tree {}: {}", tree_number, e))
        })
        .collect()
}
