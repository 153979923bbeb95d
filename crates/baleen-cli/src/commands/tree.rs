use std::path::PathBuf;

use baleen_core::{ParsedDocument, ParsedSentence};
use baleen_lib::Config;
use baleen_lib::pstree::{self, LeafMode, ParseTree};

use super::files::{or_exit, read_json};

pub struct TreeArgs {
    pub document: PathBuf,
    pub sentence: Option<u32>,
    pub leaf_mode: Option<LeafMode>,
}

pub fn run(args: TreeArgs, config: &Config) {
    let document: ParsedDocument = or_exit(read_json(&args.document));
    let leaf_mode = args.leaf_mode.unwrap_or(config.offsets.leaf_mode);
    let sentences = or_exit(select_sentences(&document, args.sentence));

    let mut failed = false;
    for (tree_number, sentence) in sentences {
        match render_tree(sentence, leaf_mode) {
            Ok(dump) => print!("# tree {}\n{}", tree_number, dump),
            Err(e) => {
                eprintln!("error: tree {}: {}", tree_number, e);
                failed = true;
            }
        }
    }
    if failed {
        std::process::exit(1);
    }
}

pub fn render_tree(sentence: &ParsedSentence, leaf_mode: LeafMode) -> Result<String, pstree::Error> {
    let tree = ParseTree::build(&sentence.parse, &sentence.token_spans(), leaf_mode)?;
    Ok(tree.dump())
}

/// Sentences paired with their 1-based tree numbers; all of them if `only` is `None`.
pub fn select_sentences(
    document: &ParsedDocument,
    only: Option<u32>,
) -> Result<Vec<(u32, &ParsedSentence)>, String> {
    match only {
        Some(n) => document
            .sentence(n)
            .map(|s| vec![(n, s)])
            .ok_or_else(|| format!("tree {} not in document ({} sentences)", n, document.sentences.len())),
        None => Ok((1..).zip(&document.sentences).collect()),
    }
}
