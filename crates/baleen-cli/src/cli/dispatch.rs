//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! - `*Params` structs are populated from clap; option flags stay `Option` so
//!   the configuration file can fill what the command line leaves out
//! - `Into<*Args>` impls bridge dispatch to the command handlers

use std::path::PathBuf;

use clap::ArgMatches;

use baleen_lib::prune::CollapseLabel;
use baleen_lib::pstree::{LeafMode, NodeNumbering};

use crate::commands::enrich::EnrichArgs;
use crate::commands::filter::FilterArgs;
use crate::commands::graph::GraphArgs;
use crate::commands::offsets::OffsetsArgs;
use crate::commands::prune::PruneArgs;
use crate::commands::tree::TreeArgs;

/// Flags accepted by every subcommand.
pub struct GlobalParams {
    pub config: Option<PathBuf>,
    pub verbose: u8,
}

impl GlobalParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            config: m.get_one::<PathBuf>("config").cloned(),
            verbose: m.get_count("verbose"),
        }
    }
}

pub struct TreeParams {
    pub document: PathBuf,
    pub sentence: Option<u32>,
    pub leaf_mode: Option<LeafMode>,
}

impl TreeParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            document: required_path(m, "document"),
            sentence: m.get_one::<u32>("sentence").copied(),
            leaf_mode: parse_leaf_mode(m),
        }
    }
}

impl From<TreeParams> for TreeArgs {
    fn from(p: TreeParams) -> Self {
        Self {
            document: p.document,
            sentence: p.sentence,
            leaf_mode: p.leaf_mode,
        }
    }
}

pub struct OffsetsParams {
    pub document: PathBuf,
    pub sentence: Option<u32>,
    pub leaf_mode: Option<LeafMode>,
    pub numbering: Option<NodeNumbering>,
    pub compact: bool,
}

impl OffsetsParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            document: required_path(m, "document"),
            sentence: m.get_one::<u32>("sentence").copied(),
            leaf_mode: parse_leaf_mode(m),
            numbering: parse_numbering(m),
            compact: m.get_flag("compact"),
        }
    }
}

impl From<OffsetsParams> for OffsetsArgs {
    fn from(p: OffsetsParams) -> Self {
        Self {
            document: p.document,
            sentence: p.sentence,
            leaf_mode: p.leaf_mode,
            numbering: p.numbering,
            compact: p.compact,
        }
    }
}

pub struct EnrichParams {
    pub records: Vec<PathBuf>,
    pub documents: PathBuf,
    pub output: PathBuf,
    pub strict: bool,
    pub leaf_mode: Option<LeafMode>,
    pub numbering: Option<NodeNumbering>,
}

impl EnrichParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            records: paths(m, "records"),
            documents: required_path(m, "documents"),
            output: required_path(m, "output"),
            strict: m.get_flag("strict"),
            leaf_mode: parse_leaf_mode(m),
            numbering: parse_numbering(m),
        }
    }
}

impl From<EnrichParams> for EnrichArgs {
    fn from(p: EnrichParams) -> Self {
        Self {
            records: p.records,
            documents: p.documents,
            output: p.output,
            strict: p.strict,
            leaf_mode: p.leaf_mode,
            numbering: p.numbering,
        }
    }
}

pub struct FilterParams {
    pub records: PathBuf,
    pub output: Option<PathBuf>,
}

impl FilterParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            records: required_path(m, "records"),
            output: m.get_one::<PathBuf>("output").cloned(),
        }
    }
}

impl From<FilterParams> for FilterArgs {
    fn from(p: FilterParams) -> Self {
        Self {
            records: p.records,
            output: p.output,
        }
    }
}

pub struct GraphParams {
    pub records: Vec<PathBuf>,
    pub output: Option<PathBuf>,
}

impl GraphParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            records: paths(m, "records"),
            output: m.get_one::<PathBuf>("output").cloned(),
        }
    }
}

impl From<GraphParams> for GraphArgs {
    fn from(p: GraphParams) -> Self {
        Self {
            records: p.records,
            output: p.output,
        }
    }
}

pub struct PruneParams {
    pub graph: PathBuf,
    pub output: Option<PathBuf>,
    pub batch_size: Option<usize>,
    pub fuel: Option<u32>,
    pub collapse_label: Option<CollapseLabel>,
}

impl PruneParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            graph: required_path(m, "graph"),
            output: m.get_one::<PathBuf>("output").cloned(),
            batch_size: m.get_one::<usize>("batch_size").copied(),
            fuel: m.get_one::<u32>("fuel").copied(),
            collapse_label: parse_collapse_label(m),
        }
    }
}

impl From<PruneParams> for PruneArgs {
    fn from(p: PruneParams) -> Self {
        Self {
            graph: p.graph,
            output: p.output,
            batch_size: p.batch_size,
            fuel: p.fuel,
            collapse_label: p.collapse_label,
        }
    }
}

/// Required positionals are enforced by clap; an empty path only shows up
/// when a builder is used without its arg.
fn required_path(m: &ArgMatches, id: &str) -> PathBuf {
    m.get_one::<PathBuf>(id).cloned().unwrap_or_default()
}

fn paths(m: &ArgMatches, id: &str) -> Vec<PathBuf> {
    m.get_many::<PathBuf>(id)
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}

fn parse_leaf_mode(m: &ArgMatches) -> Option<LeafMode> {
    match m.get_one::<String>("leaf_mode").map(|s| s.as_str()) {
        Some("whitespace") => Some(LeafMode::Whitespace),
        Some("bracketed") => Some(LeafMode::Bracketed),
        _ => None,
    }
}

fn parse_numbering(m: &ArgMatches) -> Option<NodeNumbering> {
    match m.get_one::<String>("numbering").map(|s| s.as_str()) {
        Some("phrases") => Some(NodeNumbering::Phrases),
        Some("all") => Some(NodeNumbering::All),
        _ => None,
    }
}

fn parse_collapse_label(m: &ArgMatches) -> Option<CollapseLabel> {
    match m.get_one::<String>("collapse_label").map(|s| s.as_str()) {
        Some("join") => Some(CollapseLabel::Join),
        Some("drop") => Some(CollapseLabel::Drop),
        _ => None,
    }
}
