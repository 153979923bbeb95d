use std::path::PathBuf;

use baleen_core::GraphSnapshot;
use baleen_lib::Config;
use baleen_lib::prune::{ChainPruner, CollapseLabel, MemoryGraph, PruneOptions, PruneStats};

use super::files::{or_exit, read_json, write_json};

pub struct PruneArgs {
    pub graph: PathBuf,
    pub output: Option<PathBuf>,
    pub batch_size: Option<usize>,
    pub fuel: Option<u32>,
    pub collapse_label: Option<CollapseLabel>,
}

pub fn run(args: PruneArgs, config: &Config) {
    let snapshot: GraphSnapshot = or_exit(read_json(&args.graph));
    let mut graph = or_exit(MemoryGraph::from_snapshot(&snapshot));
    drop(snapshot);

    let options = resolve_options(&args, &config.prune);
    let stats = ChainPruner::new(options).run(&mut graph).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        if !e.is_retryable() {
            eprintln!("note: the graph is inconsistent; re-running will not help");
        }
        std::process::exit(1);
    });

    or_exit(write_json(&graph.to_snapshot(), args.output.as_deref()));
    eprint!("{}", render_stats(&stats));
}

/// Command-line flags over configuration.
pub fn resolve_options(args: &PruneArgs, config: &PruneOptions) -> PruneOptions {
    PruneOptions {
        batch_size: args.batch_size.unwrap_or(config.batch_size),
        fuel: args.fuel.unwrap_or(config.fuel),
        collapse_label: args.collapse_label.unwrap_or(config.collapse_label),
    }
}

pub fn render_stats(stats: &PruneStats) -> String {
    format!(
        "variables: {} -> {}\n\
         duplicate edges removed: {}\n\
         dead ends removed: {}\n\
         pass-throughs collapsed: {}\n\
         edges created: {}\n\
         rounds: {}, batches: {}\n",
        stats.variables_before,
        stats.variables_after,
        stats.duplicate_edges,
        stats.dead_ends,
        stats.pass_throughs,
        stats.edges_created,
        stats.rounds,
        stats.batches,
    )
}
