mod cli;
mod commands;
mod logging;

use std::path::Path;

use baleen_lib::Config;

use cli::{
    EnrichParams, FilterParams, GlobalParams, GraphParams, OffsetsParams, PruneParams, TreeParams,
    build_cli,
};
use commands::files::or_exit;

fn main() {
    let matches = build_cli().get_matches();

    let global = GlobalParams::from_matches(&matches);
    let config = or_exit(Config::discover(global.config.as_deref(), Path::new(".")));
    logging::init(global.verbose, config.log.filter.as_deref());

    match matches.subcommand() {
        Some(("tree", m)) => {
            let params = TreeParams::from_matches(m);
            commands::tree::run(params.into(), &config);
        }
        Some(("offsets", m)) => {
            let params = OffsetsParams::from_matches(m);
            commands::offsets::run(params.into(), &config);
        }
        Some(("enrich", m)) => {
            let params = EnrichParams::from_matches(m);
            commands::enrich::run(params.into(), &config);
        }
        Some(("filter", m)) => {
            let params = FilterParams::from_matches(m);
            commands::filter::run(params.into());
        }
        Some(("graph", m)) => {
            let params = GraphParams::from_matches(m);
            commands::graph::run(params.into());
        }
        Some(("prune", m)) => {
            let params = PruneParams::from_matches(m);
            commands::prune::run(params.into(), &config);
        }
        _ => unreachable!("clap should have caught this"),
    }
}
