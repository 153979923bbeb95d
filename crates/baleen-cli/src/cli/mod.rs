mod args;
mod commands;
mod dispatch;

#[cfg(test)]
mod dispatch_tests;

pub use commands::build_cli;
pub use dispatch::{
    EnrichParams, FilterParams, GlobalParams, GraphParams, OffsetsParams, PruneParams, TreeParams,
};
