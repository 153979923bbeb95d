pub mod enrich;
pub mod files;
pub mod filter;
pub mod graph;
pub mod offsets;
pub mod prune;
pub mod tree;

#[cfg(test)]
mod tree_tests;
