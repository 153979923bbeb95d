//! Baleen: offset mapping for phrase-structure trees and tentailment graph pruning.
//!
//! # Example
//!
//! ```
//! use baleen_core::Span;
//! use baleen_lib::pstree::{TreeOptions, map_offsets};
//!
//! let parse = "(S (NP (DT the) (NN cat)) (VP (VBD sat)))";
//! let tokens = [Span::new(0, 3), Span::new(4, 7), Span::new(8, 11)];
//!
//! let offsets = map_offsets(parse, &tokens, &TreeOptions::default()).unwrap();
//! assert_eq!(offsets.get(1), Some(Span::new(0, 7)));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod prune;
pub mod pstree;
pub mod records;


pub use config::{Config, ConfigError};
pub use prune::{ChainPruner, MemoryGraph, PruneOptions, PruneStats, TentailmentGraph};
pub use pstree::{NodeOffsets, ParseTree, TreeOptions, map_offsets};
