//! Variable record stages around the core algorithms.
//!
//! - `enrich` - character offsets from parse trees, per document or batch
//! - `filter` - preprocessing filter
//! - `graph` - tentailment graph snapshot from records

mod enrich;
mod filter;
mod graph;

#[cfg(test)]
mod enrich_tests;

pub use enrich::{
    BatchReport, DocumentFailure, DocumentJob, EnrichError, EnrichedDocument, add_offsets, enrich_batch,
    group_by_filename,
};
pub use filter::{is_variable, retain_variables};
pub use graph::{GraphError, SnapshotBuilder};
