//! Tentailment graph pruning.
//!
//! - `store` - the backend trait the pruner talks to
//! - `memory` - in-memory backend, loaded from a [`baleen_core::GraphSnapshot`]
//! - `pruner` - deduplication, dead-end removal and pass-through collapsing

mod memory;
mod pruner;
mod store;


pub use memory::{MemoryGraph, MemoryGraphError};
pub use pruner::{ChainPruner, CollapseLabel, LABEL_SEPARATOR, PruneOptions, PruneStats, prune_tentails};
pub use store::{Entailment, TentailmentGraph, VarId};

#[derive(Debug, thiserror::Error)]
pub enum Error<E: std::error::Error + 'static> {
    /// The fixed point was not reached within `fuel` batches. Points at a
    /// broken graph, not at a transient condition.
    #[error("pruning did not settle within {fuel} batches")]
    GraphInvariant { fuel: u32 },

    #[error("graph store failed: {0}")]
    Store(#[source] E),
}

impl<E: std::error::Error + 'static> Error<E> {
    /// Store failures can be retried by re-running the whole prune, which is
    /// idempotent.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Store(_))
    }
}
