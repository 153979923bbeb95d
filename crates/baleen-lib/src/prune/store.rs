//! Graph store abstraction used by the pruner.
//!
//! Backends only answer small structural queries and apply single rewrites;
//! the pruning policy lives in [`super::ChainPruner`].

use std::fmt;

/// Variable node handle, stable for the lifetime of the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VarId(pub u32);

impl fmt::Display for VarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// A `TENTAILS_VAR` edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entailment {
    pub source: VarId,
    pub target: VarId,
    pub transform: Option<String>,
}

/// Directed graph of variables connected by tentailment edges.
///
/// A variable is *referenced* when at least one event instance points at it.
pub trait TentailmentGraph {
    type Error: std::error::Error + Send + Sync + 'static;

    fn variable_count(&self) -> Result<usize, Self::Error>;

    /// Snapshot of all variable ids, in a stable order.
    fn variables(&self) -> Result<Vec<VarId>, Self::Error>;

    fn outgoing(&self, var: VarId) -> Result<Vec<Entailment>, Self::Error>;

    fn incoming(&self, var: VarId) -> Result<Vec<Entailment>, Self::Error>;

    fn is_referenced(&self, var: VarId) -> Result<bool, Self::Error>;

    fn has_edge(&self, source: VarId, target: VarId) -> Result<bool, Self::Error>;

    /// Keeps one edge per ordered `(source, target)` pair; returns the number removed.
    fn remove_duplicate_edges(&mut self) -> Result<usize, Self::Error>;

    /// Deletes the variable together with all its edges.
    fn delete_variable(&mut self, var: VarId) -> Result<(), Self::Error>;

    /// Adds `source -> target`; returns false if that pair is already connected.
    fn add_edge(&mut self, source: VarId, target: VarId, transform: Option<String>) -> Result<bool, Self::Error>;

    /// Marks the end of a batch. Transactional backends commit here.
    fn commit(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn in_degree(&self, var: VarId) -> Result<usize, Self::Error> {
        Ok(self.incoming(var)?.len())
    }

    fn out_degree(&self, var: VarId) -> Result<usize, Self::Error> {
        Ok(self.outgoing(var)?.len())
    }
}
