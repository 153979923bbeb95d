//! Tentailment graph construction from variable records.

use std::collections::HashMap;

use indexmap::IndexMap;
use tracing::debug;

use baleen_core::{GraphSnapshot, Tentails, VariableRecord, VariableType};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// `ancestor` does not name an earlier record of the same document.
    #[error("record {key}: unknown ancestor {ancestor}")]
    UnknownAncestor { key: String, ancestor: String },

    #[error("record {key}: transform {transform} without an ancestor")]
    MissingAncestor { key: String, transform: String },
}

/// Collects variables and `TENTAILS_VAR` edges document by document.
///
/// Variables are unique by surface string across all documents. A tentailed
/// record adds an edge from its ancestor's surface string to its own; any
/// other record is an observed event on its variable.
#[derive(Debug, Clone, Default)]
pub struct SnapshotBuilder {
    variables: IndexMap<String, u32>,
    tentails: Vec<Tentails>,
    documents: usize,
}

impl SnapshotBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one document's records. Nothing is added if any record fails.
    pub fn add_document(&mut self, records: &[VariableRecord]) -> Result<(), GraphError> {
        let mut key_to_var: HashMap<&str, &str> = HashMap::with_capacity(records.len());
        let mut edges = Vec::new();

        for record in records {
            // Ancestors resolve against records seen so far, so a record may
            // not point forward.
            key_to_var.insert(&record.key, &record.sub_str);
            if !record.is_tentailed() {
                continue;
            }
            let transform = record.transform_name.as_deref().unwrap_or_default();
            let ancestor = record
                .ancestor
                .as_deref()
                .ok_or_else(|| GraphError::MissingAncestor {
                    key: record.key.clone(),
                    transform: transform.to_owned(),
                })?;
            let source = key_to_var
                .get(ancestor)
                .ok_or_else(|| GraphError::UnknownAncestor {
                    key: record.key.clone(),
                    ancestor: ancestor.to_owned(),
                })?;
            edges.push(Tentails::new(*source, record.sub_str.as_str(), Some(transform)));
        }

        for record in records {
            let events = self.variables.entry(record.sub_str.clone()).or_default();
            if !record.is_tentailed() {
                *events += 1;
            }
        }
        debug!(records = records.len(), edges = edges.len(), "added document to graph");
        self.tentails.extend(edges);
        self.documents += 1;
        Ok(())
    }

    pub fn documents(&self) -> usize {
        self.documents
    }

    pub fn finish(self) -> GraphSnapshot {
        GraphSnapshot {
            variables: self
                .variables
                .into_iter()
                .map(|(sub_str, events)| VariableType::new(sub_str, events))
                .collect(),
            tentails: self.tentails,
        }
    }
}
