//! In-memory tentailment graph.
//!
//! Adjacency lists are kept on both ends of every edge. `IndexMap` keeps
//! variable iteration independent of hashing, so pruning is deterministic.

use std::collections::HashSet;

use indexmap::IndexMap;

use baleen_core::{GraphSnapshot, Tentails, VariableType};

use super::store::{Entailment, TentailmentGraph, VarId};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MemoryGraphError {
    #[error("unknown variable {0}")]
    UnknownVariable(VarId),
    #[error("edge refers to unknown variable {0:?}")]
    UnknownSubStr(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Link {
    var: VarId,
    transform: Option<String>,
}

#[derive(Debug, Clone)]
struct VarEntry {
    sub_str: String,
    events: u32,
    out: Vec<Link>,
    inc: Vec<Link>,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryGraph {
    next_id: u32,
    vars: IndexMap<VarId, VarEntry>,
    by_name: IndexMap<String, VarId>,
}

impl MemoryGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: &GraphSnapshot) -> Result<Self, MemoryGraphError> {
        let mut graph = Self::new();
        for var in &snapshot.variables {
            graph.insert_variable(&var.sub_str, var.events);
        }
        for edge in &snapshot.tentails {
            let source = graph
                .find(&edge.source)
                .ok_or_else(|| MemoryGraphError::UnknownSubStr(edge.source.clone()))?;
            let target = graph
                .find(&edge.target)
                .ok_or_else(|| MemoryGraphError::UnknownSubStr(edge.target.clone()))?;
            graph.insert_tentails(source, target, edge.transform_name.clone())?;
        }
        Ok(graph)
    }

    pub fn to_snapshot(&self) -> GraphSnapshot {
        let variables = self
            .vars
            .values()
            .map(|v| VariableType::new(v.sub_str.clone(), v.events))
            .collect();
        let tentails = self
            .vars
            .values()
            .flat_map(|v| {
                v.out.iter().map(move |link| Tentails {
                    source: v.sub_str.clone(),
                    target: self.vars[&link.var].sub_str.clone(),
                    transform_name: link.transform.clone(),
                })
            })
            .collect();
        GraphSnapshot {
            variables,
            tentails,
        }
    }

    /// Adds a variable, or adds `events` to the existing one with the same surface string.
    pub fn insert_variable(&mut self, sub_str: &str, events: u32) -> VarId {
        if let Some(&id) = self.by_name.get(sub_str) {
            self.vars[&id].events += events;
            return id;
        }
        let id = VarId(self.next_id);
        self.next_id += 1;
        self.vars.insert(
            id,
            VarEntry {
                sub_str: sub_str.to_owned(),
                events,
                out: Vec::new(),
                inc: Vec::new(),
            },
        );
        self.by_name.insert(sub_str.to_owned(), id);
        id
    }

    /// Adds an edge even if the pair is already connected, as upstream import does.
    pub fn insert_tentails(
        &mut self,
        source: VarId,
        target: VarId,
        transform: Option<String>,
    ) -> Result<(), MemoryGraphError> {
        self.entry(target)?;
        self.entry_mut(source)?.out.push(Link {
            var: target,
            transform: transform.clone(),
        });
        self.entry_mut(target)?.inc.push(Link {
            var: source,
            transform,
        });
        Ok(())
    }

    pub fn find(&self, sub_str: &str) -> Option<VarId> {
        self.by_name.get(sub_str).copied()
    }

    pub fn sub_str(&self, var: VarId) -> Option<&str> {
        self.vars.get(&var).map(|v| v.sub_str.as_str())
    }

    pub fn events(&self, var: VarId) -> Option<u32> {
        self.vars.get(&var).map(|v| v.events)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.vars.values().map(|v| v.out.len()).sum()
    }

    fn entry(&self, var: VarId) -> Result<&VarEntry, MemoryGraphError> {
        self.vars
            .get(&var)
            .ok_or(MemoryGraphError::UnknownVariable(var))
    }

    fn entry_mut(&mut self, var: VarId) -> Result<&mut VarEntry, MemoryGraphError> {
        self.vars
            .get_mut(&var)
            .ok_or(MemoryGraphError::UnknownVariable(var))
    }

    fn edges(var: VarId, links: &[Link], outgoing: bool) -> Vec<Entailment> {
        links
            .iter()
            .map(|link| {
                let (source, target) = if outgoing {
                    (var, link.var)
                } else {
                    (link.var, var)
                };
                Entailment {
                    source,
                    target,
                    transform: link.transform.clone(),
                }
            })
            .collect()
    }
}

/// Keeps the first link per neighbor.
fn dedup_links(links: &mut Vec<Link>) -> usize {
    let before = links.len();
    let mut seen = HashSet::with_capacity(before);
    links.retain(|link| seen.insert(link.var));
    before - links.len()
}

impl TentailmentGraph for MemoryGraph {
    type Error = MemoryGraphError;

    fn variable_count(&self) -> Result<usize, Self::Error> {
        Ok(self.vars.len())
    }

    fn variables(&self) -> Result<Vec<VarId>, Self::Error> {
        Ok(self.vars.keys().copied().collect())
    }

    fn outgoing(&self, var: VarId) -> Result<Vec<Entailment>, Self::Error> {
        Ok(Self::edges(var, &self.entry(var)?.out, true))
    }

    fn incoming(&self, var: VarId) -> Result<Vec<Entailment>, Self::Error> {
        Ok(Self::edges(var, &self.entry(var)?.inc, false))
    }

    fn is_referenced(&self, var: VarId) -> Result<bool, Self::Error> {
        Ok(self.entry(var)?.events > 0)
    }

    fn has_edge(&self, source: VarId, target: VarId) -> Result<bool, Self::Error> {
        Ok(self.entry(source)?.out.iter().any(|link| link.var == target))
    }

    fn remove_duplicate_edges(&mut self) -> Result<usize, Self::Error> {
        let mut removed = 0;
        for entry in self.vars.values_mut() {
            removed += dedup_links(&mut entry.out);
            dedup_links(&mut entry.inc);
        }
        Ok(removed)
    }

    fn delete_variable(&mut self, var: VarId) -> Result<(), Self::Error> {
        let entry = self
            .vars
            .swap_remove(&var)
            .ok_or(MemoryGraphError::UnknownVariable(var))?;
        self.by_name.swap_remove(&entry.sub_str);
        for link in &entry.out {
            if let Some(target) = self.vars.get_mut(&link.var) {
                target.inc.retain(|l| l.var != var);
            }
        }
        for link in &entry.inc {
            if let Some(source) = self.vars.get_mut(&link.var) {
                source.out.retain(|l| l.var != var);
            }
        }
        Ok(())
    }

    fn add_edge(&mut self, source: VarId, target: VarId, transform: Option<String>) -> Result<bool, Self::Error> {
        if self.has_edge(source, target)? {
            return Ok(false);
        }
        self.insert_tentails(source, target, transform)?;
        Ok(true)
    }
}
