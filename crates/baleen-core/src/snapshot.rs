//! Interchange form of the variable graph.
//!
//! Mirrors what the graph store holds: `VariableType` nodes unique by surface
//! string, `TENTAILS_VAR` edges between them, and the number of event
//! instances pointing at each variable through `HAS_VAR`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub variables: Vec<VariableType>,
    #[serde(default)]
    pub tentails: Vec<Tentails>,
}

impl GraphSnapshot {
    pub fn variable(&self, sub_str: &str) -> Option<&VariableType> {
        self.variables.iter().find(|v| v.sub_str == sub_str)
    }

    pub fn has_tentails(&self, source: &str, target: &str) -> bool {
        self.tentails
            .iter()
            .any(|t| t.source == source && t.target == target)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableType {
    pub sub_str: String,
    /// Number of event instances referencing this variable.
    #[serde(default)]
    pub events: u32,
}

impl VariableType {
    pub fn new(sub_str: impl Into<String>, events: u32) -> Self {
        Self {
            sub_str: sub_str.into(),
            events,
        }
    }

    #[inline]
    pub fn is_referenced(&self) -> bool {
        self.events > 0
    }
}

/// `source` tentails `target`: `target` is derived from `source`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tentails {
    pub source: String,
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transform_name: Option<String>,
}

impl Tentails {
    pub fn new(source: impl Into<String>, target: impl Into<String>, transform_name: Option<&str>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            transform_name: transform_name.map(str::to_owned),
        }
    }
}
