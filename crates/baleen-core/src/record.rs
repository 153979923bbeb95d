//! Variable records as written by the extraction and transformation tools.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

use crate::Span;

/// Transform names with this prefix come from preprocessing, not tentailment.
pub const PREPROC_PREFIX: &str = "PreProc";

/// One extracted (or derived) variable.
///
/// Fields the pipeline does not interpret are kept in `extra`, in their
/// original order, so records survive a read-modify-write cycle intact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableRecord {
    pub key: String,
    pub filename: String,
    #[serde(deserialize_with = "number_or_string")]
    pub tree_number: u32,
    #[serde(deserialize_with = "number_or_string")]
    pub node_number: u32,
    pub sub_str: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ancestor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transform_name: Option<String>,
    /// Event direction: `change`, `increase` or `decrease`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extract_name: Option<String>,
    /// Present whenever the key is, even as `null`.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub descendants: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub char_offset_begin: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub char_offset_end: Option<u32>,
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_json::Value>,
}

impl VariableRecord {
    /// Minimal observed record, mainly for fixtures.
    pub fn observed(key: &str, filename: &str, tree_number: u32, node_number: u32, sub_str: &str) -> Self {
        Self {
            key: key.to_owned(),
            filename: filename.to_owned(),
            tree_number,
            node_number,
            sub_str: sub_str.to_owned(),
            ancestor: None,
            transform_name: None,
            label: None,
            extract_name: None,
            descendants: None,
            char_offset_begin: None,
            char_offset_end: None,
            extra: IndexMap::new(),
        }
    }

    /// Record derived from `ancestor` by `transform`.
    pub fn derived(mut self, ancestor: &str, transform: &str) -> Self {
        self.ancestor = Some(ancestor.to_owned());
        self.transform_name = Some(transform.to_owned());
        self
    }

    /// True if this record was produced from its ancestor by a text
    /// transformation other than preprocessing.
    pub fn is_tentailed(&self) -> bool {
        self.transform_name
            .as_deref()
            .is_some_and(|name| !name.starts_with(PREPROC_PREFIX))
    }

    pub fn span(&self) -> Option<Span> {
        Some(Span::new(self.char_offset_begin?, self.char_offset_end?))
    }

    pub fn set_span(&mut self, span: Span) {
        self.char_offset_begin = Some(span.start);
        self.char_offset_end = Some(span.end);
    }
}

/// Tree and node numbers appear both as JSON numbers and numeric strings.
fn number_or_string<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u32),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<serde_json::Value>, D::Error> {
    serde_json::Value::deserialize(deserializer).map(Some)
}
