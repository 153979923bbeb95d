//! Character offsets for extracted variables.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;

use baleen_core::{ParsedDocument, VariableRecord};
use indexmap::IndexMap;
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::pstree::{self, NodeOffsets, TreeOptions, map_offsets};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnrichError {
    #[error("record {key}: tree {tree_number} is not in the document ({sentences} sentences)")]
    TreeOutOfRange {
        key: String,
        tree_number: u32,
        sentences: usize,
    },

    #[error("record {key}: node {node_number} is not in tree {tree_number} ({nodes} nodes)")]
    NodeOutOfRange {
        key: String,
        tree_number: u32,
        node_number: u32,
        nodes: usize,
    },

    #[error("record {key}: comes from {filename}, not {expected}")]
    ForeignRecord {
        key: String,
        filename: String,
        expected: String,
    },

    #[error("tree {tree_number}: {source}")]
    Tree {
        tree_number: u32,
        #[source]
        source: pstree::Error,
    },
}

/// Sets `charOffsetBegin`/`charOffsetEnd` on every record of one document.
///
/// All records must share the first record's `filename`; use
/// [`group_by_filename`] to split mixed input. Each tree is mapped once,
/// however many records point into it. On error no record is modified.
/// Returns the number of records updated.
pub fn add_offsets(
    records: &mut [VariableRecord],
    document: &ParsedDocument,
    options: &TreeOptions,
) -> Result<usize, EnrichError> {
    let mut trees: HashMap<u32, NodeOffsets> = HashMap::new();
    let mut spans = Vec::with_capacity(records.len());

    let expected = records.first().map(|r| r.filename.as_str()).unwrap_or_default();

    for record in records.iter() {
        if record.filename != expected {
            return Err(EnrichError::ForeignRecord {
                key: record.key.clone(),
                filename: record.filename.clone(),
                expected: expected.to_owned(),
            });
        }
        let tree_number = record.tree_number;
        let offsets = match trees.entry(tree_number) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let sentence = document
                    .sentence(tree_number)
                    .ok_or_else(|| EnrichError::TreeOutOfRange {
                        key: record.key.clone(),
                        tree_number,
                        sentences: document.sentences.len(),
                    })?;
                let offsets = map_offsets(&sentence.parse, &sentence.token_spans(), options)
                    .map_err(|source| EnrichError::Tree { tree_number, source })?;
                entry.insert(offsets)
            }
        };

        let span = offsets
            .get(record.node_number)
            .ok_or_else(|| EnrichError::NodeOutOfRange {
                key: record.key.clone(),
                tree_number,
                node_number: record.node_number,
                nodes: offsets.len(),
            })?;
        spans.push(span);
    }

    for (record, span) in records.iter_mut().zip(spans) {
        record.set_span(span);
    }
    debug!(records = records.len(), trees = trees.len(), "added offsets");
    Ok(records.len())
}

/// Splits records by source `filename`, groups in order of first appearance.
///
/// Record order within a group is kept.
pub fn group_by_filename(records: Vec<VariableRecord>) -> Vec<(String, Vec<VariableRecord>)> {
    let mut groups: IndexMap<String, Vec<VariableRecord>> = IndexMap::new();
    for record in records {
        groups.entry(record.filename.clone()).or_default().push(record);
    }
    groups.into_iter().collect()
}

/// One document's records together with its parser output.
#[derive(Debug, Clone)]
pub struct DocumentJob {
    pub name: String,
    pub records: Vec<VariableRecord>,
    pub document: ParsedDocument,
}

#[derive(Debug, Clone)]
pub struct EnrichedDocument {
    pub name: String,
    pub records: Vec<VariableRecord>,
}

#[derive(Debug, Clone)]
pub struct DocumentFailure {
    pub name: String,
    pub error: EnrichError,
}

/// Outcome of [`enrich_batch`], in input order.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub succeeded: Vec<EnrichedDocument>,
    pub failed: Vec<DocumentFailure>,
}

impl BatchReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} succeeded, {} failed", self.succeeded.len(), self.failed.len())
    }
}

/// Runs [`add_offsets`] for every job on the rayon pool.
///
/// A failing document is logged and reported; it never stops the batch.
pub fn enrich_batch(jobs: Vec<DocumentJob>, options: &TreeOptions) -> BatchReport {
    let outcomes: Vec<Result<EnrichedDocument, DocumentFailure>> = jobs
        .into_par_iter()
        .map(|job| {
            let DocumentJob {
                name,
                mut records,
                document,
            } = job;
            match add_offsets(&mut records, &document, options) {
                Ok(_) => Ok(EnrichedDocument { name, records }),
                Err(error) => {
                    warn!(document = %name, %error, "skipping document");
                    Err(DocumentFailure { name, error })
                }
            }
        })
        .collect();

    let mut report = BatchReport::default();
    for outcome in outcomes {
        match outcome {
            Ok(doc) => report.succeeded.push(doc),
            Err(failure) => report.failed.push(failure),
        }
    }
    info!(succeeded = report.succeeded.len(), failed = report.failed.len(), "enriched documents");
    report
}
