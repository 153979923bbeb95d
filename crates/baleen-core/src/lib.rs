#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for the baleen pipeline.
//!
//! Three groups:
//! - **Spans**: absolute character offsets into the source text
//! - **Extraction layer**: variable records and parsed documents, 1:1 with the
//!   JSON files exchanged between pipeline stages
//! - **Graph layer**: interchange form of the variable tentailment graph
//!
//! Nothing here performs I/O beyond (de)serialization.

use std::fmt;

mod document;
mod record;
mod snapshot;


pub use document::{ParsedDocument, ParsedSentence, TokenOffsets};
pub use record::{PREPROC_PREFIX, VariableRecord};
pub use snapshot::{GraphSnapshot, Tentails, VariableType};

// ============================================================================
// Spans
// ============================================================================

/// Half-open character range `[start, end)` in the original source text.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Span from the start of `first` to the end of `last`.
    #[inline]
    pub const fn cover(first: Span, last: Span) -> Self {
        Self {
            start: first.start,
            end: last.end,
        }
    }

    #[inline]
    pub const fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// True if `other` lies entirely within `self`.
    #[inline]
    pub const fn contains(&self, other: Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl From<(u32, u32)> for Span {
    fn from((start, end): (u32, u32)) -> Self {
        Self::new(start, end)
    }
}
