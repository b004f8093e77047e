// Copyright 2026-present The veritas authors
// SPDX-License-Identifier: Apache-2.0

//! Outcome and failure-payload types produced by the predicate scans.
//!
//! Nothing here panics or renders text on its own (apart from `Display`):
//! these are the data the scans hand back, and the data a front end turns
//! into a diagnostic. Every type borrows from the scanned sequence, so none
//! of them outlive the call that produced them.
//!
//! # Invariants
//!
//! - **`OrderingResult::Violation`**: `position` indexes `left` in the
//!   scanned sequence, `right` sits at `position + 1`, and no earlier
//!   adjacent pair breaks the relation.
//! - **`SequenceSearch::Found`**: `haystack[start..start + needle.len()]`
//!   equals the needle element-wise.

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// Ordering relation a scan enforces over adjacent pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Relation {
    /// Every adjacent pair strictly increasing.
    #[serde(rename = "is strictly ordered")]
    Strict,
    /// Non-decreasing: adjacent equal elements permitted.
    #[serde(rename = "is partially ordered")]
    NonDecreasing,
}

impl Relation {
    /// Human-readable label used in failure messages.
    pub fn label(self) -> &'static str {
        match self {
            Relation::Strict => "is strictly ordered",
            Relation::NonDecreasing => "is partially ordered",
        }
    }

    /// Whether a pairwise comparison result breaks the relation.
    pub(crate) fn violated_by(self, ord: Ordering) -> bool {
        match self {
            Relation::Strict => ord != Ordering::Less,
            Relation::NonDecreasing => ord == Ordering::Greater,
        }
    }
}

/// Result of an ordering scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OrderingResult<'a, T> {
    /// Every adjacent pair satisfied the relation.
    Ordered,
    /// The first adjacent pair that broke it.
    Violation {
        /// Index of `left` in the scanned sequence.
        position: usize,
        left: &'a T,
        right: &'a T,
    },
}

impl<T> OrderingResult<'_, T> {
    pub fn is_ordered(&self) -> bool {
        matches!(self, OrderingResult::Ordered)
    }
}

/// Result of a contiguous-subsequence search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SequenceSearch {
    /// The needle starts at `start` in the haystack.
    Found { start: usize },
    NotFound,
}

impl SequenceSearch {
    pub fn is_found(&self) -> bool {
        matches!(self, SequenceSearch::Found { .. })
    }
}

/// Structured failure payload handed to a rendering front end.
///
/// Serializes with the relation label spelled out, so a harness consuming
/// failures as data sees the same vocabulary a human sees in the message:
///
/// ```
/// use veritas::{Failure, Relation};
///
/// let failure = Failure::Ordering {
///     relation: Relation::Strict,
///     position: 1,
///     left: &2,
///     right: &2,
/// };
/// let value = serde_json::to_value(&failure).unwrap();
/// assert_eq!(value["relation"], "is strictly ordered");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Failure<'a, T> {
    /// An adjacent pair broke the required ordering relation.
    Ordering {
        relation: Relation,
        position: usize,
        left: &'a T,
        right: &'a T,
    },
    /// The needle appears nowhere in the haystack as a contiguous run.
    Containment { needle: &'a [T] },
}

impl<T: fmt::Debug> fmt::Display for Failure<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Failure::Ordering {
                relation,
                left,
                right,
                ..
            } => write!(f, "{} <{:?}> <{:?}>", relation.label(), left, right),
            Failure::Containment { needle } => write!(f, "contains sequence <{:?}>", needle),
        }
    }
}
