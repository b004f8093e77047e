//! Fluent sequence assertions with structured failure payloads.
//!
//! The crate checks whether a sequence is strictly or partially ordered,
//! optionally under a caller-supplied comparator, and whether one sequence
//! contains another as a contiguous run. Failures carry the exact offending
//! values, as data first and as a rendered panic message second.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │ compare.rs  │────▶│ predicate.rs │────▶│ subject.rs  │
//! │ (Comparator,│     │ (the scans)  │     │ (assert_that│
//! │  Upcast)    │     │              │     │  front end) │
//! └─────────────┘     └──────────────┘     └─────────────┘
//!                            │
//!                            ▼
//!                     ┌──────────────┐
//!                     │   types.rs   │
//!                     │ (OrderingResult, SequenceSearch,
//!                     │  Failure, TypeMismatch payloads)
//!                     └──────────────┘
//! ```
//!
//! | Module      | Responsibility                                         |
//! |-------------|--------------------------------------------------------|
//! | `types`     | Outcomes and the serializable failure payload          |
//! | `compare`   | Comparator seam and supertype widening                 |
//! | `predicate` | Pairwise ordering scans, naive subsequence search      |
//! | `subject`   | Fluent `assert_that` chain that panics on failure      |
//!
//! # Usage
//!
//! ```
//! use veritas::{assert_that, contains_sequence, is_ordered, SequenceSearch};
//!
//! // Fluent front end: panics with a rendered message on failure.
//! assert_that(&[1, 2, 3]).is_ordered().contains_sequence(&[2, 3]);
//!
//! // Engine level: structured outcomes instead of panics.
//! assert!(is_ordered(&[1, 2, 3]).unwrap().is_ordered());
//! assert_eq!(
//!     contains_sequence(&[1, 1, 2, 1, 1, 2, 3, 4], &[1, 2, 3]),
//!     SequenceSearch::Found { start: 4 },
//! );
//! ```
//!
//! # Failure taxonomy
//!
//! An unmet expectation (sequence not ordered, needle not found) is an
//! **assertion failure**, surfaced as [`OrderingResult::Violation`],
//! [`SequenceSearch::NotFound`], or a [`Failure`] payload. A sequence whose
//! adjacent elements have no defined natural ordering is a **usage error**,
//! surfaced as [`TypeMismatch`], a distinct kind that is never read as
//! "not ordered". Mismatch detection is lazy: it happens during the
//! pairwise scan, only when the offending pair is reached.

mod compare;
mod predicate;
mod subject;
mod types;

pub use compare::{Comparator, TypeMismatch, Upcast};
pub use predicate::{
    contains_sequence, is_ordered, is_ordered_by, is_partially_ordered, is_partially_ordered_by,
};
pub use subject::{assert_that, SequenceSubject};
pub use types::{Failure, OrderingResult, Relation, SequenceSearch};
