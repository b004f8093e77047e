// Copyright 2026-present The veritas authors
// SPDX-License-Identifier: Apache-2.0

//! The predicate engine: pairwise ordering scans and the naive
//! contiguous-subsequence search.
//!
//! Every function here is a pure, single-pass evaluator over a borrowed
//! slice. Results borrow from the input; nothing is retained across calls.
//!
//! # Laziness of mismatch detection
//!
//! The natural-ordering scans walk adjacent pairs left to right and report
//! whatever they hit first, whether that is an ordering violation or a pair
//! with no defined ordering. There is no upfront homogeneity check, so a
//! mismatched element that never reaches an adjacent comparison goes
//! undetected. Tests assert on this behavior; do not "fix" it by
//! pre-scanning the element types.

use crate::compare::{Comparator, TypeMismatch, Upcast};
use crate::types::{OrderingResult, Relation, SequenceSearch};
use std::fmt::Debug;

/// Check that `seq` is strictly increasing under the natural order of `T`.
///
/// Empty and singleton sequences are vacuously ordered. An adjacent pair
/// with no defined ordering (`partial_cmp` returned `None`) is caller
/// misuse and comes back as `Err`, distinct from an ordering violation.
pub fn is_ordered<T>(seq: &[T]) -> Result<OrderingResult<'_, T>, TypeMismatch>
where
    T: PartialOrd + Debug,
{
    scan_natural(seq, Relation::Strict)
}

/// Check that `seq` is non-decreasing under the natural order of `T`.
///
/// Same contract as [`is_ordered`], but adjacent equal elements pass.
pub fn is_partially_ordered<T>(seq: &[T]) -> Result<OrderingResult<'_, T>, TypeMismatch>
where
    T: PartialOrd + Debug,
{
    scan_natural(seq, Relation::NonDecreasing)
}

/// Check that `seq` is strictly increasing under `cmp`.
///
/// The comparator may be declared for `T` itself or for any supertype view
/// `T` upcasts to; see [`Upcast`]. A comparator is total, so there is no
/// mismatch arm here.
pub fn is_ordered_by<T, U, C>(seq: &[T], cmp: C) -> OrderingResult<'_, T>
where
    T: Upcast<U>,
    U: ?Sized,
    C: Comparator<U>,
{
    scan_by(seq, Relation::Strict, &cmp)
}

/// Check that `seq` is non-decreasing under `cmp`.
pub fn is_partially_ordered_by<T, U, C>(seq: &[T], cmp: C) -> OrderingResult<'_, T>
where
    T: Upcast<U>,
    U: ?Sized,
    C: Comparator<U>,
{
    scan_by(seq, Relation::NonDecreasing, &cmp)
}

fn scan_natural<T>(seq: &[T], relation: Relation) -> Result<OrderingResult<'_, T>, TypeMismatch>
where
    T: PartialOrd + Debug,
{
    for (position, pair) in seq.windows(2).enumerate() {
        let (left, right) = (&pair[0], &pair[1]);
        match left.partial_cmp(right) {
            None => return Err(TypeMismatch::new(position, left, right)),
            Some(ord) if relation.violated_by(ord) => {
                return Ok(OrderingResult::Violation {
                    position,
                    left,
                    right,
                })
            }
            Some(_) => {}
        }
    }
    Ok(OrderingResult::Ordered)
}

fn scan_by<'a, T, U, C>(seq: &'a [T], relation: Relation, cmp: &C) -> OrderingResult<'a, T>
where
    T: Upcast<U>,
    U: ?Sized,
    C: Comparator<U>,
{
    for (position, pair) in seq.windows(2).enumerate() {
        let ord = cmp.compare(pair[0].upcast(), pair[1].upcast());
        if relation.violated_by(ord) {
            return OrderingResult::Violation {
                position,
                left: &pair[0],
                right: &pair[1],
            };
        }
    }
    OrderingResult::Ordered
}

/// Search `haystack` for `needle` as a contiguous run.
///
/// Naive window scan: a partial match that dies mid-needle simply moves the
/// candidate start forward by one, so false starts never abort the search.
/// Elements are matched by equality; the ordering comparator plays no role.
///
/// An empty needle is found at position 0 in any haystack.
pub fn contains_sequence<T: PartialEq>(haystack: &[T], needle: &[T]) -> SequenceSearch {
    if needle.is_empty() {
        return SequenceSearch::Found { start: 0 };
    }
    if needle.len() > haystack.len() {
        return SequenceSearch::NotFound;
    }
    match haystack
        .windows(needle.len())
        .position(|window| window == needle)
    {
        Some(start) => SequenceSearch::Found { start },
        None => SequenceSearch::NotFound,
    }
}
