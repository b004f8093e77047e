// Copyright 2026-present The veritas authors
// SPDX-License-Identifier: Apache-2.0

//! The fluent assertion front end.
//!
//! [`assert_that`] wraps a borrowed slice in a [`SequenceSubject`] whose
//! methods run the predicate scans and panic with a rendered message when a
//! check fails. Messages follow the `Not true that <subject> <relation>
//! <values>` shape, with the failure detail wrapped in red when stderr is a
//! terminal.
//!
//! A [`TypeMismatch`](crate::TypeMismatch) is not an assertion failure and
//! gets its own message; it is never phrased as "not ordered".

use crate::compare::{Comparator, Upcast};
use crate::predicate;
use crate::types::{Failure, OrderingResult, Relation, SequenceSearch};
use std::fmt::Debug;

/// Start an assertion chain over a sequence.
pub fn assert_that<T>(actual: &[T]) -> SequenceSubject<'_, T> {
    SequenceSubject { actual }
}

/// A sequence under assertion.
pub struct SequenceSubject<'a, T> {
    actual: &'a [T],
}

impl<'a, T: Debug> SequenceSubject<'a, T> {
    /// Assert that the sequence is strictly increasing under natural order.
    ///
    /// Panics with a usage-error message (not an assertion failure) if an
    /// adjacent pair has no defined ordering.
    pub fn is_ordered(&self) -> &Self
    where
        T: PartialOrd,
    {
        match predicate::is_ordered(self.actual) {
            Ok(result) => self.expect_ordered(Relation::Strict, result),
            Err(mismatch) => panic!("{}", mismatch),
        }
    }

    /// Assert that the sequence is non-decreasing under natural order.
    pub fn is_partially_ordered(&self) -> &Self
    where
        T: PartialOrd,
    {
        match predicate::is_partially_ordered(self.actual) {
            Ok(result) => self.expect_ordered(Relation::NonDecreasing, result),
            Err(mismatch) => panic!("{}", mismatch),
        }
    }

    /// Assert strict ordering under an explicit comparator.
    pub fn is_ordered_by<U, C>(&self, cmp: C) -> &Self
    where
        T: Upcast<U>,
        U: ?Sized,
        C: Comparator<U>,
    {
        self.expect_ordered(Relation::Strict, predicate::is_ordered_by(self.actual, cmp))
    }

    /// Assert non-decreasing ordering under an explicit comparator.
    pub fn is_partially_ordered_by<U, C>(&self, cmp: C) -> &Self
    where
        T: Upcast<U>,
        U: ?Sized,
        C: Comparator<U>,
    {
        self.expect_ordered(
            Relation::NonDecreasing,
            predicate::is_partially_ordered_by(self.actual, cmp),
        )
    }

    /// Assert that `needle` appears as a contiguous run in the sequence.
    pub fn contains_sequence(&self, needle: &[T]) -> &Self
    where
        T: PartialEq,
    {
        match predicate::contains_sequence(self.actual, needle) {
            SequenceSearch::Found { .. } => self,
            SequenceSearch::NotFound => self.raise(Failure::Containment { needle }),
        }
    }

    fn expect_ordered(&self, relation: Relation, result: OrderingResult<'a, T>) -> &Self {
        match result {
            OrderingResult::Ordered => self,
            OrderingResult::Violation {
                position,
                left,
                right,
            } => self.raise(Failure::Ordering {
                relation,
                position,
                left,
                right,
            }),
        }
    }

    fn raise(&self, failure: Failure<'_, T>) -> ! {
        panic!(
            "Not true that <{:?}> {}",
            self.actual,
            paint(&failure.to_string())
        );
    }
}

/// Whether failure details should be colored (TTY on stderr, no `NO_COLOR`).
fn use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    atty::is(atty::Stream::Stderr)
}

/// Wrap the failure detail in red when appropriate. The detail stays a
/// single run of text, so substring matching on messages is unaffected.
fn paint(text: &str) -> String {
    if use_colors() {
        format!("\x1b[31m{}\x1b[0m", text)
    } else {
        text.to_string()
    }
}
