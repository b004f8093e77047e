// Copyright 2026-present The veritas authors
// SPDX-License-Identifier: Apache-2.0

//! The comparator seam for the ordering predicates.
//!
//! Two traits make up the seam. [`Comparator`] is the total ordering a
//! caller supplies; any `Fn(&T, &T) -> Ordering` closure works via the
//! blanket impl. [`Upcast`] widens an element to a declared supertype view,
//! which is how a comparator written for a base type gets accepted for a
//! sequence of a more specific type, and how the reverse direction is kept
//! out at compile time.

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// A total ordering over `T`.
pub trait Comparator<T: ?Sized> {
    fn compare(&self, left: &T, right: &T) -> Ordering;
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self(left, right)
    }
}

/// Widens an element to its supertype view `U` for comparison.
///
/// The ordering predicates accept a comparator declared for the element
/// type itself (every type upcasts to itself) or for any type the element
/// explicitly upcasts to. Rust has no subtyping between structs, so the
/// supertype relation is spelled out per type instead of inferred.
///
/// A comparator declared for the supertype orders a sequence of the
/// subtype:
///
/// ```
/// use std::cmp::Ordering;
/// use veritas::{is_ordered_by, Comparator, Upcast};
///
/// struct Instrument {
///     pitch: u32,
/// }
///
/// struct Violin {
///     instrument: Instrument,
/// }
///
/// impl Upcast<Instrument> for Violin {
///     fn upcast(&self) -> &Instrument {
///         &self.instrument
///     }
/// }
///
/// struct ByPitch;
///
/// impl Comparator<Instrument> for ByPitch {
///     fn compare(&self, left: &Instrument, right: &Instrument) -> Ordering {
///         left.pitch.cmp(&right.pitch)
///     }
/// }
///
/// let violins = [
///     Violin { instrument: Instrument { pitch: 440 } },
///     Violin { instrument: Instrument { pitch: 660 } },
/// ];
/// assert!(is_ordered_by(&violins, ByPitch).is_ordered());
/// ```
///
/// The reverse direction is rejected by the type checker: a comparator
/// declared only for the subtype cannot order a sequence of the supertype,
/// because the supertype does not upcast to it.
///
/// ```compile_fail
/// use std::cmp::Ordering;
/// use veritas::{is_ordered_by, Comparator, Upcast};
///
/// struct Instrument {
///     pitch: u32,
/// }
///
/// struct Violin {
///     instrument: Instrument,
/// }
///
/// impl Upcast<Instrument> for Violin {
///     fn upcast(&self) -> &Instrument {
///         &self.instrument
///     }
/// }
///
/// struct ByViolin;
///
/// impl Comparator<Violin> for ByViolin {
///     fn compare(&self, left: &Violin, right: &Violin) -> Ordering {
///         left.instrument.pitch.cmp(&right.instrument.pitch)
///     }
/// }
///
/// let instruments = [Instrument { pitch: 440 }, Instrument { pitch: 660 }];
/// is_ordered_by(&instruments, ByViolin);
/// ```
pub trait Upcast<U: ?Sized> {
    fn upcast(&self) -> &U;
}

impl<T: ?Sized> Upcast<T> for T {
    fn upcast(&self) -> &T {
        self
    }
}

/// Two adjacent elements had no defined natural ordering.
///
/// This is caller misuse, not a failed assertion: the sequence may or may
/// not be ordered, but the natural-ordering path cannot tell. The offending
/// values are Debug-rendered at detection so the error owns its data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeMismatch {
    /// Index of the left element of the incomparable pair.
    pub position: usize,
    pub left: String,
    pub right: String,
}

impl TypeMismatch {
    pub(crate) fn new(position: usize, left: &impl fmt::Debug, right: &impl fmt::Debug) -> Self {
        TypeMismatch {
            position,
            left: format!("{:?}", left),
            right: format!("{:?}", right),
        }
    }
}

impl fmt::Display for TypeMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cannot compare adjacent elements at positions {} and {}: <{}> vs <{}>",
            self.position,
            self.position + 1,
            self.left,
            self.right
        )
    }
}

impl std::error::Error for TypeMismatch {}
