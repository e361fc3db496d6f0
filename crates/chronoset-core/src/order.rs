// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Canonical Ordering Utilities
//!
//! Comparators over *canonical forms* of boundaries, where the absent
//! form of a start compares as the infinite past and the absent form of
//! an end as the infinite future. Every sort and every overlap test in
//! the workspace funnels through these helpers, so the infinity
//! conventions live in exactly one place.

use crate::interval::Interval;
use crate::timeline::Timeline;
use std::cmp::Ordering;

/// Compares two canonical start values, treating `None` as the infinite
/// past (smaller than every finite value).
#[inline]
pub fn cmp_canonical_starts<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(x), Some(y)) => x.cmp(&y),
    }
}

/// Compares two canonical end values, treating `None` as the infinite
/// future (larger than every finite value).
#[inline]
pub fn cmp_canonical_ends<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(x), Some(y)) => x.cmp(&y),
    }
}

/// Returns the later of two canonical start values under the infinite
/// past convention.
#[inline]
pub fn later_start<T: Ord + Copy>(a: Option<T>, b: Option<T>) -> Option<T> {
    match cmp_canonical_starts(a, b) {
        Ordering::Greater => a,
        _ => b,
    }
}

/// Returns the earlier of two canonical end values under the infinite
/// future convention.
#[inline]
pub fn earlier_end<T: Ord + Copy>(a: Option<T>, b: Option<T>) -> Option<T> {
    match cmp_canonical_ends(a, b) {
        Ordering::Less => a,
        _ => b,
    }
}

/// Returns `true` if a canonical start does not lie after a canonical
/// end, i.e. the pair delimits at least one covered point.
#[inline]
pub fn start_not_after_end<T: Ord>(start: Option<T>, end: Option<T>) -> bool {
    match (start, end) {
        (None, _) | (_, None) => true,
        (Some(s), Some(e)) => s <= e,
    }
}

/// The entry ordering used by every interval collection: ascending by
/// canonical start, ties broken ascending by canonical end.
///
/// # Examples
///
/// ```rust
/// use chronoset_core::{order, Interval};
/// use std::cmp::Ordering;
///
/// let a = Interval::closed(1_i32, 9).unwrap();
/// let b = Interval::closed(2_i32, 5).unwrap();
/// assert_eq!(order::entry_ordering(&a, &b), Ordering::Less);
/// ```
#[inline]
pub fn entry_ordering<T: Timeline>(a: &Interval<T>, b: &Interval<T>) -> Ordering {
    cmp_canonical_starts(a.canonical_start(), b.canonical_start())
        .then_with(|| cmp_canonical_ends(a.canonical_end(), b.canonical_end()))
}
