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

//! # Interval Boundaries
//!
//! A [`Boundary`] is a single endpoint of an interval: closed at a value,
//! open at a value, or unbounded toward the past or the future. Every
//! algorithm in the workspace works on the *canonical closed form* of a
//! boundary (the inclusive point actually covered), obtained by stepping
//! an open boundary inward by one representable unit. Matching
//! on the variant is always exhaustive, so an unhandled combination of
//! boundary kinds does not compile.

use crate::timeline::Timeline;

/// The direction in which an unbounded endpoint extends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Unbounded toward ever earlier points.
    Past,
    /// Unbounded toward ever later points.
    Future,
}

/// One endpoint of an interval.
///
/// An infinite boundary carries no value; the direction alone determines
/// which side of the axis it extends toward. Which directions are legal
/// depends on the role: an interval start may be `Infinite(Past)` and an
/// interval end may be `Infinite(Future)`, and
/// [`Interval::new`](crate::interval::Interval::new) rejects the two
/// misdirected combinations.
///
/// # Examples
///
/// ```rust
/// use chronoset_core::{Boundary, Direction};
///
/// // As a start, an open boundary covers from the next value onwards.
/// assert_eq!(Boundary::Open(4_i32).canonical_start(), Some(5));
/// assert_eq!(Boundary::Closed(5_i32).canonical_start(), Some(5));
/// assert_eq!(Boundary::<i32>::Infinite(Direction::Past).canonical_start(), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Boundary<T> {
    /// The endpoint includes its value.
    Closed(T),
    /// The endpoint excludes its value.
    Open(T),
    /// The endpoint is unbounded in the given direction.
    Infinite(Direction),
}

impl<T> Boundary<T> {
    /// Returns `true` if this boundary is unbounded.
    #[inline]
    pub const fn is_infinite(&self) -> bool {
        matches!(self, Boundary::Infinite(_))
    }

    /// Returns `true` if this boundary includes its value.
    #[inline]
    pub const fn is_closed(&self) -> bool {
        matches!(self, Boundary::Closed(_))
    }

    /// Returns `true` if this boundary excludes its value.
    #[inline]
    pub const fn is_open(&self) -> bool {
        matches!(self, Boundary::Open(_))
    }

    /// Returns the finite value carried by this boundary, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chronoset_core::{Boundary, Direction};
    ///
    /// assert_eq!(Boundary::Closed(7_i64).value(), Some(&7));
    /// assert_eq!(Boundary::<i64>::Infinite(Direction::Future).value(), None);
    /// ```
    #[inline]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Boundary::Closed(v) | Boundary::Open(v) => Some(v),
            Boundary::Infinite(_) => None,
        }
    }
}

impl<T> Boundary<T>
where
    T: Timeline,
{
    /// The canonical closed form of this boundary in start position: the
    /// first point covered by an interval starting here.
    ///
    /// Returns `None` for an unbounded boundary. An open boundary at the
    /// largest representable value also yields `None`; such a boundary
    /// covers nothing, and interval construction rejects it, so inside
    /// validated intervals `None` always means "unbounded below".
    #[inline]
    pub fn canonical_start(self) -> Option<T> {
        match self {
            Boundary::Closed(v) => Some(v),
            Boundary::Open(v) => v.step_forward(),
            Boundary::Infinite(_) => None,
        }
    }

    /// The canonical closed form of this boundary in end position: the
    /// last point covered by an interval ending here.
    ///
    /// Returns `None` for an unbounded boundary, and for the degenerate
    /// open boundary at the smallest representable value (rejected at
    /// interval construction).
    #[inline]
    pub fn canonical_end(self) -> Option<T> {
        match self {
            Boundary::Closed(v) => Some(v),
            Boundary::Open(v) => v.step_backward(),
            Boundary::Infinite(_) => None,
        }
    }
}
