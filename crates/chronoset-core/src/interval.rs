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

use crate::boundary::{Boundary, Direction};
use crate::order;
use crate::timeline::Timeline;
use smallvec::SmallVec;
use std::cmp::Ordering;
use std::fmt;

/// An ordered pair of boundaries over one timeline.
///
/// An interval is immutable once constructed and upholds a single
/// invariant: its canonical start never lies after its canonical end, so
/// it always covers at least one representable point (possibly
/// infinitely many when a side is unbounded).
///
/// # Examples
///
/// ```rust
/// use chronoset_core::{Boundary, Interval};
///
/// let a = Interval::closed(2_i32, 8).unwrap();
/// let b = Interval::new(Boundary::Open(5_i32), Boundary::Closed(12)).unwrap();
///
/// assert!(a.overlaps(&b));
/// let common = a.intersect(&b).unwrap();
/// assert_eq!(common.canonical_start(), Some(6));
/// assert_eq!(common.canonical_end(), Some(8));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval<T> {
    start: Boundary<T>,
    end: Boundary<T>,
}

/// The error type for interval construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidIntervalError {
    /// The canonical start lies after the canonical end.
    Reversed,
    /// An open boundary sits at the representable extreme of the axis
    /// and therefore covers no point at all.
    Degenerate,
    /// The start is unbounded toward the future, or the end toward the
    /// past.
    MisdirectedInfinite,
}

impl fmt::Display for InvalidIntervalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidIntervalError::Reversed => {
                write!(f, "interval start lies after its end")
            }
            InvalidIntervalError::Degenerate => {
                write!(f, "open boundary at the representable extreme covers no point")
            }
            InvalidIntervalError::MisdirectedInfinite => {
                write!(f, "infinite boundary points away from the interval")
            }
        }
    }
}

impl std::error::Error for InvalidIntervalError {}

impl<T> Interval<T>
where
    T: Timeline,
{
    /// Creates a new interval from two boundaries.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidIntervalError`] if the start is unbounded toward
    /// the future (or the end toward the past), if an open boundary at
    /// the representable extreme leaves no covered point, or if the
    /// canonical start lies after the canonical end.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chronoset_core::{Boundary, Interval, InvalidIntervalError};
    ///
    /// let iv = Interval::new(Boundary::Closed(1_i32), Boundary::Open(4)).unwrap();
    /// assert_eq!(iv.canonical_end(), Some(3));
    ///
    /// let err = Interval::new(Boundary::Closed(4_i32), Boundary::Closed(1));
    /// assert_eq!(err, Err(InvalidIntervalError::Reversed));
    /// ```
    pub fn new(start: Boundary<T>, end: Boundary<T>) -> Result<Self, InvalidIntervalError> {
        if matches!(start, Boundary::Infinite(Direction::Future))
            || matches!(end, Boundary::Infinite(Direction::Past))
        {
            return Err(InvalidIntervalError::MisdirectedInfinite);
        }

        let canonical_start = start.canonical_start();
        let canonical_end = end.canonical_end();

        if (!start.is_infinite() && canonical_start.is_none())
            || (!end.is_infinite() && canonical_end.is_none())
        {
            return Err(InvalidIntervalError::Degenerate);
        }

        if !order::start_not_after_end(canonical_start, canonical_end) {
            return Err(InvalidIntervalError::Reversed);
        }

        Ok(Self { start, end })
    }

    /// Creates a new interval without validating the boundary invariant
    /// in release builds.
    ///
    /// The caller must ensure the pair would pass [`Interval::new`].
    /// This function contains a `debug_assert!` to catch errors during
    /// development.
    #[inline]
    pub fn new_unchecked(start: Boundary<T>, end: Boundary<T>) -> Self {
        debug_assert!(
            Self::new(start, end).is_ok(),
            "Invalid interval: boundary pair violates the canonical order invariant"
        );
        Self { start, end }
    }

    /// Creates the closed interval `[a, b]`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidIntervalError::Reversed`] if `a > b`.
    #[inline]
    pub fn closed(a: T, b: T) -> Result<Self, InvalidIntervalError> {
        Self::new(Boundary::Closed(a), Boundary::Closed(b))
    }

    /// Creates the half-open interval `[a, b)`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidIntervalError::Reversed`] if the interval would
    /// cover no point, i.e. if `a >= b`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chronoset_core::Interval;
    ///
    /// let iv = Interval::closed_open(3_i64, 6).unwrap();
    /// assert_eq!(iv.canonical_end(), Some(5));
    /// assert!(Interval::closed_open(3_i64, 3).is_err());
    /// ```
    #[inline]
    pub fn closed_open(a: T, b: T) -> Result<Self, InvalidIntervalError> {
        Self::new(Boundary::Closed(a), Boundary::Open(b))
    }

    /// Creates the interval covering `a` and everything after it.
    #[inline]
    pub fn since(a: T) -> Self {
        Self {
            start: Boundary::Closed(a),
            end: Boundary::Infinite(Direction::Future),
        }
    }

    /// Creates the interval covering `b` and everything before it.
    #[inline]
    pub fn until(b: T) -> Self {
        Self {
            start: Boundary::Infinite(Direction::Past),
            end: Boundary::Closed(b),
        }
    }

    /// Returns the start boundary.
    #[inline]
    pub fn start(&self) -> Boundary<T> {
        self.start
    }

    /// Returns the end boundary.
    #[inline]
    pub fn end(&self) -> Boundary<T> {
        self.end
    }

    /// The first covered point, or `None` if unbounded toward the past.
    #[inline]
    pub fn canonical_start(&self) -> Option<T> {
        self.start.canonical_start()
    }

    /// The last covered point, or `None` if unbounded toward the future.
    #[inline]
    pub fn canonical_end(&self) -> Option<T> {
        self.end.canonical_end()
    }

    /// Returns `true` if the interval is bounded on both sides.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.canonical_start().is_some() && self.canonical_end().is_some()
    }

    /// Returns `true` if `point` lies within the interval.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chronoset_core::Interval;
    ///
    /// let iv = Interval::since(10_i32);
    /// assert!(iv.contains(10));
    /// assert!(iv.contains(i32::MAX));
    /// assert!(!iv.contains(9));
    /// ```
    pub fn contains(&self, point: T) -> bool {
        let after_start = match self.canonical_start() {
            Some(first) => point >= first,
            None => true,
        };
        let before_end = match self.canonical_end() {
            Some(last) => point <= last,
            None => true,
        };
        after_start && before_end
    }

    /// Returns `true` if this interval shares at least one covered point
    /// with `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chronoset_core::Interval;
    ///
    /// let a = Interval::closed(0_i32, 10).unwrap();
    /// assert!(a.overlaps(&Interval::closed(10, 20).unwrap()));
    /// assert!(!a.overlaps(&Interval::closed(11, 20).unwrap()));
    /// ```
    pub fn overlaps(&self, other: &Self) -> bool {
        let start = order::later_start(self.canonical_start(), other.canonical_start());
        let end = order::earlier_end(self.canonical_end(), other.canonical_end());
        order::start_not_after_end(start, end)
    }

    /// Returns `true` if the intervals do not overlap and no
    /// representable value lies strictly between them.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chronoset_core::Interval;
    ///
    /// let a = Interval::closed(0_i32, 4).unwrap();
    /// assert!(a.abuts(&Interval::closed(5, 9).unwrap()));
    /// assert!(!a.abuts(&Interval::closed(6, 9).unwrap()));
    /// assert!(!a.abuts(&Interval::closed(4, 9).unwrap()));
    /// ```
    pub fn abuts(&self, other: &Self) -> bool {
        if self.overlaps(other) {
            return false;
        }
        let self_then_other = match (self.canonical_end(), other.canonical_start()) {
            (Some(last), Some(first)) => last.step_forward() == Some(first),
            _ => false,
        };
        let other_then_self = match (other.canonical_end(), self.canonical_start()) {
            (Some(last), Some(first)) => last.step_forward() == Some(first),
            _ => false,
        };
        self_then_other || other_then_self
    }

    /// Calculates the intersection of two intervals.
    ///
    /// The result keeps the boundary with the later canonical start and
    /// the boundary with the earlier canonical end; at equal canonical
    /// values either boundary covers the same points, so the receiver's
    /// is kept. Returns `None` if no point lies in both intervals.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chronoset_core::Interval;
    ///
    /// let a = Interval::closed(0_i32, 10).unwrap();
    /// let b = Interval::closed(5, 15).unwrap();
    /// assert_eq!(a.intersect(&b), Some(Interval::closed(5, 10).unwrap()));
    ///
    /// let c = Interval::closed(11, 15).unwrap();
    /// assert_eq!(a.intersect(&c), None);
    /// ```
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        let start = match order::cmp_canonical_starts(
            self.canonical_start(),
            other.canonical_start(),
        ) {
            Ordering::Less => other.start,
            _ => self.start,
        };
        let end = match order::cmp_canonical_ends(self.canonical_end(), other.canonical_end()) {
            Ordering::Greater => other.end,
            _ => self.end,
        };

        let candidate = Self { start, end };
        if order::start_not_after_end(candidate.canonical_start(), candidate.canonical_end()) {
            Some(candidate)
        } else {
            None
        }
    }

    /// Calculates the portion of `self` not covered by `other`.
    ///
    /// # Returns
    ///
    /// A vector containing:
    /// * 0 intervals: if `other` fully covers `self`.
    /// * 1 interval: if `other` clips one side of `self` or is disjoint.
    /// * 2 intervals: if `other` splits `self` in two.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chronoset_core::Interval;
    ///
    /// let base = Interval::closed(0_i32, 10).unwrap();
    /// let hole = Interval::closed(4, 6).unwrap();
    ///
    /// let kept = base.difference(&hole);
    /// assert_eq!(kept.len(), 2);
    /// assert_eq!(kept[0], Interval::closed(0, 3).unwrap());
    /// assert_eq!(kept[1], Interval::closed(7, 10).unwrap());
    /// ```
    pub fn difference(&self, other: &Self) -> SmallVec<Self, 2> {
        if !self.overlaps(other) {
            return smallvec::smallvec![*self];
        }

        let mut pieces = SmallVec::new();
        if let Some(first_removed) = other.canonical_start() {
            if order::cmp_canonical_starts(self.canonical_start(), Some(first_removed)).is_lt() {
                if let Some(last_kept) = first_removed.step_backward() {
                    pieces.push(Self {
                        start: self.start,
                        end: Boundary::Closed(last_kept),
                    });
                }
            }
        }
        if let Some(last_removed) = other.canonical_end() {
            if order::cmp_canonical_ends(self.canonical_end(), Some(last_removed)).is_gt() {
                if let Some(first_kept) = last_removed.step_forward() {
                    pieces.push(Self {
                        start: Boundary::Closed(first_kept),
                        end: self.end,
                    });
                }
            }
        }
        pieces
    }
}

impl<T> fmt::Display for Interval<T>
where
    T: Timeline + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.start {
            Boundary::Closed(v) => write!(f, "[{}", v)?,
            Boundary::Open(v) => write!(f, "({}", v)?,
            Boundary::Infinite(_) => write!(f, "(-\u{221e}")?,
        }
        write!(f, ", ")?;
        match self.end {
            Boundary::Closed(v) => write!(f, "{}]", v),
            Boundary::Open(v) => write!(f, "{})", v),
            Boundary::Infinite(_) => write!(f, "+\u{221e})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_valid() {
        let iv = Interval::new(Boundary::Closed(1_i32), Boundary::Closed(5)).unwrap();
        assert_eq!(iv.canonical_start(), Some(1));
        assert_eq!(iv.canonical_end(), Some(5));
        assert!(iv.is_finite());
    }

    #[test]
    fn test_construction_singleton() {
        let iv = Interval::closed(3_i32, 3).unwrap();
        assert_eq!(iv.canonical_start(), iv.canonical_end());
    }

    #[test]
    fn test_construction_reversed() {
        assert_eq!(
            Interval::closed(5_i32, 1),
            Err(InvalidIntervalError::Reversed)
        );
        // Open boundaries reverse through canonicalization: (4, 5) covers nothing.
        assert_eq!(
            Interval::new(Boundary::Open(4_i32), Boundary::Open(5)),
            Err(InvalidIntervalError::Reversed)
        );
    }

    #[test]
    fn test_construction_misdirected_infinite() {
        assert_eq!(
            Interval::new(Boundary::Infinite(Direction::Future), Boundary::Closed(1_i32)),
            Err(InvalidIntervalError::MisdirectedInfinite)
        );
        assert_eq!(
            Interval::new(Boundary::Closed(1_i32), Boundary::Infinite(Direction::Past)),
            Err(InvalidIntervalError::MisdirectedInfinite)
        );
    }

    #[test]
    fn test_construction_degenerate_at_extremes() {
        assert_eq!(
            Interval::new(Boundary::Open(i8::MAX), Boundary::Infinite(Direction::Future)),
            Err(InvalidIntervalError::Degenerate)
        );
        assert_eq!(
            Interval::new(Boundary::Infinite(Direction::Past), Boundary::Open(i8::MIN)),
            Err(InvalidIntervalError::Degenerate)
        );
    }

    #[test]
    fn test_unbounded_constructors() {
        let since = Interval::since(7_i32);
        assert_eq!(since.canonical_start(), Some(7));
        assert_eq!(since.canonical_end(), None);
        assert!(!since.is_finite());

        let until = Interval::until(7_i32);
        assert_eq!(until.canonical_start(), None);
        assert_eq!(until.canonical_end(), Some(7));
    }

    #[test]
    fn test_contains() {
        let iv = Interval::new(Boundary::Open(0_i32), Boundary::Closed(5)).unwrap();
        assert!(!iv.contains(0));
        assert!(iv.contains(1));
        assert!(iv.contains(5));
        assert!(!iv.contains(6));

        let until = Interval::until(3_i32);
        assert!(until.contains(i32::MIN));
        assert!(until.contains(3));
        assert!(!until.contains(4));
    }

    #[test]
    fn test_overlaps() {
        let a = Interval::closed(0_i32, 10).unwrap();

        assert!(a.overlaps(&Interval::closed(-5, 0).unwrap()));
        assert!(a.overlaps(&Interval::closed(5, 15).unwrap()));
        assert!(a.overlaps(&Interval::closed(2, 8).unwrap()));
        assert!(a.overlaps(&a));
        assert!(!a.overlaps(&Interval::closed(11, 15).unwrap()));
        assert!(!a.overlaps(&Interval::closed(-5, -1).unwrap()));

        // Open ends exclude their value: [0, 10] and (10, 20] share nothing.
        let open_start = Interval::new(Boundary::Open(10_i32), Boundary::Closed(20)).unwrap();
        assert!(!a.overlaps(&open_start));

        // Unbounded intervals overlap everything on their side.
        assert!(a.overlaps(&Interval::since(10)));
        assert!(!a.overlaps(&Interval::since(11)));
        assert!(a.overlaps(&Interval::until(0)));
    }

    #[test]
    fn test_abuts() {
        let a = Interval::closed(0_i32, 4).unwrap();

        assert!(a.abuts(&Interval::closed(5, 9).unwrap()));
        assert!(Interval::closed(5_i32, 9).unwrap().abuts(&a));
        assert!(!a.abuts(&Interval::closed(4, 9).unwrap()));
        assert!(!a.abuts(&Interval::closed(6, 9).unwrap()));

        // (4, 9] canonically starts at 5, which touches [0, 4].
        let open = Interval::new(Boundary::Open(4_i32), Boundary::Closed(9)).unwrap();
        assert!(a.abuts(&open));

        // An unbounded side never abuts on that side.
        assert!(Interval::until(4_i32).abuts(&Interval::closed(5, 9).unwrap()));
        assert!(!Interval::since(0_i32).abuts(&Interval::closed(5, 9).unwrap()));
    }

    #[test]
    fn test_intersect() {
        let a = Interval::closed(0_i32, 10).unwrap();
        let b = Interval::closed(5, 15).unwrap();
        assert_eq!(a.intersect(&b), Some(Interval::closed(5, 10).unwrap()));

        let inner = Interval::closed(2, 8).unwrap();
        assert_eq!(a.intersect(&inner), Some(inner));

        assert_eq!(a.intersect(&Interval::closed(11, 15).unwrap()), None);
    }

    #[test]
    fn test_intersect_open_wins_at_shared_value() {
        // Both supply a start at 0, but the open one excludes it.
        let closed = Interval::closed(0_i32, 10).unwrap();
        let open = Interval::new(Boundary::Open(0_i32), Boundary::Closed(10)).unwrap();

        let common = closed.intersect(&open).unwrap();
        assert_eq!(common.canonical_start(), Some(1));
        assert!(!common.contains(0));
    }

    #[test]
    fn test_intersect_unbounded() {
        let a = Interval::since(3_i32);
        let b = Interval::since(8_i32);
        let common = a.intersect(&b).unwrap();
        assert_eq!(common.canonical_start(), Some(8));
        assert_eq!(common.canonical_end(), None);

        let c = Interval::until(0_i32);
        assert_eq!(a.intersect(&c), None);
    }

    #[test]
    fn test_difference() {
        let base = Interval::closed(0_i32, 10).unwrap();

        // 1. Disjoint (no effect).
        let kept = base.difference(&Interval::closed(12, 15).unwrap());
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0], base);

        // 2. Full cover (empty result).
        let kept = base.difference(&Interval::closed(-5, 15).unwrap());
        assert!(kept.is_empty());

        // 3. Clip right.
        let kept = base.difference(&Interval::closed(8, 15).unwrap());
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0], Interval::closed(0, 7).unwrap());

        // 4. Clip left.
        let kept = base.difference(&Interval::closed(-5, 2).unwrap());
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0], Interval::closed(3, 10).unwrap());

        // 5. Split.
        let kept = base.difference(&Interval::closed(4, 6).unwrap());
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0], Interval::closed(0, 3).unwrap());
        assert_eq!(kept[1], Interval::closed(7, 10).unwrap());
    }

    #[test]
    fn test_difference_keeps_unbounded_sides() {
        let base = Interval::since(0_i32);
        let kept = base.difference(&Interval::closed(4, 6).unwrap());
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0], Interval::closed(0, 3).unwrap());
        assert_eq!(kept[1].canonical_start(), Some(7));
        assert_eq!(kept[1].canonical_end(), None);
    }

    #[test]
    fn test_display() {
        let closed = Interval::closed(1_i32, 5).unwrap();
        assert_eq!(format!("{}", closed), "[1, 5]");

        let half_open = Interval::closed_open(1_i32, 5).unwrap();
        assert_eq!(format!("{}", half_open), "[1, 5)");

        assert_eq!(format!("{}", Interval::since(1_i32)), "[1, +\u{221e})");
        assert_eq!(format!("{}", Interval::until(5_i32)), "(-\u{221e}, 5]");
    }
}
