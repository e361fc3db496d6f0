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

use chronoset_core::{order, Boundary, Interval, Timeline};
use std::cmp::Ordering;
use std::fmt;

/// The error type for extreme-point queries on an empty collection.
///
/// Distinct from the "present but unbounded" case, which the queries
/// report as `Ok(None)` rather than as a failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmptyCollectionError {
    query: &'static str,
}

impl EmptyCollectionError {
    #[inline]
    pub(crate) fn new(query: &'static str) -> Self {
        Self { query }
    }

    /// The query that failed.
    #[inline]
    pub fn query(&self) -> &'static str {
        self.query
    }
}

impl fmt::Display for EmptyCollectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no interval available for `{}` on an empty collection",
            self.query
        )
    }
}

impl std::error::Error for EmptyCollectionError {}

/// An immutable, ordered aggregate of intervals over one timeline.
///
/// Entries are kept sorted ascending by canonical start (ties broken by
/// canonical end), but they are *not* merged or deduplicated; the raw
/// multiset is exactly what the derivations need. Only derived
/// collections carry stronger invariants: the result of
/// [`with_blocks`](IntervalCollection::with_blocks) is pairwise disjoint,
/// non-adjacent, and sorted, and the results of
/// [`with_gaps`](IntervalCollection::with_gaps) and
/// [`with_intersection`](IntervalCollection::with_intersection) are
/// pairwise disjoint and sorted.
///
/// Every operation returns a new collection; a receiver is never
/// mutated.
///
/// # Examples
///
/// ```rust
/// use chronoset_core::Interval;
/// use chronoset_windows::IntervalCollection;
///
/// let windows = IntervalCollection::empty()
///     .plus(Interval::closed(1_i64, 4).unwrap())
///     .plus(Interval::closed(5, 9).unwrap())
///     .plus(Interval::closed(20, 30).unwrap());
///
/// let blocks = windows.with_blocks();
/// assert_eq!(
///     blocks.intervals(),
///     &[
///         Interval::closed(1_i64, 9).unwrap(),
///         Interval::closed(20, 30).unwrap(),
///     ]
/// );
///
/// let gaps = windows.with_gaps();
/// assert_eq!(gaps.intervals(), &[Interval::closed(10_i64, 19).unwrap()]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntervalCollection<T>
where
    T: Timeline,
{
    intervals: Vec<Interval<T>>,
}

impl<T> IntervalCollection<T>
where
    T: Timeline,
{
    /// The empty collection of this flavor.
    ///
    /// `Vec::new` allocates nothing, so the shared empty instance is a
    /// plain constant; no lazy initialization or synchronization is
    /// involved.
    pub const EMPTY: Self = Self {
        intervals: Vec::new(),
    };

    /// Returns the empty collection.
    #[inline]
    pub fn empty() -> Self {
        Self::EMPTY
    }

    /// Returns a collection holding exactly one interval.
    #[inline]
    pub fn of(interval: Interval<T>) -> Self {
        Self {
            intervals: vec![interval],
        }
    }

    /// Returns a new collection with `interval` added.
    ///
    /// The result is re-sorted but never merged or deduplicated;
    /// overlapping and duplicate entries are preserved verbatim because
    /// the derivations work on the raw multiset.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chronoset_core::Interval;
    /// use chronoset_windows::IntervalCollection;
    ///
    /// let late = Interval::closed(5_i64, 9).unwrap();
    /// let early = Interval::closed(1_i64, 4).unwrap();
    /// let windows = IntervalCollection::of(late).plus(early);
    /// assert_eq!(windows.intervals(), &[early, late]);
    /// ```
    pub fn plus(&self, interval: Interval<T>) -> Self {
        let mut intervals = Vec::with_capacity(self.intervals.len() + 1);
        intervals.extend_from_slice(&self.intervals);
        intervals.push(interval);
        intervals.sort_by(order::entry_ordering);
        Self { intervals }
    }

    /// Returns a new collection with every interval of `additions`
    /// added; see [`plus`](IntervalCollection::plus).
    pub fn plus_all<I>(&self, additions: I) -> Self
    where
        I: IntoIterator<Item = Interval<T>>,
    {
        let mut intervals = self.intervals.clone();
        intervals.extend(additions);
        intervals.sort_by(order::entry_ordering);
        Self { intervals }
    }

    /// Merges every run of overlapping or abutting entries into one
    /// maximal block.
    ///
    /// The result is pairwise disjoint, pairwise non-adjacent, and
    /// sorted; merging again changes nothing. A block is unbounded on a
    /// side exactly when some contributing entry was unbounded there.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chronoset_core::Interval;
    /// use chronoset_windows::IntervalCollection;
    ///
    /// let windows = IntervalCollection::empty()
    ///     .plus(Interval::closed(1_i64, 5).unwrap())
    ///     .plus(Interval::closed(6, 7).unwrap())
    ///     .plus(Interval::since(20));
    ///
    /// let blocks = windows.with_blocks();
    /// assert_eq!(blocks.len(), 2);
    /// assert_eq!(blocks.intervals()[0], Interval::closed(1_i64, 7).unwrap());
    /// assert_eq!(blocks.intervals()[1], Interval::since(20));
    /// ```
    pub fn with_blocks(&self) -> Self {
        let mut current = match self.intervals.first() {
            Some(first) => *first,
            None => return Self::empty(),
        };

        let mut blocks = Vec::new();
        for entry in &self.intervals[1..] {
            if current.overlaps(entry) || current.abuts(entry) {
                match order::cmp_canonical_ends(entry.canonical_end(), current.canonical_end()) {
                    Ordering::Greater => {
                        current = Interval::new_unchecked(current.start(), entry.end());
                    }
                    Ordering::Equal => {
                        // Equal covered extent; keep the closed representation.
                        if entry.end().is_closed() && !current.end().is_closed() {
                            current = Interval::new_unchecked(current.start(), entry.end());
                        }
                    }
                    Ordering::Less => {}
                }
            } else {
                blocks.push(current);
                current = *entry;
            }
        }
        blocks.push(current);

        Self { intervals: blocks }
    }

    /// Derives the finite regions strictly between consecutive blocks.
    ///
    /// Each gap is a closed interval from the successor of one block's
    /// last covered point to the predecessor of the next block's first
    /// covered point. No gap is emitted before the first block or after
    /// the last block; with fewer than two blocks the result is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chronoset_core::Interval;
    /// use chronoset_windows::IntervalCollection;
    ///
    /// let windows = IntervalCollection::empty()
    ///     .plus(Interval::closed(1_i64, 4).unwrap())
    ///     .plus(Interval::since(8));
    ///
    /// let gaps = windows.with_gaps();
    /// assert_eq!(gaps.intervals(), &[Interval::closed(5_i64, 7).unwrap()]);
    /// ```
    pub fn with_gaps(&self) -> Self {
        let blocks = self.with_blocks();
        if blocks.len() < 2 {
            return Self::empty();
        }

        let mut gaps = Vec::new();
        for pair in blocks.intervals.windows(2) {
            if let (Some(last_covered), Some(next_covered)) =
                (pair[0].canonical_end(), pair[1].canonical_start())
            {
                if let (Some(gap_start), Some(gap_end)) =
                    (last_covered.step_forward(), next_covered.step_backward())
                {
                    if gap_start <= gap_end {
                        gaps.push(Interval::new_unchecked(
                            Boundary::Closed(gap_start),
                            Boundary::Closed(gap_end),
                        ));
                    }
                }
            }
        }

        Self { intervals: gaps }
    }

    /// Derives the single region common to every entry, if any.
    ///
    /// The raw entries are folded pairwise through
    /// [`Interval::intersect`]; intersection is associative and
    /// commutative, so the fold order does not matter. As soon as the
    /// running region vanishes the result is the empty collection. With
    /// zero entries the result is empty; with exactly one entry it is
    /// that entry itself.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chronoset_core::Interval;
    /// use chronoset_windows::IntervalCollection;
    ///
    /// let windows = IntervalCollection::empty()
    ///     .plus(Interval::closed(1_i64, 10).unwrap())
    ///     .plus(Interval::closed(5, 15).unwrap());
    ///
    /// let common = windows.with_intersection();
    /// assert_eq!(common.intervals(), &[Interval::closed(5_i64, 10).unwrap()]);
    /// ```
    pub fn with_intersection(&self) -> Self {
        let mut entries = self.intervals.iter();
        let mut common = match entries.next() {
            Some(first) => *first,
            None => return Self::empty(),
        };

        for entry in entries {
            match common.intersect(entry) {
                Some(rest) => common = rest,
                None => return Self::empty(),
            }
        }

        Self {
            intervals: vec![common],
        }
    }

    /// Returns the covered region with `interval` removed.
    ///
    /// The receiver is first merged into blocks, then each block is
    /// clipped against `interval`; the result is disjoint and sorted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chronoset_core::Interval;
    /// use chronoset_windows::IntervalCollection;
    ///
    /// let windows = IntervalCollection::of(Interval::closed(0_i64, 10).unwrap());
    /// let remaining = windows.minus(&Interval::closed(4_i64, 6).unwrap());
    /// assert_eq!(
    ///     remaining.intervals(),
    ///     &[
    ///         Interval::closed(0_i64, 3).unwrap(),
    ///         Interval::closed(7, 10).unwrap(),
    ///     ]
    /// );
    /// ```
    pub fn minus(&self, interval: &Interval<T>) -> Self {
        let blocks = self.with_blocks();
        let mut remaining = Vec::with_capacity(blocks.len());
        for block in &blocks.intervals {
            remaining.extend(block.difference(interval));
        }
        Self {
            intervals: remaining,
        }
    }

    /// Returns the earliest covered point.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyCollectionError`] if the collection has no
    /// entries. If any entry is unbounded toward the past the result is
    /// `Ok(None)`: present, but without a finite minimum.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chronoset_core::Interval;
    /// use chronoset_windows::IntervalCollection;
    ///
    /// let windows = IntervalCollection::of(Interval::closed(3_i64, 9).unwrap());
    /// assert_eq!(windows.minimum(), Ok(Some(3)));
    ///
    /// let unbounded = windows.plus(Interval::until(0_i64));
    /// assert_eq!(unbounded.minimum(), Ok(None));
    ///
    /// assert!(IntervalCollection::<i64>::empty().minimum().is_err());
    /// ```
    pub fn minimum(&self) -> Result<Option<T>, EmptyCollectionError> {
        if self.intervals.is_empty() {
            return Err(EmptyCollectionError::new("minimum"));
        }

        let mut earliest: Option<T> = None;
        for entry in &self.intervals {
            match entry.canonical_start() {
                None => return Ok(None),
                Some(first) => {
                    earliest = Some(match earliest {
                        Some(seen) if seen <= first => seen,
                        _ => first,
                    });
                }
            }
        }
        Ok(earliest)
    }

    /// Returns the latest covered point.
    ///
    /// The value is always an inclusive point: an open end is stepped
    /// backward before comparison. Errors and the unbounded sentinel
    /// mirror [`minimum`](IntervalCollection::minimum).
    pub fn maximum(&self) -> Result<Option<T>, EmptyCollectionError> {
        if self.intervals.is_empty() {
            return Err(EmptyCollectionError::new("maximum"));
        }

        let mut latest: Option<T> = None;
        for entry in &self.intervals {
            match entry.canonical_end() {
                None => return Ok(None),
                Some(last) => {
                    latest = Some(match latest {
                        Some(seen) if seen >= last => seen,
                        _ => last,
                    });
                }
            }
        }
        Ok(latest)
    }

    /// Returns the single interval from the earliest start boundary to
    /// the latest end boundary, or `None` when the collection is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chronoset_core::Interval;
    /// use chronoset_windows::IntervalCollection;
    ///
    /// let windows = IntervalCollection::empty()
    ///     .plus(Interval::closed(1_i64, 3).unwrap())
    ///     .plus(Interval::since(10));
    ///
    /// let span = windows.span().unwrap();
    /// assert_eq!(span.canonical_start(), Some(1));
    /// assert_eq!(span.canonical_end(), None);
    /// ```
    pub fn span(&self) -> Option<Interval<T>> {
        let first = self.intervals.first()?;

        let mut latest = *first;
        for entry in &self.intervals[1..] {
            match order::cmp_canonical_ends(entry.canonical_end(), latest.canonical_end()) {
                Ordering::Greater => latest = *entry,
                Ordering::Equal => {
                    if entry.end().is_closed() && !latest.end().is_closed() {
                        latest = *entry;
                    }
                }
                Ordering::Less => {}
            }
        }

        Some(Interval::new_unchecked(first.start(), latest.end()))
    }

    /// Returns `true` if any entry covers `point`.
    #[inline]
    pub fn contains(&self, point: T) -> bool {
        self.intervals.iter().any(|entry| entry.contains(point))
    }

    /// Returns the entries in their current sorted (possibly unmerged)
    /// order. This is the surface a serializer consumes.
    #[inline]
    pub fn intervals(&self) -> &[Interval<T>] {
        &self.intervals
    }

    /// Returns an iterator over the entries.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Interval<T>> {
        self.intervals.iter()
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Returns `true` if the collection has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }
}

impl<T> Default for IntervalCollection<T>
where
    T: Timeline,
{
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> FromIterator<Interval<T>> for IntervalCollection<T>
where
    T: Timeline,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Interval<T>>,
    {
        let mut intervals: Vec<Interval<T>> = iter.into_iter().collect();
        intervals.sort_by(order::entry_ordering);
        Self { intervals }
    }
}

impl<'a, T> IntoIterator for &'a IntervalCollection<T>
where
    T: Timeline,
{
    type Item = &'a Interval<T>;
    type IntoIter = std::slice::Iter<'a, Interval<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

impl<T> fmt::Display for IntervalCollection<T>
where
    T: Timeline + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (index, interval) in self.intervals.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", interval)?;
        }
        write!(f, "}}")
    }
}
