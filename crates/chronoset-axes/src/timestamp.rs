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

use crate::date::CalendarDay;
use chronoset_core::Timeline;
use num_traits::{CheckedAdd, CheckedSub, PrimInt, Signed};
use std::fmt;

/// A point on a uniformly spaced tick axis.
///
/// The axis is generic over the tick integer so callers can trade range
/// for width; the default `i64` instantiation counts nanoseconds since
/// 1970-01-01T00:00:00 and spans the years 1677 to 2262. One step of the
/// timeline is exactly one tick, which is what makes open timestamp
/// boundaries canonicalize to "one nanosecond inward".
///
/// # Examples
///
/// ```rust
/// use chronoset_axes::Timestamp;
/// use chronoset_core::Timeline;
///
/// let t = Timestamp::from_ticks(1_000_i64);
/// assert_eq!(t.step_backward(), Some(Timestamp::from_ticks(999)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp<T = i64>(T)
where
    T: PrimInt + Signed;

impl<T> Timestamp<T>
where
    T: PrimInt + Signed,
{
    /// Creates a timestamp from a raw tick count.
    #[inline]
    pub fn from_ticks(ticks: T) -> Self {
        Self(ticks)
    }

    /// Returns the raw tick count.
    #[inline]
    pub fn ticks(self) -> T {
        self.0
    }
}

impl Timestamp<i64> {
    /// Nanoseconds per second on the default axis.
    pub const NANOS_PER_SECOND: i64 = 1_000_000_000;

    /// Nanoseconds per civil day on the default axis.
    pub const NANOS_PER_DAY: i64 = 86_400 * Self::NANOS_PER_SECOND;

    /// Returns the first nanosecond of the given calendar day, or `None`
    /// if the day lies outside the representable nanosecond range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chronoset_axes::{CalendarDay, Timestamp};
    ///
    /// let day = CalendarDay::from_ymd(1970, 1, 2).unwrap();
    /// let midnight = Timestamp::at_start_of_day(day).unwrap();
    /// assert_eq!(midnight.ticks(), Timestamp::NANOS_PER_DAY);
    /// ```
    #[inline]
    pub fn at_start_of_day(day: CalendarDay) -> Option<Self> {
        day.epoch_days()
            .checked_mul(Self::NANOS_PER_DAY)
            .map(Self)
    }
}

impl<T> Timeline for Timestamp<T>
where
    T: PrimInt + Signed + CheckedAdd + CheckedSub + fmt::Debug,
{
    #[inline]
    fn step_forward(self) -> Option<Self> {
        self.0.checked_add(&T::one()).map(Self)
    }

    #[inline]
    fn step_backward(self) -> Option<Self> {
        self.0.checked_sub(&T::one()).map(Self)
    }
}

impl<T> fmt::Display for Timestamp<T>
where
    T: PrimInt + Signed + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timestamp({})", self.0)
    }
}
