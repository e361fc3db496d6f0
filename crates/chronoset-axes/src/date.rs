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

use crate::calendar::{self, InvalidDateError};
use chronoset_core::Timeline;
use std::fmt;

/// A proleptic Gregorian calendar date at day precision.
///
/// Internally a single epoch-day serial (1970-01-01 = 0), so ordering
/// and stepping are plain integer operations; the calendar fields are
/// derived on demand.
///
/// # Examples
///
/// ```rust
/// use chronoset_axes::CalendarDay;
/// use chronoset_core::Timeline;
///
/// let day = CalendarDay::from_ymd(2014, 2, 28).unwrap();
/// assert_eq!(day.step_forward(), CalendarDay::from_ymd(2014, 3, 1).ok());
///
/// // 1900 is not a Gregorian leap year.
/// assert!(CalendarDay::from_ymd(1900, 2, 29).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalendarDay(i64);

impl CalendarDay {
    /// Creates a calendar day from proleptic year, month, and day of
    /// month.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDateError`] if the month is outside `1..=12` or
    /// the day does not exist in that month of that year.
    pub fn from_ymd(year: i64, month: u32, day: u32) -> Result<Self, InvalidDateError> {
        calendar::check_fields(
            "gregorian",
            calendar::gregorian_days_in_month,
            year,
            month,
            day,
        )?;
        Ok(Self(calendar::gregorian_to_serial(year, month, day)))
    }

    /// Creates a calendar day directly from an epoch-day serial.
    #[inline]
    pub const fn from_epoch_days(days: i64) -> Self {
        Self(days)
    }

    /// Returns the epoch-day serial (1970-01-01 = 0).
    #[inline]
    pub const fn epoch_days(self) -> i64 {
        self.0
    }

    /// Returns the proleptic year.
    #[inline]
    pub fn year(self) -> i64 {
        self.ymd().0
    }

    /// Returns the month, `1..=12`.
    #[inline]
    pub fn month(self) -> u32 {
        self.ymd().1
    }

    /// Returns the day of month, `1..=31`.
    #[inline]
    pub fn day(self) -> u32 {
        self.ymd().2
    }

    /// Returns all three calendar fields at once.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chronoset_axes::CalendarDay;
    ///
    /// let day = CalendarDay::from_epoch_days(0);
    /// assert_eq!(day.ymd(), (1970, 1, 1));
    /// ```
    #[inline]
    pub fn ymd(self) -> (i64, u32, u32) {
        calendar::gregorian_from_serial(self.0)
    }
}

impl Timeline for CalendarDay {
    #[inline]
    fn step_forward(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }

    #[inline]
    fn step_backward(self) -> Option<Self> {
        self.0.checked_sub(1).map(Self)
    }
}

impl fmt::Display for CalendarDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (year, month, day) = self.ymd();
        if year < 0 {
            write!(f, "-{:04}-{:02}-{:02}", -year, month, day)
        } else {
            write!(f, "{:04}-{:02}-{:02}", year, month, day)
        }
    }
}

impl From<CalendarDay> for i64 {
    #[inline]
    fn from(day: CalendarDay) -> Self {
        day.epoch_days()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ymd_validates_fields() {
        assert!(CalendarDay::from_ymd(2014, 2, 28).is_ok());
        assert!(CalendarDay::from_ymd(2014, 2, 29).is_err());
        assert!(CalendarDay::from_ymd(2000, 2, 29).is_ok());
        assert!(CalendarDay::from_ymd(1900, 2, 29).is_err());
        assert!(CalendarDay::from_ymd(2014, 0, 1).is_err());
        assert!(CalendarDay::from_ymd(2014, 4, 31).is_err());
    }

    #[test]
    fn test_field_round_trip() {
        let day = CalendarDay::from_ymd(2014, 6, 1).unwrap();
        assert_eq!(day.year(), 2014);
        assert_eq!(day.month(), 6);
        assert_eq!(day.day(), 1);
    }

    #[test]
    fn test_ordering_follows_the_calendar() {
        let feb27 = CalendarDay::from_ymd(2014, 2, 27).unwrap();
        let feb28 = CalendarDay::from_ymd(2014, 2, 28).unwrap();
        let jun1 = CalendarDay::from_ymd(2014, 6, 1).unwrap();
        assert!(feb27 < feb28);
        assert!(feb28 < jun1);
    }

    #[test]
    fn test_stepping_crosses_month_and_year_ends() {
        let feb28 = CalendarDay::from_ymd(2014, 2, 28).unwrap();
        assert_eq!(feb28.step_forward(), CalendarDay::from_ymd(2014, 3, 1).ok());

        let dec31 = CalendarDay::from_ymd(2014, 12, 31).unwrap();
        assert_eq!(dec31.step_forward(), CalendarDay::from_ymd(2015, 1, 1).ok());

        let jan1 = CalendarDay::from_ymd(2014, 1, 1).unwrap();
        assert_eq!(jan1.step_backward(), CalendarDay::from_ymd(2013, 12, 31).ok());
    }

    #[test]
    fn test_stepping_stops_at_serial_extremes() {
        assert_eq!(CalendarDay::from_epoch_days(i64::MAX).step_forward(), None);
        assert_eq!(CalendarDay::from_epoch_days(i64::MIN).step_backward(), None);
    }

    #[test]
    fn test_display() {
        let day = CalendarDay::from_ymd(2014, 2, 28).unwrap();
        assert_eq!(format!("{}", day), "2014-02-28");

        let bc = CalendarDay::from_ymd(-44, 3, 15).unwrap();
        assert_eq!(format!("{}", bc), "-0044-03-15");
    }
}
