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

/// The historic era of a Julian calendar date.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Era {
    /// Before Christ; year of era `n` is proleptic year `1 - n`.
    Bc,
    /// Anno Domini; year of era equals the proleptic year.
    Ad,
}

/// A proleptic Julian calendar date at day precision.
///
/// The Julian rule inserts a leap day every fourth year with no century
/// exception, so dates such as 1900-02-29 exist on this axis but not on
/// [`CalendarDay`](crate::CalendarDay). Stored as a serial on its own
/// axis (Julian 1970-01-01 = 0); the two day axes are never mixed.
///
/// # Examples
///
/// ```rust
/// use chronoset_axes::{Era, JulianDate};
///
/// let date = JulianDate::from_ymd(1900, 2, 29).unwrap();
/// assert_eq!(date.era(), Era::Ad);
///
/// // Proleptic year 0 is BC 1.
/// let caesar = JulianDate::from_ymd(0, 6, 15).unwrap();
/// assert_eq!(caesar.era(), Era::Bc);
/// assert_eq!(caesar.year_of_era(), 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JulianDate(i64);

impl JulianDate {
    /// Creates a Julian date from proleptic year, month, and day of
    /// month.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDateError`] if the month is outside `1..=12` or
    /// the day does not exist in that month under the Julian leap rule.
    pub fn from_ymd(year: i64, month: u32, day: u32) -> Result<Self, InvalidDateError> {
        calendar::check_fields("julian", calendar::julian_days_in_month, year, month, day)?;
        Ok(Self(calendar::julian_to_serial(year, month, day)))
    }

    /// Creates a Julian date from era-based fields.
    ///
    /// AD year `n` maps to proleptic year `n`; BC year `n` maps to
    /// proleptic year `1 - n`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDateError`] if `year_of_era` is not positive or
    /// the remaining fields are out of range.
    pub fn from_era_ymd(
        era: Era,
        year_of_era: i64,
        month: u32,
        day: u32,
    ) -> Result<Self, InvalidDateError> {
        let proleptic = match era {
            Era::Ad => year_of_era,
            Era::Bc => 1 - year_of_era,
        };
        if year_of_era < 1 {
            return Err(InvalidDateError::new("julian", proleptic, month, day));
        }
        Self::from_ymd(proleptic, month, day)
    }

    /// Creates a Julian date directly from its serial.
    #[inline]
    pub const fn from_serial(serial: i64) -> Self {
        Self(serial)
    }

    /// Returns the serial on the Julian axis (Julian 1970-01-01 = 0).
    #[inline]
    pub const fn serial(self) -> i64 {
        self.0
    }

    /// Returns the era of this date.
    #[inline]
    pub fn era(self) -> Era {
        if self.proleptic_year() >= 1 {
            Era::Ad
        } else {
            Era::Bc
        }
    }

    /// Returns the year counted within the era, always positive.
    #[inline]
    pub fn year_of_era(self) -> i64 {
        let proleptic = self.proleptic_year();
        if proleptic >= 1 {
            proleptic
        } else {
            1 - proleptic
        }
    }

    /// Returns the proleptic year (0 = BC 1, -1 = BC 2, ...).
    #[inline]
    pub fn proleptic_year(self) -> i64 {
        self.ymd().0
    }

    /// Returns the month, `1..=12`.
    #[inline]
    pub fn month(self) -> u32 {
        self.ymd().1
    }

    /// Returns the day of month, `1..=31`.
    #[inline]
    pub fn day_of_month(self) -> u32 {
        self.ymd().2
    }

    /// Returns all three proleptic calendar fields at once.
    #[inline]
    pub fn ymd(self) -> (i64, u32, u32) {
        calendar::julian_from_serial(self.0)
    }
}

impl Timeline for JulianDate {
    #[inline]
    fn step_forward(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }

    #[inline]
    fn step_backward(self) -> Option<Self> {
        self.0.checked_sub(1).map(Self)
    }
}

impl fmt::Display for JulianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let era = match self.era() {
            Era::Ad => "AD",
            Era::Bc => "BC",
        };
        let (_, month, day) = self.ymd();
        write!(f, "{}-{:04}-{:02}-{:02}", era, self.year_of_era(), month, day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_julian_leap_day_exists_in_century_years() {
        assert!(JulianDate::from_ymd(1900, 2, 29).is_ok());
        assert!(JulianDate::from_ymd(2014, 2, 29).is_err());
    }

    #[test]
    fn test_era_mapping() {
        assert_eq!(JulianDate::from_ymd(2014, 1, 1).unwrap().era(), Era::Ad);
        assert_eq!(JulianDate::from_ymd(2014, 1, 1).unwrap().year_of_era(), 2014);

        let year_zero = JulianDate::from_ymd(0, 1, 1).unwrap();
        assert_eq!(year_zero.era(), Era::Bc);
        assert_eq!(year_zero.year_of_era(), 1);

        let caesar = JulianDate::from_ymd(-43, 3, 15).unwrap();
        assert_eq!(caesar.era(), Era::Bc);
        assert_eq!(caesar.year_of_era(), 44);
    }

    #[test]
    fn test_from_era_ymd_round_trips() {
        let ad = JulianDate::from_era_ymd(Era::Ad, 1972, 2, 29).unwrap();
        assert_eq!(ad, JulianDate::from_ymd(1972, 2, 29).unwrap());

        let bc = JulianDate::from_era_ymd(Era::Bc, 44, 3, 15).unwrap();
        assert_eq!(bc, JulianDate::from_ymd(-43, 3, 15).unwrap());

        assert!(JulianDate::from_era_ymd(Era::Ad, 0, 1, 1).is_err());
        assert!(JulianDate::from_era_ymd(Era::Bc, 0, 1, 1).is_err());
    }

    #[test]
    fn test_stepping_crosses_the_julian_leap_day() {
        let feb28 = JulianDate::from_ymd(1900, 2, 28).unwrap();
        let feb29 = feb28.step_forward().unwrap();
        assert_eq!(feb29.ymd(), (1900, 2, 29));
        assert_eq!(feb29.step_forward().unwrap().ymd(), (1900, 3, 1));
    }

    #[test]
    fn test_display() {
        let date = JulianDate::from_ymd(1972, 2, 29).unwrap();
        assert_eq!(format!("{}", date), "AD-1972-02-29");

        let caesar = JulianDate::from_ymd(-43, 3, 15).unwrap();
        assert_eq!(format!("{}", caesar), "BC-0044-03-15");
    }
}
