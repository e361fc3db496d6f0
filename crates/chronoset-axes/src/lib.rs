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

//! # Chronoset Axes
//!
//! Concrete temporal flavors for the chronoset interval algebra. Each
//! flavor is a small immutable value type that implements the
//! [`Timeline`](chronoset_core::Timeline) contract, so the generic
//! collection algorithms work on all of them through one code path:
//!
//! - [`CalendarDay`]: a proleptic Gregorian calendar date at day
//!   precision, stored as an epoch-day serial.
//! - [`JulianDate`]: a proleptic Julian calendar date at day precision,
//!   with BC/AD era field mapping.
//! - [`Timestamp`]: a uniformly spaced tick axis generic over the tick
//!   integer; the default `i64` instantiation counts nanoseconds.
//!
//! The calendar rules themselves (leap years, month lengths, era
//! mapping) live in this crate only; nothing downstream knows them.

pub mod calendar;
pub mod date;
pub mod julian;
pub mod timestamp;

pub use calendar::InvalidDateError;
pub use date::CalendarDay;
pub use julian::{Era, JulianDate};
pub use timestamp::Timestamp;
