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

//! # Chronoset Core
//!
//! Boundary-aware interval primitives over discretely steppable, totally
//! ordered axes. This crate provides the building blocks consumed by the
//! collection algorithms in `chronoset-windows` and instantiated by the
//! concrete temporal flavors in `chronoset-axes`.
//!
//! ## Modules
//!
//! - `timeline`: The `Timeline` capability contract (a total order plus
//!   discrete successor/predecessor stepping) implemented by every point
//!   type an interval can range over, including the primitive integers.
//! - `boundary`: The `Boundary` endpoint variant (closed, open, or
//!   unbounded toward past/future) and its canonical closed forms.
//! - `interval`: The validated `Interval` boundary pair with overlap,
//!   abutment, intersection, difference, and membership operations.
//! - `order`: Comparators that extend the point order with the infinite
//!   endpoints (`None` on a start compares as the infinite past, `None`
//!   on an end as the infinite future).
//!
//! ## Design
//!
//! All types are plain immutable values. Fallible construction returns
//! `Result`; once an `Interval` exists, its canonical start never exceeds
//! its canonical end, and every algorithm downstream may rely on `None`
//! canonical forms meaning "unbounded" rather than "degenerate".

pub mod boundary;
pub mod interval;
pub mod order;
pub mod timeline;

pub use boundary::{Boundary, Direction};
pub use interval::{Interval, InvalidIntervalError};
pub use timeline::Timeline;
