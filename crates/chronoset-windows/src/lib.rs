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

//! # Chronoset Windows
//!
//! The `IntervalCollection` aggregate: an immutable, always-sorted
//! sequence of intervals over one timeline, with the derivations a
//! window calculus needs.
//!
//! ## Operations
//!
//! - **Union** (`plus`, `plus_all`): concatenate and re-sort; duplicates
//!   and overlaps are preserved verbatim because the derivations below
//!   need the raw multiset.
//! - **Blocks** (`with_blocks`): merge every run of overlapping or
//!   abutting entries into one maximal interval.
//! - **Gaps** (`with_gaps`): the finite closed intervals strictly
//!   between consecutive blocks.
//! - **Intersection** (`with_intersection`): the single region common to
//!   every entry, if any.
//! - **Subtraction** (`minus`): the covered region with one interval
//!   removed.
//! - **Extremes** (`minimum`, `maximum`, `span`): earliest and latest
//!   covered points, with an explicit sentinel for unbounded sides.
//!
//! ## Design
//!
//! Collections are plain immutable values: every operation returns a new
//! collection and never mutates its receiver, so instances can be shared
//! across threads freely. All derivations are a sort (`O(n log n)`) or a
//! single scan (`O(n)`) over the entry count.

pub mod collection;

pub use collection::{EmptyCollectionError, IntervalCollection};
