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

//! # Timeline Contract
//!
//! The capability contract every interval algorithm in this workspace is
//! written against. A `Timeline` point type carries a strict total order
//! (via `Ord`) plus discrete stepping to the next and previous
//! representable value. Stepping returns `None` only at the extreme
//! representable value of the type; the mathematically unbounded
//! endpoints of an interval are modeled separately by
//! [`Boundary::Infinite`](crate::boundary::Boundary), never by `None`
//! from a step.
//!
//! Concrete temporal flavors (calendar days, timestamps) each implement
//! this trait once; the signed and unsigned primitive integers implement
//! it as well, which keeps the generic algorithms testable without any
//! calendar machinery.

use std::fmt::Debug;

/// A point type on a discretely steppable, totally ordered axis.
///
/// # Contract
///
/// - `Ord` must be a strict total order.
/// - `step_forward` and `step_backward` must be mutual inverses wherever
///   both are defined: if `a.step_forward() == Some(b)` then
///   `b.step_backward() == Some(a)`.
/// - A step returns `None` only at the extreme representable value, so
///   `None` means "nothing representable beyond this point", never
///   "unbounded".
///
/// # Examples
///
/// ```rust
/// use chronoset_core::Timeline;
///
/// assert_eq!(5_i32.step_forward(), Some(6));
/// assert_eq!(5_i32.step_backward(), Some(4));
/// assert_eq!(i32::MAX.step_forward(), None);
/// ```
pub trait Timeline: Copy + Ord + Debug {
    /// Returns the next representable value, or `None` if `self` is the
    /// largest representable value of the type.
    fn step_forward(self) -> Option<Self>;

    /// Returns the previous representable value, or `None` if `self` is
    /// the smallest representable value of the type.
    fn step_backward(self) -> Option<Self>;
}

macro_rules! impl_timeline_for_primitive {
    ($($t:ty),* $(,)?) => {
        $(
            impl Timeline for $t {
                #[inline]
                fn step_forward(self) -> Option<Self> {
                    self.checked_add(1)
                }

                #[inline]
                fn step_backward(self) -> Option<Self> {
                    self.checked_sub(1)
                }
            }
        )*
    };
}

impl_timeline_for_primitive!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_forward_backward() {
        assert_eq!(0_i32.step_forward(), Some(1));
        assert_eq!(0_i32.step_backward(), Some(-1));
        assert_eq!(0_u8.step_backward(), None);
    }

    #[test]
    fn test_steps_stop_at_extremes() {
        assert_eq!(i8::MAX.step_forward(), None);
        assert_eq!(i8::MIN.step_backward(), None);
        assert_eq!(u64::MAX.step_forward(), None);
        assert_eq!(u64::MIN.step_backward(), None);
    }

    #[test]
    fn test_steps_are_mutual_inverses() {
        for v in [-3_i64, -1, 0, 1, 42] {
            let up = v.step_forward().unwrap();
            assert_eq!(up.step_backward(), Some(v));
            let down = v.step_backward().unwrap();
            assert_eq!(down.step_forward(), Some(v));
        }
    }
}
