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

//! # Aggregation by Selector
//!
//! Folds that project every element to a number before accumulating it.
//! Integer and floating-point accumulation are kept apart: `sum_by` and
//! `checked_sum_by` work over `PrimInt` accumulators, `sum_by_double` and
//! `average_by` over `Float` accumulators.
//!
//! The average of an empty sequence has no value. `average_by` returns `None`
//! in that case instead of dividing by zero, so "no value" is never confused
//! with an average that happens to be `0.0`.
//!
//! ```rust
//! use seqext::prelude::*;
//!
//! let words = ["apple", "fig", "banana"];
//! assert_eq!(words.iter().sum_by(|w| w.len()), 14);
//! assert_eq!(words.iter().average_by(|w| w.len() as f64), Some(14.0 / 3.0));
//! assert_eq!(std::iter::empty::<&str>().average_by(|w| w.len() as f64), None);
//! ```

use num_traits::{Float, FromPrimitive, PrimInt};

/// Sum and average of projected element values.
///
/// Blanket-implemented for every `Iterator`.
pub trait AggregateExt: Iterator + Sized {
    /// Sums `selector(element)` over all elements using an integer accumulator
    /// that starts at zero.
    ///
    /// Returns zero for an empty sequence. Overflow behaves like the `+`
    /// operator of `N` (and thus like `Iterator::sum`); use
    /// [`checked_sum_by`](AggregateExt::checked_sum_by) to detect it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqext::prelude::*;
    ///
    /// let stock = [("bolt", 12_u32), ("nut", 30), ("washer", 8)];
    /// assert_eq!(stock.iter().sum_by(|(_, qty)| *qty), 50);
    /// ```
    #[inline]
    fn sum_by<N, F>(self, mut selector: F) -> N
    where
        N: PrimInt,
        F: FnMut(Self::Item) -> N,
    {
        self.fold(N::zero(), |acc, item| acc + selector(item))
    }

    /// Like [`sum_by`](AggregateExt::sum_by), but returns `None` as soon as the
    /// accumulator would overflow.
    ///
    /// Elements after the overflowing one are not visited.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqext::prelude::*;
    ///
    /// assert_eq!([100_u8, 100].iter().checked_sum_by(|x| *x), Some(200));
    /// assert_eq!([200_u8, 100].iter().checked_sum_by(|x| *x), None);
    /// ```
    #[inline]
    fn checked_sum_by<N, F>(self, mut selector: F) -> Option<N>
    where
        N: PrimInt,
        F: FnMut(Self::Item) -> N,
    {
        let mut acc = N::zero();
        for item in self {
            acc = acc.checked_add(&selector(item))?;
        }
        Some(acc)
    }

    /// Sums `selector(element)` over all elements using a floating-point
    /// accumulator that starts at `0.0`.
    ///
    /// Elements are added in iteration order; the result of an empty
    /// sequence is `0.0`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqext::prelude::*;
    ///
    /// let prices = [1.25_f64, 2.5, 0.25];
    /// assert_eq!(prices.iter().sum_by_double(|p| *p), 4.0);
    /// ```
    #[inline]
    fn sum_by_double<N, F>(self, mut selector: F) -> N
    where
        N: Float,
        F: FnMut(Self::Item) -> N,
    {
        self.fold(N::zero(), |acc, item| acc + selector(item))
    }

    /// Returns the arithmetic mean of `selector(element)`, or `None` if the
    /// sequence is empty.
    ///
    /// The sum is accumulated exactly as in
    /// [`sum_by_double`](AggregateExt::sum_by_double), so for a non-empty
    /// sequence the result equals `sum_by_double(selector) / len` bit for bit.
    /// The input is consumed in a single pass.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqext::prelude::*;
    ///
    /// let temps = [18.0_f64, 21.0, 24.0];
    /// assert_eq!(temps.iter().average_by(|t| *t), Some(21.0));
    ///
    /// let none: [f64; 0] = [];
    /// assert_eq!(none.iter().average_by(|t| *t), None);
    /// ```
    #[inline]
    fn average_by<N, F>(self, mut selector: F) -> Option<N>
    where
        N: Float + FromPrimitive,
        F: FnMut(Self::Item) -> N,
    {
        let (sum, len) = self.fold((N::zero(), 0_usize), |(sum, len), item| {
            (sum + selector(item), len + 1)
        });
        if len == 0 {
            return None;
        }
        N::from_usize(len).map(|n| sum / n)
    }
}

impl<I> AggregateExt for I where I: Iterator {}
