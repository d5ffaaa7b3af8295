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

//! # Extremum Selection
//!
//! Minimum and maximum by a caller-supplied comparator, returning `None` for
//! an empty sequence.
//!
//! ## Tie-breaking
//!
//! Both operations make a single linear pass holding the best candidate so
//! far. When several elements compare equal:
//!
//! - `min_with` returns the **first** minimal element,
//! - `max_with` returns the **last** maximal element.
//!
//! This is exactly what "stable sort, then take the first (or last) element"
//! yields, so the result is deterministic for every input, ties included,
//! while costing O(n) instead of O(n log n).
//!
//! ```rust
//! use seqext::prelude::*;
//!
//! let readings = [90, 10, 20, 30];
//! assert_eq!(readings.iter().min_with(|a, b| a.cmp(b)), Some(&10));
//! assert_eq!(readings.iter().max_with(|a, b| a.cmp(b)), Some(&90));
//! ```

use std::cmp::Ordering;

/// Minimum and maximum by comparator.
///
/// Blanket-implemented for every `Iterator`.
pub trait ExtremumExt: Iterator + Sized {
    /// Returns the minimal element according to `compare`, or `None` if the
    /// sequence is empty. Among equal minima the first one wins.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqext::prelude::*;
    ///
    /// let jobs = [("build", 3), ("lint", 1), ("test", 1)];
    /// let quickest = jobs.iter().min_with(|a, b| a.1.cmp(&b.1));
    /// assert_eq!(quickest, Some(&("lint", 1)));
    /// ```
    #[inline]
    fn min_with<F>(self, compare: F) -> Option<Self::Item>
    where
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        Iterator::min_by(self, compare)
    }

    /// Returns the maximal element according to `compare`, or `None` if the
    /// sequence is empty. Among equal maxima the last one wins.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqext::prelude::*;
    ///
    /// let jobs = [("build", 3), ("lint", 1), ("deploy", 3)];
    /// let slowest = jobs.iter().max_with(|a, b| a.1.cmp(&b.1));
    /// assert_eq!(slowest, Some(&("deploy", 3)));
    /// ```
    #[inline]
    fn max_with<F>(self, compare: F) -> Option<Self::Item>
    where
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        Iterator::max_by(self, compare)
    }
}

impl<I> ExtremumExt for I where I: Iterator {}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn agrees_with_stable_sort(data in proptest::collection::vec((0_u8..8, any::<u16>()), 0..64)) {
            let mut sorted = data.clone();
            sorted.sort_by(|a, b| a.0.cmp(&b.0));

            let min = data.iter().copied().min_with(|a, b| a.0.cmp(&b.0));
            let max = data.iter().copied().max_with(|a, b| a.0.cmp(&b.0));
            prop_assert_eq!(min, sorted.first().copied());
            prop_assert_eq!(max, sorted.last().copied());
        }
    }
}
