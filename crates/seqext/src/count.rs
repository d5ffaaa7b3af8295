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

//! # Counting and Filtering
//!
//! Predicate-based counting and an eager filter. The predicate-less count is
//! the standard `Iterator::count`; `count_where` adds the predicate form.
//! `filtered` is a thin, eagerly collecting wrapper around `Iterator::filter`,
//! so the two can never disagree.

/// Counting and filtering with predicates.
///
/// Blanket-implemented for every `Iterator`.
pub trait CountExt: Iterator + Sized {
    /// Returns the number of elements for which `predicate` returns `true`.
    ///
    /// The predicate is evaluated exactly once per element; counting never
    /// stops early.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqext::prelude::*;
    ///
    /// let scores = [12, 48, 7, 93, 51];
    /// assert_eq!(scores.iter().count_where(|s| **s >= 50), 2);
    /// assert_eq!(scores.iter().count(), 5);
    /// ```
    #[inline]
    fn count_where<P>(self, mut predicate: P) -> usize
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.fold(0, |n, item| n + usize::from(predicate(&item)))
    }

    /// Returns the elements for which `predicate` returns `true`, in their
    /// original order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqext::prelude::*;
    ///
    /// let odd: Vec<i32> = (1..=6).filtered(|n| n % 2 == 1);
    /// assert_eq!(odd, vec![1, 3, 5]);
    /// ```
    #[inline]
    fn filtered<P>(self, predicate: P) -> Vec<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.filter(predicate).collect()
    }
}

impl<I> CountExt for I where I: Iterator {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_where_basic() {
        let words = ["alpha", "beta", "gamma", "delta"];
        assert_eq!(words.iter().count_where(|w| w.ends_with('a')), 4);
        assert_eq!(words.iter().count_where(|w| w.starts_with('g')), 1);
        assert_eq!(words.iter().count_where(|w| w.is_empty()), 0);
    }

    #[test]
    fn test_count_where_empty() {
        assert_eq!(std::iter::empty::<u8>().count_where(|_| true), 0);
    }

    #[test]
    fn test_count_where_evaluates_every_element_once() {
        let mut calls = 0;
        let n = (0..10).count_where(|x| {
            calls += 1;
            *x < 3
        });
        assert_eq!(n, 3);
        assert_eq!(calls, 10);
    }

    #[test]
    fn test_filtered_preserves_order() {
        let kept = vec![5, 1, 4, 2, 3].into_iter().filtered(|x| *x > 2);
        assert_eq!(kept, vec![5, 4, 3]);
    }

    #[test]
    fn test_filtered_empty_result() {
        let kept = (0..5).filtered(|_| false);
        assert!(kept.is_empty());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn count_is_len(data in proptest::collection::vec(any::<i32>(), 0..100)) {
            prop_assert_eq!(data.iter().count(), data.len());
        }

        #[test]
        fn count_where_matches_filtered_len(
            data in proptest::collection::vec(any::<i32>(), 0..100),
            modulus in 1_i32..7,
        ) {
            let p = |x: &&i32| **x % modulus == 0;
            prop_assert_eq!(data.iter().count_where(p), data.iter().filtered(p).len());
        }
    }
}
