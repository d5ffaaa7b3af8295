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

//! # Indexed Iteration

/// Iteration with a running, zero-based index.
///
/// Blanket-implemented for every `Iterator`.
pub trait IndexedExt: Iterator + Sized {
    /// Calls `action(index, element)` for every element, in iteration order,
    /// with `index` starting at `0`.
    ///
    /// The iterator is consumed front to back, so single-pass sources are
    /// visited exactly once and random access is never required.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqext::prelude::*;
    ///
    /// let mut lines = Vec::new();
    /// ["a", "b", "c"].into_iter().for_each_indexed(|i, s| lines.push(format!("{i}:{s}")));
    /// assert_eq!(lines, ["0:a", "1:b", "2:c"]);
    /// ```
    #[inline]
    fn for_each_indexed<F>(self, mut action: F)
    where
        F: FnMut(usize, Self::Item),
    {
        self.enumerate().for_each(|(index, item)| action(index, item));
    }
}

impl<I> IndexedExt for I where I: Iterator {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_each_indexed_pairs() {
        let mut seen = Vec::new();
        ["a", "b", "c"]
            .iter()
            .for_each_indexed(|i, s| seen.push((i, *s)));
        assert_eq!(seen, vec![(0, "a"), (1, "b"), (2, "c")]);
    }

    #[test]
    fn test_for_each_indexed_empty() {
        let mut calls = 0;
        std::iter::empty::<i32>().for_each_indexed(|_, _| calls += 1);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_for_each_indexed_single_pass_source() {
        // A source that can only be drained once.
        let mut remaining = 3;
        let source = std::iter::from_fn(|| {
            if remaining == 0 {
                None
            } else {
                remaining -= 1;
                Some(remaining * 10)
            }
        });

        let mut seen = Vec::new();
        source.for_each_indexed(|i, x| seen.push((i, x)));
        assert_eq!(seen, vec![(0, 20), (1, 10), (2, 0)]);
    }
}
