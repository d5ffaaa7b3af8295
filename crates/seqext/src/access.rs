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

//! # Safe Positional Access
//!
//! Element lookup by position, first, and last that never panics on a
//! missing element. Each lookup comes in two flavors:
//!
//! - `*_or_else(fallback)` returns the element or the value produced by the
//!   caller's fallback closure, which is invoked only when no element exists.
//! - `*_or_none()` returns an `Option`. It is defined as the `*_or_else`
//!   variant over `Some`-wrapped elements with a fallback of `None`, so both
//!   flavors share one code path.
//!
//! A negative index is a caller error and is reported as
//! `SequenceError::NegativeIndex` without invoking the fallback. An index past
//! the end is a normal outcome and triggers the fallback.
//!
//! ```rust
//! use seqext::prelude::*;
//!
//! let v = [10, 20, 30];
//! assert_eq!(v.iter().element_at_or_none(1), Ok(Some(&20)));
//! assert_eq!(v.iter().element_at_or_none(3), Ok(None));
//! assert!(v.iter().element_at_or_none(-1).is_err());
//! assert_eq!(v.iter().last_or_none(), Some(&30));
//! ```

use crate::{error::SequenceError, num::SizeArg};

/// Lookup of positional, first, and last elements with a fallback.
///
/// Blanket-implemented for every `Iterator`. Lookups delegate to
/// `Iterator::nth` and `Iterator::last`, which are constant time for slice and
/// vector iterators.
pub trait AccessExt: Iterator + Sized {
    /// Returns the element at `index`, or `fallback()` if the sequence has no
    /// such element.
    ///
    /// `fallback` is never invoked when the element exists.
    ///
    /// # Errors
    ///
    /// `SequenceError::NegativeIndex` if `index < 0`. Neither the source nor
    /// `fallback` is touched in that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqext::prelude::*;
    ///
    /// let names = ["ada", "grace"];
    /// assert_eq!(names.iter().copied().element_at_or_else(1, || "nobody"), Ok("grace"));
    /// assert_eq!(names.iter().copied().element_at_or_else(5, || "nobody"), Ok("nobody"));
    /// ```
    #[inline]
    fn element_at_or_else<N, F>(
        mut self,
        index: N,
        fallback: F,
    ) -> Result<Self::Item, SequenceError>
    where
        N: SizeArg,
        F: FnOnce() -> Self::Item,
    {
        let element = match index.to_index()? {
            Some(index) => self.nth(index),
            None => None,
        };
        Ok(element.unwrap_or_else(fallback))
    }

    /// Returns the element at `index`, or `None` if the sequence has no such
    /// element.
    ///
    /// # Errors
    ///
    /// `SequenceError::NegativeIndex` if `index < 0`.
    #[inline]
    fn element_at_or_none<N>(self, index: N) -> Result<Option<Self::Item>, SequenceError>
    where
        N: SizeArg,
    {
        self.map(Some).element_at_or_else(index, || None)
    }

    /// Returns the first element, or `fallback()` if the sequence is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqext::prelude::*;
    ///
    /// let queue: Vec<u32> = Vec::new();
    /// assert_eq!(queue.into_iter().first_or_else(|| 0), 0);
    /// ```
    #[inline]
    fn first_or_else<F>(mut self, fallback: F) -> Self::Item
    where
        F: FnOnce() -> Self::Item,
    {
        self.next().unwrap_or_else(fallback)
    }

    /// Returns the first element, or `None` if the sequence is empty.
    #[inline]
    fn first_or_none(self) -> Option<Self::Item> {
        self.map(Some).first_or_else(|| None)
    }

    /// Returns the last element, or `fallback()` if the sequence is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqext::prelude::*;
    ///
    /// assert_eq!((1..=3).last_or_else(|| -1), 3);
    /// assert_eq!((1..1).last_or_else(|| -1), -1);
    /// ```
    #[inline]
    fn last_or_else<F>(self, fallback: F) -> Self::Item
    where
        F: FnOnce() -> Self::Item,
    {
        self.last().unwrap_or_else(fallback)
    }

    /// Returns the last element, or `None` if the sequence is empty.
    #[inline]
    fn last_or_none(self) -> Option<Self::Item> {
        self.map(Some).last_or_else(|| None)
    }
}

impl<I> AccessExt for I where I: Iterator {}
