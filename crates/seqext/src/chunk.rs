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

//! # Chunking
//!
//! `Chunked<I>` partitions a sequence into consecutive, owned `Vec` chunks of
//! a fixed size. Only the final chunk may be shorter; it holds the remainder.
//! An empty sequence yields no chunks at all, not a single empty chunk.
//!
//! Chunking is the one lazy operation of the crate: elements are pulled from
//! the source only when the next chunk is requested. Every chunk is an
//! independent copy, so it stays valid regardless of what happens to the
//! source afterwards.
//!
//! ## Highlights
//!
//! - Number of chunks is `ceil(len / size)`, reflected in `size_hint`.
//! - `ExactSizeIterator` and `FusedIterator` when the source provides them.
//! - Clone-friendly when the source iterator is `Clone`.
//!
//! ## Usage
//!
//! ```rust
//! use seqext::prelude::*;
//!
//! let chunks: Vec<Vec<i32>> = (1..=7).chunked(3)?.collect();
//! assert_eq!(chunks, vec![vec![1, 2, 3], vec![4, 5, 6], vec![7]]);
//! # Ok::<(), seqext::error::SequenceError>(())
//! ```

use crate::{error::SequenceError, num::SizeArg};
use std::iter::FusedIterator;

/// An iterator over fixed-size, owned chunks of another iterator.
///
/// Created by [`ChunkExt::chunked`].
///
/// # Examples
///
/// ```rust
/// use seqext::prelude::*;
///
/// let mut chunks = ["a", "b", "c", "d"].into_iter().chunked(2)?;
/// assert_eq!(chunks.len(), 2);
/// assert_eq!(chunks.next(), Some(vec!["a", "b"]));
/// assert_eq!(chunks.next(), Some(vec!["c", "d"]));
/// assert_eq!(chunks.next(), None);
/// # Ok::<(), seqext::error::SequenceError>(())
/// ```
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Chunked<I> {
    iter: I,
    size: usize,
}

impl<I> Chunked<I> {
    /// Creates a new `Chunked` adapter.
    #[inline]
    fn new(iter: I, size: usize) -> Self {
        debug_assert!(size > 0, "called `Chunked::new` with a chunk size of zero");
        Self { iter, size }
    }

    /// Returns the chunk size.
    #[inline]
    pub fn chunk_size(&self) -> usize {
        self.size
    }
}

impl<I> Iterator for Chunked<I>
where
    I: Iterator,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        // The lower bound keeps absurd chunk sizes from over-allocating.
        let capacity = self.size.min(self.iter.size_hint().0.max(1));
        let mut chunk = Vec::with_capacity(capacity);
        chunk.extend(self.iter.by_ref().take(self.size));
        if chunk.is_empty() {
            None
        } else {
            Some(chunk)
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lo, hi) = self.iter.size_hint();
        (lo.div_ceil(self.size), hi.map(|h| h.div_ceil(self.size)))
    }
}

impl<I> FusedIterator for Chunked<I> where I: FusedIterator {}

impl<I> ExactSizeIterator for Chunked<I>
where
    I: ExactSizeIterator,
{
    #[inline]
    fn len(&self) -> usize {
        self.iter.len().div_ceil(self.size)
    }
}

/// Partitioning of a sequence into fixed-size chunks.
///
/// Blanket-implemented for every `Iterator`.
pub trait ChunkExt: Iterator + Sized {
    /// Returns an iterator over consecutive chunks of `size` elements.
    ///
    /// The last chunk holds the remaining `len % size` elements, or `size`
    /// elements if `size` divides the length evenly.
    ///
    /// # Errors
    ///
    /// `SequenceError::InvalidChunkSize` if `size <= 0`. The source is not
    /// touched in that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqext::prelude::*;
    /// use seqext::error::SequenceError;
    ///
    /// let v = vec![1, 2, 3, 4];
    /// let chunks: Vec<Vec<&i32>> = v.iter().chunked(2)?.collect();
    /// assert_eq!(chunks, vec![vec![&1, &2], vec![&3, &4]]);
    ///
    /// assert_eq!(v.iter().chunked(-1).unwrap_err(), SequenceError::InvalidChunkSize(-1));
    /// # Ok::<(), SequenceError>(())
    /// ```
    #[inline]
    fn chunked<S>(self, size: S) -> Result<Chunked<Self>, SequenceError>
    where
        S: SizeArg,
    {
        let size = size.to_chunk_size()?;
        Ok(Chunked::new(self, size))
    }
}

impl<I> ChunkExt for I where I: Iterator {}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn concatenated_chunks_reproduce_source(
            data in proptest::collection::vec(any::<u16>(), 0..200),
            size in 1_usize..20,
        ) {
            let chunks: Vec<Vec<u16>> = data.iter().copied().chunked(size).unwrap().collect();
            let flat: Vec<u16> = chunks.concat();
            prop_assert_eq!(flat, data);
        }

        #[test]
        fn chunk_lengths_and_count(
            data in proptest::collection::vec(any::<u8>(), 0..200),
            size in 1_usize..20,
        ) {
            let chunks: Vec<Vec<u8>> = data.iter().copied().chunked(size).unwrap().collect();
            prop_assert_eq!(chunks.len(), data.len().div_ceil(size));
            if let Some((last, init)) = chunks.split_last() {
                prop_assert!(init.iter().all(|c| c.len() == size));
                prop_assert!(!last.is_empty() && last.len() <= size);
            }
        }

        #[test]
        fn non_positive_sizes_are_rejected(size in i64::MIN..=0) {
            let result = (0..4).chunked(size);
            prop_assert_eq!(result.unwrap_err(), SequenceError::InvalidChunkSize(size as i128));
        }
    }
}
