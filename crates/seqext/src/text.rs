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

//! # Character Sequences
//!
//! `CharSequenceExt` brings the sequence operations to string slices, working
//! on Unicode scalar values (`char`) rather than bytes. Positional, counting,
//! and chunking helpers delegate to the iterator operations over
//! `str::chars`, so they share the same contracts: negative indices and
//! non-positive chunk sizes are errors, out-of-range access falls back.
//!
//! ```rust
//! use seqext::prelude::*;
//!
//! assert_eq!("héllo".reversed(), "olléh");
//! assert_eq!("héllo".char_at_or_none(1), Ok(Some('é')));
//! assert_eq!("ab".repeated(3), Ok(String::from("ababab")));
//! ```

use crate::{
    access::AccessExt, chunk::ChunkExt, count::CountExt, error::SequenceError, num::SizeArg,
};

/// Sequence operations over the characters of a string slice.
pub trait CharSequenceExt {
    /// Returns the string repeated `count` times.
    ///
    /// # Errors
    ///
    /// - `SequenceError::NegativeCount` if `count < 0`.
    /// - `SequenceError::CapacityOverflow` if the result would not fit into
    ///   memory addressable by `usize`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqext::prelude::*;
    /// use seqext::error::SequenceError;
    ///
    /// assert_eq!("-".repeated(0), Ok(String::new()));
    /// assert_eq!("-".repeated(-2), Err(SequenceError::NegativeCount(-2)));
    /// ```
    fn repeated<N>(&self, count: N) -> Result<String, SequenceError>
    where
        N: SizeArg;

    /// Returns the characters in reverse order.
    fn reversed(&self) -> String;

    /// Returns the characters as a vector.
    fn to_char_list(&self) -> Vec<char>;

    /// Returns the character at `index`, or `fallback()` if there is none.
    ///
    /// # Errors
    ///
    /// `SequenceError::NegativeIndex` if `index < 0`.
    fn char_at_or_else<N, F>(&self, index: N, fallback: F) -> Result<char, SequenceError>
    where
        N: SizeArg,
        F: FnOnce() -> char;

    /// Returns the character at `index`, or `None` if there is none.
    ///
    /// # Errors
    ///
    /// `SequenceError::NegativeIndex` if `index < 0`.
    fn char_at_or_none<N>(&self, index: N) -> Result<Option<char>, SequenceError>
    where
        N: SizeArg;

    /// Returns the first character, or `fallback()` for an empty string.
    fn first_char_or_else<F>(&self, fallback: F) -> char
    where
        F: FnOnce() -> char;

    /// Returns the first character, or `None` for an empty string.
    fn first_char_or_none(&self) -> Option<char>;

    /// Returns the last character, or `fallback()` for an empty string.
    fn last_char_or_else<F>(&self, fallback: F) -> char
    where
        F: FnOnce() -> char;

    /// Returns the last character, or `None` for an empty string.
    fn last_char_or_none(&self) -> Option<char>;

    /// Returns the number of characters satisfying `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqext::prelude::*;
    ///
    /// assert_eq!("Hello World".count_chars_where(|c| c.is_uppercase()), 2);
    /// ```
    fn count_chars_where<P>(&self, predicate: P) -> usize
    where
        P: FnMut(&char) -> bool;

    /// Splits the string into consecutive pieces of `size` characters; the
    /// last piece holds the remainder. An empty string yields no pieces.
    ///
    /// # Errors
    ///
    /// `SequenceError::InvalidChunkSize` if `size <= 0`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqext::prelude::*;
    ///
    /// assert_eq!("abcde".chunked_chars(2), Ok(vec!["ab".to_string(), "cd".into(), "e".into()]));
    /// ```
    fn chunked_chars<N>(&self, size: N) -> Result<Vec<String>, SequenceError>
    where
        N: SizeArg;
}

impl CharSequenceExt for str {
    fn repeated<N>(&self, count: N) -> Result<String, SequenceError>
    where
        N: SizeArg,
    {
        let count = count.to_count()?;
        if self.len().checked_mul(count).is_none() {
            return Err(SequenceError::CapacityOverflow);
        }
        Ok(self.repeat(count))
    }

    #[inline]
    fn reversed(&self) -> String {
        self.chars().rev().collect()
    }

    #[inline]
    fn to_char_list(&self) -> Vec<char> {
        self.chars().collect()
    }

    #[inline]
    fn char_at_or_else<N, F>(&self, index: N, fallback: F) -> Result<char, SequenceError>
    where
        N: SizeArg,
        F: FnOnce() -> char,
    {
        self.chars().element_at_or_else(index, fallback)
    }

    #[inline]
    fn char_at_or_none<N>(&self, index: N) -> Result<Option<char>, SequenceError>
    where
        N: SizeArg,
    {
        self.chars().element_at_or_none(index)
    }

    #[inline]
    fn first_char_or_else<F>(&self, fallback: F) -> char
    where
        F: FnOnce() -> char,
    {
        self.chars().first_or_else(fallback)
    }

    #[inline]
    fn first_char_or_none(&self) -> Option<char> {
        self.chars().first_or_none()
    }

    #[inline]
    fn last_char_or_else<F>(&self, fallback: F) -> char
    where
        F: FnOnce() -> char,
    {
        self.chars().last_or_else(fallback)
    }

    #[inline]
    fn last_char_or_none(&self) -> Option<char> {
        self.chars().last_or_none()
    }

    #[inline]
    fn count_chars_where<P>(&self, predicate: P) -> usize
    where
        P: FnMut(&char) -> bool,
    {
        self.chars().count_where(predicate)
    }

    fn chunked_chars<N>(&self, size: N) -> Result<Vec<String>, SequenceError>
    where
        N: SizeArg,
    {
        Ok(self
            .chars()
            .chunked(size)?
            .map(|chunk| chunk.into_iter().collect())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated() {
        assert_eq!("ab".repeated(3), Ok(String::from("ababab")));
        assert_eq!("ab".repeated(0_u8), Ok(String::new()));
        assert_eq!("".repeated(1_000_000), Ok(String::new()));
        assert_eq!("ab".repeated(-1), Err(SequenceError::NegativeCount(-1)));
    }

    #[test]
    fn test_repeated_capacity_overflow() {
        assert_eq!("ab".repeated(usize::MAX), Err(SequenceError::CapacityOverflow));
        assert_eq!("ab".repeated(u128::MAX), Err(SequenceError::CapacityOverflow));
    }

    #[test]
    fn test_reversed() {
        assert_eq!("abc".reversed(), "cba");
        assert_eq!("".reversed(), "");
        assert_eq!("añb".reversed(), "bña");
    }

    #[test]
    fn test_to_char_list() {
        assert_eq!("añb".to_char_list(), vec!['a', 'ñ', 'b']);
        assert!("".to_char_list().is_empty());
    }

    #[test]
    fn test_char_at() {
        let s = "größe";
        assert_eq!(s.char_at_or_none(2), Ok(Some('ö')));
        assert_eq!(s.char_at_or_none(5), Ok(None));
        assert_eq!(s.char_at_or_else(9, || '_'), Ok('_'));
        assert_eq!(s.char_at_or_none(-2), Err(SequenceError::NegativeIndex(-2)));
    }

    #[test]
    fn test_first_and_last_char() {
        assert_eq!("xyz".first_char_or_none(), Some('x'));
        assert_eq!("xyz".last_char_or_none(), Some('z'));
        assert_eq!("".first_char_or_none(), None);
        assert_eq!("".last_char_or_none(), None);
        assert_eq!("".first_char_or_else(|| '#'), '#');
        assert_eq!("".last_char_or_else(|| '#'), '#');
    }

    #[test]
    fn test_count_chars_where() {
        assert_eq!("a1b2c3".count_chars_where(|c| c.is_ascii_digit()), 3);
        assert_eq!("".count_chars_where(|_| true), 0);
    }

    #[test]
    fn test_chunked_chars() {
        assert_eq!(
            "äbcdé".chunked_chars(2),
            Ok(vec!["äb".to_string(), "cd".to_string(), "é".to_string()])
        );
        assert_eq!("".chunked_chars(3), Ok(Vec::new()));
        assert_eq!("abc".chunked_chars(0), Err(SequenceError::InvalidChunkSize(0)));
    }
}
