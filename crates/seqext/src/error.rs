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

//! # Sequence Errors
//!
//! The single error type of the crate. Only caller-contract violations on
//! integer arguments end up here: a chunk size that is not positive, a
//! negative element index, or a negative repeat count. "No element" outcomes
//! such as an empty input or an index past the end are not errors; they are
//! reported through `Option` or the caller's fallback.
//!
//! Offending values are widened to `i128` so that one error type serves every
//! primitive integer argument type.

use std::fmt::Display;

/// The error type for invalid arguments passed to sequence operations.
///
/// Every variant is returned before the first element of the input is read,
/// so an `Err` never comes with a partial result.
///
/// # Examples
///
/// ```rust
/// use seqext::error::SequenceError;
/// use seqext::prelude::*;
///
/// let err = [1, 2, 3].iter().chunked(0).unwrap_err();
/// assert_eq!(err, SequenceError::InvalidChunkSize(0));
/// assert_eq!(err.to_string(), "Chunk size must be a positive integer, got 0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SequenceError {
    /// The requested chunk size was zero or negative.
    InvalidChunkSize(i128),
    /// The requested element index was negative.
    NegativeIndex(i128),
    /// The requested repeat count was negative.
    NegativeCount(i128),
    /// The result would not fit into addressable memory.
    CapacityOverflow,
}

impl SequenceError {
    /// Returns the offending argument value, if the error carries one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use seqext::error::SequenceError;
    /// assert_eq!(SequenceError::NegativeIndex(-3).value(), Some(-3));
    /// assert_eq!(SequenceError::CapacityOverflow.value(), None);
    /// ```
    #[inline]
    pub fn value(&self) -> Option<i128> {
        match *self {
            Self::InvalidChunkSize(v) | Self::NegativeIndex(v) | Self::NegativeCount(v) => Some(v),
            Self::CapacityOverflow => None,
        }
    }
}

impl Display for SequenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidChunkSize(size) => {
                write!(f, "Chunk size must be a positive integer, got {}", size)
            }
            Self::NegativeIndex(index) => {
                write!(f, "Index must be non-negative, got {}", index)
            }
            Self::NegativeCount(count) => {
                write!(f, "Count must be non-negative, got {}", count)
            }
            Self::CapacityOverflow => write!(f, "Result length exceeds addressable memory"),
        }
    }
}

impl std::error::Error for SequenceError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            SequenceError::InvalidChunkSize(-1).to_string(),
            "Chunk size must be a positive integer, got -1"
        );
        assert_eq!(
            SequenceError::NegativeIndex(-7).to_string(),
            "Index must be non-negative, got -7"
        );
        assert_eq!(
            SequenceError::NegativeCount(-2).to_string(),
            "Count must be non-negative, got -2"
        );
        assert_eq!(
            SequenceError::CapacityOverflow.to_string(),
            "Result length exceeds addressable memory"
        );
    }

    #[test]
    fn test_value() {
        assert_eq!(SequenceError::InvalidChunkSize(0).value(), Some(0));
        assert_eq!(SequenceError::NegativeCount(-9).value(), Some(-9));
        assert_eq!(SequenceError::CapacityOverflow.value(), None);
    }

    #[test]
    fn test_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: E) {}
        assert_error(SequenceError::NegativeIndex(-1));

        let boxed: Box<dyn std::error::Error> = Box::new(SequenceError::CapacityOverflow);
        assert!(boxed.source().is_none());
    }
}
