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

//! # Integer Arguments
//!
//! Operations that take a size, an index, or a count accept any primitive
//! integer type (`i32`, `usize`, `i64`, ...). Unsigned callers get the
//! natural API, while signed callers may pass negative values, which are
//! rejected at runtime with a `SequenceError` rather than wrapping around.
//!
//! `SizeArg` is blanket-implemented for every `num_traits::PrimInt`, so it
//! never needs to be named at call sites; it only appears in bounds.
//!
//! ```rust
//! use seqext::num::SizeArg;
//! use seqext::error::SequenceError;
//!
//! assert_eq!(3_i32.to_index(), Ok(Some(3)));
//! assert_eq!((-1_i64).to_index(), Err(SequenceError::NegativeIndex(-1)));
//! assert_eq!(0_u8.to_chunk_size(), Err(SequenceError::InvalidChunkSize(0)));
//! ```

use crate::error::SequenceError;
use num_traits::PrimInt;

/// Widens `value` to `i128` for error reporting.
///
/// Only values above `i128::MAX` (large `u128`) do not fit; those are never
/// negative, so they never reach an error path, and saturate here.
#[inline(always)]
fn widen<N>(value: N) -> i128
where
    N: PrimInt,
{
    value.to_i128().unwrap_or(i128::MAX)
}

/// Validation of primitive integer arguments used as sizes, indices and counts.
///
/// # Examples
///
/// ```rust
/// use seqext::num::SizeArg;
///
/// assert_eq!(4_u64.to_chunk_size(), Ok(4));
/// assert_eq!(2_i16.to_count(), Ok(2));
/// ```
pub trait SizeArg: PrimInt {
    /// Converts `self` into an element index.
    ///
    /// Returns `Ok(None)` when the value is non-negative but exceeds
    /// `usize::MAX`; such an index is out of range for every sequence.
    ///
    /// # Errors
    ///
    /// `SequenceError::NegativeIndex` if `self < 0`.
    #[inline]
    fn to_index(self) -> Result<Option<usize>, SequenceError> {
        if self < Self::zero() {
            return Err(SequenceError::NegativeIndex(widen(self)));
        }
        Ok(self.to_usize())
    }

    /// Converts `self` into a chunk size.
    ///
    /// Sizes above `usize::MAX` saturate, since no sequence can hold more
    /// elements than that anyway.
    ///
    /// # Errors
    ///
    /// `SequenceError::InvalidChunkSize` if `self <= 0`.
    #[inline]
    fn to_chunk_size(self) -> Result<usize, SequenceError> {
        if self <= Self::zero() {
            return Err(SequenceError::InvalidChunkSize(widen(self)));
        }
        Ok(self.to_usize().unwrap_or(usize::MAX))
    }

    /// Converts `self` into a repeat count.
    ///
    /// # Errors
    ///
    /// - `SequenceError::NegativeCount` if `self < 0`.
    /// - `SequenceError::CapacityOverflow` if `self` exceeds `usize::MAX`.
    #[inline]
    fn to_count(self) -> Result<usize, SequenceError> {
        if self < Self::zero() {
            return Err(SequenceError::NegativeCount(widen(self)));
        }
        self.to_usize().ok_or(SequenceError::CapacityOverflow)
    }
}

impl<N> SizeArg for N where N: PrimInt {}
