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

//! # Seqext
//!
//! Extension operations for ordered sequences that the standard `Iterator`
//! API does not provide. Every operation is a pure function of its input: it
//! consumes an iterator (and any callbacks) and returns a value or a new
//! collection, never mutating the source.
//!
//! ## Modules
//!
//! - `aggregate`: Sums and averages of projected values (`sum_by`,
//!   `checked_sum_by`, `sum_by_double`, `average_by`).
//! - `chunk`: Lazy partitioning into owned, fixed-size chunks (`chunked`).
//! - `count`: Predicate counting and an eager filter (`count_where`, `filtered`).
//! - `indexed`: Indexed iteration (`for_each_indexed`).
//! - `access`: Positional, first, and last lookup with a fallback or `Option`
//!   (`element_at_or_else`, `first_or_none`, `last_or_else`, ...).
//! - `group`: Insertion-ordered key grouping (`group_by`,
//!   `group_by_transform`) and its result type `Grouping<K, V>`.
//! - `extremum`: Minimum and maximum by comparator with a documented tie
//!   policy (`min_with`, `max_with`).
//! - `text`: The same operations over the characters of a `str`, plus
//!   `repeated`, `reversed`, and `to_char_list`.
//! - `num`: Validation of integer size, index, and count arguments.
//! - `error`: `SequenceError`, the invalid-argument error.
//!
//! ## Absent values versus errors
//!
//! "No element" is a normal outcome: an empty input or an index past the end
//! yields `None` or the caller's fallback. Only integer arguments that violate
//! their contract (a negative index, a chunk size of zero) produce a
//! `SequenceError`, and they do so before any element is read.
//!
//! ## Usage
//!
//! ```rust
//! use seqext::prelude::*;
//!
//! let orders = [("tea", 3), ("coffee", 5), ("tea", 2)];
//!
//! assert_eq!(orders.iter().sum_by(|(_, qty)| *qty), 10);
//! assert_eq!(orders.iter().average_by(|(_, qty)| *qty as f64), Some(10.0 / 3.0));
//!
//! let by_item = orders.iter().group_by_transform(|(item, _)| *item, |(_, qty)| *qty);
//! assert_eq!(by_item["tea"], [3, 2]);
//!
//! let pages: Vec<Vec<_>> = orders.iter().chunked(2)?.collect();
//! assert_eq!(pages.len(), 2);
//! # Ok::<(), seqext::error::SequenceError>(())
//! ```

pub mod access;
pub mod aggregate;
pub mod chunk;
pub mod count;
pub mod error;
pub mod extremum;
pub mod group;
pub mod indexed;
pub mod num;
pub mod text;

/// Brings every extension trait into scope.
pub mod prelude {
    pub use crate::access::AccessExt;
    pub use crate::aggregate::AggregateExt;
    pub use crate::chunk::{ChunkExt, Chunked};
    pub use crate::count::CountExt;
    pub use crate::error::SequenceError;
    pub use crate::extremum::ExtremumExt;
    pub use crate::group::{GroupExt, Grouping};
    pub use crate::indexed::IndexedExt;
    pub use crate::text::CharSequenceExt;
}
