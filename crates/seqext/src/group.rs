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

//! # Key-Based Grouping
//!
//! Groups the elements of a sequence by a key computed from each element.
//! The result is a `Grouping<K, V>`: an insertion-ordered mapping from key to
//! the ordered list of values that share it.
//!
//! ## Ordering guarantees
//!
//! - Keys appear in the order of their first occurrence in the source.
//! - Inside a group, values appear in source order.
//! - Every element lands in exactly one group, so the total number of values
//!   equals the length of the source.
//!
//! ## Layout
//!
//! Groups are stored contiguously as `(K, Vec<V>)` pairs in insertion order,
//! with an `FxHashMap` from key to group slot for constant-time lookup. Keys
//! are stored in both places, hence the `K: Clone` bound on insertion.
//!
//! ## Usage
//!
//! ```rust
//! use seqext::prelude::*;
//!
//! let groups = [1, 2, 3, 97, 98, 99]
//!     .into_iter()
//!     .group_by(|n| if *n < 10 { "small" } else { "large" });
//!
//! assert_eq!(groups.keys().collect::<Vec<_>>(), [&"small", &"large"]);
//! assert_eq!(groups["small"], [1, 2, 3]);
//! assert_eq!(groups["large"], [97, 98, 99]);
//! ```

use rustc_hash::FxHashMap;
use std::{
    borrow::Borrow,
    fmt::Debug,
    hash::Hash,
    iter::FusedIterator,
    ops::Index,
};

/// An insertion-ordered mapping from keys to ordered lists of values.
///
/// Produced by [`GroupExt::group_by`] and [`GroupExt::group_by_transform`];
/// it can also be built directly from `(key, value)` pairs.
///
/// # Examples
///
/// ```rust
/// use seqext::group::Grouping;
///
/// let grouping: Grouping<char, &str> = [('f', "fig"), ('a', "apple"), ('f', "fennel")]
///     .into_iter()
///     .collect();
///
/// assert_eq!(grouping.len(), 2);
/// assert_eq!(grouping.get(&'f'), Some(&["fig", "fennel"][..]));
/// assert_eq!(grouping.get(&'z'), None);
/// ```
#[derive(Clone)]
pub struct Grouping<K, V> {
    groups: Vec<(K, Vec<V>)>,
    slots: FxHashMap<K, usize>,
}

impl<K, V> Grouping<K, V> {
    /// Creates an empty `Grouping`.
    #[inline]
    pub fn new() -> Self {
        Self {
            groups: Vec::new(),
            slots: FxHashMap::default(),
        }
    }

    /// Returns the number of groups (distinct keys).
    #[inline]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns `true` if there are no groups.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Returns the number of values across all groups.
    ///
    /// For a grouping built from a sequence this equals the sequence length.
    #[inline]
    pub fn total_len(&self) -> usize {
        self.groups.iter().map(|(_, values)| values.len()).sum()
    }

    /// Returns an iterator over the keys in first-occurrence order.
    #[inline]
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &K> + ExactSizeIterator {
        self.groups.iter().map(|(key, _)| key)
    }

    /// Returns an iterator over the value lists in key order.
    #[inline]
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &[V]> + ExactSizeIterator {
        self.groups.iter().map(|(_, values)| values.as_slice())
    }

    /// Returns an iterator over `(key, values)` pairs in key order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.groups.iter(),
        }
    }

    /// Consumes the grouping and returns its groups in key order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqext::prelude::*;
    ///
    /// let pairs = ["ant", "bee", "asp"].into_iter().group_by(|s| s.as_bytes()[0]).into_vec();
    /// assert_eq!(pairs, vec![(b'a', vec!["ant", "asp"]), (b'b', vec!["bee"])]);
    /// ```
    #[inline]
    pub fn into_vec(self) -> Vec<(K, Vec<V>)> {
        self.groups
    }
}

impl<K, V> Grouping<K, V>
where
    K: Hash + Eq,
{
    /// Creates an empty `Grouping` with room for `capacity` groups.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            groups: Vec::with_capacity(capacity),
            slots: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Returns the values of the group for `key`, if any.
    #[inline]
    pub fn get<Q>(&self, key: &Q) -> Option<&[V]>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let slot = *self.slots.get(key)?;
        self.groups.get(slot).map(|(_, values)| values.as_slice())
    }

    /// Returns the values of the group for `key` mutably, if any.
    ///
    /// Values can be modified or reordered but not added or removed, so a
    /// group never becomes empty.
    #[inline]
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut [V]>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let slot = *self.slots.get(key)?;
        self.groups
            .get_mut(slot)
            .map(|(_, values)| values.as_mut_slice())
    }

    /// Returns `true` if a group exists for `key`.
    #[inline]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.slots.contains_key(key)
    }
}

impl<K, V> Grouping<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Appends `value` to the group for `key`, creating the group at the end
    /// of the key order if `key` has not been seen before.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqext::group::Grouping;
    ///
    /// let mut grouping = Grouping::new();
    /// grouping.push("even", 2);
    /// grouping.push("odd", 1);
    /// grouping.push("even", 4);
    ///
    /// assert_eq!(grouping.keys().collect::<Vec<_>>(), [&"even", &"odd"]);
    /// assert_eq!(grouping["even"], [2, 4]);
    /// ```
    pub fn push(&mut self, key: K, value: V) {
        if let Some(&slot) = self.slots.get(&key) {
            debug_assert!(
                slot < self.groups.len(),
                "called `Grouping::push` with a slot index out of bounds"
            );
            self.groups[slot].1.push(value);
            return;
        }

        self.slots.insert(key.clone(), self.groups.len());
        self.groups.push((key, vec![value]));
    }
}

impl<K, V> Default for Grouping<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Debug for Grouping<K, V>
where
    K: Debug,
    V: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.groups.iter().map(|(key, values)| (key, values)))
            .finish()
    }
}

/// Two groupings are equal if they hold the same groups in the same key order.
impl<K, V> PartialEq for Grouping<K, V>
where
    K: PartialEq,
    V: PartialEq,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.groups == other.groups
    }
}

impl<K, V> Eq for Grouping<K, V>
where
    K: Eq,
    V: Eq,
{
}

impl<K, V, Q> Index<&Q> for Grouping<K, V>
where
    K: Hash + Eq + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
{
    type Output = [V];

    /// Returns the values of the group for `key`.
    ///
    /// # Panics
    ///
    /// Panics if there is no group for `key`, like `HashMap` indexing.
    #[inline]
    fn index(&self, key: &Q) -> &[V] {
        match self.get(key) {
            Some(values) => values,
            None => panic!("called `Grouping::index` with a key that has no group"),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Grouping<K, V>
where
    K: Hash + Eq + Clone,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut grouping = Self::new();
        grouping.extend(iter);
        grouping
    }
}

impl<K, V> Extend<(K, V)> for Grouping<K, V>
where
    K: Hash + Eq + Clone,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.push(key, value);
        }
    }
}

impl<K, V> IntoIterator for Grouping<K, V> {
    type Item = (K, Vec<V>);
    type IntoIter = std::vec::IntoIter<(K, Vec<V>)>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a Grouping<K, V> {
    type Item = (&'a K, &'a [V]);
    type IntoIter = Iter<'a, K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A borrowing iterator over the `(key, values)` pairs of a [`Grouping`].
///
/// Created by [`Grouping::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a, K, V> {
    inner: std::slice::Iter<'a, (K, Vec<V>)>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a [V]);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(key, values)| (key, values.as_slice()))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner
            .next_back()
            .map(|(key, values)| (key, values.as_slice()))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// Grouping of sequence elements by key.
///
/// Blanket-implemented for every `Iterator`.
pub trait GroupExt: Iterator + Sized {
    /// Groups the elements by `key_selector`, keeping the elements themselves
    /// as values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqext::prelude::*;
    ///
    /// let by_len = ["to", "be", "or", "not"].into_iter().group_by(|w| w.len());
    /// assert_eq!(by_len[&2], ["to", "be", "or"]);
    /// assert_eq!(by_len[&3], ["not"]);
    /// ```
    #[inline]
    fn group_by<K, F>(self, key_selector: F) -> Grouping<K, Self::Item>
    where
        K: Hash + Eq + Clone,
        F: FnMut(&Self::Item) -> K,
    {
        self.group_by_transform(key_selector, |item| item)
    }

    /// Groups the elements by `key_selector`, storing `value_transform(element)`
    /// in each group.
    ///
    /// The source is traversed once; each element's key is computed before
    /// the element is handed to `value_transform`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqext::prelude::*;
    ///
    /// let people = [("ada", 36), ("alan", 41), ("grace", 85)];
    /// let ages = people
    ///     .into_iter()
    ///     .group_by_transform(|(name, _)| name.chars().next(), |(_, age)| age);
    ///
    /// assert_eq!(ages[&Some('a')], [36, 41]);
    /// assert_eq!(ages[&Some('g')], [85]);
    /// ```
    fn group_by_transform<K, V, F, T>(
        self,
        mut key_selector: F,
        mut value_transform: T,
    ) -> Grouping<K, V>
    where
        K: Hash + Eq + Clone,
        F: FnMut(&Self::Item) -> K,
        T: FnMut(Self::Item) -> V,
    {
        let mut grouping = Grouping::new();
        for item in self {
            let key = key_selector(&item);
            grouping.push(key, value_transform(item));
        }
        grouping
    }
}

impl<I> GroupExt for I where I: Iterator {}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Shipment {
        port: &'static str,
        weight: u32,
    }

    fn shipments() -> Vec<Shipment> {
        vec![
            Shipment { port: "HAM", weight: 10 },
            Shipment { port: "RTM", weight: 7 },
            Shipment { port: "HAM", weight: 3 },
            Shipment { port: "ANR", weight: 1 },
            Shipment { port: "RTM", weight: 12 },
        ]
    }

    #[test]
    fn test_group_by_small_large() {
        let groups = [1, 2, 3, 97, 98, 99]
            .into_iter()
            .group_by(|n| if *n < 10 { "small" } else { "large" });

        let expected: Grouping<&str, i32> = [
            ("small", 1),
            ("small", 2),
            ("small", 3),
            ("large", 97),
            ("large", 98),
            ("large", 99),
        ]
        .into_iter()
        .collect();

        assert_eq!(groups, expected);
        assert_eq!(
            groups.into_vec(),
            vec![("small", vec![1, 2, 3]), ("large", vec![97, 98, 99])]
        );
    }

    #[test]
    fn test_group_by_key_order_is_first_occurrence() {
        let groups = shipments().into_iter().group_by(|s| s.port);
        assert_eq!(groups.keys().copied().collect::<Vec<_>>(), ["HAM", "RTM", "ANR"]);
    }

    #[test]
    fn test_group_by_value_order_is_source_order() {
        let groups = shipments().into_iter().group_by(|s| s.port);
        let ham: Vec<u32> = groups["HAM"].iter().map(|s| s.weight).collect();
        let rtm: Vec<u32> = groups["RTM"].iter().map(|s| s.weight).collect();
        assert_eq!(ham, [10, 3]);
        assert_eq!(rtm, [7, 12]);
    }

    #[test]
    fn test_group_by_transform() {
        let weights = shipments()
            .iter()
            .group_by_transform(|s| s.port, |s| s.weight);
        assert_eq!(weights.get("HAM"), Some(&[10, 3][..]));
        assert_eq!(weights.get("ANR"), Some(&[1][..]));
        assert_eq!(weights.get("LEH"), None);
    }

    #[test]
    fn test_group_by_transform_key_computed_before_transform() {
        let mut log = Vec::new();
        let log_ref = std::cell::RefCell::new(&mut log);
        let _ = (0..2).group_by_transform(
            |x| {
                log_ref.borrow_mut().push(format!("key {x}"));
                x % 2
            },
            |x| {
                log_ref.borrow_mut().push(format!("value {x}"));
                x
            },
        );
        drop(log_ref);
        assert_eq!(log, ["key 0", "value 0", "key 1", "value 1"]);
    }

    #[test]
    fn test_group_by_empty() {
        let groups = std::iter::empty::<i32>().group_by(|x| *x);
        assert!(groups.is_empty());
        assert_eq!(groups.len(), 0);
        assert_eq!(groups.total_len(), 0);
        assert_eq!(groups, Grouping::default());
    }

    #[test]
    fn test_total_len_equals_source_len() {
        let groups = shipments().into_iter().group_by(|s| s.weight % 2);
        assert_eq!(groups.total_len(), 5);
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn test_contains_key_and_get_mut() {
        let mut groups = (1..=6).group_by(|x| x % 3);
        assert!(groups.contains_key(&0));
        assert!(!groups.contains_key(&3));

        if let Some(values) = groups.get_mut(&1) {
            values.reverse();
        }
        assert_eq!(groups[&1], [4, 1]);
        assert!(groups.get_mut(&7).is_none());
    }

    #[test]
    #[should_panic(expected = "has no group")]
    fn test_index_missing_key_panics() {
        let groups = (1..=3).group_by(|x| *x);
        let _ = &groups[&4];
    }

    #[test]
    fn test_iter_and_values() {
        let groups = ["a1", "b1", "a2"].into_iter().group_by(|s| s.as_bytes()[0]);

        let pairs: Vec<(&u8, &[&str])> = groups.iter().collect();
        assert_eq!(pairs, vec![(&b'a', &["a1", "a2"][..]), (&b'b', &["b1"][..])]);

        let values: Vec<&[&str]> = groups.values().collect();
        assert_eq!(values, vec![&["a1", "a2"][..], &["b1"][..]]);

        let mut iter = groups.iter();
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.next_back().map(|(k, _)| *k), Some(b'b'));
        assert_eq!(iter.len(), 1);
    }

    #[test]
    fn test_into_iterator_impls() {
        let groups = (0..5).group_by(|x| x % 2 == 0);

        let mut borrowed = 0;
        for (_, values) in &groups {
            borrowed += values.len();
        }
        assert_eq!(borrowed, 5);

        let owned: Vec<(bool, Vec<i32>)> = groups.into_iter().collect();
        assert_eq!(owned, vec![(true, vec![0, 2, 4]), (false, vec![1, 3])]);
    }

    #[test]
    fn test_extend_appends_to_existing_groups() {
        let mut groups = ["x", "y"].into_iter().group_by(|s| s.len());
        groups.extend([(1, "z"), (2, "zz")]);
        assert_eq!(groups[&1], ["x", "y", "z"]);
        assert_eq!(groups[&2], ["zz"]);
        assert_eq!(groups.keys().copied().collect::<Vec<_>>(), [1, 2]);
    }

    #[test]
    fn test_with_capacity() {
        let mut groups: Grouping<u8, u8> = Grouping::with_capacity(16);
        assert!(groups.is_empty());
        groups.push(1, 1);
        assert_eq!(groups.len(), 1);
    }

    #[test]
    fn test_equality_is_order_sensitive() {
        let a: Grouping<i32, i32> = [(1, 1), (2, 2)].into_iter().collect();
        let b: Grouping<i32, i32> = [(2, 2), (1, 1)].into_iter().collect();
        assert_ne!(a, b);
    }

    #[test]
    fn test_debug_format() {
        let groups = [1, 2, 3, 97, 98, 99]
            .into_iter()
            .group_by(|n| if *n < 10 { "small" } else { "large" });
        assert_eq!(
            format!("{:?}", groups),
            r#"{"small": [1, 2, 3], "large": [97, 98, 99]}"#
        );
    }
}
