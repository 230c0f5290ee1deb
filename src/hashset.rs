//! Chained hash set with sorted buckets.
//!
//! This module provides [`HashSet`], a mutable hash set that resolves
//! collisions by separate chaining. Each slot holds a [`Bucket`] that keeps
//! its values in ascending order (by default a [`SortedList`]).
//!
//! # Overview
//!
//! - A value lives in slot `slot_of(value, slot_count)`.
//! - Each instance carries its own load factor. When an insert pushes the
//!   element count above `slot_count * load_factor`, the table is rebuilt
//!   with `2 * slot_count + 1` slots before `insert` returns.
//! - Iteration visits slots in index order and, within a slot, values in
//!   ascending order. Rehashing changes slot assignment, so the overall order
//!   is only stable between rehashes.
//!
//! # Time Complexity
//!
//! | Operation  | Complexity                     |
//! |------------|--------------------------------|
//! | `contains` | O(1) expected, O(bucket) worst |
//! | `insert`   | O(1) amortized expected        |
//! | `remove`   | O(1) expected, O(bucket) worst |
//! | `len`      | O(1)                           |
//! | rehash     | O(n)                           |
//!
//! # Examples
//!
//! ```rust
//! use slotset::HashSet;
//!
//! let mut set = HashSet::with_load_factor(2, 2).unwrap();
//! for value in 1..=5 {
//!     assert!(set.insert(value));
//! }
//!
//! // The fifth insert crossed the threshold of 4 and grew the table.
//! assert_eq!(set.slot_count(), 5);
//! assert_eq!(set.len(), 5);
//! assert!(!set.insert(3));
//!
//! assert_eq!(set.remove(&3), Some(3));
//! assert_eq!(set.remove(&3), None);
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

use crate::bucket::Bucket;
use crate::config::HashSetConfig;
use crate::error::SetError;
use crate::slot::slot_of;
use crate::sorted_list::SortedList;

// =============================================================================
// HashSet Definition
// =============================================================================

/// A hash set using separate chaining with ordered buckets.
///
/// `B` is the bucket type; it defaults to [`SortedList<T>`]. Every slot's
/// bucket is allocated at construction and again at each rehash.
///
/// # Examples
///
/// ```rust
/// use slotset::HashSet;
///
/// let mut set = HashSet::new(1).unwrap();
/// set.insert(10);
/// set.insert(5);
/// set.insert(7);
///
/// // A single slot means a single bucket, which is kept sorted.
/// let values: Vec<&i32> = set.iter().collect();
/// assert_eq!(values, vec![&5, &7, &10]);
/// ```
pub struct HashSet<T, B = SortedList<T>> {
    table: Vec<B>,
    count: usize,
    load_factor: usize,
    marker: PhantomData<T>,
}

static_assertions::assert_impl_all!(HashSet<i32>: Send, Sync);
static_assertions::assert_impl_all!(HashSet<String>: Send, Sync);
static_assertions::assert_not_impl_any!(HashSet<std::rc::Rc<i32>>: Send, Sync);

impl<T: Ord> HashSet<T> {
    /// Creates an empty set with `initial_slots` buckets and the default
    /// load factor.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::InvalidArgument`] if `initial_slots` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slotset::HashSet;
    ///
    /// let set: HashSet<i32> = HashSet::new(7).unwrap();
    /// assert!(set.is_empty());
    /// assert_eq!(set.slot_count(), 7);
    ///
    /// assert!(HashSet::<i32>::new(0).is_err());
    /// ```
    pub fn new(initial_slots: usize) -> Result<Self, SetError> {
        Self::with_config(HashSetConfig::new(initial_slots))
    }

    /// Creates an empty set with `initial_slots` buckets that rehashes once
    /// the average bucket holds more than `load_factor` values.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::InvalidArgument`] if either argument is zero.
    pub fn with_load_factor(initial_slots: usize, load_factor: usize) -> Result<Self, SetError> {
        Self::with_config(HashSetConfig::new(initial_slots).load_factor(load_factor))
    }

    /// Creates an empty set from a [`HashSetConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`SetError::InvalidArgument`] if the config does not
    /// [`validate`](HashSetConfig::validate).
    pub fn with_config(config: HashSetConfig) -> Result<Self, SetError> {
        Self::with_bucket_config(config)
    }
}

impl<T, B: Bucket<T>> HashSet<T, B> {
    /// Creates an empty set that stores each slot in a `B`.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::InvalidArgument`] if the config does not
    /// [`validate`](HashSetConfig::validate).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slotset::{HashSet, HashSetConfig, SortedList};
    ///
    /// let set: HashSet<u8, SortedList<u8>> =
    ///     HashSet::with_bucket_config(HashSetConfig::new(3)).unwrap();
    /// assert_eq!(set.slot_count(), 3);
    /// ```
    pub fn with_bucket_config(config: HashSetConfig) -> Result<Self, SetError> {
        config.validate()?;
        tracing::trace!(
            initial_slots = config.initial_slots,
            load_factor = config.load_factor,
            "creating hash set"
        );
        Ok(Self {
            table: new_table(config.initial_slots),
            count: 0,
            load_factor: config.load_factor,
            marker: PhantomData,
        })
    }

    /// Returns the number of values in the set.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.count
    }

    /// Returns `true` if the set contains no values.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns the current number of slots.
    #[inline]
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.table.len()
    }

    /// Returns the configured load factor.
    #[inline]
    #[must_use]
    pub const fn load_factor(&self) -> usize {
        self.load_factor
    }

    /// Returns the element count above which the next insert rehashes.
    #[inline]
    #[must_use]
    pub fn threshold(&self) -> usize {
        self.table.len().saturating_mul(self.load_factor)
    }

    /// Returns the config that would rebuild an empty set of the current
    /// shape.
    #[must_use]
    pub fn config(&self) -> HashSetConfig {
        HashSetConfig::new(self.table.len()).load_factor(self.load_factor)
    }

    /// Enumerates every slot with its bucket, in slot index order.
    ///
    /// Meant for diagnostics: it exposes how values are spread across slots.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slotset::HashSet;
    ///
    /// let mut set = HashSet::new(3).unwrap();
    /// set.extend([1, 2, 3, 4]);
    ///
    /// let total: usize = set.slots().map(|(_, bucket)| bucket.len()).sum();
    /// assert_eq!(total, set.len());
    /// assert_eq!(set.slots().count(), 3);
    /// ```
    pub fn slots(&self) -> std::iter::Enumerate<std::slice::Iter<'_, B>> {
        self.table.iter().enumerate()
    }

    /// Returns an iterator over the values.
    ///
    /// Values come slot by slot, each bucket in ascending order.
    #[must_use]
    pub fn iter(&self) -> HashSetIterator<'_, T, B> {
        HashSetIterator {
            slots: self.table.iter(),
            current: None,
            remaining: self.count,
        }
    }
}

impl<T: Hash + Ord, B: Bucket<T>> HashSet<T, B> {
    fn bucket<Q>(&self, key: &Q) -> &B
    where
        Q: Hash + ?Sized,
    {
        &self.table[slot_of(key, self.table.len())]
    }

    fn bucket_mut<Q>(&mut self, key: &Q) -> &mut B
    where
        Q: Hash + ?Sized,
    {
        let slot = slot_of(key, self.table.len());
        &mut self.table[slot]
    }

    /// Returns `true` if the set contains a value equal to `key`.
    ///
    /// The key may be any borrowed form of the value type, but `Hash` and
    /// `Ord` on the borrowed form must match those for the value type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slotset::HashSet;
    ///
    /// let mut set = HashSet::new(4).unwrap();
    /// set.insert("hello".to_string());
    ///
    /// assert!(set.contains("hello"));
    /// assert!(!set.contains("world"));
    /// ```
    #[must_use]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Ord + ?Sized,
    {
        self.bucket(key).contains(key)
    }

    /// Returns a reference to the stored value equal to `key`.
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Hash + Ord + ?Sized,
    {
        self.bucket(key).get(key)
    }

    /// Inserts `value` unless an equal value is already present.
    ///
    /// Returns `true` if the value was inserted. If the insert pushes the
    /// element count above [`threshold`](Self::threshold), the table is
    /// rehashed before this returns.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slotset::HashSet;
    ///
    /// let mut set = HashSet::new(5).unwrap();
    /// assert!(set.insert(42));
    /// assert!(!set.insert(42));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let bucket = self.bucket_mut(&value);
        if bucket.contains(&value) {
            return false;
        }
        bucket.insert_sorted(value);
        self.count += 1;

        if self.count > self.threshold() {
            self.rehash();
        }
        true
    }

    /// Removes and returns the value equal to `key`.
    ///
    /// Returns `None` if no such value is stored, whether or not its bucket
    /// is empty.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Hash + Ord + ?Sized,
    {
        let removed = self.bucket_mut(key).remove_by_key(key)?;
        self.count -= 1;
        Some(removed)
    }

    /// Rebuilds the table with `2 * slots + 1` slots and moves every value
    /// to its slot under the new count.
    fn rehash(&mut self) {
        let old_slots = self.table.len();
        let new_slots = old_slots.saturating_mul(2).saturating_add(1);
        tracing::debug!(old_slots, new_slots, count = self.count, "rehashing");

        let old_table = std::mem::replace(&mut self.table, new_table(new_slots));
        for bucket in old_table {
            for value in bucket {
                let slot = slot_of(&value, new_slots);
                self.table[slot].insert_sorted(value);
            }
        }
    }
}

impl<T: Hash + Ord + Clone, B: Bucket<T>> HashSet<T, B> {
    /// Returns a copy of the stored value equal to `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slotset::HashSet;
    ///
    /// let mut set = HashSet::new(3).unwrap();
    /// set.insert(String::from("kiwi"));
    ///
    /// assert_eq!(set.find("kiwi"), Some(String::from("kiwi")));
    /// assert_eq!(set.find("plum"), None);
    /// ```
    #[must_use]
    pub fn find<Q>(&self, key: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Hash + Ord + ?Sized,
    {
        self.get(key).cloned()
    }
}

fn new_table<B: Default>(slots: usize) -> Vec<B> {
    std::iter::repeat_with(B::default).take(slots).collect()
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over the values of a [`HashSet`].
pub struct HashSetIterator<'a, T, B>
where
    B: Bucket<T> + 'a,
    T: 'a,
{
    slots: std::slice::Iter<'a, B>,
    current: Option<B::Iter<'a>>,
    remaining: usize,
}

impl<'a, T, B> Iterator for HashSetIterator<'a, T, B>
where
    B: Bucket<T> + 'a,
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(value) = self.current.as_mut().and_then(Iterator::next) {
                self.remaining -= 1;
                return Some(value);
            }
            self.current = Some(self.slots.next()?.iter());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T, B> ExactSizeIterator for HashSetIterator<'a, T, B>
where
    B: Bucket<T> + 'a,
    T: 'a,
{
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<'a, T, B> Clone for HashSetIterator<'a, T, B>
where
    B: Bucket<T> + 'a,
    T: 'a,
{
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            current: self.current.clone(),
            remaining: self.remaining,
        }
    }
}

/// An owning iterator over the values of a [`HashSet`].
pub struct HashSetIntoIterator<T, B: Bucket<T>> {
    slots: std::vec::IntoIter<B>,
    current: Option<<B as IntoIterator>::IntoIter>,
    remaining: usize,
    marker: PhantomData<T>,
}

impl<T, B: Bucket<T>> Iterator for HashSetIntoIterator<T, B> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(value) = self.current.as_mut().and_then(Iterator::next) {
                self.remaining -= 1;
                return Some(value);
            }
            self.current = Some(self.slots.next()?.into_iter());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, B: Bucket<T>> ExactSizeIterator for HashSetIntoIterator<T, B> {
    fn len(&self) -> usize {
        self.remaining
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T, B: Bucket<T>> IntoIterator for HashSet<T, B> {
    type Item = T;
    type IntoIter = HashSetIntoIterator<T, B>;

    fn into_iter(self) -> Self::IntoIter {
        HashSetIntoIterator {
            slots: self.table.into_iter(),
            current: None,
            remaining: self.count,
            marker: PhantomData,
        }
    }
}

impl<'a, T, B> IntoIterator for &'a HashSet<T, B>
where
    B: Bucket<T> + 'a,
    T: 'a,
{
    type Item = &'a T;
    type IntoIter = HashSetIterator<'a, T, B>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Hash + Ord, B: Bucket<T>> Extend<T> for HashSet<T, B> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T, B: Clone> Clone for HashSet<T, B> {
    fn clone(&self) -> Self {
        Self {
            table: self.table.clone(),
            count: self.count,
            load_factor: self.load_factor,
            marker: PhantomData,
        }
    }
}

impl<T: Hash + Ord, B: Bucket<T>> PartialEq for HashSet<T, B> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|value| other.contains(value))
    }
}

impl<T: Hash + Ord, B: Bucket<T>> Eq for HashSet<T, B> {}

impl<T: fmt::Debug, B: Bucket<T>> fmt::Debug for HashSet<T, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display, B: Bucket<T>> fmt::Display for HashSet<T, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for value in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{value}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
struct SerializeValues<'a, T, B>(&'a HashSet<T, B>);

#[cfg(feature = "serde")]
impl<T: serde::Serialize, B: Bucket<T>> serde::Serialize for SerializeValues<'_, T, B> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.0.iter())
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize, B: Bucket<T>> serde::Serialize for HashSet<T, B> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("HashSet", 3)?;
        state.serialize_field("slots", &self.slot_count())?;
        state.serialize_field("load_factor", &self.load_factor)?;
        state.serialize_field("values", &SerializeValues(self))?;
        state.end()
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct HashSetRepr<T> {
    slots: usize,
    #[serde(default = "crate::config::default_load_factor")]
    load_factor: usize,
    values: Vec<T>,
}

#[cfg(feature = "serde")]
impl<'de, T, B> serde::Deserialize<'de> for HashSet<T, B>
where
    T: serde::Deserialize<'de> + Hash + Ord,
    B: Bucket<T>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;
        let repr = HashSetRepr::<T>::deserialize(deserializer)?;
        let config = HashSetConfig::new(repr.slots).load_factor(repr.load_factor);
        let mut set = Self::with_bucket_config(config).map_err(D::Error::custom)?;
        set.extend(repr.values);
        Ok(set)
    }
}

// =============================================================================
// Tests
// =============================================================================
