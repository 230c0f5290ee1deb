//! Stable sorted list.
//!
//! This module provides [`SortedList`], an ordered sequence backed by a
//! contiguous vector. It is the default [`Bucket`] of
//! [`HashSet`](crate::HashSet) and a complete sorted-list type in its own
//! right.
//!
//! # Overview
//!
//! - Values are kept in ascending order.
//! - Insertion is stable: equal-ordering values keep their insertion order.
//! - Lookups binary-search the start of the order-equal run and then scan it
//!   with `==`, so the scan never goes past where the key could be.
//!
//! # Time Complexity
//!
//! | Operation      | Complexity |
//! |----------------|------------|
//! | `insert`       | O(n)       |
//! | `contains`     | O(log n + r), r = order-equal run length |
//! | `get` / `find` | O(log n + r) |
//! | `remove`       | O(n)       |
//! | `peek` / `min` | O(1)       |
//! | `max`          | O(log n)   |
//! | `len`          | O(1)       |
//!
//! # Examples
//!
//! ```rust
//! use slotset::SortedList;
//!
//! let mut list = SortedList::new();
//! list.insert(10);
//! list.insert(5);
//! list.insert(7);
//!
//! let values: Vec<&i32> = list.iter().collect();
//! assert_eq!(values, vec![&5, &7, &10]);
//!
//! assert_eq!(list.remove(&7), Some(7));
//! assert_eq!(list.remove(&7), None);
//! ```

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

use crate::bucket::Bucket;
use crate::error::EmptyContainerError;

// =============================================================================
// SortedList Definition
// =============================================================================

/// An ordered sequence with stable insertion.
///
/// # Examples
///
/// ```rust
/// use slotset::SortedList;
///
/// let list: SortedList<i32> = [3, 1, 2].into_iter().collect();
/// assert_eq!(list.peek(), Ok(&1));
/// assert_eq!(list.max(), Ok(&3));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SortedList<T> {
    values: Vec<T>,
}

impl<T> SortedList<T> {
    /// Creates a new empty list.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Returns the number of values in the list.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the list contains no values.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the value at `index`, counting from the front.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slotset::SortedList;
    ///
    /// let list: SortedList<char> = ['c', 'a', 'b'].into_iter().collect();
    /// assert_eq!(list.get_index(1), Some(&'b'));
    /// assert_eq!(list.get_index(3), None);
    /// ```
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<&T> {
        self.values.get(index)
    }

    /// Returns the first (smallest) value.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyContainerError`] if the list is empty.
    pub fn peek(&self) -> Result<&T, EmptyContainerError> {
        self.values
            .first()
            .ok_or(EmptyContainerError { operation: "peek" })
    }

    /// Returns the minimum value. Same as [`peek`](Self::peek).
    ///
    /// # Errors
    ///
    /// Returns [`EmptyContainerError`] if the list is empty.
    pub fn min(&self) -> Result<&T, EmptyContainerError> {
        self.values
            .first()
            .ok_or(EmptyContainerError { operation: "min" })
    }

    /// Removes and returns the last (largest) value.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyContainerError`] if the list is empty.
    pub fn pop(&mut self) -> Result<T, EmptyContainerError> {
        self.values
            .pop()
            .ok_or(EmptyContainerError { operation: "pop" })
    }

    /// Removes and returns the value at `index`, or `None` if `index` is out
    /// of range.
    pub fn pop_at(&mut self, index: usize) -> Option<T> {
        (index < self.values.len()).then(|| self.values.remove(index))
    }

    /// Removes and returns the first value.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyContainerError`] if the list is empty.
    pub fn remove_front(&mut self) -> Result<T, EmptyContainerError> {
        if self.values.is_empty() {
            return Err(EmptyContainerError {
                operation: "remove_front",
            });
        }
        Ok(self.values.remove(0))
    }

    /// Returns an iterator over the values in ascending order.
    #[must_use]
    pub fn iter(&self) -> SortedListIterator<'_, T> {
        SortedListIterator {
            inner: self.values.iter(),
        }
    }
}

impl<T: Ord> SortedList<T> {
    /// Inserts `value` at its sorted position.
    ///
    /// The value is placed after every value that compares `Equal` to it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slotset::SortedList;
    ///
    /// let mut list = SortedList::new();
    /// list.insert(2);
    /// list.insert(1);
    /// list.insert(2);
    /// assert_eq!(list.len(), 3);
    /// assert_eq!(list.count(&2), 2);
    /// ```
    pub fn insert(&mut self, value: T) {
        let position = self.values.partition_point(|existing| existing <= &value);
        self.values.insert(position, value);
    }

    /// Returns the position of the first value equal to `key`.
    ///
    /// The search binary-searches the start of the run of values that order
    /// equal to `key` and stops at the end of that run.
    pub fn index_of<Q>(&self, key: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let start = self
            .values
            .partition_point(|item| item.borrow().cmp(key) == Ordering::Less);
        self.values[start..]
            .iter()
            .take_while(|&item| item.borrow().cmp(key) == Ordering::Equal)
            .position(|item| item.borrow() == key)
            .map(|offset| start + offset)
    }

    /// Returns `true` if the list contains a value equal to `key`.
    #[must_use]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.index_of(key).is_some()
    }

    /// Returns a reference to the first value equal to `key`.
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.index_of(key).map(|index| &self.values[index])
    }

    /// Removes and returns the first value equal to `key`.
    ///
    /// Returns `None` when no value matches, including when the list is
    /// empty.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.index_of(key).map(|index| self.values.remove(index))
    }

    /// Returns the number of values equal to `key`.
    #[must_use]
    pub fn count<Q>(&self, key: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let start = self
            .values
            .partition_point(|item| item.borrow().cmp(key) == Ordering::Less);
        self.values[start..]
            .iter()
            .take_while(|&item| item.borrow().cmp(key) == Ordering::Equal)
            .filter(|&item| item.borrow() == key)
            .count()
    }

    /// Returns the maximum value.
    ///
    /// Among several values that order equal at the top, the earliest
    /// inserted one is returned.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyContainerError`] if the list is empty.
    pub fn max(&self) -> Result<&T, EmptyContainerError> {
        let last = self
            .values
            .last()
            .ok_or(EmptyContainerError { operation: "max" })?;
        let start = self.values.partition_point(|item| item < last);
        Ok(&self.values[start])
    }

    /// Removes duplicate values, keeping the first occurrence of each.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slotset::SortedList;
    ///
    /// let mut list: SortedList<i32> = [1, 2, 2, 3, 1].into_iter().collect();
    /// list.clean();
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    /// ```
    pub fn clean(&mut self) {
        let values = std::mem::take(&mut self.values);
        let mut kept: Vec<T> = Vec::with_capacity(values.len());
        for value in values {
            // Equal values share an order-equal run, which is the tail of `kept`.
            let duplicate = kept
                .iter()
                .rev()
                .take_while(|&existing| existing.cmp(&value) == Ordering::Equal)
                .any(|existing| *existing == value);
            if !duplicate {
                kept.push(value);
            }
        }
        self.values = kept;
    }
}

impl<T: Ord + Clone> SortedList<T> {
    /// Returns a copy of the first value equal to `key`.
    #[must_use]
    pub fn find<Q>(&self, key: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(key).cloned()
    }

    /// Returns a new list holding one copy of every value in either list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slotset::SortedList;
    ///
    /// let left: SortedList<i32> = [1, 2, 2].into_iter().collect();
    /// let right: SortedList<i32> = [2, 3].into_iter().collect();
    /// let union = left.union(&right);
    /// assert_eq!(union.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut merged = self.clone();
        merged.extend(other.iter().cloned());
        merged.clean();
        merged
    }

    /// Returns a new list holding one copy of every value present in both
    /// lists.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slotset::SortedList;
    ///
    /// let left: SortedList<i32> = [1, 2, 2, 3].into_iter().collect();
    /// let right: SortedList<i32> = [2, 3, 4].into_iter().collect();
    /// let common = left.intersection(&right);
    /// assert_eq!(common.iter().copied().collect::<Vec<_>>(), vec![2, 3]);
    /// ```
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let mut common: Self = self
            .iter()
            .filter(|value| other.contains(*value))
            .cloned()
            .collect();
        common.clean();
        common
    }
}

// =============================================================================
// Bucket Implementation
// =============================================================================

impl<T: Ord> Bucket<T> for SortedList<T> {
    type Iter<'a>
        = SortedListIterator<'a, T>
    where
        T: 'a;

    #[inline]
    fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    fn insert_sorted(&mut self, value: T) {
        self.insert(value);
    }

    fn get<Q>(&self, key: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        Self::get(self, key)
    }

    fn remove_by_key<Q>(&mut self, key: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.remove(key)
    }

    fn iter(&self) -> Self::Iter<'_> {
        Self::iter(self)
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over the values of a [`SortedList`] in ascending order.
pub struct SortedListIterator<'a, T> {
    inner: std::slice::Iter<'a, T>,
}

impl<T> Clone for SortedListIterator<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, T> Iterator for SortedListIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for SortedListIterator<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for SortedListIterator<'_, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

/// An owning iterator over the values of a [`SortedList`] in ascending order.
pub struct SortedListIntoIterator<T> {
    inner: std::vec::IntoIter<T>,
}

impl<T> Iterator for SortedListIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for SortedListIntoIterator<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for SortedListIntoIterator<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for SortedList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for SortedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T: Ord> Extend<T> for SortedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> IntoIterator for SortedList<T> {
    type Item = T;
    type IntoIter = SortedListIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        SortedListIntoIterator {
            inner: self.values.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a SortedList<T> {
    type Item = &'a T;
    type IntoIter = SortedListIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for SortedList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.values.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for SortedList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        for (index, value) in self.values.iter().enumerate() {
            if index > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{value}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for SortedList<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for value in &self.values {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct SortedListVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for SortedListVisitor<T>
where
    T: serde::Deserialize<'de> + Ord,
{
    type Value = SortedList<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        // Re-inserting restores order even if the input was not sorted.
        let mut list = SortedList::new();
        while let Some(value) = seq.next_element()? {
            list.insert(value);
        }
        Ok(list)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for SortedList<T>
where
    T: serde::Deserialize<'de> + Ord,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(SortedListVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
