//! The bucket contract.
//!
//! A [`HashSet`](crate::HashSet) stores every slot's values in a bucket and
//! talks to it only through [`Bucket`]. Buckets keep their values in
//! ascending order, so a lookup can stop as soon as it walks past the place
//! where the key would sit.

use std::borrow::Borrow;

/// An ordered sequence usable as a hash set bucket.
///
/// # Contract
///
/// - Values are kept in ascending [`Ord`] order.
/// - [`insert_sorted`](Bucket::insert_sorted) is stable: a value lands after
///   every value that compares `Equal` to it.
/// - Lookups use the ordering to find the run of order-equal values and `==`
///   to pick the match inside it, so an ordering coarser than equality is
///   fine.
/// - [`iter`](Bucket::iter) and the owning iterator yield ascending order.
///
/// A bucket does not enforce uniqueness. The set checks
/// [`contains`](Bucket::contains) before inserting.
pub trait Bucket<T>: Default + IntoIterator<Item = T> {
    /// Borrowing iterator over the bucket in ascending order.
    type Iter<'a>: Iterator<Item = &'a T> + Clone
    where
        Self: 'a,
        T: 'a;

    /// Returns the number of values in the bucket.
    fn len(&self) -> usize;

    /// Returns `true` if the bucket holds no values.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts `value` at its sorted position, after any order-equal values.
    fn insert_sorted(&mut self, value: T);

    /// Returns a reference to the value equal to `key`, if any.
    fn get<Q>(&self, key: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized;

    /// Returns `true` if a value equal to `key` is present.
    fn contains<Q>(&self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Removes and returns the first value equal to `key`.
    fn remove_by_key<Q>(&mut self, key: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized;

    /// Returns an iterator over the bucket in ascending order.
    fn iter(&self) -> Self::Iter<'_>;
}
