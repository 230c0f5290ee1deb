//! Slot indexing.
//!
//! Maps a value to the index of the bucket that holds it. The mapping depends
//! on the current slot count, so callers recompute it on every lookup; a set
//! that has just been rehashed places the same value somewhere else.

use std::hash::{Hash, Hasher};

// =============================================================================
// Hasher Type Alias
// =============================================================================

/// Hasher used to digest values before they are reduced to a slot index.
///
/// With the `fxhash` feature this is `rustc_hash::FxHasher`; with `ahash`
/// (and not `fxhash`) it is `ahash::AHasher`. Otherwise it is the standard
/// library's SipHash hasher. Every choice is constructed with fixed keys, so
/// a value hashes identically across sets and calls within one build.
#[cfg(feature = "fxhash")]
pub(crate) type SlotHasher = rustc_hash::FxHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub(crate) type SlotHasher = ahash::AHasher;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub(crate) type SlotHasher = std::collections::hash_map::DefaultHasher;

/// Computes the deterministic hash digest of a value.
///
/// # Examples
///
/// ```rust
/// use slotset::hash_code;
///
/// assert_eq!(hash_code("apple"), hash_code(&"apple".to_string()));
/// ```
#[must_use]
pub fn hash_code<Q: Hash + ?Sized>(value: &Q) -> u64 {
    let mut hasher = SlotHasher::default();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Returns the slot index of `value` in a table of `slots` buckets.
///
/// The result is always in `0..slots`.
///
/// # Panics
///
/// Panics if `slots` is zero. A [`HashSet`](crate::HashSet) never has zero
/// slots.
///
/// # Examples
///
/// ```rust
/// use slotset::slot_of;
///
/// let index = slot_of(&42, 7);
/// assert!(index < 7);
/// assert_eq!(index, slot_of(&42, 7));
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn slot_of<Q: Hash + ?Sized>(value: &Q, slots: usize) -> usize {
    // The remainder is below `slots`, which came from a usize.
    (hash_code(value) % slots as u64) as usize
}
