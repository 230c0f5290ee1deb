//! # slotset
//!
//! A chained hash set whose collision buckets are stable sorted sequences.
//!
//! ## Overview
//!
//! - **[`HashSet`]**: separate-chaining hash set with a per-instance load
//!   factor. Growing past `slot_count * load_factor` rebuilds the table with
//!   `2 * slot_count + 1` slots.
//! - **[`Bucket`]**: the ordered-sequence contract each slot is stored in.
//! - **[`SortedList`]**: the default bucket, a vector-backed sorted list with
//!   stable insertion.
//! - **[`slot_of`] / [`hash_code`]**: the slot indexer.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for the set, the list and the config
//! - `fxhash`: digest values with `rustc-hash`'s `FxHasher`
//! - `ahash`: digest values with `ahash`'s `AHasher`
//! - `full`: enable all optional integrations
//!
//! ## Example
//!
//! ```rust
//! use slotset::prelude::*;
//!
//! let mut set = HashSet::with_load_factor(2, 2)?;
//! assert!(set.insert("b"));
//! assert!(set.insert("a"));
//! assert!(!set.insert("a"));
//!
//! assert!(set.contains("a"));
//! assert_eq!(set.remove("b"), Some("b"));
//! assert_eq!(set.len(), 1);
//! # Ok::<(), SetError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use slotset::prelude::*;
/// ```
pub mod prelude {
    pub use crate::bucket::Bucket;
    pub use crate::config::{DEFAULT_LOAD_FACTOR, HashSetConfig};
    pub use crate::error::{EmptyContainerError, InvalidArgumentError, SetError};
    pub use crate::hashset::HashSet;
    pub use crate::sorted_list::SortedList;
}

mod bucket;
mod config;
mod error;
mod hashset;
mod slot;
mod sorted_list;

pub use bucket::Bucket;
pub use config::DEFAULT_LOAD_FACTOR;
pub use config::HashSetConfig;
pub use error::EmptyContainerError;
pub use error::InvalidArgumentError;
pub use error::SetError;
pub use hashset::HashSet;
pub use hashset::HashSetIntoIterator;
pub use hashset::HashSetIterator;
pub use slot::hash_code;
pub use slot::slot_of;
pub use sorted_list::SortedList;
pub use sorted_list::SortedListIntoIterator;
pub use sorted_list::SortedListIterator;
