//! Construction settings for [`HashSet`](crate::HashSet).

use crate::error::{InvalidArgumentError, SetError};

/// Average number of values per slot a set tolerates before it grows.
pub const DEFAULT_LOAD_FACTOR: usize = 20;

/// Construction settings for a [`HashSet`](crate::HashSet).
///
/// `initial_slots` is required. `load_factor` defaults to
/// [`DEFAULT_LOAD_FACTOR`]. Both must be greater than zero; see
/// [`validate`](Self::validate).
///
/// With the `serde` feature the config can be loaded from any serde format,
/// and a missing `load_factor` falls back to the default.
///
/// # Examples
///
/// ```rust
/// use slotset::{HashSet, HashSetConfig};
///
/// let config = HashSetConfig::new(11).load_factor(4);
/// assert_eq!(config.threshold(), 44);
///
/// let set: HashSet<u32> = HashSet::with_config(config).unwrap();
/// assert_eq!(set.slot_count(), 11);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HashSetConfig {
    /// Number of buckets allocated up front.
    pub initial_slots: usize,
    /// Average bucket occupancy that triggers a rehash when exceeded.
    #[cfg_attr(feature = "serde", serde(default = "default_load_factor"))]
    pub load_factor: usize,
}

#[cfg(feature = "serde")]
pub(crate) const fn default_load_factor() -> usize {
    DEFAULT_LOAD_FACTOR
}

impl HashSetConfig {
    /// Creates a config with the given slot count and the default load
    /// factor.
    #[must_use]
    pub const fn new(initial_slots: usize) -> Self {
        Self {
            initial_slots,
            load_factor: DEFAULT_LOAD_FACTOR,
        }
    }

    /// Returns the config with `load_factor` replaced.
    #[must_use]
    pub const fn load_factor(mut self, load_factor: usize) -> Self {
        self.load_factor = load_factor;
        self
    }

    /// Returns the element count above which a set built from this config
    /// rehashes.
    #[must_use]
    pub const fn threshold(&self) -> usize {
        self.initial_slots.saturating_mul(self.load_factor)
    }

    /// Checks that both parameters are greater than zero.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::InvalidArgument`] naming the first offending
    /// parameter.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slotset::HashSetConfig;
    ///
    /// assert!(HashSetConfig::new(1).validate().is_ok());
    /// assert!(HashSetConfig::new(0).validate().is_err());
    /// assert!(HashSetConfig::new(3).load_factor(0).validate().is_err());
    /// ```
    pub const fn validate(&self) -> Result<(), SetError> {
        if self.initial_slots == 0 {
            return Err(SetError::InvalidArgument(InvalidArgumentError {
                parameter: "initial_slots",
                value: self.initial_slots,
            }));
        }
        if self.load_factor == 0 {
            return Err(SetError::InvalidArgument(InvalidArgumentError {
                parameter: "load_factor",
                value: self.load_factor,
            }));
        }
        Ok(())
    }
}
