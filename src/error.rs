//! Error types for slotset.
//!
//! Lookups that miss are not errors: [`HashSet::find`](crate::HashSet::find),
//! [`HashSet::remove`](crate::HashSet::remove) and friends return `None`.
//! The types here cover the two structural failures: building a set from a
//! bad configuration, and asking a [`SortedList`](crate::SortedList) for a
//! value it cannot have because it is empty.

/// Represents a construction parameter that is out of range.
///
/// Both the slot count and the load factor of a [`HashSet`](crate::HashSet)
/// must be strictly positive.
///
/// # Examples
///
/// ```rust
/// use slotset::InvalidArgumentError;
///
/// let error = InvalidArgumentError {
///     parameter: "initial_slots",
///     value: 0,
/// };
/// assert_eq!(
///     format!("{}", error),
///     "invalid argument: initial_slots must be greater than zero, got 0"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidArgumentError {
    /// The name of the rejected parameter.
    pub parameter: &'static str,
    /// The value that was supplied.
    pub value: usize,
}

impl std::fmt::Display for InvalidArgumentError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "invalid argument: {} must be greater than zero, got {}",
            self.parameter, self.value
        )
    }
}

impl std::error::Error for InvalidArgumentError {}

/// Represents an operation that requires a non-empty container.
///
/// # Examples
///
/// ```rust
/// use slotset::EmptyContainerError;
///
/// let error = EmptyContainerError { operation: "peek" };
/// assert_eq!(format!("{}", error), "cannot peek: the sorted list is empty");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyContainerError {
    /// The name of the operation that was attempted.
    pub operation: &'static str,
}

impl std::fmt::Display for EmptyContainerError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "cannot {}: the sorted list is empty",
            self.operation
        )
    }
}

impl std::error::Error for EmptyContainerError {}

/// Unified error type for the crate.
///
/// # Examples
///
/// ```rust
/// use slotset::{HashSet, SetError};
///
/// let result: Result<HashSet<i32>, SetError> = HashSet::new(0);
/// assert!(matches!(result, Err(SetError::InvalidArgument(_))));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetError {
    /// A construction parameter was out of range.
    InvalidArgument(InvalidArgumentError),
    /// An operation needed at least one element.
    EmptyContainer(EmptyContainerError),
}

impl std::fmt::Display for SetError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(error) => write!(formatter, "{error}"),
            Self::EmptyContainer(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for SetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidArgument(error) => Some(error),
            Self::EmptyContainer(error) => Some(error),
        }
    }
}

impl From<InvalidArgumentError> for SetError {
    fn from(error: InvalidArgumentError) -> Self {
        Self::InvalidArgument(error)
    }
}

impl From<EmptyContainerError> for SetError {
    fn from(error: EmptyContainerError) -> Self {
        Self::EmptyContainer(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_invalid_argument_error_display() {
        let error = InvalidArgumentError {
            parameter: "load_factor",
            value: 0,
        };
        assert_eq!(
            format!("{error}"),
            "invalid argument: load_factor must be greater than zero, got 0"
        );
    }

    #[test]
    fn test_empty_container_error_display() {
        let error = EmptyContainerError { operation: "pop" };
        assert_eq!(format!("{error}"), "cannot pop: the sorted list is empty");
    }

    #[test]
    fn test_set_error_display_delegates() {
        let error = SetError::from(EmptyContainerError { operation: "max" });
        assert_eq!(format!("{error}"), "cannot max: the sorted list is empty");
    }

    #[test]
    fn test_set_error_source() {
        let error = SetError::from(InvalidArgumentError {
            parameter: "initial_slots",
            value: 0,
        });
        assert!(error.source().is_some());
    }
}
