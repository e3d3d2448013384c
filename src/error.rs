//! Error types for collection combination.
//!
//! Only one failure can occur at runtime: an attempt to mutate a container
//! whose [`Outcome`](crate::collection::Outcome) forbids it. Facades that
//! would outlive their sources are rejected by the borrow checker, so there
//! is no runtime error for that case.

/// Represents an attempt to mutate a read-only container.
///
/// Raised synchronously by frozen snapshots and by read-only facades. The
/// container is left untouched, so the caller can always recover.
///
/// # Examples
///
/// ```rust
/// use combiner::error::UnsupportedOperationError;
///
/// let error = UnsupportedOperationError {
///     container: "Snapshot",
///     operation: "insert",
/// };
/// assert_eq!(
///     format!("{}", error),
///     "Snapshot::insert: unsupported operation on a read-only collection"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnsupportedOperationError {
    /// The name of the container that rejected the mutation.
    pub container: &'static str,
    /// The name of the rejected operation.
    pub operation: &'static str,
}

impl UnsupportedOperationError {
    pub(crate) fn reject(container: &'static str, operation: &'static str) -> Self {
        tracing::debug!(container, operation, "Rejected mutation of read-only collection");
        Self {
            container,
            operation,
        }
    }
}

impl std::fmt::Display for UnsupportedOperationError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}::{}: unsupported operation on a read-only collection",
            self.container, self.operation
        )
    }
}

impl std::error::Error for UnsupportedOperationError {}

/// Represents errors that can occur while combining collections.
///
/// # Examples
///
/// ```rust
/// use combiner::error::{CombineError, UnsupportedOperationError};
///
/// let error = CombineError::from(UnsupportedOperationError {
///     container: "Facade",
///     operation: "clear",
/// });
/// assert!(error.is_unsupported_operation());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombineError {
    /// A mutation was attempted on a frozen snapshot or a read-only facade.
    UnsupportedOperation(UnsupportedOperationError),
}

impl CombineError {
    /// Returns `true` if this error is [`CombineError::UnsupportedOperation`].
    #[must_use]
    pub const fn is_unsupported_operation(&self) -> bool {
        matches!(self, Self::UnsupportedOperation(_))
    }
}

impl std::fmt::Display for CombineError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedOperation(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for CombineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnsupportedOperation(error) => Some(error),
        }
    }
}

impl From<UnsupportedOperationError> for CombineError {
    fn from(error: UnsupportedOperationError) -> Self {
        Self::UnsupportedOperation(error)
    }
}
