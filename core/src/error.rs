//! Error types for the todo store.
//!
//! # Design
//! Two kinds only. `NotFound` carries the requested id so callers can report
//! it; `InvalidArgument` carries a human-readable reason. Both are raised
//! before the collection is touched, so a failed call never leaves a partial
//! mutation behind.

/// Errors returned by `TodoStore` operations and input validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No todo with the given id exists.
    #[error("todo {0} not found")]
    NotFound(u64),

    /// An input value violated a field constraint or a count was negative.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
