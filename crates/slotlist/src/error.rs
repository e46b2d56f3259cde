//! # List Error Types
//!
//! All errors that can occur in list operations.

use slotlist_core::ArenaError;
use thiserror::Error;

/// Errors that can occur in the list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// The backing arena refused the operation.
    #[error(transparent)]
    Arena(#[from] ArenaError),

    /// No live cell matched the requested value or index.
    #[error("not found in the live chain")]
    NotFound,

    /// A cursor-relative operation ran while no cell was selected.
    #[error("cursor is not set")]
    EmptyCursor,

    /// Invalid configuration file.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ListError {
    /// Checks whether the error is a full arena refusing an insert.
    #[inline]
    #[must_use]
    pub const fn is_capacity_exhausted(&self) -> bool {
        matches!(self, Self::Arena(ArenaError::CapacityExhausted { .. }))
    }
}

/// Result type for list operations.
pub type ListResult<T> = Result<T, ListError>;
