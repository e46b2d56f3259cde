//! # Arena Error Types
//!
//! Conditions the cell arena reports to its caller.

use thiserror::Error;

/// Errors that can occur in the cell arena.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArenaError {
    /// The arena was asked to hold zero cells.
    #[error("invalid capacity: an arena must hold at least one cell")]
    InvalidCapacity,

    /// Every cell is live and the free list is empty.
    #[error("capacity exhausted: all {capacity} cells are in use")]
    CapacityExhausted {
        /// Fixed capacity of the arena.
        capacity: usize,
    },
}

/// Result type for arena operations.
pub type ArenaResult<T> = Result<T, ArenaError>;
