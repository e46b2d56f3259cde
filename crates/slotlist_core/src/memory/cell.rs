//! # Cells
//!
//! A cell is one arena slot. It carries:
//! - A payload, or nothing while the cell is unallocated or free
//! - A `next` link used by the live chain
//! - A `free_next` link used by the free list

use std::fmt;

/// Position of a cell inside its arena.
///
/// The "no cell" sentinel is expressed as `Option::<CellIndex>::None`, so a
/// `CellIndex` always names a slot in `[0, capacity)` of the arena that
/// produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct CellIndex(usize);

impl CellIndex {
    /// Creates an index from a raw slot position.
    ///
    /// Nothing checks the position against any arena here. Arena lookups
    /// with an out-of-range index return `None` instead of panicking.
    #[inline]
    #[must_use]
    pub const fn new(raw: usize) -> Self {
        Self(raw)
    }

    /// Returns the raw slot position.
    #[inline]
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One arena slot.
///
/// `next` is only meaningful while the cell is live, `free_next` only while
/// it sits on the free list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell<T> {
    pub(crate) payload: Option<T>,
    pub(crate) next: Option<CellIndex>,
    pub(crate) free_next: Option<CellIndex>,
}

impl<T> Cell<T> {
    /// Creates an empty, unlinked cell.
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            payload: None,
            next: None,
            free_next: None,
        }
    }

    /// Returns the stored value, or `None` for an unallocated or free cell.
    #[inline]
    #[must_use]
    pub const fn payload(&self) -> Option<&T> {
        self.payload.as_ref()
    }

    /// Returns the live-chain successor.
    #[inline]
    #[must_use]
    pub const fn next(&self) -> Option<CellIndex> {
        self.next
    }

    /// Returns the free-list successor.
    #[inline]
    #[must_use]
    pub const fn free_next(&self) -> Option<CellIndex> {
        self.free_next
    }

    /// Checks whether the cell currently holds a value.
    #[inline]
    #[must_use]
    pub const fn is_occupied(&self) -> bool {
        self.payload.is_some()
    }
}

impl<T> Default for Cell<T> {
    fn default() -> Self {
        Self::empty()
    }
}
