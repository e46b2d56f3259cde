//! # Cell Arena
//!
//! Fixed-size block of cells with a LIFO free list threaded through the
//! cells' `free_next` links.

use super::cell::{Cell, CellIndex};
use super::dump::ArenaDump;
use crate::error::{ArenaError, ArenaResult};

/// A fixed-capacity arena of linkable cells.
///
/// Allocation first pops the free list (most recently released cell first),
/// then bumps the high-water mark, and fails with
/// [`ArenaError::CapacityExhausted`] once both are used up.
///
/// # Thread Safety
///
/// This arena is NOT thread-safe. Wrap the owner in a mutex to share it.
///
/// # Example
///
/// ```rust,ignore
/// let mut arena: CellArena<u32> = CellArena::new(2)?;
///
/// // Allocate - O(1), no heap allocation
/// let a = arena.allocate(1, None)?;
/// let b = arena.allocate(2, None)?;
///
/// // Release - O(1), LIFO
/// arena.release(a);
/// arena.release(b);
/// assert_eq!(arena.allocate(3, None)?, b);
/// ```
#[derive(Debug)]
pub struct CellArena<T> {
    /// The backing storage, never resized.
    cells: Box<[Cell<T>]>,
    /// Highest index ever handed out by bumping.
    max_used: Option<CellIndex>,
    /// Top of the free-list stack.
    free_head: Option<CellIndex>,
    /// Number of cells on the free list.
    free_count: usize,
}

impl<T> CellArena<T> {
    /// Creates an arena holding `capacity` empty cells.
    ///
    /// Every cell is constructed independently; no placeholder is shared
    /// between slots.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::InvalidCapacity`] if `capacity` is zero.
    pub fn new(capacity: usize) -> ArenaResult<Self> {
        if capacity == 0 {
            return Err(ArenaError::InvalidCapacity);
        }

        let cells: Vec<Cell<T>> = (0..capacity).map(|_| Cell::empty()).collect();

        Ok(Self {
            cells: cells.into_boxed_slice(),
            max_used: None,
            free_head: None,
            free_count: 0,
        })
    }

    /// Returns the total capacity.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    /// Returns the high-water mark.
    #[inline]
    #[must_use]
    pub const fn max_used(&self) -> Option<CellIndex> {
        self.max_used
    }

    /// Returns the top of the free-list stack.
    #[inline]
    #[must_use]
    pub const fn free_head(&self) -> Option<CellIndex> {
        self.free_head
    }

    /// Returns the number of released cells waiting for reuse.
    #[inline]
    #[must_use]
    pub const fn free_count(&self) -> usize {
        self.free_count
    }

    /// Returns the number of cells currently holding a value.
    #[inline]
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.bumped() - self.free_count
    }

    /// Checks whether the next [`allocate`](Self::allocate) would fail.
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.free_head.is_none() && self.bumped() == self.capacity()
    }

    /// Number of cells ever handed out by bumping (`max_used + 1`).
    #[inline]
    fn bumped(&self) -> usize {
        self.max_used.map_or(0, |index| index.get() + 1)
    }

    /// Stores `value` in a fresh or recycled cell linked to `next`.
    ///
    /// This is a **O(1)** operation with **zero heap allocations**.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::CapacityExhausted`] if the free list is empty
    /// and every cell has been bumped. Nothing is modified in that case and
    /// `value` is dropped; use [`try_allocate`](Self::try_allocate) to get it
    /// back.
    pub fn allocate(&mut self, value: T, next: Option<CellIndex>) -> ArenaResult<CellIndex> {
        let capacity = self.capacity();
        self.try_allocate(value, next)
            .map_err(|_| ArenaError::CapacityExhausted { capacity })
    }

    /// Stores `value` like [`allocate`](Self::allocate), handing it back
    /// when the arena is full.
    ///
    /// # Errors
    ///
    /// Returns `value` unchanged if no cell is available. Nothing is
    /// modified in that case.
    pub fn try_allocate(&mut self, value: T, next: Option<CellIndex>) -> Result<CellIndex, T> {
        let index = if let Some(recycled) = self.free_head {
            self.free_head = self.cells[recycled.get()].free_next.take();
            self.free_count -= 1;
            tracing::trace!("recycled cell {}", recycled);
            recycled
        } else if self.bumped() < self.capacity() {
            let fresh = CellIndex::new(self.bumped());
            self.max_used = Some(fresh);
            tracing::trace!("bumped high-water mark to {}", fresh);
            fresh
        } else {
            return Err(value);
        };

        let cell = &mut self.cells[index.get()];
        cell.payload = Some(value);
        cell.next = next;

        Ok(index)
    }

    /// Moves the value out of `index` and pushes the cell onto the free list.
    ///
    /// The cell's `next` link is cleared. The caller is responsible for
    /// unlinking the cell from any chain first.
    ///
    /// # Returns
    ///
    /// The stored value, or `None` if `index` is out of bounds or does not
    /// hold a value. The free list is untouched in that case.
    pub fn release(&mut self, index: CellIndex) -> Option<T> {
        let free_head = self.free_head;
        let cell = self.cells.get_mut(index.get())?;
        let value = cell.payload.take()?;

        cell.next = None;
        cell.free_next = free_head;
        self.free_head = Some(index);
        self.free_count += 1;
        tracing::trace!("released cell {}", index);

        Some(value)
    }

    /// Gets a cell by index.
    #[inline]
    #[must_use]
    pub fn cell(&self, index: CellIndex) -> Option<&Cell<T>> {
        self.cells.get(index.get())
    }

    /// Returns a slice of all cells, live or not.
    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[Cell<T>] {
        &self.cells
    }

    /// Gets the value stored at `index`.
    #[inline]
    #[must_use]
    pub fn get(&self, index: CellIndex) -> Option<&T> {
        self.cell(index)?.payload()
    }

    /// Gets a mutable reference to the value stored at `index`.
    #[inline]
    pub fn get_mut(&mut self, index: CellIndex) -> Option<&mut T> {
        self.cells.get_mut(index.get())?.payload.as_mut()
    }

    /// Returns the live-chain successor of `index`.
    ///
    /// Out-of-bounds indices have no successor.
    #[inline]
    #[must_use]
    pub fn next(&self, index: CellIndex) -> Option<CellIndex> {
        self.cell(index)?.next
    }

    /// Rewrites the live-chain successor of `index`.
    ///
    /// # Returns
    ///
    /// `true` if the link was set, `false` if `index` was out of bounds.
    #[inline]
    pub fn set_next(&mut self, index: CellIndex, next: Option<CellIndex>) -> bool {
        if let Some(cell) = self.cells.get_mut(index.get()) {
            cell.next = next;
            true
        } else {
            false
        }
    }

    /// Snapshots every slot for debugging.
    #[must_use]
    pub fn dump(&self) -> ArenaDump<'_, T> {
        ArenaDump::new(&self.cells)
    }
}
