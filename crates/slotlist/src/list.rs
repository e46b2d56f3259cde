//! # Array Linked List
//!
//! A singly linked list whose nodes live in a fixed-capacity [`CellArena`].
//!
//! The list keeps three pieces of state on top of the arena:
//! - `head`: first live cell
//! - `current`: a cursor on one live cell, moved by most operations
//! - `count`: number of live cells
//!
//! Every removal leaves the cursor on the predecessor of the removed cell,
//! or on the new head when the head itself was removed.

use std::fmt;
use std::io;

use slotlist_core::{ArenaDump, ArenaError, CellArena, CellIndex};

use crate::config::ListConfig;
use crate::error::{ListError, ListResult};
use crate::iter::Iter;

/// Linked list over a pre-allocated cell arena.
///
/// # Thread Safety
///
/// This list is NOT thread-safe. Use one list per thread or wrap it in a
/// mutex.
///
/// # Example
///
/// ```rust
/// use slotlist::ArrayLinkedList;
///
/// let mut list = ArrayLinkedList::new(4)?;
/// list.add_last(10)?;
/// list.add_last(30)?;
/// list.add_first(5)?;
///
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![5, 10, 30]);
/// assert_eq!(list.search(&30)?, 2);
/// assert_eq!(list.current_value(), Some(&30));
/// # Ok::<(), slotlist::ListError>(())
/// ```
#[derive(Debug)]
pub struct ArrayLinkedList<T> {
    arena: CellArena<T>,
    head: Option<CellIndex>,
    current: Option<CellIndex>,
    count: usize,
}

impl<T> ArrayLinkedList<T> {
    /// Creates an empty list with room for `capacity` values.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::InvalidCapacity`] if `capacity` is zero.
    pub fn new(capacity: usize) -> ListResult<Self> {
        let arena = CellArena::new(capacity)?;
        tracing::debug!("created list with capacity {}", capacity);

        Ok(Self {
            arena,
            head: None,
            current: None,
            count: 0,
        })
    }

    /// Creates an empty list sized by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::InvalidCapacity`] if the configured capacity is
    /// zero.
    pub fn with_config(config: &ListConfig) -> ListResult<Self> {
        config.validate()?;
        Self::new(config.capacity)
    }

    /// Returns the number of live values.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.count
    }

    /// Checks whether the list holds no values.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the fixed capacity.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.arena.capacity()
    }

    /// Checks whether the next insert would be refused.
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.arena.is_full()
    }

    /// Returns the index of the first live cell.
    #[inline]
    #[must_use]
    pub const fn head(&self) -> Option<CellIndex> {
        self.head
    }

    /// Returns the index of the cursor cell.
    #[inline]
    #[must_use]
    pub const fn current(&self) -> Option<CellIndex> {
        self.current
    }

    /// Returns the arena's high-water mark.
    #[inline]
    #[must_use]
    pub const fn max_used(&self) -> Option<CellIndex> {
        self.arena.max_used()
    }

    /// Returns the number of released cells waiting for reuse.
    #[inline]
    #[must_use]
    pub const fn free_count(&self) -> usize {
        self.arena.free_count()
    }

    /// Gets the value of a live cell.
    ///
    /// Free and never-allocated cells hold no value, so only live cells
    /// answer.
    #[inline]
    #[must_use]
    pub fn get(&self, index: CellIndex) -> Option<&T> {
        self.arena.get(index)
    }

    /// Gets a mutable reference to the value of a live cell.
    #[inline]
    pub fn get_mut(&mut self, index: CellIndex) -> Option<&mut T> {
        self.arena.get_mut(index)
    }

    /// Returns the value under the cursor.
    #[inline]
    #[must_use]
    pub fn current_value(&self) -> Option<&T> {
        self.arena.get(self.current?)
    }

    /// Returns the first value.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.arena.get(self.head?)
    }

    /// Returns the last value. O(len).
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.arena.get(self.tail()?)
    }

    /// Iterates over the values from head to tail.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.arena, self.head)
    }

    /// Snapshots every arena slot for debugging.
    #[must_use]
    pub fn dump(&self) -> ArenaDump<'_, T> {
        self.arena.dump()
    }

    fn tail(&self) -> Option<CellIndex> {
        let mut cursor = self.head?;
        while let Some(next) = self.arena.next(cursor) {
            cursor = next;
        }
        Some(cursor)
    }

    fn predecessor_of(&self, target: CellIndex) -> Option<CellIndex> {
        let mut cursor = self.head?;
        loop {
            let next = self.arena.next(cursor)?;
            if next == target {
                return Some(cursor);
            }
            cursor = next;
        }
    }

    fn refused(&self) -> ListError {
        let err = ArenaError::CapacityExhausted {
            capacity: self.capacity(),
        };
        tracing::warn!("insert refused with {} values live: {}", self.count, err);
        err.into()
    }

    /// Inserts `value` before the head. The new cell becomes the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::CapacityExhausted`] if the list is full. The
    /// list is left untouched and `value` is dropped; use
    /// [`try_add_first`](Self::try_add_first) to get it back.
    pub fn add_first(&mut self, value: T) -> ListResult<CellIndex> {
        self.try_add_first(value).map_err(|_| self.refused())
    }

    /// Inserts `value` before the head, handing it back if the list is full.
    ///
    /// # Errors
    ///
    /// Returns `value` unchanged if no cell is available. The list is left
    /// untouched.
    pub fn try_add_first(&mut self, value: T) -> Result<CellIndex, T> {
        let index = self.arena.try_allocate(value, self.head)?;

        self.head = Some(index);
        self.current = Some(index);
        self.count += 1;

        Ok(index)
    }

    /// Appends `value` after the tail. The new cell becomes the cursor.
    ///
    /// Walks the chain to find the tail, so this is O(len).
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::CapacityExhausted`] if the list is full. The
    /// list is left untouched and `value` is dropped; use
    /// [`try_add_last`](Self::try_add_last) to get it back.
    pub fn add_last(&mut self, value: T) -> ListResult<CellIndex> {
        self.try_add_last(value).map_err(|_| self.refused())
    }

    /// Appends `value` after the tail, handing it back if the list is full.
    ///
    /// # Errors
    ///
    /// Returns `value` unchanged if no cell is available. The list is left
    /// untouched.
    pub fn try_add_last(&mut self, value: T) -> Result<CellIndex, T> {
        let Some(tail) = self.tail() else {
            return self.try_add_first(value);
        };

        let index = self.arena.try_allocate(value, None)?;

        self.arena.set_next(tail, Some(index));
        self.current = Some(index);
        self.count += 1;

        Ok(index)
    }

    /// Appends every value from `values`, finding the tail only once.
    ///
    /// # Returns
    ///
    /// The number of values appended.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::CapacityExhausted`] at the first value that
    /// does not fit. Values appended before it stay in the list; it and the
    /// rest of `values` are dropped.
    pub fn try_extend<I>(&mut self, values: I) -> ListResult<usize>
    where
        I: IntoIterator<Item = T>,
    {
        let mut tail = self.tail();
        let mut appended = 0;

        for value in values {
            let index = self
                .arena
                .try_allocate(value, None)
                .map_err(|_| self.refused())?;

            match tail {
                Some(tail) => {
                    self.arena.set_next(tail, Some(index));
                }
                None => self.head = Some(index),
            }
            tail = Some(index);
            self.current = Some(index);
            self.count += 1;
            appended += 1;
        }

        Ok(appended)
    }

    /// Removes the head and moves the cursor to the new head.
    ///
    /// # Returns
    ///
    /// The removed value, or `None` if the list was empty.
    pub fn remove_first(&mut self) -> Option<T> {
        let head = self.head?;
        let next = self.arena.next(head);
        let value = self.arena.release(head)?;

        self.head = next;
        self.current = next;
        self.count -= 1;

        Some(value)
    }

    /// Removes the tail and moves the cursor to its predecessor. O(len).
    ///
    /// # Returns
    ///
    /// The removed value, or `None` if the list was empty.
    pub fn remove_last(&mut self) -> Option<T> {
        let head = self.head?;
        let Some(mut tail) = self.arena.next(head) else {
            return self.remove_first();
        };

        let mut predecessor = head;
        while let Some(next) = self.arena.next(tail) {
            predecessor = tail;
            tail = next;
        }

        let value = self.arena.release(tail)?;
        self.arena.set_next(predecessor, None);
        self.current = Some(predecessor);
        self.count -= 1;

        Some(value)
    }

    /// Removes the live cell at `index` and moves the cursor to its
    /// predecessor (or to the new head when `index` was the head). O(len).
    ///
    /// # Errors
    ///
    /// Returns [`ListError::NotFound`] if `index` is not on the live chain.
    /// The list is left untouched in that case.
    pub fn remove(&mut self, index: CellIndex) -> ListResult<T> {
        if self.head == Some(index) {
            return self.remove_first().ok_or(ListError::NotFound);
        }

        let predecessor = self.predecessor_of(index).ok_or(ListError::NotFound)?;
        let next = self.arena.next(index);
        let value = self.arena.release(index).ok_or(ListError::NotFound)?;

        self.arena.set_next(predecessor, next);
        self.current = Some(predecessor);
        self.count -= 1;

        Ok(value)
    }

    /// Removes the cell under the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::EmptyCursor`] if no cell is selected.
    pub fn remove_current(&mut self) -> ListResult<T> {
        let current = self.current.ok_or(ListError::EmptyCursor)?;
        self.remove(current)
    }

    /// Removes every value and unsets the cursor.
    ///
    /// All cells go back on the free list; the high-water mark is kept.
    pub fn clear(&mut self) {
        let mut released = 0usize;
        while self.remove_first().is_some() {
            released += 1;
        }
        self.current = None;

        if released > 0 {
            tracing::debug!("cleared list, released {} cells", released);
        }
    }

    /// Moves the cursor one cell towards the tail.
    ///
    /// # Returns
    ///
    /// `false` if the cursor is unset or already on the tail; the cursor is
    /// not moved in that case.
    pub fn advance_cursor(&mut self) -> bool {
        match self.current.and_then(|current| self.arena.next(current)) {
            Some(next) => {
                self.current = Some(next);
                true
            }
            None => false,
        }
    }
}

impl<T: PartialEq> ArrayLinkedList<T> {
    /// Finds the first cell holding `value` and moves the cursor onto it.
    ///
    /// # Returns
    ///
    /// The 0-based position of the match.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::NotFound`] if no value matches. The cursor is
    /// not moved.
    pub fn search(&mut self, value: &T) -> ListResult<usize> {
        let (position, index) = self
            .iter()
            .with_indices()
            .enumerate()
            .find(|(_, (_, candidate))| *candidate == value)
            .map(|(position, (index, _))| (position, index))
            .ok_or(ListError::NotFound)?;

        self.current = Some(index);
        Ok(position)
    }

    /// Checks whether any value matches, moving the cursor onto the first
    /// match like [`search`](Self::search).
    ///
    /// Use [`index_of`](Self::index_of) for a lookup that leaves the cursor
    /// alone.
    pub fn contains(&mut self, value: &T) -> bool {
        self.search(value).is_ok()
    }

    /// Returns the cell holding the first match. Does not move the cursor.
    #[must_use]
    pub fn index_of(&self, value: &T) -> Option<CellIndex> {
        self.iter()
            .with_indices()
            .find(|(_, candidate)| *candidate == value)
            .map(|(index, _)| index)
    }
}

impl<T: fmt::Display> ArrayLinkedList<T> {
    /// Writes every value on its own line, head to tail.
    ///
    /// # Errors
    ///
    /// Propagates write failures from `out`.
    pub fn write_values<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        for value in self {
            writeln!(out, "{value}")?;
        }
        Ok(())
    }

    /// Writes the value under the cursor, or `no current node`.
    ///
    /// # Errors
    ///
    /// Propagates write failures from `out`.
    pub fn write_current<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        match self.current_value() {
            Some(value) => writeln!(out, "{value}"),
            None => writeln!(out, "no current node"),
        }
    }
}

impl<'a, T> IntoIterator for &'a ArrayLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
