//! # Live-Chain Iteration
//!
//! Forward, single-pass traversal of the live chain starting at a given
//! cell. The iterator borrows the arena, so the list cannot be mutated while
//! a traversal is in progress.

use std::iter::FusedIterator;

use slotlist_core::{CellArena, CellIndex};

/// Advances `cursor` by one live cell.
///
/// A cursor that lands on an empty or out-of-range cell ends the traversal.
fn step<'a, T>(
    arena: &'a CellArena<T>,
    cursor: &mut Option<CellIndex>,
) -> Option<(CellIndex, &'a T)> {
    let index = (*cursor)?;
    let Some(cell) = arena.cell(index) else {
        *cursor = None;
        return None;
    };
    let Some(value) = cell.payload() else {
        *cursor = None;
        return None;
    };

    *cursor = cell.next();
    Some((index, value))
}

fn remaining_hint<T>(arena: &CellArena<T>, cursor: Option<CellIndex>) -> (usize, Option<usize>) {
    match cursor {
        Some(_) => (0, Some(arena.live_count())),
        None => (0, Some(0)),
    }
}

/// Iterator over the values of the live chain.
///
/// Created by [`ArrayLinkedList::iter`](crate::ArrayLinkedList::iter).
#[derive(Debug)]
pub struct Iter<'a, T> {
    arena: &'a CellArena<T>,
    cursor: Option<CellIndex>,
}

impl<'a, T> Iter<'a, T> {
    /// Starts a traversal at `start`.
    ///
    /// `None` produces an empty iterator.
    #[must_use]
    pub const fn new(arena: &'a CellArena<T>, start: Option<CellIndex>) -> Self {
        Self {
            arena,
            cursor: start,
        }
    }

    /// Continues the traversal yielding each value with its cell index.
    #[must_use]
    pub fn with_indices(self) -> IndexedIter<'a, T> {
        IndexedIter {
            arena: self.arena,
            cursor: self.cursor,
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena,
            cursor: self.cursor,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        step(self.arena, &mut self.cursor).map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        remaining_hint(self.arena, self.cursor)
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

/// Iterator over `(CellIndex, &T)` pairs of the live chain.
#[derive(Debug)]
pub struct IndexedIter<'a, T> {
    arena: &'a CellArena<T>,
    cursor: Option<CellIndex>,
}

impl<'a, T> Iterator for IndexedIter<'a, T> {
    type Item = (CellIndex, &'a T);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        step(self.arena, &mut self.cursor)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        remaining_hint(self.arena, self.cursor)
    }
}

impl<T> FusedIterator for IndexedIter<'_, T> {}
