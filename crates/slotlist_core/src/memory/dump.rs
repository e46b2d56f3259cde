//! # Arena Dump
//!
//! Slot-by-slot snapshot of an arena for debugging and tests.
//! The text format is not stable.

use std::fmt;

use super::cell::{Cell, CellIndex};

/// Snapshot of one arena slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlotDump<'a, T> {
    /// Slot position.
    pub index: CellIndex,
    /// Stored value, if any.
    pub payload: Option<&'a T>,
    /// Live-chain successor.
    pub next: Option<CellIndex>,
    /// Free-list successor.
    pub free_next: Option<CellIndex>,
}

/// Borrowed view over every slot of an arena.
///
/// Displays one line per slot: `[index]  payload next free_next`, with `-`
/// standing in for an empty payload or a missing link.
#[derive(Debug)]
pub struct ArenaDump<'a, T> {
    cells: &'a [Cell<T>],
}

impl<'a, T> ArenaDump<'a, T> {
    pub(crate) const fn new(cells: &'a [Cell<T>]) -> Self {
        Self { cells }
    }

    /// Number of slots in the dump.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.cells.len()
    }

    /// Checks whether the dump has no slots.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterates over all slots in index order.
    pub fn slots(&self) -> impl Iterator<Item = SlotDump<'a, T>> + 'a {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, cell)| SlotDump {
                index: CellIndex::new(index),
                payload: cell.payload(),
                next: cell.next(),
                free_next: cell.free_next(),
            })
    }
}

struct Link(Option<CellIndex>);

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(index) => write!(f, "{index}"),
            None => f.write_str("-"),
        }
    }
}

impl<T: fmt::Debug> fmt::Display for ArenaDump<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in self.slots() {
            write!(f, "[{}]  ", slot.index)?;
            match slot.payload {
                Some(value) => write!(f, "{value:?}")?,
                None => f.write_str("-")?,
            }
            writeln!(f, " {} {}", Link(slot.next), Link(slot.free_next))?;
        }
        Ok(())
    }
}
