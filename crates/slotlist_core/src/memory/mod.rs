//! # Memory Management
//!
//! The cell arena and everything that lives inside it.
//!
//! ## Design Philosophy
//!
//! All cells are allocated once at construction. Afterwards:
//! - No heap allocations on insert or remove
//! - Freed cells are threaded onto a free list through the cells themselves
//! - Capacity never changes

mod arena;
mod cell;
mod dump;

pub use arena::CellArena;
pub use cell::{Cell, CellIndex};
pub use dump::{ArenaDump, SlotDump};
