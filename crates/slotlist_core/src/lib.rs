//! # SLOTLIST Core
//!
//! Fixed-capacity cell arena with an intrusive free list.
//!
//! ## Architecture Rules
//!
//! 1. **One allocation, ever** - All cells are allocated at construction
//! 2. **Indices, not pointers** - Cells link to each other through [`CellIndex`]
//! 3. **LIFO recycling** - Released cells are reused before fresh ones
//!
//! ## Example
//!
//! ```rust
//! use slotlist_core::CellArena;
//!
//! let mut arena: CellArena<u32> = CellArena::new(4).unwrap();
//! let a = arena.allocate(10, None).unwrap();
//! assert_eq!(arena.release(a), Some(10));
//!
//! // The released cell is handed out again
//! assert_eq!(arena.allocate(20, None).unwrap(), a);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod error;
pub mod memory;

pub use error::{ArenaError, ArenaResult};
pub use memory::{ArenaDump, Cell, CellArena, CellIndex, SlotDump};
