//! # SLOTLIST
//!
//! Singly linked list stored in a fixed-capacity arena of cells.
//!
//! ## Design Principles
//!
//! 1. **Fixed capacity** - Every cell is allocated at construction, nothing grows
//! 2. **Index links** - Nodes point at each other with [`CellIndex`], never references
//! 3. **Free-list recycling** - Removed cells are reused most-recent-first
//! 4. **Loud failure** - A full list refuses inserts with an error instead of dropping them
//!
//! ## Thread Safety
//!
//! Single-threaded only. Callers sharing a list wrap it in their own lock.
//!
//! ## Example
//!
//! ```rust
//! use slotlist::{ArrayLinkedList, ListConfig};
//!
//! let config = ListConfig::from_toml_str("capacity = 4")?;
//! let mut list = ArrayLinkedList::with_config(&config)?;
//!
//! list.try_extend([10, 20, 30])?;
//! let twenty = list.index_of(&20).unwrap();
//! list.remove(twenty)?;
//!
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![10, 30]);
//! # Ok::<(), slotlist::ListError>(())
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod error;
pub mod iter;
pub mod list;

pub use config::ListConfig;
pub use error::{ListError, ListResult};
pub use iter::{IndexedIter, Iter};
pub use list::ArrayLinkedList;
pub use slotlist_core::{ArenaDump, ArenaError, CellIndex, SlotDump};
