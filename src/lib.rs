#![no_std]

//! `DynList`: a growable array-backed list with positional insert and remove.
//!
//! `DynList` keeps its elements in the leading slots of a single contiguous
//! buffer, in list order, so index `i` is always slot `i`. Insertion and
//! removal in the middle shift the tail of the live prefix by one slot;
//! appends are amortized constant time through capacity doubling.
//!
//! The structure assumes exclusive, synchronous access by a single owner.
//! There is no internal synchronization and no capacity-shrinking policy:
//! capacity only ever grows, including across `clear()`.
//!
//! This crate is `no_std` compatible (it requires `alloc` for the owned
//! buffer). Enable the `std` feature to get `std::error::Error` integration
//! via `thiserror/std`.
//!
//! # Performance Characteristics
//!
//! - `push_back()`: amortized O(1), worst case O(n) on growth
//! - `insert()`, `remove()`, `push_front()`, `pop_front()`: O(n − index)
//! - `get()`, `set()`, `front()`, `back()`, `len()`: O(1)
//! - `index_of()`, `contains()`, `insert_after()`, `remove_item()`: O(n)
//! - growth: capacity doubles when full; an empty buffer jumps straight to
//!   the default capacity of 10 slots
//!
//! # Basic Usage
//!
//! ```
//! use dynlist::DynList;
//!
//! let mut list = DynList::new();
//! list.push_back("A");
//! list.push_back("B");
//! list.push_back("C");
//!
//! list.insert(1, "X").unwrap();
//!
//! assert_eq!(list.len(), 4);
//! assert_eq!(list.get(1), Ok(&"X"));
//! assert_eq!(list.remove(2), Ok("B"));
//! assert_eq!(list.index_of(&"C"), Some(2));
//! ```
//!
//! # Error Handling
//!
//! Every fallible operation validates before mutating; a failed call leaves
//! size, capacity, and contents unchanged. Absence in the search-based
//! operations (`insert_after`, `remove_item`, `index_of`, `contains`) is a
//! normal result value, not an error.
//!
//! ```
//! use dynlist::{DynList, DynListError};
//!
//! let mut list: DynList<i32> = DynList::new();
//!
//! assert_eq!(list.pop_front(), Err(DynListError::EmptyList));
//! assert_eq!(
//!     list.insert(1, 7),
//!     Err(DynListError::IndexOutOfBounds { index: 1, length: 0 })
//! );
//! assert!(list.is_empty());
//! ```
//!
//! # Capability Traits
//!
//! The [`Collection`] and [`List`] traits expose the same operation set as
//! pure contracts, so generic code does not have to name the backing
//! structure:
//!
//! ```
//! use dynlist::{Collection, DynList, List};
//!
//! fn drain<T: PartialEq>(list: &mut impl List<T>) -> usize {
//!     let mut drained = 0;
//!     while list.pop_back().is_ok() {
//!         drained += 1;
//!     }
//!     drained
//! }
//!
//! let mut list = DynList::new();
//! list.push_back(1);
//! list.push_back(2);
//! assert_eq!(drain(&mut list), 2);
//! assert!(list.is_empty());
//! ```

extern crate alloc;

mod adt;
mod error;
mod list;

// Re-export public types and traits
pub use adt::{Collection, List};
pub use error::DynListError;
pub use list::DynList;
