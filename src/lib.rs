//! An owning singly linked list.
//!
//! Values are appended at and removed from the tail. Every node is owned by
//! its predecessor, the head node by the list itself.
//!
//! ```
//! use sllist::LinkedList;
//!
//! let mut list = LinkedList::from_values(vec![1, 2, 3]);
//! list.push(4);
//! assert_eq!(list.pop(), Some(4));
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub mod iter;
pub mod list;
pub mod llist;

#[cfg(feature = "with_serde")]
mod serialize;

pub use crate::error::ListError;
pub use crate::iter::Iter;
pub use crate::list::List;
pub use crate::llist::LinkedList;
