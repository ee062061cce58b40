//! # Steque
//!
//! Stack-ended queues: one sequence with a **top** that behaves like a stack (`push`/`pop`)
//! and a **back** that behaves like the tail of a queue (`enqueue`). There is no dequeue;
//! everything leaves through the top.
//!
//! This crate provides two interchangeable backends behind the [`AnySteque`] trait:
//!
//! * [`ArraySteque`]: a contiguous buffer that doubles when full and halves at a quarter.
//!   Cheap at the top, $O(N)$ to enqueue.
//! * [`LinkedSteque`]: an index-linked chain in a slot arena with a separate tail link.
//!   Every operation is $O(1)$.
//!
//! ## Key Features
//!
//! * **No element bounds:** `T` needs neither `Eq`, `Ord`, `Hash` nor `Clone`.
//! * **Typed failures:** every operation that can fail returns [`StequeError`] and leaves the
//!   steque unchanged.
//! * **Explicit absence:** `None` is the absent value. `push`/`enqueue` take
//!   `impl Into<Option<T>>`, so passing a bare `T` inserts and passing `None` is rejected.
//!
//! ## Ordering
//!
//! Iteration runs top to back: most recently pushed first, then the rest of the pushed
//! elements, then enqueued elements oldest first. `pop` removes in exactly that order.
//!
//! ```rust
//! use steque::{ArraySteque, StequeError};
//!
//! let mut s: ArraySteque<&str> = ArraySteque::new();
//! s.push("p1")?;
//! s.push("p2")?;
//! s.enqueue("e1")?;
//! s.enqueue("e2")?;
//!
//! assert_eq!(s.iter().copied().collect::<Vec<_>>(), ["p2", "p1", "e1", "e2"]);
//! assert_eq!(s.pop()?, "p2");
//! assert_eq!(s.len(), 3);
//! # Ok::<(), StequeError>(())
//! ```
//!
//! ## Errors
//!
//! ```rust
//! use steque::{AnySteque, LinkedSteque, StequeError};
//!
//! fn drain<S: AnySteque<u32>>(s: &mut S) -> Vec<u32> {
//!     let mut out = Vec::new();
//!     while let Ok(item) = s.pop() {
//!         out.push(item);
//!     }
//!     out
//! }
//!
//! let mut s: LinkedSteque<u32> = LinkedSteque::new();
//! assert_eq!(s.pop(), Err(StequeError::EmptyContainer));
//! assert_eq!(s.push(None), Err(StequeError::InvalidArgument));
//!
//! s.enqueue(2).unwrap();
//! s.push(1).unwrap();
//! assert_eq!(drain(&mut s), vec![1, 2]);
//! ```
//!
//! ## Iterators are read-only views
//!
//! An iterator borrows its steque, so mutating the steque while iterating is rejected at
//! compile time:
//!
//! ```compile_fail
//! use steque::ArraySteque;
//!
//! let mut s: ArraySteque<i32> = (1..=3).collect();
//! for item in s.iter() {
//!     s.push(*item).unwrap();
//! }
//! ```
//!
//! Removal through an iterator is reported, not performed:
//!
//! ```rust
//! use steque::{LinkedSteque, StequeError};
//!
//! let s: LinkedSteque<i32> = (1..=3).collect();
//! let mut it = s.iter();
//! assert_eq!(it.remove(), Err(StequeError::UnsupportedOperation));
//! assert_eq!(it.count(), 3);
//! ```

// --- Module Declarations ---

pub mod error;
pub mod steques;
pub mod utils;

// --- Re-exports ---

pub use error::StequeError;
pub use steques::{AnySteque, ArraySteque, LinkedSteque};
pub use utils::index_type::IndexType;
