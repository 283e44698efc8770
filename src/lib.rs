//! This crate provides a double-ended queue of owned values, backed by a
//! cyclic doubly-linked list with a sentinel node.
//!
//! The [`Queue`] supports inserting and removing elements at both ends in
//! constant time, counting its elements, and a family of structural
//! algorithms: deleting the middle element, deleting duplicate runs from a
//! sorted queue, swapping adjacent pairs, reversing by value swap, and a
//! stable merge sort.
//!
//! Here is a quick example showing how the queue works with string values,
//! its primary element type:
//!
//! ```
//! use cyclic_queue::Queue;
//!
//! let mut queue: Queue<Box<str>> = Queue::new();
//!
//! queue.insert_head("banana");
//! queue.insert_tail("cherry");
//! queue.insert_head("apple");
//! assert_eq!(queue.len(), 3);
//!
//! queue.sort();
//!
//! let mut buf = [0u8; 8];
//! let removed = queue.remove_head(Some(&mut buf));
//! assert_eq!(removed.as_deref(), Some("apple"));
//! assert_eq!(&buf[..6], b"apple\0");
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the queue is like the following graph:
//! ```text
//!          ┌─────────────────────────────────────────────────────────────────────┐
//!          ↓                                                      Sentinel       │
//!    ╔═══════════╗           ╔═══════════╗                        ┌───────────┐  │
//!    ║   next    ║ ────────→ ║   next    ║ ────────→ ┄┄ ────────→ │   next    │ ─┘
//!    ╟───────────╢           ╟───────────╢   Element 2, 3, ...    ├───────────┤
//! ┌─ ║   prev    ║ ←──────── ║   prev    ║ ←──────── ┄┄ ←──────── │   prev    │
//! │  ╟───────────╢           ╟───────────╢                        ├───────────┤
//! │  ║  value T  ║           ║  value T  ║                        ┊ No value  ┊
//! │  ╚═══════════╝           ╚═══════════╝                        └╌╌╌╌╌╌╌╌╌╌╌┘
//! │    Element 0               Element 1                              ↑   ↑
//! └───────────────────────────────────────────────────────────────────┘   │
//! ╔═══════════╗                                                           │
//! ║ sentinel  ║ ──────────────────────────────────────────────────────────┘
//! ╚═══════════╝
//!     Queue
//! ```
//!
//! Each element of the queue is allocated on the heap and contains:
//! - the `next` pointer that points to the next element (or the sentinel if
//!   it is the last element in the queue);
//! - the `prev` pointer that points to the previous element (or the sentinel
//!   if it is the first element in the queue);
//! - one owned value of the element type `T`.
//!
//! The sentinel carries *NO* value. In an empty queue its `next` and `prev`
//! pointers point to itself; otherwise `sentinel.next` is the head element
//! and `sentinel.prev` is the tail element. The sentinel is never removed,
//! so no operation needs to special-case an empty or single-element ring.
//!
//! Because every mutation re-links the ring atomically from the caller's
//! point of view, the invariant `n.next.prev == n` and `n.prev.next == n`
//! holds for every node after every operation.
//!
//! # Ownership
//!
//! A queue exclusively owns its elements. Removing an element (for example
//! with [`pop_front`] or [`remove_head`]) transfers ownership of the value
//! to the caller; dropping the returned value releases it. Deleting
//! algorithms such as [`delete_middle`] and [`delete_duplicates`] release
//! elements in place and return nothing to the caller.
//!
//! # Iteration
//!
//! Iterating over a queue is by the [`Iter`] and [`IterMut`] iterators.
//! These are double-ended iterators and iterate the queue like an array
//! (fused and non-cyclic). [`IterMut`] provides mutability of the values,
//! but not of the linked structure.
//!
//! ```
//! use cyclic_queue::Queue;
//! use std::iter::FromIterator;
//!
//! let mut queue = Queue::from_iter([1, 2, 3]);
//! queue.iter_mut().for_each(|item| *item *= 2);
//! assert_eq!(Vec::from_iter(queue), vec![2, 4, 6]);
//! ```
//!
//! [`pop_front`]: Queue::pop_front
//! [`remove_head`]: Queue::remove_head
//! [`delete_middle`]: Queue::delete_middle
//! [`delete_duplicates`]: Queue::delete_duplicates

#[doc(inline)]
pub use queue::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use queue::Queue;

pub mod queue;

mod experiments;
