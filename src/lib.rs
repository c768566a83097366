//! list-like implementation of a heap / priority queue.
//!
//! A [`Heap`] keeps its elements in binary-heap array order and restores the
//! heap property exclusively through two sift primitives, while also exposing
//! the ergonomics of a plain list: raw indexed access, membership testing,
//! length, and iteration.
//!
//! The root holds the minimum or the maximum depending on the heap's
//! [`Direction`], and elements may be ranked through a key-extraction closure
//! instead of their natural ordering.
//!
//! ```
//! use heaplist::{Direction, Heap};
//!
//! let mut heap = Heap::from_vec(vec![3, 1, 9, 20], Direction::MaxFirst).unwrap();
//! assert_eq!(heap.pop().unwrap(), 20);
//! assert_eq!(heap.peek().unwrap(), &9);
//! ```
//!
//! Default iteration yields fully sorted order (best-first), not the raw array
//! order, by simulating repeated pops on a private snapshot. That costs
//! O(n log n) and is strictly slower than sorting [`Heap::raw`] once with the
//! same key; prefer the sort when you only need the sorted contents.

mod error;
mod order;

mod core;

#[cfg(test)]
mod tests;

pub use crate::core::{Heap, SortedIter};
pub use crate::error::HeapError;
pub use crate::order::Direction;
