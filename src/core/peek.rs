use std::ops::Index;

use super::Heap;
use crate::error::HeapError;

impl<T> Heap<T> {
    /// Returns a reference to the root without removing it. O(1).
    ///
    /// # Examples
    /// ```
    /// use heaplist::{Heap, HeapError};
    /// let mut heap = Heap::new();
    /// assert_eq!(heap.peek(), Err(HeapError::Empty));
    /// heap.push(7).unwrap();
    /// assert_eq!(heap.peek().unwrap(), &7);
    /// ```
    pub fn peek(&self) -> Result<&T, HeapError> {
        self.storage.first().ok_or(HeapError::Empty)
    }

    /// Returns the element at `index` in **raw heap order**.
    ///
    /// Only index 0 relates to priority (it is the root); any other index is
    /// just a slot in the array layout, not the i-th element in sorted order.
    pub fn get(&self, index: usize) -> Result<&T, HeapError> {
        self.storage.get(index).ok_or(HeapError::OutOfBounds {
            index,
            len: self.storage.len(),
        })
    }

    /// The backing array in heap order, not sorted order.
    ///
    /// Useful for consumers that only need the contents, e.g. collecting
    /// into a set, or sorting once instead of paying for the pop-simulating
    /// iterator.
    ///
    /// # Examples
    /// ```
    /// use heaplist::{Direction, Heap};
    /// let heap = Heap::from_vec(vec![3, 1, 9], Direction::MaxFirst).unwrap();
    /// let mut contents = heap.raw().to_vec();
    /// contents.sort();
    /// assert_eq!(contents, [1, 3, 9]);
    /// ```
    pub fn raw(&self) -> &[T] {
        &self.storage
    }
}

/// Raw-order indexing. Panics on out-of-range indices the way slice indexing
/// does; use [`Heap::get`] for the fallible form.
impl<T> Index<usize> for Heap<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.storage[index]
    }
}
