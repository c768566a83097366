use super::Heap;
use crate::error::HeapError;

impl<T> Heap<T> {
    /// Consumes the heap, returning the backing array in heap order.
    pub fn into_vec(self) -> Vec<T> {
        self.storage
    }

    /// Consumes the heap, returning the elements in fully sorted order
    /// (best-first). O(n log n).
    pub fn into_sorted_vec(self) -> Result<Vec<T>, HeapError> {
        self.into_iter().collect()
    }
}

impl<T: Clone> Heap<T> {
    /// Collects the elements in fully sorted order without mutating the
    /// heap. O(n log n); sorting [`Heap::raw`] yourself is cheaper when the
    /// pop-simulation semantics are not needed.
    ///
    /// # Examples
    /// ```
    /// use heaplist::{Direction, Heap};
    /// let heap = Heap::from_vec(vec![3, 1, 9], Direction::MinFirst).unwrap();
    /// assert_eq!(heap.to_sorted_vec().unwrap(), [1, 3, 9]);
    /// assert_eq!(heap.len(), 3);
    /// ```
    pub fn to_sorted_vec(&self) -> Result<Vec<T>, HeapError> {
        self.iter_sorted().collect()
    }
}
