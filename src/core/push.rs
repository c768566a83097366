use super::Heap;
use crate::error::HeapError;

impl<T> Heap<T> {
    /// Appends `value` and sifts it up into place. O(log n).
    ///
    /// An element whose key cannot be ordered is rejected before storage is
    /// touched, so a failed push leaves the heap exactly as it was.
    ///
    /// # Examples
    /// ```
    /// use heaplist::Heap;
    /// let mut heap = Heap::new();
    /// heap.push(3).unwrap();
    /// heap.push(1).unwrap();
    /// assert_eq!(heap.peek().unwrap(), &1);
    ///
    /// let mut floats = Heap::new();
    /// assert!(floats.push(f64::NAN).is_err());
    /// assert!(floats.is_empty());
    /// ```
    pub fn push(&mut self, value: T) -> Result<(), HeapError> {
        self.check_orderable(&value)?;
        self.storage.push(value);
        let last = self.storage.len() - 1;
        self.sift_up(last)
    }
}
