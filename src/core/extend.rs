use super::Heap;
use crate::error::HeapError;

impl<T> Heap<T> {
    /// Pushes every element of `items` in turn.
    ///
    /// Stops at the first unorderable element; everything pushed before it
    /// stays in the heap. This is an inherent method rather than an
    /// `Extend` impl because the trait cannot report the failure.
    ///
    /// # Examples
    /// ```
    /// use heaplist::Heap;
    /// let mut heap = Heap::new();
    /// heap.extend(vec![5, 2, 8]).unwrap();
    /// assert_eq!(heap.peek().unwrap(), &2);
    /// ```
    pub fn extend<I: IntoIterator<Item = T>>(&mut self, items: I) -> Result<(), HeapError> {
        for item in items {
            self.push(item)?;
        }
        Ok(())
    }
}
