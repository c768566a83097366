use std::convert::TryFrom;

use super::Heap;
use crate::error::HeapError;
use crate::order::Direction;

impl<T: PartialOrd + 'static> TryFrom<Vec<T>> for Heap<T> {
    type Error = HeapError;

    /// Bulk-heapifies into a min-first heap under the natural ordering.
    ///
    /// # Examples
    /// ```
    /// use std::convert::TryFrom;
    /// use heaplist::Heap;
    /// let mut heap = Heap::try_from(vec![9, 4, 7]).unwrap();
    /// assert_eq!(heap.pop().unwrap(), 4);
    /// ```
    fn try_from(items: Vec<T>) -> Result<Self, HeapError> {
        Heap::from_vec(items, Direction::MinFirst)
    }
}
