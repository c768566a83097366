use std::rc::Rc;

use super::Heap;
use crate::error::HeapError;

impl<T: Clone> Heap<T> {
    /// Builds a new heap over the same elements with the opposite direction.
    ///
    /// The storage is deep-copied and re-heapified under the flipped
    /// direction, so the two heaps never alias: mutating one cannot affect
    /// the other's contents or future pop order. The one-time O(n) copy is
    /// the price of that guarantee.
    ///
    /// # Examples
    /// ```
    /// use heaplist::{Direction, Heap};
    /// let mut heap = Heap::from_vec(vec![3, 1, 9], Direction::MaxFirst).unwrap();
    /// let mut flipped = heap.reversed().unwrap();
    /// assert_eq!(heap.pop().unwrap(), 9);
    /// assert_eq!(flipped.pop().unwrap(), 1);
    /// ```
    pub fn reversed(&self) -> Result<Heap<T>, HeapError> {
        let mut heap = Heap {
            storage: self.storage.clone(),
            direction: self.direction.flip(),
            compare: Rc::clone(&self.compare),
        };
        heap.rebuild()?;
        Ok(heap)
    }
}

impl<T> Heap<T> {
    /// Flips the direction in place and re-heapifies. O(n).
    ///
    /// # Examples
    /// ```
    /// use heaplist::Heap;
    /// let mut heap = Heap::from_vec(vec![40, 30, 20], Default::default()).unwrap();
    /// assert_eq!(heap.peek().unwrap(), &20);
    /// heap.reverse().unwrap();
    /// assert_eq!(heap.pop().unwrap(), 40);
    /// ```
    pub fn reverse(&mut self) -> Result<(), HeapError> {
        self.direction = self.direction.flip();
        self.rebuild()
    }
}
