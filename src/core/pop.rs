use std::cmp::Ordering;
use std::mem;

use super::Heap;
use crate::error::HeapError;

impl<T> Heap<T> {
    /// Removes and returns the root: the minimum or maximum element
    /// depending on direction. O(log n).
    ///
    /// # Examples
    /// ```
    /// use heaplist::{Heap, HeapError};
    /// let mut heap = Heap::from_vec(vec![40, 30, 20], Default::default()).unwrap();
    /// assert_eq!(heap.pop().unwrap(), 20);
    /// assert_eq!(heap.pop().unwrap(), 30);
    /// assert_eq!(heap.pop().unwrap(), 40);
    /// assert_eq!(heap.pop(), Err(HeapError::Empty));
    /// ```
    pub fn pop(&mut self) -> Result<T, HeapError> {
        if self.storage.is_empty() {
            return Err(HeapError::Empty);
        }
        // moves the last element into the root slot
        let top = self.storage.swap_remove(0);
        if !self.storage.is_empty() {
            self.sift_down(0)?;
        }
        Ok(top)
    }

    /// Swaps `value` in at the root and returns the old root, sifting the
    /// newcomer down into place. O(log n).
    ///
    /// Unlike a pop followed by a push this makes exactly one sift pass, and
    /// unlike [`Heap::pushpop`] it always extracts the old root even when
    /// `value` would immediately become the new one.
    ///
    /// # Examples
    /// ```
    /// use heaplist::{Direction, Heap};
    /// let mut heap = Heap::from_vec(vec![3, 9], Direction::MaxFirst).unwrap();
    /// assert_eq!(heap.replace(5).unwrap(), 9);
    /// assert_eq!(heap.peek().unwrap(), &5);
    /// ```
    pub fn replace(&mut self, value: T) -> Result<T, HeapError> {
        if self.storage.is_empty() {
            return Err(HeapError::Empty);
        }
        self.check_orderable(&value)?;
        let old = mem::replace(&mut self.storage[0], value);
        self.sift_down(0)?;
        Ok(old)
    }

    /// Pushes `value` unless it is no more favorable than the current root,
    /// returning the less favorable of `value` and the old root.
    ///
    /// On an empty heap, or when `value` ranks worse than or equal to the
    /// root, `value` comes straight back and the heap is left untouched.
    /// Otherwise this behaves as [`Heap::replace`]: the heap keeps `value`
    /// and hands back the displaced root. Never fails on emptiness.
    ///
    /// # Examples
    /// ```
    /// use heaplist::{Direction, Heap};
    /// let mut heap = Heap::from_vec(vec![3, 9], Direction::MaxFirst).unwrap();
    /// // 1 is worse than the root, comes straight back
    /// assert_eq!(heap.pushpop(1).unwrap(), 1);
    /// // 20 displaces the root
    /// assert_eq!(heap.pushpop(20).unwrap(), 9);
    /// assert_eq!(heap.peek().unwrap(), &20);
    /// ```
    pub fn pushpop(&mut self, value: T) -> Result<T, HeapError> {
        self.check_orderable(&value)?;
        let displaces = match self.storage.first() {
            Some(root) => self.effective_cmp(&value, root)? == Ordering::Greater,
            None => false,
        };
        if !displaces {
            return Ok(value);
        }
        let old = mem::replace(&mut self.storage[0], value);
        self.sift_down(0)?;
        Ok(old)
    }
}

impl<T: PartialEq> Heap<T> {
    /// Removes one element equal to `value` (the first in raw order) and
    /// re-heapifies. O(n).
    ///
    /// Returns `Ok(None)` when no element matches.
    pub fn remove(&mut self, value: &T) -> Result<Option<T>, HeapError> {
        let position = self.storage.iter().position(|item| item == value);
        match position {
            None => Ok(None),
            Some(position) => {
                let removed = self.storage.swap_remove(position);
                self.rebuild()?;
                Ok(Some(removed))
            }
        }
    }
}
