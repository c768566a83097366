use std::cmp::Ordering;

use super::Heap;
use crate::error::HeapError;

/// The two restoration primitives. They are the only places the heap property
/// is ever repaired, and the only places it may be transiently violated.
impl<T> Heap<T> {
    /// Restores the heap property upward from `index`, typically the last
    /// slot right after an append. O(log n).
    pub(crate) fn sift_up(&mut self, index: usize) -> Result<(), HeapError> {
        let mut index = index;
        while index > 0 {
            let parent = (index - 1) / 2;
            let rises = self.effective_cmp(&self.storage[index], &self.storage[parent])?
                == Ordering::Greater;
            if !rises {
                break;
            }
            self.storage.swap(index, parent);
            index = parent;
        }
        Ok(())
    }

    /// Restores the heap property downward from `index`, typically the root
    /// right after a replacement, assuming both child subtrees are valid.
    /// O(log n).
    ///
    /// On an exact tie between the two children the left one is selected;
    /// the right child wins only when strictly more favorable. Deterministic,
    /// but not part of the public contract.
    pub(crate) fn sift_down(&mut self, index: usize) -> Result<(), HeapError> {
        let len = self.storage.len();
        let mut index = index;
        loop {
            let left = index * 2 + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut favored = left;
            if right < len
                && self.effective_cmp(&self.storage[right], &self.storage[left])?
                    == Ordering::Greater
            {
                favored = right;
            }
            let sinks = self.effective_cmp(&self.storage[favored], &self.storage[index])?
                == Ordering::Greater;
            if !sinks {
                break;
            }
            self.storage.swap(index, favored);
            index = favored;
        }
        Ok(())
    }

    /// Establishes the heap property over arbitrary storage in O(n) by
    /// sifting every index from the last non-leaf down to the root.
    pub(crate) fn rebuild(&mut self) -> Result<(), HeapError> {
        let len = self.storage.len();
        if len < 2 {
            return Ok(());
        }
        for index in (0..len / 2).rev() {
            self.sift_down(index)?;
        }
        Ok(())
    }
}
