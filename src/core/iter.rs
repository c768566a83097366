use super::Heap;
use crate::error::HeapError;

/// Sorted traversal by simulated repeated pops.
///
/// Each `next` is one pop against a private heap, so elements arrive
/// best-first: ascending for min-first heaps, descending for max-first.
/// The whole traversal costs O(n log n), strictly more than sorting
/// [`Heap::raw`] once with the same key; it exists because priority-queue
/// consumers expect best-first iteration, not the raw array layout.
///
/// An `Unordered` comparison is yielded as an `Err` item, after which the
/// iterator is exhausted.
pub struct SortedIter<T> {
    remaining: Heap<T>,
    poisoned: bool,
}

impl<T> Iterator for SortedIter<T> {
    type Item = Result<T, HeapError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.poisoned || self.remaining.is_empty() {
            return None;
        }
        match self.remaining.pop() {
            Ok(value) => Some(Ok(value)),
            Err(error) => {
                self.poisoned = true;
                Some(Err(error))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.poisoned {
            (0, Some(0))
        } else {
            (0, Some(self.remaining.len()))
        }
    }
}

impl<T: Clone> Heap<T> {
    /// Iterates the elements in fully sorted order without mutating the
    /// heap, working on a snapshot copy of the storage.
    ///
    /// A fresh call restarts from the heap's current state.
    ///
    /// # Examples
    /// ```
    /// use heaplist::{Direction, Heap};
    /// let heap = Heap::from_vec(vec![3, 1, 9], Direction::MaxFirst).unwrap();
    /// let sorted: Vec<i32> = heap.iter_sorted().map(Result::unwrap).collect();
    /// assert_eq!(sorted, [9, 3, 1]);
    /// assert_eq!(heap.len(), 3);
    /// ```
    pub fn iter_sorted(&self) -> SortedIter<T> {
        SortedIter {
            remaining: self.clone(),
            poisoned: false,
        }
    }
}

impl<T> IntoIterator for Heap<T> {
    type Item = Result<T, HeapError>;
    type IntoIter = SortedIter<T>;

    /// Consuming sorted traversal; no snapshot is taken.
    fn into_iter(self) -> SortedIter<T> {
        SortedIter {
            remaining: self,
            poisoned: false,
        }
    }
}

impl<'a, T: Clone> IntoIterator for &'a Heap<T> {
    type Item = Result<T, HeapError>;
    type IntoIter = SortedIter<T>;

    fn into_iter(self) -> SortedIter<T> {
        self.iter_sorted()
    }
}
