use super::Heap;
use crate::order::Direction;

impl<T> Heap<T> {
    /// Returns the number of elements in the heap.
    ///
    /// # Examples
    /// ```
    /// use heaplist::Heap;
    /// let mut heap = Heap::new();
    /// assert_eq!(heap.len(), 0);
    /// heap.push(1).unwrap();
    /// assert_eq!(heap.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Checks if the heap is empty.
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Returns how many elements the backing array can hold without
    /// reallocating.
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// The configured direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Clears the heap, removing all elements.
    pub fn clear(&mut self) {
        self.storage.clear();
    }
}

impl<T: PartialEq> Heap<T> {
    /// Linear-scan membership test over the raw storage. O(n).
    ///
    /// # Examples
    /// ```
    /// use heaplist::{Direction, Heap};
    /// let heap = Heap::from_vec(vec![3, 1, 9], Direction::MaxFirst).unwrap();
    /// assert!(heap.contains(&9));
    /// assert!(!heap.contains(&4));
    /// ```
    pub fn contains(&self, value: &T) -> bool {
        self.storage.contains(value)
    }

    /// Counts the elements equal to `value`. O(n).
    pub fn count(&self, value: &T) -> usize {
        self.storage.iter().filter(|item| *item == value).count()
    }
}

impl<T> Heap<T> {
    /// Asserts the heap property over the whole storage array.
    #[cfg(test)]
    pub(crate) fn check(&self) {
        use std::cmp::Ordering;

        for index in 1..self.storage.len() {
            let parent = (index - 1) / 2;
            let ordering = self
                .effective_cmp(&self.storage[index], &self.storage[parent])
                .unwrap();
            assert_ne!(
                ordering,
                Ordering::Greater,
                "heap property violated between {} and parent {}",
                index,
                parent
            );
        }
    }
}
