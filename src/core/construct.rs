use std::rc::Rc;

use super::{CompareFn, Heap};
use crate::error::HeapError;
use crate::order::Direction;

fn natural<T: PartialOrd + 'static>() -> Rc<CompareFn<T>> {
    Rc::new(|a: &T, b: &T| a.partial_cmp(b))
}

fn keyed<T, K, F>(key: F) -> Rc<CompareFn<T>>
where
    T: 'static,
    K: PartialOrd,
    F: Fn(&T) -> K + 'static,
{
    Rc::new(move |a: &T, b: &T| key(a).partial_cmp(&key(b)))
}

impl<T: PartialOrd + 'static> Heap<T> {
    /// Creates an empty min-first `Heap<T>` ordered by the element type's
    /// natural ordering.
    ///
    /// # Examples
    /// ```
    /// use heaplist::Heap;
    /// let mut heap = Heap::new();
    /// heap.push(4).unwrap();
    /// ```
    pub fn new() -> Self {
        Self::with_direction(Direction::MinFirst)
    }

    /// Creates an empty `Heap<T>` with the given direction.
    ///
    /// # Examples
    /// ```
    /// use heaplist::{Direction, Heap};
    /// let mut heap = Heap::with_direction(Direction::MaxFirst);
    /// heap.push(4).unwrap();
    /// heap.push(9).unwrap();
    /// assert_eq!(heap.peek().unwrap(), &9);
    /// ```
    pub fn with_direction(direction: Direction) -> Self {
        Heap {
            storage: Vec::new(),
            direction,
            compare: natural(),
        }
    }

    /// Shorthand for an empty min-first heap.
    pub fn min() -> Self {
        Self::with_direction(Direction::MinFirst)
    }

    /// Shorthand for an empty max-first heap.
    pub fn max() -> Self {
        Self::with_direction(Direction::MaxFirst)
    }

    /// Creates an empty min-first `Heap<T>` able to hold at least `capacity`
    /// elements without reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Heap {
            storage: Vec::with_capacity(capacity),
            direction: Direction::MinFirst,
            compare: natural(),
        }
    }

    /// Builds a heap from `items` in O(n) by sifting every non-leaf index
    /// down, last parent first.
    ///
    /// Fails with [`HeapError::Unordered`] if any element cannot be ordered;
    /// orderability is checked up front so nothing is partially heapified.
    ///
    /// [`HeapError::Unordered`]: crate::HeapError::Unordered
    ///
    /// # Examples
    /// ```
    /// use heaplist::{Direction, Heap};
    /// let mut heap = Heap::from_vec(vec![40, 30, 20], Direction::MinFirst).unwrap();
    /// assert_eq!(heap.pop().unwrap(), 20);
    /// ```
    pub fn from_vec(items: Vec<T>, direction: Direction) -> Result<Self, HeapError> {
        let mut heap = Heap {
            storage: items,
            direction,
            compare: natural(),
        };
        heap.heapify()?;
        Ok(heap)
    }
}

impl<T: 'static> Heap<T> {
    /// Creates an empty heap ranking elements by `key` instead of their
    /// natural ordering.
    ///
    /// The key type only needs `PartialOrd`; a key that compares unequal to
    /// itself (NaN) is rejected at the pushing operation.
    ///
    /// # Examples
    /// ```
    /// use heaplist::{Direction, Heap};
    /// let mut heap = Heap::with_key(Direction::MaxFirst, |word: &&str| word.len());
    /// heap.push("pear").unwrap();
    /// heap.push("clementine").unwrap();
    /// assert_eq!(heap.peek().unwrap(), &"clementine");
    /// ```
    pub fn with_key<K, F>(direction: Direction, key: F) -> Self
    where
        K: PartialOrd,
        F: Fn(&T) -> K + 'static,
    {
        Heap {
            storage: Vec::new(),
            direction,
            compare: keyed(key),
        }
    }

    /// Builds a keyed heap from `items` in O(n). See [`Heap::from_vec`].
    pub fn from_vec_with_key<K, F>(
        items: Vec<T>,
        direction: Direction,
        key: F,
    ) -> Result<Self, HeapError>
    where
        K: PartialOrd,
        F: Fn(&T) -> K + 'static,
    {
        let mut heap = Heap {
            storage: items,
            direction,
            compare: keyed(key),
        };
        heap.heapify()?;
        Ok(heap)
    }
}

impl<T> Heap<T> {
    fn heapify(&mut self) -> Result<(), HeapError> {
        for item in &self.storage {
            self.check_orderable(item)?;
        }
        self.rebuild()
    }
}
