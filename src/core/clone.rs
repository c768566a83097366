use std::rc::Rc;

use super::Heap;

impl<T: Clone> Clone for Heap<T> {
    /// Copies the storage; the comparator is shared through its `Rc`, which
    /// is sound because it is immutable.
    fn clone(&self) -> Self {
        Heap {
            storage: self.storage.clone(),
            direction: self.direction,
            compare: Rc::clone(&self.compare),
        }
    }
}
