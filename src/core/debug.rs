use std::fmt::{self, Debug};

use super::Heap;

impl<T: Clone + Debug> Debug for Heap<T> {
    /// Renders the elements in fully sorted order plus the direction, since
    /// the raw array layout means little to a reader. Falls back to raw
    /// order when a comparison fails mid-traversal.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_sorted_vec() {
            Ok(sorted) => write!(f, "Heap({:?}, direction: {:?})", sorted, self.direction),
            Err(_) => write!(
                f,
                "Heap(unordered, raw: {:?}, direction: {:?})",
                self.storage, self.direction
            ),
        }
    }
}
