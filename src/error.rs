use std::error::Error;
use std::fmt::Display;

/// Failure modes of [`Heap`](crate::Heap) operations.
///
/// Every error is reported synchronously to the caller of the triggering
/// operation; nothing is swallowed or retried internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// `pop`, `peek` or `replace` was called on a heap with no elements.
    /// Detected before any mutation.
    Empty,
    /// `get` was called with an index past the end of the storage array.
    /// Detected before any mutation.
    OutOfBounds { index: usize, len: usize },
    /// Two keys could not be ordered (for example a NaN float key).
    ///
    /// Pushing operations compare the incoming element with itself before
    /// touching storage, so the common NaN case fails with the heap
    /// untouched. A `PartialOrd` impl that fails only for *some* pairs can
    /// still abort mid-sift, in which case earlier swaps of that sift remain
    /// visible and the heap property may no longer hold.
    Unordered,
}

impl Error for HeapError {}

impl Display for HeapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeapError::Empty => write!(f, "operation on empty Heap"),
            HeapError::OutOfBounds { index, len } => {
                write!(f, "Heap index {} out of range (len {})", index, len)
            }
            HeapError::Unordered => write!(f, "Heap keys admit no ordering"),
        }
    }
}
