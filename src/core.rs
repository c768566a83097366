use std::cmp::Ordering;
use std::rc::Rc;

use crate::error::HeapError;
use crate::order::Direction;

/// Base comparison composed with key extraction at construction time.
/// `None` is the incomparable case and surfaces as [`HeapError::Unordered`].
pub(crate) type CompareFn<T> = dyn Fn(&T, &T) -> Option<Ordering>;

/// A binary heap stored in array order with list-like ergonomics.
///
/// The root holds the minimum or maximum element depending on the heap's
/// [`Direction`]; elements are ranked by their natural ordering or by a
/// key-extraction closure chosen at construction. For index `i` the children
/// live at `2i + 1` and `2i + 2` and the parent at `(i - 1) / 2`; positions
/// other than the root carry no meaning beyond encoding the heap structure.
pub struct Heap<T> {
    pub(crate) storage: Vec<T>,
    pub(crate) direction: Direction,
    pub(crate) compare: Rc<CompareFn<T>>,
}

impl<T> Heap<T> {
    /// Three-way comparison in the effective order, where `Greater` always
    /// means "belongs closer to the root" regardless of direction.
    pub(crate) fn effective_cmp(&self, a: &T, b: &T) -> Result<Ordering, HeapError> {
        let ordering = (self.compare)(a, b).ok_or(HeapError::Unordered)?;
        Ok(self.direction.apply(ordering))
    }

    /// Rejects an element no ordering can place (a NaN key compares unequal
    /// to itself) before any mutation happens.
    pub(crate) fn check_orderable(&self, value: &T) -> Result<(), HeapError> {
        match (self.compare)(value, value) {
            Some(_) => Ok(()),
            None => Err(HeapError::Unordered),
        }
    }
}

mod construct;
mod sift;

mod push;
mod pop;
mod peek;
mod property;

mod iter;
mod reversed;

mod clone;
mod debug;
mod default;
mod extend;
mod from;
mod into;

pub use self::iter::SortedIter;
