use std::cmp::Ordering;

/// Which end of the ordering the heap root holds.
///
/// Direction is applied by flipping the outcome of the base comparison, never
/// by negating keys, so non-numeric keys (strings, tuples) reverse correctly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// The root holds the minimum element. This is the default.
    MinFirst,
    /// The root holds the maximum element.
    MaxFirst,
}

impl Direction {
    /// Returns the opposite direction.
    pub fn flip(self) -> Direction {
        match self {
            Direction::MinFirst => Direction::MaxFirst,
            Direction::MaxFirst => Direction::MinFirst,
        }
    }

    /// Maps a base comparison outcome into the effective order, where
    /// `Greater` always means "belongs closer to the root".
    pub(crate) fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Direction::MaxFirst => ordering,
            Direction::MinFirst => ordering.reverse(),
        }
    }
}

impl Default for Direction {
    fn default() -> Self {
        Direction::MinFirst
    }
}
