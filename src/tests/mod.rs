use crate::{Direction, Heap, HeapError};

mod size_test;
mod pop_test;
mod random;
