use super::Heap;

impl<T: PartialOrd + 'static> Default for Heap<T> {
    fn default() -> Self {
        Self::new()
    }
}
