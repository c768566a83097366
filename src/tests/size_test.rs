use super::*;

#[test]
fn empty() {
    let heap: Heap<i32> = Heap::new();
    assert_eq!(heap.len(), 0);
    assert!(heap.is_empty());
    heap.check();
}

#[test]
fn push_grows_by_one() {
    let mut heap = Heap::new();
    for i in 0..100 {
        assert_eq!(heap.len(), i);
        heap.push(i as i32).unwrap();
        assert_eq!(heap.len(), i + 1);
        heap.check();
    }
}

#[test]
fn pop_shrinks_by_one() {
    let mut heap = Heap::from_vec((0..50).collect(), Direction::MaxFirst).unwrap();
    for i in (0..50usize).rev() {
        heap.pop().unwrap();
        assert_eq!(heap.len(), i);
        heap.check();
    }
    assert!(heap.is_empty());
}

#[test]
fn replace_keeps_length() {
    let mut heap = Heap::from_vec(vec![5, 3, 8], Direction::MinFirst).unwrap();
    heap.replace(1).unwrap();
    assert_eq!(heap.len(), 3);
    heap.replace(100).unwrap();
    assert_eq!(heap.len(), 3);
    heap.check();
}

#[test]
fn pushpop_keeps_length() {
    let mut heap = Heap::from_vec(vec![5, 3, 8], Direction::MinFirst).unwrap();
    // comes straight back
    heap.pushpop(100).unwrap();
    assert_eq!(heap.len(), 3);
    // displaces the root
    heap.pushpop(1).unwrap();
    assert_eq!(heap.len(), 3);
    heap.check();
}

#[test]
fn clear_empties() {
    let mut heap = Heap::from_vec(vec![1, 2, 3], Direction::MinFirst).unwrap();
    heap.clear();
    assert!(heap.is_empty());
    assert_eq!(heap.pop(), Err(HeapError::Empty));
}

#[test]
fn with_capacity_reserves() {
    let heap: Heap<i32> = Heap::with_capacity(16);
    assert!(heap.capacity() >= 16);
    assert_eq!(heap.len(), 0);
}
