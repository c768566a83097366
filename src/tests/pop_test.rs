use super::*;

#[test]
fn directly_pop() {
    let mut heap = Heap::<i32>::new();
    assert_eq!(heap.pop(), Err(HeapError::Empty));
    assert!(heap.is_empty());
    let mut heap = Heap::<i32>::max();
    assert_eq!(heap.pop(), Err(HeapError::Empty));
    assert!(heap.is_empty());
}

#[test]
fn loop_push_min() {
    let mut heap = Heap::new();
    for i in (0..100).rev() {
        heap.push(i).unwrap();
    }
    for i in 0..100 {
        assert_eq!(heap.pop().unwrap(), i);
        heap.check();
    }
    assert_eq!(heap.pop(), Err(HeapError::Empty));
}

#[test]
fn loop_push_max() {
    let mut heap = Heap::max();
    for i in 0..100 {
        heap.push(i).unwrap();
    }
    for i in (0..100).rev() {
        assert_eq!(heap.pop().unwrap(), i);
        heap.check();
    }
    assert_eq!(heap.pop(), Err(HeapError::Empty));
}

#[test]
fn pop_order_with_duplicates() {
    let mut heap =
        Heap::from_vec(vec![4, 1, 4, 2, 2, 9, 1, 4], Direction::MinFirst).unwrap();
    let mut popped = Vec::new();
    while let Ok(value) = heap.pop() {
        popped.push(value);
    }
    assert_eq!(popped, [1, 1, 2, 2, 4, 4, 4, 9]);
}

#[test]
fn replace_returns_old_root() {
    let mut heap = Heap::from_vec(vec![40, 30, 20], Direction::MinFirst).unwrap();
    assert_eq!(heap.replace(35).unwrap(), 20);
    assert_eq!(heap.peek().unwrap(), &30);
    heap.check();
}

#[test]
fn replace_on_empty() {
    let mut heap = Heap::<i32>::new();
    assert_eq!(heap.replace(1), Err(HeapError::Empty));
    assert!(heap.is_empty());
}

#[test]
fn pushpop_on_empty_returns_value() {
    let mut heap = Heap::<i32>::new();
    assert_eq!(heap.pushpop(7).unwrap(), 7);
    assert!(heap.is_empty());
}

#[test]
fn raw_round_trip_reproduces_pop_order() {
    let source =
        Heap::from_vec(vec![12, 7, 3, 19, 7, 1], Direction::MaxFirst).unwrap();
    let rebuilt =
        Heap::from_vec(source.raw().to_vec(), Direction::MaxFirst).unwrap();
    let lhs: Vec<i32> = source.into_sorted_vec().unwrap();
    let rhs: Vec<i32> = rebuilt.into_sorted_vec().unwrap();
    assert_eq!(lhs, rhs);
}

#[test]
fn remove_by_value() {
    let mut heap = Heap::from_vec(vec![5, 3, 8, 3], Direction::MinFirst).unwrap();
    assert_eq!(heap.remove(&8).unwrap(), Some(8));
    assert_eq!(heap.len(), 3);
    heap.check();
    assert_eq!(heap.remove(&42).unwrap(), None);
    assert_eq!(heap.len(), 3);
    assert_eq!(heap.remove(&3).unwrap(), Some(3));
    assert_eq!(heap.count(&3), 1);
    heap.check();
}
