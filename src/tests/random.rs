use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::*;

#[test]
fn random_op_sequences_hold_heap_property() {
    let mut rng = StdRng::seed_from_u64(0x48454150);
    for direction in [Direction::MinFirst, Direction::MaxFirst] {
        let mut heap = Heap::with_direction(direction);
        let mut expected_len = 0usize;
        for _ in 0..2000 {
            let value: i32 = rng.gen_range(-50..50);
            match rng.gen_range(0u32..4) {
                0 => {
                    heap.push(value).unwrap();
                    expected_len += 1;
                }
                1 => match heap.pop() {
                    Ok(_) => expected_len -= 1,
                    Err(error) => {
                        assert_eq!(error, HeapError::Empty);
                        assert_eq!(expected_len, 0);
                    }
                },
                2 => match heap.replace(value) {
                    Ok(_) => {}
                    Err(error) => {
                        assert_eq!(error, HeapError::Empty);
                        assert_eq!(expected_len, 0);
                    }
                },
                _ => {
                    heap.pushpop(value).unwrap();
                }
            }
            assert_eq!(heap.len(), expected_len);
            heap.check();
        }
    }
}

#[test]
fn random_pop_sequence_is_sorted() {
    let mut rng = StdRng::seed_from_u64(0x504f50);
    let values: Vec<i64> = (0..500).map(|_| rng.gen_range(-1000..1000)).collect();

    let mut heap = Heap::from_vec(values.clone(), Direction::MinFirst).unwrap();
    let mut previous = None;
    while let Ok(value) = heap.pop() {
        if let Some(previous) = previous {
            assert!(previous <= value);
        }
        previous = Some(value);
    }

    let mut heap = Heap::from_vec(values, Direction::MaxFirst).unwrap();
    let mut previous = None;
    while let Ok(value) = heap.pop() {
        if let Some(previous) = previous {
            assert!(previous >= value);
        }
        previous = Some(value);
    }
}

#[test]
fn random_keyed_pop_matches_key_sort() {
    let mut rng = StdRng::seed_from_u64(0x4b4559);
    let pairs: Vec<(u8, i32)> = (0..200)
        .map(|_| (rng.gen_range(0..20), rng.gen_range(-100..100)))
        .collect();

    let heap =
        Heap::from_vec_with_key(pairs.clone(), Direction::MaxFirst, |pair: &(u8, i32)| {
            pair.1
        })
        .unwrap();
    let popped: Vec<(u8, i32)> = heap.into_sorted_vec().unwrap();

    let mut keys: Vec<i32> = pairs.iter().map(|pair| pair.1).collect();
    keys.sort_unstable_by(|a, b| b.cmp(a));
    let popped_keys: Vec<i32> = popped.iter().map(|pair| pair.1).collect();
    assert_eq!(popped_keys, keys);
}

#[test]
fn random_heapify_agrees_with_incremental_push() {
    let mut rng = StdRng::seed_from_u64(0x42554c4b);
    for _ in 0..20 {
        let values: Vec<i32> = (0..rng.gen_range(0..64))
            .map(|_| rng.gen_range(-30..30))
            .collect();
        let bulk = Heap::from_vec(values.clone(), Direction::MinFirst).unwrap();
        bulk.check();
        let mut incremental = Heap::new();
        for value in values {
            incremental.push(value).unwrap();
        }
        incremental.check();
        assert_eq!(
            bulk.into_sorted_vec().unwrap(),
            incremental.into_sorted_vec().unwrap()
        );
    }
}
