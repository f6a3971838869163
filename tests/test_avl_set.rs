extern crate avl_collections;
extern crate rand;

use avl_collections::avl_tree::AvlSet;
use rand::{Rng, SeedableRng, XorShiftRng};
use std::collections::BTreeSet;

const NUM_OF_OPERATIONS: usize = 10_000;

fn new_rng() -> XorShiftRng {
    SeedableRng::from_seed([1, 1, 1, 1])
}

fn assert_balanced(set: &AvlSet<u32>) {
    for visit in set.traverse() {
        assert!(visit.balance_factor.abs() <= 1);
    }
}

fn assert_sorted(set: &AvlSet<u32>) {
    let keys = set.keys();
    for pair in keys.windows(2) {
        assert!(pair[0] < pair[1]);
    }
    assert_eq!(keys.len(), set.len());
}

#[test]
fn int_test_against_btreeset() {
    let mut rng = new_rng();
    let mut set = AvlSet::new();
    let mut expected = BTreeSet::new();

    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.gen_range(0, 1_000);
        if rng.gen::<bool>() {
            assert_eq!(set.insert(key), expected.insert(key));
        } else {
            assert_eq!(set.remove(&key).is_some(), expected.remove(&key));
        }

        assert_balanced(&set);
        assert_eq!(set.len(), expected.len());
    }

    assert_sorted(&set);
    assert_eq!(
        set.keys(),
        expected.iter().collect::<Vec<&u32>>(),
    );
}

#[test]
fn int_test_round_trip() {
    let mut rng = new_rng();
    let mut keys: Vec<u32> = (0..2_000).map(|key| key * 2).collect();
    rng.shuffle(&mut keys);

    let mut set = AvlSet::new();
    for key in &keys {
        assert!(set.insert(*key));
    }
    assert_balanced(&set);
    assert_sorted(&set);

    for key in 0..4_000 {
        assert_eq!(set.contains(&key), key % 2 == 0);
    }

    rng.shuffle(&mut keys);
    for (index, key) in keys.iter().enumerate() {
        assert_eq!(set.remove(key), Some(*key));
        assert!(!set.contains(key));
        assert_eq!(set.len(), keys.len() - index - 1);
        if index % 100 == 0 {
            assert_balanced(&set);
            assert_sorted(&set);
        }
    }

    assert!(set.is_empty());
    assert_eq!(set.height(), -1);
    for key in 0..4_000 {
        assert!(!set.contains(&key));
    }
}

#[test]
fn int_test_height_bound() {
    let mut rng = new_rng();
    for &n in &[1, 2, 10, 100, 1_000, 10_000] {
        let mut set = AvlSet::new();
        while set.len() < n {
            set.insert(rng.gen::<u32>());
        }

        let bound = 1.44 * ((n + 2) as f64).log2() - 0.328;
        assert!(f64::from(set.height()) <= bound);
    }
}

#[test]
fn int_test_sorted_insertion_stays_balanced() {
    let mut set = AvlSet::new();
    for key in 0..1_023 {
        set.insert(key);
    }
    assert_balanced(&set);
    // 2^10 - 1 ascending keys fill a perfect tree.
    assert_eq!(set.height(), 9);

    for key in (0..1_023).rev().filter(|key| key % 3 == 0) {
        set.remove(&key);
    }
    assert_balanced(&set);
    assert_sorted(&set);
}

#[test]
fn int_test_duplicate_and_missing_are_no_ops() {
    let mut rng = new_rng();
    let mut set = AvlSet::new();
    for _ in 0..500 {
        set.insert(rng.gen_range(0, 1_000));
    }

    let snapshot = |set: &AvlSet<u32>| {
        set.traverse()
            .into_iter()
            .map(|visit| (*visit.key, visit.height, visit.balance_factor))
            .collect::<Vec<(u32, i32, i32)>>()
    };
    let before = snapshot(&set);

    let present: Vec<u32> = set.keys().into_iter().cloned().collect();
    for key in &present {
        assert!(!set.insert(*key));
    }
    for key in 1_000..1_100 {
        assert_eq!(set.remove(&key), None);
    }

    assert_eq!(snapshot(&set), before);
}
