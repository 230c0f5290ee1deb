//! Property-based tests for HashSet.
//!
//! Each law drives a `HashSet` and a `BTreeSet` model with the same
//! operations and checks that they agree.

use proptest::prelude::*;
use slotset::{Bucket, HashSet};
use std::collections::BTreeSet;

#[derive(Debug, Clone)]
enum Operation {
    Insert(i16),
    Remove(i16),
}

fn operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        3 => any::<i16>().prop_map(Operation::Insert),
        1 => any::<i16>().prop_map(Operation::Remove),
    ]
}

// =============================================================================
// Model Agreement Law
// Description: Insert and remove behave like an ordered set model
// =============================================================================

proptest! {
    #[test]
    fn prop_agrees_with_model(
        initial_slots in 1_usize..8,
        load_factor in 1_usize..4,
        operations in prop::collection::vec(operation(), 0..200)
    ) {
        let mut set = HashSet::with_load_factor(initial_slots, load_factor).unwrap();
        let mut model = BTreeSet::new();

        for operation in operations {
            match operation {
                Operation::Insert(value) => {
                    prop_assert_eq!(set.insert(value), model.insert(value));
                }
                Operation::Remove(value) => {
                    prop_assert_eq!(set.remove(&value), model.take(&value));
                }
            }
            prop_assert_eq!(set.len(), model.len());
        }

        let mut values: Vec<i16> = set.iter().copied().collect();
        values.sort_unstable();
        let expected: Vec<i16> = model.into_iter().collect();
        prop_assert_eq!(values, expected);
    }
}

// =============================================================================
// Count Invariant Law
// Description: len() equals the sum of bucket sizes in every reachable state
// =============================================================================

proptest! {
    #[test]
    fn prop_count_equals_bucket_total(
        operations in prop::collection::vec(operation(), 0..150)
    ) {
        let mut set = HashSet::with_load_factor(1, 2).unwrap();
        for operation in operations {
            match operation {
                Operation::Insert(value) => { set.insert(value); }
                Operation::Remove(value) => { set.remove(&value); }
            }
            let total: usize = set.slots().map(|(_, bucket)| Bucket::len(bucket)).sum();
            prop_assert_eq!(set.len(), total);
        }
    }
}

// =============================================================================
// Threshold Law
// Description: After any insert the count never exceeds the threshold
// =============================================================================

proptest! {
    #[test]
    fn prop_count_within_threshold(
        load_factor in 1_usize..5,
        elements in prop::collection::vec(any::<u32>(), 0..300)
    ) {
        let mut set = HashSet::with_load_factor(1, load_factor).unwrap();
        for element in elements {
            set.insert(element);
            prop_assert!(set.len() <= set.threshold());
            prop_assert_eq!(set.slot_count() % 2, 1);
        }
    }
}

// =============================================================================
// Insert-Contains Law
// Description: An inserted element is always contained in the set
// =============================================================================

proptest! {
    #[test]
    fn prop_insert_contains_law(
        elements in prop::collection::vec(any::<i32>(), 0..50),
        new_element: i32
    ) {
        let mut set = HashSet::new(3).unwrap();
        set.extend(elements);
        set.insert(new_element);

        prop_assert!(set.contains(&new_element));
        prop_assert_eq!(set.find(&new_element), Some(new_element));
    }
}

// =============================================================================
// Remove-Contains Law
// Description: A removed element is never contained in the result set
// =============================================================================

proptest! {
    #[test]
    fn prop_remove_contains_law(
        elements in prop::collection::vec(any::<i32>(), 0..50),
        element_to_remove: i32
    ) {
        let mut set = HashSet::new(3).unwrap();
        set.extend(elements);
        set.remove(&element_to_remove);

        prop_assert!(!set.contains(&element_to_remove));
        prop_assert_eq!(set.find(&element_to_remove), None);
    }
}

// =============================================================================
// Bucket Order Law
// Description: Every bucket iterates in ascending order
// =============================================================================

proptest! {
    #[test]
    fn prop_buckets_are_sorted(elements in prop::collection::vec(any::<i64>(), 0..200)) {
        let mut set = HashSet::with_load_factor(2, 3).unwrap();
        set.extend(elements);

        for (_, bucket) in set.slots() {
            let values: Vec<i64> = bucket.iter().copied().collect();
            prop_assert!(values.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }
}
