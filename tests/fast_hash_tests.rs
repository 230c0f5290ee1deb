//! Tests for the hasher feature flags.
//!
//! Whichever of the default, `fxhash` or `ahash` hashers is compiled in, slot
//! assignment must be deterministic and the set must behave the same.

use rstest::rstest;
use slotset::{HashSet, hash_code, slot_of};

// =============================================================================
// Determinism Tests
// =============================================================================

/// The same value hashes the same way across calls and across sets.
#[rstest]
fn test_same_value_lands_in_same_slot() {
    let mut first = HashSet::new(13).unwrap();
    let mut second = HashSet::new(13).unwrap();
    first.insert("key".to_string());
    second.insert("key".to_string());

    let slot_in = |set: &HashSet<String>| {
        set.slots()
            .find(|(_, bucket)| bucket.contains("key"))
            .map(|(index, _)| index)
    };
    assert_eq!(slot_in(&first), Some(slot_of("key", 13)));
    assert_eq!(slot_in(&first), slot_in(&second));
}

#[rstest]
fn test_owned_and_borrowed_forms_hash_alike() {
    assert_eq!(hash_code(&String::from("alpha")), hash_code("alpha"));
    assert_eq!(hash_code(&vec![1_u8, 2]), hash_code(&[1_u8, 2][..]));
}

// =============================================================================
// Large Scale Tests
// =============================================================================

#[rstest]
fn test_large_scale_insert_and_retrieve() {
    let mut set = HashSet::with_load_factor(1, 4).unwrap();
    for index in 0..10_000_u32 {
        assert!(set.insert(index));
    }

    assert_eq!(set.len(), 10_000);
    for index in 0..10_000_u32 {
        assert!(set.contains(&index));
    }
    assert!(!set.contains(&10_000));
}

#[rstest]
fn test_string_keys_spread_over_slots() {
    let mut set = HashSet::with_load_factor(31, 100).unwrap();
    set.extend((0..1_000).map(|index| format!("key_{index}")));

    let occupied = set.slots().filter(|(_, bucket)| !bucket.is_empty()).count();
    assert_eq!(set.slot_count(), 31);
    assert!(occupied > 15);
}
