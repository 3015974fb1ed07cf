//! Tests for fast hash feature flags.
//!
//! The forest's internal maps hash with `FxHasher` under `fxhash` and with
//! `AHasher` under `ahash`. Whatever the hasher, the forest must behave
//! identically.

use heapforest::persistent::DisjointSet;
use rstest::rstest;

// =============================================================================
// Referential Transparency Tests
// =============================================================================

/// The same operations on two fresh forests produce the same partition.
#[rstest]
fn test_deterministic_partition() {
    let pairs = vec![("alpha", "beta"), ("gamma", "delta"), ("beta", "epsilon")];
    let first: DisjointSet<&str> = pairs.iter().copied().collect();
    let second: DisjointSet<&str> = pairs.iter().copied().collect();

    assert_eq!(first, second);
    assert_eq!(first.root_of(&"epsilon"), second.root_of(&"epsilon"));
}

#[rstest]
fn test_string_and_integer_elements() {
    let strings = DisjointSet::new().union(&"key".to_string(), &"other".to_string());
    assert!(strings.same_set(&"key".to_string(), &"other".to_string()));

    let integers = DisjointSet::new().union(&42_u64, &u64::MAX);
    assert!(integers.same_set(&42, &u64::MAX));
}

// =============================================================================
// Scale Tests
// =============================================================================

/// Enough elements to force several trie levels under every hasher.
#[rstest]
#[case(1_000)]
#[case(20_000)]
fn test_many_elements(#[case] count: u32) {
    let forest = (0..count).fold(DisjointSet::new(), |forest, value| {
        forest.union(&value, &(value % 7))
    });

    assert_eq!(forest.len(), count as usize);
    assert_eq!(forest.set_count(), 7);
    for value in (0..count).step_by(97) {
        assert!(forest.same_set(&value, &(value % 7)));
        assert!(!forest.same_set(&value, &((value + 1) % 7)));
    }
}

#[rstest]
fn test_tuple_elements() {
    let forest = DisjointSet::new()
        .union(&(0, 0), &(0, 1))
        .union(&(0, 1), &(1, 1));
    assert!(forest.same_set(&(0, 0), &(1, 1)));
    assert!(!forest.same_set(&(0, 0), &(2, 2)));
}
