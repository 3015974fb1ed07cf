//! Unit tests for LeftistHeap.
//!
//! Covers construction, the comparator contract, persistence of every
//! version and the standard trait implementations.

use heapforest::persistent::{ComparatorError, LeftistHeap};
use heapforest::typeclass::{Foldable, Semigroup};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rstest::rstest;

fn shuffled(range: std::ops::RangeInclusive<i32>, seed: u64) -> Vec<i32> {
    let mut values: Vec<i32> = range.collect();
    values.shuffle(&mut StdRng::seed_from_u64(seed));
    values
}

fn drain<T: Clone>(heap: &LeftistHeap<T>) -> Vec<T> {
    let mut drained = Vec::with_capacity(heap.len());
    let mut current = heap.clone();
    while let (Some(value), rest) = current.pop() {
        drained.push(value);
        current = rest;
    }
    drained
}

// =============================================================================
// Draining Order
// =============================================================================

#[rstest]
#[case(1)]
#[case(42)]
#[case(2024)]
fn test_min_heap_drains_shuffled_input_in_ascending_order(#[case] seed: u64) {
    let heap = shuffled(1..=500, seed)
        .into_iter()
        .fold(LeftistHeap::min_heap(), |heap, value| heap.push(value));

    assert_eq!(heap.len(), 500);
    assert!(heap.is_valid());
    assert_eq!(drain(&heap), (1..=500).collect::<Vec<_>>());
}

#[rstest]
fn test_custom_max_comparator_drains_descending() {
    let heap = shuffled(1..=10, 7)
        .into_iter()
        .fold(
            LeftistHeap::with_comparator(|left: &i32, right: &i32| left > right),
            |heap, value| heap.push(value),
        );

    assert_eq!(drain(&heap), (1..=10).rev().collect::<Vec<_>>());
}

#[rstest]
fn test_max_heap_matches_custom_comparator() {
    let values = shuffled(1..=64, 3);
    let custom = LeftistHeap::with_comparator(|left: &i32, right: &i32| left > right)
        .push_all(values.iter().copied());
    let built_in = LeftistHeap::max_heap().push_all(values);

    assert_eq!(custom.to_sorted_vec(), built_in.to_sorted_vec());
}

#[rstest]
fn test_duplicates_are_kept() {
    let heap = LeftistHeap::min_heap().push(2).push(1).push(2).push(1);
    assert_eq!(drain(&heap), vec![1, 1, 2, 2]);
}

#[rstest]
fn test_comparator_over_struct_field() {
    #[derive(Clone, Debug, PartialEq)]
    struct Job {
        priority: u8,
        name: &'static str,
    }

    let heap = LeftistHeap::with_comparator(|left: &Job, right: &Job| {
        left.priority >= right.priority
    })
    .push(Job { priority: 1, name: "sweep" })
    .push(Job { priority: 9, name: "deploy" })
    .push(Job { priority: 5, name: "build" });

    let names: Vec<_> = heap.into_iter().map(|job| job.name).collect();
    assert_eq!(names, vec!["deploy", "build", "sweep"]);
}

// =============================================================================
// Degenerate Shapes
// =============================================================================

/// Monotone input makes every new root take the old tree as its left child,
/// giving a left chain as long as the heap.
const CHAIN_LENGTH: i32 = 200_000;

#[rstest]
fn test_descending_pushes_into_min_heap_drop_without_overflow() {
    let heap = (0..CHAIN_LENGTH)
        .rev()
        .fold(LeftistHeap::min_heap(), |heap, value| heap.push(value));

    assert_eq!(heap.rank(), 1);
    assert_eq!(heap.len(), 200_000);
    assert_eq!(heap.peek(), Some(&0));
    drop(heap);
}

#[rstest]
fn test_ascending_pushes_into_max_heap_drain_and_drop() {
    let heap = (0..CHAIN_LENGTH).fold(LeftistHeap::max_heap(), |heap, value| heap.push(value));
    let snapshot = heap.clone();

    let drained = heap.into_sorted_vec();
    assert_eq!(drained.len(), 200_000);
    assert_eq!(drained.first(), Some(&(CHAIN_LENGTH - 1)));
    assert_eq!(drained.last(), Some(&0));

    // The clone still owns the whole chain after the drain released its copy.
    assert_eq!(snapshot.len(), 200_000);
    assert_eq!(snapshot.peek(), Some(&(CHAIN_LENGTH - 1)));
}

#[rstest]
fn test_extend_with_descending_values_then_drop() {
    let mut heap = LeftistHeap::min_heap();
    heap.extend((0..CHAIN_LENGTH).rev());
    let (top, rest) = heap.pop();

    assert_eq!(top, Some(0));
    drop(heap);
    assert_eq!(rest.len(), 199_999);
    assert_eq!(rest.peek(), Some(&1));
}

#[rstest]
fn test_dropping_one_version_keeps_shared_chain() {
    let base = (0..CHAIN_LENGTH)
        .rev()
        .fold(LeftistHeap::min_heap(), |heap, value| heap.push(value));
    let extended = base.push(-1);

    drop(base);
    assert_eq!(extended.len(), 200_001);
    assert!(extended.contains(&(CHAIN_LENGTH - 1)));
    assert_eq!(extended.pop().1.peek(), Some(&0));
}

// =============================================================================
// Empty Heap Behavior
// =============================================================================

#[rstest]
fn test_peek_on_empty_heap() {
    let heap: LeftistHeap<i32> = LeftistHeap::min_heap();
    assert_eq!(heap.peek(), None);
    assert_eq!(heap.peek_or(&10), &10);
}

#[rstest]
fn test_peek_or_prefers_top() {
    let heap = LeftistHeap::min_heap().push(4);
    assert_eq!(heap.peek_or(&10), &4);
}

#[rstest]
fn test_pop_on_empty_heap_returns_none_and_empty_heap() {
    let heap: LeftistHeap<i32> = LeftistHeap::min_heap();
    let (value, rest) = heap.pop();
    assert_eq!(value, None);
    assert!(rest.is_empty());
    assert_eq!(rest, heap);
}

#[rstest]
fn test_pop_or_on_empty_heap_returns_default() {
    let heap: LeftistHeap<i32> = LeftistHeap::min_heap();
    let (value, rest) = heap.pop_or(-1);
    assert_eq!(value, -1);
    assert!(rest.is_empty());
}

#[rstest]
fn test_rank_of_empty_heap_is_zero() {
    let heap: LeftistHeap<i32> = LeftistHeap::min_heap();
    assert_eq!(heap.rank(), 0);
    assert_eq!(heap.push(1).rank(), 1);
}

// =============================================================================
// Persistence
// =============================================================================

#[rstest]
fn test_push_leaves_original_untouched() {
    let original = LeftistHeap::min_heap().push(3).push(1);
    let pushed = original.push(0);

    assert_eq!(original.len(), 2);
    assert_eq!(original.peek(), Some(&1));
    assert_eq!(pushed.peek(), Some(&0));
}

#[rstest]
fn test_pop_leaves_original_untouched() {
    let original = LeftistHeap::min_heap().push_all(vec![5, 2, 8]);
    let (top, rest) = original.pop();

    assert_eq!(top, Some(2));
    assert_eq!(rest.len(), 2);
    assert_eq!(drain(&original), vec![2, 5, 8]);
}

#[rstest]
fn test_merge_leaves_both_inputs_untouched() {
    let left = LeftistHeap::min_heap().push_all(vec![1, 4, 7]);
    let right = LeftistHeap::min_heap().push_all(vec![2, 5]);
    let merged = left.merge(&right);

    assert_eq!(drain(&merged), vec![1, 2, 4, 5, 7]);
    assert_eq!(left.len(), 3);
    assert_eq!(right.len(), 2);
    assert!(merged.is_valid());
}

#[rstest]
fn test_merge_with_empty_is_identity() {
    let heap = LeftistHeap::min_heap().push_all(vec![3, 1, 2]);
    let empty = heap.empty_like();

    assert_eq!(heap.merge(&empty), heap);
    assert_eq!(empty.merge(&heap), heap);
}

#[rstest]
fn test_empty_like_keeps_comparator() {
    let heap = LeftistHeap::max_heap().push(1);
    let fresh = heap.empty_like().push(1).push(9);
    assert_eq!(fresh.peek(), Some(&9));
}

// =============================================================================
// Comparator Contract
// =============================================================================

#[rstest]
fn test_try_push_reports_nan_as_violation() {
    let heap = LeftistHeap::min_heap().push(1.0);
    let error = heap.try_push(f64::NAN).unwrap_err();
    assert_eq!(error, ComparatorError::new("None"));
}

#[rstest]
#[should_panic(expected = "comparator contract violated")]
fn test_push_panics_on_violation() {
    let _ = LeftistHeap::min_heap().push(1.0).push(f64::NAN);
}

#[rstest]
fn test_result_comparator_error_is_reported() {
    let heap = LeftistHeap::with_comparator(|left: &i32, right: &i32| {
        if *left == 13 || *right == 13 {
            Err("unlucky")
        } else {
            Ok(left < right)
        }
    })
    .push(1)
    .push(2);

    let error = heap.try_push(13).unwrap_err();
    assert_eq!(error.returned(), "Err(\"unlucky\")");
    assert!(heap.try_push(3).is_ok());
}

#[rstest]
fn test_first_element_never_calls_comparator() {
    let heap = LeftistHeap::with_comparator(|_: &i32, _: &i32| None::<bool>);
    let single = heap.try_push(1).expect("a lone element is never compared");
    assert_eq!(single.peek(), Some(&1));
    assert!(single.try_push(2).is_err());
}

// =============================================================================
// Traits
// =============================================================================

#[rstest]
fn test_from_iterator_builds_min_heap() {
    let heap: LeftistHeap<i32> = vec![9, 3, 6].into_iter().collect();
    assert_eq!(heap.peek(), Some(&3));
    assert_eq!(heap.into_sorted_vec(), vec![3, 6, 9]);
}

#[rstest]
fn test_extend_uses_existing_comparator() {
    let mut heap = LeftistHeap::max_heap();
    heap.extend(vec![4, 8, 2]);
    assert_eq!(heap.peek(), Some(&8));
}

#[rstest]
fn test_iter_visits_every_element() {
    let heap = LeftistHeap::min_heap().push_all(1..=20);
    let mut seen: Vec<i32> = heap.iter().copied().collect();
    seen.sort_unstable();
    assert_eq!(seen, (1..=20).collect::<Vec<_>>());
    assert_eq!(heap.iter().len(), 20);
    assert!(heap.contains(&17));
    assert!(!heap.contains(&21));
}

#[rstest]
fn test_equality_compares_drained_order() {
    let left = LeftistHeap::min_heap().push_all(vec![1, 2, 3]);
    let right = LeftistHeap::min_heap().push(3).push(2).push(1);
    assert_eq!(left, right);
    assert_ne!(left, right.push(4));
}

#[rstest]
fn test_debug_lists_elements() {
    let heap = LeftistHeap::min_heap().push(1);
    assert_eq!(format!("{heap:?}"), "[1]");
}

#[rstest]
fn test_fold_left_sums_elements() {
    let heap = LeftistHeap::min_heap().push_all(1..=10);
    assert_eq!(heap.length(), 10);
    assert_eq!(heap.fold_left(0, |sum, value| sum + value), 55);
}

#[rstest]
fn test_combine_merges_heaps() {
    let left = LeftistHeap::min_heap().push_all(vec![5, 1]);
    let right = LeftistHeap::min_heap().push_all(vec![3]);
    assert_eq!(left.combine(right).into_sorted_vec(), vec![1, 3, 5]);
}
