//! Persistent (immutable) data structures.
//!
//! This module provides two immutable data structures that use structural
//! sharing to minimize copying:
//!
//! - [`LeftistHeap`]: Meldable priority queue ordered by a caller-supplied comparator
//! - [`DisjointSet`]: Union-find forest over hashable elements
//!
//! # Structural Sharing
//!
//! Every "mutating" operation copies only the path it touches. For a heap
//! that is the right spines walked by the merge; for a forest it is the
//! trie path leading to each updated parent or rank entry.
//!
//! # Examples
//!
//! ## `LeftistHeap`
//!
//! ```rust
//! use heapforest::persistent::LeftistHeap;
//!
//! let heap = LeftistHeap::min_heap().push(5).push(1).push(3);
//! let (smallest, rest) = heap.pop();
//! assert_eq!(smallest, Some(1));
//! assert_eq!(rest.peek(), Some(&3));
//!
//! // The original heap is preserved
//! assert_eq!(heap.len(), 3);
//! assert_eq!(heap.peek(), Some(&1));
//! ```
//!
//! ## `DisjointSet`
//!
//! ```rust
//! use heapforest::persistent::DisjointSet;
//!
//! let forest = DisjointSet::new().union(&1, &2).union(&3, &4);
//! assert!(!forest.same_set(&1, &3));
//!
//! let joined = forest.union(&2, &4);
//! assert!(joined.same_set(&1, &3));
//! assert!(!forest.same_set(&1, &3)); // Original unchanged
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod comparator;
mod disjoint_set;
mod hash_trie;
mod leftist_heap;

pub use comparator::ComparatorError;
pub use comparator::Precedence;
pub use comparator::Shareable;
pub use disjoint_set::DisjointSet;
pub use leftist_heap::LeftistHeap;
pub use leftist_heap::LeftistHeapIntoIterator;
pub use leftist_heap::LeftistHeapIterator;

// Rc-backed structures must stay on one thread
#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(LeftistHeap<i32>: Send, Sync);
#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(DisjointSet<i32>: Send, Sync);

#[cfg(feature = "arc")]
mod arc_send_sync_verification {
    use super::{DisjointSet, LeftistHeap};

    static_assertions::assert_impl_all!(LeftistHeap<i32>: Send, Sync);
    static_assertions::assert_impl_all!(LeftistHeap<String>: Send, Sync);
    static_assertions::assert_impl_all!(DisjointSet<i32>: Send, Sync);
    static_assertions::assert_impl_all!(DisjointSet<String>: Send, Sync);
}

// =============================================================================
// Tests
// =============================================================================
