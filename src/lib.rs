//! # heapforest
//!
//! Persistent (immutable) building blocks: a meldable leftist heap and a
//! disjoint-set (union-find) forest.
//!
//! ## Overview
//!
//! Every operation takes a structure by reference and returns a new value.
//! The original value stays valid and observably unchanged, and the new value
//! shares every subtree or trie node that the operation did not touch.
//!
//! - **[`LeftistHeap`](persistent::LeftistHeap)**: priority queue ordered by a
//!   comparator fixed at construction, with O(log n) `push`, `pop` and `merge`
//! - **[`DisjointSet`](persistent::DisjointSet)**: union-find over hashable
//!   elements with path compression and union by rank
//! - **Type Classes**: `Semigroup` and `Foldable` integrations for both
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (`Semigroup`, `Foldable`)
//! - `persistent`: Persistent data structures
//! - `arc`: Use `Arc` instead of `Rc` so structures can be shared across threads
//! - `fxhash`: Hash forest elements with `FxHasher`
//! - `ahash`: Hash forest elements with `AHasher`
//! - `full`: Enable all features except the hasher selections
//!
//! ## Example
//!
//! ```rust
//! use heapforest::prelude::*;
//!
//! let heap = LeftistHeap::min_heap().push(3).push(1).push(2);
//! assert_eq!(heap.peek(), Some(&1));
//!
//! let forest = DisjointSet::new().union(&"a", &"b");
//! assert!(forest.same_set(&"a", &"b"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use heapforest::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "persistent")]
    pub use crate::persistent::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "persistent")]
pub mod persistent;
