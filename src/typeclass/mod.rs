//! Type class traits shared by the persistent structures.
//!
//! - [`TypeConstructor`]: Emulates higher-kinded types with a GAT
//! - [`Semigroup`]: Associative combination of two values
//! - [`Foldable`]: Reducing a structure to a summary value
//!
//! Both [`LeftistHeap`](crate::persistent::LeftistHeap) and
//! [`DisjointSet`](crate::persistent::DisjointSet) are semigroups: heaps
//! combine by melding, forests by taking the join of their partitions.
//! Heaps are also foldable in heap order.
//!
//! # Examples
//!
//! ```rust
//! use heapforest::persistent::LeftistHeap;
//! use heapforest::typeclass::{Foldable, Semigroup};
//!
//! let left = LeftistHeap::min_heap().push(4).push(1);
//! let right = LeftistHeap::min_heap().push(3).push(2);
//!
//! let melded = left.combine(right);
//! assert_eq!(melded.to_list(), vec![1, 2, 3, 4]);
//! ```

mod foldable;
mod higher;
mod semigroup;

pub use foldable::Foldable;
pub use higher::TypeConstructor;
pub use semigroup::Semigroup;
