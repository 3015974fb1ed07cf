//! Persistent (immutable) disjoint-set forest.
//!
//! This module provides [`DisjointSet`], a union-find structure over
//! arbitrary hashable elements that uses structural sharing for efficient
//! operations.
//!
//! # Overview
//!
//! The forest is a map from each element to its parent plus a map from each
//! root to its rank. Following parent links from any element ends at a root,
//! an element that is its own parent; two elements are in the same set when
//! they reach the same root.
//!
//! - [`find`](DisjointSet::find) compresses the path it walks, pointing every
//!   element on it directly at the root
//! - [`union`](DisjointSet::union) hangs the root of lower rank under the
//!   root of higher rank
//! - Elements are registered lazily: the first `find` or `union` that
//!   mentions an element makes it a singleton set of rank 1
//!
//! Both maps are persistent hash tries, so every operation returns a new
//! forest that shares all untouched entries with the old one.
//!
//! # Examples
//!
//! ```rust
//! use heapforest::persistent::DisjointSet;
//!
//! let forest = DisjointSet::new()
//!     .union(&"ann", &"bob")
//!     .union(&"cat", &"dan");
//!
//! let (ann_root, forest) = forest.find(&"ann");
//! let (bob_root, forest) = forest.find(&"bob");
//! assert_eq!(ann_root, bob_root);
//! assert_eq!(forest.set_count(), 2);
//!
//! let merged = forest.union(&"bob", &"cat");
//! assert_eq!(merged.set_count(), 1);
//! assert_eq!(forest.set_count(), 2); // Original unchanged
//! ```

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use smallvec::SmallVec;
use tracing::trace;

use super::hash_trie::HashTrie;
use crate::typeclass::Semigroup;

/// Inline capacity for the path walked by `find`.
///
/// Union by rank keeps trees at most `log2(n)` high.
const PATH_CAPACITY: usize = 16;

/// Rank given to a newly registered singleton.
const INITIAL_RANK: usize = 1;

/// A persistent (immutable) disjoint-set forest.
///
/// # Time Complexity
///
/// | Operation  | Complexity                          |
/// |------------|-------------------------------------|
/// | `find`     | O(log n), amortized O(α(n))         |
/// | `union`    | two `find`s plus O(1) updates       |
/// | `root_of`  | O(log n), never compresses          |
/// | `len`      | O(1)                                |
/// | `set_count`| O(1)                                |
///
/// Each map update also copies one trie path, which is O(log32 n).
///
/// # Examples
///
/// ```rust
/// use heapforest::persistent::DisjointSet;
///
/// let (root, forest) = DisjointSet::new().find(&10);
/// assert_eq!(root, 10);
/// assert_eq!(forest.len(), 1);
/// assert_eq!(forest.rank_of(&10), Some(1));
/// ```
#[derive(Clone)]
pub struct DisjointSet<T> {
    /// Parent of every registered element. Roots map to themselves.
    parents: HashTrie<T, T>,
    /// Rank of every element that has ever been a root.
    ranks: HashTrie<T, usize>,
    /// Number of distinct sets, maintained incrementally.
    set_count: usize,
}

impl<T> DisjointSet<T> {
    /// Creates an empty forest.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            parents: HashTrie::new(),
            ranks: HashTrie::new(),
            set_count: 0,
        }
    }

    /// Returns the number of registered elements.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.parents.len()
    }

    /// Returns `true` if no element has been registered.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.parents.len() == 0
    }

    /// Returns the number of disjoint sets.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use heapforest::persistent::DisjointSet;
    ///
    /// let forest = DisjointSet::new().union(&1, &2).union(&3, &3);
    /// assert_eq!(forest.len(), 3);
    /// assert_eq!(forest.set_count(), 2);
    /// ```
    #[inline]
    #[must_use]
    pub const fn set_count(&self) -> usize {
        self.set_count
    }

    /// Returns an iterator over the registered elements, in no fixed order.
    pub fn elements(&self) -> impl Iterator<Item = &T> {
        self.parents.iter().map(|(element, _)| element)
    }
}

impl<T: Clone + Hash + Eq> DisjointSet<T> {
    /// Finds the root of the set containing `element`.
    ///
    /// Returns the root and the updated forest:
    ///
    /// - An unseen `element` is registered as its own root with rank 1.
    /// - A root is returned with an unchanged forest.
    /// - Otherwise every element on the path from `element` to the root is
    ///   re-pointed directly at the root (path compression).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use heapforest::persistent::DisjointSet;
    ///
    /// let forest = DisjointSet::new().union(&1, &2).union(&3, &1);
    /// let (root, compressed) = forest.find(&3);
    /// assert!(root == 2 || root == 3);
    ///
    /// // Compression never changes the partition
    /// assert!(compressed.same_set(&1, &3));
    /// ```
    #[must_use]
    pub fn find(&self, element: &T) -> (T, Self) {
        let Some(mut current) = self.parents.get(element) else {
            return (element.clone(), self.register(element.clone()));
        };
        if current == element {
            return (element.clone(), self.clone());
        }

        let mut path: SmallVec<[&T; PATH_CAPACITY]> = SmallVec::new();
        path.push(element);
        while let Some(parent) = self.parents.get(current).filter(|parent| *parent != current) {
            path.push(current);
            current = parent;
        }
        let root = current;

        let stale: SmallVec<[&T; PATH_CAPACITY]> = path
            .into_iter()
            .filter(|node| self.parents.get(node) != Some(root))
            .collect();
        if stale.is_empty() {
            return (root.clone(), self.clone());
        }

        trace!(compressed = stale.len(), "compressing disjoint-set path");
        let parents = stale
            .into_iter()
            .fold(self.parents.clone(), |parents, node| {
                parents.insert(node.clone(), root.clone())
            });
        (
            root.clone(),
            Self {
                parents,
                ranks: self.ranks.clone(),
                set_count: self.set_count,
            },
        )
    }

    /// Merges the sets containing `first` and `second`.
    ///
    /// Both elements are resolved with [`find`](Self::find), registering them
    /// if unseen. If their roots differ, the root of lower rank is attached
    /// under the other. On equal ranks the root of `first` goes under the
    /// root of `second`, whose rank grows by one. The absorbed root's rank
    /// is left as it was.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use heapforest::persistent::DisjointSet;
    ///
    /// let forest = DisjointSet::new().union(&20, &30).union(&40, &50);
    /// assert!(!forest.same_set(&20, &40));
    ///
    /// let joined = forest.union(&30, &50);
    /// assert!(joined.same_set(&20, &40));
    /// ```
    #[must_use]
    pub fn union(&self, first: &T, second: &T) -> Self {
        let (first_root, forest) = self.find(first);
        let (second_root, forest) = forest.find(second);
        if first_root == second_root {
            return forest;
        }

        let first_rank = forest.root_rank(&first_root);
        let second_rank = forest.root_rank(&second_root);
        match first_rank.cmp(&second_rank) {
            Ordering::Greater => forest.attach(second_root, first_root, None),
            Ordering::Less => forest.attach(first_root, second_root, None),
            Ordering::Equal => forest.attach(first_root, second_root, Some(second_rank + 1)),
        }
    }

    /// Returns whether `first` and `second` are in the same set, together
    /// with the forest after resolving both with [`find`](Self::find).
    #[must_use]
    pub fn connected(&self, first: &T, second: &T) -> (bool, Self) {
        let (first_root, forest) = self.find(first);
        let (second_root, forest) = forest.find(second);
        (first_root == second_root, forest)
    }

    /// Returns the root of `element` without registering or compressing.
    ///
    /// Returns `None` if `element` has never been seen.
    #[must_use]
    pub fn root_of(&self, element: &T) -> Option<&T> {
        let mut current = self.parents.get(element)?;
        while let Some(parent) = self.parents.get(current).filter(|parent| *parent != current) {
            current = parent;
        }
        Some(current)
    }

    /// Returns `true` if both elements are in the same set.
    ///
    /// Read-only: unseen elements are treated as singletons, so an unseen
    /// element is only in the same set as itself.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use heapforest::persistent::DisjointSet;
    ///
    /// let forest = DisjointSet::new().union(&'a', &'b');
    /// assert!(forest.same_set(&'a', &'b'));
    /// assert!(forest.same_set(&'z', &'z'));
    /// assert!(!forest.same_set(&'a', &'z'));
    /// ```
    #[must_use]
    pub fn same_set(&self, first: &T, second: &T) -> bool {
        match (self.root_of(first), self.root_of(second)) {
            (Some(first_root), Some(second_root)) => first_root == second_root,
            (None, None) => first == second,
            _ => false,
        }
    }

    /// Returns `true` if `element` has been registered.
    #[must_use]
    pub fn contains(&self, element: &T) -> bool {
        self.parents.get(element).is_some()
    }

    /// Returns the rank of `element` if it is currently a root.
    #[must_use]
    pub fn rank_of(&self, element: &T) -> Option<usize> {
        self.parents
            .get(element)
            .filter(|parent| *parent == element)
            .and_then(|_| self.ranks.get(element).copied())
    }

    /// Returns the sets of the partition, each as a `Vec` of its elements.
    ///
    /// Neither the order of the sets nor the order within a set is fixed.
    #[must_use]
    pub fn sets(&self) -> Vec<Vec<T>> {
        let mut groups: HashMap<&T, Vec<T>> = HashMap::with_capacity(self.set_count);
        for element in self.elements() {
            if let Some(root) = self.root_of(element) {
                groups.entry(root).or_default().push(element.clone());
            }
        }
        groups.into_values().collect()
    }

    fn register(&self, element: T) -> Self {
        trace!("registering disjoint-set singleton");
        Self {
            parents: self.parents.insert(element.clone(), element.clone()),
            ranks: self.ranks.insert(element, INITIAL_RANK),
            set_count: self.set_count + 1,
        }
    }

    fn root_rank(&self, root: &T) -> usize {
        self.ranks.get(root).copied().unwrap_or(INITIAL_RANK)
    }

    /// Hangs `child` under `parent`; both must be roots.
    fn attach(&self, child: T, parent: T, parent_rank: Option<usize>) -> Self {
        trace!(
            grown = parent_rank.is_some(),
            sets = self.set_count - 1,
            "attaching disjoint-set root"
        );
        let ranks = match parent_rank {
            Some(rank) => self.ranks.insert(parent.clone(), rank),
            None => self.ranks.clone(),
        };
        Self {
            parents: self.parents.insert(child, parent),
            ranks,
            set_count: self.set_count - 1,
        }
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for DisjointSet<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a forest by applying [`union`](DisjointSet::union) to each pair.
impl<T: Clone + Hash + Eq> FromIterator<(T, T)> for DisjointSet<T> {
    fn from_iter<I: IntoIterator<Item = (T, T)>>(iter: I) -> Self {
        let mut forest = Self::new();
        forest.extend(iter);
        forest
    }
}

impl<T: Clone + Hash + Eq> Extend<(T, T)> for DisjointSet<T> {
    fn extend<I: IntoIterator<Item = (T, T)>>(&mut self, iter: I) {
        *self = iter
            .into_iter()
            .fold(self.clone(), |forest, (first, second)| {
                forest.union(&first, &second)
            });
    }
}

/// Two forests are equal when they hold the same elements in the same
/// partition, whatever their tree shapes and ranks.
impl<T: Clone + Hash + Eq> PartialEq for DisjointSet<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() || self.set_count != other.set_count {
            return false;
        }
        let mut matched: HashMap<&T, &T> = HashMap::with_capacity(self.set_count);
        self.elements()
            .all(|element| match (self.root_of(element), other.root_of(element)) {
                (Some(own_root), Some(other_root)) => {
                    *matched.entry(own_root).or_insert(other_root) == other_root
                }
                _ => false,
            })
    }
}

impl<T: Clone + Hash + Eq> Eq for DisjointSet<T> {}

impl<T: Clone + Hash + Eq + fmt::Debug> fmt::Debug for DisjointSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.sets()).finish()
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

/// Combining joins the partitions: two elements end up in the same set when
/// either forest puts them together.
impl<T: Clone + Hash + Eq> Semigroup for DisjointSet<T> {
    fn combine(self, other: Self) -> Self {
        self.combine_ref(&other)
    }

    fn combine_ref(&self, other: &Self) -> Self {
        other.elements().fold(self.clone(), |forest, element| {
            match other.root_of(element) {
                Some(root) => forest.union(element, root),
                None => forest,
            }
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
