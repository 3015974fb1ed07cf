//! Persistent (immutable) leftist heap.
//!
//! This module provides [`LeftistHeap`], a meldable priority queue that uses
//! structural sharing for efficient operations.
//!
//! # Overview
//!
//! A leftist heap is a binary tree in heap order whose every node satisfies
//! the *leftist property*: the rank of the left child is at least the rank of
//! the right child, where the rank of a tree is the length of its rightmost
//! spine (`0` for the empty tree). Right spines are therefore at most
//! `log2(n + 1)` long, and merging two heaps walks only their right spines.
//!
//! - O(log n) `merge`, `push` and `pop`
//! - O(1) `peek`, `len` and `is_empty`
//! - O(n) `contains` (a full scan, the heap order is not consulted)
//!
//! Heap order is defined by a comparator bound when the heap is created and
//! carried unchanged by every heap derived from it.
//!
//! # Examples
//!
//! ```rust
//! use heapforest::persistent::LeftistHeap;
//!
//! let heap = LeftistHeap::min_heap().push(3).push(1).push(2);
//! assert_eq!(heap.peek(), Some(&1));
//!
//! // Structural sharing: the original heap is preserved
//! let (smallest, rest) = heap.pop();
//! assert_eq!(smallest, Some(1));
//! assert_eq!(rest.len(), 2);
//! assert_eq!(heap.len(), 3);
//!
//! // Draining yields heap order
//! let drained: Vec<i32> = heap.into_iter().collect();
//! assert_eq!(drained, vec![1, 2, 3]);
//! ```
//!
//! # Structural Sharing
//!
//! Merging rebuilds only the roots it passes on the right spines; every
//! other subtree is shared with the input heaps:
//!
//! ```text
//! heap1:    1          heap2:    2
//!          / \                  /
//!         4   3                5
//!
//! heap1.merge(&heap2):      1'
//!                          / \
//!                        2'   [4]
//!                       / \
//!                     [5] [3]          only 1' and 2' are new nodes
//! ```

use std::collections::VecDeque;
use std::fmt;

use smallvec::SmallVec;

use super::ReferenceCounter;
use super::comparator::{Checked, ComparatorError, Precedence, Shareable, SharedComparator};
use crate::typeclass::{Foldable, Semigroup, TypeConstructor};

/// Inline capacity for the spine walked by a merge.
///
/// Each right spine holds at most `log2(n + 1)` nodes, so two spines of
/// heaps with fewer than 2^16 elements never spill to the heap.
const SPINE_CAPACITY: usize = 32;

/// Inline capacity for traversal stacks.
const TRAVERSAL_CAPACITY: usize = 16;

// =============================================================================
// Node Definition
// =============================================================================

/// Internal node structure for the leftist heap.
///
/// Nodes are never mutated after construction.
struct Node<T> {
    /// Length of the rightmost spine starting at this node.
    rank: usize,
    /// The element stored in this node.
    value: T,
    /// Subtree with the larger (or equal) rank.
    left: Tree<T>,
    /// Subtree with the smaller (or equal) rank.
    right: Tree<T>,
}

/// A possibly empty subtree.
type Tree<T> = Option<ReferenceCounter<Node<T>>>;

#[inline]
fn rank<T>(tree: &Tree<T>) -> usize {
    tree.as_ref().map_or(0, |node| node.rank)
}

#[inline]
fn singleton<T>(value: T) -> Tree<T> {
    Some(ReferenceCounter::new(Node {
        rank: 1,
        value,
        left: None,
        right: None,
    }))
}

/// Builds a node, placing the higher-rank subtree on the left.
fn make_node<T>(value: T, first: Tree<T>, second: Tree<T>) -> Tree<T> {
    let (left, right) = if rank(&first) >= rank(&second) {
        (first, second)
    } else {
        (second, first)
    };
    Some(ReferenceCounter::new(Node {
        rank: rank(&right) + 1,
        value,
        left,
        right,
    }))
}

/// Merges two trees along their right spines.
///
/// The spine is walked iteratively: each step keeps the root that the
/// comparator lets sit on top and continues with its right subtree against
/// the other tree. The winners are then rebuilt bottom-up with [`make_node`],
/// so only spine nodes are copied.
fn merge_trees<T: Clone>(
    first: &Tree<T>,
    second: &Tree<T>,
    comparator: &SharedComparator<T>,
) -> Result<Tree<T>, ComparatorError> {
    let mut spine: SmallVec<[&Node<T>; SPINE_CAPACITY]> = SmallVec::new();
    let mut first = first;
    let mut second = second;

    let tail = loop {
        match (first, second) {
            (None, remaining) | (remaining, None) => break remaining.clone(),
            (Some(first_node), Some(second_node)) => {
                if comparator.precedes(&first_node.value, &second_node.value)? {
                    spine.push(first_node);
                    first = &first_node.right;
                } else {
                    spine.push(second_node);
                    second = &second_node.right;
                }
            }
        }
    };

    Ok(spine.into_iter().rev().fold(tail, |merged, node| {
        make_node(node.value.clone(), node.left.clone(), merged)
    }))
}

/// Aborts on a comparator contract violation.
#[cold]
fn contract_violation(error: &ComparatorError) -> ! {
    tracing::error!(returned = error.returned(), "leftist heap comparator returned a non-boolean");
    panic!("{error}")
}

// =============================================================================
// LeftistHeap Definition
// =============================================================================

/// A persistent (immutable) leftist heap.
///
/// The comparator answers whether its first argument may sit above its
/// second. `a < b` gives a min-heap, `a > b` a max-heap. Each heap holds a
/// shared reference to its comparator, and every heap derived from it by
/// `push`, `pop` or `merge` uses the same one.
///
/// # Time Complexity
///
/// | Operation  | Complexity |
/// |------------|------------|
/// | `peek`     | O(1)       |
/// | `len`      | O(1)       |
/// | `push`     | O(log n)   |
/// | `pop`      | O(log n)   |
/// | `merge`    | O(log n)   |
/// | `contains` | O(n)       |
///
/// # Panics
///
/// `push`, `pop`, `merge` and everything built on them panic if the
/// comparator returns a non-boolean [`Precedence`]. Use the `try_*`
/// variants to receive a [`ComparatorError`] instead.
///
/// # Examples
///
/// ```rust
/// use heapforest::persistent::LeftistHeap;
///
/// let by_length = LeftistHeap::with_comparator(|left: &&str, right: &&str| {
///     left.len() < right.len()
/// });
/// let heap = by_length.push("three").push("a").push("to");
/// assert_eq!(heap.peek(), Some(&"a"));
/// ```
pub struct LeftistHeap<T> {
    /// Root of the tree (if any).
    root: Tree<T>,
    /// Cached number of elements.
    length: usize,
    /// Ordering shared by every version of this heap.
    comparator: ReferenceCounter<SharedComparator<T>>,
}

impl<T> LeftistHeap<T> {
    /// Creates an empty heap ordered by `comparator`.
    ///
    /// `comparator(a, b)` returns `true` when `a` must not be placed below
    /// `b`. It may return any [`Precedence`], such as `bool` or
    /// `Option<bool>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use heapforest::persistent::LeftistHeap;
    ///
    /// let heap = LeftistHeap::with_comparator(|left: &i32, right: &i32| left % 10 < right % 10)
    ///     .push(19)
    ///     .push(21);
    /// assert_eq!(heap.peek(), Some(&21));
    /// ```
    #[must_use]
    pub fn with_comparator<F, R>(comparator: F) -> Self
    where
        F: Fn(&T, &T) -> R + Shareable + 'static,
        R: Precedence + 'static,
    {
        Self {
            root: None,
            length: 0,
            comparator: ReferenceCounter::new(Checked::new(comparator)),
        }
    }

    /// Creates an empty heap with the same comparator as this one.
    #[inline]
    #[must_use]
    pub fn empty_like(&self) -> Self {
        Self {
            root: None,
            length: 0,
            comparator: ReferenceCounter::clone(&self.comparator),
        }
    }

    /// Returns the number of elements in the heap.
    ///
    /// # Complexity
    ///
    /// O(1) - the length is cached
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the heap contains no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use heapforest::persistent::LeftistHeap;
    ///
    /// let empty: LeftistHeap<i32> = LeftistHeap::min_heap();
    /// assert!(empty.is_empty());
    /// assert!(!empty.push(1).is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the rank of the root: the length of the rightmost spine.
    ///
    /// The empty heap has rank 0.
    #[inline]
    #[must_use]
    pub fn rank(&self) -> usize {
        rank(&self.root)
    }

    /// Returns a reference to the element at the top of the heap.
    ///
    /// Returns `None` if the heap is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use heapforest::persistent::LeftistHeap;
    ///
    /// let heap = LeftistHeap::max_heap().push(1).push(7);
    /// assert_eq!(heap.peek(), Some(&7));
    ///
    /// let empty: LeftistHeap<i32> = LeftistHeap::max_heap();
    /// assert_eq!(empty.peek(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.root.as_ref().map(|node| &node.value)
    }

    /// Returns the element at the top of the heap, or `default` if empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use heapforest::persistent::LeftistHeap;
    ///
    /// let empty: LeftistHeap<i32> = LeftistHeap::min_heap();
    /// assert_eq!(empty.peek_or(&10), &10);
    /// assert_eq!(empty.push(3).peek_or(&10), &3);
    /// ```
    #[inline]
    #[must_use]
    pub fn peek_or<'a>(&'a self, default: &'a T) -> &'a T {
        self.peek().unwrap_or(default)
    }

    /// Returns an iterator over references to the elements.
    ///
    /// The iterator walks the tree in pre-order, so only the first element is
    /// guaranteed to be the top of the heap. Use [`into_iter`](IntoIterator)
    /// or [`to_sorted_vec`](Self::to_sorted_vec) for heap order.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> LeftistHeapIterator<'_, T> {
        let mut stack = SmallVec::new();
        if let Some(node) = &self.root {
            stack.push(&**node);
        }
        LeftistHeapIterator {
            stack,
            remaining: self.length,
        }
    }

    /// Returns `true` if the heap contains an element equal to `value`.
    ///
    /// Elements are compared with `==`, never with the heap's comparator.
    ///
    /// # Complexity
    ///
    /// O(n) - every node is visited in the worst case
    ///
    /// # Examples
    ///
    /// ```rust
    /// use heapforest::persistent::LeftistHeap;
    ///
    /// let heap = LeftistHeap::min_heap().push(4).push(8);
    /// assert!(heap.contains(&8));
    /// assert!(!heap.contains(&5));
    /// ```
    #[must_use]
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|element| element == value)
    }

    /// Checks every structural invariant of the heap.
    ///
    /// Verifies heap order under the comparator, the leftist property, the
    /// rank of every node and the cached length. Returns `false` if any of
    /// them fails, including when the comparator breaks its contract.
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let mut count = 0;
        let mut stack: SmallVec<[&Node<T>; TRAVERSAL_CAPACITY]> = SmallVec::new();
        if let Some(node) = &self.root {
            stack.push(node);
        }

        while let Some(node) = stack.pop() {
            count += 1;
            if rank(&node.left) < rank(&node.right) || node.rank != rank(&node.right) + 1 {
                return false;
            }
            for child in [&node.left, &node.right].into_iter().flatten() {
                // A child may tie with its parent but never strictly precede it.
                let child_first = self.comparator.precedes(&child.value, &node.value);
                let parent_first = self.comparator.precedes(&node.value, &child.value);
                match (child_first, parent_first) {
                    (Ok(false), Ok(_)) | (Ok(true), Ok(true)) => stack.push(child),
                    _ => return false,
                }
            }
        }

        count == self.length
    }
}

impl<T: PartialOrd> LeftistHeap<T> {
    /// Creates an empty min-heap ordered by `<`.
    ///
    /// Incomparable elements (such as `f64::NAN`) violate the comparator
    /// contract once they meet another element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use heapforest::persistent::LeftistHeap;
    ///
    /// let heap = LeftistHeap::min_heap().push(2).push(1);
    /// assert_eq!(heap.peek(), Some(&1));
    /// ```
    #[must_use]
    pub fn min_heap() -> Self {
        Self::with_comparator(|left: &T, right: &T| {
            left.partial_cmp(right).map(std::cmp::Ordering::is_lt)
        })
    }

    /// Creates an empty max-heap ordered by `>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use heapforest::persistent::LeftistHeap;
    ///
    /// let heap = LeftistHeap::max_heap().push(2).push(1);
    /// assert_eq!(heap.peek(), Some(&2));
    /// ```
    #[must_use]
    pub fn max_heap() -> Self {
        Self::with_comparator(|left: &T, right: &T| {
            left.partial_cmp(right).map(std::cmp::Ordering::is_gt)
        })
    }
}

impl<T: Clone> LeftistHeap<T> {
    #[inline]
    fn with_root(&self, root: Tree<T>, length: usize) -> Self {
        Self {
            root,
            length,
            comparator: ReferenceCounter::clone(&self.comparator),
        }
    }

    /// Returns a new heap containing every element of this heap and `value`.
    ///
    /// # Panics
    ///
    /// Panics if the comparator returns a non-boolean verdict.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use heapforest::persistent::LeftistHeap;
    ///
    /// let heap = LeftistHeap::min_heap().push(2);
    /// let pushed = heap.push(1);
    /// assert_eq!(heap.peek(), Some(&2));   // Original unchanged
    /// assert_eq!(pushed.peek(), Some(&1)); // New version
    /// ```
    #[must_use]
    pub fn push(&self, value: T) -> Self {
        self.try_push(value)
            .unwrap_or_else(|error| contract_violation(&error))
    }

    /// Fallible version of [`push`](Self::push).
    ///
    /// # Errors
    ///
    /// Returns [`ComparatorError`] if the comparator returns a non-boolean
    /// verdict while placing `value`.
    pub fn try_push(&self, value: T) -> Result<Self, ComparatorError> {
        let root = merge_trees(&self.root, &singleton(value), &*self.comparator)?;
        Ok(self.with_root(root, self.length + 1))
    }

    /// Removes the top element.
    ///
    /// Returns the removed element and the remaining heap. On an empty heap
    /// returns `(None, heap)` with an unchanged copy of the heap.
    ///
    /// # Panics
    ///
    /// Panics if the comparator returns a non-boolean verdict.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use heapforest::persistent::LeftistHeap;
    ///
    /// let heap = LeftistHeap::min_heap().push(2).push(1);
    /// let (top, rest) = heap.pop();
    /// assert_eq!(top, Some(1));
    /// assert_eq!(rest.peek(), Some(&2));
    ///
    /// let (nothing, still_empty) = LeftistHeap::<i32>::min_heap().pop();
    /// assert_eq!(nothing, None);
    /// assert!(still_empty.is_empty());
    /// ```
    #[must_use]
    pub fn pop(&self) -> (Option<T>, Self) {
        self.try_pop()
            .unwrap_or_else(|error| contract_violation(&error))
    }

    /// Removes the top element, returning `default` if the heap is empty.
    ///
    /// # Panics
    ///
    /// Panics if the comparator returns a non-boolean verdict.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use heapforest::persistent::LeftistHeap;
    ///
    /// let (value, _) = LeftistHeap::<i32>::min_heap().pop_or(-1);
    /// assert_eq!(value, -1);
    /// ```
    #[must_use]
    pub fn pop_or(&self, default: T) -> (T, Self) {
        let (top, rest) = self.pop();
        (top.unwrap_or(default), rest)
    }

    /// Fallible version of [`pop`](Self::pop).
    ///
    /// # Errors
    ///
    /// Returns [`ComparatorError`] if the comparator returns a non-boolean
    /// verdict while merging the children of the removed root.
    pub fn try_pop(&self) -> Result<(Option<T>, Self), ComparatorError> {
        let Some(node) = &self.root else {
            return Ok((None, self.clone()));
        };
        let root = merge_trees(&node.left, &node.right, &*self.comparator)?;
        Ok((
            Some(node.value.clone()),
            self.with_root(root, self.length.saturating_sub(1)),
        ))
    }

    /// Melds two heaps into one containing the elements of both.
    ///
    /// The result keeps this heap's comparator; `other` is expected to be
    /// ordered by an equivalent one.
    ///
    /// # Panics
    ///
    /// Panics if the comparator returns a non-boolean verdict.
    ///
    /// # Complexity
    ///
    /// O(log n + log m)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use heapforest::persistent::LeftistHeap;
    ///
    /// let odds = LeftistHeap::min_heap().push(3).push(1);
    /// let evens = LeftistHeap::min_heap().push(4).push(2);
    /// let all = odds.merge(&evens);
    /// assert_eq!(all.to_sorted_vec(), vec![1, 2, 3, 4]);
    /// ```
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        self.try_merge(other)
            .unwrap_or_else(|error| contract_violation(&error))
    }

    /// Fallible version of [`merge`](Self::merge).
    ///
    /// # Errors
    ///
    /// Returns [`ComparatorError`] if the comparator returns a non-boolean
    /// verdict.
    pub fn try_merge(&self, other: &Self) -> Result<Self, ComparatorError> {
        let root = merge_trees(&self.root, &other.root, &*self.comparator)?;
        Ok(self.with_root(root, self.length + other.length))
    }

    /// Adds every element of `elements` in bulk.
    ///
    /// The elements are first built into a heap of their own by merging
    /// singletons pairwise, level by level, which takes O(m) comparisons for
    /// m elements. That heap is then merged into this one.
    ///
    /// # Panics
    ///
    /// Panics if the comparator returns a non-boolean verdict.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use heapforest::persistent::LeftistHeap;
    ///
    /// let heap = LeftistHeap::max_heap().push(5).push_all(vec![9, 1, 7]);
    /// assert_eq!(heap.len(), 4);
    /// assert_eq!(heap.peek(), Some(&9));
    /// ```
    #[must_use]
    pub fn push_all<I: IntoIterator<Item = T>>(&self, elements: I) -> Self {
        self.try_push_all(elements)
            .unwrap_or_else(|error| contract_violation(&error))
    }

    /// Fallible version of [`push_all`](Self::push_all).
    ///
    /// # Errors
    ///
    /// Returns [`ComparatorError`] if the comparator returns a non-boolean
    /// verdict.
    pub fn try_push_all<I: IntoIterator<Item = T>>(
        &self,
        elements: I,
    ) -> Result<Self, ComparatorError> {
        let mut queue: VecDeque<Tree<T>> = elements.into_iter().map(singleton).collect();
        let added = queue.len();

        while queue.len() > 1 {
            if let (Some(first), Some(second)) = (queue.pop_front(), queue.pop_front()) {
                queue.push_back(merge_trees(&first, &second, &*self.comparator)?);
            }
        }

        let built = queue.pop_front().flatten();
        let root = merge_trees(&self.root, &built, &*self.comparator)?;
        Ok(self.with_root(root, self.length + added))
    }

    /// Returns every element in heap order without consuming the heap.
    ///
    /// # Panics
    ///
    /// Panics if the comparator returns a non-boolean verdict.
    ///
    /// # Complexity
    ///
    /// O(n log n)
    #[must_use]
    pub fn to_sorted_vec(&self) -> Vec<T> {
        self.clone().into_iter().collect()
    }

    /// Consumes the heap, returning its elements in heap order.
    ///
    /// # Panics
    ///
    /// Panics if the comparator returns a non-boolean verdict.
    #[must_use]
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.into_iter().collect()
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over references to the elements of a [`LeftistHeap`].
///
/// Yields elements in tree pre-order, not in heap order.
pub struct LeftistHeapIterator<'a, T> {
    stack: SmallVec<[&'a Node<T>; TRAVERSAL_CAPACITY]>,
    remaining: usize,
}

impl<'a, T> Iterator for LeftistHeapIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Some(right) = &node.right {
            self.stack.push(right);
        }
        if let Some(left) = &node.left {
            self.stack.push(left);
        }
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for LeftistHeapIterator<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

/// An owning iterator that drains a [`LeftistHeap`] in heap order.
///
/// Each step pops one element from the heap held by the iterator. Heaps it
/// was cloned from are untouched, so draining a clone again replays the
/// same sequence.
pub struct LeftistHeapIntoIterator<T> {
    heap: LeftistHeap<T>,
}

impl<T: Clone> Iterator for LeftistHeapIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let (top, rest) = self.heap.pop();
        self.heap = rest;
        top
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.heap.length, Some(self.heap.length))
    }
}

impl<T: Clone> ExactSizeIterator for LeftistHeapIntoIterator<T> {
    fn len(&self) -> usize {
        self.heap.length
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Clone for LeftistHeap<T> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            length: self.length,
            comparator: ReferenceCounter::clone(&self.comparator),
        }
    }
}

/// Releases nodes from a work list rather than recursively.
///
/// Only right spines are bounded; a left chain can be as long as the heap.
/// Nodes still shared with another heap just lose one reference.
impl<T> Drop for LeftistHeap<T> {
    fn drop(&mut self) {
        let mut pending: Vec<ReferenceCounter<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(node) = pending.pop() {
            if let Ok(node) = ReferenceCounter::try_unwrap(node) {
                pending.extend(node.left);
                pending.extend(node.right);
            }
        }
    }
}

/// Builds a min-heap from the elements with [`push_all`](LeftistHeap::push_all).
impl<T: Clone + PartialOrd> FromIterator<T> for LeftistHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::min_heap().push_all(iter)
    }
}

/// Adds elements one `push` at a time, keeping the heap's comparator.
impl<T: Clone> Extend<T> for LeftistHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        *self = iter
            .into_iter()
            .fold(self.clone(), |heap, element| heap.push(element));
    }
}

impl<T: Clone> IntoIterator for LeftistHeap<T> {
    type Item = T;
    type IntoIter = LeftistHeapIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        LeftistHeapIntoIterator { heap: self }
    }
}

impl<'a, T> IntoIterator for &'a LeftistHeap<T> {
    type Item = &'a T;
    type IntoIter = LeftistHeapIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Two heaps are equal when they drain to equal sequences.
///
/// Tree shapes and comparator identity are not compared.
impl<T: Clone + PartialEq> PartialEq for LeftistHeap<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.clone().into_iter().eq(other.clone())
    }
}

impl<T: Clone + Eq> Eq for LeftistHeap<T> {}

impl<T: Clone + fmt::Debug> fmt::Debug for LeftistHeap<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_list()
            .entries(self.clone().into_iter())
            .finish()
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for LeftistHeap<T> {
    type Inner = T;
    type WithType<B> = LeftistHeap<B>;
}

impl<T: Clone> Foldable for LeftistHeap<T> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        self.into_sorted_vec()
            .into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.length == 0
    }

    #[inline]
    fn length(&self) -> usize {
        self.length
    }
}

/// Combining melds the heaps; the result keeps the left operand's comparator.
impl<T: Clone> Semigroup for LeftistHeap<T> {
    fn combine(self, other: Self) -> Self {
        self.merge(&other)
    }

    fn combine_ref(&self, other: &Self) -> Self {
        self.merge(other)
    }
}

// =============================================================================
// Tests
// =============================================================================
