//! Foldable type class - reducing a structure to a summary value.
//!
//! A fold visits every element exactly once in the structure's canonical
//! order. For a [`LeftistHeap`](crate::persistent::LeftistHeap) that order is
//! heap order, the same sequence repeated `pop` calls produce.

use super::TypeConstructor;

/// A type class for structures that can be folded to a summary value.
///
/// # Examples
///
/// ```rust
/// use heapforest::persistent::LeftistHeap;
/// use heapforest::typeclass::Foldable;
///
/// let heap: LeftistHeap<i32> = vec![5, 3, 9].into_iter().collect();
///
/// let sum = heap.clone().fold_left(0, |accumulator, element| accumulator + element);
/// assert_eq!(sum, 17);
///
/// // fold_right sees the largest element first
/// let digits = heap.fold_right(String::new(), |element, accumulator| {
///     format!("{element}{accumulator}")
/// });
/// assert_eq!(digits, "359");
/// ```
pub trait Foldable: TypeConstructor {
    /// Folds the structure from first to last element.
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds the structure from last to first element.
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Returns `true` if the structure has no elements.
    fn is_empty(&self) -> bool
    where
        Self: Clone,
    {
        self.clone().fold_left(true, |_, _| false)
    }

    /// Returns the number of elements in the structure.
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        self.clone().fold_left(0, |count, _| count + 1)
    }

    /// Converts the structure to a `Vec` in fold order.
    fn to_list(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        self.fold_left(Vec::new(), |mut accumulator, element| {
            accumulator.push(element);
            accumulator
        })
    }

    /// Finds the first element, in fold order, satisfying a predicate.
    fn find<P>(self, mut predicate: P) -> Option<Self::Inner>
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized,
    {
        self.fold_left(None, |accumulator, element| {
            if accumulator.is_some() {
                accumulator
            } else if predicate(&element) {
                Some(element)
            } else {
                None
            }
        })
    }

    /// Checks if any element satisfies the predicate.
    fn exists<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        self.clone().find(|element| predicate(element)).is_some()
    }

    /// Checks if all elements satisfy the predicate.
    ///
    /// Returns `true` for an empty structure.
    fn for_all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        !self.exists(|element| !predicate(element))
    }
}
