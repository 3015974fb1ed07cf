//! Semigroup type class - types with an associative binary operation.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! For the persistent structures in this crate "==" is observational: two
//! heaps are equal when they drain in the same order, two forests when they
//! induce the same partition.

/// A type class for types with an associative binary operation.
///
/// # Examples
///
/// ```rust
/// use heapforest::persistent::LeftistHeap;
/// use heapforest::typeclass::Semigroup;
///
/// let first = LeftistHeap::max_heap().push(1).push(5);
/// let second = LeftistHeap::max_heap().push(3);
/// assert_eq!(first.combine(second).peek(), Some(&5));
/// ```
pub trait Semigroup {
    /// Combines two values into one.
    ///
    /// This operation must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two values by reference, returning a new value.
    ///
    /// The default implementation clones both values and calls `combine`.
    /// Persistent structures override it, since sharing makes cloning
    /// unnecessary.
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Reduces all elements in an iterator using the semigroup operation.
    ///
    /// Returns `None` if the iterator is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use heapforest::persistent::LeftistHeap;
    /// use heapforest::typeclass::Semigroup;
    ///
    /// let heaps = (1..=3).map(|value| LeftistHeap::min_heap().push(value));
    /// let combined = LeftistHeap::reduce_all(heaps).unwrap();
    /// assert_eq!(combined.len(), 3);
    ///
    /// let none = LeftistHeap::<i32>::reduce_all(Vec::new());
    /// assert!(none.is_none());
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}
