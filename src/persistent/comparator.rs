//! Comparator contract for [`LeftistHeap`](super::LeftistHeap).
//!
//! A heap comparator answers "may `left` sit above `right`?". Its answer must
//! be a plain boolean. Comparators may return richer types as long as they
//! implement [`Precedence`]; any answer that is not a boolean (an
//! incomparable pair, a failed comparison) is a contract violation and is
//! reported as a [`ComparatorError`] naming the offending value.

use std::fmt::Debug;
use std::marker::PhantomData;

use thiserror::Error;

/// Raised when a heap comparator returns something other than a boolean.
///
/// The plain heap operations treat this as fatal and panic with the error's
/// message; the `try_*` operations hand it back instead.
///
/// # Examples
///
/// ```rust
/// use heapforest::persistent::LeftistHeap;
///
/// let heap = LeftistHeap::min_heap().push(1.0);
/// let error = heap.try_push(f64::NAN).unwrap_err();
/// assert_eq!(error.returned(), "None");
/// assert_eq!(
///     error.to_string(),
///     "comparator contract violated: expected a boolean, got None"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("comparator contract violated: expected a boolean, got {returned}")]
pub struct ComparatorError {
    returned: String,
}

impl ComparatorError {
    /// Creates an error describing the value the comparator returned.
    #[must_use]
    pub fn new(returned: impl Into<String>) -> Self {
        Self {
            returned: returned.into(),
        }
    }

    /// The rendered value the comparator returned instead of a boolean.
    #[must_use]
    pub fn returned(&self) -> &str {
        &self.returned
    }
}

/// Result types a heap comparator may return.
///
/// | Return type         | Boolean verdict | Contract violation |
/// |---------------------|-----------------|--------------------|
/// | `bool`              | always          | never              |
/// | `Option<bool>`      | `Some(b)`       | `None`             |
/// | `Result<bool, E>`   | `Ok(b)`         | `Err(e)`           |
///
/// `Option<bool>` matches the shape of `PartialOrd::partial_cmp` followed by
/// a mapping, which is how the built-in min and max comparators are written.
pub trait Precedence {
    /// Converts the comparator's answer into a boolean verdict.
    ///
    /// # Errors
    ///
    /// Returns [`ComparatorError`] if the answer is not a boolean.
    fn into_precedence(self) -> Result<bool, ComparatorError>;
}

impl Precedence for bool {
    #[inline]
    fn into_precedence(self) -> Result<bool, ComparatorError> {
        Ok(self)
    }
}

impl Precedence for Option<bool> {
    #[inline]
    fn into_precedence(self) -> Result<bool, ComparatorError> {
        self.ok_or_else(|| ComparatorError::new("None"))
    }
}

impl<E: Debug> Precedence for Result<bool, E> {
    #[inline]
    fn into_precedence(self) -> Result<bool, ComparatorError> {
        self.map_err(|error| ComparatorError::new(format!("Err({error:?})")))
    }
}

/// Bounds a comparator must satisfy to be shared between heap versions.
///
/// With the `arc` feature this is `Send + Sync`, so heaps can cross threads.
/// Without it every type qualifies.
#[cfg(feature = "arc")]
pub trait Shareable: Send + Sync {}

#[cfg(feature = "arc")]
impl<F: Send + Sync> Shareable for F {}

/// Bounds a comparator must satisfy to be shared between heap versions.
///
/// With the `arc` feature this is `Send + Sync`, so heaps can cross threads.
/// Without it every type qualifies.
#[cfg(not(feature = "arc"))]
pub trait Shareable {}

#[cfg(not(feature = "arc"))]
impl<F> Shareable for F {}

/// Object-safe view of a checked comparator.
pub(crate) trait Comparator<T> {
    fn precedes(&self, left: &T, right: &T) -> Result<bool, ComparatorError>;
}

#[cfg(feature = "arc")]
pub(crate) type SharedComparator<T> = dyn Comparator<T> + Send + Sync;

#[cfg(not(feature = "arc"))]
pub(crate) type SharedComparator<T> = dyn Comparator<T>;

/// Wraps a caller-supplied function and checks each verdict it returns.
pub(crate) struct Checked<F, R> {
    function: F,
    verdict: PhantomData<fn() -> R>,
}

impl<F, R> Checked<F, R> {
    pub(crate) const fn new(function: F) -> Self {
        Self {
            function,
            verdict: PhantomData,
        }
    }
}

impl<T, F, R> Comparator<T> for Checked<F, R>
where
    F: Fn(&T, &T) -> R,
    R: Precedence,
{
    #[inline]
    fn precedes(&self, left: &T, right: &T) -> Result<bool, ComparatorError> {
        (self.function)(left, right).into_precedence()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(true, Ok(true))]
    #[case(false, Ok(false))]
    fn test_bool_is_always_a_verdict(
        #[case] answer: bool,
        #[case] expected: Result<bool, ComparatorError>,
    ) {
        assert_eq!(answer.into_precedence(), expected);
    }

    #[rstest]
    fn test_option_none_is_a_violation() {
        assert_eq!(Some(true).into_precedence(), Ok(true));
        let error = None::<bool>.into_precedence().unwrap_err();
        assert_eq!(error.returned(), "None");
    }

    #[rstest]
    fn test_result_error_is_rendered_with_debug() {
        let answer: Result<bool, &str> = Err("stale key");
        let error = answer.into_precedence().unwrap_err();
        assert_eq!(error.returned(), "Err(\"stale key\")");
        assert!(error.to_string().contains("Err(\"stale key\")"));
    }

    #[rstest]
    fn test_checked_comparator_forwards_arguments_in_order() {
        let checked = Checked::new(|left: &i32, right: &i32| left < right);
        assert_eq!(checked.precedes(&1, &2), Ok(true));
        assert_eq!(checked.precedes(&2, &1), Ok(false));
    }

    #[rstest]
    fn test_checked_comparator_reports_violation() {
        let checked = Checked::new(|left: &f64, right: &f64| {
            left.partial_cmp(right).map(std::cmp::Ordering::is_lt)
        });
        assert!(checked.precedes(&1.0, &f64::NAN).is_err());
    }
}
