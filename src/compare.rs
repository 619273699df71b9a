//! Ordering comparator shared by every container in the crate.
//!
//! [`Comparator`] wraps a three-way comparison function over `&T` and derives
//! the comparison predicates the containers need (`equal`, `less_than`,
//! `greater_than`, and the `_or_equal` variants), plus an in-place
//! [`reverse`](Comparator::reverse) that flips the argument order for all
//! subsequent calls.
//!
//! The default comparator uses the natural ordering of `T: Ord`. A custom
//! ordering is supplied as any `Fn(&T, &T) -> Ordering`:
//!
//! ```rust
//! use arbors::compare::Comparator;
//! use std::cmp::Ordering;
//!
//! let by_length = Comparator::new(|a: &&str, b: &&str| a.len().cmp(&b.len()));
//! assert!(by_length.less_than(&"ab", &"abc"));
//!
//! let mut natural = Comparator::natural();
//! assert!(natural.less_than(&1, &2));
//! natural.reverse();
//! assert!(natural.greater_than(&1, &2));
//! ```
//!
//! # Totality precondition
//!
//! A comparator must define a total order over every value it will ever see.
//! This is not validated at runtime: a comparison function that is not
//! antisymmetric or transitive silently produces containers whose ordering
//! invariants do not hold.

use std::cmp::Ordering;
use std::fmt;

/// Boxed three-way comparison function over borrowed values.
pub type CompareFunction<T> = Box<dyn Fn(&T, &T) -> Ordering>;

/// A three-way comparator over values of type `T`.
///
/// Every ordered container in this crate carries one of these and consults it
/// for all value comparisons, so a single custom ordering changes the
/// behavior of the whole structure.
pub struct Comparator<T> {
    compare_function: CompareFunction<T>,
}

impl<T> Comparator<T> {
    /// Creates a comparator from a custom three-way comparison function.
    ///
    /// The function must define a total order; see the module documentation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arbors::compare::Comparator;
    ///
    /// let descending = Comparator::new(|a: &i32, b: &i32| b.cmp(a));
    /// assert!(descending.less_than(&9, &1));
    /// ```
    pub fn new<F>(compare_function: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + 'static,
    {
        Self {
            compare_function: Box::new(compare_function),
        }
    }

    /// Applies the comparison function to the two values.
    #[must_use]
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.compare_function)(a, b)
    }

    /// Returns `true` if the two values compare as equal.
    #[must_use]
    pub fn equal(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Equal
    }

    /// Returns `true` if `a` orders strictly before `b`.
    #[must_use]
    pub fn less_than(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Less
    }

    /// Returns `true` if `a` orders strictly after `b`.
    #[must_use]
    pub fn greater_than(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Greater
    }

    /// Returns `true` if `a` orders before `b` or equal to it.
    #[must_use]
    pub fn less_than_or_equal(&self, a: &T, b: &T) -> bool {
        !self.greater_than(a, b)
    }

    /// Returns `true` if `a` orders after `b` or equal to it.
    #[must_use]
    pub fn greater_than_or_equal(&self, a: &T, b: &T) -> bool {
        !self.less_than(a, b)
    }

}

impl<T: 'static> Comparator<T> {
    /// Reverses the comparison order in place.
    ///
    /// All subsequent calls see the arguments flipped, so `less_than` under a
    /// reversed natural comparator means "greater than".
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arbors::compare::Comparator;
    ///
    /// let mut comparator = Comparator::natural();
    /// comparator.reverse();
    /// assert!(comparator.less_than(&10, &5));
    /// comparator.reverse();
    /// assert!(comparator.less_than(&5, &10));
    /// ```
    pub fn reverse(&mut self) {
        let previous = std::mem::replace(
            &mut self.compare_function,
            Box::new(|_: &T, _: &T| Ordering::Equal),
        );
        self.compare_function = Box::new(move |a, b| previous(b, a));
    }
}

impl<T: Ord + 'static> Comparator<T> {
    /// Creates a comparator using the natural ordering of `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arbors::compare::Comparator;
    ///
    /// let comparator = Comparator::natural();
    /// assert!(comparator.equal(&7, &7));
    /// assert!(comparator.less_than_or_equal(&7, &7));
    /// ```
    #[must_use]
    pub fn natural() -> Self {
        Self::new(|a: &T, b: &T| a.cmp(b))
    }
}

impl<T: Ord + 'static> Default for Comparator<T> {
    fn default() -> Self {
        Self::natural()
    }
}

impl<T> fmt::Debug for Comparator<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Comparator")
    }
}
