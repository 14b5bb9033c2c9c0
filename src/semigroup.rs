//! Semigroup trait for associative operations
//!
//! A Semigroup is a type with an associative binary operation. Validators use it
//! to merge the error lists of sibling checks instead of stopping at the first
//! failure.
//!
//! # Laws
//!
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```
//! use sluice::Semigroup;
//!
//! let v1 = vec![1, 2, 3];
//! let v2 = vec![4, 5, 6];
//! assert_eq!(v1.combine(v2), vec![1, 2, 3, 4, 5, 6]);
//! ```

/// A type that supports an associative binary operation
///
/// `combine` takes `self` by value; clone first if the original is still needed.
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively
    ///
    /// # Examples
    ///
    /// ```
    /// use sluice::Semigroup;
    ///
    /// let result = vec!["min_length"].combine(vec!["pattern"]);
    /// assert_eq!(result, vec!["min_length", "pattern"]);
    /// ```
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}
