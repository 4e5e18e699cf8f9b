//! Either type - a value that can be one of two types.
//!
//! This module provides the `Either<L, R>` type, which represents a value
//! that is either a `Left(L)` or a `Right(R)`. Throughout this library it
//! is the return channel of validated construction: `Left` carries the
//! accumulated [`ValidationReport`](crate::report::ValidationReport),
//! `Right` carries the successfully constructed value. The both/neither
//! states are unrepresentable, so callers branch on data instead of
//! checking flags.
//!
//! # Examples
//!
//! ```rust
//! use verdict::control::Either;
//!
//! let success: Either<String, i32> = Either::Right(42);
//! let failure: Either<String, i32> = Either::Left("rejected".to_string());
//!
//! // Using fold to handle both cases
//! let label = failure.fold(
//!     |reason| format!("failed: {reason}"),
//!     |value| format!("ok: {value}"),
//! );
//! assert_eq!(label, "failed: rejected");
//! # let _ = success;
//! ```

use std::fmt;

/// A value that can be one of two types.
///
/// `Either<L, R>` represents a value that is either `Left(L)` or `Right(R)`.
/// By convention:
/// - `Left` carries the failure channel (here, a validation report)
/// - `Right` carries the success channel (the validated value)
///
/// # Type Parameters
///
/// * `L` - The type of the left value
/// * `R` - The type of the right value
///
/// # Examples
///
/// ```rust
/// use verdict::control::Either;
///
/// let success: Either<String, i32> = Either::Right(42);
/// let doubled = success.map_right(|x| x * 2);
/// assert_eq!(doubled, Either::Right(84));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Either<L, R> {
    /// The left variant, conventionally representing failure.
    Left(L),
    /// The right variant, conventionally representing success.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use verdict::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert!(left.is_left());
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert!(!right.is_left());
    /// ```
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use verdict::control::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert!(right.is_right());
    /// ```
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Converts the `Either` into an `Option<L>`, consuming the either.
    ///
    /// Returns `Some(l)` if this is `Left(l)`, otherwise `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use verdict::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.left(), Some(42));
    /// ```
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Converts the `Either` into an `Option<R>`, consuming the either.
    ///
    /// Returns `Some(r)` if this is `Right(r)`, otherwise `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use verdict::control::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.right(), Some("hello".to_string()));
    /// ```
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Returns a reference to the left value if present.
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns a reference to the right value if present.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    // =========================================================================
    // Transformations
    // =========================================================================

    /// Collapses the `Either` into a single value by applying exactly one of
    /// the two functions, synchronously.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use verdict::control::Either;
    ///
    /// let right: Either<i32, i32> = Either::Right(10);
    /// assert_eq!(right.fold(|l| l - 1, |r| r + 1), 11);
    ///
    /// let left: Either<i32, i32> = Either::Left(10);
    /// assert_eq!(left.fold(|l| l - 1, |r| r + 1), 9);
    /// ```
    #[inline]
    pub fn fold<T, FL, FR>(self, on_left: FL, on_right: FR) -> T
    where
        FL: FnOnce(L) -> T,
        FR: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => on_left(value),
            Self::Right(value) => on_right(value),
        }
    }

    /// Maps the left value, leaving a `Right` untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use verdict::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.map_left(|n| n * 2), Either::Left(84));
    /// ```
    #[inline]
    pub fn map_left<T, F>(self, f: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(f(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Maps the right value, leaving a `Left` untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use verdict::control::Either;
    ///
    /// let right: Either<String, i32> = Either::Right(42);
    /// assert_eq!(right.map_right(|n| n * 2), Either::Right(84));
    /// ```
    #[inline]
    pub fn map_right<T, F>(self, f: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(f(value)),
        }
    }

    /// Converts into a `Result`, mapping `Right` to `Ok` and `Left` to `Err`.
    ///
    /// # Errors
    ///
    /// Returns `Err(l)` when this is `Left(l)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use verdict::control::Either;
    ///
    /// let right: Either<String, i32> = Either::Right(42);
    /// assert_eq!(right.into_result(), Ok(42));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<R, L> {
        match self {
            Self::Left(value) => Err(value),
            Self::Right(value) => Ok(value),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(value) => Self::Left(value),
        }
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => write!(f, "Left({value})"),
            Self::Right(value) => write!(f, "Right({value})"),
        }
    }
}
