//! Either type - a value that can be one of two types.
//!
//! `Either<L, R>` represents a value that is either `Left(L)` or `Right(R)`.
//! In this crate it carries typed success/failure branching: `Left` holds a
//! failure payload with an explicit message, `Right` holds the successful
//! value. Unlike a thrown exception, the failure side is ordinary data, so
//! the compiler's exhaustiveness checking guarantees callers handle it.
//!
//! # Examples
//!
//! ```rust
//! use optfmt::control::Either;
//!
//! let success: Either<String, i32> = Either::Right(42);
//! let failure: Either<String, i32> = Either::Left("whoops".to_string());
//!
//! // Map over the success side; failures pass through untouched.
//! assert_eq!(success.map_right(|n| n * 2), Either::Right(84));
//! assert_eq!(
//!     failure.map_right(|n| n * 2),
//!     Either::Left("whoops".to_string())
//! );
//! ```

/// A value that can be one of two types.
///
/// By convention:
/// - `Left` represents failure or the first alternative
/// - `Right` represents success or the second alternative
///
/// # Examples
///
/// ```rust
/// use optfmt::control::{Either, parse_integer};
///
/// let message = parse_integer("2")
///     .map_right(|n| n * 2)
///     .fold(
///         |failure| failure.to_string(),
///         |n| format!("your doubled int is {n}"),
///     );
/// assert_eq!(message, "your doubled int is 4");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Either<L, R> {
    /// The left variant, conventionally representing failure.
    Left(L),
    /// The right variant, conventionally representing success.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Returns `true` if this is a `Left` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optfmt::control::Either;
    ///
    /// let left: Either<i32, &str> = Either::Left(42);
    /// assert!(left.is_left());
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
    /// use optfmt::control::Either;
    ///
    /// let right: Either<i32, &str> = Either::Right("hello");
    /// assert!(right.is_right());
    /// ```
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Converts into an `Option<L>`, consuming the either.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optfmt::control::Either;
    ///
    /// let left: Either<i32, &str> = Either::Left(42);
    /// assert_eq!(left.left(), Some(42));
    ///
    /// let right: Either<i32, &str> = Either::Right("hello");
    /// assert_eq!(right.left(), None);
    /// ```
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Converts into an `Option<R>`, consuming the either.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optfmt::control::Either;
    ///
    /// let right: Either<i32, &str> = Either::Right("hello");
    /// assert_eq!(right.right(), Some("hello"));
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

    /// Applies a function to the left value, passing `Right` through.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optfmt::control::Either;
    ///
    /// let failure: Either<&str, i32> = Either::Left("whoops");
    /// assert_eq!(
    ///     failure.map_left(str::to_uppercase),
    ///     Either::Left("WHOOPS".to_string())
    /// );
    /// ```
    #[inline]
    pub fn map_left<L2, F>(self, function: F) -> Either<L2, R>
    where
        F: FnOnce(L) -> L2,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies a function to the right value, passing `Left` through.
    ///
    /// A `Left` never invokes the mapping function, so transformations can be
    /// stacked without guarding each one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optfmt::control::Either;
    ///
    /// let success: Either<String, i32> = Either::Right(2);
    /// let message = success
    ///     .map_right(|n| n * 2)
    ///     .map_right(|n| format!("your doubled result is {n}"));
    /// assert_eq!(message, Either::Right("your doubled result is 4".to_string()));
    /// ```
    #[inline]
    pub fn map_right<R2, F>(self, function: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> R2,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Chains an either-returning function on the right value, flattening.
    ///
    /// Use this when a further step can itself fail: the result stays one
    /// level deep instead of nesting `Either` within `Either`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optfmt::control::Either;
    ///
    /// fn half(n: i32) -> Either<String, i32> {
    ///     if n % 2 == 0 {
    ///         Either::Right(n / 2)
    ///     } else {
    ///         Either::Left(format!("{n} is odd"))
    ///     }
    /// }
    ///
    /// let result: Either<String, i32> = Either::Right(8);
    /// assert_eq!(result.and_then(half), Either::Right(4));
    ///
    /// let result: Either<String, i32> = Either::Right(3);
    /// assert_eq!(result.and_then(half), Either::Left("3 is odd".to_string()));
    /// ```
    #[inline]
    pub fn and_then<R2, F>(self, function: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> Either<L, R2>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }

    /// Collapses both sides into a single value.
    ///
    /// Provide one function for the failure side and one for the success
    /// side; both return the same type, so the result is total.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optfmt::control::Either;
    ///
    /// let failure: Either<String, i32> = Either::Left("whoops".to_string());
    /// let message = failure.fold(|error| error, |n| format!("got {n}"));
    /// assert_eq!(message, "whoops");
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

    /// Builds an `Either` from a `Result`, mapping `Err` to `Left`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optfmt::control::Either;
    ///
    /// let parsed = Either::from_result("42".parse::<i32>());
    /// assert_eq!(parsed.right(), Some(42));
    /// ```
    #[inline]
    pub fn from_result(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }

    /// Converts into a `Result`, mapping `Left` to `Err`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optfmt::control::Either;
    ///
    /// let success: Either<String, i32> = Either::Right(42);
    /// assert_eq!(success.into_result(), Ok(42));
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
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        Self::from_result(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::assert_impl_all;

    assert_impl_all!(Either<String, i32>: Clone, PartialEq, Send, Sync);

    #[test]
    fn test_map_right_skips_left() {
        let failure: Either<&str, i32> = Either::Left("whoops");
        assert_eq!(failure.map_right(|n| n * 2), Either::Left("whoops"));
    }

    #[test]
    fn test_map_left_skips_right() {
        let success: Either<&str, i32> = Either::Right(42);
        assert_eq!(success.map_left(str::to_uppercase), Either::Right(42));
    }

    #[test]
    fn test_and_then_short_circuits_on_left() {
        let failure: Either<&str, i32> = Either::Left("whoops");
        let chained = failure.and_then(|n| Either::<&str, i32>::Right(n + 1));
        assert_eq!(chained, Either::Left("whoops"));
    }

    #[test]
    fn test_fold_is_total() {
        let success: Either<String, i32> = Either::Right(7);
        assert_eq!(success.fold(|e| e, |n| n.to_string()), "7");

        let failure: Either<String, i32> = Either::Left("bad".to_string());
        assert_eq!(failure.fold(|e| e, |n| n.to_string()), "bad");
    }

    #[test]
    fn test_result_round_trip() {
        let parsed: Either<_, i32> = Either::from_result("42".parse::<i32>());
        assert_eq!(parsed.into_result(), "42".parse::<i32>());
    }
}
