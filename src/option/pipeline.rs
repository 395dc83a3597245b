//! Curried `Option` combinators for pipeline stages.
//!
//! Each function here takes the transformation first and returns a closure
//! over the option, so the result drops straight into a
//! [`pipe!`](crate::pipe) chain:
//!
//! ```rust
//! use optfmt::option::{from_falsy, get_or_else, map_option};
//! use optfmt::pipe;
//!
//! let display = pipe!(
//!     from_falsy("hello"),
//!     map_option(str::to_uppercase),
//!     get_or_else(|| "-".to_string()),
//! );
//! assert_eq!(display, "HELLO");
//! ```
//!
//! Absence short-circuits: once a stage sees `None`, every later
//! `map_option`/`chain_option` passes it through untouched and only the final
//! [`get_or_else`] fallback runs.

/// Applies a function under `Some`, passing `None` through unchanged.
///
/// Satisfies the functor laws: mapping the identity function is a no-op, and
/// mapping `f` then `g` equals mapping their composition.
///
/// # Examples
///
/// ```rust
/// use optfmt::option::map_option;
///
/// let double = map_option(|n: i32| n * 2);
/// assert_eq!(double(Some(21)), Some(42));
///
/// let double = map_option(|n: i32| n * 2);
/// assert_eq!(double(None), None);
/// ```
#[inline]
pub fn map_option<T, U, F>(function: F) -> impl FnOnce(Option<T>) -> Option<U>
where
    F: FnOnce(T) -> U,
{
    move |option| option.map(function)
}

/// Applies an option-returning function under `Some`, flattening the result.
///
/// Use this when a pipeline stage can itself fail to produce a value, such as
/// parsing. `None` in yields `None` out without invoking the function.
///
/// # Examples
///
/// ```rust
/// use optfmt::option::chain_option;
///
/// let parse = chain_option(|s: &str| s.parse::<i32>().ok());
/// assert_eq!(parse(Some("42")), Some(42));
///
/// let parse = chain_option(|s: &str| s.parse::<i32>().ok());
/// assert_eq!(parse(Some("not a number")), None);
/// ```
#[inline]
pub fn chain_option<T, U, F>(function: F) -> impl FnOnce(Option<T>) -> Option<U>
where
    F: FnOnce(T) -> Option<U>,
{
    move |option| option.and_then(function)
}

/// Unwraps `Some(value)` to `value`, or computes a fallback on `None`.
///
/// The fallback is a zero-argument closure rather than an eager default so
/// that its cost (say, allocating a string) is skipped entirely on the
/// common present path. On the absent path it is invoked exactly once.
/// The result is total: every option becomes a plain value.
///
/// # Examples
///
/// ```rust
/// use optfmt::option::get_or_else;
///
/// let or_dash = get_or_else(|| "-".to_string());
/// assert_eq!(or_dash(Some("MS Word 3.0.0".to_string())), "MS Word 3.0.0");
///
/// let or_dash = get_or_else(|| "-".to_string());
/// assert_eq!(or_dash(None), "-");
/// ```
#[inline]
pub fn get_or_else<T, F>(fallback: F) -> impl FnOnce(Option<T>) -> T
where
    F: FnOnce() -> T,
{
    move |option| option.unwrap_or_else(fallback)
}
