//! The `pipe!` macro for left-to-right function application.

/// Pipes a value through a series of functions from left to right.
///
/// `pipe!(x, f, g, h)` is equivalent to `h(g(f(x)))`.
///
/// This is the "data flow" style of function application: the value flows
/// through transformations in the order they are written, which matches how
/// the display pipelines in this crate read — raw input, falsy check,
/// transform, join, fallback.
///
/// # Syntax
///
/// - `pipe!(x)` - Returns `x` unchanged
/// - `pipe!(x, f)` - Returns `f(x)`
/// - `pipe!(x, f, g, ...)` - Returns `...g(f(x))`
///
/// # Type Requirements
///
/// Each function only needs to implement [`FnOnce`], since each is called
/// exactly once. The curried combinators in [`crate::option`] return such
/// closures, so they drop straight into a pipeline.
///
/// # Examples
///
/// ## Basic pipeline
///
/// ```
/// use optfmt::pipe;
///
/// fn double(x: i32) -> i32 { x * 2 }
/// fn add_one(x: i32) -> i32 { x + 1 }
///
/// // pipe!(x, f, g) = g(f(x)) = add_one(double(5)) = 11
/// let result = pipe!(5, double, add_one);
/// assert_eq!(result, 11);
/// ```
///
/// ## An optional-value pipeline
///
/// ```
/// use optfmt::option::{from_falsy, get_or_else, map_option};
/// use optfmt::pipe;
///
/// let display = pipe!(
///     from_falsy("3.0.0"),
///     map_option(|version: &str| format!("v{version}")),
///     get_or_else(|| "-".to_string()),
/// );
/// assert_eq!(display, "v3.0.0");
/// ```
#[macro_export]
macro_rules! pipe {
    // Value only: return as is
    ($value:expr) => {
        $value
    };

    // Single function: apply it
    ($value:expr, $function:expr $(,)?) => {
        $function($value)
    };

    // Multiple functions: apply left to right recursively
    ($value:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::pipe!($function($value), $($remaining_functions),+)
    };
}
