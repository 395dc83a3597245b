//! All-or-nothing joins over several `Option` values.
//!
//! Combining independently-optional fields by hand leads to nested null
//! checks (`a && b ? ... : default`). The [`sequence_options!`] macro and the
//! fixed-arity [`sequence2`]/[`sequence3`]/[`sequence4`] functions replace
//! that with a single join: the result is `Some` of a tuple of all values, in
//! input order, if and only if every input is `Some`.

/// Combines any number of `Option` values into one optional tuple.
///
/// `sequence_options!(a, b, c)` evaluates to `Option<(A, B, C)>`: `Some` of
/// the unwrapped values in input order when every argument is `Some`, `None`
/// as soon as any argument is `None`. You can roughly think of this as
/// `Promise.all` for optional values.
///
/// Evaluation is left to right and short-circuits on the first `None`;
/// since the inputs are plain values this is unobservable, just cheap.
///
/// # Examples
///
/// ```rust
/// use optfmt::sequence_options;
///
/// let joined = sequence_options!(Some("MS Word"), Some("3.0.0"));
/// assert_eq!(joined, Some(("MS Word", "3.0.0")));
///
/// let missing: Option<(&str, &str)> = sequence_options!(Some("MS Word"), None);
/// assert_eq!(missing, None);
///
/// // Arity is open-ended and the tuple is heterogeneous.
/// let triple = sequence_options!(Some(1), Some("two"), Some(3.0));
/// assert_eq!(triple, Some((1, "two", 3.0)));
/// ```
#[macro_export]
macro_rules! sequence_options {
    // One or more options: unwrap each with `?` inside a closure so the
    // first `None` aborts the whole tuple.
    ($($option:expr),+ $(,)?) => {
        (|| ::core::option::Option::Some(($($option?,)+)))()
    };
}

macro_rules! define_sequence_fn {
    ($name:ident, $arity:ident, $($parameter:ident: $type_parameter:ident),+) => {
        paste::paste! {
            #[doc = "Combines " $arity " optional values into one optional tuple."]
            #[doc = ""]
            #[doc = "Function form of [`sequence_options!`](crate::sequence_options) for"]
            #[doc = "call sites that want an ordinary value rather than a macro."]
            #[doc = "Returns `Some` of the tuple, in input order, iff every input is"]
            #[doc = "`Some`."]
            #[inline]
            pub fn $name<$($type_parameter),+>(
                $($parameter: Option<$type_parameter>),+
            ) -> Option<($($type_parameter,)+)> {
                $crate::sequence_options!($($parameter),+)
            }
        }
    };
}

define_sequence_fn!(sequence2, two, first: A, second: B);
define_sequence_fn!(sequence3, three, first: A, second: B, third: C);
define_sequence_fn!(sequence4, four, first: A, second: B, third: C, fourth: D);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_all_present() {
        assert_eq!(sequence2(Some(1), Some("a")), Some((1, "a")));
    }

    #[test]
    fn test_sequence_absent_in_any_position() {
        assert_eq!(sequence2(None::<i32>, Some("a")), None);
        assert_eq!(sequence2(Some(1), None::<&str>), None);
        assert_eq!(sequence3(Some(1), None::<&str>, Some(3.0)), None);
        assert_eq!(sequence4(Some(1), Some(2), Some(3), None::<i32>), None);
    }

    #[test]
    fn test_sequence_preserves_positional_order() {
        assert_eq!(
            sequence3(Some("first"), Some("second"), Some("third")),
            Some(("first", "second", "third"))
        );
    }

    #[test]
    fn test_macro_single_argument_yields_unary_tuple() {
        assert_eq!(sequence_options!(Some(42)), Some((42,)));
    }

    #[test]
    fn test_macro_trailing_comma() {
        assert_eq!(sequence_options!(Some(1), Some(2),), Some((1, 2)));
    }
}
