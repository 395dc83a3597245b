//! Falsy-aware `Option` constructors.
//!
//! Legacy data often mixes two flavors of "nothing": a field that is missing
//! outright, and a field that is present but empty (`""`, `0`, `false`).
//! The [`Falsy`] trait names that emptiness explicitly, and [`from_falsy`]
//! collapses both flavors into a single absent state so that downstream code
//! never branches on null-style checks again.
//!
//! # Examples
//!
//! ```rust
//! use optfmt::option::from_falsy;
//!
//! assert_eq!(from_falsy("MS Word"), Some("MS Word"));
//! assert_eq!(from_falsy(""), None);
//! assert_eq!(from_falsy(0), None);
//! assert_eq!(from_falsy(false), None);
//! ```

/// Types with an explicit notion of an "empty/zero/missing" value.
///
/// `is_falsy` is the predicate behind [`from_falsy`]: a falsy value becomes
/// `None`, everything else stays `Some`. The implementations mirror implicit
/// boolean coercion in dynamic languages:
///
/// | Type | Falsy when |
/// |------|------------|
/// | `str`, `String` | empty |
/// | integers | zero |
/// | `f32`, `f64` | zero or NaN |
/// | `bool` | `false` |
/// | `Option<T>` | `None`, or `Some` of a falsy value |
///
/// # Examples
///
/// ```rust
/// use optfmt::option::Falsy;
///
/// assert!("".is_falsy());
/// assert!(0_i64.is_falsy());
/// assert!(f64::NAN.is_falsy());
/// assert!(!"hello".is_falsy());
/// ```
pub trait Falsy {
    /// Returns `true` if this value counts as empty/zero/missing.
    fn is_falsy(&self) -> bool;
}

/// Constructs an `Option` from a value and a predicate.
///
/// Returns `Some(value)` if the predicate holds for the value, `None`
/// otherwise. This is the general form of [`from_falsy`]; use it when the
/// built-in [`Falsy`] table is not the right notion of presence.
///
/// # Examples
///
/// ```rust
/// use optfmt::option::from_predicate;
///
/// let positive = from_predicate(5, |n| *n > 0);
/// assert_eq!(positive, Some(5));
///
/// let negative = from_predicate(-5, |n| *n > 0);
/// assert_eq!(negative, None);
/// ```
#[inline]
pub fn from_predicate<T, P>(value: T, predicate: P) -> Option<T>
where
    P: FnOnce(&T) -> bool,
{
    if predicate(&value) { Some(value) } else { None }
}

/// Constructs an `Option` that is absent for every falsy value.
///
/// Returns `None` for any [`Falsy`] value (empty string, zero, `false`, NaN,
/// `None`) and `Some(value)` for everything else. Pure and total: no panics,
/// no side effects, defined for every input.
///
/// # Examples
///
/// ```rust
/// use optfmt::option::from_falsy;
///
/// assert_eq!(from_falsy("3.0.0"), Some("3.0.0"));
/// assert_eq!(from_falsy(""), None);
///
/// // A present-but-empty field and a missing field normalize the same way.
/// let missing: Option<String> = None;
/// let empty = Some(String::new());
/// assert_eq!(missing.and_then(from_falsy), None);
/// assert_eq!(empty.and_then(from_falsy), None);
/// ```
#[inline]
pub fn from_falsy<T: Falsy>(value: T) -> Option<T> {
    from_predicate(value, |inner| !inner.is_falsy())
}

// =============================================================================
// Falsy Implementations
// =============================================================================

impl Falsy for bool {
    #[inline]
    fn is_falsy(&self) -> bool {
        !*self
    }
}

impl Falsy for str {
    #[inline]
    fn is_falsy(&self) -> bool {
        self.is_empty()
    }
}

impl Falsy for String {
    #[inline]
    fn is_falsy(&self) -> bool {
        self.is_empty()
    }
}

macro_rules! impl_falsy_for_integer {
    ($($integer:ty),+ $(,)?) => {
        $(
            impl Falsy for $integer {
                #[inline]
                fn is_falsy(&self) -> bool {
                    *self == 0
                }
            }
        )+
    };
}

impl_falsy_for_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_falsy_for_float {
    ($($float:ty),+ $(,)?) => {
        $(
            impl Falsy for $float {
                #[inline]
                fn is_falsy(&self) -> bool {
                    self.is_nan() || *self == 0.0
                }
            }
        )+
    };
}

impl_falsy_for_float!(f32, f64);

impl<T: Falsy> Falsy for Option<T> {
    #[inline]
    fn is_falsy(&self) -> bool {
        self.as_ref().is_none_or(Falsy::is_falsy)
    }
}

impl<T: Falsy + ?Sized> Falsy for &T {
    #[inline]
    fn is_falsy(&self) -> bool {
        (**self).is_falsy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_string_is_falsy() {
        assert_eq!(from_falsy(""), None);
        assert_eq!(from_falsy(String::new()), None);
    }

    #[test]
    fn test_zero_is_falsy() {
        assert_eq!(from_falsy(0_i32), None);
        assert_eq!(from_falsy(0_u64), None);
        assert_eq!(from_falsy(0.0_f64), None);
    }

    #[test]
    fn test_nan_is_falsy() {
        assert_eq!(from_falsy(f64::NAN), None);
    }

    #[test]
    fn test_false_is_falsy() {
        assert_eq!(from_falsy(false), None);
    }

    #[test]
    fn test_none_is_falsy() {
        assert!(None::<i32>.is_falsy());
        assert!(Some(0).is_falsy());
        assert!(!Some(7).is_falsy());
    }

    #[test]
    fn test_truthy_values_round_trip_unchanged() {
        assert_eq!(from_falsy("MS Word"), Some("MS Word"));
        assert_eq!(from_falsy(42), Some(42));
        assert_eq!(from_falsy(true), Some(true));
        assert_eq!(from_falsy(-1.5), Some(-1.5));
    }

    #[test]
    fn test_from_predicate_custom_notion_of_presence() {
        assert_eq!(from_predicate("  ", |s| !s.trim().is_empty()), None);
        assert_eq!(from_predicate(" x ", |s| !s.trim().is_empty()), Some(" x "));
    }
}
