//! Safe parsing returning a tagged failure instead of a sentinel.
//!
//! The classic alternative to `NaN`-style sentinels or panics: encode the
//! chance of failure in the return type so everyone, including the compiler,
//! knows this can fail and callers are forced to deal with it.

use thiserror::Error;

use super::either::Either;

/// Failure payload for [`parse_integer`].
///
/// Carries the offending input so the rendered message can say what was
/// actually rejected.
///
/// # Examples
///
/// ```rust
/// use optfmt::control::parse_integer;
///
/// let failure = parse_integer("asdf").left().unwrap();
/// assert_eq!(failure.to_string(), r#"could not parse "asdf" as an integer"#);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("could not parse {input:?} as an integer")]
pub struct ParseIntFailure {
    /// The string that failed to parse.
    pub input: String,
}

/// Parses a string to an integer, returning a tagged success or failure.
///
/// Returns `Right` of the parsed value, or `Left` of a [`ParseIntFailure`]
/// naming the rejected input. Never panics.
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
///         |n| format!("your doubled int from a string is {n}"),
///     );
/// assert_eq!(message, "your doubled int from a string is 4");
/// ```
pub fn parse_integer(input: &str) -> Either<ParseIntFailure, i64> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| ParseIntFailure {
            input: input.to_string(),
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer_success() {
        assert_eq!(parse_integer("2"), Either::Right(2));
        assert_eq!(parse_integer(" -17 "), Either::Right(-17));
    }

    #[test]
    fn test_parse_integer_failure_names_the_input() {
        let result = parse_integer("asdf");
        assert_eq!(
            result,
            Either::Left(ParseIntFailure {
                input: "asdf".to_string()
            })
        );
    }

    #[test]
    fn test_parse_integer_failure_chains_without_nesting() {
        let doubled = parse_integer("asdf").map_right(|n| n * 2);
        assert!(doubled.is_left());
    }
}
