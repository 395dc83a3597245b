//! Optional-value combinators.
//!
//! This module provides the core vocabulary for working with values that may
//! be absent:
//!
//! - [`Falsy`] / [`from_falsy`] / [`from_predicate`]: constructors that
//!   normalize "missing" and "present but empty" into one absent state
//! - [`sequence2`], [`sequence3`], [`sequence4`] and the
//!   [`sequence_options!`](crate::sequence_options) macro: all-or-nothing
//!   joins of several options into one optional tuple
//! - [`map_option`], [`chain_option`], [`get_or_else`]: curried pipeline
//!   stages for use with [`pipe!`](crate::pipe)
//!
//! # Examples
//!
//! ```rust
//! use optfmt::option::{from_falsy, get_or_else, map_option, sequence2};
//! use optfmt::pipe;
//!
//! let display = pipe!(
//!     sequence2(from_falsy("MS Word"), from_falsy("3.0.0")),
//!     map_option(|(application, version)| format!("{application} {version}")),
//!     get_or_else(|| "-".to_string()),
//! );
//! assert_eq!(display, "MS Word 3.0.0");
//! ```

mod falsy;
mod pipeline;
mod sequence;

pub use falsy::{Falsy, from_falsy, from_predicate};
pub use pipeline::{chain_option, get_or_else, map_option};
pub use sequence::{sequence2, sequence3, sequence4};

// Re-export the macro (already at crate root via #[macro_export])
pub use crate::sequence_options;
