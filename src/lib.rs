//! # optfmt
//!
//! Optional-value combinators and display-formatting helpers.
//!
//! ## Overview
//!
//! This library provides a small set of pure, composable building blocks for
//! turning possibly-missing values into display-ready strings:
//!
//! - **Falsy-aware constructors**: [`option::from_falsy`] normalizes "missing"
//!   and "present but empty" into a single absent state
//! - **All-or-nothing joins**: [`sequence_options!`] combines several optional
//!   values into one optional tuple
//! - **Pipeline combinators**: [`option::map_option`], [`option::chain_option`],
//!   and [`option::get_or_else`] for left-to-right data flow with [`pipe!`]
//! - **Typed branching**: [`control::Either`] for success/failure values that
//!   carry an explicit payload instead of panicking
//! - **Display formatting**: [`display::software_display_value`] and
//!   [`display::submission_date_display_value`] as ready-made pipelines
//!
//! Everything here is referentially transparent: no I/O, no shared state, no
//! panics on any input. Absence is represented as data, so callers cannot
//! forget to handle it.
//!
//! ## Example
//!
//! ```rust
//! use optfmt::option::{from_falsy, get_or_else, map_option};
//! use optfmt::{pipe, sequence_options};
//!
//! let display = pipe!(
//!     sequence_options!(from_falsy("MS Word"), from_falsy("3.0.0")),
//!     map_option(|(application, version)| format!("{application} {version}")),
//!     get_or_else(|| "-".to_string()),
//! );
//! assert_eq!(display, "MS Word 3.0.0");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the combinators, the `Either` type, the display helpers, and
/// the crate macros.
///
/// # Usage
///
/// ```rust
/// use optfmt::prelude::*;
/// ```
pub mod prelude {
    pub use crate::compose::*;
    pub use crate::control::*;
    pub use crate::display::*;
    pub use crate::option::*;
}

pub mod compose;
pub mod control;
pub mod display;
pub mod option;
