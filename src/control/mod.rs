//! Control structures for typed success/failure branching.
//!
//! - [`Either`]: a value that is one of two types, `Left` for failure and
//!   `Right` for success
//! - [`parse_integer`] / [`ParseIntFailure`]: safe parsing that returns the
//!   failure as data instead of panicking
//!
//! # Examples
//!
//! ```rust
//! use optfmt::control::{Either, parse_integer};
//!
//! let message = parse_integer("41")
//!     .map_right(|n| n + 1)
//!     .fold(
//!         |failure| failure.to_string(),
//!         |n| format!("the answer is {n}"),
//!     );
//! assert_eq!(message, "the answer is 42");
//! ```

mod either;
mod parse;

pub use either::Either;
pub use parse::{ParseIntFailure, parse_integer};
