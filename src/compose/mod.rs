//! Function composition utilities.
//!
//! The one composition tool this crate needs is the [`pipe!`](crate::pipe)
//! macro: left-to-right application, reading the way data flows through a
//! display pipeline.
//!
//! ```text
//! x |> f |> g |> h = h(g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```
//! use optfmt::pipe;
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! // pipe!(x, f, g) = g(f(x))
//! let result = pipe!(5, double, add_one);
//! assert_eq!(result, 11); // add_one(double(5)) = 11
//! ```

mod pipe_macro;

// Re-export the macro (already at crate root via #[macro_export])
pub use crate::pipe;
