//! Function composition utilities.
//!
//! Two styles of composition live here:
//!
//! - **Typed**: the [`compose!`] and [`pipe!`] macros chain ordinary
//!   closures and named functions, checked at compile time, together with
//!   the [`identity`], [`constant`] and [`flip`] helpers.
//! - **Dynamic** (requires the `function` feature): [`compose`] and
//!   [`pipe`] chain [`Variadic`](crate::function::Variadic) callables
//!   assembled at runtime. The innermost stage of a dynamic chain receives
//!   the full call-time argument list; every later stage is unary.
//!
//! # Examples
//!
//! ```
//! use pointfree::compose;
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! // compose!(f, g)(x) = f(g(x))
//! let composed = compose!(add_one, double);
//! assert_eq!(composed(5), 11);
//! ```
//!
//! ```
//! use pointfree::pipe;
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! // pipe!(x, f, g) = g(f(x))
//! assert_eq!(pipe!(5, double, add_one), 11);
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Left Identity**: `compose!(identity, f) == f`
//! - **Right Identity**: `compose!(f, identity) == f`
//! - **Double Flip Identity**: `flip(flip(f)) == f`

#[cfg(feature = "function")]
mod chain;
mod compose_macro;
mod pipe_macro;
mod utils;

#[cfg(feature = "function")]
pub use chain::{compose, pipe};
pub use utils::{constant, flip, identity};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::compose;
pub use crate::pipe;
