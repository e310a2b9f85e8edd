//! # pointfree
//!
//! A functional programming library for Rust providing currying, partial
//! application with placeholders, and point-free composition combinators.
//!
//! ## Overview
//!
//! This library brings the argument-collection and composition patterns of
//! dynamically typed functional libraries to Rust:
//!
//! - **Function Engine**: runtime currying (`curry`, `curry_right`,
//!   `curryable`, `curryable_right`) and placeholder partial application
//!   (`partial`, `partial_right`, `as_partial`) over [`function::Variadic`]
//! - **Composition**: `compose!`/`pipe!` macros for typed closures, plus
//!   dynamic `compose`/`pipe` over variadic callables
//! - **Logic Combinators**: `condition`, `casus`, `when`, `unless`,
//!   `adapter`, `all_of`, `any_of` with truthiness coercion
//!
//! ## Feature Flags
//!
//! - `function`: the dynamic-arity engine (curry, partial, placeholders)
//! - `compose`: composition macros and helper combinators
//! - `logic`: predicate and branching combinators (implies `function`)
//!
//! ## Example
//!
//! ```rust
//! use pointfree::function::{Variadic, curry};
//!
//! let subtract = Variadic::new(2, |args: &[i32]| args[0] - args[1]);
//! let curried = curry(subtract, None);
//!
//! let five = curried.call(&[5]).pending().unwrap();
//! assert_eq!(five.call(&[4]).done(), Some(1));
//! assert_eq!(five.call(&[1]).done(), Some(4));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use pointfree::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "function")]
    pub use crate::function::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "logic")]
    pub use crate::logic::*;
}

#[cfg(feature = "function")]
pub mod function;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "logic")]
pub mod logic;
