//! The dynamic-arity function engine.
//!
//! This module ports the argument-collection patterns of dynamically typed
//! functional libraries to Rust. Pipelines are homogeneous over a value
//! type `T`; a callable in this world is a [`Variadic`]: a function over an
//! argument slice plus a declared arity.
//!
//! # Overview
//!
//! - [`Variadic`]: the variadic callable, with `flip`/`aritize` adapters
//! - [`curry`], [`curry_right`], [`curryable`], [`curryable_right`]:
//!   configure the argument-collection state machine
//! - [`Collector`] / [`Curried`] / [`Applied`]: the state machine itself
//! - [`partial`], [`partial_right`]: placeholder-template application
//! - [`as_partial`] / [`AsPartial`]: calls that may carry placeholders
//! - [`Slot`]: a template position, bound value or hole
//!
//! # Semantics worth knowing
//!
//! Three behaviors are deliberate contracts, not accidents:
//!
//! - a call with zero arguments still consumes one arity slot, as
//!   `T::default()`;
//! - under single intake ([`curry`]/[`curry_right`]), extra arguments in
//!   one call are silently dropped, never an error;
//! - excess arguments under auto intake are passed through to the target,
//!   never an error.
//!
//! # Example
//!
//! ```
//! use pointfree::function::{Variadic, curryable};
//!
//! let sum = Variadic::new(3, |args: &[i32]| args.iter().sum());
//! let curried = curryable(sum, None);
//!
//! let a = curried.call(&[1, 2]).pending().unwrap().call(&[3]).done();
//! let b = curried.call(&[1]).pending().unwrap().call(&[2, 3]).done();
//! let c = curried.call(&[1, 2, 3]).done();
//! assert_eq!(a, Some(6));
//! assert_eq!(a, b);
//! assert_eq!(b, c);
//! ```

mod collector;
mod curry;
mod partial;
mod variadic;

pub use collector::{Applied, Collector, Curried};
pub use curry::{curry, curry_right, curryable, curryable_right};
pub use partial::{AsPartial, Slot, as_partial, partial, partial_right};
pub use variadic::Variadic;
