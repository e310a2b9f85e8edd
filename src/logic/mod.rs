//! Predicate and branching combinators.
//!
//! Everything here shares two rules inherited from the rest of the crate:
//! predicates see the full call-time argument list, and predicate results
//! are coerced with ordinary truthiness ([`Truthy`]), never compared
//! against `true`.
//!
//! # Overview
//!
//! - [`Predicate`]: a truthiness-coerced predicate over an argument list
//! - [`all_of`] / [`any_of`]: short-circuiting conjunction/disjunction,
//!   vacuously true/false on the empty list
//! - [`condition`]: two-way branch over [`Variadic`](crate::function::Variadic)
//!   callables
//! - [`casus`] / [`Case`] / [`adapter`]: declining cases and first-match
//!   dispatch
//! - [`when`] / [`unless`]: unary pass-through guards
//!
//! # Example
//!
//! ```
//! use pointfree::logic::{Predicate, all_of, any_of};
//!
//! let positive = Predicate::unary(|value: &i32| *value > 0);
//! let small = Predicate::unary(|value: &i32| value.abs() < 100);
//!
//! assert!(all_of(vec![positive.clone(), small.clone()]).test(&[5]));
//! assert!(any_of(vec![positive, small]).test(&[-5]));
//! ```

mod branch;
mod predicate;
mod truthy;

pub use branch::{Case, adapter, casus, condition, unless, when};
pub use predicate::{Predicate, all_of, any_of};
pub use truthy::Truthy;
