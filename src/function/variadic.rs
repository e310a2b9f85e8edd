//! The [`Variadic`] callable type underlying the dynamic-arity engine.
//!
//! A [`Variadic`] pairs a function over an argument slice with a declared
//! arity. The declared arity plays the role that a function's formal
//! parameter count plays in dynamically typed languages: curry builders
//! consult it when no explicit arity is given, and `aritize` uses it to
//! truncate or pad pass-through arguments.
//!
//! # Design Decisions
//!
//! The callable is stored behind `Rc` so that curried and partially applied
//! derivatives can share the target cheaply and so that identity of the
//! underlying function is observable via [`Variadic::ptr_eq`]. This mirrors
//! the contract that currying a function of arity 0 or 1 returns the
//! original function unchanged.
//!
//! A method-style target preserves its receiver by capturing it in the
//! closure handed to [`Variadic::new`]; no combinator in this crate ever
//! inspects or replaces a receiver.

use std::fmt;
use std::rc::Rc;

/// A callable over a homogeneous argument slice, with a declared arity.
///
/// Missing trailing arguments are the callee's concern: the closure receives
/// exactly the slice the caller supplied, which may be shorter or longer
/// than the declared arity. The typed constructors ([`Variadic::from_unary`]
/// and friends) default-fill missing positions.
///
/// # Examples
///
/// ```
/// use pointfree::function::Variadic;
///
/// let subtract = Variadic::new(2, |args: &[i32]| args[0] - args[1]);
/// assert_eq!(subtract.arity(), 2);
/// assert_eq!(subtract.call(&[5, 3]), 2);
/// ```
pub struct Variadic<T: 'static> {
    run: Rc<dyn Fn(&[T]) -> T>,
    arity: usize,
}

impl<T> Clone for Variadic<T> {
    fn clone(&self) -> Self {
        Self {
            run: Rc::clone(&self.run),
            arity: self.arity,
        }
    }
}

impl<T> fmt::Debug for Variadic<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Variadic")
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

impl<T> Variadic<T> {
    /// Wraps a function over an argument slice, declaring its arity.
    pub fn new(arity: usize, run: impl Fn(&[T]) -> T + 'static) -> Self {
        Self {
            run: Rc::new(run),
            arity,
        }
    }

    /// The declared arity of this callable.
    #[must_use]
    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// Applies the callable to the given arguments.
    pub fn call(&self, args: &[T]) -> T {
        (self.run)(args)
    }

    /// Whether two handles share the same underlying function.
    ///
    /// This is the identity comparison used to observe the curry fast path:
    /// currying with a resolved arity of 0 or 1 hands back the original
    /// callable.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.run, &other.run)
    }
}

impl<T: Clone + Default> Variadic<T> {
    /// Wraps a one-argument function; a missing argument defaults.
    pub fn from_unary(function: impl Fn(T) -> T + 'static) -> Self {
        Self::new(1, move |args| {
            function(args.first().cloned().unwrap_or_default())
        })
    }

    /// Wraps a two-argument function; missing arguments default.
    pub fn from_binary(function: impl Fn(T, T) -> T + 'static) -> Self {
        Self::new(2, move |args| {
            function(
                args.first().cloned().unwrap_or_default(),
                args.get(1).cloned().unwrap_or_default(),
            )
        })
    }

    /// Wraps a three-argument function; missing arguments default.
    pub fn from_ternary(function: impl Fn(T, T, T) -> T + 'static) -> Self {
        Self::new(3, move |args| {
            function(
                args.first().cloned().unwrap_or_default(),
                args.get(1).cloned().unwrap_or_default(),
                args.get(2).cloned().unwrap_or_default(),
            )
        })
    }

    /// Fixes the effective arity of this callable.
    ///
    /// The returned callable truncates extra arguments and default-fills
    /// missing ones, so the target always sees exactly `arity` values.
    ///
    /// # Examples
    ///
    /// ```
    /// use pointfree::function::Variadic;
    ///
    /// let sum = Variadic::new(0, |args: &[i32]| args.iter().sum());
    /// let pair_sum = sum.aritize(2);
    /// assert_eq!(pair_sum.call(&[1, 2, 3, 4]), 3);
    /// ```
    #[must_use]
    pub fn aritize(&self, arity: usize) -> Self {
        let inner = self.clone();
        Self::new(arity, move |args| {
            let mut fixed: Vec<T> = args.iter().take(arity).cloned().collect();
            fixed.resize_with(arity, T::default);
            inner.call(&fixed)
        })
    }

    /// Restricts this callable to its first argument.
    #[must_use]
    pub fn unary(&self) -> Self {
        self.aritize(1)
    }

    /// Restricts this callable to its first two arguments.
    #[must_use]
    pub fn binary(&self) -> Self {
        self.aritize(2)
    }

    /// Reverses the full call-time argument list before delegating.
    ///
    /// Flipping twice behaves as the original callable.
    ///
    /// # Examples
    ///
    /// ```
    /// use pointfree::function::Variadic;
    ///
    /// let subtract = Variadic::new(2, |args: &[i32]| args[0] - args[1]);
    /// assert_eq!(subtract.flip().call(&[5, 3]), -2);
    /// assert_eq!(subtract.flip().flip().call(&[5, 3]), 2);
    /// ```
    #[must_use]
    pub fn flip(&self) -> Self {
        let inner = self.clone();
        Self::new(self.arity, move |args| {
            let mut reversed: Vec<T> = args.to_vec();
            reversed.reverse();
            inner.call(&reversed)
        })
    }
}

// Rc-backed: confined to one thread by construction.
static_assertions::assert_not_impl_any!(Variadic<i32>: Send, Sync);
static_assertions::assert_not_impl_any!(Variadic<String>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_forwards_arguments() {
        let join = Variadic::new(2, |args: &[String]| args.concat());
        assert_eq!(
            join.call(&["a".to_string(), "b".to_string()]),
            "ab".to_string()
        );
    }

    #[test]
    fn test_ptr_eq_tracks_identity() {
        let function = Variadic::new(1, |args: &[i32]| args[0]);
        let alias = function.clone();
        let other = Variadic::new(1, |args: &[i32]| args[0]);

        assert!(function.ptr_eq(&alias));
        assert!(!function.ptr_eq(&other));
    }

    #[test]
    fn test_aritize_pads_with_default() {
        let sum = Variadic::new(0, |args: &[i32]| args.iter().sum());
        let triple_sum = sum.aritize(3);
        assert_eq!(triple_sum.call(&[7]), 7);
    }

    #[test]
    fn test_unary_and_binary_shorthands() {
        let sum = Variadic::new(0, |args: &[i32]| args.iter().sum());
        assert_eq!(sum.unary().call(&[5, 6, 7]), 5);
        assert_eq!(sum.binary().call(&[5, 6, 7]), 11);
        assert_eq!(sum.unary().arity(), 1);
    }

    #[test]
    fn test_from_binary_defaults_missing() {
        let subtract = Variadic::from_binary(|first: i32, second| first - second);
        assert_eq!(subtract.call(&[5]), 5);
    }

    #[test]
    fn test_flip_reverses_all_arguments() {
        let fold = Variadic::new(3, |args: &[String]| args.concat());
        let flipped = fold.flip();
        assert_eq!(
            flipped.call(&["a".into(), "b".into(), "c".into()]),
            "cba".to_string()
        );
    }
}
