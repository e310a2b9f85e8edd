//! Branching combinators: `condition`, `casus`, `when`, `unless`, and the
//! first-match dispatcher `adapter`.

use std::fmt;
use std::rc::Rc;

use crate::function::Variadic;

use super::predicate::Predicate;
use super::truthy::Truthy;

/// Branches between two callables on a predicate.
///
/// The predicate sees the full call-time argument list; the selected
/// branch receives that same list. The returned arity is the larger of the
/// two branch arities.
///
/// # Examples
///
/// ```
/// use pointfree::function::Variadic;
/// use pointfree::logic::{Predicate, condition};
///
/// let halve = Variadic::from_unary(|x: i32| x / 2);
/// let triple = Variadic::from_unary(|x: i32| x * 3);
/// let even = Predicate::unary(|x: &i32| x % 2 == 0);
///
/// let collatz_step = condition(even, halve, triple);
/// assert_eq!(collatz_step.call(&[10]), 5);
/// assert_eq!(collatz_step.call(&[5]), 15);
/// ```
pub fn condition<T>(
    predicate: Predicate<T>,
    on_true: Variadic<T>,
    on_false: Variadic<T>,
) -> Variadic<T> {
    let arity = on_true.arity().max(on_false.arity());
    Variadic::new(arity, move |args| {
        if predicate.test(args) {
            on_true.call(args)
        } else {
            on_false.call(args)
        }
    })
}

/// A variadic callable that may decline to produce a value.
///
/// Cases are the building blocks of [`adapter`]: `None` means "not
/// handled, try the next case".
pub struct Case<T: 'static> {
    run: Rc<dyn Fn(&[T]) -> Option<T>>,
}

impl<T> Clone for Case<T> {
    fn clone(&self) -> Self {
        Self {
            run: Rc::clone(&self.run),
        }
    }
}

impl<T> fmt::Debug for Case<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Case").finish_non_exhaustive()
    }
}

impl<T> Case<T> {
    /// Wraps a closure over the full argument list.
    pub fn new(run: impl Fn(&[T]) -> Option<T> + 'static) -> Self {
        Self { run: Rc::new(run) }
    }

    /// Evaluates the case.
    pub fn call(&self, args: &[T]) -> Option<T> {
        (self.run)(args)
    }
}

/// Guards a callable behind a predicate.
///
/// Like [`condition`] with a false branch that declines: the result is
/// `None` whenever the predicate fails.
///
/// # Examples
///
/// ```
/// use pointfree::function::Variadic;
/// use pointfree::logic::{Predicate, casus};
///
/// let halve = Variadic::from_unary(|x: i32| x / 2);
/// let even = Predicate::unary(|x: &i32| x % 2 == 0);
///
/// let halve_even = casus(even, halve);
/// assert_eq!(halve_even.call(&[10]), Some(5));
/// assert_eq!(halve_even.call(&[5]), None);
/// ```
pub fn casus<T>(predicate: Predicate<T>, function: Variadic<T>) -> Case<T> {
    Case::new(move |args| {
        if predicate.test(args) {
            Some(function.call(args))
        } else {
            None
        }
    })
}

/// Tries each case in order and returns the first produced value.
///
/// Later cases are not evaluated after a hit. An empty list, or a list
/// where every case declines, yields `None`.
///
/// # Examples
///
/// ```
/// use pointfree::function::Variadic;
/// use pointfree::logic::{Predicate, adapter, casus};
///
/// let halve = Variadic::from_unary(|x: i32| x / 2);
/// let negate = Variadic::from_unary(|x: i32| -x);
/// let even = Predicate::unary(|x: &i32| x % 2 == 0);
/// let positive = Predicate::unary(|x: &i32| *x > 0);
///
/// let dispatch = adapter(vec![casus(even, halve), casus(positive, negate)]);
/// assert_eq!(dispatch.call(&[10]), Some(5));
/// assert_eq!(dispatch.call(&[3]), Some(-3));
/// assert_eq!(dispatch.call(&[-3]), None);
/// ```
pub fn adapter<T>(cases: Vec<Case<T>>) -> Case<T> {
    Case::new(move |args| cases.iter().find_map(|case| case.call(args)))
}

/// Applies `function` when the predicate holds; otherwise the input passes
/// through unchanged.
///
/// Strictly unary: both the predicate and the function see a single value.
///
/// # Examples
///
/// ```
/// use pointfree::logic::when;
///
/// let clamp_negative = when(|x: &i32| *x < 0, |_| 0);
/// assert_eq!(clamp_negative(-4), 0);
/// assert_eq!(clamp_negative(4), 4);
/// ```
pub fn when<T, R, P, F>(predicate: P, function: F) -> impl Fn(T) -> T
where
    P: Fn(&T) -> R,
    R: Truthy,
    F: Fn(T) -> T,
{
    move |value| {
        if predicate(&value).truthy() {
            function(value)
        } else {
            value
        }
    }
}

/// Applies `function` when the predicate fails; otherwise the input passes
/// through unchanged. The mirror of [`when`].
pub fn unless<T, R, P, F>(predicate: P, function: F) -> impl Fn(T) -> T
where
    P: Fn(&T) -> R,
    R: Truthy,
    F: Fn(T) -> T,
{
    move |value| {
        if predicate(&value).truthy() {
            value
        } else {
            function(value)
        }
    }
}

static_assertions::assert_not_impl_any!(Case<i32>: Send, Sync);
