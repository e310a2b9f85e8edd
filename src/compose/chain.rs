//! Dynamic composition over [`Variadic`] callables.
//!
//! The macro forms (`compose!`, `pipe!`) work on typed closures and fix the
//! chain at compile time. The functions here compose chains assembled at
//! runtime: the innermost stage receives the full call-time argument list,
//! every later stage is applied to the previous stage's single result.

use crate::function::Variadic;

/// Composes callables right to left.
///
/// The rightmost callable is applied first, to the full call-time argument
/// list; its result is the sole argument to each preceding callable. An
/// empty chain composes to the unary identity. The returned arity is the
/// innermost callable's arity.
///
/// # Examples
///
/// ```
/// use pointfree::function::Variadic;
/// use pointfree::compose::compose;
///
/// let sum = Variadic::new(2, |args: &[i32]| args.iter().sum());
/// let double = Variadic::from_unary(|x: i32| x * 2);
///
/// let chained = compose(vec![double, sum]);
/// assert_eq!(chained.call(&[3, 4]), 14);
/// ```
pub fn compose<T: Clone + Default>(functions: Vec<Variadic<T>>) -> Variadic<T> {
    let arity = functions.last().map_or(1, Variadic::arity);
    Variadic::new(arity, move |args| {
        let mut stages = functions.iter().rev();
        let Some(innermost) = stages.next() else {
            return args.first().cloned().unwrap_or_default();
        };
        let mut value = innermost.call(args);
        for stage in stages {
            value = stage.call(std::slice::from_ref(&value));
        }
        value
    })
}

/// Composes callables left to right.
///
/// Exactly [`compose`] with the chain reversed: the leftmost callable is
/// applied first, to the full call-time argument list.
///
/// # Examples
///
/// ```
/// use pointfree::function::Variadic;
/// use pointfree::compose::pipe;
///
/// let max = Variadic::new(2, |args: &[i32]| args.iter().copied().max().unwrap_or_default());
/// let square = Variadic::from_unary(|x: i32| x * x);
///
/// assert_eq!(pipe(vec![max, square]).call(&[3, 5]), 25);
/// ```
pub fn pipe<T: Clone + Default>(mut functions: Vec<Variadic<T>>) -> Variadic<T> {
    functions.reverse();
    compose(functions)
}
