//! Predicates over argument lists, and the `all_of`/`any_of` aggregators.

use std::fmt;
use std::rc::Rc;

use super::truthy::Truthy;

/// A predicate over a full call-time argument list.
///
/// Built from any closure whose result is [`Truthy`]; the coercion happens
/// once, at construction, so combinators only ever see `bool`.
pub struct Predicate<T: 'static> {
    check: Rc<dyn Fn(&[T]) -> bool>,
}

impl<T> Clone for Predicate<T> {
    fn clone(&self) -> Self {
        Self {
            check: Rc::clone(&self.check),
        }
    }
}

impl<T> fmt::Debug for Predicate<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Predicate").finish_non_exhaustive()
    }
}

impl<T> Predicate<T> {
    /// Wraps a closure over the full argument list.
    ///
    /// # Examples
    ///
    /// ```
    /// use pointfree::logic::Predicate;
    ///
    /// // The closure returns a count; non-zero counts.
    /// let has_positives = Predicate::new(|args: &[i32]| {
    ///     args.iter().filter(|value| **value > 0).count()
    /// });
    /// assert!(has_positives.test(&[-1, 2]));
    /// assert!(!has_positives.test(&[-1, -2]));
    /// ```
    pub fn new<R: Truthy>(check: impl Fn(&[T]) -> R + 'static) -> Self {
        Self {
            check: Rc::new(move |args| check(args).truthy()),
        }
    }

    /// Evaluates the predicate.
    pub fn test(&self, args: &[T]) -> bool {
        (self.check)(args)
    }

    /// The logical complement of this predicate.
    #[must_use]
    pub fn negate(&self) -> Self {
        let inner = Rc::clone(&self.check);
        Self {
            check: Rc::new(move |args| !inner(args)),
        }
    }
}

impl<T: Clone + Default> Predicate<T> {
    /// Wraps a closure over the first argument only; a missing first
    /// argument defaults.
    pub fn unary<R: Truthy>(check: impl Fn(&T) -> R + 'static) -> Self {
        Self::new(move |args: &[T]| match args.first() {
            Some(first) => check(first).truthy(),
            None => check(&T::default()).truthy(),
        })
    }
}

/// Conjunction over a predicate list.
///
/// Predicates are evaluated in order; the first falsy result
/// short-circuits. The empty list is vacuously true.
///
/// # Examples
///
/// ```
/// use pointfree::logic::{Predicate, all_of};
///
/// let positive = Predicate::unary(|value: &i32| *value > 0);
/// let even = Predicate::unary(|value: &i32| value % 2 == 0);
///
/// let positive_even = all_of(vec![positive, even]);
/// assert!(positive_even.test(&[4]));
/// assert!(!positive_even.test(&[-4]));
/// assert!(all_of(Vec::<Predicate<i32>>::new()).test(&[]));
/// ```
pub fn all_of<T>(predicates: Vec<Predicate<T>>) -> Predicate<T> {
    Predicate::new(move |args: &[T]| predicates.iter().all(|predicate| predicate.test(args)))
}

/// Disjunction over a predicate list.
///
/// Predicates are evaluated in order; the first truthy result
/// short-circuits. The empty list is vacuously false.
pub fn any_of<T>(predicates: Vec<Predicate<T>>) -> Predicate<T> {
    Predicate::new(move |args: &[T]| predicates.iter().any(|predicate| predicate.test(args)))
}

static_assertions::assert_not_impl_any!(Predicate<i32>: Send, Sync);
