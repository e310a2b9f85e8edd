//! The argument-collection state machine behind the curry builders.
//!
//! A [`Collector`] accumulates arguments across calls until its arity is
//! met, then applies the target. It is an immutable value: every step
//! clones the collected list, so two continuations of the same partially
//! filled curried function never observe each other's arguments.
//!
//! This implementation uses `SmallVec`-based argument storage so that the
//! common short argument lists stay inline.

use smallvec::SmallVec;

use super::variadic::Variadic;

/// Inline capacity for collected argument lists.
const COLLECTED_INLINE_CAPACITY: usize = 8;

/// The outcome of feeding arguments to a collector-backed callable.
///
/// Either the arity threshold was reached and the target produced a final
/// value, or more input is awaited and `Pending` carries the continuation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Applied<T, F> {
    /// The target function was invoked and produced this value.
    Done(T),
    /// More arguments are awaited; this is the continuation to call.
    Pending(F),
}

impl<T, F> Applied<T, F> {
    /// The final value, if the target has been invoked.
    pub fn done(self) -> Option<T> {
        match self {
            Self::Done(value) => Some(value),
            Self::Pending(_) => None,
        }
    }

    /// The continuation, if more arguments are awaited.
    pub fn pending(self) -> Option<F> {
        match self {
            Self::Done(_) => None,
            Self::Pending(next) => Some(next),
        }
    }

    /// Whether the target has been invoked.
    pub const fn is_done(&self) -> bool {
        matches!(self, Self::Done(_))
    }
}

/// The order in which collected arguments are handed to the target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Arguments are applied in the order they were supplied.
    Left,
    /// The complete collected list is reversed before application, so the
    /// last-supplied argument becomes the first formal parameter.
    Right,
}

/// How many arguments a single call may consume.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intake {
    /// One argument per call; extras in the same call are silently dropped.
    Single,
    /// Every argument of the call is consumed (auto-curry).
    Auto,
}

/// An immutable argument collector: collected arguments so far, the arity
/// threshold, the application direction and the intake policy.
///
/// A call with zero arguments still consumes one arity slot, filling the
/// position with `T::default()`.
#[derive(Clone, Debug)]
pub struct Collector<T: 'static> {
    target: Variadic<T>,
    collected: SmallVec<[T; COLLECTED_INLINE_CAPACITY]>,
    arity: usize,
    direction: Direction,
    intake: Intake,
}

impl<T: Clone + Default> Collector<T> {
    pub(crate) fn new(
        target: Variadic<T>,
        arity: usize,
        direction: Direction,
        intake: Intake,
    ) -> Self {
        Self {
            target,
            collected: SmallVec::new(),
            arity,
            direction,
            intake,
        }
    }

    /// The arity threshold this collector is working toward.
    #[must_use]
    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// How many arguments are still awaited.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.arity.saturating_sub(self.collected.len())
    }

    /// Feeds one call's worth of arguments to the collector.
    ///
    /// Returns `Done` with the target's result once the collected count
    /// reaches the arity, `Pending` with a new collector otherwise. The
    /// receiver is never mutated; branching continuations stay independent.
    pub fn step(&self, new_args: &[T]) -> Applied<T, Curried<T>> {
        let mut collected = self.collected.clone();
        match self.intake {
            // An empty call consumes the slot as a default value; extra
            // arguments in the same call are dropped.
            Intake::Single => collected.push(new_args.first().cloned().unwrap_or_default()),
            Intake::Auto => {
                if new_args.is_empty() {
                    collected.push(T::default());
                } else {
                    collected.extend(new_args.iter().cloned());
                }
            }
        }

        if collected.len() >= self.arity {
            let mut final_args = collected.into_vec();
            if self.direction == Direction::Right {
                final_args.reverse();
            }
            Applied::Done(self.target.call(&final_args))
        } else {
            Applied::Pending(Curried::Collecting(Self {
                target: self.target.clone(),
                collected,
                arity: self.arity,
                direction: self.direction,
                intake: self.intake,
            }))
        }
    }
}

/// A curried callable, as returned by the curry builders.
///
/// `Direct` is the arity ≤ 1 fast path: the original callable, unchanged.
/// `Collecting` steps the argument-collection state machine.
#[derive(Clone, Debug)]
pub enum Curried<T: 'static> {
    /// The original callable; applied immediately on every call.
    Direct(Variadic<T>),
    /// A collector awaiting more arguments.
    Collecting(Collector<T>),
}

impl<T: Clone + Default> Curried<T> {
    /// Feeds one call's worth of arguments.
    pub fn call(&self, args: &[T]) -> Applied<T, Self> {
        match self {
            Self::Direct(function) => Applied::Done(function.call(args)),
            Self::Collecting(collector) => collector.step(args),
        }
    }

    /// The underlying callable, when this is the arity ≤ 1 fast path.
    #[must_use]
    pub const fn as_direct(&self) -> Option<&Variadic<T>> {
        match self {
            Self::Direct(function) => Some(function),
            Self::Collecting(_) => None,
        }
    }
}

static_assertions::assert_not_impl_any!(Collector<i32>: Send, Sync);
static_assertions::assert_not_impl_any!(Curried<i32>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    fn concat3() -> Variadic<String> {
        Variadic::new(3, |args: &[String]| args.concat())
    }

    #[test]
    fn test_step_stays_pending_below_arity() {
        let collector = Collector::new(concat3(), 3, Direction::Left, Intake::Single);
        let outcome = collector.step(&["a".to_string()]);
        assert!(!outcome.is_done());
    }

    #[test]
    fn test_step_invokes_at_arity() {
        let collector = Collector::new(concat3(), 3, Direction::Left, Intake::Auto);
        let outcome = collector.step(&["a".to_string(), "b".to_string(), "c".to_string()]);
        assert_eq!(outcome.done(), Some("abc".to_string()));
    }

    #[test]
    fn test_right_direction_reverses_before_application() {
        let collector = Collector::new(concat3(), 3, Direction::Right, Intake::Auto);
        let outcome = collector.step(&["a".to_string(), "b".to_string(), "c".to_string()]);
        assert_eq!(outcome.done(), Some("cba".to_string()));
    }

    #[test]
    fn test_single_intake_drops_extras() {
        let collector = Collector::new(concat3(), 3, Direction::Left, Intake::Single);
        let step1 = collector
            .step(&["a".to_string(), "x".to_string()])
            .pending()
            .unwrap();
        let step2 = step1
            .call(&["b".to_string(), "y".to_string(), "z".to_string()])
            .pending()
            .unwrap();
        assert_eq!(step2.call(&["c".to_string()]).done(), Some("abc".to_string()));
    }

    #[test]
    fn test_empty_call_consumes_a_slot() {
        let collector = Collector::new(concat3(), 3, Direction::Left, Intake::Single);
        let step1 = collector.step(&["a".to_string()]).pending().unwrap();
        let step2 = step1.call(&[]).pending().unwrap();
        // The empty call filled the middle slot with the default value.
        assert_eq!(step2.call(&["c".to_string()]).done(), Some("ac".to_string()));
    }

    #[test]
    fn test_branching_continuations_are_independent() {
        let collector = Collector::new(concat3(), 3, Direction::Left, Intake::Auto);
        let seeded = collector.step(&["a".to_string()]).pending().unwrap();

        let left = seeded.call(&["b".to_string(), "c".to_string()]).done();
        let right = seeded.call(&["x".to_string(), "y".to_string()]).done();

        assert_eq!(left, Some("abc".to_string()));
        assert_eq!(right, Some("axy".to_string()));
    }

    #[test]
    fn test_remaining_counts_down() {
        let collector = Collector::new(concat3(), 3, Direction::Left, Intake::Single);
        assert_eq!(collector.remaining(), 3);
        let stepped = collector.step(&["a".to_string()]).pending().unwrap();
        match stepped {
            Curried::Collecting(inner) => assert_eq!(inner.remaining(), 2),
            Curried::Direct(_) => panic!("expected a collecting continuation"),
        }
    }
}
