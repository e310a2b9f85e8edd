//! The curry builder family.
//!
//! Four builders configure the [`Collector`](super::Collector) state
//! machine:
//!
//! - [`curry`]: left-to-right, one argument per call
//! - [`curry_right`]: reversed application order, one argument per call
//! - [`curryable`]: left-to-right, any call may supply several arguments
//! - [`curryable_right`]: reversed order, auto-curry intake
//!
//! All four share the arity resolution rule: an explicit arity wins,
//! otherwise the callable's declared arity is used. A resolved arity of 0
//! or 1 disables currying entirely and the original callable is returned
//! unchanged, observable through [`Variadic::ptr_eq`].

use super::collector::{Collector, Curried, Direction, Intake};
use super::variadic::Variadic;

/// Resolves the arity a curry builder works toward.
fn resolved_arity<T>(function: &Variadic<T>, explicit: Option<usize>) -> usize {
    explicit.unwrap_or_else(|| function.arity())
}

fn build<T: Clone + Default>(
    function: Variadic<T>,
    explicit: Option<usize>,
    direction: Direction,
    intake: Intake,
) -> Curried<T> {
    let arity = resolved_arity(&function, explicit);
    if arity <= 1 {
        Curried::Direct(function)
    } else {
        Curried::Collecting(Collector::new(function, arity, direction, intake))
    }
}

/// Curries a callable: one argument consumed per call, applied in the
/// order supplied.
///
/// Extra arguments in a single call are silently dropped; an empty call
/// consumes one slot as `T::default()`. Intermediate results can be reused
/// and completed independently.
///
/// # Examples
///
/// ```
/// use pointfree::function::{Variadic, curry};
///
/// let subtract = Variadic::new(2, |args: &[i32]| args[0] - args[1]);
/// let five = curry(subtract, None).call(&[5]).pending().unwrap();
///
/// assert_eq!(five.call(&[4]).done(), Some(1));
/// assert_eq!(five.call(&[1]).done(), Some(4));
/// ```
pub fn curry<T: Clone + Default>(function: Variadic<T>, arity: Option<usize>) -> Curried<T> {
    build(function, arity, Direction::Left, Intake::Single)
}

/// Curries a callable with reversed application order.
///
/// The complete collected list is reversed at invocation time, so feeding
/// `a`, `b`, `c` applies the target to `c`, `b`, `a`.
///
/// # Examples
///
/// ```
/// use pointfree::function::{Variadic, curry_right};
///
/// let subtract = Variadic::new(2, |args: &[i32]| args[0] - args[1]);
/// let curried = curry_right(subtract, None);
/// let step = curried.call(&[5]).pending().unwrap();
///
/// // subtract(4, 5)
/// assert_eq!(step.call(&[4]).done(), Some(-1));
/// ```
pub fn curry_right<T: Clone + Default>(function: Variadic<T>, arity: Option<usize>) -> Curried<T> {
    build(function, arity, Direction::Right, Intake::Single)
}

/// Curries a callable with auto-curry intake: any call may supply several
/// arguments, and the arity is consumed by total argument count.
///
/// # Examples
///
/// ```
/// use pointfree::function::{Variadic, curryable};
///
/// let sum = Variadic::new(3, |args: &[i32]| args.iter().sum());
/// let curried = curryable(sum, None);
///
/// assert_eq!(curried.call(&[1, 2, 3]).done(), Some(6));
/// let partial = curried.call(&[1, 2]).pending().unwrap();
/// assert_eq!(partial.call(&[3]).done(), Some(6));
/// ```
pub fn curryable<T: Clone + Default>(function: Variadic<T>, arity: Option<usize>) -> Curried<T> {
    build(function, arity, Direction::Left, Intake::Auto)
}

/// Auto-curry intake with reversed application order.
pub fn curryable_right<T: Clone + Default>(
    function: Variadic<T>,
    arity: Option<usize>,
) -> Curried<T> {
    build(function, arity, Direction::Right, Intake::Auto)
}
