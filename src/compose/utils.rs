//! Helper combinators for function composition.
//!
//! - [`identity`]: returns its argument unchanged (I combinator)
//! - [`constant`]: always returns the same value (K combinator)
//! - [`flip`]: swaps the arguments of a binary function (C combinator)
//!
//! For reversing the full argument list of a variadic callable, see
//! [`Variadic::flip`](crate::function::Variadic::flip).

/// Returns the value unchanged.
///
/// The unit element of composition: `compose!(identity, f)` and
/// `compose!(f, identity)` are both equivalent to `f`.
///
/// # Examples
///
/// ```
/// use pointfree::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns the given value, ignoring its
/// input.
///
/// # Examples
///
/// ```
/// use pointfree::compose::constant;
///
/// let always_five = constant::<_, i32>(5);
/// assert_eq!(always_five(100), 5);
///
/// let zeros: Vec<i32> = vec![1, 2, 3].into_iter().map(constant(0)).collect();
/// assert_eq!(zeros, vec![0, 0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the arguments of a binary function.
///
/// # Laws
///
/// - **Double flip identity**: `flip(flip(f)) == f`
/// - **Flip definition**: `flip(f)(a, b) == f(b, a)`
///
/// # Examples
///
/// ```
/// use pointfree::compose::flip;
///
/// fn divide(numerator: f64, denominator: f64) -> f64 {
///     numerator / denominator
/// }
///
/// let flipped = flip(divide);
/// assert!((flipped(10.0, 2.0) - 0.2).abs() < f64::EPSILON);
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second_argument, first_argument| function(first_argument, second_argument)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_with_unit() {
        assert_eq!(identity(()), ());
    }

    #[test]
    fn test_constant_with_reference() {
        let always_hello = constant("hello");
        assert_eq!(always_hello(42), "hello");
    }

    #[test]
    fn test_double_flip_cancels() {
        fn subtract(minuend: i32, subtrahend: i32) -> i32 {
            minuend - subtrahend
        }

        let twice = flip(flip(subtract));
        assert_eq!(twice(10, 3), subtract(10, 3));
    }
}
