//! The `pipe!` macro for left-to-right value threading.

/// Pipes a value through a series of functions from left to right.
///
/// `pipe!(x, f, g, h)` is equivalent to `h(g(f(x)))`: the value flows
/// through the transformations in the order they are written.
///
/// Whereas [`compose!`](crate::compose!) builds a new function, `pipe!`
/// applies the chain to a value immediately; each function only needs to
/// implement [`FnOnce`].
///
/// # Syntax
///
/// - `pipe!(x)` - returns `x` unchanged
/// - `pipe!(x, f)` - returns `f(x)`
/// - `pipe!(x, f, g, ...)` - returns `...g(f(x))`
///
/// # Examples
///
/// ```
/// use pointfree::pipe;
///
/// fn double(x: i32) -> i32 { x * 2 }
/// fn add_one(x: i32) -> i32 { x + 1 }
///
/// // add_one(double(5)) = 11
/// assert_eq!(pipe!(5, double, add_one), 11);
/// ```
///
/// Consistency with `compose!`:
///
/// ```
/// use pointfree::{compose, pipe};
///
/// fn f(x: i32) -> i32 { x + 1 }
/// fn g(x: i32) -> i32 { x * 2 }
///
/// assert_eq!(pipe!(10, f, g), compose!(g, f)(10));
/// ```
#[macro_export]
macro_rules! pipe {
    // A bare value passes through.
    ($value:expr) => {
        $value
    };

    ($value:expr, $function:expr $(,)?) => {
        $function($value)
    };

    ($value:expr, $function:expr, $($tail:expr),+ $(,)?) => {
        $crate::pipe!($function($value), $($tail),+)
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_pipe_value_only() {
        assert_eq!(pipe!(42), 42);
    }

    #[test]
    fn test_pipe_chain() {
        let square = |x: i32| x * x;
        let double = |x: i32| x * 2;
        let add_one = |x: i32| x + 1;
        // square(3) = 9, double(9) = 18, add_one(18) = 19
        assert_eq!(pipe!(3, square, double, add_one), 19);
    }

    #[test]
    fn test_pipe_consuming_closures() {
        let own = String::from("hello");
        let shout = move |s: String| format!("{}{}", s, own.to_uppercase());
        let measure = |s: String| s.len();
        assert_eq!(pipe!(String::from("x"), shout, measure), 6);
    }
}
