//! The `compose!` macro for right-to-left function composition.

/// Composes functions from right to left.
///
/// `compose!(f, g, h)(x)` is equivalent to `f(g(h(x)))`: the rightmost
/// function is applied first, following the mathematical convention.
///
/// # Syntax
///
/// - `compose!(f)` - returns `f` unchanged (identity composition)
/// - `compose!(f, g)` - returns `|x| f(g(x))`
/// - `compose!(f, g, h, ...)` - composes any number of functions
///
/// # Laws
///
/// - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
/// - **Left Identity**: `compose!(identity, f) == f`
/// - **Right Identity**: `compose!(f, identity) == f`
///
/// # Examples
///
/// ```
/// use pointfree::compose;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
///
/// // add_one(double(5)) = 11
/// let composed = compose!(add_one, double);
/// assert_eq!(composed(5), 11);
/// ```
///
/// Types flow through the chain right to left:
///
/// ```
/// use pointfree::compose;
///
/// fn render(x: i32) -> String { x.to_string() }
/// fn measure(s: String) -> usize { s.len() }
///
/// let composed = compose!(measure, render);
/// assert_eq!(composed(12345), 5);
/// ```
#[macro_export]
macro_rules! compose {
    // A single function composes to itself.
    ($function:expr) => {
        $function
    };

    // compose!(f, g)(x) = f(g(x))
    ($outer:expr, $inner:expr $(,)?) => {{
        let outer = $outer;
        let inner = $inner;
        move |input| outer(inner(input))
    }};

    // Fold the tail first, then wrap it once more.
    ($outer:expr, $($tail:expr),+ $(,)?) => {{
        let outer = $outer;
        let tail = $crate::compose!($($tail),+);
        move |input| outer(tail(input))
    }};
}
