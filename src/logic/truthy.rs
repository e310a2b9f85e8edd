//! Boolean coercion for predicate results.
//!
//! Predicates in this crate may return any [`Truthy`] value, not just
//! `bool`: a search returning an index, a lookup returning an `Option`, a
//! formatter returning a `String`. The combinators coerce the result with
//! ordinary truthiness rules rather than comparing against `true`.

/// A value that coerces to a boolean.
///
/// Falsy values: `false`, zero integers, zero and NaN floats, empty
/// strings, `None`, and `()`. Everything else is truthy.
///
/// # Examples
///
/// ```
/// use pointfree::logic::Truthy;
///
/// assert!(3.truthy());
/// assert!(!0.truthy());
/// assert!(!"".truthy());
/// assert!("x".truthy());
/// assert!(!f64::NAN.truthy());
/// assert!(!None::<i32>.truthy());
/// ```
pub trait Truthy {
    /// Coerces the value to a boolean.
    fn truthy(&self) -> bool;
}

impl Truthy for bool {
    fn truthy(&self) -> bool {
        *self
    }
}

impl Truthy for () {
    fn truthy(&self) -> bool {
        false
    }
}

macro_rules! impl_truthy_for_integers {
    ($($integer:ty),+ $(,)?) => {
        $(
            impl Truthy for $integer {
                fn truthy(&self) -> bool {
                    *self != 0
                }
            }
        )+
    };
}

impl_truthy_for_integers!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_truthy_for_floats {
    ($($float:ty),+ $(,)?) => {
        $(
            impl Truthy for $float {
                fn truthy(&self) -> bool {
                    *self != 0.0 && !self.is_nan()
                }
            }
        )+
    };
}

impl_truthy_for_floats!(f32, f64);

impl Truthy for str {
    fn truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for &str {
    fn truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for Option<T> {
    fn truthy(&self) -> bool {
        self.is_some()
    }
}
