//! Partial application with placeholder templates.
//!
//! A template is an ordered list of [`Slot`]s: each entry is either a bound
//! value or [`Slot::Hole`], the "fill this position from a later call"
//! marker. The hole is a dedicated enum variant, so no ordinary value can
//! collide with it — the typed equivalent of an identity-compared sentinel.

use super::collector::Applied;
use super::variadic::Variadic;

/// One position of a partial-application template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Slot<T> {
    /// A concrete value, used as-is at invocation time.
    Bound(T),
    /// The placeholder: filled from a call-time argument.
    Hole,
}

impl<T> Slot<T> {
    /// Whether this slot is the placeholder.
    #[must_use]
    pub const fn is_hole(&self) -> bool {
        matches!(self, Self::Hole)
    }

    /// The bound value, if any.
    pub fn into_bound(self) -> Option<T> {
        match self {
            Self::Bound(value) => Some(value),
            Self::Hole => None,
        }
    }
}

impl<T> From<T> for Slot<T> {
    fn from(value: T) -> Self {
        Self::Bound(value)
    }
}

/// Partially applies a template of bound values and holes.
///
/// At invocation, the template is walked left to right: each hole takes the
/// next unused call-time argument, each bound value is used as-is. Once the
/// template is exhausted, remaining call-time arguments are appended. A
/// hole with no call-time argument left yields `T::default()`. The arity
/// of the returned callable is the number of holes.
///
/// # Examples
///
/// ```
/// use pointfree::function::{Slot, Variadic, partial};
///
/// let join = Variadic::new(0, |args: &[String]| args.join("-"));
/// let framed = partial(
///     join,
///     vec![Slot::Bound("a".to_string()), Slot::Hole, Slot::Bound("z".to_string())],
/// );
///
/// assert_eq!(framed.call(&["m".to_string()]), "a-m-z");
/// ```
pub fn partial<T: Clone + Default>(function: Variadic<T>, template: Vec<Slot<T>>) -> Variadic<T> {
    let holes = template.iter().filter(|slot| slot.is_hole()).count();
    Variadic::new(holes, move |args| {
        let mut supplied = args.iter();
        let mut final_args: Vec<T> = Vec::with_capacity(template.len() + args.len());
        for slot in &template {
            match slot {
                Slot::Bound(value) => final_args.push(value.clone()),
                Slot::Hole => final_args.push(supplied.next().cloned().unwrap_or_default()),
            }
        }
        final_args.extend(supplied.cloned());
        function.call(&final_args)
    })
}

/// The right-to-left mirror of [`partial`].
///
/// The template is walked right to left, and each hole takes the next
/// unused call-time argument counting from the right. Call-time arguments
/// left over after the template is satisfied keep their original order and
/// precede the instantiated template:
///
/// ```
/// use pointfree::function::{Slot, Variadic, partial_right};
///
/// let join = Variadic::new(0, |args: &[String]| args.join(""));
/// let bound = partial_right(
///     join,
///     vec![
///         Slot::Bound("a".to_string()),
///         Slot::Hole,
///         Slot::Hole,
///         Slot::Bound("d".to_string()),
///     ],
/// );
///
/// assert_eq!(
///     bound.call(&["b".to_string(), "c".to_string(), "e".to_string()]),
///     "baced"
/// );
/// ```
pub fn partial_right<T: Clone + Default>(
    function: Variadic<T>,
    template: Vec<Slot<T>>,
) -> Variadic<T> {
    let holes = template.iter().filter(|slot| slot.is_hole()).count();
    Variadic::new(holes, move |args: &[T]| {
        let mut remaining = args.len();
        let mut reversed_tail: Vec<T> = Vec::with_capacity(template.len());
        for slot in template.iter().rev() {
            match slot {
                Slot::Bound(value) => reversed_tail.push(value.clone()),
                Slot::Hole => {
                    if remaining > 0 {
                        remaining -= 1;
                        reversed_tail.push(args[remaining].clone());
                    } else {
                        reversed_tail.push(T::default());
                    }
                }
            }
        }
        reversed_tail.reverse();
        let mut final_args: Vec<T> = args[..remaining].to_vec();
        final_args.append(&mut reversed_tail);
        function.call(&final_args)
    })
}

/// A callable whose calls may themselves contain placeholders.
///
/// Built by [`as_partial`]. Each call merges the new arguments into the
/// accumulated template: existing holes are filled positionally (a new
/// argument that is itself a hole fills in and stays a hole), extras are
/// appended. The result is `Pending` only when the call itself carried a
/// hole; a placeholder-free call applies the target immediately, filling
/// any template holes still open after the merge with `T::default()`,
/// even when fewer values than the declared arity were collected.
#[derive(Clone, Debug)]
pub struct AsPartial<T: 'static> {
    function: Variadic<T>,
    template: Vec<Slot<T>>,
}

impl<T: Clone + Default> AsPartial<T> {
    /// Feeds one call's worth of placeholder-annotated arguments.
    pub fn call(&self, args: &[Slot<T>]) -> Applied<T, Self> {
        let mut supplied = args.iter();
        let mut merged: Vec<Slot<T>> = Vec::with_capacity(self.template.len() + args.len());
        for slot in &self.template {
            if slot.is_hole() {
                merged.push(supplied.next().cloned().unwrap_or(Slot::Hole));
            } else {
                merged.push(slot.clone());
            }
        }
        merged.extend(supplied.cloned());

        // Only a hole in the call itself defers; template holes left open
        // by a placeholder-free call are filled with the default value.
        if args.iter().any(Slot::is_hole) {
            return Applied::Pending(Self {
                function: self.function.clone(),
                template: merged,
            });
        }
        let values: Vec<T> = merged
            .into_iter()
            .map(|slot| slot.into_bound().unwrap_or_default())
            .collect();
        Applied::Done(self.function.call(&values))
    }

    /// The accumulated template.
    #[must_use]
    pub fn template(&self) -> &[Slot<T>] {
        &self.template
    }
}

/// Lifts a callable into placeholder-driven incremental application.
///
/// # Examples
///
/// ```
/// use pointfree::function::{Slot, Variadic, as_partial};
///
/// let sum = Variadic::new(3, |args: &[i32]| args.iter().sum());
/// let staged = as_partial(sum);
///
/// let pending = staged
///     .call(&[Slot::Hole, Slot::Bound(2)])
///     .pending()
///     .unwrap();
/// assert_eq!(pending.call(&[Slot::Bound(1), Slot::Bound(3)]).done(), Some(6));
/// ```
pub fn as_partial<T: Clone>(function: Variadic<T>) -> AsPartial<T> {
    AsPartial {
        function,
        template: Vec::new(),
    }
}

static_assertions::assert_impl_all!(Slot<i32>: Send, Sync, Clone);
static_assertions::assert_not_impl_any!(AsPartial<i32>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    fn list() -> Variadic<String> {
        Variadic::new(0, |args: &[String]| args.join(","))
    }

    fn slots(spec: &str) -> Vec<Slot<String>> {
        spec.split(' ')
            .map(|token| {
                if token == "_" {
                    Slot::Hole
                } else {
                    Slot::Bound(token.to_string())
                }
            })
            .collect()
    }

    fn args(spec: &str) -> Vec<String> {
        spec.split(' ').map(str::to_string).collect()
    }

    #[test]
    fn test_partial_fills_holes_then_appends() {
        let bound = partial(list(), slots("a _ _ d"));
        assert_eq!(bound.call(&args("b c e")), "a,b,c,d,e");
    }

    #[test]
    fn test_partial_right_interleaves_leftovers() {
        let bound = partial_right(list(), slots("a _ _ d"));
        assert_eq!(bound.call(&args("b c e")), "b,a,c,e,d");
    }

    #[test]
    fn test_partial_exhausted_arguments_default() {
        let bound = partial(list(), slots("a _ _"));
        assert_eq!(bound.call(&args("b")), "a,b,");
    }

    #[test]
    fn test_partial_arity_counts_holes() {
        let bound = partial(list(), slots("a _ _ d"));
        assert_eq!(bound.arity(), 2);
    }

    #[test]
    fn test_as_partial_applies_early_without_holes() {
        let sum = Variadic::new(4, |args: &[i32]| args.iter().sum());
        let staged = as_partial(sum);
        // No placeholder supplied: applied immediately, short of the arity.
        assert_eq!(staged.call(&[Slot::Bound(1), Slot::Bound(2)]).done(), Some(3));
    }

    #[test]
    fn test_as_partial_holes_survive_merging() {
        let sum = Variadic::new(3, |args: &[i32]| args.iter().sum());
        let staged = as_partial(sum);
        let pending = staged
            .call(&[Slot::Bound(1), Slot::Hole, Slot::Bound(3)])
            .pending()
            .unwrap();
        assert_eq!(pending.template(), &[Slot::Bound(1), Slot::Hole, Slot::Bound(3)]);
        assert_eq!(pending.call(&[Slot::Bound(2)]).done(), Some(6));
    }
}
