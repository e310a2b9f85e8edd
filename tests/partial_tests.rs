//! Integration tests for placeholder partial application.

#![cfg(feature = "function")]

use pointfree::function::{Slot, Variadic, as_partial, partial, partial_right};

fn list() -> Variadic<String> {
    Variadic::new(0, |args: &[String]| args.join(","))
}

fn template(spec: &str) -> Vec<Slot<String>> {
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

fn arguments(spec: &str) -> Vec<String> {
    spec.split(' ').map(str::to_string).collect()
}

// =============================================================================
// partial
// =============================================================================

mod left {
    use super::*;

    #[test]
    fn test_placeholder_substitution() {
        let bound = partial(list(), template("a _ _ d"));
        assert_eq!(bound.call(&arguments("b c e")), "a,b,c,d,e");
    }

    #[test]
    fn test_leftover_arguments_are_appended() {
        let bound = partial(list(), template("a _"));
        assert_eq!(bound.call(&arguments("b c d")), "a,b,c,d");
    }

    #[test]
    fn test_unfilled_holes_default() {
        let bound = partial(list(), template("a _ _"));
        assert_eq!(bound.call(&arguments("b")), "a,b,");
    }

    #[test]
    fn test_empty_template_forwards_arguments() {
        let bound = partial(list(), Vec::new());
        assert_eq!(bound.call(&arguments("x y")), "x,y");
    }

    #[test]
    fn test_returned_arity_is_the_hole_count() {
        assert_eq!(partial(list(), template("a _ _ d")).arity(), 2);
        assert_eq!(partial(list(), template("a d")).arity(), 0);
    }

    #[test]
    fn test_bound_function_is_reusable() {
        let bound = partial(list(), template("a _"));
        assert_eq!(bound.call(&arguments("b")), "a,b");
        assert_eq!(bound.call(&arguments("z")), "a,z");
    }
}

// =============================================================================
// partial_right
// =============================================================================

mod right {
    use super::*;

    #[test]
    fn test_right_substitution_and_leftover_interleaving() {
        // Holes take call-time arguments from the right; the leftover "b"
        // keeps its position ahead of the instantiated template.
        let bound = partial_right(list(), template("a _ _ d"));
        assert_eq!(bound.call(&arguments("b c e")), "b,a,c,e,d");
    }

    #[test]
    fn test_exact_argument_count() {
        let bound = partial_right(list(), template("a _ _ d"));
        assert_eq!(bound.call(&arguments("b c")), "a,b,c,d");
    }

    #[test]
    fn test_unfilled_holes_default_on_the_left() {
        let bound = partial_right(list(), template("a _ _ d"));
        assert_eq!(bound.call(&arguments("e")), "a,,e,d");
    }
}

// =============================================================================
// as_partial
// =============================================================================

mod staged {
    use super::*;

    fn sum4() -> Variadic<i32> {
        Variadic::new(4, |args: &[i32]| args.iter().sum())
    }

    #[test]
    fn test_placeholder_defers_application() {
        let staged = as_partial(sum4());
        let outcome = staged.call(&[Slot::Bound(1), Slot::Hole, Slot::Bound(3)]);
        assert!(!outcome.is_done());
    }

    #[test]
    fn test_holes_fill_positionally_across_calls() {
        let staged = as_partial(sum4());
        let pending = staged
            .call(&[Slot::Hole, Slot::Bound(2), Slot::Hole, Slot::Bound(4)])
            .pending()
            .unwrap();
        assert_eq!(
            pending.call(&[Slot::Bound(1), Slot::Bound(3)]).done(),
            Some(10)
        );
    }

    #[test]
    fn test_new_holes_can_replace_old_holes() {
        let staged = as_partial(sum4());
        let pending = staged
            .call(&[Slot::Hole, Slot::Bound(2)])
            .pending()
            .unwrap();
        // The new call's hole lands in the old hole's slot and stays open.
        let still_pending = pending.call(&[Slot::Hole, Slot::Bound(3)]).pending().unwrap();
        assert_eq!(
            still_pending.call(&[Slot::Bound(1), Slot::Bound(4)]).done(),
            Some(10)
        );
    }

    #[test]
    fn test_placeholder_free_call_defaults_open_holes() {
        let sum3 = Variadic::new(3, |args: &[i32]| args.iter().sum());
        let staged = as_partial(sum3);
        let pending = staged
            .call(&[Slot::Bound(1), Slot::Hole, Slot::Bound(3)])
            .pending()
            .unwrap();
        // This call carries no placeholder, so the target is applied now,
        // with the still-open slot filled by the default value.
        assert_eq!(pending.call(&[]).done(), Some(4));
    }

    #[test]
    fn test_early_application_without_placeholders() {
        let staged = as_partial(sum4());
        // Fewer values than the declared arity, but no holes: apply now.
        assert_eq!(staged.call(&[Slot::Bound(1), Slot::Bound(2)]).done(), Some(3));
    }

    #[test]
    fn test_pending_stage_is_reusable() {
        let staged = as_partial(sum4());
        let pending = staged
            .call(&[Slot::Hole, Slot::Bound(10)])
            .pending()
            .unwrap();

        assert_eq!(pending.call(&[Slot::Bound(1)]).done(), Some(11));
        assert_eq!(pending.call(&[Slot::Bound(2)]).done(), Some(12));
    }
}

#[test]
fn test_slot_from_value() {
    let slot: Slot<i32> = 5.into();
    assert_eq!(slot, Slot::Bound(5));
    assert!(!slot.is_hole());
    assert!(Slot::<i32>::Hole.is_hole());
}
