//! Algebraic laws of operator composition

mod common;

use common::Fault;
use failable::FailableFunction;
use failable::{identity, Error};
use proptest::prelude::*;

type Op = fn(i64) -> Result<i64, Fault>;

fn increment(n: i64) -> Result<i64, Fault> {
    n.checked_add(1).ok_or_else(|| Fault::new("increment overflow"))
}

fn double(n: i64) -> Result<i64, Fault> {
    n.checked_mul(2).ok_or_else(|| Fault::new("double overflow"))
}

fn negate(n: i64) -> Result<i64, Fault> {
    Ok(-n)
}

fn reject_odd(n: i64) -> Result<i64, Fault> {
    if n % 2 == 0 {
        Ok(n)
    } else {
        Err(Fault(format!("odd: {n}")))
    }
}

fn reject_large(n: i64) -> Result<i64, Fault> {
    if n.abs() > 5_000 {
        Err(Fault(format!("too large: {n}")))
    } else {
        Ok(n)
    }
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop::sample::select(vec![
        increment as Op,
        double as Op,
        negate as Op,
        reject_odd as Op,
        reject_large as Op,
    ])
}

proptest! {
    #[test]
    fn prop_and_then_is_associative(a in arb_op(), b in arb_op(), c in arb_op(), x in -10_000i64..10_000) {
        let left = a.and_then(b).and_then(c);
        let right = a.and_then(b.and_then(c));
        prop_assert_eq!(left.apply(x), right.apply(x));
    }

    #[test]
    fn prop_identity_is_neutral(f in arb_op(), x in -10_000i64..10_000) {
        prop_assert_eq!(identity::<i64, Fault>().and_then(f).apply(x), f(x));
        prop_assert_eq!(f.and_then(identity::<i64, Fault>()).apply(x), f(x));
        prop_assert_eq!(f.compose(identity::<i64, Fault>()).apply(x), f(x));
    }

    #[test]
    fn prop_and_then_applies_left_first(a in arb_op(), b in arb_op(), x in -10_000i64..10_000) {
        prop_assert_eq!(a.and_then(b).apply(x), a(x).and_then(b));
        prop_assert_eq!(a.compose(b).apply(x), b(x).and_then(a));
    }

    #[test]
    fn prop_chain_matches_nested_and_then(a in arb_op(), b in arb_op(), c in arb_op(), x in -10_000i64..10_000) {
        let chained = failable::chain!(a, b, c);
        prop_assert_eq!(chained.apply(x), a.and_then(b).and_then(c).apply(x));
    }

    #[test]
    fn prop_absent_constituent_is_an_argument_error(a in arb_op()) {
        let error = a.try_and_then(None::<Op>).unwrap_err();
        prop_assert!(
            matches!(error, Error::InvalidArgument { parameter: "after", .. }),
            "unexpected error: {:?}",
            error
        );
        prop_assert!(!error.is_translated());

        let error = a.try_compose(None::<Op>).unwrap_err();
        prop_assert!(
            matches!(error, Error::InvalidArgument { parameter: "before", .. }),
            "unexpected error: {:?}",
            error
        );
    }
}

#[test]
fn square_and_halve_order() {
    let square = |t: f64| Ok::<_, Fault>(t * t);
    let halve = |t: f64| Ok::<_, Fault>(t / 2.0);

    assert_eq!(square.and_then(halve).apply(4.0), Ok(8.0));
    assert_eq!(square.compose(halve).apply(4.0), Ok(4.0));
}

#[test]
fn failing_constituent_stops_composition() {
    let reached = std::cell::Cell::new(false);
    let after = |n: i64| {
        reached.set(true);
        Ok::<_, Fault>(n)
    };

    let result = (reject_odd as Op).and_then(&after).apply(3);
    assert_eq!(result, Err(Fault::new("odd: 3")));
    assert!(!reached.get());
}
