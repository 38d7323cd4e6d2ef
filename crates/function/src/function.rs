//! Unary functions and operators that declare their failure type

use crate::composition::{AndThen, Compose};
use failable_core::{Error, Result as AmbientResult};
use std::marker::PhantomData;

/// A function from `T` to `R` that may fail with the declared failure `E`.
///
/// Any `Fn(T) -> Result<R, E>` closure is a `FailableFunction`. Composition
/// keeps `E` intact: a composed function fails with exactly the failure its
/// failing constituent returned, and stops at that constituent.
pub trait FailableFunction<T, R, E> {
    /// Apply this function to the given input
    fn apply(&self, input: T) -> Result<R, E>;

    /// Compose so that `after` runs on the output of this function
    fn and_then<V, G>(self, after: G) -> AndThen<Self, G, R>
    where
        Self: Sized,
        G: FailableFunction<R, V, E>,
    {
        AndThen::new(self, after)
    }

    /// Like [`and_then`](Self::and_then), rejecting an absent `after`
    fn try_and_then<V, G>(self, after: Option<G>) -> AmbientResult<AndThen<Self, G, R>>
    where
        Self: Sized,
        G: FailableFunction<R, V, E>,
    {
        let after = after.ok_or_else(|| Error::missing_argument("after"))?;
        Ok(self.and_then(after))
    }

    /// Compose so that `before` runs first and feeds this function
    fn compose<V, G>(self, before: G) -> Compose<Self, G, T>
    where
        Self: Sized,
        G: FailableFunction<V, T, E>,
    {
        Compose::new(self, before)
    }

    /// Like [`compose`](Self::compose), rejecting an absent `before`
    fn try_compose<V, G>(self, before: Option<G>) -> AmbientResult<Compose<Self, G, T>>
    where
        Self: Sized,
        G: FailableFunction<V, T, E>,
    {
        let before = before.ok_or_else(|| Error::missing_argument("before"))?;
        Ok(self.compose(before))
    }
}

impl<T, R, E, F> FailableFunction<T, R, E> for F
where
    F: Fn(T) -> Result<R, E>,
{
    fn apply(&self, input: T) -> Result<R, E> {
        self(input)
    }
}

/// A failable function whose input and output types are the same
pub trait FailableUnaryOperator<T, E>: FailableFunction<T, T, E> {}

impl<T, E, F> FailableUnaryOperator<T, E> for F where F: FailableFunction<T, T, E> {}

/// Operator returning its input unchanged
pub struct Identity<T, E>(PhantomData<fn(T) -> Result<T, E>>);

/// Operator ignoring its input and returning the zero value of `T`
pub struct Nop<T, E>(PhantomData<fn(T) -> Result<T, E>>);

/// Returns an operator that always returns its input and never fails
pub fn identity<T, E>() -> Identity<T, E> {
    Identity(PhantomData)
}

/// Returns an operator that returns `T::default()` and never fails
pub fn nop<T: Default, E>() -> Nop<T, E> {
    Nop(PhantomData)
}

impl<T, E> FailableFunction<T, T, E> for Identity<T, E> {
    fn apply(&self, input: T) -> Result<T, E> {
        Ok(input)
    }
}

impl<T: Default, E> FailableFunction<T, T, E> for Nop<T, E> {
    fn apply(&self, _input: T) -> Result<T, E> {
        Ok(T::default())
    }
}

// Manual impls: a derive would demand `T: Clone` and `E: Clone`.
impl<T, E> Clone for Identity<T, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, E> Copy for Identity<T, E> {}

impl<T, E> Clone for Nop<T, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, E> Copy for Nop<T, E> {}

impl<T, E> std::fmt::Debug for Identity<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Identity")
    }
}

impl<T, E> std::fmt::Debug for Nop<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Nop")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Debug, PartialEq)]
    struct MathError(&'static str);

    type Op = fn(f64) -> Result<f64, MathError>;

    fn square(t: f64) -> Result<f64, MathError> {
        Ok(t * t)
    }

    fn halve(t: f64) -> Result<f64, MathError> {
        Ok(t / 2.0)
    }

    fn reject(_: f64) -> Result<f64, MathError> {
        Err(MathError("rejected"))
    }

    #[test]
    fn test_identity() {
        let op = identity::<f64, MathError>();
        assert_eq!(op.apply(2.5), Ok(2.5));
        assert_eq!(op.apply(0.0), Ok(0.0));
        assert_eq!(op.apply(-7.25), Ok(-7.25));
    }

    #[test]
    fn test_nop_returns_zero() {
        let int_op = nop::<i32, MathError>();
        assert_eq!(int_op.apply(123), Ok(0));
        assert_eq!(int_op.apply(-999), Ok(0));

        let double_op = nop::<f64, MathError>();
        assert_eq!(double_op.apply(42.42), Ok(0.0));
    }

    #[test]
    fn test_and_then() {
        let composed = (square as Op).and_then(halve as Op);
        assert_eq!(composed.apply(4.0), Ok(8.0)); // (4^2) / 2
    }

    #[test]
    fn test_compose() {
        let composed = (square as Op).compose(halve as Op);
        assert_eq!(composed.apply(4.0), Ok(4.0)); // (4 / 2)^2
    }

    #[test]
    fn test_int_operators() {
        let add_one = |t: i32| Ok::<_, MathError>(t + 1);
        let times_two = |t: i32| Ok::<_, MathError>(t * 2);

        assert_eq!(add_one.and_then(times_two).apply(4), Ok(10)); // (4 + 1) * 2
        assert_eq!(add_one.compose(times_two).apply(4), Ok(9)); // (4 * 2) + 1
    }

    #[test]
    fn test_absent_argument_is_rejected() {
        let and_then = (square as Op).try_and_then(None::<Op>);
        assert!(matches!(
            and_then,
            Err(Error::InvalidArgument {
                parameter: "after",
                ..
            })
        ));

        let compose = (square as Op).try_compose(None::<Op>);
        assert!(matches!(
            compose,
            Err(Error::InvalidArgument {
                parameter: "before",
                ..
            })
        ));
    }

    #[test]
    fn test_present_argument_composes() {
        let composed = (square as Op).try_and_then(Some(halve as Op)).unwrap();
        assert_eq!(composed.apply(4.0), Ok(8.0));
    }

    #[test]
    fn test_failure_stops_composition() {
        let calls = Cell::new(0);
        let counted = |t: f64| {
            calls.set(calls.get() + 1);
            Ok::<_, MathError>(t)
        };

        let composed = (reject as Op).and_then(&counted);
        assert_eq!(composed.apply(1.0), Err(MathError("rejected")));
        assert_eq!(calls.get(), 0);

        let composed = (reject as Op).compose(&counted);
        assert_eq!(composed.apply(1.0), Err(MathError("rejected")));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_identity_is_neutral() {
        let left = identity::<f64, MathError>().and_then(square as Op);
        let right = (square as Op).and_then(identity::<f64, MathError>());
        for x in [-3.0, 0.0, 1.5, 10.0] {
            assert_eq!(left.apply(x), square(x));
            assert_eq!(right.apply(x), square(x));
        }

        let left = identity::<f64, MathError>().and_then(reject as Op);
        assert_eq!(left.apply(1.0), Err(MathError("rejected")));
    }
}
