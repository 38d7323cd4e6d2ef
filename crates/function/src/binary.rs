//! Two-argument failable functions and binary operators

use crate::composition::BiAndThen;
use crate::function::FailableFunction;
use failable_core::{Error, Result as AmbientResult};
use std::cmp::Ordering;

/// A function of two arguments that may fail with the declared failure `E`
pub trait FailableBiFunction<T, U, R, E> {
    /// Apply this function to the given arguments
    fn apply(&self, t: T, u: U) -> Result<R, E>;

    /// Compose so that `after` runs on the output of this function
    fn and_then<V, G>(self, after: G) -> BiAndThen<Self, G, R>
    where
        Self: Sized,
        G: FailableFunction<R, V, E>,
    {
        BiAndThen::new(self, after)
    }

    /// Like [`and_then`](Self::and_then), rejecting an absent `after`
    fn try_and_then<V, G>(self, after: Option<G>) -> AmbientResult<BiAndThen<Self, G, R>>
    where
        Self: Sized,
        G: FailableFunction<R, V, E>,
    {
        let after = after.ok_or_else(|| Error::missing_argument("after"))?;
        Ok(self.and_then(after))
    }
}

impl<T, U, R, E, F> FailableBiFunction<T, U, R, E> for F
where
    F: Fn(T, U) -> Result<R, E>,
{
    fn apply(&self, t: T, u: U) -> Result<R, E> {
        self(t, u)
    }
}

/// A failable bi-function whose arguments and result share one type
pub trait FailableBinaryOperator<T, E>: FailableBiFunction<T, T, T, E> {}

impl<T, E, F> FailableBinaryOperator<T, E> for F where F: FailableBiFunction<T, T, T, E> {}

/// Returns an operator yielding the lesser of two values by `comparator`.
///
/// Ties resolve to the first argument.
pub fn min_by<T, E, C>(comparator: C) -> impl Fn(T, T) -> Result<T, E> + Clone
where
    C: Fn(&T, &T) -> Ordering + Clone,
{
    move |a, b| match comparator(&a, &b) {
        Ordering::Less | Ordering::Equal => Ok(a),
        Ordering::Greater => Ok(b),
    }
}

/// Returns an operator yielding the greater of two values by `comparator`.
///
/// Ties resolve to the first argument.
pub fn max_by<T, E, C>(comparator: C) -> impl Fn(T, T) -> Result<T, E> + Clone
where
    C: Fn(&T, &T) -> Ordering + Clone,
{
    move |a, b| match comparator(&a, &b) {
        Ordering::Greater | Ordering::Equal => Ok(a),
        Ordering::Less => Ok(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    #[test]
    fn test_min_by_and_max_by() {
        let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
        let shortest = min_by::<&str, Infallible, _>(by_len);
        let longest = max_by::<&str, Infallible, _>(by_len);

        assert_eq!(shortest.apply("abc", "de"), Ok("de"));
        assert_eq!(longest.apply("abc", "de"), Ok("abc"));
    }

    #[test]
    fn test_ties_keep_first_argument() {
        let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
        let shortest = min_by::<&str, Infallible, _>(by_len);
        let longest = max_by::<&str, Infallible, _>(by_len);

        assert_eq!(shortest.apply("ab", "cd"), Ok("ab"));
        assert_eq!(longest.apply("ab", "cd"), Ok("ab"));
    }

    #[test]
    fn test_try_and_then_rejects_absent() {
        let concat = |a: String, b: String| Ok::<_, Infallible>(a + &b);
        let result = concat.try_and_then(None::<fn(String) -> Result<usize, Infallible>>);
        assert!(matches!(result, Err(Error::InvalidArgument { .. })));
    }

    #[test]
    fn test_and_then_runs_after_on_result() {
        let concat = |a: String, b: String| Ok::<_, Infallible>(a + &b);
        let length = |s: String| Ok::<_, Infallible>(s.len());
        let composed = concat.and_then(length);
        assert_eq!(composed.apply("ab".to_string(), "cde".to_string()), Ok(5));
    }
}
