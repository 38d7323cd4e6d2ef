//! Failable predicates and their boolean algebra

use std::marker::PhantomData;

/// A predicate over `&T` that may fail with the declared failure `E`
pub trait FailablePredicate<T: ?Sized, E> {
    /// Evaluate the predicate
    fn test(&self, value: &T) -> Result<bool, E>;

    /// Short-circuiting logical AND: `other` is not evaluated when this is false
    fn and<P>(self, other: P) -> And<Self, P>
    where
        Self: Sized,
        P: FailablePredicate<T, E>,
    {
        And(self, other)
    }

    /// Short-circuiting logical OR: `other` is not evaluated when this is true
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        Self: Sized,
        P: FailablePredicate<T, E>,
    {
        Or(self, other)
    }

    /// Logical negation
    fn negate(self) -> Negate<Self>
    where
        Self: Sized,
    {
        Negate(self)
    }
}

impl<T: ?Sized, E, F> FailablePredicate<T, E> for F
where
    F: Fn(&T) -> Result<bool, E>,
{
    fn test(&self, value: &T) -> Result<bool, E> {
        self(value)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct And<A, B>(A, B);

#[derive(Debug, Clone, Copy)]
pub struct Or<A, B>(A, B);

#[derive(Debug, Clone, Copy)]
pub struct Negate<A>(A);

impl<T: ?Sized, E, A, B> FailablePredicate<T, E> for And<A, B>
where
    A: FailablePredicate<T, E>,
    B: FailablePredicate<T, E>,
{
    fn test(&self, value: &T) -> Result<bool, E> {
        Ok(self.0.test(value)? && self.1.test(value)?)
    }
}

impl<T: ?Sized, E, A, B> FailablePredicate<T, E> for Or<A, B>
where
    A: FailablePredicate<T, E>,
    B: FailablePredicate<T, E>,
{
    fn test(&self, value: &T) -> Result<bool, E> {
        Ok(self.0.test(value)? || self.1.test(value)?)
    }
}

impl<T: ?Sized, E, A> FailablePredicate<T, E> for Negate<A>
where
    A: FailablePredicate<T, E>,
{
    fn test(&self, value: &T) -> Result<bool, E> {
        Ok(!self.0.test(value)?)
    }
}

/// Predicate with a fixed outcome
pub struct Constant<T: ?Sized, E> {
    outcome: bool,
    _marker: PhantomData<fn(&T) -> Result<bool, E>>,
}

impl<T: ?Sized, E> Clone for Constant<T, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized, E> Copy for Constant<T, E> {}

impl<T: ?Sized, E> FailablePredicate<T, E> for Constant<T, E> {
    fn test(&self, _value: &T) -> Result<bool, E> {
        Ok(self.outcome)
    }
}

/// Returns a predicate that always holds
pub fn truthy<T: ?Sized, E>() -> Constant<T, E> {
    Constant {
        outcome: true,
        _marker: PhantomData,
    }
}

/// Returns a predicate that never holds
pub fn falsy<T: ?Sized, E>() -> Constant<T, E> {
    Constant {
        outcome: false,
        _marker: PhantomData,
    }
}
