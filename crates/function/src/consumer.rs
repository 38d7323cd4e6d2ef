//! Failable consumers

use failable_core::{Error, Result as AmbientResult};
use std::marker::PhantomData;

/// Accepts a value for its side effect, possibly failing with `E`
pub trait FailableConsumer<T, E> {
    /// Consume the value
    fn accept(&self, value: T) -> Result<(), E>;

    /// Run this consumer and then `after` on a copy of the same value.
    ///
    /// `after` is not invoked when this consumer fails.
    fn and_then<C>(self, after: C) -> ConsumerAndThen<Self, C>
    where
        Self: Sized,
        C: FailableConsumer<T, E>,
        T: Clone,
    {
        ConsumerAndThen(self, after)
    }

    /// Like [`and_then`](Self::and_then), rejecting an absent `after`
    fn try_and_then<C>(self, after: Option<C>) -> AmbientResult<ConsumerAndThen<Self, C>>
    where
        Self: Sized,
        C: FailableConsumer<T, E>,
        T: Clone,
    {
        let after = after.ok_or_else(|| Error::missing_argument("after"))?;
        Ok(self.and_then(after))
    }
}

impl<T, E, F> FailableConsumer<T, E> for F
where
    F: Fn(T) -> Result<(), E>,
{
    fn accept(&self, value: T) -> Result<(), E> {
        self(value)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ConsumerAndThen<A, B>(A, B);

impl<T: Clone, E, A, B> FailableConsumer<T, E> for ConsumerAndThen<A, B>
where
    A: FailableConsumer<T, E>,
    B: FailableConsumer<T, E>,
{
    fn accept(&self, value: T) -> Result<(), E> {
        self.0.accept(value.clone())?;
        self.1.accept(value)
    }
}

/// Consumer that ignores its input
pub struct NopConsumer<T, E>(PhantomData<fn(T) -> Result<(), E>>);

impl<T, E> Clone for NopConsumer<T, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, E> Copy for NopConsumer<T, E> {}

impl<T, E> FailableConsumer<T, E> for NopConsumer<T, E> {
    fn accept(&self, _value: T) -> Result<(), E> {
        Ok(())
    }
}

/// Returns a consumer that does nothing and never fails
pub fn nop<T, E>() -> NopConsumer<T, E> {
    NopConsumer(PhantomData)
}
