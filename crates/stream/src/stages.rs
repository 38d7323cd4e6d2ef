//! Lazy pipeline stages
//!
//! Each stage is an iterator over `Result<T, BoxError>`. A failed element
//! passes through later stages untouched; stage failures are boxed here and
//! only translated by the terminal operation that observes them.

use failable_core::BoxError;
use failable_function::{FailableConsumer, FailableFunction, FailablePredicate};
use std::fmt;
use std::marker::PhantomData;

/// Feeds the elements of a plain iterator into a pipeline
#[derive(Debug, Clone)]
pub struct Source<I> {
    iter: I,
}

impl<I> Source<I> {
    pub(crate) fn new(iter: I) -> Self {
        Self { iter }
    }
}

impl<I: Iterator> Iterator for Source<I> {
    type Item = Result<I::Item, BoxError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(Ok)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

/// Applies a failable function to every element
pub struct Map<I, F, R, E> {
    inner: I,
    mapper: F,
    _marker: PhantomData<fn() -> (R, E)>,
}

impl<I, F, R, E> Map<I, F, R, E> {
    pub(crate) fn new(inner: I, mapper: F) -> Self {
        Self {
            inner,
            mapper,
            _marker: PhantomData,
        }
    }
}

impl<T, R, E, I, F> Iterator for Map<I, F, R, E>
where
    I: Iterator<Item = Result<T, BoxError>>,
    F: FailableFunction<T, R, E>,
    E: Into<BoxError>,
{
    type Item = Result<R, BoxError>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.next()?;
        Some(item.and_then(|value| self.mapper.apply(value).map_err(Into::into)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Keeps elements matching a failable predicate
pub struct Filter<I, P, E> {
    inner: I,
    predicate: P,
    _marker: PhantomData<fn() -> E>,
}

impl<I, P, E> Filter<I, P, E> {
    pub(crate) fn new(inner: I, predicate: P) -> Self {
        Self {
            inner,
            predicate,
            _marker: PhantomData,
        }
    }
}

impl<T, E, I, P> Iterator for Filter<I, P, E>
where
    I: Iterator<Item = Result<T, BoxError>>,
    P: FailablePredicate<T, E>,
    E: Into<BoxError>,
{
    type Item = Result<T, BoxError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.inner.next()? {
                Ok(value) => match self.predicate.test(&value) {
                    Ok(true) => return Some(Ok(value)),
                    Ok(false) => continue,
                    Err(e) => return Some(Err(e.into())),
                },
                Err(e) => return Some(Err(e)),
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

/// Runs a failable action on every element as it passes
pub struct Peek<I, C, E> {
    inner: I,
    action: C,
    _marker: PhantomData<fn() -> E>,
}

impl<I, C, E> Peek<I, C, E> {
    pub(crate) fn new(inner: I, action: C) -> Self {
        Self {
            inner,
            action,
            _marker: PhantomData,
        }
    }
}

impl<T, E, I, C> Iterator for Peek<I, C, E>
where
    I: Iterator<Item = Result<T, BoxError>>,
    C: for<'a> FailableConsumer<&'a T, E>,
    E: Into<BoxError>,
{
    type Item = Result<T, BoxError>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.next()?;
        Some(item.and_then(|value| {
            self.action.accept(&value).map_err(Into::into)?;
            Ok(value)
        }))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

// Cloning a stage clones the pending pipeline, so the clone re-evaluates
// from the source. Manual impls keep `R` and `E` free of `Clone` bounds.
impl<I: Clone, F: Clone, R, E> Clone for Map<I, F, R, E> {
    fn clone(&self) -> Self {
        Self::new(self.inner.clone(), self.mapper.clone())
    }
}

impl<I: Clone, P: Clone, E> Clone for Filter<I, P, E> {
    fn clone(&self) -> Self {
        Self::new(self.inner.clone(), self.predicate.clone())
    }
}

impl<I: Clone, C: Clone, E> Clone for Peek<I, C, E> {
    fn clone(&self) -> Self {
        Self::new(self.inner.clone(), self.action.clone())
    }
}

impl<I: fmt::Debug, F, R, E> fmt::Debug for Map<I, F, R, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map").field("inner", &self.inner).finish_non_exhaustive()
    }
}

impl<I: fmt::Debug, P, E> fmt::Debug for Filter<I, P, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter").field("inner", &self.inner).finish_non_exhaustive()
    }
}

impl<I: fmt::Debug, C, E> fmt::Debug for Peek<I, C, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Peek").field("inner", &self.inner).finish_non_exhaustive()
    }
}
