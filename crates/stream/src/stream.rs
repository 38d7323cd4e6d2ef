//! A lazy sequence whose stages may fail

use crate::stages::{Filter, Map, Peek, Source};
use failable_core::{BoxError, Result, TRACE_TARGET};
use failable_function::failable::rethrow;
use failable_function::{
    FailableBinaryOperator, FailableConsumer, FailableFunction, FailablePredicate,
    FailableSupplier,
};
use tracing::trace;

/// A lazy pipeline over elements of type `T` whose stages may fail.
///
/// Intermediate operations (`map`, `filter`, `peek`) only record a stage.
/// Terminal operations pull elements through every stage one at a time,
/// stop at the first failure and translate it with
/// [`rethrow`](failable_function::failable::rethrow). Terminal operations
/// consume the stream; a stream whose source and stages are `Clone` can be
/// cloned first, and each clone evaluates again from the original source.
#[derive(Debug, Clone)]
#[must_use = "streams are lazy and do nothing unless consumed"]
pub struct FailableStream<I> {
    inner: I,
}

/// Build a failable stream over any iterable source.
///
/// Collections, slices, arrays, map entries, existing iterators and
/// `Option` (zero or one element) are all accepted.
pub fn failable_stream<C>(source: C) -> FailableStream<Source<C::IntoIter>>
where
    C: IntoIterator,
{
    FailableStream::new(Source::new(source.into_iter()))
}

impl<T> FailableStream<Source<std::option::IntoIter<T>>> {
    /// A stream holding exactly one element
    pub fn of(value: T) -> Self {
        failable_stream(Some(value))
    }

    /// A stream holding no elements
    pub fn empty() -> Self {
        failable_stream(None)
    }
}

impl<I> FailableStream<I> {
    /// Wrap an iterator of already boxed results
    pub fn new(inner: I) -> Self {
        Self { inner }
    }

    /// The underlying pipeline, with failures still boxed
    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<T, I> FailableStream<I>
where
    I: Iterator<Item = std::result::Result<T, BoxError>>,
{
    /// Record a mapping stage
    pub fn map<R, E, F>(self, mapper: F) -> FailableStream<Map<I, F, R, E>>
    where
        F: FailableFunction<T, R, E>,
        E: Into<BoxError>,
    {
        FailableStream::new(Map::new(self.inner, mapper))
    }

    /// Record a filtering stage
    pub fn filter<E, P>(self, predicate: P) -> FailableStream<Filter<I, P, E>>
    where
        P: FailablePredicate<T, E>,
        E: Into<BoxError>,
    {
        FailableStream::new(Filter::new(self.inner, predicate))
    }

    /// Record a stage that observes each element without changing it
    pub fn peek<E, C>(self, action: C) -> FailableStream<Peek<I, C, E>>
    where
        C: for<'a> FailableConsumer<&'a T, E>,
        E: Into<BoxError>,
    {
        FailableStream::new(Peek::new(self.inner, action))
    }

    /// Fold every element into `identity` with `accumulator`
    pub fn reduce<E, A>(self, identity: T, accumulator: A) -> Result<T>
    where
        A: FailableBinaryOperator<T, E>,
        E: Into<BoxError>,
    {
        trace!(target: TRACE_TARGET, operation = "reduce", "Evaluating failable stream");
        let mut result = identity;
        for item in self.inner {
            let value = item.map_err(rethrow)?;
            result = accumulator.apply(result, value).map_err(rethrow)?;
        }
        Ok(result)
    }

    /// Collect every element into a collection
    pub fn collect<C>(self) -> Result<C>
    where
        C: FromIterator<T>,
    {
        trace!(target: TRACE_TARGET, operation = "collect", "Evaluating failable stream");
        self.inner
            .collect::<std::result::Result<C, BoxError>>()
            .map_err(rethrow)
    }

    /// Collect into a container from `supplier`, adding elements with `accumulator`
    pub fn collect_with<C, E, S, A>(self, supplier: S, accumulator: A) -> Result<C>
    where
        S: FailableSupplier<C, E>,
        A: Fn(&mut C, T) -> std::result::Result<(), E>,
        E: Into<BoxError>,
    {
        trace!(target: TRACE_TARGET, operation = "collect_with", "Evaluating failable stream");
        let mut container = supplier.get().map_err(rethrow)?;
        for item in self.inner {
            let value = item.map_err(rethrow)?;
            accumulator(&mut container, value).map_err(rethrow)?;
        }
        Ok(container)
    }

    /// Whether any element matches; stops at the first match
    pub fn any_match<E, P>(self, predicate: P) -> Result<bool>
    where
        P: FailablePredicate<T, E>,
        E: Into<BoxError>,
    {
        trace!(target: TRACE_TARGET, operation = "any_match", "Evaluating failable stream");
        for item in self.inner {
            let value = item.map_err(rethrow)?;
            if predicate.test(&value).map_err(rethrow)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Whether every element matches; stops at the first non-match
    pub fn all_match<E, P>(self, predicate: P) -> Result<bool>
    where
        P: FailablePredicate<T, E>,
        E: Into<BoxError>,
    {
        trace!(target: TRACE_TARGET, operation = "all_match", "Evaluating failable stream");
        for item in self.inner {
            let value = item.map_err(rethrow)?;
            if !predicate.test(&value).map_err(rethrow)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Feed every element to `action`
    pub fn for_each<E, C>(self, action: C) -> Result<()>
    where
        C: FailableConsumer<T, E>,
        E: Into<BoxError>,
    {
        trace!(target: TRACE_TARGET, operation = "for_each", "Evaluating failable stream");
        for item in self.inner {
            action.accept(item.map_err(rethrow)?).map_err(rethrow)?;
        }
        Ok(())
    }

    /// Materialize every element
    pub fn to_vec(self) -> Result<Vec<T>> {
        self.collect()
    }

    /// Count the elements that survive every stage
    pub fn count(self) -> Result<usize> {
        trace!(target: TRACE_TARGET, operation = "count", "Evaluating failable stream");
        let mut count = 0;
        for item in self.inner {
            item.map_err(rethrow)?;
            count += 1;
        }
        Ok(count)
    }

    /// The pipeline as an iterator of ambient results, translated per element
    pub fn into_results(self) -> impl Iterator<Item = Result<T>> {
        self.inner.map(|item| item.map_err(rethrow))
    }
}
