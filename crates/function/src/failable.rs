//! Translation of declared failures into ambient failures
//!
//! Every function here invokes a failable unit of work synchronously and
//! returns its value, or translates its declared failure into exactly one
//! [`Error`] whose cause is that failure.

use crate::consumer::FailableConsumer;
use crate::function::FailableFunction;
use crate::predicate::FailablePredicate;
use crate::supplier::{FailableRunnable, FailableSupplier};
use failable_core::{BoxError, Error, Failure, Result, Settings, TRACE_TARGET};
use tracing::{debug, trace, warn};

/// Translate a declared failure into its ambient form
pub fn rethrow<E>(failure: E) -> Error
where
    E: Into<BoxError>,
{
    traced(Error::undeclared(failure))
}

/// Translate a failure set, keeping its suppressed failures
pub fn rethrow_failure<E>(failure: Failure<E>) -> Error
where
    E: Into<BoxError>,
{
    traced(Error::from_failure(failure))
}

fn traced(error: Error) -> Error {
    if Settings::global().trace_translations {
        debug!(
            target: TRACE_TARGET,
            io = matches!(error, Error::UncheckedIo { .. }),
            suppressed = error.suppressed().len(),
            "Translated declared failure: {error}"
        );
    }
    error
}

/// Run a unit of work, translating its failure
pub fn run<E, R>(runnable: R) -> Result<()>
where
    R: FailableRunnable<E>,
    E: Into<BoxError>,
{
    runnable.run().map_err(rethrow)
}

/// Obtain a value from a supplier, translating its failure
pub fn get<T, E, S>(supplier: S) -> Result<T>
where
    S: FailableSupplier<T, E>,
    E: Into<BoxError>,
{
    supplier.get().map_err(rethrow)
}

macro_rules! get_as {
    ($($(#[$meta:meta])* $name:ident => $ty:ty;)+) => {
        $(
            $(#[$meta])*
            pub fn $name<E, S>(supplier: S) -> Result<$ty>
            where
                S: FailableSupplier<$ty, E>,
                E: Into<BoxError>,
            {
                get(supplier)
            }
        )+
    };
}

get_as! {
    /// Obtain a `bool`, translating the supplier's failure
    get_as_bool => bool;
    /// Obtain an `i16`, translating the supplier's failure
    get_as_i16 => i16;
    /// Obtain an `i32`, translating the supplier's failure
    get_as_i32 => i32;
    /// Obtain an `i64`, translating the supplier's failure
    get_as_i64 => i64;
    /// Obtain an `f64`, translating the supplier's failure
    get_as_f64 => f64;
}

/// Apply a function, translating its failure
pub fn apply<T, R, E, F>(function: F, input: T) -> Result<R>
where
    F: FailableFunction<T, R, E>,
    E: Into<BoxError>,
{
    function.apply(input).map_err(rethrow)
}

/// Feed a value to a consumer, translating its failure
pub fn accept<T, E, C>(consumer: C, value: T) -> Result<()>
where
    C: FailableConsumer<T, E>,
    E: Into<BoxError>,
{
    consumer.accept(value).map_err(rethrow)
}

/// Evaluate a predicate, translating its failure
pub fn test<T: ?Sized, E, P>(predicate: P, value: &T) -> Result<bool>
where
    P: FailablePredicate<T, E>,
    E: Into<BoxError>,
{
    predicate.test(value).map_err(rethrow)
}

/// Run `action`, then release every resource in order.
///
/// Each resource is released exactly once, even when `action` or an earlier
/// release failed. Release failures are suppressed under the action's
/// failure; when only releases fail, the first of them is primary. The
/// aggregated failure is translated.
pub fn try_with_resources<E, A, I, R>(action: A, resources: I) -> Result<()>
where
    A: FailableRunnable<E>,
    I: IntoIterator<Item = R>,
    R: FailableRunnable<E>,
    E: Into<BoxError>,
{
    match run_scoped(action, resources) {
        Some(failure) => Err(rethrow_failure(failure)),
        None => Ok(()),
    }
}

/// Like [`try_with_resources`], handing any failure to `error_handler`.
///
/// The handler receives the aggregated failure and its outcome completes the
/// call; only a failure of the handler itself is translated.
pub fn try_with_resources_handled<E, HE, A, H, I, R>(
    action: A,
    error_handler: H,
    resources: I,
) -> Result<()>
where
    A: FailableRunnable<E>,
    H: FailableConsumer<Failure<E>, HE>,
    I: IntoIterator<Item = R>,
    R: FailableRunnable<E>,
    HE: Into<BoxError>,
{
    match run_scoped(action, resources) {
        Some(failure) => error_handler.accept(failure).map_err(rethrow),
        None => Ok(()),
    }
}

fn run_scoped<E, A, I, R>(action: A, resources: I) -> Option<Failure<E>>
where
    A: FailableRunnable<E>,
    I: IntoIterator<Item = R>,
    R: FailableRunnable<E>,
{
    let mut failure = action.run().err().map(Failure::new);
    let action_failed = failure.is_some();

    for (index, resource) in resources.into_iter().enumerate() {
        trace!(target: TRACE_TARGET, resource = index, "Releasing scoped resource");
        if let Err(e) = resource.run() {
            if Settings::global().trace_releases {
                warn!(
                    target: TRACE_TARGET,
                    resource = index,
                    action_failed,
                    "Scoped resource failed to release"
                );
            }
            Failure::record(&mut failure, e);
        }
    }

    failure
}
