//! Failable units of work taking no arguments
//!
//! Both traits consume the unit of work, so closures that move captured
//! values out are accepted. Pass `&f` to keep a reusable closure.

/// Produces a value, possibly failing with `E`
pub trait FailableSupplier<T, E> {
    fn get(self) -> Result<T, E>;
}

impl<T, E, F> FailableSupplier<T, E> for F
where
    F: FnOnce() -> Result<T, E>,
{
    fn get(self) -> Result<T, E> {
        self()
    }
}

/// Runs for its side effect, possibly failing with `E`.
///
/// Scoped resources are released through this trait.
pub trait FailableRunnable<E> {
    fn run(self) -> Result<(), E>;
}

impl<E, F> FailableRunnable<E> for F
where
    F: FnOnce() -> Result<(), E>,
{
    fn run(self) -> Result<(), E> {
        self()
    }
}
