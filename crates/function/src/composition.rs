//! Composed failable functions and composition helpers

use crate::binary::FailableBiFunction;
use crate::function::FailableFunction;
use std::fmt::{self, Debug};
use std::marker::PhantomData;

/// Runs `first`, then `then` on its output. `M` is the intermediate type.
pub struct AndThen<F, G, M> {
    first: F,
    then: G,
    _intermediate: PhantomData<fn(M) -> M>,
}

impl<F, G, M> AndThen<F, G, M> {
    /// Create a new sequential composition
    pub fn new(first: F, then: G) -> Self {
        Self {
            first,
            then,
            _intermediate: PhantomData,
        }
    }

    /// Split back into the two constituents
    pub fn into_parts(self) -> (F, G) {
        (self.first, self.then)
    }
}

impl<T, M, R, E, F, G> FailableFunction<T, R, E> for AndThen<F, G, M>
where
    F: FailableFunction<T, M, E>,
    G: FailableFunction<M, R, E>,
{
    fn apply(&self, input: T) -> Result<R, E> {
        self.then.apply(self.first.apply(input)?)
    }
}

/// Runs `before`, then `outer` on its output. `M` is the intermediate type.
pub struct Compose<F, G, M> {
    outer: F,
    before: G,
    _intermediate: PhantomData<fn(M) -> M>,
}

impl<F, G, M> Compose<F, G, M> {
    /// Create a new right-to-left composition
    pub fn new(outer: F, before: G) -> Self {
        Self {
            outer,
            before,
            _intermediate: PhantomData,
        }
    }

    /// Split back into the two constituents
    pub fn into_parts(self) -> (F, G) {
        (self.outer, self.before)
    }
}

impl<T, M, R, E, F, G> FailableFunction<T, R, E> for Compose<F, G, M>
where
    F: FailableFunction<M, R, E>,
    G: FailableFunction<T, M, E>,
{
    fn apply(&self, input: T) -> Result<R, E> {
        self.outer.apply(self.before.apply(input)?)
    }
}

/// Runs a two-argument function, then `then` on its output
pub struct BiAndThen<F, G, M> {
    first: F,
    then: G,
    _intermediate: PhantomData<fn(M) -> M>,
}

impl<F, G, M> BiAndThen<F, G, M> {
    /// Create a new sequential composition of a binary and a unary function
    pub fn new(first: F, then: G) -> Self {
        Self {
            first,
            then,
            _intermediate: PhantomData,
        }
    }
}

impl<T, U, M, R, E, F, G> FailableBiFunction<T, U, R, E> for BiAndThen<F, G, M>
where
    F: FailableBiFunction<T, U, M, E>,
    G: FailableFunction<M, R, E>,
{
    fn apply(&self, t: T, u: U) -> Result<R, E> {
        self.then.apply(self.first.apply(t, u)?)
    }
}

macro_rules! impl_clone_debug {
    ($name:ident, $a:ident, $b:ident) => {
        impl<F: Clone, G: Clone, M> Clone for $name<F, G, M> {
            fn clone(&self) -> Self {
                Self {
                    $a: self.$a.clone(),
                    $b: self.$b.clone(),
                    _intermediate: PhantomData,
                }
            }
        }

        impl<F: Copy, G: Copy, M> Copy for $name<F, G, M> {}

        impl<F, G, M> Debug for $name<F, G, M> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($name)).finish_non_exhaustive()
            }
        }
    };
}

impl_clone_debug!(AndThen, first, then);
impl_clone_debug!(Compose, outer, before);
impl_clone_debug!(BiAndThen, first, then);

/// Function composition operators
pub mod operators {
    use super::*;

    /// Forward composition operator (f >> g)
    pub fn forward_compose<T, M, R, E, F, G>(f: F, g: G) -> AndThen<F, G, M>
    where
        F: FailableFunction<T, M, E>,
        G: FailableFunction<M, R, E>,
    {
        AndThen::new(f, g)
    }

    /// Backward composition operator (g << f)
    pub fn backward_compose<T, M, R, E, F, G>(g: G, f: F) -> Compose<G, F, M>
    where
        F: FailableFunction<T, M, E>,
        G: FailableFunction<M, R, E>,
    {
        Compose::new(g, f)
    }
}

/// Chain failable functions left to right with `and_then`
#[macro_export]
macro_rules! chain {
    ($first:expr $(,)?) => {
        $first
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {{
        let composed = $first;
        $(
            let composed = $crate::FailableFunction::and_then(composed, $rest);
        )+
        composed
    }};
}
