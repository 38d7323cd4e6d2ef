//! Failable operators and the failure translator.
//!
//! Operators here keep their declared failure type `E` in the signature:
//! composing them with `and_then` or `compose` never changes `E`, and a
//! failing constituent stops the composition with its failure untouched.
//! The [`failable`] module is where declared failures become the ambient
//! [`failable_core::Error`].

pub mod binary;
pub mod composition;
pub mod consumer;
pub mod failable;
pub mod function;
pub mod predicate;
pub mod supplier;

pub use binary::{max_by, min_by, FailableBiFunction, FailableBinaryOperator};
pub use composition::operators::{backward_compose, forward_compose};
pub use composition::{AndThen, BiAndThen, Compose};
pub use consumer::FailableConsumer;
pub use function::{identity, nop, FailableFunction, FailableUnaryOperator, Identity, Nop};
pub use predicate::{falsy, truthy, FailablePredicate};
pub use supplier::{FailableRunnable, FailableSupplier};

/// Prelude module for convenient imports
pub mod prelude {
    pub use super::composition::operators::*;
    pub use super::{
        FailableBiFunction, FailableBinaryOperator, FailableConsumer, FailableFunction,
        FailablePredicate, FailableRunnable, FailableSupplier, FailableUnaryOperator,
    };
    pub use crate::chain;
}
