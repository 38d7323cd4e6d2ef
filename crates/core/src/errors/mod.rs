//! Error types and result extensions for failable operations

mod builders;
mod extensions;
mod failure;
mod types;

pub use extensions::*;
pub use failure::Failure;
pub use types::{BoxError, Error, Result};
