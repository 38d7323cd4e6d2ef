//! Core errors, settings and constants for the `failable` workspace.
//!
//! Every other crate in the workspace reports ambient failures through the
//! types defined here.
//!
//! ## Key Components
//!
//! - **`errors`**: The ambient `Error` enum and `Result` alias, the boxed
//!   `BoxError` used to carry declared failures, and `Failure<E>`, a primary
//!   failure with the failures suppressed after it.
//! - **`config`**: `Settings` controlling diagnostics emitted at translation
//!   boundaries.
//! - **`constants`**: Environment variable names and shared sentinel values.

pub mod config;
pub mod constants;
pub mod errors;

pub use self::{
    config::{ConfigSource, Settings},
    constants::*,
    errors::{BoxError, Error, Failure, Result, ResultExt},
};
