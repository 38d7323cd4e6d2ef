//! Composable operations that declare their failures.
//!
//! Operators ([`FailableFunction`], [`FailablePredicate`], ...) return
//! `Result<_, E>` with a declared failure type `E` and compose without
//! changing it. The [`failable`] translator runs them where no failure type
//! can be declared, turning the declared failure into the ambient [`Error`].
//! [`FailableStream`] chains operators lazily over a sequence, and
//! [`TypeLiteral`] captures parameterized types as comparable values.
//!
//! ```
//! use failable::FailableFunction;
//!
//! type Outcome = Result<i64, std::num::TryFromIntError>;
//!
//! let square = |n: i64| -> Outcome { Ok(n * n) };
//! let halve = |n: i64| -> Outcome { Ok(n / 2) };
//! assert_eq!(square.and_then(halve).apply(4), Ok(8));
//! assert_eq!(square.compose(halve).apply(4), Ok(4));
//!
//! let parsed = failable::failable::apply(|s: &str| s.parse::<i32>(), "12").unwrap();
//! assert_eq!(parsed, 12);
//! ```

pub use failable_core::{config, errors, BoxError, Error, Failure, Result, ResultExt, Settings};
pub use failable_function::*;
pub use failable_reflect::{TypeDescriptor, TypeLiteral, Typed};
pub use failable_stream::{
    enumeration, enumeration_stream, failable_stream, Characteristics, Enumeration,
    EnumerationSpliterator, FailableStream, IterEnumeration,
};

/// Operator traits, composition helpers and stream constructors
pub mod prelude {
    pub use failable_core::ResultExt;
    pub use failable_function::prelude::*;
    pub use failable_reflect::Typed;
    pub use failable_stream::{failable_stream, FailableStream};
}
