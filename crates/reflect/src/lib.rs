//! Type tokens.
//!
//! [`TypeLiteral<T>`] captures a possibly parameterized type such as
//! `Vec<String>` as a value. The captured [`TypeDescriptor`] keeps the raw
//! type and its arguments, so `TypeLiteral<Vec<String>>` and
//! `TypeLiteral<Vec<i32>>` compare unequal.

pub mod descriptor;
pub mod literal;

pub use descriptor::TypeDescriptor;
pub use literal::{TypeLiteral, Typed};
