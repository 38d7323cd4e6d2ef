//! Lazy sequences whose stages may fail.
//!
//! A [`FailableStream`] records `map`, `filter` and `peek` stages built from
//! failable operators and only runs them when a terminal operation pulls
//! elements through. The first failure stops evaluation and surfaces as a
//! translated [`failable_core::Error`].

pub mod enumeration;
pub mod stages;
pub mod stream;

pub use enumeration::{
    enumeration_stream, Characteristics, Enumeration, EnumerationSpliterator, IterEnumeration,
};
pub use stream::{failable_stream, FailableStream};
