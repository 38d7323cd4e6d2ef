//! Type tokens for parameterized types

use crate::descriptor::TypeDescriptor;
use failable_core::{Error, Result};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Anything that carries a captured type
pub trait Typed<T: ?Sized> {
    fn get_type(&self) -> &TypeDescriptor;
}

/// A value standing for the type `T`, arguments included.
///
/// ```
/// use failable_reflect::TypeLiteral;
///
/// let strings = TypeLiteral::<Vec<String>>::new();
/// let ints = TypeLiteral::<Vec<i32>>::new();
/// assert_ne!(strings, ints);
/// assert_eq!(strings, TypeLiteral::<Vec<String>>::new());
/// ```
pub struct TypeLiteral<T: ?Sized> {
    value: TypeDescriptor,
    _marker: PhantomData<fn() -> Box<T>>,
}

impl<T: ?Sized> TypeLiteral<T> {
    /// Capture `T`
    pub fn new() -> Self {
        Self {
            value: TypeDescriptor::of::<T>(),
            _marker: PhantomData,
        }
    }

    /// A token for `T` described explicitly.
    ///
    /// The descriptor must be fully bound and must describe `T` itself.
    pub fn from_descriptor(value: TypeDescriptor) -> Result<Self> {
        if let Some(variable) = value.first_unbound() {
            return Err(Error::unbound_type(value.to_string(), variable));
        }
        let expected = TypeDescriptor::of::<T>();
        if value != expected {
            return Err(Error::invalid_argument(
                "descriptor",
                format!("'{value}' does not describe '{expected}'"),
            ));
        }
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// The captured type
    pub fn value(&self) -> &TypeDescriptor {
        &self.value
    }

    pub fn into_descriptor(self) -> TypeDescriptor {
        self.value
    }
}

impl<T: ?Sized> Typed<T> for TypeLiteral<T> {
    fn get_type(&self) -> &TypeDescriptor {
        &self.value
    }
}

impl<T: ?Sized> Default for TypeLiteral<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Clone for TypeLiteral<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T: ?Sized, U: ?Sized> PartialEq<TypeLiteral<U>> for TypeLiteral<T> {
    fn eq(&self, other: &TypeLiteral<U>) -> bool {
        self.value == other.value
    }
}

impl<T: ?Sized> Eq for TypeLiteral<T> {}

impl<T: ?Sized> Hash for TypeLiteral<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T: ?Sized> fmt::Debug for TypeLiteral<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypeLiteral").field(&self.value).finish()
    }
}

impl<T: ?Sized> fmt::Display for TypeLiteral<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeLiteral<{}>", self.value)
    }
}
