//! Type tokens built at separate call sites

use failable::{Error, TypeDescriptor, TypeLiteral, Typed};
use std::collections::HashSet;

mod site_a {
    use failable::TypeLiteral;

    pub fn strings() -> TypeLiteral<Vec<String>> {
        TypeLiteral::new()
    }
}

mod site_b {
    use failable::TypeLiteral;

    pub fn strings() -> TypeLiteral<Vec<String>> {
        TypeLiteral::default()
    }

    pub fn ints() -> TypeLiteral<Vec<i32>> {
        TypeLiteral::new()
    }
}

#[test]
fn tokens_from_different_sites_are_equal() {
    let a = site_a::strings();
    let b = site_b::strings();

    assert_eq!(a, b);

    let mut set = HashSet::new();
    set.insert(a);
    set.insert(b);
    assert_eq!(set.len(), 1);
}

#[test]
fn different_parameterizations_are_unequal() {
    assert_ne!(site_a::strings(), site_b::ints());
    assert_eq!(
        site_a::strings().get_type().raw_name(),
        site_b::ints().get_type().raw_name()
    );
}

#[test]
fn unparameterized_token_fails_at_construction() {
    let raw_vec = TypeDescriptor::parameterized("alloc::vec::Vec", [TypeDescriptor::variable("T")]);

    let error = TypeLiteral::<Vec<String>>::from_descriptor(raw_vec).unwrap_err();

    assert!(matches!(error, Error::UnboundType { .. }));
    assert!(error.to_string().contains('T'));
}

#[test]
fn token_cannot_claim_another_type() {
    let error = TypeLiteral::<i32>::from_descriptor(site_a::strings().into_descriptor())
        .unwrap_err();

    assert!(matches!(error, Error::InvalidArgument { .. }));
    assert!(!error.is_translated());
}

#[test]
fn canonical_rendering() {
    assert_eq!(
        site_a::strings().to_string(),
        "TypeLiteral<alloc::vec::Vec<alloc::string::String>>"
    );
}
