//! Predicates over type descriptors.

use super::combinators::Predicate;
use crate::meta::TypeRef;

/// Predicate matching types by fully-qualified name, created by
/// [`full_named`].
#[derive(Clone, Debug)]
pub struct FullNamed {
    full_name: String,
}

impl Predicate<TypeRef> for FullNamed {
    #[inline]
    fn check(&self, value: &TypeRef) -> bool {
        value.full_name() == self.full_name
    }
}

/// Create a predicate that matches a type by its fully-qualified name.
///
/// # Example
///
/// ```rust
/// use finemesh::meta::TypeRef;
/// use finemesh::predicate::{full_named, Predicate};
///
/// let p = full_named("i32");
/// assert!(p.check(&TypeRef::of::<i32>()));
/// assert!(!p.check(&TypeRef::of::<u32>()));
/// ```
pub fn full_named(full_name: impl Into<String>) -> FullNamed {
    FullNamed {
        full_name: full_name.into(),
    }
}

/// Predicate matching types declaring a given property, created by
/// [`has_property`].
#[derive(Clone, Debug)]
pub struct HasProperty {
    name: String,
}

impl Predicate<TypeRef> for HasProperty {
    #[inline]
    fn check(&self, value: &TypeRef) -> bool {
        value.property(&self.name).is_some()
    }
}

/// Create a predicate that matches types declaring a property with
/// the given name.
///
/// # Example
///
/// ```rust
/// use finemesh::meta::{Inspect, TypeRef};
/// use finemesh::predicate::{has_property, Predicate};
/// use finemesh::reflect_struct;
///
/// #[derive(Clone)]
/// struct Address {
///     city: String,
/// }
/// reflect_struct!(Address { city: String });
///
/// let p = has_property("city");
/// assert!(p.check(&TypeRef::of::<Address>()));
/// assert!(!p.check(&TypeRef::of::<String>()));
/// ```
pub fn has_property(name: impl Into<String>) -> HasProperty {
    HasProperty { name: name.into() }
}
