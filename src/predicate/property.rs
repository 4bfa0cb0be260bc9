//! Predicates over property descriptors.

use std::any::TypeId;

use super::combinators::Predicate;
use crate::meta::{Inspect, PropertyDesc};

/// Predicate matching descriptors by name, created by [`named`].
#[derive(Clone, Debug)]
pub struct Named {
    name: String,
}

impl Predicate<PropertyDesc> for Named {
    #[inline]
    fn check(&self, value: &PropertyDesc) -> bool {
        value.name() == self.name
    }
}

/// Create a predicate that matches properties with the given name.
///
/// # Example
///
/// ```rust
/// use finemesh::meta::Inspect;
/// use finemesh::predicate::{named, Predicate};
/// use finemesh::reflect_struct;
///
/// #[derive(Clone)]
/// struct Address {
///     city: String,
///     zip: u32,
/// }
/// reflect_struct!(Address { city: String, zip: u32 });
///
/// let p = named("city");
/// let props = Address::properties();
/// assert!(p.check(&props[0]));
/// assert!(!p.check(&props[1]));
/// ```
pub fn named(name: impl Into<String>) -> Named {
    Named { name: name.into() }
}

/// Predicate matching descriptors declared by a given type, created by
/// [`declared_by`].
#[derive(Clone, Copy, Debug)]
pub struct DeclaredBy {
    id: TypeId,
}

impl Predicate<PropertyDesc> for DeclaredBy {
    #[inline]
    fn check(&self, value: &PropertyDesc) -> bool {
        value.declaring().id() == self.id
    }
}

/// Create a predicate that matches properties declared by `T`.
pub fn declared_by<T: Inspect>() -> DeclaredBy {
    DeclaredBy {
        id: TypeId::of::<T>(),
    }
}

/// Predicate matching descriptors by value type, created by
/// [`of_type`].
#[derive(Clone, Copy, Debug)]
pub struct OfType {
    id: TypeId,
}

impl Predicate<PropertyDesc> for OfType {
    #[inline]
    fn check(&self, value: &PropertyDesc) -> bool {
        value.ty().id() == self.id
    }
}

/// Create a predicate that matches properties whose value type is `T`.
///
/// # Example
///
/// ```rust
/// use finemesh::meta::Inspect;
/// use finemesh::predicate::{of_type, Predicate};
/// use finemesh::reflect_struct;
///
/// #[derive(Clone)]
/// struct Address {
///     city: String,
///     zip: u32,
/// }
/// reflect_struct!(Address { city: String, zip: u32 });
///
/// let strings = of_type::<String>();
/// let props = Address::properties();
/// assert!(strings.check(&props[0]));
/// assert!(!strings.check(&props[1]));
/// ```
pub fn of_type<T: Inspect>() -> OfType {
    OfType {
        id: TypeId::of::<T>(),
    }
}
