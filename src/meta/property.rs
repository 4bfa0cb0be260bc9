//! Property metadata: descriptor tables for type introspection.

use std::any::{Any, TypeId};
use std::fmt;

use crate::error::FilterError;

/// A type that can describe its public properties.
///
/// The descriptor table stands in for runtime reflection: each
/// property carries its name, declaring type, value type, and a value
/// accessor. Tables are produced on demand and never cached or
/// mutated.
///
/// Types without walkable properties (scalars, strings) are *leaf*
/// types and use the provided defaults; implementations are supplied
/// for the std scalar and string types. For structs, use
/// [`reflect_struct!`](crate::reflect_struct) rather than implementing
/// by hand.
pub trait Inspect: Sized + 'static {
    /// Fully-qualified name of the type.
    fn full_name() -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Property descriptors, in declaration order. Leaf types have
    /// none.
    fn properties() -> Vec<PropertyDesc> {
        Vec::new()
    }
}

macro_rules! leaf_inspect {
    ($($ty:ty),+ $(,)?) => {
        $(impl Inspect for $ty {})+
    };
}

leaf_inspect!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, String,
    &'static str,
);

/// A value accessor: reads the property off a `dyn Any` source.
///
/// Returns `None` when the source is not an instance of the
/// property's declaring type. Accessors clone the field value.
pub type Getter = fn(&dyn Any) -> Option<Box<dyn Any>>;

/// Reference to a type in the metadata model.
///
/// Carries the type's fully-qualified name, its identity, and a thunk
/// producing its property table, which is what lets dotted-path
/// resolution walk from a property into the properties of its value
/// type. Two `TypeRef`s are equal when they refer to the same type.
///
/// # Example
///
/// ```rust
/// use finemesh::meta::TypeRef;
///
/// let int_ref = TypeRef::of::<i32>();
/// assert_eq!(int_ref.full_name(), "i32");
/// assert!(int_ref.properties().is_empty());
/// ```
#[derive(Clone, Copy)]
pub struct TypeRef {
    full_name: &'static str,
    id: TypeId,
    properties: fn() -> Vec<PropertyDesc>,
}

impl TypeRef {
    /// The descriptor for `T`.
    pub fn of<T: Inspect>() -> Self {
        Self {
            full_name: T::full_name(),
            id: TypeId::of::<T>(),
            properties: T::properties,
        }
    }

    /// Fully-qualified name of the referenced type.
    pub fn full_name(&self) -> &'static str {
        self.full_name
    }

    /// Identity of the referenced type.
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// The type's property descriptors, produced fresh on each call.
    pub fn properties(&self) -> Vec<PropertyDesc> {
        (self.properties)()
    }

    /// Direct lookup of a property by name, bypassing any filter.
    ///
    /// Returns the first descriptor with a matching name, or `None`.
    pub fn property(&self, name: &str) -> Option<PropertyDesc> {
        self.properties().into_iter().find(|p| p.name() == name)
    }
}

impl PartialEq for TypeRef {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeRef {}

impl fmt::Debug for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeRef")
            .field("full_name", &self.full_name)
            .finish()
    }
}

/// Reflective metadata for a single named, typed property.
///
/// A descriptor knows its name, the type that declares it, the type
/// of its value, and how to read that value off an instance of the
/// declaring type.
///
/// # Example
///
/// ```rust
/// use finemesh::meta::{Inspect, TypeRef};
/// use finemesh::reflect_struct;
///
/// #[derive(Clone)]
/// struct Zip {
///     code: u32,
/// }
/// reflect_struct!(Zip { code: u32 });
///
/// let props = Zip::properties();
/// assert_eq!(props[0].name(), "code");
/// assert_eq!(props[0].declaring(), &TypeRef::of::<Zip>());
/// assert_eq!(props[0].ty(), &TypeRef::of::<u32>());
/// ```
#[derive(Clone, Copy)]
pub struct PropertyDesc {
    name: &'static str,
    declaring: TypeRef,
    ty: TypeRef,
    getter: Getter,
}

impl PropertyDesc {
    /// Build a descriptor from its parts. Usually generated by
    /// [`reflect_struct!`](crate::reflect_struct).
    pub fn new(name: &'static str, declaring: TypeRef, ty: TypeRef, getter: Getter) -> Self {
        Self {
            name,
            declaring,
            ty,
            getter,
        }
    }

    /// The property's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The type declaring this property.
    pub fn declaring(&self) -> &TypeRef {
        &self.declaring
    }

    /// The type of the property's value.
    pub fn ty(&self) -> &TypeRef {
        &self.ty
    }

    /// Read this property's value from `source`.
    ///
    /// Fails with [`FilterError::ValueExtraction`] when `source` is
    /// not an instance of the declaring type.
    ///
    /// # Example
    ///
    /// ```rust
    /// use finemesh::meta::Inspect;
    /// use finemesh::reflect_struct;
    ///
    /// #[derive(Clone)]
    /// struct Zip {
    ///     code: u32,
    /// }
    /// reflect_struct!(Zip { code: u32 });
    ///
    /// let zip = Zip { code: 1016 };
    /// let value = Zip::properties()[0].value_from(&zip).unwrap();
    /// assert_eq!(*value.downcast::<u32>().unwrap(), 1016);
    /// ```
    pub fn value_from(&self, source: &dyn Any) -> Result<Box<dyn Any>, FilterError> {
        (self.getter)(source).ok_or_else(|| FilterError::ValueExtraction {
            property: self.name.to_string(),
            expected: self.declaring.full_name().to_string(),
        })
    }
}

impl PartialEq for PropertyDesc {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.declaring == other.declaring && self.ty == other.ty
    }
}

impl Eq for PropertyDesc {}

impl fmt::Debug for PropertyDesc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyDesc")
            .field("name", &self.name)
            .field("declaring", &self.declaring)
            .field("ty", &self.ty)
            .finish()
    }
}

/// Implements [`Inspect`](crate::meta::Inspect) for a struct from its
/// property list.
///
/// Each listed field becomes a [`PropertyDesc`](crate::meta::PropertyDesc)
/// whose accessor downcasts the source to the struct and clones the
/// field. Field types must themselves implement `Inspect` (leaf impls
/// cover the std scalar and string types) and be `Clone`.
///
/// # Example
///
/// ```rust
/// use finemesh::meta::Inspect;
/// use finemesh::reflect_struct;
///
/// #[derive(Clone)]
/// struct Address {
///     city: String,
///     zip: u32,
/// }
/// reflect_struct!(Address { city: String, zip: u32 });
///
/// let names: Vec<_> = Address::properties().iter().map(|p| p.name()).collect();
/// assert_eq!(names, ["city", "zip"]);
/// ```
#[macro_export]
macro_rules! reflect_struct {
    ($ty:ty { $($field:ident : $field_ty:ty),* $(,)? }) => {
        impl $crate::meta::Inspect for $ty {
            fn properties() -> ::std::vec::Vec<$crate::meta::PropertyDesc> {
                ::std::vec![$(
                    $crate::meta::PropertyDesc::new(
                        stringify!($field),
                        $crate::meta::TypeRef::of::<$ty>(),
                        $crate::meta::TypeRef::of::<$field_ty>(),
                        |source: &dyn ::std::any::Any| {
                            source.downcast_ref::<$ty>().map(|v| {
                                ::std::boxed::Box::new(::std::clone::Clone::clone(&v.$field))
                                    as ::std::boxed::Box<dyn ::std::any::Any>
                            })
                        },
                    )
                ),*]
            }
        }
    };
}
