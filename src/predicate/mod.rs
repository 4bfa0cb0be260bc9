//! Predicate trait, logical combinators, and ready-made predicates
//! for the metadata domain.
//!
//! A predicate is any filter condition over `&T`; plain closures
//! qualify through a blanket impl, and the combinators build compound
//! conditions from simple ones:
//!
//! ```rust
//! use finemesh::predicate::{Predicate, PredicateExt};
//!
//! let small_even = (|x: &i32| x % 2 == 0).and(|x: &i32| *x < 10);
//! assert!(small_even.check(&4));
//! assert!(!small_even.check(&12));
//! ```
//!
//! The rest of the module is ready-made predicates for the crate's
//! metadata types: flag tests over [`EnumMeta`](crate::meta::EnumMeta)
//! values, and name/type tests over
//! [`PropertyDesc`](crate::meta::PropertyDesc) and
//! [`TypeRef`](crate::meta::TypeRef).

mod combinators;
mod flags;
mod property;
mod types;

pub use combinators::{And, Not, Or, Predicate, PredicateExt};
pub use flags::{has_flag, lacks_flag, HasFlag, LacksFlag};
pub use property::{declared_by, named, of_type, DeclaredBy, Named, OfType};
pub use types::{full_named, has_property, FullNamed, HasProperty};
