//! # Finemesh
//!
//! > *A fine mesh passes nothing it shouldn't.*
//!
//! Composable predicate filtering over enum and type metadata:
//! accumulate predicates, sift collections, resolve dotted property
//! paths.
//!
//! ## Shape
//!
//! The core is [`Filter<T>`](Filter), an ordered accumulator of
//! predicates over any element type: each run sifts a source sequence
//! through the predicate list, conjunctively or disjunctively, and
//! appends the matches to a result buffer. Three thin specializations
//! supply their own source data from the crate's metadata model:
//!
//! - [`EnumFilter`] runs over the defined variants of an enum and
//!   adds aggregate queries.
//! - [`PropertyFilter`] runs over the property descriptors of a type
//!   and resolves dotted property paths within the filtered set.
//! - [`TypeFilter`] runs over a caller-supplied type set and resolves
//!   properties (and their values) through it.
//!
//! ## Quick Example
//!
//! ```rust
//! use finemesh::predicate::{has_flag, lacks_flag};
//! use finemesh::reflect_enum;
//! use finemesh::{EnumFilter, Rule};
//!
//! #[derive(Clone, Copy, PartialEq, Debug)]
//! enum Cat {
//!     Orange = 1,
//!     White = 2,
//!     Black = 4,
//!     Brown = 16,
//!     LongFur = 32,
//! }
//! reflect_enum!(Cat { Orange, White, Black, Brown, LongFur });
//!
//! let mut filter = EnumFilter::<Cat>::new();
//! filter
//!     .add_labeled("orange", has_flag(Cat::Orange))
//!     .add_labeled("short_fur", lacks_flag(Cat::LongFur))
//!     .run(Rule::All);
//!
//! assert_eq!(filter.results(), &[Cat::Orange]);
//! assert_eq!(filter.sum(), 55); // whole domain, predicates ignored
//! ```
//!
//! Filters are single-threaded by design: no synchronization, no
//! suspension points, and metadata tables are read-only lookup
//! structures.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod enum_filter;
pub mod error;
pub mod filter;
pub mod meta;
pub mod predicate;
pub mod property_filter;
pub mod type_filter;

// Re-exports
pub use enum_filter::EnumFilter;
pub use error::FilterError;
pub use filter::{BoxPredicate, Filter, Rule};
pub use property_filter::PropertyFilter;
pub use type_filter::TypeFilter;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::enum_filter::EnumFilter;
    pub use crate::error::FilterError;
    pub use crate::filter::{BoxPredicate, Filter, Rule};
    pub use crate::meta::{EnumMeta, Inspect, PropertyDesc, TypeRef};
    pub use crate::predicate::{Predicate, PredicateExt};
    pub use crate::property_filter::PropertyFilter;
    pub use crate::type_filter::TypeFilter;
}
