//! The introspection model: read-only metadata tables for enums and
//! struct properties.
//!
//! This module supplies the source data the filters run over. Enums
//! describe their defined variants through [`EnumMeta`]; structs
//! describe their properties through [`Inspect`], [`TypeRef`], and
//! [`PropertyDesc`]. The [`reflect_enum!`](crate::reflect_enum) and
//! [`reflect_struct!`](crate::reflect_struct) macros implement the
//! traits from a declaration-style listing.
//!
//! All tables are treated as immutable lookup structures: filters read
//! them, nothing mutates them, and nothing caches them.

mod enums;
mod property;

pub use enums::EnumMeta;
pub use property::{Getter, Inspect, PropertyDesc, TypeRef};
