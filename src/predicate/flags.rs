//! Flag predicates over enum values.

use super::combinators::Predicate;
use crate::meta::EnumMeta;

/// Predicate that checks a flag is set, created by [`has_flag`].
#[derive(Clone, Copy, Debug)]
pub struct HasFlag<E>(pub E);

impl<E: EnumMeta> Predicate<E> for HasFlag<E> {
    #[inline]
    fn check(&self, value: &E) -> bool {
        value.has_flag(self.0)
    }
}

/// Create a predicate that checks whether a value has `flag` set.
///
/// # Example
///
/// ```rust
/// use finemesh::predicate::{has_flag, Predicate};
/// use finemesh::reflect_enum;
///
/// #[derive(Clone, Copy, PartialEq, Debug)]
/// enum Cat {
///     Orange = 1,
///     White = 2,
/// }
/// reflect_enum!(Cat { Orange, White });
///
/// assert!(has_flag(Cat::Orange).check(&Cat::Orange));
/// assert!(!has_flag(Cat::Orange).check(&Cat::White));
/// ```
pub fn has_flag<E: EnumMeta>(flag: E) -> HasFlag<E> {
    HasFlag(flag)
}

/// Predicate that checks a flag is clear, created by [`lacks_flag`].
#[derive(Clone, Copy, Debug)]
pub struct LacksFlag<E>(pub E);

impl<E: EnumMeta> Predicate<E> for LacksFlag<E> {
    #[inline]
    fn check(&self, value: &E) -> bool {
        !value.has_flag(self.0)
    }
}

/// Create a predicate that checks whether a value lacks `flag`.
///
/// # Example
///
/// ```rust
/// use finemesh::predicate::{lacks_flag, Predicate};
/// use finemesh::reflect_enum;
///
/// #[derive(Clone, Copy, PartialEq, Debug)]
/// enum Cat {
///     Orange = 1,
///     LongFur = 32,
/// }
/// reflect_enum!(Cat { Orange, LongFur });
///
/// assert!(lacks_flag(Cat::LongFur).check(&Cat::Orange));
/// assert!(!lacks_flag(Cat::LongFur).check(&Cat::LongFur));
/// ```
pub fn lacks_flag<E: EnumMeta>(flag: E) -> LacksFlag<E> {
    LacksFlag(flag)
}
