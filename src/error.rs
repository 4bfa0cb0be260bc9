//! Error types for filter mutation and metadata resolution.

use std::fmt;

/// Errors produced by filter mutation and metadata resolution.
///
/// Every fallible operation in this crate reports one of these
/// variants. Lookups that merely miss without being a caller mistake,
/// such as [`PropertyFilter::of`](crate::PropertyFilter::of), return
/// `Option` instead.
///
/// # Examples
///
/// ```rust
/// use finemesh::{Filter, FilterError};
///
/// let filter: Filter<i32> = Filter::new();
/// assert_eq!(
///     filter.get(3).err(),
///     Some(FilterError::IndexOutOfRange { index: 3, len: 0 }),
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FilterError {
    /// A required dotted-path argument was empty or all whitespace.
    BlankPath,
    /// An index-based predicate-list operation was given an index past
    /// the end of the list.
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The predicate-list length at the time of the call.
        len: usize,
    },
    /// A property name could not be resolved against the scope it was
    /// looked up in.
    PropertyNotFound {
        /// Full name of the type the lookup was scoped to.
        declaring: String,
        /// The property name that failed to resolve.
        name: String,
    },
    /// No filtered type matched the requested fully-qualified name.
    TypeNotFound {
        /// The fully-qualified name that was requested.
        full_name: String,
    },
    /// A property value could not be read because the supplied source
    /// was not an instance of the property's declaring type.
    ValueExtraction {
        /// Name of the property whose accessor was invoked.
        property: String,
        /// Full name of the declaring type the accessor expected.
        expected: String,
    },
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BlankPath => write!(f, "path must not be empty or whitespace"),
            Self::IndexOutOfRange { index, len } => {
                write!(
                    f,
                    "index {} out of range for predicate list of length {}",
                    index, len
                )
            }
            Self::PropertyNotFound { declaring, name } => {
                write!(f, "property `{}` not found on `{}`", name, declaring)
            }
            Self::TypeNotFound { full_name } => {
                write!(f, "no filtered type named `{}`", full_name)
            }
            Self::ValueExtraction { property, expected } => {
                write!(
                    f,
                    "cannot read `{}`: source is not an instance of `{}`",
                    property, expected
                )
            }
        }
    }
}

impl std::error::Error for FilterError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_out_of_range_display() {
        let err = FilterError::IndexOutOfRange { index: 5, len: 2 };
        let display = format!("{}", err);
        assert!(display.contains("index 5"));
        assert!(display.contains("length 2"));
    }

    #[test]
    fn test_property_not_found_display() {
        let err = FilterError::PropertyNotFound {
            declaring: "Address".to_string(),
            name: "country".to_string(),
        };
        let display = format!("{}", err);
        assert!(display.contains("`country`"));
        assert!(display.contains("`Address`"));
    }

    #[test]
    fn test_blank_path_display() {
        assert!(format!("{}", FilterError::BlankPath).contains("whitespace"));
    }

    #[test]
    fn test_value_extraction_display() {
        let err = FilterError::ValueExtraction {
            property: "city".to_string(),
            expected: "Address".to_string(),
        };
        assert!(format!("{}", err).contains("not an instance"));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn test_error_round_trips() {
        let err = FilterError::TypeNotFound {
            full_name: "demo::Customer".to_string(),
        };
        let json = serde_json::to_string(&err).unwrap();
        let back: FilterError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, err);
    }
}
