//! Filtering over an externally supplied set of types.

use std::any::Any;
use std::fmt;

use crate::error::FilterError;
use crate::filter::{BoxPredicate, Filter, Rule};
use crate::meta::{PropertyDesc, TypeRef};
use crate::predicate::Predicate;

/// Filters a caller-supplied type set and resolves properties through
/// it.
///
/// Unlike [`PropertyFilter`](crate::PropertyFilter), path resolution
/// here only consults the filtered set for the *root* type; the walk
/// itself uses direct, unfiltered property lookup on each successive
/// value type.
///
/// # Example
///
/// ```rust
/// use finemesh::meta::{Inspect, TypeRef};
/// use finemesh::reflect_struct;
/// use finemesh::{Rule, TypeFilter};
///
/// #[derive(Clone)]
/// struct Address {
///     city: String,
/// }
/// reflect_struct!(Address { city: String });
///
/// let mut filter = TypeFilter::new();
/// filter.run([TypeRef::of::<Address>()], Rule::All);
///
/// let city = filter.get_property(Address::full_name(), "city").unwrap();
/// assert_eq!(city.ty(), &TypeRef::of::<String>());
///
/// let address = Address { city: "Utrecht".to_string() };
/// let value = filter
///     .get_property_value(Address::full_name(), "city", &address)
///     .unwrap();
/// assert_eq!(*value.downcast::<String>().unwrap(), "Utrecht");
/// ```
pub struct TypeFilter {
    filter: Filter<TypeRef>,
}

impl TypeFilter {
    /// An empty filter: no predicates, empty buffers.
    pub fn new() -> Self {
        Self {
            filter: Filter::new(),
        }
    }

    /// A filter pre-seeded with an ordered predicate sequence.
    pub fn from_predicates<I>(predicates: I) -> Self
    where
        I: IntoIterator<Item = BoxPredicate<TypeRef>>,
    {
        Self {
            filter: Filter::from_predicates(predicates),
        }
    }

    /// Run the predicates over the supplied type sequence.
    ///
    /// Appends matches to the result buffer; see [`Filter::run`] for
    /// the append semantics.
    pub fn run<I>(&mut self, types: I, rule: Rule) -> &mut Self
    where
        I: IntoIterator<Item = TypeRef>,
    {
        self.filter.run(types, rule);
        self
    }

    /// Resolve a dotted property path starting from the filtered type
    /// with the given fully-qualified name.
    ///
    /// The root type is the first filtered type whose
    /// [`full_name`](TypeRef::full_name) equals `full_name`; each path
    /// fragment is then resolved by direct property lookup on the
    /// previous fragment's value type, with no filtering applied to
    /// the walk.
    ///
    /// Fails with [`FilterError::BlankPath`] on an empty or whitespace
    /// path, [`FilterError::TypeNotFound`] when no filtered type
    /// carries the name, and [`FilterError::PropertyNotFound`] when a
    /// fragment does not resolve.
    pub fn get_property(&self, full_name: &str, path: &str) -> Result<PropertyDesc, FilterError> {
        if path.trim().is_empty() {
            return Err(FilterError::BlankPath);
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(path, root = full_name, "resolving type property path");

        let root = self
            .filter
            .results()
            .iter()
            .find(|ty| ty.full_name() == full_name)
            .ok_or_else(|| FilterError::TypeNotFound {
                full_name: full_name.to_string(),
            })?;

        let mut current: Option<PropertyDesc> = None;
        for fragment in path.split('.') {
            let scope = current.as_ref().map_or(root, |property| property.ty());
            let next = scope
                .property(fragment)
                .ok_or_else(|| FilterError::PropertyNotFound {
                    declaring: scope.full_name().to_string(),
                    name: fragment.to_string(),
                })?;
            current = Some(next);
        }

        current.ok_or(FilterError::BlankPath)
    }

    /// Resolve a property via [`get_property`](TypeFilter::get_property)
    /// and read its value off `source`.
    ///
    /// Fails with [`FilterError::ValueExtraction`] when `source` is
    /// not an instance of the resolved property's declaring type; for
    /// a multi-fragment path that means the *nested* type, not the
    /// root.
    pub fn get_property_value(
        &self,
        full_name: &str,
        path: &str,
        source: &dyn Any,
    ) -> Result<Box<dyn Any>, FilterError> {
        self.get_property(full_name, path)?.value_from(source)
    }

    /// Append a predicate. See [`Filter::add`].
    pub fn add<P>(&mut self, predicate: P) -> &mut Self
    where
        P: Predicate<TypeRef> + 'static,
    {
        self.filter.add(predicate);
        self
    }

    /// Append a labeled predicate. See [`Filter::add_labeled`].
    pub fn add_labeled<P>(&mut self, label: impl Into<String>, predicate: P) -> &mut Self
    where
        P: Predicate<TypeRef> + 'static,
    {
        self.filter.add_labeled(label, predicate);
        self
    }

    /// Remove the first predicate carrying `label`. See
    /// [`Filter::remove`].
    pub fn remove(&mut self, label: &str) -> &mut Self {
        self.filter.remove(label);
        self
    }

    /// Remove the predicate at `index`. See [`Filter::remove_at`].
    pub fn remove_at(&mut self, index: usize) -> Result<&mut Self, FilterError> {
        self.filter.remove_at(index)?;
        Ok(self)
    }

    /// The accumulated matching types.
    pub fn results(&self) -> &[TypeRef] {
        self.filter.results()
    }

    /// Clear the result buffer. See [`Filter::clear_results`].
    pub fn clear_results(&mut self) -> &mut Self {
        self.filter.clear_results();
        self
    }

    /// The underlying predicate accumulator.
    pub fn as_filter(&self) -> &Filter<TypeRef> {
        &self.filter
    }

    /// The underlying predicate accumulator, mutably.
    pub fn as_filter_mut(&mut self) -> &mut Filter<TypeRef> {
        &mut self.filter
    }
}

impl Default for TypeFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeFilter")
            .field("filter", &self.filter)
            .finish()
    }
}
