//! Filtering over the property descriptors of a type.

use std::fmt;

use crate::error::FilterError;
use crate::filter::{BoxPredicate, Filter, Rule};
use crate::meta::{Inspect, PropertyDesc, TypeRef};
use crate::predicate::Predicate;

/// Filters property descriptors and resolves dotted property paths
/// within the filtered set.
///
/// Each [`run`](PropertyFilter::run) draws its source from the
/// property table of one type; results accumulate across runs, so
/// running over several types in turn builds up the descriptor set
/// that [`of`](PropertyFilter::of) and
/// [`of_path`](PropertyFilter::of_path) resolve against.
///
/// # Example
///
/// ```rust
/// use finemesh::meta::TypeRef;
/// use finemesh::reflect_struct;
/// use finemesh::{PropertyFilter, Rule};
///
/// #[derive(Clone)]
/// struct Address {
///     city: String,
/// }
/// reflect_struct!(Address { city: String });
///
/// #[derive(Clone)]
/// struct Customer {
///     home: Address,
/// }
/// reflect_struct!(Customer { home: Address });
///
/// let mut filter = PropertyFilter::new();
/// filter.run::<Customer>(Rule::All).run::<Address>(Rule::All);
///
/// let city = filter
///     .of_path(&TypeRef::of::<Customer>(), "home.city")
///     .unwrap();
/// assert_eq!(city.name(), "city");
/// assert_eq!(city.declaring(), &TypeRef::of::<Address>());
/// ```
pub struct PropertyFilter {
    filter: Filter<PropertyDesc>,
}

impl PropertyFilter {
    /// An empty filter: no predicates, empty buffers.
    pub fn new() -> Self {
        Self {
            filter: Filter::new(),
        }
    }

    /// A filter pre-seeded with an ordered predicate sequence.
    pub fn from_predicates<I>(predicates: I) -> Self
    where
        I: IntoIterator<Item = BoxPredicate<PropertyDesc>>,
    {
        Self {
            filter: Filter::from_predicates(predicates),
        }
    }

    /// Run the predicates over the property descriptors of `T`.
    ///
    /// Appends matches to the result buffer; see [`Filter::run`] for
    /// the append semantics.
    pub fn run<T: Inspect>(&mut self, rule: Rule) -> &mut Self {
        self.filter.run(T::properties(), rule);
        self
    }

    /// The first filtered descriptor declared by `declaring` with the
    /// given name, or `None` when the filtered set holds no such
    /// property.
    pub fn of(&self, declaring: &TypeRef, name: &str) -> Option<&PropertyDesc> {
        self.filter
            .results()
            .iter()
            .find(|property| property.declaring() == declaring && property.name() == name)
    }

    /// Resolve a dotted property path within the filtered set.
    ///
    /// The first fragment is looked up as a property of `declaring`;
    /// each later fragment as a property of the previous fragment's
    /// *value type*, walking one hop at a time into nested types.
    /// Every hop resolves through [`of`](PropertyFilter::of), so every
    /// descriptor along the path must be present in the filtered
    /// results.
    ///
    /// Fails with [`FilterError::BlankPath`] when `path` is empty or
    /// whitespace, and with [`FilterError::PropertyNotFound`] when a
    /// fragment does not resolve.
    pub fn of_path(&self, declaring: &TypeRef, path: &str) -> Result<PropertyDesc, FilterError> {
        if path.trim().is_empty() {
            return Err(FilterError::BlankPath);
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(path, declaring = declaring.full_name(), "resolving property path");

        let mut current: Option<&PropertyDesc> = None;
        for fragment in path.split('.') {
            let scope = current.map_or(declaring, |property| property.ty());
            current = Some(self.of(scope, fragment).ok_or_else(|| {
                FilterError::PropertyNotFound {
                    declaring: scope.full_name().to_string(),
                    name: fragment.to_string(),
                }
            })?);
        }

        current.copied().ok_or(FilterError::BlankPath)
    }

    /// Append a predicate. See [`Filter::add`].
    pub fn add<P>(&mut self, predicate: P) -> &mut Self
    where
        P: Predicate<PropertyDesc> + 'static,
    {
        self.filter.add(predicate);
        self
    }

    /// Append a labeled predicate. See [`Filter::add_labeled`].
    pub fn add_labeled<P>(&mut self, label: impl Into<String>, predicate: P) -> &mut Self
    where
        P: Predicate<PropertyDesc> + 'static,
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

    /// The accumulated matching descriptors.
    pub fn results(&self) -> &[PropertyDesc] {
        self.filter.results()
    }

    /// Clear the result buffer. See [`Filter::clear_results`].
    pub fn clear_results(&mut self) -> &mut Self {
        self.filter.clear_results();
        self
    }

    /// The underlying predicate accumulator.
    pub fn as_filter(&self) -> &Filter<PropertyDesc> {
        &self.filter
    }

    /// The underlying predicate accumulator, mutably.
    pub fn as_filter_mut(&mut self) -> &mut Filter<PropertyDesc> {
        &mut self.filter
    }
}

impl Default for PropertyFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PropertyFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyFilter")
            .field("filter", &self.filter)
            .finish()
    }
}
