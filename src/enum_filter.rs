//! Filtering over the defined variants of an enum.

use std::fmt;

use crate::error::FilterError;
use crate::filter::{BoxPredicate, Filter, Rule};
use crate::meta::EnumMeta;
use crate::predicate::Predicate;

/// Filters the defined variants of an enum and aggregates over them.
///
/// The source sequence of every run is
/// [`E::VARIANTS`](EnumMeta::VARIANTS); predicates select a subset of
/// the enum's domain, and the aggregate accessors report on the
/// accumulated results. Composes over a [`Filter`] rather than
/// inheriting from it; the underlying filter is reachable through
/// [`as_filter`](EnumFilter::as_filter) /
/// [`as_filter_mut`](EnumFilter::as_filter_mut).
///
/// # Example
///
/// ```rust
/// use finemesh::predicate::{has_flag, lacks_flag};
/// use finemesh::reflect_enum;
/// use finemesh::{EnumFilter, Rule};
///
/// #[derive(Clone, Copy, PartialEq, Debug)]
/// enum Cat {
///     Orange = 1,
///     White = 2,
///     Black = 4,
///     Brown = 16,
///     LongFur = 32,
/// }
/// reflect_enum!(Cat { Orange, White, Black, Brown, LongFur });
///
/// let mut filter = EnumFilter::<Cat>::new();
/// filter
///     .add_labeled("orange", has_flag(Cat::Orange))
///     .add_labeled("short_fur", lacks_flag(Cat::LongFur))
///     .run(Rule::All);
///
/// assert_eq!(filter.results(), &[Cat::Orange]);
/// assert!(filter.any());
/// assert!(!filter.all());
/// assert_eq!(filter.sum(), 55);
/// ```
pub struct EnumFilter<E: EnumMeta> {
    filter: Filter<E>,
}

impl<E: EnumMeta> EnumFilter<E> {
    /// An empty filter: no predicates, empty buffers.
    pub fn new() -> Self {
        Self {
            filter: Filter::new(),
        }
    }

    /// A filter pre-seeded with an ordered predicate sequence.
    pub fn from_predicates<I>(predicates: I) -> Self
    where
        I: IntoIterator<Item = BoxPredicate<E>>,
    {
        Self {
            filter: Filter::from_predicates(predicates),
        }
    }

    /// Run the predicates over every defined variant of `E`.
    ///
    /// Appends matches to the result buffer; see [`Filter::run`] for
    /// the append semantics.
    pub fn run(&mut self, rule: Rule) -> &mut Self {
        self.filter.run(E::VARIANTS.iter().copied(), rule);
        self
    }

    /// Whether any variant has matched since the last clear.
    pub fn any(&self) -> bool {
        !self.filter.results().is_empty()
    }

    /// Whether the result buffer holds as many entries as the enum
    /// has defined variants.
    pub fn all(&self) -> bool {
        self.filter.results().len() == E::VARIANTS.len()
    }

    /// Sum of the underlying values of *every defined variant*.
    ///
    /// This aggregates over the whole enum domain: the predicate list
    /// and the result buffer play no part in it, and its value never
    /// changes from run to run.
    pub fn sum(&self) -> i64 {
        E::VARIANTS.iter().map(|variant| variant.value()).sum()
    }

    /// Append a predicate. See [`Filter::add`].
    pub fn add<P>(&mut self, predicate: P) -> &mut Self
    where
        P: Predicate<E> + 'static,
    {
        self.filter.add(predicate);
        self
    }

    /// Append a labeled predicate. See [`Filter::add_labeled`].
    pub fn add_labeled<P>(&mut self, label: impl Into<String>, predicate: P) -> &mut Self
    where
        P: Predicate<E> + 'static,
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

    /// The accumulated matching variants.
    pub fn results(&self) -> &[E] {
        self.filter.results()
    }

    /// Clear the result buffer. See [`Filter::clear_results`].
    pub fn clear_results(&mut self) -> &mut Self {
        self.filter.clear_results();
        self
    }

    /// The underlying predicate accumulator.
    pub fn as_filter(&self) -> &Filter<E> {
        &self.filter
    }

    /// The underlying predicate accumulator, mutably.
    pub fn as_filter_mut(&mut self) -> &mut Filter<E> {
        &mut self.filter
    }
}

impl<E: EnumMeta> Default for EnumFilter<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EnumMeta + fmt::Debug> fmt::Debug for EnumFilter<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnumFilter")
            .field("filter", &self.filter)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{has_flag, lacks_flag};

    #[derive(Clone, Copy, PartialEq, Debug)]
    enum Cat {
        Orange = 1,
        White = 2,
        Black = 4,
        Brown = 16,
        LongFur = 32,
    }
    crate::reflect_enum!(Cat { Orange, White, Black, Brown, LongFur });

    #[test]
    fn test_run_with_no_predicates_matches_every_variant() {
        let mut filter = EnumFilter::<Cat>::new();
        filter.run(Rule::All);
        assert_eq!(filter.results(), Cat::VARIANTS);
        assert!(filter.all());
        assert!(filter.any());
    }

    #[test]
    fn test_orange_short_fur_scenario() {
        let mut filter = EnumFilter::<Cat>::new();
        filter
            .add(has_flag(Cat::Orange))
            .add(lacks_flag(Cat::LongFur))
            .run(Rule::All);
        assert_eq!(filter.results(), &[Cat::Orange]);
    }

    #[test]
    fn test_any_rule_unions_predicates() {
        let mut filter = EnumFilter::<Cat>::new();
        filter
            .add(has_flag(Cat::Orange))
            .add(has_flag(Cat::White))
            .run(Rule::Any);
        assert_eq!(filter.results(), &[Cat::Orange, Cat::White]);
    }

    #[test]
    fn test_sum_ignores_predicates_and_results() {
        let mut filter = EnumFilter::<Cat>::new();
        assert_eq!(filter.sum(), 55);

        filter.add(has_flag(Cat::Orange)).run(Rule::All);
        assert_eq!(filter.sum(), 55);
    }

    #[test]
    fn test_excluding_predicate_breaks_all() {
        let mut filter = EnumFilter::<Cat>::new();
        filter.add(lacks_flag(Cat::LongFur)).run(Rule::All);
        assert_eq!(filter.results().len(), Cat::VARIANTS.len() - 1);
        assert!(!filter.all());
        assert!(filter.any());
    }

    #[test]
    fn test_no_match_leaves_any_false() {
        let mut filter = EnumFilter::<Cat>::new();
        filter.add(|_: &Cat| false).run(Rule::All);
        assert!(!filter.any());
        assert!(!filter.all());
    }

    #[test]
    fn test_runs_append_and_clear_resets() {
        let mut filter = EnumFilter::<Cat>::new();
        filter.run(Rule::All).run(Rule::All);
        assert_eq!(filter.results().len(), Cat::VARIANTS.len() * 2);

        filter.clear_results().run(Rule::All);
        assert!(filter.all());
    }

    #[test]
    fn test_as_filter_mut_exposes_index_mutation() {
        let mut filter = EnumFilter::<Cat>::new();
        filter.add(has_flag(Cat::Orange));
        filter
            .as_filter_mut()
            .set(0, lacks_flag(Cat::LongFur))
            .unwrap();
        filter.run(Rule::All);
        assert_eq!(filter.results().len(), Cat::VARIANTS.len() - 1);
        assert_eq!(filter.as_filter().len(), 1);
    }

    #[test]
    fn test_label_removal_between_runs() {
        let mut filter = EnumFilter::<Cat>::new();
        filter
            .add_labeled("short_fur", lacks_flag(Cat::LongFur))
            .run(Rule::All);
        assert!(!filter.all());

        filter.clear_results().remove("short_fur").run(Rule::All);
        assert!(filter.all());
    }
}
