//! The predicate accumulator.

use std::fmt;

use crate::error::FilterError;
use crate::predicate::Predicate;

/// How a [`Filter`] composes its predicate list during a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rule {
    /// Every predicate must hold (conjunction). Vacuously true when
    /// the predicate list is empty.
    #[default]
    All,
    /// At least one predicate must hold (disjunction). An empty
    /// predicate list still passes every element.
    Any,
}

/// A boxed predicate as stored by [`Filter`].
pub type BoxPredicate<T> = Box<dyn Predicate<T>>;

struct Entry<T> {
    label: Option<String>,
    predicate: BoxPredicate<T>,
}

/// An ordered accumulator of predicates over `T`.
///
/// A filter holds a predicate list, a source buffer, and a result
/// buffer. Each [`run`](Filter::run) replaces the source buffer with
/// the supplied sequence and *appends* every element satisfying the
/// composition [`Rule`] to the result buffer; callers clear results
/// explicitly between logically distinct runs with
/// [`clear_results`](Filter::clear_results). Predicates may be added
/// and removed at any time, including between runs.
///
/// Predicates added with [`add_labeled`](Filter::add_labeled) can
/// later be removed by label; unlabeled predicates are removable only
/// by index.
///
/// The filter performs no synchronization. It is meant for
/// single-threaded use; share-and-mutate across threads is not
/// supported.
///
/// # Example
///
/// ```rust
/// use finemesh::{Filter, Rule};
///
/// let mut filter: Filter<i32> = Filter::new();
/// filter
///     .add(|x: &i32| x % 2 == 0)
///     .add_labeled("positive", |x: &i32| *x > 0)
///     .run(vec![-2, -1, 0, 1, 2, 3, 4], Rule::All);
///
/// assert_eq!(filter.results(), &[2, 4]);
///
/// filter.clear_results().remove("positive").run(vec![-2, 2], Rule::All);
/// assert_eq!(filter.results(), &[-2, 2]);
/// ```
pub struct Filter<T> {
    entries: Vec<Entry<T>>,
    source: Vec<T>,
    results: Vec<T>,
}

impl<T> Filter<T> {
    /// An empty accumulator: no predicates, empty buffers.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            source: Vec::new(),
            results: Vec::new(),
        }
    }

    /// An accumulator pre-seeded with an ordered predicate sequence.
    ///
    /// # Example
    ///
    /// ```rust
    /// use finemesh::{BoxPredicate, Filter, Rule};
    ///
    /// let predicates: Vec<BoxPredicate<i32>> =
    ///     vec![Box::new(|x: &i32| *x > 0), Box::new(|x: &i32| *x < 10)];
    /// let mut filter = Filter::from_predicates(predicates);
    /// filter.run(vec![-1, 5, 20], Rule::All);
    /// assert_eq!(filter.results(), &[5]);
    /// ```
    pub fn from_predicates<I>(predicates: I) -> Self
    where
        I: IntoIterator<Item = BoxPredicate<T>>,
    {
        Self {
            entries: predicates
                .into_iter()
                .map(|predicate| Entry {
                    label: None,
                    predicate,
                })
                .collect(),
            source: Vec::new(),
            results: Vec::new(),
        }
    }

    /// Append a predicate to the list.
    pub fn add<P>(&mut self, predicate: P) -> &mut Self
    where
        P: Predicate<T> + 'static,
    {
        self.entries.push(Entry {
            label: None,
            predicate: Box::new(predicate),
        });
        self
    }

    /// Append a predicate carrying a label, making it removable by
    /// value via [`remove`](Filter::remove).
    pub fn add_labeled<P>(&mut self, label: impl Into<String>, predicate: P) -> &mut Self
    where
        P: Predicate<T> + 'static,
    {
        self.entries.push(Entry {
            label: Some(label.into()),
            predicate: Box::new(predicate),
        });
        self
    }

    /// The predicate at `index`.
    ///
    /// Fails with [`FilterError::IndexOutOfRange`] when `index` is
    /// past the end of the list.
    pub fn get(&self, index: usize) -> Result<&dyn Predicate<T>, FilterError> {
        self.entries
            .get(index)
            .map(|entry| entry.predicate.as_ref())
            .ok_or(FilterError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            })
    }

    /// Replace the predicate at `index`, keeping any label on the
    /// slot.
    ///
    /// Fails with [`FilterError::IndexOutOfRange`] when `index` is
    /// past the end of the list.
    pub fn set<P>(&mut self, index: usize, predicate: P) -> Result<&mut Self, FilterError>
    where
        P: Predicate<T> + 'static,
    {
        let len = self.entries.len();
        let entry = self
            .entries
            .get_mut(index)
            .ok_or(FilterError::IndexOutOfRange { index, len })?;
        entry.predicate = Box::new(predicate);
        Ok(self)
    }

    /// Remove the predicate at `index`.
    ///
    /// Fails with [`FilterError::IndexOutOfRange`] when `index` is
    /// past the end of the list.
    pub fn remove_at(&mut self, index: usize) -> Result<&mut Self, FilterError> {
        if index >= self.entries.len() {
            return Err(FilterError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        self.entries.remove(index);
        Ok(self)
    }

    /// Remove the first predicate carrying `label`. No-op when no
    /// predicate carries it.
    pub fn remove(&mut self, label: &str) -> &mut Self {
        if let Some(position) = self
            .entries
            .iter()
            .position(|entry| entry.label.as_deref() == Some(label))
        {
            self.entries.remove(position);
        }
        self
    }

    /// Number of predicates in the list.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the predicate list is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The source buffer as of the last run.
    pub fn source(&self) -> &[T] {
        &self.source
    }

    /// The accumulated results of every run since the last clear.
    pub fn results(&self) -> &[T] {
        &self.results
    }

    /// Clear the result buffer. Call between logically distinct runs.
    pub fn clear_results(&mut self) -> &mut Self {
        self.results.clear();
        self
    }

    /// Drain the result buffer, leaving it empty.
    pub fn take_results(&mut self) -> Vec<T> {
        std::mem::take(&mut self.results)
    }
}

impl<T: Clone> Filter<T> {
    /// Run the accumulated predicates over `source`.
    ///
    /// Replaces the source buffer with the elements of `source` in
    /// iteration order, then appends to the result buffer every
    /// element satisfying `rule`. An empty predicate list passes every
    /// element under either rule; an empty source is not an error.
    /// Chainable.
    pub fn run<I>(&mut self, source: I, rule: Rule) -> &mut Self
    where
        I: IntoIterator<Item = T>,
    {
        self.source.clear();
        self.source.extend(source);

        let Self {
            entries,
            source: data,
            results,
        } = self;

        #[cfg(feature = "tracing")]
        let before = results.len();

        if entries.is_empty() {
            results.extend(data.iter().cloned());
        } else {
            results.extend(
                data.iter()
                    .filter(|value| match rule {
                        Rule::All => entries.iter().all(|entry| entry.predicate.check(value)),
                        Rule::Any => entries.iter().any(|entry| entry.predicate.check(value)),
                    })
                    .cloned(),
            );
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            source_len = data.len(),
            matched = results.len() - before,
            rule = ?rule,
            "filter run"
        );

        self
    }
}

impl<T> Default for Filter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Filter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter")
            .field("predicates", &self.entries.len())
            .field("source", &self.source)
            .field("results", &self.results)
            .finish()
    }
}
