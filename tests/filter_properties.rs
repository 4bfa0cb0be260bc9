//! Property-based tests for the predicate accumulator.

use finemesh::{Filter, Rule};
use proptest::prelude::*;

fn is_even(x: &i32) -> bool {
    x % 2 == 0
}

fn is_positive(x: &i32) -> bool {
    *x > 0
}

proptest! {
    #[test]
    fn prop_all_rule_is_conjunction(values in prop::collection::vec(any::<i32>(), 0..100)) {
        let mut filter: Filter<i32> = Filter::new();
        filter.add(is_even).add(is_positive);
        filter.run(values.clone(), Rule::All);

        let expected: Vec<i32> = values
            .into_iter()
            .filter(|x| is_even(x) && is_positive(x))
            .collect();
        prop_assert_eq!(filter.results(), expected.as_slice());
    }

    #[test]
    fn prop_any_rule_is_disjunction(values in prop::collection::vec(any::<i32>(), 0..100)) {
        let mut filter: Filter<i32> = Filter::new();
        filter.add(is_even).add(is_positive);
        filter.run(values.clone(), Rule::Any);

        let expected: Vec<i32> = values
            .into_iter()
            .filter(|x| is_even(x) || is_positive(x))
            .collect();
        prop_assert_eq!(filter.results(), expected.as_slice());
    }

    #[test]
    fn prop_empty_list_passes_the_full_source(
        values in prop::collection::vec(any::<i32>(), 0..100),
        use_any in any::<bool>(),
    ) {
        let rule = if use_any { Rule::Any } else { Rule::All };
        let mut filter: Filter<i32> = Filter::new();
        filter.run(values.clone(), rule);
        prop_assert_eq!(filter.results(), values.as_slice());
    }

    #[test]
    fn prop_runs_append_match_counts(
        first in prop::collection::vec(any::<i32>(), 0..50),
        second in prop::collection::vec(any::<i32>(), 0..50),
    ) {
        let mut filter: Filter<i32> = Filter::new();
        filter.add(is_even);

        filter.run(first, Rule::All);
        let after_first = filter.results().len();

        filter.run(second.clone(), Rule::All);
        let second_matches = second.iter().filter(|x| is_even(x)).count();
        prop_assert_eq!(filter.results().len(), after_first + second_matches);
    }

    #[test]
    fn prop_add_then_remove_at_restores_behavior(
        values in prop::collection::vec(any::<i32>(), 0..100),
    ) {
        let mut baseline: Filter<i32> = Filter::new();
        baseline.add(is_even);
        baseline.run(values.clone(), Rule::All);

        let mut round_trip: Filter<i32> = Filter::new();
        round_trip.add(is_even);
        round_trip.add(is_positive);
        round_trip.remove_at(round_trip.len() - 1).unwrap();
        round_trip.run(values, Rule::All);

        prop_assert_eq!(round_trip.results(), baseline.results());
    }

    #[test]
    fn prop_results_are_subset_of_source(
        values in prop::collection::vec(any::<i32>(), 0..100),
        use_any in any::<bool>(),
    ) {
        let rule = if use_any { Rule::Any } else { Rule::All };
        let mut filter: Filter<i32> = Filter::new();
        filter.add(is_even).run(values, rule);

        for matched in filter.results() {
            prop_assert!(filter.source().contains(matched));
        }
    }
}
