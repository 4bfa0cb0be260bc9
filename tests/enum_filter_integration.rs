//! End-to-end filtering over an enum's defined variants.

use finemesh::meta::EnumMeta;
use finemesh::predicate::{has_flag, lacks_flag, PredicateExt};
use finemesh::reflect_enum;
use finemesh::{EnumFilter, Rule};

#[derive(Clone, Copy, PartialEq, Debug)]
enum Cat {
    Orange = 1,
    White = 2,
    Black = 4,
    Brown = 16,
    LongFur = 32,
}
reflect_enum!(Cat { Orange, White, Black, Brown, LongFur });

#[test]
fn orange_short_fur_scenario() {
    let mut filter = EnumFilter::<Cat>::new();
    filter
        .add_labeled("orange", has_flag(Cat::Orange))
        .add_labeled("short_fur", lacks_flag(Cat::LongFur))
        .run(Rule::All);

    assert_eq!(filter.results(), &[Cat::Orange]);
    assert!(filter.any());
    assert!(!filter.all());
    assert_eq!(filter.sum(), 55);
}

#[test]
fn sum_is_independent_of_the_predicate_list() {
    let mut filter = EnumFilter::<Cat>::new();
    assert_eq!(filter.sum(), 55);

    filter.add(|_: &Cat| false).run(Rule::All);
    assert!(!filter.any());
    assert_eq!(filter.sum(), 55);
}

#[test]
fn fresh_run_without_predicates_matches_all() {
    let mut filter = EnumFilter::<Cat>::new();
    filter.run(Rule::All);
    assert!(filter.all());
    assert_eq!(filter.results(), Cat::VARIANTS);
}

#[test]
fn excluding_predicate_makes_all_false() {
    let mut filter = EnumFilter::<Cat>::new();
    filter.add(lacks_flag(Cat::LongFur)).run(Rule::All);
    assert!(!filter.all());
    assert_eq!(
        filter.results(),
        &[Cat::Orange, Cat::White, Cat::Black, Cat::Brown]
    );
}

#[test]
fn any_rule_takes_the_union() {
    let mut filter = EnumFilter::<Cat>::new();
    filter
        .add(has_flag(Cat::Orange))
        .add(has_flag(Cat::White))
        .run(Rule::Any);
    assert_eq!(filter.results(), &[Cat::Orange, Cat::White]);
}

#[test]
fn combined_predicate_through_combinators() {
    let mut filter = EnumFilter::<Cat>::new();
    filter
        .add(has_flag(Cat::Orange).or(has_flag(Cat::White)).not())
        .run(Rule::All);
    assert_eq!(filter.results(), &[Cat::Black, Cat::Brown, Cat::LongFur]);
}

#[test]
fn repeated_runs_append_until_cleared() {
    let mut filter = EnumFilter::<Cat>::new();
    filter.run(Rule::All).run(Rule::All);
    assert_eq!(filter.results().len(), Cat::VARIANTS.len() * 2);
    assert!(!filter.all());

    filter.clear_results().run(Rule::All);
    assert!(filter.all());
}

#[test]
fn removing_a_labeled_predicate_between_runs() {
    let mut filter = EnumFilter::<Cat>::new();
    filter
        .add_labeled("short_fur", lacks_flag(Cat::LongFur))
        .run(Rule::All);
    assert!(!filter.all());

    filter.clear_results().remove("short_fur").run(Rule::All);
    assert!(filter.all());
}

#[test]
fn variant_metadata_is_available_to_predicates() {
    let mut filter = EnumFilter::<Cat>::new();
    filter
        .add(|cat: &Cat| cat.name().len() > 5)
        .run(Rule::All);
    assert_eq!(filter.results(), &[Cat::Orange, Cat::LongFur]);
}
