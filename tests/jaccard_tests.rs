//! Integration tests for the lemma-overlap comparator.

use parley::{Comparator, JaccardComparator, JaccardConfig, Lexicon, Score, Statement, Threshold};

fn worked_example() -> (Statement, Statement) {
    (
        Statement::new("The young cat is hungry."),
        Statement::new("The cat is very hungry."),
    )
}

#[test]
fn worked_example_is_exactly_half() {
    // Retained lemma sets: {young, cat, hungry} vs {cat, very, hungry}.
    // Two lemmas shared out of a four-lemma union.
    let comparator = JaccardComparator::new(Lexicon::default());
    let (a, b) = worked_example();
    let ratio = comparator.ratio(&a, &b).unwrap();
    assert!((ratio - 0.5).abs() < 1e-12);
}

#[test]
fn worked_example_matches_at_default_threshold() {
    let comparator = JaccardComparator::new(Lexicon::default());
    let (a, b) = worked_example();
    assert_eq!(
        comparator.compare(&a, &b).unwrap(),
        Score::Decision(true)
    );
}

#[test]
fn worked_example_fails_just_above_half() {
    let comparator = JaccardComparator::with_config(
        Lexicon::default(),
        JaccardConfig {
            threshold: Threshold::new(0.51).unwrap(),
            ..Default::default()
        },
    );
    let (a, b) = worked_example();
    assert_eq!(
        comparator.compare(&a, &b).unwrap(),
        Score::Decision(false)
    );
}

#[test]
fn symmetry() {
    let comparator = JaccardComparator::new(Lexicon::default());
    let (a, b) = worked_example();
    assert_eq!(
        comparator.ratio(&a, &b).unwrap(),
        comparator.ratio(&b, &a).unwrap()
    );
}

#[test]
fn all_stop_word_statements_are_no_match_not_error() {
    let comparator = JaccardComparator::new(Lexicon::default());
    let a = Statement::new("It is what it is.");
    let b = Statement::new("That was then.");
    assert_eq!(
        comparator.compare(&a, &b).unwrap(),
        Score::Decision(false)
    );
}

#[test]
fn empty_statements_are_no_match_not_error() {
    let comparator = JaccardComparator::new(Lexicon::default());
    let a = Statement::new("");
    let b = Statement::new("");
    assert_eq!(
        comparator.compare(&a, &b).unwrap(),
        Score::Decision(false)
    );
}

#[test]
fn threshold_zero_matches_everything_with_any_union() {
    let comparator = JaccardComparator::with_config(
        Lexicon::default(),
        JaccardConfig {
            threshold: Threshold::MIN,
            ..Default::default()
        },
    );
    // Disjoint topics still meet a zero threshold (ratio 0.0 >= 0.0).
    let a = Statement::new("The cat is hungry.");
    let b = Statement::new("Storms battered the coast.");
    assert_eq!(comparator.compare(&a, &b).unwrap(), Score::Decision(true));
}

#[test]
fn unknown_language_propagates_as_error() {
    let comparator = JaccardComparator::with_config(
        Lexicon::default(),
        JaccardConfig {
            threshold: Threshold::HALF,
            language: "klingon".to_string(),
        },
    );
    let (a, b) = worked_example();
    assert!(comparator.compare(&a, &b).is_err());
}

#[test]
fn punctuation_never_counts_as_a_lemma() {
    let comparator = JaccardComparator::new(Lexicon::default());
    let a = Statement::new("cat!!!");
    let b = Statement::new("...cat?");
    assert_eq!(comparator.ratio(&a, &b).unwrap(), 1.0);
}
