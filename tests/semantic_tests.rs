//! Integration tests for the semantic comparator against an in-memory
//! sense graph.

use parley::lexicon::{InMemorySenseGraph, Lexicon};
use parley::{Comparator, SemanticComparator, Statement};

/// A small taxonomy:
///
/// ```text
/// animal.n.01
///   ├── feline.n.01 ── cat.n.01
///   └── canine.n.01 ── dog.n.01
/// food.n.01 ── fruit.n.01 ── apple.n.01
/// ```
fn taxonomy() -> Lexicon {
    Lexicon::builder()
        .sense_graph(
            InMemorySenseGraph::builder()
                .senses("cat", ["cat.n.01"])
                .senses("dog", ["dog.n.01"])
                .senses("animal", ["animal.n.01"])
                .senses("apple", ["apple.n.01"])
                .senses("fruit", ["fruit.n.01"])
                .link("animal.n.01", "feline.n.01")
                .link("animal.n.01", "canine.n.01")
                .link("feline.n.01", "cat.n.01")
                .link("canine.n.01", "dog.n.01")
                .link("food.n.01", "fruit.n.01")
                .link("fruit.n.01", "apple.n.01")
                .build(),
        )
        .build()
}

fn score(lexicon: &Lexicon, a: &str, b: &str) -> f64 {
    SemanticComparator::new(lexicon.clone())
        .score(&Statement::new(a), &Statement::new(b))
        .unwrap()
}

#[test]
fn identical_words_score_one_per_pair() {
    let lexicon = taxonomy();
    assert_eq!(score(&lexicon, "cat", "cat"), 1.0);
}

#[test]
fn related_words_score_by_path_length() {
    let lexicon = taxonomy();
    // cat -> feline -> animal -> canine -> dog: 4 edges, 1/(1+4)
    assert!((score(&lexicon, "cat", "dog") - 0.2).abs() < 1e-12);
}

#[test]
fn unrelated_domains_score_zero() {
    let lexicon = taxonomy();
    // cat.n.01 and apple.n.01 live in disconnected components: every
    // sense pair is undefined, so the pair contributes exactly 0.
    assert_eq!(score(&lexicon, "cat", "apple"), 0.0);
}

#[test]
fn unknown_words_are_skipped() {
    let lexicon = taxonomy();
    // "xylophone" has no senses; only the (cat, cat) pair scores.
    assert_eq!(score(&lexicon, "cat xylophone", "cat"), 1.0);
}

#[test]
fn stop_words_do_not_contribute() {
    let lexicon = taxonomy();
    assert_eq!(
        score(&lexicon, "the cat", "a cat"),
        score(&lexicon, "cat", "cat")
    );
}

#[test]
fn totals_sum_over_the_cartesian_product() {
    let lexicon = taxonomy();
    // {cat, dog} x {animal}: cat->animal = 2 edges (1/3),
    // dog->animal = 2 edges (1/3).
    let total = score(&lexicon, "cat dog", "animal");
    assert!((total - 2.0 / 3.0).abs() < 1e-12);
}

#[test]
fn no_recognizable_senses_yields_exactly_zero() {
    let lexicon = taxonomy();
    assert_eq!(score(&lexicon, "qwerty uiop", "zxcv bnm"), 0.0);
}

#[test]
fn empty_statements_yield_zero() {
    let lexicon = taxonomy();
    assert_eq!(score(&lexicon, "", ""), 0.0);
    assert_eq!(score(&lexicon, "", "cat"), 0.0);
}

#[test]
fn symmetric_when_graph_is_symmetric() {
    // path_similarity in InMemorySenseGraph is symmetric by construction,
    // so the sum is too. This is a property of the graph, not of the
    // comparator.
    let lexicon = taxonomy();
    assert_eq!(
        score(&lexicon, "the cat and dog", "an animal"),
        score(&lexicon, "an animal", "the cat and dog")
    );
}

#[test]
fn compare_returns_magnitude() {
    let lexicon = taxonomy();
    let comparator = SemanticComparator::new(lexicon);
    let result = comparator
        .compare(&Statement::new("cat"), &Statement::new("dog"))
        .unwrap();
    assert!((result.magnitude().unwrap() - 0.2).abs() < 1e-12);
}
