//! Semantic comparison over the lexical sense graph.

use crate::lexicon::{Lexicon, Sense, SenseGraph};
use crate::normalize::{token_set, NormalizeOptions};
use crate::{Comparator, Result, Score, Statement};
use tracing::debug;

/// Scores conceptual overlap between two statements via their sense
/// graphs.
///
/// Each statement is normalized to a stop-word-free token set; for every
/// token pair in the Cartesian product of the two sets, the best-matching
/// sense combination contributes its similarity to a running total. A word
/// carries multiple senses, so taking the per-pair maximum is the most
/// charitable interpretation of each pairing.
///
/// **The result is an unbounded sum, not an average.** Sentences are
/// compared as unordered bags of concepts; a caller that needs a bounded
/// score must normalize by token-set sizes itself. Ranking sums against
/// one fixed input statement is the intended use.
///
/// Cost is `O(|tokens_a| x |tokens_b| x avg_senses^2)` with no internal
/// early exit; a caller wanting bounded latency must impose an external
/// deadline.
#[derive(Clone)]
pub struct SemanticComparator {
    lexicon: Lexicon,
    language: String,
}

impl SemanticComparator {
    /// Create a semantic comparator over `lexicon` with the default
    /// language.
    #[must_use]
    pub fn new(lexicon: Lexicon) -> Self {
        Self::with_language(lexicon, crate::DEFAULT_LANGUAGE)
    }

    /// Create a semantic comparator with an explicit language code for
    /// stop-word filtering.
    #[must_use]
    pub fn with_language(lexicon: Lexicon, language: impl Into<String>) -> Self {
        Self {
            lexicon,
            language: language.into(),
        }
    }

    /// The accumulated similarity total, >= 0.
    ///
    /// An empty token set on either side (all stop words, or empty text)
    /// yields an empty Cartesian product and a total of 0.0 - a valid
    /// "no overlap" result, not an error.
    pub fn score(&self, a: &Statement, b: &Statement) -> Result<f64> {
        let options = NormalizeOptions {
            exclude_stop_words: true,
            language: &self.language,
        };
        let tokens_a = token_set(&self.lexicon, &a.text, &options)?;
        let tokens_b = token_set(&self.lexicon, &b.text, &options)?;

        let graph = self.lexicon.sense_graph();
        let mut total = 0.0;
        let mut scored_pairs = 0usize;

        for token_a in &tokens_a {
            let senses_a = graph.senses(token_a);
            if senses_a.is_empty() {
                continue;
            }
            for token_b in &tokens_b {
                let senses_b = graph.senses(token_b);
                if senses_b.is_empty() {
                    continue;
                }
                // A pair whose similarities are all undefined contributes
                // 0, same as a defined-but-zero pair; the sum cannot tell
                // them apart and does not need to.
                total += best_sense_similarity(graph, &senses_a, &senses_b).unwrap_or(0.0);
                scored_pairs += 1;
            }
        }

        debug!(
            tokens_a = tokens_a.len(),
            tokens_b = tokens_b.len(),
            scored_pairs,
            total,
            "semantic accumulation complete"
        );
        Ok(total)
    }
}

/// The best similarity over every sense combination of two tokens.
///
/// Returns `None` when no sense pair has a defined similarity - distinct
/// from `Some(0.0)`, which means the graph *did* relate the senses but at
/// the bottom of its scale.
#[must_use]
pub fn best_sense_similarity(
    graph: &dyn SenseGraph,
    senses_a: &[Sense],
    senses_b: &[Sense],
) -> Option<f64> {
    let mut best: Option<f64> = None;
    for s1 in senses_a {
        for s2 in senses_b {
            if let Some(similarity) = graph.path_similarity(s1, s2) {
                best = Some(match best {
                    Some(current) if current >= similarity => current,
                    _ => similarity,
                });
            }
        }
    }
    best
}

impl Comparator for SemanticComparator {
    fn compare(&self, a: &Statement, b: &Statement) -> Result<Score> {
        Ok(Score::Magnitude(self.score(a, b)?))
    }

    fn name(&self) -> &'static str {
        "semantic"
    }

    fn description(&self) -> &'static str {
        "Sense-graph similarity sum (unbounded, >= 0)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::InMemorySenseGraph;

    fn pets_lexicon() -> Lexicon {
        // cat.n.01 -- feline.n.01 -- dog.n.01
        Lexicon::builder()
            .sense_graph(
                InMemorySenseGraph::builder()
                    .senses("cat", ["cat.n.01"])
                    .senses("kitten", ["kitten.n.01", "kitten.n.02"])
                    .senses("dog", ["dog.n.01"])
                    .link("cat.n.01", "feline.n.01")
                    .link("feline.n.01", "dog.n.01")
                    .link("cat.n.01", "kitten.n.01")
                    .build(),
            )
            .build()
    }

    #[test]
    fn test_empty_graph_scores_zero() {
        let c = SemanticComparator::new(Lexicon::default());
        let score = c
            .score(&Statement::new("the cat"), &Statement::new("a dog"))
            .unwrap();
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_identical_token_scores_one() {
        let c = SemanticComparator::new(pets_lexicon());
        // Single shared token "cat": best sense pair is (cat.n.01, cat.n.01) = 1.0
        let score = c
            .score(&Statement::new("cat"), &Statement::new("cat"))
            .unwrap();
        assert_eq!(score, 1.0);
    }

    #[test]
    fn test_related_tokens_use_path_similarity() {
        let c = SemanticComparator::new(pets_lexicon());
        // cat -> feline -> dog: two edges, 1/(1+2)
        let score = c
            .score(&Statement::new("cat"), &Statement::new("dog"))
            .unwrap();
        assert!((score - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_best_sense_wins() {
        let c = SemanticComparator::new(pets_lexicon());
        // kitten.n.01 is adjacent to cat.n.01 (0.5); kitten.n.02 is
        // disconnected (undefined) and must not drag the maximum down.
        let score = c
            .score(&Statement::new("kitten"), &Statement::new("cat"))
            .unwrap();
        assert_eq!(score, 0.5);
    }

    #[test]
    fn test_totals_accumulate_over_pairs() {
        let c = SemanticComparator::new(pets_lexicon());
        // Tokens {cat, dog} vs {cat}: pairs (cat,cat)=1.0, (dog,cat)=1/3
        let score = c
            .score(&Statement::new("cat dog"), &Statement::new("cat"))
            .unwrap();
        assert!((score - (1.0 + 1.0 / 3.0)).abs() < 1e-12);
    }

    #[test]
    fn test_empty_side_scores_zero() {
        let c = SemanticComparator::new(pets_lexicon());
        let score = c
            .score(&Statement::new(""), &Statement::new("cat"))
            .unwrap();
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_idempotent() {
        let c = SemanticComparator::new(pets_lexicon());
        let a = Statement::new("the cat and the dog");
        let b = Statement::new("a kitten");
        let first = c.score(&a, &b).unwrap();
        let second = c.score(&a, &b).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_undefined_similarity_is_none_not_zero() {
        let lexicon = pets_lexicon();
        let graph = lexicon.sense_graph();
        let orphan: Sense = "kitten.n.02".into();
        let cat: Sense = "cat.n.01".into();
        assert_eq!(
            best_sense_similarity(graph, &[orphan], &[cat]),
            None
        );
    }
}
