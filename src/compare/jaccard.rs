//! Lemma-overlap (Jaccard) comparison.

use crate::lexicon::{Lexicon, PosCategory};
use crate::types::Threshold;
use crate::{Comparator, Result, Score, Statement};
use std::collections::BTreeSet;
use tracing::debug;

/// Configuration for [`JaccardComparator`], fixed at construction.
#[derive(Debug, Clone)]
pub struct JaccardConfig {
    /// Minimum Jaccard ratio counted as a match. Default 0.5.
    pub threshold: Threshold,
    /// Language code for the stop-word provider. Default "english".
    pub language: String,
}

impl Default for JaccardConfig {
    fn default() -> Self {
        Self {
            threshold: Threshold::HALF,
            language: crate::DEFAULT_LANGUAGE.to_string(),
        }
    }
}

/// Compares the noun lemmas of two statements and decides match/no-match.
///
/// Restricting the comparison to nouns approximates comparing the *topics*
/// of two statements rather than their phrasing, and the boolean output
/// makes this comparator a binary gate usable directly as a matching
/// predicate - unlike the two magnitude-valued comparators.
///
/// # Worked example
///
/// With the built-in collaborators and threshold 0.5:
///
/// ```rust
/// use parley::{JaccardComparator, Lexicon, Statement};
///
/// let comparator = JaccardComparator::new(Lexicon::default());
/// let a = Statement::new("The young cat is hungry.");
/// let b = Statement::new("The cat is very hungry.");
///
/// // Retained lemma sets: {young, cat, hungry} and {cat, very, hungry}.
/// // Intersection 2, union 4, ratio 0.5 - at the default threshold this
/// // is a match.
/// assert!(comparator.is_match(&a, &b).unwrap());
/// ```
#[derive(Clone)]
pub struct JaccardComparator {
    lexicon: Lexicon,
    config: JaccardConfig,
}

impl JaccardComparator {
    /// Create a jaccard comparator with the default configuration.
    #[must_use]
    pub fn new(lexicon: Lexicon) -> Self {
        Self::with_config(lexicon, JaccardConfig::default())
    }

    /// Create a jaccard comparator with an explicit configuration.
    #[must_use]
    pub fn with_config(lexicon: Lexicon, config: JaccardConfig) -> Self {
        Self { lexicon, config }
    }

    /// The configuration in effect.
    #[must_use]
    pub fn config(&self) -> &JaccardConfig {
        &self.config
    }

    /// The Jaccard ratio of the two statements' retained lemma sets.
    ///
    /// An empty union (neither statement retained any noun) cannot produce
    /// a ratio; that single failure is recovered locally as 0.0 - "no
    /// match" - rather than surfacing an arithmetic error. Tagger and
    /// stop-word resource failures still propagate.
    pub fn ratio(&self, a: &Statement, b: &Statement) -> Result<f64> {
        let lemmas_a = self.lemma_set(&a.text)?;
        let lemmas_b = self.lemma_set(&b.text)?;

        let union = lemmas_a.union(&lemmas_b).count();
        if union == 0 {
            debug!("empty lemma union, reporting no match");
            return Ok(0.0);
        }
        let intersection = lemmas_a.intersection(&lemmas_b).count();

        Ok(intersection as f64 / union as f64)
    }

    /// Whether the Jaccard ratio meets the configured threshold.
    pub fn is_match(&self, a: &Statement, b: &Statement) -> Result<bool> {
        Ok(self.ratio(a, b)? >= self.config.threshold.get())
    }

    /// Tag, filter to nouns, and lemmatize one statement's tokens.
    fn lemma_set(&self, text: &str) -> Result<BTreeSet<String>> {
        let lowered = text.to_lowercase();
        let tagged = self.lexicon.tagger().tag(&lowered)?;
        let stops = self.lexicon.stop_words().words(&self.config.language)?;

        let mut lemmas = BTreeSet::new();
        for token in tagged {
            // Unknown tags count as nouns to maximize recall.
            let category = PosCategory::from_tag_or_noun(&token.tag);
            if category != PosCategory::Noun {
                continue;
            }
            let stripped = token
                .text
                .trim_matches(|c: char| c.is_ascii_punctuation());
            // Exclusion set: stop words, punctuation, the empty string.
            if stripped.is_empty()
                || stripped.chars().all(|c| c.is_ascii_punctuation())
                || stops.contains(stripped)
            {
                continue;
            }
            lemmas.insert(self.lexicon.lemmatizer().lemmatize(stripped, category));
        }
        Ok(lemmas)
    }
}

impl Comparator for JaccardComparator {
    fn compare(&self, a: &Statement, b: &Statement) -> Result<Score> {
        Ok(Score::Decision(self.is_match(a, b)?))
    }

    fn name(&self) -> &'static str {
        "jaccard"
    }

    fn description(&self) -> &'static str {
        "Noun-lemma Jaccard overlap, thresholded to a match decision"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comparator() -> JaccardComparator {
        JaccardComparator::new(Lexicon::default())
    }

    #[test]
    fn test_worked_example_ratio() {
        let c = comparator();
        let a = Statement::new("The young cat is hungry.");
        let b = Statement::new("The cat is very hungry.");
        let ratio = c.ratio(&a, &b).unwrap();
        assert!((ratio - 0.5).abs() < 1e-12, "expected 0.5, got {ratio}");
    }

    #[test]
    fn test_worked_example_thresholds() {
        let a = Statement::new("The young cat is hungry.");
        let b = Statement::new("The cat is very hungry.");

        let at_half = JaccardComparator::new(Lexicon::default());
        assert!(at_half.is_match(&a, &b).unwrap());

        let just_above = JaccardComparator::with_config(
            Lexicon::default(),
            JaccardConfig {
                threshold: Threshold::new(0.51).unwrap(),
                ..Default::default()
            },
        );
        assert!(!just_above.is_match(&a, &b).unwrap());
    }

    #[test]
    fn test_identical_topics_match() {
        let c = comparator();
        let a = Statement::new("The cat is hungry.");
        let b = Statement::new("the CAT is HUNGRY");
        assert_eq!(c.ratio(&a, &b).unwrap(), 1.0);
        assert!(c.is_match(&a, &b).unwrap());
    }

    #[test]
    fn test_plural_folds_onto_singular() {
        let c = comparator();
        let a = Statement::new("The cats sleep.");
        let b = Statement::new("The cat sleeps.");
        assert_eq!(c.ratio(&a, &b).unwrap(), 1.0);
    }

    #[test]
    fn test_empty_union_is_no_match_not_error() {
        let c = comparator();
        let a = Statement::new("The is a the.");
        let b = Statement::new("Is the a is?");
        assert_eq!(c.ratio(&a, &b).unwrap(), 0.0);
        assert!(!c.is_match(&a, &b).unwrap());
    }

    #[test]
    fn test_punctuation_only_statements() {
        let c = comparator();
        let a = Statement::new("?!");
        let b = Statement::new("...");
        assert!(!c.is_match(&a, &b).unwrap());
    }

    #[test]
    fn test_disjoint_topics_do_not_match() {
        let c = comparator();
        let a = Statement::new("The cat is hungry.");
        let b = Statement::new("The weather report looks grim.");
        assert!(!c.is_match(&a, &b).unwrap());
    }

    #[test]
    fn test_verbs_and_adverbs_filtered_out() {
        let c = comparator();
        // "running" tags VBG, "quickly" tags RB: neither is a noun, so
        // only "dog" is retained from each side.
        let a = Statement::new("The dog running quickly");
        let b = Statement::new("The dog");
        assert_eq!(c.ratio(&a, &b).unwrap(), 1.0);
    }

    #[test]
    fn test_idempotent() {
        let c = comparator();
        let a = Statement::new("The young cat is hungry.");
        let b = Statement::new("The cat is very hungry.");
        let first = c.ratio(&a, &b).unwrap();
        let second = c.ratio(&a, &b).unwrap();
        assert_eq!(first, second);
    }
}
