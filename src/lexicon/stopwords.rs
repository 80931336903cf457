//! Stop-word lists keyed by language.

use crate::{Error, Result};
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Stop-word provider boundary.
///
/// Returns the stop-word set for a language code, or a
/// [`Error::Resource`] when no list exists for that language.
pub trait StopWords: Send + Sync {
    /// The stop-word set for `language`.
    fn words(&self, language: &str) -> Result<&HashSet<String>>;

    /// Whether `token` is a stop word in `language`.
    fn is_stop_word(&self, language: &str, token: &str) -> Result<bool> {
        Ok(self.words(language)?.contains(token))
    }
}

/// English function words. Deliberately restricted to closed-class words
/// (articles, be-verbs, auxiliaries, prepositions, conjunctions, pronouns,
/// interrogatives): content-ish modifiers like "young" or "very" must
/// survive filtering so they can count as topic words downstream.
const ENGLISH: &[&str] = &[
    // articles & determiners
    "the", "a", "an", "this", "that", "these", "those",
    "some", "any", "each", "every", "no",
    // be-verbs
    "is", "are", "was", "were", "be", "been", "being", "am",
    // auxiliaries
    "have", "has", "had", "do", "does", "did",
    // modals
    "will", "would", "shall", "should", "may", "might", "can", "could", "must",
    // prepositions
    "to", "of", "in", "for", "on", "with", "at", "by", "from", "into",
    "about", "over", "under", "between", "through", "after", "before", "as",
    // conjunctions & negation
    "and", "or", "but", "nor", "not", "if", "then", "than", "so", "yet",
    // pronouns
    "i", "you", "he", "she", "it", "we", "they",
    "me", "him", "her", "us", "them",
    "my", "your", "his", "its", "our", "their",
    // interrogatives
    "who", "whom", "whose", "what", "which", "when", "where", "how", "why",
];

static ENGLISH_SET: Lazy<HashSet<String>> =
    Lazy::new(|| ENGLISH.iter().map(|w| (*w).to_string()).collect());

/// Built-in English stop words.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishStopWords;

impl EnglishStopWords {
    /// Create the provider.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl StopWords for EnglishStopWords {
    fn words(&self, language: &str) -> Result<&HashSet<String>> {
        if language.eq_ignore_ascii_case("english") || language.eq_ignore_ascii_case("en") {
            Ok(&ENGLISH_SET)
        } else {
            Err(Error::resource(format!(
                "no stop-word list for language '{language}'"
            )))
        }
    }
}
