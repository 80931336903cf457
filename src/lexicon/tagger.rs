//! Tokenization and part-of-speech tagging.
//!
//! The [`Tagger`] trait is the boundary to whatever tagging model a caller
//! wants to plug in. The built-in [`HeuristicTagger`] is a zero-model
//! fallback: closed-class word tables plus suffix rules, always available.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw part-of-speech label emitted by a tagger, Penn-Treebank style
/// ("NN", "JJ", "RB", "VBZ", ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PosTag(String);

impl PosTag {
    /// Create a tag from a raw label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The raw label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PosTag {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Normalized coarse part-of-speech category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PosCategory {
    /// Adjective (Penn `J*`)
    Adjective,
    /// Verb (Penn `V*`, modals)
    Verb,
    /// Noun (Penn `N*`)
    Noun,
    /// Adverb (Penn `R*`)
    Adverb,
    /// Anything else (determiners, prepositions, pronouns, ...)
    Other,
}

impl PosCategory {
    /// Map a raw tag to its category by first-letter convention:
    /// J -> Adjective, V -> Verb, N -> Noun, R -> Adverb, else `Other`.
    #[must_use]
    pub fn from_tag(tag: &PosTag) -> Self {
        match tag.as_str().chars().next() {
            Some('J') => PosCategory::Adjective,
            Some('V') => PosCategory::Verb,
            Some('N') => PosCategory::Noun,
            Some('R') => PosCategory::Adverb,
            _ => PosCategory::Other,
        }
    }

    /// Like [`from_tag`](Self::from_tag), but unknown tags default to
    /// `Noun`. This is the recall-maximizing fallback the lemma-overlap
    /// comparator uses: an unrecognized word is more useful treated as a
    /// topic word than dropped.
    #[must_use]
    pub fn from_tag_or_noun(tag: &PosTag) -> Self {
        match Self::from_tag(tag) {
            PosCategory::Other => PosCategory::Noun,
            category => category,
        }
    }
}

/// A token paired with the raw tag the tagger assigned to it.
///
/// Order is positional: the sequence must be preserved until each token's
/// part of speech has been resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    /// The token text.
    pub text: String,
    /// The raw part-of-speech label.
    pub tag: PosTag,
}

impl TaggedToken {
    /// Create a tagged token.
    #[must_use]
    pub fn new(text: impl Into<String>, tag: impl Into<PosTag>) -> Self {
        Self {
            text: text.into(),
            tag: tag.into(),
        }
    }
}

/// Tokenization + part-of-speech tagging boundary.
///
/// Implementations must be deterministic: identical input text yields an
/// identical tagged sequence.
pub trait Tagger: Send + Sync {
    /// Tag `text` into an ordered sequence of (token, tag) pairs.
    fn tag(&self, text: &str) -> Result<Vec<TaggedToken>>;

    /// Tokenize-only mode: the token sequence with tags discarded.
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.tag(text)?.into_iter().map(|t| t.text).collect())
    }
}

// =============================================================================
// Heuristic tagger (zero-model default)
// =============================================================================

/// Closed-class words with fixed tags. Lookup is case-insensitive.
const CLOSED_CLASS: &[(&str, &str)] = &[
    // determiners
    ("the", "DT"), ("a", "DT"), ("an", "DT"), ("this", "DT"), ("that", "DT"),
    ("these", "DT"), ("those", "DT"), ("some", "DT"), ("any", "DT"),
    ("each", "DT"), ("every", "DT"), ("no", "DT"),
    // pronouns
    ("i", "PRP"), ("you", "PRP"), ("he", "PRP"), ("she", "PRP"),
    ("it", "PRP"), ("we", "PRP"), ("they", "PRP"), ("me", "PRP"),
    ("him", "PRP"), ("her", "PRP"), ("us", "PRP"), ("them", "PRP"),
    ("my", "PRP$"), ("your", "PRP$"), ("his", "PRP$"), ("its", "PRP$"),
    ("our", "PRP$"), ("their", "PRP$"),
    // prepositions
    ("of", "IN"), ("in", "IN"), ("on", "IN"), ("at", "IN"), ("to", "IN"),
    ("for", "IN"), ("with", "IN"), ("by", "IN"), ("from", "IN"),
    ("into", "IN"), ("about", "IN"), ("over", "IN"), ("under", "IN"),
    ("between", "IN"), ("through", "IN"), ("after", "IN"), ("before", "IN"),
    ("as", "IN"),
    // conjunctions
    ("and", "CC"), ("or", "CC"), ("but", "CC"), ("nor", "CC"), ("yet", "CC"),
    // be / have / do forms
    ("is", "VBZ"), ("are", "VBP"), ("was", "VBD"), ("were", "VBD"),
    ("be", "VB"), ("been", "VBN"), ("being", "VBG"), ("am", "VBP"),
    ("has", "VBZ"), ("have", "VBP"), ("had", "VBD"),
    ("do", "VBP"), ("does", "VBZ"), ("did", "VBD"),
    // modals
    ("will", "MD"), ("would", "MD"), ("shall", "MD"), ("should", "MD"),
    ("may", "MD"), ("might", "MD"), ("can", "MD"), ("could", "MD"),
    ("must", "MD"),
    // negation
    ("not", "RB"),
];

/// Adjective-marking suffixes.
const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "ive", "ish", "less", "able", "ible"];

/// Zero-model part-of-speech tagger using word tables and suffix rules.
///
/// Words outside the closed-class tables and suffix rules tag as `NN`.
/// That noun bias is intentional: downstream filtering treats nouns as
/// topic words, and an unknown word is more often a content word than not.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicTagger;

impl HeuristicTagger {
    /// Create a new heuristic tagger.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn classify(word: &str) -> &'static str {
        let lower = word.to_lowercase();

        if let Some((_, tag)) = CLOSED_CLASS.iter().find(|(w, _)| *w == lower) {
            return tag;
        }

        if lower.chars().all(|c| c.is_ascii_digit()) {
            return "CD";
        }

        if lower.len() > 3 && lower.ends_with("ly") {
            return "RB";
        }
        if lower.len() > 4 && lower.ends_with("ing") {
            return "VBG";
        }
        if lower.len() > 3 && lower.ends_with("ed") {
            return "VBD";
        }
        if ADJECTIVE_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
            return "JJ";
        }

        "NN"
    }
}

impl Tagger for HeuristicTagger {
    fn tag(&self, text: &str) -> Result<Vec<TaggedToken>> {
        Ok(split_words(text)
            .into_iter()
            .map(|word| TaggedToken::new(word, Self::classify(word)))
            .collect())
    }
}

/// Split text into word tokens: runs of alphanumerics plus `'` and `-`.
fn split_words(text: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut start = None;

    for (i, c) in text.char_indices() {
        if c.is_alphanumeric() || c == '\'' || c == '-' {
            if start.is_none() {
                start = Some(i);
            }
        } else if let Some(s) = start.take() {
            words.push(&text[s..i]);
        }
    }
    if let Some(s) = start {
        words.push(&text[s..]);
    }

    words
}
