//! Lemmatization: reducing an inflected token to its dictionary form.

use crate::lexicon::PosCategory;

/// Lemmatizer boundary.
///
/// Takes a token and the part-of-speech category it was tagged with, and
/// returns the base form. Must be total: unknown shapes pass through
/// unchanged rather than failing.
pub trait Lemmatizer: Send + Sync {
    /// Lemmatize `token` given its part-of-speech category.
    fn lemmatize(&self, token: &str, pos: PosCategory) -> String;
}

/// Rule-based English lemmatizer: per-category suffix stripping.
///
/// Covers regular inflection only (plural nouns, verb -ing/-ed/-s forms,
/// adjective -ier/-iest comparatives). Irregular forms pass through;
/// adverbs and `Other` are returned unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleLemmatizer;

impl RuleLemmatizer {
    /// Create a new rule lemmatizer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn noun(token: &str) -> String {
        let n = token.len();
        if n > 4 && token.ends_with("ies") {
            return format!("{}y", &token[..n - 3]);
        }
        for suffix in ["ses", "xes", "zes", "ches", "shes"] {
            if n > suffix.len() + 1 && token.ends_with(suffix) {
                return token[..n - 2].to_string();
            }
        }
        // -ss, -us, -is endings are not plural markers
        if token.ends_with("ss") || token.ends_with("us") || token.ends_with("is") {
            return token.to_string();
        }
        if n > 3 && token.ends_with('s') {
            return token[..n - 1].to_string();
        }
        token.to_string()
    }

    fn verb(token: &str) -> String {
        let n = token.len();
        if n > 4 && token.ends_with("ies") {
            return format!("{}y", &token[..n - 3]);
        }
        if n > 4 && token.ends_with("ied") {
            return format!("{}y", &token[..n - 3]);
        }
        if n > 5 && token.ends_with("ing") {
            return undouble(&token[..n - 3]);
        }
        if n > 4 && token.ends_with("ed") {
            return undouble(&token[..n - 2]);
        }
        if n > 3 && token.ends_with('s') && !token.ends_with("ss") {
            return token[..n - 1].to_string();
        }
        token.to_string()
    }

    fn adjective(token: &str) -> String {
        let n = token.len();
        if n > 5 && token.ends_with("iest") {
            return format!("{}y", &token[..n - 4]);
        }
        if n > 4 && token.ends_with("ier") {
            return format!("{}y", &token[..n - 3]);
        }
        token.to_string()
    }
}

/// Collapse a doubled final consonant left behind by suffix stripping
/// ("runn" -> "run"). `ll` and `ss` stay ("telling" -> "tell").
fn undouble(stem: &str) -> String {
    let chars: Vec<char> = stem.chars().collect();
    if let [.., a, b] = chars.as_slice() {
        if a == b && matches!(*b, 'b' | 'd' | 'g' | 'm' | 'n' | 'p' | 'r' | 't') {
            return stem[..stem.len() - b.len_utf8()].to_string();
        }
    }
    stem.to_string()
}

impl Lemmatizer for RuleLemmatizer {
    fn lemmatize(&self, token: &str, pos: PosCategory) -> String {
        match pos {
            PosCategory::Noun => Self::noun(token),
            PosCategory::Verb => Self::verb(token),
            PosCategory::Adjective => Self::adjective(token),
            PosCategory::Adverb | PosCategory::Other => token.to_string(),
        }
    }
}
