//! Token normalization: lower-case, tokenize, filter stop words.
//!
//! This is a deliberately lossy normalization for set-based comparison:
//! duplicates collapse and order is discarded.

use crate::lexicon::Lexicon;
use crate::Result;
use std::collections::BTreeSet;

/// Options for [`token_set`].
#[derive(Debug, Clone)]
pub struct NormalizeOptions<'a> {
    /// Remove stop words for `language` from the result. Default `true`.
    pub exclude_stop_words: bool,
    /// Language code handed to the stop-word provider. Default "english".
    pub language: &'a str,
}

impl Default for NormalizeOptions<'_> {
    fn default() -> Self {
        Self {
            exclude_stop_words: true,
            language: crate::DEFAULT_LANGUAGE,
        }
    }
}

/// Normalize `text` into a duplicate-free token set.
///
/// Lower-cases the text, tokenizes it through the lexicon's tagger
/// (tokenize-only mode), and, when requested, removes every token in the
/// stop-word set for the configured language.
///
/// The result is a `BTreeSet` rather than a hash set: iteration order is
/// stable, which keeps downstream floating-point accumulation
/// deterministic across runs.
///
/// Tagger and stop-word failures propagate; there is nothing to recover
/// locally from a missing language resource.
///
/// # Example
///
/// ```rust
/// use parley::lexicon::Lexicon;
/// use parley::normalize::{token_set, NormalizeOptions};
///
/// let lexicon = Lexicon::default();
/// let tokens = token_set(&lexicon, "The cat is hungry", &NormalizeOptions::default()).unwrap();
///
/// assert!(tokens.contains("cat"));
/// assert!(tokens.contains("hungry"));
/// assert!(!tokens.contains("the"));
/// assert!(!tokens.contains("is"));
/// ```
pub fn token_set(
    lexicon: &Lexicon,
    text: &str,
    options: &NormalizeOptions<'_>,
) -> Result<BTreeSet<String>> {
    let lowered = text.to_lowercase();
    let mut tokens: BTreeSet<String> = lexicon.tagger().tokenize(&lowered)?.into_iter().collect();

    if options.exclude_stop_words {
        let stops = lexicon.stop_words().words(options.language)?;
        tokens.retain(|token| !stops.contains(token));
    }

    Ok(tokens)
}
