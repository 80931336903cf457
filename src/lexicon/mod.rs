//! Lexical collaborators and the [`Lexicon`] context object that bundles
//! them.
//!
//! Every comparator needs some subset of five collaborators: a tagger, a
//! stop-word provider, a sense graph, a lemmatizer, and a fuzzy-ratio
//! scorer. Each is a trait so callers can swap in real models or test
//! fakes; each has a lightweight built-in default.
//!
//! Heavyweight resources belong here, loaded **once per process**: a
//! `Lexicon` is built at startup, is immutable afterwards, and clones
//! cheaply (`Arc` per collaborator), so unsynchronized concurrent reads
//! from many comparisons are safe.
//!
//! | Collaborator | Trait | Built-in default |
//! |--------------|-------|------------------|
//! | Tagger | [`Tagger`] | [`HeuristicTagger`] (word tables + suffix rules) |
//! | Stop words | [`StopWords`] | [`EnglishStopWords`] |
//! | Sense graph | [`SenseGraph`] | [`InMemorySenseGraph::empty`] |
//! | Lemmatizer | [`Lemmatizer`] | [`RuleLemmatizer`] |
//! | Ratio scorer | [`RatioScorer`] | [`LevenshteinRatio`] (strsim) |
//!
//! The default sense graph is empty - the semantic comparator scores 0
//! until a caller loads sense data (see [`InMemorySenseGraph::builder`])
//! or plugs in a real lexical database.

mod lemmatizer;
mod ratio;
mod senses;
mod stopwords;
mod tagger;

pub use lemmatizer::{Lemmatizer, RuleLemmatizer};
pub use ratio::{LevenshteinRatio, RatioScorer};
pub use senses::{InMemorySenseGraph, InMemorySenseGraphBuilder, Sense, SenseGraph};
pub use stopwords::{EnglishStopWords, StopWords};
pub use tagger::{HeuristicTagger, PosCategory, PosTag, TaggedToken, Tagger};

use std::sync::Arc;

/// Immutable bundle of lexical collaborators, loaded once per process.
///
/// # Example
///
/// ```rust
/// use parley::lexicon::{InMemorySenseGraph, Lexicon};
///
/// // All defaults:
/// let lexicon = Lexicon::default();
///
/// // With sense data:
/// let lexicon = Lexicon::builder()
///     .sense_graph(
///         InMemorySenseGraph::builder()
///             .senses("cat", ["cat.n.01"])
///             .senses("kitten", ["kitten.n.01"])
///             .link("cat.n.01", "kitten.n.01")
///             .build(),
///     )
///     .build();
/// # let _ = lexicon;
/// ```
#[derive(Clone)]
pub struct Lexicon {
    tagger: Arc<dyn Tagger>,
    stop_words: Arc<dyn StopWords>,
    sense_graph: Arc<dyn SenseGraph>,
    lemmatizer: Arc<dyn Lemmatizer>,
    ratio_scorer: Arc<dyn RatioScorer>,
}

impl Lexicon {
    /// Start building a lexicon; unset collaborators get the defaults.
    #[must_use]
    pub fn builder() -> LexiconBuilder {
        LexiconBuilder::default()
    }

    /// The tagger.
    #[must_use]
    pub fn tagger(&self) -> &dyn Tagger {
        self.tagger.as_ref()
    }

    /// The stop-word provider.
    #[must_use]
    pub fn stop_words(&self) -> &dyn StopWords {
        self.stop_words.as_ref()
    }

    /// The sense graph.
    #[must_use]
    pub fn sense_graph(&self) -> &dyn SenseGraph {
        self.sense_graph.as_ref()
    }

    /// The lemmatizer.
    #[must_use]
    pub fn lemmatizer(&self) -> &dyn Lemmatizer {
        self.lemmatizer.as_ref()
    }

    /// The fuzzy-ratio scorer.
    #[must_use]
    pub fn ratio_scorer(&self) -> &dyn RatioScorer {
        self.ratio_scorer.as_ref()
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl std::fmt::Debug for Lexicon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lexicon").finish_non_exhaustive()
    }
}

/// Builder for [`Lexicon`].
#[derive(Default)]
pub struct LexiconBuilder {
    tagger: Option<Arc<dyn Tagger>>,
    stop_words: Option<Arc<dyn StopWords>>,
    sense_graph: Option<Arc<dyn SenseGraph>>,
    lemmatizer: Option<Arc<dyn Lemmatizer>>,
    ratio_scorer: Option<Arc<dyn RatioScorer>>,
}

impl LexiconBuilder {
    /// Use a custom tagger.
    #[must_use]
    pub fn tagger(mut self, tagger: impl Tagger + 'static) -> Self {
        self.tagger = Some(Arc::new(tagger));
        self
    }

    /// Use a custom stop-word provider.
    #[must_use]
    pub fn stop_words(mut self, stop_words: impl StopWords + 'static) -> Self {
        self.stop_words = Some(Arc::new(stop_words));
        self
    }

    /// Use a custom sense graph.
    #[must_use]
    pub fn sense_graph(mut self, sense_graph: impl SenseGraph + 'static) -> Self {
        self.sense_graph = Some(Arc::new(sense_graph));
        self
    }

    /// Use a custom lemmatizer.
    #[must_use]
    pub fn lemmatizer(mut self, lemmatizer: impl Lemmatizer + 'static) -> Self {
        self.lemmatizer = Some(Arc::new(lemmatizer));
        self
    }

    /// Use a custom fuzzy-ratio scorer.
    #[must_use]
    pub fn ratio_scorer(mut self, ratio_scorer: impl RatioScorer + 'static) -> Self {
        self.ratio_scorer = Some(Arc::new(ratio_scorer));
        self
    }

    /// Finish building; unset collaborators get the defaults.
    #[must_use]
    pub fn build(self) -> Lexicon {
        Lexicon {
            tagger: self.tagger.unwrap_or_else(|| Arc::new(HeuristicTagger::new())),
            stop_words: self
                .stop_words
                .unwrap_or_else(|| Arc::new(EnglishStopWords::new())),
            sense_graph: self
                .sense_graph
                .unwrap_or_else(|| Arc::new(InMemorySenseGraph::empty())),
            lemmatizer: self
                .lemmatizer
                .unwrap_or_else(|| Arc::new(RuleLemmatizer::new())),
            ratio_scorer: self
                .ratio_scorer
                .unwrap_or_else(|| Arc::new(LevenshteinRatio::new())),
        }
    }
}
