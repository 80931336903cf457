//! # parley
//!
//! Statement similarity scoring for conversational matching.
//!
//! Given two natural-language statements, parley produces a similarity
//! score a matching engine can use to pick the closest known statement to
//! a new input. Three interchangeable strategies:
//!
//! | Comparator | Output | Scale | Good for |
//! |------------|--------|-------|----------|
//! | [`RatioComparator`] | magnitude | [0, 100] | Typo-tolerant surface match |
//! | [`SemanticComparator`] | magnitude | unbounded sum | Conceptual overlap via a sense graph |
//! | [`JaccardComparator`] | decision | true/false | Topic-equivalence gate over noun lemmas |
//!
//! ## Quick Start
//!
//! ```rust
//! use parley::{Comparator, Lexicon, RatioComparator, Score, Statement};
//!
//! let lexicon = Lexicon::default();
//! let ratio = RatioComparator::new(lexicon);
//!
//! let score = ratio
//!     .compare(&Statement::new("Hello"), &Statement::new("hello"))
//!     .unwrap();
//! assert_eq!(score, Score::Magnitude(100.0));
//! ```
//!
//! ## Lexical resources
//!
//! Comparators never call tagging or sense-graph code directly: they go
//! through the [`Lexicon`], an immutable context object built once at
//! process start. Every collaborator behind it is a trait with a shipped
//! default, so any piece can be replaced with a real model or a test fake
//! (see [`lexicon`]).
//!
//! ## Design Philosophy
//!
//! - **Strategy objects, not function branching**: all comparators
//!   implement the sealed [`Comparator`] trait; engines hold
//!   `Vec<Box<dyn Comparator>>`.
//! - **Resources load once**: no lazy per-call initialization of lexical
//!   data; the `Lexicon` is read-only and safe to share across threads.
//! - **Failures propagate**: a missing language resource is an error, not
//!   a silent zero. The single recovered failure is the jaccard
//!   comparator's empty-union case, which reports "no match".

#![warn(missing_docs)]

pub mod compare;
mod error;
pub mod lexicon;
pub mod normalize;
mod statement;
pub mod types;

// =============================================================================
// Sealed Trait Pattern
// =============================================================================
//
// The Comparator trait is "sealed" - it can only be implemented by types
// in this crate. This keeps the set of scoring strategies closed so the
// trait can grow methods in minor versions, while callers still use it
// freely as a trait bound. MockComparator exists so downstream tests can
// fake a strategy without breaking the seal.

mod sealed {
    /// Sealed trait marker. Cannot be implemented outside this crate.
    pub trait Sealed {}

    impl Sealed for super::RatioComparator {}
    impl Sealed for super::SemanticComparator {}
    impl Sealed for super::JaccardComparator {}
    impl Sealed for super::MockComparator {}
}

pub use compare::{
    best_sense_similarity, JaccardComparator, JaccardConfig, RatioComparator, SemanticComparator,
};
pub use error::{Error, Result};
pub use lexicon::Lexicon;
pub use statement::Statement;
pub use types::{Score, Threshold};

/// Default language code handed to language-keyed collaborators.
pub const DEFAULT_LANGUAGE: &str = "english";

/// Trait for statement similarity strategies.
///
/// All comparators implement this trait for consistent usage. It is
/// **sealed**: only types defined in this crate implement it, which lets
/// the library add methods without breaking changes. If you need custom
/// scoring logic in tests, use [`MockComparator`].
///
/// Scores are comparator-specific (see [`Score`]); implementations must be
/// deterministic and keep no mutable state across calls.
pub trait Comparator: sealed::Sealed + Send + Sync {
    /// Compare two statements and produce a score.
    fn compare(&self, a: &Statement, b: &Statement) -> Result<Score>;

    /// Short identifier for this strategy.
    fn name(&self) -> &'static str {
        "unknown"
    }

    /// One-line description of this strategy.
    fn description(&self) -> &'static str {
        "Unknown comparator"
    }
}

/// A mock comparator for testing purposes.
///
/// Returns a fixed score regardless of input, so downstream matching
/// engines can exercise their selection logic without lexical resources.
///
/// # Example
///
/// ```rust
/// use parley::{Comparator, MockComparator, Score, Statement};
///
/// let mock = MockComparator::new("test-mock").with_score(Score::Magnitude(42.0));
/// let score = mock
///     .compare(&Statement::new("a"), &Statement::new("b"))
///     .unwrap();
/// assert_eq!(score, Score::Magnitude(42.0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MockComparator {
    name: &'static str,
    score: Score,
}

impl MockComparator {
    /// Create a mock that scores every pair as `Magnitude(0.0)`.
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            score: Score::Magnitude(0.0),
        }
    }

    /// Set the fixed score to return.
    #[must_use]
    pub fn with_score(mut self, score: Score) -> Self {
        self.score = score;
        self
    }
}

impl Comparator for MockComparator {
    fn compare(&self, _a: &Statement, _b: &Statement) -> Result<Score> {
        Ok(self.score)
    }

    fn name(&self) -> &'static str {
        self.name
    }

    fn description(&self) -> &'static str {
        "Mock comparator for testing"
    }
}

/// All three comparators over one lexicon, default configuration.
///
/// The returned order is ratio, semantic, jaccard.
///
/// # Example
///
/// ```rust
/// use parley::{suite, Lexicon, Statement};
///
/// let comparators = suite(&Lexicon::default());
/// let a = Statement::new("The cat is hungry.");
/// let b = Statement::new("The cat is very hungry.");
///
/// for comparator in &comparators {
///     let score = comparator.compare(&a, &b).unwrap();
///     println!("{}: {}", comparator.name(), score);
/// }
/// ```
#[must_use]
pub fn suite(lexicon: &Lexicon) -> Vec<Box<dyn Comparator>> {
    vec![
        Box::new(RatioComparator::new(lexicon.clone())),
        Box::new(SemanticComparator::new(lexicon.clone())),
        Box::new(JaccardComparator::new(lexicon.clone())),
    ]
}

pub mod prelude {
    //! Commonly used items, re-exported for convenience.
    //!
    //! ```rust
    //! use parley::prelude::*;
    //!
    //! let comparator = RatioComparator::new(Lexicon::default());
    //! let score = comparator
    //!     .compare(&Statement::new("cat"), &Statement::new("cart"))
    //!     .unwrap();
    //! assert!(score.magnitude().unwrap() > 50.0);
    //! ```
    pub use crate::compare::{
        JaccardComparator, JaccardConfig, RatioComparator, SemanticComparator,
    };
    pub use crate::error::{Error, Result};
    pub use crate::lexicon::Lexicon;
    pub use crate::types::{Score, Threshold};
    pub use crate::{suite, Comparator, MockComparator, Statement};
}
