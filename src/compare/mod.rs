//! Similarity comparison strategies.
//!
//! Each comparator implements the [`Comparator`](crate::Comparator) trait
//! for consistent usage; a matching engine holds a list of trait objects
//! rather than branching on function identity.
//!
//! # Comparator Comparison
//!
//! | Comparator | Output | Range | Collaborators used |
//! |------------|--------|-------|--------------------|
//! | [`RatioComparator`] | magnitude | [0, 100] | ratio scorer |
//! | [`SemanticComparator`] | magnitude | unbounded sum >= 0 | tagger, stop words, sense graph |
//! | [`JaccardComparator`] | decision | true/false | tagger, stop words, lemmatizer |
//!
//! # When to Use What
//!
//! - **Typo-tolerant surface match**: [`RatioComparator`] - cheap, no
//!   lexical resources beyond the scorer.
//! - **Conceptual overlap ranking**: [`SemanticComparator`] - needs a
//!   populated sense graph; scores are sums, rank them against one fixed
//!   input rather than comparing across inputs.
//! - **Topic-equivalence gate**: [`JaccardComparator`] - boolean decision,
//!   usable directly as a matching predicate.
//!
//! # Quick Start
//!
//! ```rust
//! use parley::{Comparator, JaccardComparator, Lexicon, Statement};
//!
//! let comparator = JaccardComparator::new(Lexicon::default());
//! let score = comparator
//!     .compare(
//!         &Statement::new("The young cat is hungry."),
//!         &Statement::new("The cat is very hungry."),
//!     )
//!     .unwrap();
//! assert_eq!(score.decision(), Some(true));
//! ```

mod jaccard;
mod ratio;
mod semantic;

pub use jaccard::{JaccardComparator, JaccardConfig};
pub use ratio::RatioComparator;
pub use semantic::{best_sense_similarity, SemanticComparator};
