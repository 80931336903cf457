//! The statement value type compared by every scoring strategy.

use serde::{Deserialize, Serialize};

/// A unit of natural-language text being compared.
///
/// Statements are immutable values: comparators read `text` and never
/// mutate it. Token and lemma sets derived from a statement live only for
/// the duration of a single comparison.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Statement {
    /// Raw user-facing text.
    pub text: String,
}

impl Statement {
    /// Create a new statement.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The statement text lower-cased, as every comparator sees it.
    #[must_use]
    pub fn lowercased(&self) -> String {
        self.text.to_lowercase()
    }
}

impl From<&str> for Statement {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Statement {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}
