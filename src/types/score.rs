//! The output type shared by all comparators.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The result of comparing two statements.
///
/// A score is either a raw similarity magnitude or a boolean match
/// decision, depending on the comparator that produced it:
///
/// - ratio comparator: `Magnitude` in [0.0, 100.0]
/// - semantic comparator: `Magnitude` >= 0.0, an **unbounded sum**
/// - lemma-overlap comparator: `Decision`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Score {
    /// A raw similarity magnitude. The scale is comparator-specific.
    Magnitude(f64),
    /// A binary match decision.
    Decision(bool),
}

impl Score {
    /// The magnitude, if this score carries one.
    #[must_use]
    pub fn magnitude(self) -> Option<f64> {
        match self {
            Score::Magnitude(v) => Some(v),
            Score::Decision(_) => None,
        }
    }

    /// The match decision, if this score carries one.
    #[must_use]
    pub fn decision(self) -> Option<bool> {
        match self {
            Score::Magnitude(_) => None,
            Score::Decision(d) => Some(d),
        }
    }

    /// Collapse to a float: magnitudes pass through, decisions map to
    /// 1.0 / 0.0.
    ///
    /// Useful for sorting mixed results, with the caveat from the module
    /// docs: magnitudes from different comparators are not on one scale.
    #[must_use]
    pub fn as_f64(self) -> f64 {
        match self {
            Score::Magnitude(v) => v,
            Score::Decision(true) => 1.0,
            Score::Decision(false) => 0.0,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Magnitude(v) => write!(f, "{v:.4}"),
            Score::Decision(d) => write!(f, "{d}"),
        }
    }
}
