//! Surface-form ratio comparison.

use crate::lexicon::Lexicon;
use crate::{Comparator, Result, Score, Statement};

/// Compares the surface form of two statements with the lexicon's fuzzy
/// ratio scorer.
///
/// Both texts are lower-cased, then handed to the scorer unmodified; the
/// score comes back on the scorer's [0, 100] scale. Deterministic, with no
/// failure modes of its own.
#[derive(Clone)]
pub struct RatioComparator {
    lexicon: Lexicon,
}

impl RatioComparator {
    /// Create a ratio comparator over `lexicon`.
    #[must_use]
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// The raw ratio in [0.0, 100.0].
    #[must_use]
    pub fn ratio(&self, a: &Statement, b: &Statement) -> f64 {
        self.lexicon
            .ratio_scorer()
            .ratio(&a.lowercased(), &b.lowercased())
    }
}

impl Comparator for RatioComparator {
    fn compare(&self, a: &Statement, b: &Statement) -> Result<Score> {
        Ok(Score::Magnitude(self.ratio(a, b)))
    }

    fn name(&self) -> &'static str {
        "ratio"
    }

    fn description(&self) -> &'static str {
        "Surface-form fuzzy ratio in [0, 100]"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comparator() -> RatioComparator {
        RatioComparator::new(Lexicon::default())
    }

    #[test]
    fn test_identical_is_100() {
        let c = comparator();
        let s = Statement::new("the cat is hungry");
        assert_eq!(c.ratio(&s, &s), 100.0);
    }

    #[test]
    fn test_case_insensitive() {
        let c = comparator();
        let upper = c.ratio(&Statement::new("Cat"), &Statement::new("cat"));
        let lower = c.ratio(&Statement::new("cat"), &Statement::new("cat"));
        assert_eq!(upper, lower);
        assert_eq!(upper, 100.0);
    }

    #[test]
    fn test_symmetric() {
        let c = comparator();
        let a = Statement::new("the young cat");
        let b = Statement::new("a hungry dog");
        assert_eq!(c.ratio(&a, &b), c.ratio(&b, &a));
    }

    #[test]
    fn test_compare_wraps_magnitude() {
        let c = comparator();
        let score = c
            .compare(&Statement::new("cat"), &Statement::new("cat"))
            .unwrap();
        assert_eq!(score, Score::Magnitude(100.0));
    }
}
