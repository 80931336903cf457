//! Witness types for comparator outputs and configuration.
//!
//! # Design Philosophy: Parse, Don't Validate
//!
//! Instead of repeatedly validating that a match threshold is in [0, 1],
//! parse it once into a [`Threshold`]. The type system then guarantees the
//! invariant holds everywhere the value is used.
//!
//! | Type | Domain | When to Use |
//! |------|--------|-------------|
//! | [`Score`] | f64 magnitude or bool decision | What every comparator returns |
//! | [`Threshold`] | [0, 1] | Jaccard match cutoff |
//!
//! The two magnitude-valued comparators produce scores on *different*
//! scales (ratio: [0, 100]; semantic: unbounded sum). `Score` deliberately
//! does not pretend these are comparable; a matching engine that mixes
//! strategies must rank within one strategy or normalize itself.

mod score;
mod threshold;

pub use score::Score;
pub use threshold::{Threshold, ThresholdError};

/// Static assertions for struct layouts and invariants.
///
/// Compile-time checks; if any assertion fails, compilation fails.
#[doc(hidden)]
pub mod static_checks {
    use super::*;

    // Threshold is zero-cost (same size as f64)
    const _: () = assert!(std::mem::size_of::<Threshold>() == std::mem::size_of::<f64>());
    const _: () = assert!(std::mem::align_of::<Threshold>() == std::mem::align_of::<f64>());

    // Score stays small enough to pass by value everywhere
    const _: () = assert!(std::mem::size_of::<Score>() <= 16);
}
