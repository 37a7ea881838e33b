//! Score restaurants against a diner's preferences.
//!
//! The `Scorer` trait assigns a score to a [`Candidate`](crate::Candidate)
//! given the diner's [`Preferences`](crate::Preferences).

use crate::{Candidate, Preferences};

/// Calculate a score for a candidate.
///
/// Higher scores indicate a better match. Implementations must be
/// thread-safe (`Send` + `Sync`) so one scorer can serve concurrent
/// requests, and must be deterministic: the same inputs always yield the
/// same score.
///
/// The method is infallible and total. Scores are unbounded: negative
/// values and values above the nominal maximum are meaningful and must be
/// returned as computed rather than clamped.
///
/// # Examples
///
/// ```rust
/// use platepick_core::{Candidate, Preferences, Scorer};
///
/// struct PriceScorer;
///
/// impl Scorer for PriceScorer {
///     fn score(&self, candidate: &Candidate, _preferences: &Preferences) -> f64 {
///         f64::from(5 - candidate.price_level)
///     }
/// }
///
/// let candidate = Candidate::new("1", 0, 0, 0).with_price_level(1);
/// assert_eq!(PriceScorer.score(&candidate, &Preferences::default()), 4.0);
/// ```
pub trait Scorer: Send + Sync {
    /// Return a score for `candidate` according to `preferences`.
    fn score(&self, candidate: &Candidate, preferences: &Preferences) -> f64;
}

impl<S: Scorer + ?Sized> Scorer for &S {
    fn score(&self, candidate: &Candidate, preferences: &Preferences) -> f64 {
        (**self).score(candidate, preferences)
    }
}
