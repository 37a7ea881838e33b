//! Scoring and ranking for platepick restaurant recommendations.
//!
//! The score is a fixed additive model evaluated in this order:
//!
//! 1. **Axis distance.** For heaviness, hunger against portion size, and
//!    formality, add `100 - |want - have|`. A perfect match on all three
//!    scores 300.
//! 2. **Cuisine.** When the request names cuisines, add 50 if any requested
//!    tag matches any of the restaurant's tags (ignoring case), otherwise
//!    subtract 50.
//! 3. **Price.** When the request caps the price level, add 5 for a
//!    restaurant within budget, otherwise subtract 10.
//! 4. **Speed.** When the request is fast-only and preparation takes more
//!    than 20 minutes, subtract half the preparation time.
//! 5. **Rounding.** Round half-up to two decimal places.
//!
//! Scores are never clamped; out-of-range inputs simply move the result
//! further from the nominal `0..=355` band. [`score_and_sort`] ranks a
//! candidate set with a stable descending sort and keeps the best
//! [`TOP_K`].
//!
//! # Examples
//!
//! ```
//! use platepick_core::{Candidate, Preferences};
//! use platepick_scorer::calculate_score;
//!
//! let candidate = Candidate::new("1", 50, 50, 50)
//!     .with_price_level(2)
//!     .with_cuisines(["Italian"])
//!     .with_avg_prep_time(30);
//! let preferences = Preferences::new(50, 50, 50)
//!     .with_cuisines(["italian"])
//!     .with_max_price(2);
//!
//! assert_eq!(calculate_score(&candidate, &preferences), 355.0);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use platepick_core::{Candidate, Preferences, Scorer};

mod cuisine;
mod rank;
mod types;

pub use cuisine::CuisineSet;
pub use rank::{rank_positions, rank_with, score_and_sort};
pub use types::{ScoreBreakdown, round_to_cents};

/// Best possible contribution of a single axis.
pub const AXIS_MAX: i32 = 100;
/// Added when a requested cuisine matches.
pub const CUISINE_MATCH_BONUS: i32 = 50;
/// Subtracted when cuisines were requested and none matches.
pub const CUISINE_MISS_PENALTY: i32 = 50;
/// Added when the price level is within the requested cap.
pub const WITHIN_BUDGET_BONUS: i32 = 5;
/// Subtracted when the price level exceeds the requested cap.
pub const OVER_BUDGET_PENALTY: i32 = 10;
/// Preparation times at or below this many minutes are never penalised.
pub const FAST_PREP_THRESHOLD_MINUTES: u32 = 20;
/// Number of ranked entries returned.
pub const TOP_K: usize = 12;

/// Score one candidate against a diner's preferences.
///
/// Total over every input: never panics, never clamps.
#[must_use]
pub fn calculate_score(candidate: &Candidate, preferences: &Preferences) -> f64 {
    score_breakdown(candidate, preferences).total()
}

/// Decompose a candidate's score into its individual terms.
///
/// # Examples
///
/// ```
/// use platepick_core::{Candidate, Preferences};
/// use platepick_scorer::score_breakdown;
///
/// let candidate = Candidate::new("slow", 50, 50, 50).with_avg_prep_time(40);
/// let breakdown = score_breakdown(&candidate, &Preferences::default().with_fast_only(true));
///
/// assert_eq!(breakdown.base(), 300.0);
/// assert_eq!(breakdown.prep_time_penalty, 20.0);
/// assert!(breakdown.cuisine.is_none());
/// assert_eq!(breakdown.total(), 280.0);
/// ```
#[must_use]
pub fn score_breakdown(candidate: &Candidate, preferences: &Preferences) -> ScoreBreakdown {
    let requested = CuisineSet::requested_by(preferences);
    breakdown_with(candidate, preferences, requested.as_ref())
}

/// `Scorer` implementation of the weighted-distance model.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct DistanceScorer;

impl Scorer for DistanceScorer {
    fn score(&self, candidate: &Candidate, preferences: &Preferences) -> f64 {
        calculate_score(candidate, preferences)
    }
}

pub(crate) fn breakdown_with(
    candidate: &Candidate,
    preferences: &Preferences,
    requested: Option<&CuisineSet>,
) -> ScoreBreakdown {
    ScoreBreakdown {
        heaviness: axis_term(preferences.want_heavy, candidate.heaviness),
        portion: axis_term(preferences.want_hungry, candidate.portion_size),
        fine_dining: axis_term(preferences.want_finedine, candidate.fine_dining),
        cuisine: requested.map(|set| cuisine_adjustment(set, &candidate.cuisines)),
        price: preferences
            .max_price
            .map(|cap| price_adjustment(candidate.price_level, cap)),
        prep_time_penalty: prep_time_penalty(preferences.wants_fast(), candidate.avg_prep_time),
    }
}

/// `100 - |want - have|`, widened to `f64` so extreme inputs cannot overflow.
#[expect(
    clippy::float_arithmetic,
    reason = "distance terms are computed in f64 to stay total"
)]
pub(crate) fn axis_term(want: i32, have: i32) -> f64 {
    f64::from(AXIS_MAX) - (f64::from(want) - f64::from(have)).abs()
}

fn cuisine_adjustment(requested: &CuisineSet, offered: &[String]) -> f64 {
    if requested.matches_any(offered) {
        f64::from(CUISINE_MATCH_BONUS)
    } else {
        -f64::from(CUISINE_MISS_PENALTY)
    }
}

fn price_adjustment(price_level: i32, max_price: i32) -> f64 {
    if price_level <= max_price {
        f64::from(WITHIN_BUDGET_BONUS)
    } else {
        -f64::from(OVER_BUDGET_PENALTY)
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "the speed penalty is half the preparation time"
)]
fn prep_time_penalty(fast_only: bool, avg_prep_time: u32) -> f64 {
    if fast_only && avg_prep_time > FAST_PREP_THRESHOLD_MINUTES {
        f64::from(avg_prep_time) / 2.0
    } else {
        0.0
    }
}
