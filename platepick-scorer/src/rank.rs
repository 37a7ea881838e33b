//! Deterministic top-K selection over scored candidates.
#![forbid(unsafe_code)]

use std::cmp::Ordering;

use platepick_core::{Candidate, Preferences, ScoredCandidate, Scorer};

use crate::{CuisineSet, TOP_K, breakdown_with};

/// Score every candidate and return the best [`TOP_K`] in descending order.
///
/// Sorting is stable: candidates with equal scores keep their relative input
/// order. The input slice is left untouched and an empty slice yields an
/// empty result.
///
/// # Examples
///
/// ```
/// use platepick_core::{Candidate, Preferences};
/// use platepick_scorer::score_and_sort;
///
/// let candidates = [
///     Candidate::new("light", 20, 40, 30),
///     Candidate::new("balanced", 50, 50, 50),
/// ];
/// let ranked = score_and_sort(&candidates, &Preferences::default());
///
/// assert_eq!(ranked[0].id(), "balanced");
/// assert_eq!(ranked[0].score, 300.0);
/// ```
#[must_use]
pub fn score_and_sort(candidates: &[Candidate], preferences: &Preferences) -> Vec<ScoredCandidate> {
    resolve(candidates, rank_positions(candidates, preferences))
}

/// Score every candidate and return the input positions of the best
/// [`TOP_K`], paired with their scores, in descending order.
///
/// Callers that keep richer records alongside the candidate slice use the
/// positions to decorate results without relying on ids being unique.
///
/// # Examples
///
/// ```
/// use platepick_core::{Candidate, Preferences};
/// use platepick_scorer::rank_positions;
///
/// let candidates = [
///     Candidate::new("same", 20, 40, 30),
///     Candidate::new("same", 50, 50, 50),
/// ];
/// let ranked = rank_positions(&candidates, &Preferences::default());
///
/// assert_eq!(ranked[0], (1, 300.0));
/// ```
#[must_use]
pub fn rank_positions(candidates: &[Candidate], preferences: &Preferences) -> Vec<(usize, f64)> {
    let requested = CuisineSet::requested_by(preferences);
    let scores = candidates
        .iter()
        .map(|candidate| breakdown_with(candidate, preferences, requested.as_ref()).total());
    top_positions(scores, candidates.len())
}

/// Rank candidates with an arbitrary [`Scorer`] under the same ordering
/// contract as [`score_and_sort`].
#[must_use]
pub fn rank_with<S>(
    scorer: &S,
    candidates: &[Candidate],
    preferences: &Preferences,
) -> Vec<ScoredCandidate>
where
    S: Scorer + ?Sized,
{
    let scores = candidates
        .iter()
        .map(|candidate| scorer.score(candidate, preferences));
    resolve(candidates, top_positions(scores, candidates.len()))
}

fn resolve(candidates: &[Candidate], positions: Vec<(usize, f64)>) -> Vec<ScoredCandidate> {
    positions
        .into_iter()
        .filter_map(|(index, score)| {
            candidates
                .get(index)
                .map(|candidate| ScoredCandidate::new(candidate.clone(), score))
        })
        .collect()
}

fn top_positions<I>(scores: I, considered: usize) -> Vec<(usize, f64)>
where
    I: Iterator<Item = f64>,
{
    let mut ordered: Vec<(usize, f64)> = scores.enumerate().collect();
    // `sort_by` is stable, which keeps ties in input order.
    ordered.sort_by(|(_, lhs), (_, rhs)| descending(*lhs, *rhs));
    ordered.truncate(TOP_K);
    log::debug!(
        "ranked {considered} candidates, returning top {}",
        ordered.len()
    );
    ordered
}

/// NaN sorts below every other score.
fn descending(lhs: f64, rhs: f64) -> Ordering {
    sort_key(rhs).total_cmp(&sort_key(lhs))
}

const fn sort_key(score: f64) -> f64 {
    if score.is_nan() {
        f64::NEG_INFINITY
    } else {
        score
    }
}
