//! Test-only fixtures shared by unit and behaviour tests across the
//! workspace.

use crate::{Candidate, Preferences, Restaurant, Scorer};

/// `Scorer` returning the same value for every candidate.
///
/// Useful for asserting that ranking preserves input order among ties.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ConstantScorer(pub f64);

impl Scorer for ConstantScorer {
    fn score(&self, _candidate: &Candidate, _preferences: &Preferences) -> f64 {
        self.0
    }
}

/// `Scorer` that ranks by heaviness alone.
#[derive(Debug, Copy, Clone, Default)]
pub struct HeavinessScorer;

impl Scorer for HeavinessScorer {
    fn score(&self, candidate: &Candidate, _preferences: &Preferences) -> f64 {
        f64::from(candidate.heaviness)
    }
}

/// The balanced candidate used throughout the scoring examples: every axis
/// at 50, price level 2, Italian, 30 minutes to prepare.
#[must_use]
pub fn balanced_candidate(id: &str) -> Candidate {
    Candidate::new(id, 50, 50, 50)
        .with_price_level(2)
        .with_cuisines(["Italian"])
        .with_avg_prep_time(30)
}

/// A valid restaurant record whose candidate matches [`balanced_candidate`].
#[must_use]
pub fn balanced_restaurant(id: &str, name: &str) -> Restaurant {
    let mut restaurant = Restaurant::new(id, name);
    restaurant.price_level = 2;
    restaurant.cuisines = vec!["Italian".to_owned()];
    restaurant.avg_prep_time = 30;
    restaurant
}

/// `count` balanced candidates whose heaviness steps up by five from zero.
#[must_use]
pub fn heaviness_ladder(count: u8) -> Vec<Candidate> {
    (0..count)
        .map(|step| {
            let mut candidate = balanced_candidate(&step.to_string());
            candidate.heaviness = i32::from(step) * 5;
            candidate
        })
        .collect()
}
