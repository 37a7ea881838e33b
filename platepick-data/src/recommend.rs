//! The recommendation pipeline.
//!
//! A request is throttled, parsed into [`Preferences`], scored against every
//! restaurant in the catalogue, and mapped back to display records in ranked
//! order.

use std::time::Duration;

use platepick_core::{Catalogue, Preferences, Recommendation, Restaurant};
use platepick_scorer::rank_positions;
use thiserror::Error;

use crate::query::{QueryError, RecommendQuery};
use crate::ratelimit::{NoRateLimit, RateDecision, RateLimiter};

/// Errors returned by [`Recommender::recommend`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum RecommendError {
    /// The client exhausted its request allowance.
    #[error("rate limit exceeded; retry in {}s", retry_after.as_secs())]
    RateLimited {
        /// Time until the client's window resets.
        retry_after: Duration,
    },
    /// The request parameters could not be interpreted.
    #[error("invalid parameters: {source}")]
    InvalidQuery {
        /// Parsing failure.
        #[from]
        source: QueryError,
    },
}

/// Ranks a catalogue against incoming requests.
///
/// # Examples
/// ```
/// use platepick_core::{MemoryCatalogue, Restaurant};
/// use platepick_data::{RecommendQuery, Recommender};
///
/// let mut light = Restaurant::new("salad-co", "Salad Co");
/// light.heaviness = 10;
/// let mut heavy = Restaurant::new("bbq-pit", "BBQ Pit");
/// heavy.heaviness = 95;
///
/// let recommender = Recommender::new(MemoryCatalogue::with_restaurants([light, heavy]));
/// let query = RecommendQuery::from_pairs([("heavy", "90")]);
/// let items = recommender.recommend("unknown", &query).expect("recommendations");
///
/// assert_eq!(items[0].name, "BBQ Pit");
/// ```
#[derive(Debug, Clone)]
pub struct Recommender<C, L = NoRateLimit> {
    catalogue: C,
    limiter: L,
}

impl<C: Catalogue> Recommender<C, NoRateLimit> {
    /// Create a recommender that never throttles.
    pub const fn new(catalogue: C) -> Self {
        Self::with_limiter(catalogue, NoRateLimit)
    }
}

impl<C: Catalogue, L: RateLimiter> Recommender<C, L> {
    /// Create a recommender guarded by `limiter`.
    pub const fn with_limiter(catalogue: C, limiter: L) -> Self {
        Self { catalogue, limiter }
    }

    /// Catalogue being ranked.
    pub const fn catalogue(&self) -> &C {
        &self.catalogue
    }

    /// Handle one request from `client`.
    ///
    /// # Errors
    /// Returns [`RecommendError::RateLimited`] when the limiter refuses the
    /// client, and [`RecommendError::InvalidQuery`] when the parameters do
    /// not parse. Throttling is checked first, so a refused client's
    /// parameters are never inspected.
    pub fn recommend(
        &self,
        client: &str,
        query: &RecommendQuery,
    ) -> Result<Vec<Recommendation>, RecommendError> {
        if let RateDecision::Limited { retry_after } = self.limiter.check(client) {
            return Err(RecommendError::RateLimited { retry_after });
        }
        let preferences = query.clone().into_preferences()?;
        Ok(self.rank(&preferences))
    }

    /// Rank the catalogue for already-parsed preferences, without
    /// throttling.
    #[must_use]
    pub fn rank(&self, preferences: &Preferences) -> Vec<Recommendation> {
        let restaurants: Vec<Restaurant> = self.catalogue.restaurants().collect();
        let candidates: Vec<_> = restaurants.iter().map(Restaurant::candidate).collect();
        rank_positions(&candidates, preferences)
            .into_iter()
            .filter_map(|(index, score)| {
                restaurants
                    .get(index)
                    .map(|restaurant| Recommendation::from_restaurant(restaurant, score))
            })
            .collect()
    }
}
