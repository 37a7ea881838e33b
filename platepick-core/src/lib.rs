//! Core domain types for the platepick recommendation engine.
//!
//! The crate models restaurants, the scoring snapshot the ranker reads
//! ([`Candidate`]), the diner's [`Preferences`], and the [`Scorer`] and
//! [`Catalogue`] seams that let callers plug in scoring models and record
//! sources.
#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod candidate;
pub mod catalogue;
pub mod preferences;
pub mod recommendation;
pub mod restaurant;
pub mod scorer;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use candidate::{Candidate, ScoredCandidate};
pub use catalogue::{Catalogue, MemoryCatalogue};
pub use preferences::{NEUTRAL_SLIDER, Preferences};
pub use recommendation::Recommendation;
pub use restaurant::{
    AXIS_RANGE, DEFAULT_PREP_TIME, DEFAULT_SPICE_LEVEL, PRICE_RANGE, Restaurant, RestaurantError,
};
pub use scorer::Scorer;
