//! Facade crate for the platepick restaurant recommendation engine.
//!
//! This crate re-exports the core domain types and the scoring functions, and
//! exposes the catalogue import/export and request pipeline behind the `data`
//! feature.
//!
//! ```
//! use platepick::{Preferences, Restaurant, score_and_sort};
//!
//! let trattoria = Restaurant::new("trattoria", "Trattoria");
//! let ranked = score_and_sort(&[trattoria.candidate()], &Preferences::default());
//!
//! assert_eq!(ranked.len(), 1);
//! ```

#![forbid(unsafe_code)]

pub use platepick_core::{
    Candidate, Catalogue, MemoryCatalogue, Preferences, Recommendation, Restaurant,
    RestaurantError, ScoredCandidate, Scorer,
};

pub use platepick_scorer::{
    DistanceScorer, ScoreBreakdown, TOP_K, calculate_score, rank_positions, score_and_sort,
    score_breakdown,
};

#[cfg(feature = "data")]
pub use platepick_data::{
    CsvError, CsvImport, ImportReport, RecommendError, RecommendQuery, Recommender, RowError,
    WindowedRateLimiter, export_csv, import_csv,
};
