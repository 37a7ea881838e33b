//! Data access and request handling for the platepick engine.
//!
//! Responsibilities:
//! - Parse raw recommendation parameters into [`Preferences`].
//! - Import and export restaurant catalogues as CSV.
//! - Throttle callers through an injected [`RateLimiter`].
//! - Run the recommendation pipeline over any [`Catalogue`].
//!
//! Boundaries:
//! - Do not encode scoring rules (those live in `platepick-scorer`).
//! - Keep blocking I/O off async executors; CSV handling is async over
//!   `tokio` readers and writers.
//!
//! Invariants:
//! - No global mutable state; rate-limit windows live in the limiter value.
//!
//! [`Preferences`]: platepick_core::Preferences
//! [`Catalogue`]: platepick_core::Catalogue
#![forbid(unsafe_code)]

pub mod csv;
pub mod cuisines;
pub mod query;
pub mod ratelimit;
pub mod recommend;

pub use csv::{CsvError, CsvImport, CsvRow, ImportReport, RowError, export_csv, import_csv};
pub use cuisines::{encode_cuisine_list, parse_cuisine_list};
pub use query::{QueryError, RecommendQuery};
pub use ratelimit::{
    Clock, NoRateLimit, RateDecision, RateLimitConfig, RateLimiter, SystemClock, UNKNOWN_CLIENT,
    WindowedRateLimiter,
};
pub use recommend::{RecommendError, Recommender};
