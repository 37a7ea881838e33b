//! Parsing raw recommendation parameters into [`Preferences`].
//!
//! Requests arrive as loosely typed text (query strings, CLI flags). Sliders
//! default to the neutral midpoint when absent or blank and are clamped into
//! range when present, so only text that is not a number at all is rejected.

use std::ops::RangeInclusive;

use platepick_core::{AXIS_RANGE, NEUTRAL_SLIDER, PRICE_RANGE, Preferences};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raw recommendation parameters as received from a caller.
///
/// Field names follow the public query-string parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendQuery {
    /// Desired heaviness, `0..=100`.
    pub heavy: Option<String>,
    /// Hunger level matched against portion size, `0..=100`.
    pub hungry: Option<String>,
    /// Desired formality, `0..=100`.
    pub finedine: Option<String>,
    /// Comma-separated cuisine tags.
    pub cuisine: Option<String>,
    /// Maximum acceptable price level, `1..=4`.
    pub max_price: Option<String>,
    /// Penalise slow kitchens when truthy.
    pub fast_only: Option<String>,
}

/// Errors raised while interpreting a [`RecommendQuery`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum QueryError {
    /// A numeric parameter was not a finite number.
    #[error("{parameter} must be a number, got {value:?}")]
    InvalidNumber {
        /// Parameter name as supplied by the caller.
        parameter: &'static str,
        /// Rejected text.
        value: String,
    },
    /// A boolean parameter was not a recognised flag.
    #[error("{parameter} must be true or false, got {value:?}")]
    InvalidFlag {
        /// Parameter name as supplied by the caller.
        parameter: &'static str,
        /// Rejected text.
        value: String,
    },
}

impl RecommendQuery {
    /// Build a query from `(name, value)` pairs such as decoded query-string
    /// parameters. Unknown names are ignored and later duplicates win.
    ///
    /// # Examples
    /// ```
    /// use platepick_data::RecommendQuery;
    ///
    /// let query = RecommendQuery::from_pairs([("heavy", "80"), ("cuisine", "Thai")]);
    /// let preferences = query.into_preferences().expect("valid query");
    ///
    /// assert_eq!(preferences.want_heavy, 80);
    /// assert_eq!(preferences.want_hungry, 50);
    /// ```
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut query = Self::default();
        for (name, value) in pairs {
            let slot = match name.as_ref() {
                "heavy" => &mut query.heavy,
                "hungry" => &mut query.hungry,
                "finedine" => &mut query.finedine,
                "cuisine" => &mut query.cuisine,
                "max_price" => &mut query.max_price,
                "fast_only" => &mut query.fast_only,
                _ => continue,
            };
            *slot = Some(value.into());
        }
        query
    }

    /// Interpret the raw parameters.
    ///
    /// # Errors
    /// Returns [`QueryError::InvalidNumber`] when a slider or the price cap is
    /// not a finite number, and [`QueryError::InvalidFlag`] when `fast_only`
    /// is not a recognised boolean.
    pub fn into_preferences(self) -> Result<Preferences, QueryError> {
        let mut preferences = Preferences::new(
            slider("heavy", self.heavy.as_deref())?,
            slider("hungry", self.hungry.as_deref())?,
            slider("finedine", self.finedine.as_deref())?,
        );
        let cuisines = split_cuisines(self.cuisine.as_deref());
        if !cuisines.is_empty() {
            preferences = preferences.with_cuisines(cuisines);
        }
        if let Some(cap) = clamped_number("max_price", self.max_price.as_deref(), &PRICE_RANGE)? {
            preferences = preferences.with_max_price(cap);
        }
        if let Some(flag) = flag("fast_only", self.fast_only.as_deref())? {
            preferences = preferences.with_fast_only(flag);
        }
        Ok(preferences)
    }
}

fn slider(parameter: &'static str, raw: Option<&str>) -> Result<i32, QueryError> {
    Ok(clamped_number(parameter, raw, &AXIS_RANGE)?.unwrap_or(NEUTRAL_SLIDER))
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "the value is clamped into an i32 range before the cast"
)]
fn clamped_number(
    parameter: &'static str,
    raw: Option<&str>,
    range: &RangeInclusive<i32>,
) -> Result<Option<i32>, QueryError> {
    let Some(text) = present(raw) else {
        return Ok(None);
    };
    let value = text
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| QueryError::InvalidNumber {
            parameter,
            value: text.to_owned(),
        })?;
    let clamped = value
        .clamp(f64::from(*range.start()), f64::from(*range.end()))
        .round();
    Ok(Some(clamped as i32))
}

fn flag(parameter: &'static str, raw: Option<&str>) -> Result<Option<bool>, QueryError> {
    let Some(text) = present(raw) else {
        return Ok(None);
    };
    match text.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(Some(true)),
        "false" | "0" | "no" | "off" => Ok(Some(false)),
        _ => Err(QueryError::InvalidFlag {
            parameter,
            value: text.to_owned(),
        }),
    }
}

fn split_cuisines(raw: Option<&str>) -> Vec<String> {
    raw.map(|text| {
        text.split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(ToOwned::to_owned)
            .collect()
    })
    .unwrap_or_default()
}

fn present(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|text| !text.is_empty())
}
