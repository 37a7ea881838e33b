//! Per-term score decomposition.
#![forbid(unsafe_code)]

/// The individual terms of a candidate's score.
///
/// Optional adjustments are `None` when the request did not enable the
/// corresponding filter, which is distinct from an adjustment of zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    /// Axis-distance term for heaviness.
    pub heaviness: f64,
    /// Axis-distance term for hunger against portion size.
    pub portion: f64,
    /// Axis-distance term for formality.
    pub fine_dining: f64,
    /// Cuisine bonus or penalty, when cuisines were requested.
    pub cuisine: Option<f64>,
    /// Budget bonus or penalty, when a price cap was set.
    pub price: Option<f64>,
    /// Amount subtracted for slow preparation; zero when not applicable.
    pub prep_time_penalty: f64,
}

impl ScoreBreakdown {
    /// Sum of the three axis-distance terms.
    #[expect(
        clippy::float_arithmetic,
        reason = "the base score is a sum of distance terms"
    )]
    #[must_use]
    pub fn base(&self) -> f64 {
        self.heaviness + self.portion + self.fine_dining
    }

    /// Unrounded score, accumulated in model order.
    #[expect(
        clippy::float_arithmetic,
        reason = "adjustments are added to the base score"
    )]
    #[must_use]
    pub fn raw_total(&self) -> f64 {
        let mut score = self.base();
        if let Some(cuisine) = self.cuisine {
            score += cuisine;
        }
        if let Some(price) = self.price {
            score += price;
        }
        score - self.prep_time_penalty
    }

    /// Final score rounded to two decimal places.
    #[must_use]
    pub fn total(&self) -> f64 {
        round_to_cents(self.raw_total())
    }
}

/// Round half-up to two decimal places: `floor(value * 100 + 0.5) / 100`.
#[expect(
    clippy::float_arithmetic,
    reason = "rounding scales by one hundred and back"
)]
#[must_use]
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0
}
