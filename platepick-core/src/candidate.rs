//! Scoring snapshots of restaurants.
//!
//! A [`Candidate`] carries only the attributes the ranking model reads. The
//! full record lives in [`Restaurant`](crate::Restaurant) and is projected
//! into a candidate with [`Restaurant::candidate`](crate::Restaurant::candidate).

/// The scoring-relevant attributes of a restaurant.
///
/// The three dish axes are nominally `0..=100` and the price level `1..=4`,
/// but the type stores them as signed integers so scorers stay total over
/// whatever a collaborator hands them.
///
/// # Examples
/// ```
/// use platepick_core::Candidate;
///
/// let candidate = Candidate::new("trattoria", 70, 85, 45)
///     .with_price_level(2)
///     .with_cuisines(["Italian", "Pizza"])
///     .with_avg_prep_time(25);
///
/// assert_eq!(candidate.id, "trattoria");
/// assert_eq!(candidate.cuisines.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Candidate {
    /// Opaque unique identifier.
    pub id: String,
    /// How rich or heavy the food is.
    pub heaviness: i32,
    /// How generous the portions are.
    pub portion_size: i32,
    /// How formal the dining experience is.
    pub fine_dining: i32,
    /// Relative cost from 1 (cheap) to 4 (expensive).
    pub price_level: i32,
    /// Free-text cuisine tags, matched case-insensitively.
    pub cuisines: Vec<String>,
    /// Average preparation time in minutes.
    pub avg_prep_time: u32,
}

impl Candidate {
    /// Construct a candidate from its dish profile.
    ///
    /// The price level starts at 1, the cuisine list empty and the
    /// preparation time at zero.
    pub fn new(id: impl Into<String>, heaviness: i32, portion_size: i32, fine_dining: i32) -> Self {
        Self {
            id: id.into(),
            heaviness,
            portion_size,
            fine_dining,
            price_level: 1,
            cuisines: Vec::new(),
            avg_prep_time: 0,
        }
    }

    /// Set the price level while returning `self` for chaining.
    #[must_use]
    pub const fn with_price_level(mut self, price_level: i32) -> Self {
        self.price_level = price_level;
        self
    }

    /// Replace the cuisine tags while returning `self` for chaining.
    #[must_use]
    pub fn with_cuisines<I, S>(mut self, cuisines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cuisines = cuisines.into_iter().map(Into::into).collect();
        self
    }

    /// Set the average preparation time while returning `self` for chaining.
    #[must_use]
    pub const fn with_avg_prep_time(mut self, minutes: u32) -> Self {
        self.avg_prep_time = minutes;
        self
    }
}

/// A candidate paired with the score it earned for one request.
///
/// Scored candidates are transient views; they carry no identity beyond the
/// source candidate's `id`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredCandidate {
    /// The candidate that was scored.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub candidate: Candidate,
    /// Score rounded to two decimal places.
    pub score: f64,
}

impl ScoredCandidate {
    /// Pair a candidate with its score.
    #[must_use]
    pub const fn new(candidate: Candidate, score: f64) -> Self {
        Self { candidate, score }
    }

    /// Identifier of the underlying candidate.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.candidate.id
    }
}
