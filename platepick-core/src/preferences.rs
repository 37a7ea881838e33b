//! Diner preferences: slider positions plus optional filters.
//!
//! Sliders are nominally `0..=100`. Range checks belong to whoever builds the
//! value from user input; scorers accept any integer.

/// Slider position used when a diner leaves a slider untouched.
pub const NEUTRAL_SLIDER: i32 = 50;

/// What a diner is in the mood for.
///
/// # Examples
/// ```
/// use platepick_core::Preferences;
///
/// let preferences = Preferences::new(80, 60, 20)
///     .with_cuisines(["Mexican"])
///     .with_max_price(2);
///
/// assert_eq!(preferences.want_heavy, 80);
/// assert_eq!(preferences.max_price, Some(2));
/// assert!(preferences.fast_only.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Preferences {
    /// Desired heaviness of the food.
    pub want_heavy: i32,
    /// How hungry the diner is, matched against portion size.
    pub want_hungry: i32,
    /// Desired formality.
    pub want_finedine: i32,
    /// Cuisine tags the diner would like, if any.
    #[cfg_attr(feature = "serde", serde(default))]
    pub cuisines: Option<Vec<String>>,
    /// Highest acceptable price level, if any.
    #[cfg_attr(feature = "serde", serde(default))]
    pub max_price: Option<i32>,
    /// Whether slow kitchens should be penalised.
    #[cfg_attr(feature = "serde", serde(default))]
    pub fast_only: Option<bool>,
}

impl Preferences {
    /// Construct preferences from slider positions with no filters.
    #[must_use]
    pub const fn new(want_heavy: i32, want_hungry: i32, want_finedine: i32) -> Self {
        Self {
            want_heavy,
            want_hungry,
            want_finedine,
            cuisines: None,
            max_price: None,
            fast_only: None,
        }
    }

    /// Request particular cuisines while returning `self` for chaining.
    ///
    /// # Examples
    /// ```
    /// use platepick_core::Preferences;
    ///
    /// let preferences = Preferences::default().with_cuisines(["Thai", "Lao"]);
    /// assert_eq!(preferences.cuisines.map(|c| c.len()), Some(2));
    /// ```
    #[must_use]
    pub fn with_cuisines<I, S>(mut self, cuisines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cuisines = Some(cuisines.into_iter().map(Into::into).collect());
        self
    }

    /// Cap the price level while returning `self` for chaining.
    #[must_use]
    pub const fn with_max_price(mut self, max_price: i32) -> Self {
        self.max_price = Some(max_price);
        self
    }

    /// Set the fast-only flag while returning `self` for chaining.
    #[must_use]
    pub const fn with_fast_only(mut self, fast_only: bool) -> Self {
        self.fast_only = Some(fast_only);
        self
    }

    /// Requested cuisines, treating an empty list the same as none.
    #[must_use]
    pub fn requested_cuisines(&self) -> Option<&[String]> {
        self.cuisines.as_deref().filter(|tags| !tags.is_empty())
    }

    /// Whether the fast-only filter is switched on.
    #[must_use]
    pub fn wants_fast(&self) -> bool {
        self.fast_only.unwrap_or(false)
    }
}

impl Default for Preferences {
    fn default() -> Self {
        Self::new(NEUTRAL_SLIDER, NEUTRAL_SLIDER, NEUTRAL_SLIDER)
    }
}
