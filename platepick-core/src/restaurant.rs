//! Full restaurant records as kept by the catalogue.
//!
//! Records carry display and contact details alongside the scoring axes.
//! Constructors do not validate; call [`Restaurant::validate`] before
//! admitting a record into a catalogue.

use std::ops::RangeInclusive;

use thiserror::Error;

use crate::Candidate;

/// Valid range for the dish axes and the spice level.
pub const AXIS_RANGE: RangeInclusive<i32> = 0..=100;
/// Valid range for price levels.
pub const PRICE_RANGE: RangeInclusive<i32> = 1..=4;
/// Spice level assumed when a record does not specify one.
pub const DEFAULT_SPICE_LEVEL: i32 = 50;
/// Preparation time in minutes assumed when a record does not specify one.
pub const DEFAULT_PREP_TIME: u32 = 30;

/// A restaurant with everything needed to score and display it.
///
/// # Examples
/// ```
/// use platepick_core::Restaurant;
///
/// let mut restaurant = Restaurant::new("ramen-house", "Ramen House");
/// restaurant.heaviness = 75;
/// restaurant.portion_size = 80;
/// restaurant.fine_dining = 40;
/// restaurant.price_level = 2;
/// restaurant.cuisines = vec!["Japanese".into(), "Ramen".into()];
///
/// assert!(restaurant.validate().is_ok());
/// assert_eq!(restaurant.candidate().portion_size, 80);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Restaurant {
    /// Unique identifier.
    pub id: String,
    /// Display name; unique within a catalogue.
    pub name: String,
    /// Free-text description.
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    /// Neighbourhood label.
    #[cfg_attr(feature = "serde", serde(default))]
    pub neighborhood: String,
    /// Heaviness in `0..=100`.
    pub heaviness: i32,
    /// Portion size in `0..=100`.
    pub portion_size: i32,
    /// Formality in `0..=100`.
    pub fine_dining: i32,
    /// Price level in `1..=4`.
    pub price_level: i32,
    /// Spice level in `0..=100`; informational only.
    pub spice_level: i32,
    /// Average preparation time in minutes.
    pub avg_prep_time: u32,
    /// Cuisine tags.
    #[cfg_attr(feature = "serde", serde(default))]
    pub cuisines: Vec<String>,
    /// Website link.
    #[cfg_attr(feature = "serde", serde(default))]
    pub website_url: Option<String>,
    /// Map link.
    #[cfg_attr(feature = "serde", serde(default))]
    pub gmaps_url: Option<String>,
    /// Contact phone number.
    #[cfg_attr(feature = "serde", serde(default))]
    pub phone: Option<String>,
    /// Image location.
    #[cfg_attr(feature = "serde", serde(default))]
    pub image: Option<String>,
    /// Latitude in degrees.
    #[cfg_attr(feature = "serde", serde(default))]
    pub lat: Option<f64>,
    /// Longitude in degrees.
    #[cfg_attr(feature = "serde", serde(default))]
    pub lng: Option<f64>,
    /// Opening hours as free text.
    #[cfg_attr(feature = "serde", serde(default))]
    pub open_hours: Option<String>,
}

/// Errors returned by [`Restaurant::validate`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RestaurantError {
    /// The name was empty or whitespace.
    #[error("name is required")]
    MissingName,
    /// A 0-100 attribute fell outside its range.
    #[error("{field} must be 0-100, got {value}")]
    AxisOutOfRange {
        /// Attribute name as it appears in the catalogue.
        field: &'static str,
        /// Rejected value.
        value: i32,
    },
    /// The price level fell outside `1..=4`.
    #[error("priceLevel must be 1-4, got {0}")]
    PriceOutOfRange(i32),
}

impl Restaurant {
    /// Construct a record with neutral axes and default spice and timing.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            neighborhood: String::new(),
            heaviness: 50,
            portion_size: 50,
            fine_dining: 50,
            price_level: 1,
            spice_level: DEFAULT_SPICE_LEVEL,
            avg_prep_time: DEFAULT_PREP_TIME,
            cuisines: Vec::new(),
            website_url: None,
            gmaps_url: None,
            phone: None,
            image: None,
            lat: None,
            lng: None,
            open_hours: None,
        }
    }

    /// Check the record against the catalogue's range rules.
    ///
    /// # Errors
    /// Returns the first [`RestaurantError`] encountered, checking the name,
    /// then heaviness, portion size and fine dining, then price level, then
    /// spice level.
    pub fn validate(&self) -> Result<(), RestaurantError> {
        if self.name.trim().is_empty() {
            return Err(RestaurantError::MissingName);
        }
        check_axis("heaviness", self.heaviness)?;
        check_axis("portionSize", self.portion_size)?;
        check_axis("fineDining", self.fine_dining)?;
        if !PRICE_RANGE.contains(&self.price_level) {
            return Err(RestaurantError::PriceOutOfRange(self.price_level));
        }
        check_axis("spiceLevel", self.spice_level)
    }

    /// Project the attributes the ranking model reads.
    #[must_use]
    pub fn candidate(&self) -> Candidate {
        Candidate {
            id: self.id.clone(),
            heaviness: self.heaviness,
            portion_size: self.portion_size,
            fine_dining: self.fine_dining,
            price_level: self.price_level,
            cuisines: self.cuisines.clone(),
            avg_prep_time: self.avg_prep_time,
        }
    }
}

fn check_axis(field: &'static str, value: i32) -> Result<(), RestaurantError> {
    if AXIS_RANGE.contains(&value) {
        Ok(())
    } else {
        Err(RestaurantError::AxisOutOfRange { field, value })
    }
}
