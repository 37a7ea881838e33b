//! Ranked results ready for display.
//!
//! A recommendation re-attaches the display fields of a [`Restaurant`] to the
//! score its candidate earned.

use crate::Restaurant;

/// One entry in a ranked recommendation list.
///
/// # Examples
/// ```
/// use platepick_core::{Recommendation, Restaurant};
///
/// let restaurant = Restaurant::new("taco-fiesta", "Taco Fiesta");
/// let item = Recommendation::from_restaurant(&restaurant, 287.5);
///
/// assert_eq!(item.name, "Taco Fiesta");
/// assert_eq!(item.score, 287.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Recommendation {
    /// Restaurant identifier.
    pub id: String,
    /// Score earned for the request.
    pub score: f64,
    /// Display name.
    pub name: String,
    /// Price level in `1..=4`.
    pub price_level: i32,
    /// Cuisine tags.
    pub cuisines: Vec<String>,
    /// Image location.
    pub image: Option<String>,
    /// Free-text description.
    pub description: String,
    /// Neighbourhood label.
    pub neighborhood: String,
    /// Website link.
    pub website_url: Option<String>,
    /// Map link.
    pub gmaps_url: Option<String>,
    /// Contact phone number.
    pub phone: Option<String>,
}

impl Recommendation {
    /// Build a display entry from a restaurant and its score.
    #[must_use]
    pub fn from_restaurant(restaurant: &Restaurant, score: f64) -> Self {
        Self {
            id: restaurant.id.clone(),
            score,
            name: restaurant.name.clone(),
            price_level: restaurant.price_level,
            cuisines: restaurant.cuisines.clone(),
            image: restaurant.image.clone(),
            description: restaurant.description.clone(),
            neighborhood: restaurant.neighborhood.clone(),
            website_url: restaurant.website_url.clone(),
            gmaps_url: restaurant.gmaps_url.clone(),
            phone: restaurant.phone.clone(),
        }
    }
}
