//! Row-level CSV validation and conversion.

use platepick_core::{PRICE_RANGE, Restaurant, RestaurantError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cuisines::{encode_cuisine_list, parse_cuisine_list};

/// Column order used when writing a catalogue.
pub const CSV_COLUMNS: [&str; 18] = [
    "id",
    "name",
    "description",
    "heaviness",
    "portionSize",
    "fineDining",
    "priceLevel",
    "spiceLevel",
    "avgPrepTime",
    "cuisines",
    "neighborhood",
    "websiteUrl",
    "gmapsUrl",
    "phone",
    "image",
    "lat",
    "lng",
    "openHours",
];

/// One catalogue row as text.
///
/// Every column is optional at the parsing layer; [`validate_row`] decides
/// which ones a restaurant actually needs. Field order matches
/// [`CSV_COLUMNS`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[expect(missing_docs, reason = "fields mirror the CSV columns one to one")]
pub struct CsvRow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub heaviness: String,
    pub portion_size: String,
    pub fine_dining: String,
    pub price_level: String,
    pub spice_level: String,
    pub avg_prep_time: String,
    pub cuisines: String,
    pub neighborhood: String,
    pub website_url: String,
    pub gmaps_url: String,
    pub phone: String,
    pub image: String,
    pub lat: String,
    pub lng: String,
    pub open_hours: String,
}

/// A rejected row.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
#[error("{message}")]
pub struct RowError {
    /// 1-based data row number, excluding the header.
    pub row: usize,
    /// Human-readable reason, prefixed with the row number.
    pub message: String,
}

impl RowError {
    pub(crate) fn new(row: usize, reason: impl std::fmt::Display) -> Self {
        Self {
            row,
            message: format!("Row {row}: {reason}"),
        }
    }
}

/// Check a row without converting it.
///
/// `index` is the 0-based position of the row among the data rows. Checks
/// run in column order and stop at the first failure.
///
/// # Errors
/// Returns a [`RowError`] naming the first offending column.
///
/// # Examples
/// ```
/// use platepick_data::csv::{CsvRow, validate_row};
///
/// let row = CsvRow {
///     name: "Pho Corner".into(),
///     heaviness: "40".into(),
///     portion_size: "60".into(),
///     fine_dining: "20".into(),
///     price_level: "7".into(),
///     ..CsvRow::default()
/// };
///
/// let err = validate_row(&row, 2).unwrap_err();
/// assert_eq!(err.message, "Row 3: priceLevel must be 1-4");
/// ```
pub fn validate_row(row: &CsvRow, index: usize) -> Result<(), RowError> {
    row_to_restaurant(row, index).map(drop)
}

/// Validate a row and convert it into a [`Restaurant`].
///
/// Range rules are those of [`Restaurant::validate`]. Blank spice level and
/// preparation time fall back to the catalogue defaults. The identifier comes from the `id` column, or a slug of the
/// name when that column is blank.
///
/// # Errors
/// Returns a [`RowError`] when [`validate_row`] would.
pub fn row_to_restaurant(row: &CsvRow, index: usize) -> Result<Restaurant, RowError> {
    let number = index.saturating_add(1);
    let name = row.name.trim();
    let id = match row.id.trim() {
        "" => Some(slugify(name))
            .filter(|slug| !slug.is_empty())
            .unwrap_or_else(|| format!("restaurant-{number}")),
        explicit => explicit.to_owned(),
    };
    let mut restaurant = Restaurant::new(id, name);
    restaurant.heaviness = integer(&row.heaviness);
    restaurant.portion_size = integer(&row.portion_size);
    restaurant.fine_dining = integer(&row.fine_dining);
    restaurant.price_level = integer(&row.price_level);
    if !is_blank(&row.spice_level) {
        restaurant.spice_level = integer(&row.spice_level);
    }
    restaurant
        .validate()
        .map_err(|error| RowError::new(number, reason(&error)))?;
    if !is_blank(&row.avg_prep_time) {
        restaurant.avg_prep_time = parse_int(&row.avg_prep_time)
            .and_then(|value| u32::try_from(value).ok())
            .ok_or_else(|| RowError::new(number, "avgPrepTime must be a positive integer"))?;
    }
    restaurant.description = row.description.clone();
    restaurant.neighborhood = row.neighborhood.clone();
    restaurant.cuisines = parse_cuisine_list(&row.cuisines);
    restaurant.website_url = non_blank(&row.website_url);
    restaurant.gmaps_url = non_blank(&row.gmaps_url);
    restaurant.phone = non_blank(&row.phone);
    restaurant.image = non_blank(&row.image);
    restaurant.lat = coordinate(&row.lat);
    restaurant.lng = coordinate(&row.lng);
    restaurant.open_hours = non_blank(&row.open_hours);
    Ok(restaurant)
}

impl From<&Restaurant> for CsvRow {
    fn from(restaurant: &Restaurant) -> Self {
        Self {
            id: restaurant.id.clone(),
            name: restaurant.name.clone(),
            description: restaurant.description.clone(),
            heaviness: restaurant.heaviness.to_string(),
            portion_size: restaurant.portion_size.to_string(),
            fine_dining: restaurant.fine_dining.to_string(),
            price_level: restaurant.price_level.to_string(),
            spice_level: restaurant.spice_level.to_string(),
            avg_prep_time: restaurant.avg_prep_time.to_string(),
            cuisines: encode_cuisine_list(&restaurant.cuisines),
            neighborhood: restaurant.neighborhood.clone(),
            website_url: restaurant.website_url.clone().unwrap_or_default(),
            gmaps_url: restaurant.gmaps_url.clone().unwrap_or_default(),
            phone: restaurant.phone.clone().unwrap_or_default(),
            image: restaurant.image.clone().unwrap_or_default(),
            lat: restaurant.lat.map_or_else(String::new, |lat| lat.to_string()),
            lng: restaurant.lng.map_or_else(String::new, |lng| lng.to_string()),
            open_hours: restaurant.open_hours.clone().unwrap_or_default(),
        }
    }
}

/// Unreadable values map to `i32::MIN`, which every range check rejects.
fn integer(raw: &str) -> i32 {
    parse_int(raw)
        .and_then(|value| i32::try_from(value).ok())
        .unwrap_or(i32::MIN)
}

/// Row messages name the column and its range but not the rejected value.
fn reason(error: &RestaurantError) -> String {
    match error {
        RestaurantError::MissingName => "name is required".to_owned(),
        RestaurantError::AxisOutOfRange { field, .. } => format!("{field} must be 0-100"),
        RestaurantError::PriceOutOfRange(_) => format!(
            "priceLevel must be {}-{}",
            PRICE_RANGE.start(),
            PRICE_RANGE.end()
        ),
    }
}

/// Leading-integer parse: an optional sign followed by at least one digit.
/// Anything after the digits is ignored, so `"12.5"` reads as 12.
fn parse_int(raw: &str) -> Option<i64> {
    let text = raw.trim();
    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let digits_len = unsigned
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let magnitude = unsigned.get(..digits_len)?.parse::<i64>().ok()?;
    if negative {
        magnitude.checked_neg()
    } else {
        Some(magnitude)
    }
}

fn coordinate(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

fn is_blank(raw: &str) -> bool {
    raw.trim().is_empty()
}

/// Lower-case the name and join its alphanumeric runs with hyphens.
pub(crate) fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for ch in name.chars().flat_map(char::to_lowercase) {
        if ch.is_alphanumeric() {
            slug.push(ch);
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let kept = slug.trim_end_matches('-').len();
    slug.truncate(kept);
    slug
}
