//! Read access to restaurant records.
//!
//! The `Catalogue` trait defines a read-only interface for retrieving
//! [`Restaurant`] values. Recommendation services pull the full candidate set
//! from it on every request.

use crate::Restaurant;

/// Read-only access to persisted restaurants.
///
/// # Examples
///
/// ```rust
/// use platepick_core::{Catalogue, MemoryCatalogue, Restaurant};
///
/// let catalogue = MemoryCatalogue::with_restaurants([
///     Restaurant::new("a", "Alpha"),
///     Restaurant::new("b", "Bravo"),
/// ]);
///
/// let names: Vec<_> = catalogue.restaurants().map(|r| r.name).collect();
/// assert_eq!(names, ["Alpha", "Bravo"]);
/// ```
pub trait Catalogue {
    /// Return every restaurant in catalogue order.
    fn restaurants(&self) -> Box<dyn Iterator<Item = Restaurant> + Send + '_>;

    /// Look up a restaurant by identifier.
    ///
    /// The default implementation scans [`Catalogue::restaurants`].
    fn restaurant(&self, id: &str) -> Option<Restaurant> {
        self.restaurants().find(|restaurant| restaurant.id == id)
    }
}

/// In-memory `Catalogue` backed by a vector.
///
/// Lookups are linear scans; the type suits catalogues loaded wholesale from
/// a file or built in tests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryCatalogue {
    restaurants: Vec<Restaurant>,
}

impl MemoryCatalogue {
    /// Create a catalogue from a collection of restaurants.
    pub fn with_restaurants<I>(restaurants: I) -> Self
    where
        I: IntoIterator<Item = Restaurant>,
    {
        Self {
            restaurants: restaurants.into_iter().collect(),
        }
    }

    /// Number of restaurants held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    /// Report whether the catalogue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }

    /// Borrow the records in catalogue order.
    #[must_use]
    pub fn as_slice(&self) -> &[Restaurant] {
        &self.restaurants
    }

    /// Consume the catalogue and return its records.
    #[must_use]
    pub fn into_inner(self) -> Vec<Restaurant> {
        self.restaurants
    }
}

impl Catalogue for MemoryCatalogue {
    fn restaurants(&self) -> Box<dyn Iterator<Item = Restaurant> + Send + '_> {
        Box::new(self.restaurants.iter().cloned())
    }
}
