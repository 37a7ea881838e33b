//! Case-insensitive cuisine matching.
#![forbid(unsafe_code)]

use std::collections::HashSet;

use platepick_core::Preferences;

/// A set of requested cuisine tags normalised to lower case.
///
/// Build it once per request and consult it for every candidate rather than
/// re-lowering the requested tags on each comparison. Tags are compared
/// exactly after lowering; surrounding whitespace is significant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CuisineSet {
    tags: HashSet<String>,
}

impl CuisineSet {
    /// Normalise a collection of tags.
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            tags: tags
                .into_iter()
                .map(|tag| tag.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// The set a request asks for, or `None` when it asks for no cuisine.
    #[must_use]
    pub fn requested_by(preferences: &Preferences) -> Option<Self> {
        preferences.requested_cuisines().map(Self::new)
    }

    /// Whether `tag` is in the set, ignoring case.
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains(&tag.to_lowercase())
    }

    /// Whether any of `tags` is in the set, ignoring case.
    #[must_use]
    pub fn matches_any(&self, tags: &[String]) -> bool {
        tags.iter().any(|tag| self.contains(tag))
    }

    /// Number of distinct normalised tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Report whether the set holds no tags.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}
