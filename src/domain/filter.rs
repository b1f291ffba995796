//! Conjunctive filter criteria for restaurant listings.
//!
//! A [`Filters`] value bundles up to three optional criteria. An entity
//! matches only when it satisfies every supplied criterion; absent or
//! empty criteria impose no constraint.
//!
//! # Examples
//!
//! ```
//! use lunchpick::domain::Filters;
//!
//! let filters = Filters {
//!     keyword: Some("ramen".to_string()),
//!     tags: vec!["cheap".to_string()],
//!     genre: None,
//! };
//! assert!(!filters.is_empty());
//! ```

use super::restaurant::Restaurant;

/// Optional filter criteria applied conjunctively during listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    /// Case-insensitive substring matched against name, tags, or genre.
    pub keyword: Option<String>,
    /// Each entry must appear as a substring of the raw tag string.
    ///
    /// This is substring matching on the stored comma-joined string, not
    /// set membership over parsed tokens.
    pub tags: Vec<String>,
    /// Case-insensitive substring matched against genre only.
    pub genre: Option<String>,
}

impl Filters {
    /// True when no criterion is supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.effective_keyword().is_none()
            && self.tags.iter().all(|t| t.is_empty())
            && self.effective_genre().is_none()
    }

    /// True when the restaurant satisfies every supplied criterion.
    #[must_use]
    pub fn matches(&self, restaurant: &Restaurant) -> bool {
        if let Some(kw) = self.effective_keyword() {
            let kw = kw.to_lowercase();
            let hit = restaurant.name.to_lowercase().contains(&kw)
                || restaurant.tags.to_lowercase().contains(&kw)
                || restaurant.genre.to_lowercase().contains(&kw);
            if !hit {
                return false;
            }
        }

        for tag in self.tags.iter().filter(|t| !t.is_empty()) {
            if !restaurant.tags.contains(tag.as_str()) {
                return false;
            }
        }

        if let Some(genre) = self.effective_genre() {
            if !restaurant
                .genre
                .to_lowercase()
                .contains(&genre.to_lowercase())
            {
                return false;
            }
        }

        true
    }

    fn effective_keyword(&self) -> Option<&str> {
        self.keyword.as_deref().filter(|k| !k.is_empty())
    }

    fn effective_genre(&self) -> Option<&str> {
        self.genre.as_deref().filter(|g| !g.is_empty())
    }
}
