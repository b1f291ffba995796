//! The restaurant entity.
//!
//! A [`Restaurant`] is one stored record: a name, free-text genre, a
//! comma-delimited tag string, an active flag governing selection
//! eligibility, and a creation timestamp assigned by storage.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One stored restaurant record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    /// Storage-assigned identifier, never reused after deletion.
    pub id: i32,
    /// Display name, unique across all restaurants.
    pub name: String,
    /// Free-text genre, empty when unset.
    pub genre: String,
    /// Comma-delimited free-text tag list, stored as a single string.
    pub tags: String,
    /// Whether this restaurant is eligible for random selection.
    pub is_active: bool,
    /// Set once at creation by storage, never mutated.
    pub created_at: DateTime<Utc>,
}

/// Collect the sorted set of distinct non-empty genres.
///
/// Used by the CLI to enumerate genres for filtering; callers pass the
/// full unfiltered listing.
#[must_use]
pub fn distinct_genres(restaurants: &[Restaurant]) -> Vec<String> {
    let mut genres: Vec<String> = restaurants
        .iter()
        .map(|r| r.genre.clone())
        .filter(|g| !g.is_empty())
        .collect();
    genres.sort();
    genres.dedup();
    genres
}

#[cfg(test)]
mod tests {
    use super::*;

    fn restaurant(name: &str, genre: &str) -> Restaurant {
        Restaurant {
            id: 0,
            name: name.to_string(),
            genre: genre.to_string(),
            tags: String::new(),
            is_active: true,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn distinct_genres_sorts_and_dedupes() {
        let rows = vec![
            restaurant("a", "和食"),
            restaurant("b", "中華"),
            restaurant("c", "和食"),
            restaurant("d", ""),
        ];

        assert_eq!(distinct_genres(&rows), vec!["中華", "和食"]);
    }

    #[test]
    fn distinct_genres_empty_input() {
        assert!(distinct_genres(&[]).is_empty());
    }

    #[test]
    fn distinct_genres_skips_empty_genre() {
        let rows = vec![restaurant("a", ""), restaurant("b", "")];
        assert!(distinct_genres(&rows).is_empty());
    }
}
