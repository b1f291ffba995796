//! SQLite restaurant store implementation.
//!
//! Implements the [`RestaurantStore`] port with Diesel over a pooled
//! SQLite connection. The activity restriction and name ordering run in
//! SQL; filter criteria are applied through the pure domain matcher, so
//! the final result is identical to filtering entirely in SQL.

use chrono::{DateTime, NaiveDateTime, Utc};
use diesel::prelude::*;
use tracing::warn;

use crate::adapter::outbound::sqlite::database::connection::DbPool;
use crate::adapter::outbound::sqlite::database::model::{NewRestaurantRow, RestaurantRow};
use crate::adapter::outbound::sqlite::database::schema::restaurants;
use crate::domain::{Filters, Restaurant};
use crate::error::{Error, Result};
use crate::port::store::RestaurantStore;

/// SQLite-backed restaurant store.
pub struct SqliteRestaurantStore {
    /// Database connection pool.
    pool: DbPool,
}

impl SqliteRestaurantStore {
    /// Create a new SQLite restaurant store with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn from_row(row: RestaurantRow) -> Result<Restaurant> {
        // SQLite CURRENT_TIMESTAMP stores "YYYY-MM-DD HH:MM:SS" in UTC;
        // accept RFC 3339 as well for rows written by other tooling.
        let created_at: DateTime<Utc> =
            match NaiveDateTime::parse_from_str(&row.created_at, "%Y-%m-%d %H:%M:%S") {
                Ok(naive) => naive.and_utc(),
                Err(_) => DateTime::parse_from_rfc3339(&row.created_at)
                    .map_err(|e| Error::Parse(e.to_string()))?
                    .with_timezone(&Utc),
            };

        Ok(Restaurant {
            id: row.id,
            name: row.name,
            genre: row.genre,
            tags: row.tags,
            is_active: row.is_active,
            created_at,
        })
    }
}

impl RestaurantStore for SqliteRestaurantStore {
    fn add(&self, name: &str, genre: &str, tags: &str) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::Validation {
                field: "name",
                reason: "must not be blank".to_string(),
            });
        }

        let row = NewRestaurantRow {
            name: name.to_string(),
            genre: genre.trim().to_string(),
            tags: tags.trim().to_string(),
            is_active: true,
        };

        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        // Duplicate names are silently ignored rather than rejected, so
        // re-submitting an add is idempotent.
        diesel::insert_or_ignore_into(restaurants::table)
            .values(&row)
            .execute(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(())
    }

    fn update(&self, id: i32, name: &str, genre: &str, tags: &str, is_active: bool) -> Result<()> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        let updated = diesel::update(restaurants::table.find(id))
            .set((
                restaurants::name.eq(name.trim()),
                restaurants::genre.eq(genre.trim()),
                restaurants::tags.eq(tags.trim()),
                restaurants::is_active.eq(is_active),
            ))
            .execute(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        if updated == 0 {
            warn!(id, "update matched no restaurant");
        }

        Ok(())
    }

    fn delete(&self, id: i32) -> Result<bool> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        let deleted = diesel::delete(restaurants::table.find(id))
            .execute(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(deleted > 0)
    }

    fn list(&self, active_only: bool, filters: &Filters) -> Result<Vec<Restaurant>> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        let rows: Vec<RestaurantRow> = if active_only {
            restaurants::table
                .filter(restaurants::is_active.eq(true))
                .order(restaurants::name.asc())
                .load(&mut conn)
                .map_err(|e| Error::Database(e.to_string()))?
        } else {
            restaurants::table
                .order(restaurants::name.asc())
                .load(&mut conn)
                .map_err(|e| Error::Database(e.to_string()))?
        };

        let mut restaurants = Vec::with_capacity(rows.len());
        for row in rows {
            let restaurant = Self::from_row(row)?;
            if filters.matches(&restaurant) {
                restaurants.push(restaurant);
            }
        }
        Ok(restaurants)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::outbound::sqlite::database::connection::{create_pool, run_migrations};

    fn setup_store() -> SqliteRestaurantStore {
        let pool = create_pool(":memory:").expect("Failed to create pool");
        run_migrations(&pool).expect("Failed to run migrations");
        SqliteRestaurantStore::new(pool)
    }

    // -------------------------------------------------------------------------
    // Add
    // -------------------------------------------------------------------------

    #[test]
    fn add_then_list_roundtrip() {
        let store = setup_store();

        store.add("Sushi Taro", "和食", "魚,安い").unwrap();
        let all = store.list(false, &Filters::default()).unwrap();

        assert_eq!(all.len(), 1);
        let r = &all[0];
        assert_eq!(r.name, "Sushi Taro");
        assert_eq!(r.genre, "和食");
        assert_eq!(r.tags, "魚,安い");
        assert!(r.is_active);
    }

    #[test]
    fn add_trims_all_fields() {
        let store = setup_store();

        store.add("  Sushi Taro  ", " 和食 ", " 魚,安い ").unwrap();
        let all = store.list(false, &Filters::default()).unwrap();

        assert_eq!(all[0].name, "Sushi Taro");
        assert_eq!(all[0].genre, "和食");
        assert_eq!(all[0].tags, "魚,安い");
    }

    #[test]
    fn add_duplicate_name_is_silently_ignored() {
        let store = setup_store();

        store.add("Sushi Taro", "和食", "魚,安い").unwrap();
        store.add("Sushi Taro", "中華", "麺").unwrap();

        let all = store.list(false, &Filters::default()).unwrap();
        assert_eq!(all.len(), 1);
        // The second call must not overwrite the first.
        assert_eq!(all[0].genre, "和食");
    }

    #[test]
    fn add_blank_name_is_a_validation_error() {
        let store = setup_store();

        let result = store.add("   ", "和食", "");
        assert!(matches!(
            result,
            Err(Error::Validation { field: "name", .. })
        ));
        assert!(store.list(false, &Filters::default()).unwrap().is_empty());
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let store = setup_store();

        store.add("first", "", "").unwrap();
        let first_id = store.list(false, &Filters::default()).unwrap()[0].id;
        assert!(store.delete(first_id).unwrap());

        store.add("second", "", "").unwrap();
        let second_id = store.list(false, &Filters::default()).unwrap()[0].id;
        assert!(second_id > first_id);
    }

    // -------------------------------------------------------------------------
    // Update
    // -------------------------------------------------------------------------

    #[test]
    fn update_replaces_all_mutable_fields() {
        let store = setup_store();

        store.add("Sushi Taro", "和食", "魚").unwrap();
        let id = store.list(false, &Filters::default()).unwrap()[0].id;

        store.update(id, " Ramen Jiro ", " 中華 ", " 麺 ", false).unwrap();

        let all = store.list(false, &Filters::default()).unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Ramen Jiro");
        assert_eq!(all[0].genre, "中華");
        assert_eq!(all[0].tags, "麺");
        assert!(!all[0].is_active);
    }

    #[test]
    fn update_to_inactive_excludes_from_active_listing() {
        let store = setup_store();

        store.add("Sushi Taro", "和食", "").unwrap();
        let id = store.list(false, &Filters::default()).unwrap()[0].id;

        store.update(id, "Sushi Taro", "和食", "", false).unwrap();

        assert!(store.list(true, &Filters::default()).unwrap().is_empty());
        assert_eq!(store.list(false, &Filters::default()).unwrap().len(), 1);
    }

    #[test]
    fn update_nonexistent_id_is_a_noop() {
        let store = setup_store();

        store.add("Sushi Taro", "和食", "").unwrap();
        store.update(9999, "Ghost", "", "", true).unwrap();

        let all = store.list(false, &Filters::default()).unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Sushi Taro");
    }

    // -------------------------------------------------------------------------
    // Delete
    // -------------------------------------------------------------------------

    #[test]
    fn delete_then_list_excludes_the_row() {
        let store = setup_store();

        store.add("Sushi Taro", "和食", "").unwrap();
        let id = store.list(false, &Filters::default()).unwrap()[0].id;

        assert!(store.delete(id).unwrap());
        assert!(store.list(false, &Filters::default()).unwrap().is_empty());

        // Further operations on the deleted id stay silent no-ops.
        assert!(!store.delete(id).unwrap());
        store.update(id, "Ghost", "", "", true).unwrap();
        assert!(store.list(false, &Filters::default()).unwrap().is_empty());
    }

    // -------------------------------------------------------------------------
    // Listing and filters
    // -------------------------------------------------------------------------

    #[test]
    fn list_orders_by_name_ascending() {
        let store = setup_store();

        store.add("banana", "", "").unwrap();
        store.add("Apple", "", "").unwrap();
        store.add("cherry", "", "").unwrap();

        let names: Vec<String> = store
            .list(false, &Filters::default())
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();

        // Byte ordering: uppercase sorts before lowercase.
        assert_eq!(names, vec!["Apple", "banana", "cherry"]);
    }

    #[test]
    fn list_applies_conjunctive_filters() {
        let store = setup_store();

        store.add("麺屋", "中華", "麺,安い").unwrap();
        store.add("麺処", "和食", "麺").unwrap();
        store.add("飯店", "中華", "炒飯").unwrap();

        let filters = Filters {
            keyword: Some("麺".to_string()),
            genre: Some("中華".to_string()),
            ..Filters::default()
        };
        let hits = store.list(false, &filters).unwrap();

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "麺屋");
    }

    #[test]
    fn list_active_only_combined_with_filters() {
        let store = setup_store();

        store.add("麺屋", "中華", "麺").unwrap();
        store.add("麺処", "中華", "麺").unwrap();
        let id = store.list(false, &Filters::default()).unwrap()[0].id;
        store.update(id, "麺処", "中華", "麺", false).unwrap();

        let filters = Filters {
            tags: vec!["麺".to_string()],
            ..Filters::default()
        };
        let hits = store.list(true, &filters).unwrap();

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "麺屋");
    }

    #[test]
    fn list_empty_database_returns_empty() {
        let store = setup_store();
        assert!(store.list(false, &Filters::default()).unwrap().is_empty());
        assert!(store.list(true, &Filters::default()).unwrap().is_empty());
    }

    #[test]
    fn created_at_roundtrips_as_utc() {
        let store = setup_store();

        let before = Utc::now() - chrono::Duration::seconds(5);
        store.add("Sushi Taro", "", "").unwrap();
        let after = Utc::now() + chrono::Duration::seconds(5);

        let r = store.list(false, &Filters::default()).unwrap().remove(0);
        assert!(r.created_at >= before && r.created_at <= after);
    }
}
