//! Database model types for Diesel ORM.

use diesel::prelude::*;

use super::schema::restaurants;

/// Database row for a restaurant (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = restaurants)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct RestaurantRow {
    pub id: i32,
    pub name: String,
    pub genre: String,
    pub tags: String,
    pub is_active: bool,
    pub created_at: String,
}

/// Database row for a restaurant (insertable).
///
/// `id` and `created_at` are assigned by the database.
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = restaurants)]
pub struct NewRestaurantRow {
    pub name: String,
    pub genre: String,
    pub tags: String,
    pub is_active: bool,
}
