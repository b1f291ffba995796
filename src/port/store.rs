//! Persistence port for the restaurant collection.

use crate::domain::{Filters, Restaurant};
use crate::error::Result;

/// Storage operations for restaurants.
///
/// Every operation acquires its own storage handle; callers must not
/// assume connection reuse across calls. Writes commit immediately.
pub trait RestaurantStore: Send + Sync {
    /// Insert a restaurant with the given trimmed fields.
    ///
    /// Inserting a name that already exists is a silent no-op: the call
    /// succeeds without modifying state. A name that is blank after
    /// trimming is a validation error and nothing is stored.
    fn add(&self, name: &str, genre: &str, tags: &str) -> Result<()>;

    /// Replace all mutable fields of the restaurant with the given id.
    ///
    /// A nonexistent id is a silent no-op.
    fn update(&self, id: i32, name: &str, genre: &str, tags: &str, is_active: bool) -> Result<()>;

    /// Delete by id. Returns whether a row was removed; absent ids are a no-op.
    fn delete(&self, id: i32) -> Result<bool>;

    /// List restaurants matching `filters`, ordered by name ascending.
    ///
    /// When `active_only` is set the result is additionally restricted to
    /// active restaurants.
    fn list(&self, active_only: bool, filters: &Filters) -> Result<Vec<Restaurant>>;
}
