//! Handler for the `edit` command.

use serde_json::json;

use super::output;
use crate::error::Result;
use crate::port::store::RestaurantStore;

/// Replace all mutable fields of a restaurant.
///
/// A nonexistent id is accepted silently, matching the storage contract.
///
/// # Errors
/// Propagates storage errors.
pub fn execute(
    store: &dyn RestaurantStore,
    id: i32,
    name: &str,
    genre: &str,
    tags: &str,
    is_active: bool,
) -> Result<()> {
    store.update(id, name, genre, tags, is_active)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "edit",
            "id": id,
        }));
        return Ok(());
    }

    output::success(&format!("saved restaurant {id}"));
    Ok(())
}
