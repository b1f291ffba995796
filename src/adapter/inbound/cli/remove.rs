//! Handler for the `remove` command.

use serde_json::json;

use super::output;
use crate::error::Result;
use crate::port::store::RestaurantStore;

/// Delete a restaurant by id.
///
/// # Errors
/// Propagates storage errors.
pub fn execute(store: &dyn RestaurantStore, id: i32) -> Result<()> {
    let removed = store.delete(id)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "remove",
            "id": id,
            "removed": removed,
        }));
        return Ok(());
    }

    if removed {
        output::success(&format!("removed restaurant {id}"));
    } else {
        output::warning(&format!("no restaurant with id {id}"));
    }
    Ok(())
}
