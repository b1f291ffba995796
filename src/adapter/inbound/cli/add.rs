//! Handler for the `add` command.

use serde_json::json;

use super::output;
use crate::error::Result;
use crate::port::store::RestaurantStore;

/// Add a restaurant.
///
/// Re-submitting an existing name succeeds without modifying anything;
/// the acknowledgement is intentionally the same either way.
///
/// # Errors
/// Returns a validation error on a blank name; propagates storage errors.
pub fn execute(store: &dyn RestaurantStore, name: &str, genre: &str, tags: &str) -> Result<()> {
    store.add(name, genre, tags)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "add",
            "name": name.trim(),
        }));
        return Ok(());
    }

    output::success(&format!("added {}", name.trim()));
    Ok(())
}
