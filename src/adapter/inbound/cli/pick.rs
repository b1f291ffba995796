//! Handler for the `pick` command.

use serde_json::json;

use super::output;
use crate::domain::{self, Filters};
use crate::error::Result;
use crate::port::store::RestaurantStore;

/// List the active candidates matching `filters` and pick one at random.
///
/// # Errors
/// Propagates storage errors and the two selection failures
/// ([`crate::error::Error::NoCandidates`],
/// [`crate::error::Error::NoActiveCandidates`]), which the entry point
/// renders as warnings.
pub fn execute(store: &dyn RestaurantStore, filters: &Filters) -> Result<()> {
    let candidates = store.list(true, filters)?;
    let mut rng = rand::thread_rng();
    let picked = domain::choose(&mut rng, &candidates)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "pick",
            "id": picked.id,
            "name": picked.name,
            "genre": picked.genre,
            "tags": picked.tags,
        }));
        return Ok(());
    }

    if picked.genre.is_empty() {
        output::success(&format!("today's lunch: {}", picked.name));
    } else {
        output::success(&format!("today's lunch: {} ({})", picked.name, picked.genre));
    }

    Ok(())
}
