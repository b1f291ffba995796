//! Handler for the `genres` command.

use serde_json::json;

use super::output;
use crate::domain::{self, Filters};
use crate::error::Result;
use crate::port::store::RestaurantStore;

/// List the distinct non-empty genres across all restaurants.
///
/// Derived from the full unfiltered listing, including inactive rows.
///
/// # Errors
/// Propagates storage errors.
pub fn execute(store: &dyn RestaurantStore) -> Result<()> {
    let all = store.list(false, &Filters::default())?;
    let genres = domain::distinct_genres(&all);

    if output::is_json() {
        output::json_output(json!({
            "command": "genres",
            "genres": genres,
        }));
        return Ok(());
    }

    if genres.is_empty() {
        output::warning("no genres recorded yet");
        return Ok(());
    }

    output::section("Genres");
    for genre in &genres {
        output::field("genre", genre);
    }
    Ok(())
}
