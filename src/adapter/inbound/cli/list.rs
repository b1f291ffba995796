//! Handler for the `list` command.

use serde_json::json;
use tabled::{Table, Tabled};

use super::output;
use crate::domain::{Filters, Restaurant};
use crate::error::Result;
use crate::port::store::RestaurantStore;

#[derive(Tabled)]
struct RestaurantLine {
    #[tabled(rename = "Id")]
    id: i32,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Genre")]
    genre: String,
    #[tabled(rename = "Tags")]
    tags: String,
    #[tabled(rename = "Active")]
    active: &'static str,
}

impl From<&Restaurant> for RestaurantLine {
    fn from(r: &Restaurant) -> Self {
        Self {
            id: r.id,
            name: r.name.clone(),
            genre: r.genre.clone(),
            tags: r.tags.clone(),
            active: if r.is_active { "yes" } else { "no" },
        }
    }
}

/// Render the filtered restaurant listing.
///
/// # Errors
/// Propagates storage errors.
pub fn execute(store: &dyn RestaurantStore, include_inactive: bool, filters: &Filters) -> Result<()> {
    let restaurants = store.list(!include_inactive, filters)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "list",
            "restaurants": restaurants
                .iter()
                .map(|r| json!({
                    "id": r.id,
                    "name": r.name,
                    "genre": r.genre,
                    "tags": r.tags,
                    "is_active": r.is_active,
                    "created_at": r.created_at.to_rfc3339(),
                }))
                .collect::<Vec<_>>(),
        }));
        return Ok(());
    }

    if restaurants.is_empty() {
        output::warning("no restaurants match the current filter");
        return Ok(());
    }

    output::section(if include_inactive {
        "All restaurants"
    } else {
        "Active restaurants"
    });
    let table = Table::new(restaurants.iter().map(RestaurantLine::from)).to_string();
    output::lines(&table);

    Ok(())
}
