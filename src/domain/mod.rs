//! Storage-agnostic domain types and pure logic: the restaurant entity,
//! conjunctive filter matching, and uniform random selection.

pub mod filter;
pub mod picker;
pub mod restaurant;

pub use filter::Filters;
pub use picker::choose;
pub use restaurant::{distinct_genres, Restaurant};
