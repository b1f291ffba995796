//! Lunchpick - a lunch restaurant picker backed by SQLite.
//!
//! Stores a single table of restaurants, filters it by keyword, tags,
//! and genre, and picks one active candidate uniformly at random.
//!
//! # Architecture
//!
//! - [`domain`] - Pure types and logic: the [`domain::Restaurant`] entity,
//!   conjunctive [`domain::Filters`] matching, and random selection via
//!   [`domain::choose`]
//! - [`port`] - The [`port::RestaurantStore`] trait the domain depends on
//! - [`adapter`] - SQLite persistence (Diesel + r2d2) and the clap CLI
//! - [`config`] - TOML configuration with env overrides and logging setup
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use lunchpick::adapter::outbound::sqlite::database::connection::{create_pool, run_migrations};
//! use lunchpick::adapter::outbound::sqlite::SqliteRestaurantStore;
//! use lunchpick::domain::{choose, Filters};
//! use lunchpick::port::RestaurantStore;
//!
//! # fn main() -> lunchpick::error::Result<()> {
//! let pool = create_pool("lunch.db")?;
//! run_migrations(&pool)?;
//! let store = SqliteRestaurantStore::new(pool);
//!
//! store.add("Sushi Taro", "和食", "魚,安い")?;
//! let candidates = store.list(true, &Filters::default())?;
//! let picked = choose(&mut rand::thread_rng(), &candidates)?;
//! println!("{}", picked.name);
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;
