//! Outbound ports: traits the domain needs implemented by adapters.

pub mod store;

pub use store::RestaurantStore;
