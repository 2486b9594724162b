//! Adapters connecting the domain ports to the outside world.

pub mod cache;
pub mod dog_api;
