//! Restaurants

pub mod data;
mod errors;
pub mod keys;
pub mod records;
mod repository;
pub mod service;

pub use errors::RestaurantsServiceError;
pub use service::*;
