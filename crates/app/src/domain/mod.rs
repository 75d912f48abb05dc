//! Foodie Domain Concerns

pub mod codes;
pub mod promotions;
pub mod restaurants;
pub mod reviews;
pub mod rewards;
pub mod users;
