//! Restaurants Data

use crate::domain::{restaurants::records::RestaurantUuid, users::records::UserUuid};

/// New Restaurant Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRestaurant {
    pub uuid: RestaurantUuid,
    pub owner_uuid: UserUuid,
    pub name: String,
    pub address: String,
    pub cuisine_type: String,
}
