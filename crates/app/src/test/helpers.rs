//! Test Helpers

use crate::domain::{
    restaurants::{data::NewRestaurant, records::RestaurantUuid},
    reviews::{data::NewReview, records::ReviewUuid},
    users::{data::NewUser, records::UserUuid},
};

/// Emails are unique, so each helper user gets one derived from its uuid.
pub(crate) fn new_user(username: &str) -> NewUser {
    let uuid = UserUuid::new();

    NewUser {
        uuid,
        username: username.to_string(),
        email: format!("{username}-{}@example.com", uuid.into_uuid().simple()),
    }
}

pub(crate) fn new_restaurant(owner: UserUuid) -> NewRestaurant {
    NewRestaurant {
        uuid: RestaurantUuid::new(),
        owner_uuid: owner,
        name: "Test Kitchen".to_string(),
        address: "1 Test Street".to_string(),
        cuisine_type: "Fusion".to_string(),
    }
}

pub(crate) fn promoter_review(restaurant: RestaurantUuid, promoter: UserUuid) -> NewReview {
    NewReview {
        uuid: ReviewUuid::new(),
        user_uuid: promoter,
        restaurant_uuid: restaurant,
        rating: 5,
        review_text: "Best dumplings in town".to_string(),
        photo_urls: Vec::new(),
        is_promoter: true,
    }
}
