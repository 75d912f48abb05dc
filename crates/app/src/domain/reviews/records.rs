//! Review Records

use jiff::Timestamp;

use crate::{
    domain::{
        promotions::records::PromotionUuid, restaurants::records::RestaurantUuid,
        users::records::UserUuid,
    },
    uuids::TypedUuid,
};

/// Review UUID
pub type ReviewUuid = TypedUuid<ReviewRecord>;

/// Review Record
#[derive(Debug, Clone)]
pub struct ReviewRecord {
    pub uuid: ReviewUuid,
    pub user_uuid: UserUuid,
    pub restaurant_uuid: RestaurantUuid,
    pub rating: u8,
    pub review_text: String,
    pub photo_urls: Vec<String>,
    pub promotion_uuid: Option<PromotionUuid>,
    pub created_at: Timestamp,
}

/// A review as readers see it, with its author and restaurant.
#[derive(Debug, Clone)]
pub struct ReviewDetails {
    pub review: ReviewRecord,
    pub author_username: String,
    pub author_level: String,
    pub restaurant_name: String,
    pub cuisine_type: String,
}
