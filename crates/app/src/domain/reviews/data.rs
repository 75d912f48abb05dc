//! Reviews Data

use crate::domain::{
    restaurants::records::RestaurantUuid, reviews::records::ReviewUuid, users::records::UserUuid,
};

/// Lowest accepted star rating.
pub const MIN_RATING: u8 = 1;

/// Highest accepted star rating.
pub const MAX_RATING: u8 = 5;

/// New Review
#[derive(Debug, Clone)]
pub struct NewReview {
    pub uuid: ReviewUuid,
    pub user_uuid: UserUuid,
    pub restaurant_uuid: RestaurantUuid,
    pub rating: u8,
    pub review_text: String,
    pub photo_urls: Vec<String>,

    /// Author is promoting the restaurant; a pending promotion is opened for
    /// the owner to approve.
    pub is_promoter: bool,
}
