//! Promotions Data

use crate::domain::{
    promotions::records::{PromotionUuid, RedemptionUuid},
    restaurants::records::RestaurantUuid,
    users::records::UserUuid,
};

/// New Promotion
///
/// Promotions always start pending; the uuid matches the review it came from.
#[derive(Debug, Clone)]
pub struct NewPromotion {
    pub uuid: PromotionUuid,
    pub restaurant_uuid: RestaurantUuid,
    pub created_by_user_uuid: UserUuid,
}

/// New Redemption
#[derive(Debug, Clone)]
pub(crate) struct NewRedemption {
    pub uuid: RedemptionUuid,
    pub promotion_uuid: PromotionUuid,
    pub redeemed_by_user_uuid: UserUuid,
    pub restaurant_uuid: RestaurantUuid,
}
