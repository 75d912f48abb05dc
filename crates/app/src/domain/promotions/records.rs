//! Promotions Records

use jiff::Timestamp;

use crate::{
    domain::{restaurants::records::RestaurantUuid, users::records::UserUuid},
    uuids::TypedUuid,
};

/// Promotion UUID
pub type PromotionUuid = TypedUuid<PromotionRecord>;

/// Promotion Record
#[derive(Debug, Clone)]
pub struct PromotionRecord {
    pub uuid: PromotionUuid,
    pub restaurant_uuid: RestaurantUuid,
    pub created_by_user_uuid: UserUuid,
    pub is_active: bool,
    pub encrypted_code: Option<String>,
    pub offer_id: Option<String>,
    pub activated_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Redemption UUID
pub type RedemptionUuid = TypedUuid<RedemptionRecord>;

/// Redemption Record
#[derive(Debug, Clone)]
pub struct RedemptionRecord {
    pub uuid: RedemptionUuid,
    pub promotion_uuid: PromotionUuid,
    pub redeemed_by_user_uuid: UserUuid,
    pub restaurant_uuid: RestaurantUuid,
    pub redeemed_at: Timestamp,
}

/// Result of a successful redemption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedemptionOutcome {
    pub redemption_uuid: RedemptionUuid,
    pub promotion_uuid: PromotionUuid,
    pub promoter_uuid: UserUuid,
    pub points_awarded: u64,
}
