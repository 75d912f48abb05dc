//! Promotion Payload

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{restaurants::records::RestaurantUuid, users::records::UserUuid},
    uuids::TypedUuid,
};

/// Identifies a single issuance of a code; fresh on every approval.
pub type IssuanceUuid = TypedUuid<PromotionPayload>;

/// Plaintext sealed inside a promotion code.
///
/// Everything needed to attribute a redemption is recovered from here, so the
/// store only has to index active codes by their ciphertext.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromotionPayload {
    #[serde(rename = "promoId")]
    pub issuance_uuid: IssuanceUuid,

    #[serde(rename = "restaurantId")]
    pub restaurant_uuid: RestaurantUuid,

    #[serde(rename = "promoterId")]
    pub promoter_uuid: UserUuid,

    #[serde(rename = "offerId")]
    pub offer_id: String,

    /// Serialized as whole unix seconds.
    #[serde(
        rename = "issuedAt",
        with = "jiff::fmt::serde::timestamp::second::required"
    )]
    pub issued_at: Timestamp,
}
