//! Restaurant Records

use jiff::Timestamp;

use crate::{domain::users::records::UserUuid, uuids::TypedUuid};

/// Restaurant UUID
pub type RestaurantUuid = TypedUuid<RestaurantRecord>;

/// Restaurant Record
///
/// The encryption key itself never leaves the key manager; the record only
/// reports whether one has been issued.
#[derive(Debug, Clone)]
pub struct RestaurantRecord {
    pub uuid: RestaurantUuid,
    pub owner_uuid: UserUuid,
    pub name: String,
    pub address: String,
    pub cuisine_type: String,
    pub is_verified: bool,
    pub has_encryption_key: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
