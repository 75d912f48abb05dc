//! User Records

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// User UUID
pub type UserUuid = TypedUuid<UserRecord>;

/// User Record
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub uuid: UserUuid,
    pub username: String,
    pub email: String,

    /// Running loyalty point balance; only ever increased.
    pub loyalty_points: u64,

    pub level: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
