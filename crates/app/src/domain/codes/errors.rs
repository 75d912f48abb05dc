//! Promotion code errors.

use thiserror::Error;

use crate::domain::restaurants::keys::RestaurantKeyError;

#[derive(Debug, Error)]
pub enum CodeError {
    #[error("code is not valid base64url or is truncated")]
    Decode,

    #[error("code failed authentication")]
    Authentication,

    #[error("failed to serialize promotion payload")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to encrypt promotion payload")]
    Encryption,

    #[error("restaurant key unavailable")]
    Key(#[from] RestaurantKeyError),
}

impl CodeError {
    /// Whether the failure is attributable to the code itself rather than to
    /// the system. Callers report all of these identically.
    #[must_use]
    pub const fn is_invalid_code(&self) -> bool {
        matches!(self, Self::Decode | Self::Authentication)
    }
}
