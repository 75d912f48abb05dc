//! Per-restaurant promotion code keys.
//!
//! Each restaurant gets one 256-bit AES key, generated lazily the first time a
//! promotion code is issued for it. The key is written exactly once: the write
//! is conditional on no key being present, and a writer that loses the race
//! adopts the key that won.

use std::fmt;

use base64::{Engine as _, engine::general_purpose::URL_SAFE as BASE64_URL_SAFE};
use rand::{RngCore, rngs::OsRng};
use sqlx::{Postgres, Transaction, query_scalar};
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;
use zeroize::{Zeroize, Zeroizing};

use crate::domain::restaurants::records::RestaurantUuid;

/// Number of key bytes (AES-256).
pub const RESTAURANT_KEY_BYTES: usize = 32;

const FIND_RESTAURANT_KEY_SQL: &str = include_str!("sql/find_restaurant_key.sql");
const SET_RESTAURANT_KEY_SQL: &str = include_str!("sql/set_restaurant_key.sql");

#[derive(Debug, Error)]
pub enum RestaurantKeyError {
    #[error("restaurant not found")]
    UnknownRestaurant,

    #[error("restaurant has no key")]
    Missing,

    #[error("stored restaurant key is malformed")]
    Malformed,

    #[error("storage error")]
    Sql(#[from] sqlx::Error),
}

#[derive(Clone)]
pub struct RestaurantKey {
    bytes: [u8; RESTAURANT_KEY_BYTES],
}

impl RestaurantKey {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; RESTAURANT_KEY_BYTES]) -> Self {
        Self { bytes }
    }

    /// Generate a fresh key from the operating system CSPRNG.
    #[must_use]
    pub fn generate() -> Self {
        let mut bytes = [0_u8; RESTAURANT_KEY_BYTES];

        OsRng.fill_bytes(&mut bytes);

        Self::from_bytes(bytes)
    }

    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; RESTAURANT_KEY_BYTES] {
        &self.bytes
    }

    /// Storage encoding (padded base64url).
    #[must_use]
    pub fn encode(&self) -> Zeroizing<String> {
        Zeroizing::new(BASE64_URL_SAFE.encode(self.bytes))
    }

    /// Decode a stored key.
    ///
    /// # Errors
    ///
    /// Returns [`RestaurantKeyError::Malformed`] unless `encoded` is valid
    /// base64url holding exactly [`RESTAURANT_KEY_BYTES`] bytes.
    pub fn decode(encoded: &str) -> Result<Self, RestaurantKeyError> {
        let decoded = Zeroizing::new(
            BASE64_URL_SAFE
                .decode(encoded)
                .map_err(|_decode_error| RestaurantKeyError::Malformed)?,
        );

        let bytes: [u8; RESTAURANT_KEY_BYTES] = decoded
            .as_slice()
            .try_into()
            .map_err(|_length_error| RestaurantKeyError::Malformed)?;

        Ok(Self::from_bytes(bytes))
    }
}

impl fmt::Debug for RestaurantKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RestaurantKey(**redacted**)")
    }
}

impl Drop for RestaurantKey {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

/// PostgreSQL-backed key manager.
#[derive(Debug, Clone, Default)]
pub(crate) struct PgRestaurantKeys;

impl PgRestaurantKeys {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Return the restaurant's existing key without creating one.
    pub(crate) async fn get_key(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        restaurant: RestaurantUuid,
    ) -> Result<RestaurantKey, RestaurantKeyError> {
        let stored = find_key(tx, restaurant)
            .await?
            .ok_or(RestaurantKeyError::UnknownRestaurant)?
            .ok_or(RestaurantKeyError::Missing)?;

        RestaurantKey::decode(&stored)
    }

    /// Return the restaurant's key, creating and persisting one if none exists.
    pub(crate) async fn get_or_create_key(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        restaurant: RestaurantUuid,
    ) -> Result<RestaurantKey, RestaurantKeyError> {
        let stored = find_key(tx, restaurant)
            .await?
            .ok_or(RestaurantKeyError::UnknownRestaurant)?;

        if let Some(encoded) = stored {
            return RestaurantKey::decode(&encoded);
        }

        let key = RestaurantKey::generate();
        let encoded = key.encode();

        let written: Option<Uuid> = query_scalar(SET_RESTAURANT_KEY_SQL)
            .bind(restaurant.into_uuid())
            .bind(encoded.as_str())
            .fetch_optional(&mut **tx)
            .await?;

        if written.is_some() {
            info!(restaurant_uuid = %restaurant, "created restaurant key");

            return Ok(key);
        }

        debug!(restaurant_uuid = %restaurant, "restaurant key written concurrently, re-reading");

        let stored = find_key(tx, restaurant)
            .await?
            .ok_or(RestaurantKeyError::UnknownRestaurant)?
            .ok_or(RestaurantKeyError::Malformed)?;

        RestaurantKey::decode(&stored)
    }
}

/// Outer `None` means no such restaurant, inner `None` means no key yet.
async fn find_key(
    tx: &mut Transaction<'_, Postgres>,
    restaurant: RestaurantUuid,
) -> Result<Option<Option<Zeroizing<String>>>, sqlx::Error> {
    let stored: Option<Option<String>> = query_scalar(FIND_RESTAURANT_KEY_SQL)
        .bind(restaurant.into_uuid())
        .fetch_optional(&mut **tx)
        .await?;

    Ok(stored.map(|key| key.map(Zeroizing::new)))
}
