//! Store-backed promotion code codec.

use sqlx::{Postgres, Transaction};

use crate::domain::{
    codes::{CodeError, PromotionPayload, sealing},
    restaurants::{keys::PgRestaurantKeys, records::RestaurantUuid},
};

/// Seals and opens codes with the owning restaurant's key. Only sealing may
/// create the key; opening requires one to exist already.
#[derive(Debug, Clone, Default)]
pub(crate) struct PgPromotionCodec {
    keys: PgRestaurantKeys,
}

impl PgPromotionCodec {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            keys: PgRestaurantKeys::new(),
        }
    }

    pub(crate) async fn encode(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        payload: &PromotionPayload,
    ) -> Result<String, CodeError> {
        let key = self
            .keys
            .get_or_create_key(tx, payload.restaurant_uuid)
            .await?;

        sealing::seal(&key, payload)
    }

    pub(crate) async fn decode(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        restaurant: RestaurantUuid,
        code: &str,
    ) -> Result<PromotionPayload, CodeError> {
        let key = self.keys.get_key(tx, restaurant).await?;

        sealing::open(&key, code)
    }
}
