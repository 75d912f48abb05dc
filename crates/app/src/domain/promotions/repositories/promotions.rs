//! Promotions Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::{
    promotions::{
        data::NewPromotion,
        records::{PromotionRecord, PromotionUuid},
    },
    restaurants::records::RestaurantUuid,
    users::records::UserUuid,
};

const CREATE_PROMOTION_SQL: &str = include_str!("../sql/create_promotion.sql");
const LOCK_PROMOTION_SQL: &str = include_str!("../sql/lock_promotion.sql");
const ACTIVATE_PROMOTION_SQL: &str = include_str!("../sql/activate_promotion.sql");
const FIND_ACTIVE_PROMOTION_BY_CODE_SQL: &str =
    include_str!("../sql/find_active_promotion_by_code.sql");

/// A promotion row locked for update, with the owner of its restaurant.
#[derive(Debug, Clone)]
pub(crate) struct LockedPromotion {
    pub promotion: PromotionRecord,
    pub restaurant_owner_uuid: UserUuid,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PgPromotionsRepository;

impl PgPromotionsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_promotion(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        promotion: NewPromotion,
    ) -> Result<PromotionRecord, sqlx::Error> {
        query_as::<Postgres, PromotionRecord>(CREATE_PROMOTION_SQL)
            .bind(promotion.uuid.into_uuid())
            .bind(promotion.restaurant_uuid.into_uuid())
            .bind(promotion.created_by_user_uuid.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    /// Lock the promotion row until the transaction ends.
    pub(crate) async fn lock_promotion(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        promotion: PromotionUuid,
    ) -> Result<Option<LockedPromotion>, sqlx::Error> {
        query_as::<Postgres, LockedPromotion>(LOCK_PROMOTION_SQL)
            .bind(promotion.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    /// Store the issued code and mark the promotion active. Fails with
    /// [`sqlx::Error::RowNotFound`] if the promotion is already active.
    pub(crate) async fn activate_promotion(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        promotion: PromotionUuid,
        encrypted_code: &str,
        offer_id: &str,
    ) -> Result<PromotionRecord, sqlx::Error> {
        query_as::<Postgres, PromotionRecord>(ACTIVATE_PROMOTION_SQL)
            .bind(promotion.into_uuid())
            .bind(encrypted_code)
            .bind(offer_id)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn find_active_promotion_by_code(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        encrypted_code: &str,
    ) -> Result<Option<PromotionRecord>, sqlx::Error> {
        query_as::<Postgres, PromotionRecord>(FIND_ACTIVE_PROMOTION_BY_CODE_SQL)
            .bind(encrypted_code)
            .fetch_optional(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for PromotionRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: PromotionUuid::from_uuid(row.try_get("uuid")?),
            restaurant_uuid: RestaurantUuid::from_uuid(row.try_get("restaurant_uuid")?),
            created_by_user_uuid: UserUuid::from_uuid(row.try_get("created_by_user_uuid")?),
            is_active: row.try_get("is_active")?,
            encrypted_code: row.try_get("encrypted_code")?,
            offer_id: row.try_get("offer_id")?,
            activated_at: row
                .try_get::<Option<SqlxTimestamp>, _>("activated_at")?
                .map(SqlxTimestamp::to_jiff),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for LockedPromotion {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            promotion: PromotionRecord::from_row(row)?,
            restaurant_owner_uuid: UserUuid::from_uuid(row.try_get("restaurant_owner_uuid")?),
        })
    }
}
