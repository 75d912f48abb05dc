//! Redemptions Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as, query_scalar};

use crate::domain::{
    promotions::{
        data::NewRedemption,
        records::{PromotionUuid, RedemptionRecord, RedemptionUuid},
    },
    restaurants::records::RestaurantUuid,
    users::records::UserUuid,
};

const REDEMPTION_EXISTS_SQL: &str = include_str!("../sql/redemption_exists.sql");
const CREATE_REDEMPTION_SQL: &str = include_str!("../sql/create_redemption.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgRedemptionsRepository;

impl PgRedemptionsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn redemption_exists(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        promotion: PromotionUuid,
        user: UserUuid,
    ) -> Result<bool, sqlx::Error> {
        query_scalar(REDEMPTION_EXISTS_SQL)
            .bind(promotion.into_uuid())
            .bind(user.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    /// Insert a redemption. A second redemption of the same promotion by the
    /// same user violates the `(promotion_uuid, redeemed_by_user_uuid)` unique
    /// constraint.
    pub(crate) async fn create_redemption(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        redemption: NewRedemption,
    ) -> Result<RedemptionRecord, sqlx::Error> {
        query_as::<Postgres, RedemptionRecord>(CREATE_REDEMPTION_SQL)
            .bind(redemption.uuid.into_uuid())
            .bind(redemption.promotion_uuid.into_uuid())
            .bind(redemption.redeemed_by_user_uuid.into_uuid())
            .bind(redemption.restaurant_uuid.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for RedemptionRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: RedemptionUuid::from_uuid(row.try_get("uuid")?),
            promotion_uuid: PromotionUuid::from_uuid(row.try_get("promotion_uuid")?),
            redeemed_by_user_uuid: UserUuid::from_uuid(row.try_get("redeemed_by_user_uuid")?),
            restaurant_uuid: RestaurantUuid::from_uuid(row.try_get("restaurant_uuid")?),
            redeemed_at: row.try_get::<SqlxTimestamp, _>("redeemed_at")?.to_jiff(),
        })
    }
}
