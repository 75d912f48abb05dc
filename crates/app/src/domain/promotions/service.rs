//! Promotions Service

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use sqlx::error::ErrorKind;
use tracing::{Span, info, warn};

use crate::{
    database::Db,
    domain::{
        codes::{IssuanceUuid, PgPromotionCodec, PromotionPayload},
        promotions::{
            PromotionsServiceError,
            data::NewRedemption,
            records::{PromotionUuid, RedemptionOutcome, RedemptionUuid},
            repositories::{PgPromotionsRepository, PgRedemptionsRepository},
        },
        rewards::{PgRewardsRepository, REDEMPTION_REWARD_POINTS},
        users::records::UserUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgPromotionsService {
    db: Db,
    promotions: PgPromotionsRepository,
    redemptions: PgRedemptionsRepository,
    rewards: PgRewardsRepository,
    codec: PgPromotionCodec,
}

impl PgPromotionsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            promotions: PgPromotionsRepository::new(),
            redemptions: PgRedemptionsRepository::new(),
            rewards: PgRewardsRepository::new(),
            codec: PgPromotionCodec::new(),
        }
    }
}

#[async_trait]
impl PromotionsService for PgPromotionsService {
    #[tracing::instrument(
        name = "promotions.service.approve_promotion",
        skip(self, offer_id),
        fields(
            promotion_uuid = %promotion,
            approver_uuid = %approver,
            restaurant_uuid = tracing::field::Empty
        ),
        err
    )]
    async fn approve_promotion(
        &self,
        promotion: PromotionUuid,
        approver: UserUuid,
        offer_id: String,
    ) -> Result<String, PromotionsServiceError> {
        let mut tx = self.db.begin().await?;

        // Unknown promotions are indistinguishable from foreign ones.
        let Some(locked) = self.promotions.lock_promotion(&mut tx, promotion).await? else {
            return Err(PromotionsServiceError::Forbidden);
        };

        let restaurant = locked.promotion.restaurant_uuid;

        Span::current().record("restaurant_uuid", tracing::field::display(restaurant));

        if locked.restaurant_owner_uuid != approver {
            return Err(PromotionsServiceError::Forbidden);
        }

        if locked.promotion.is_active {
            return Err(PromotionsServiceError::AlreadyActive);
        }

        let issued_at = Timestamp::from_second(Timestamp::now().as_second())
            .map_err(|_range_error| PromotionsServiceError::InvalidData)?;

        let payload = PromotionPayload {
            issuance_uuid: IssuanceUuid::new(),
            restaurant_uuid: restaurant,
            promoter_uuid: locked.promotion.created_by_user_uuid,
            offer_id,
            issued_at,
        };

        let code = self.codec.encode(&mut tx, &payload).await?;

        self.promotions
            .activate_promotion(&mut tx, promotion, &code, &payload.offer_id)
            .await?;

        tx.commit().await?;

        info!(
            promotion_uuid = %promotion,
            issuance_uuid = %payload.issuance_uuid,
            "approved promotion"
        );

        Ok(code)
    }

    #[tracing::instrument(
        name = "promotions.service.redeem_code",
        skip(self, code),
        fields(
            redeemer_uuid = %redeemer,
            promotion_uuid = tracing::field::Empty,
            promoter_uuid = tracing::field::Empty
        ),
        err
    )]
    async fn redeem_code(
        &self,
        code: String,
        redeemer: UserUuid,
    ) -> Result<RedemptionOutcome, PromotionsServiceError> {
        let mut tx = self.db.begin().await?;

        let Some(promotion) = self
            .promotions
            .find_active_promotion_by_code(&mut tx, &code)
            .await?
        else {
            return Err(PromotionsServiceError::InvalidCode);
        };

        let span = Span::current();

        span.record("promotion_uuid", tracing::field::display(promotion.uuid));

        let payload = self
            .codec
            .decode(&mut tx, promotion.restaurant_uuid, &code)
            .await?;

        if payload.restaurant_uuid != promotion.restaurant_uuid
            || payload.promoter_uuid != promotion.created_by_user_uuid
        {
            warn!(
                promotion_uuid = %promotion.uuid,
                payload_restaurant_uuid = %payload.restaurant_uuid,
                payload_promoter_uuid = %payload.promoter_uuid,
                "code payload does not match its promotion"
            );

            return Err(PromotionsServiceError::InvalidCode);
        }

        span.record("promoter_uuid", tracing::field::display(payload.promoter_uuid));

        if self
            .redemptions
            .redemption_exists(&mut tx, promotion.uuid, redeemer)
            .await?
        {
            return Err(PromotionsServiceError::AlreadyRedeemed);
        }

        let redemption = self
            .redemptions
            .create_redemption(
                &mut tx,
                NewRedemption {
                    uuid: RedemptionUuid::new(),
                    promotion_uuid: promotion.uuid,
                    redeemed_by_user_uuid: redeemer,
                    restaurant_uuid: promotion.restaurant_uuid,
                },
            )
            .await
            .map_err(redemption_insert_error)?;

        let balance = self
            .rewards
            .credit(&mut tx, payload.promoter_uuid, REDEMPTION_REWARD_POINTS)
            .await
            .map_err(PromotionsServiceError::Sql)?;

        tx.commit().await?;

        info!(
            redemption_uuid = %redemption.uuid,
            promoter_uuid = %payload.promoter_uuid,
            promoter_balance = balance,
            "redeemed promotion code"
        );

        Ok(RedemptionOutcome {
            redemption_uuid: redemption.uuid,
            promotion_uuid: promotion.uuid,
            promoter_uuid: payload.promoter_uuid,
            points_awarded: REDEMPTION_REWARD_POINTS,
        })
    }
}

/// A concurrent redemption by the same user loses on the unique constraint.
fn redemption_insert_error(error: sqlx::Error) -> PromotionsServiceError {
    let is_unique_violation = error
        .as_database_error()
        .is_some_and(|e| matches!(e.kind(), ErrorKind::UniqueViolation));

    if is_unique_violation {
        PromotionsServiceError::AlreadyRedeemed
    } else {
        error.into()
    }
}

#[automock]
#[async_trait]
pub trait PromotionsService: Send + Sync {
    /// Activates a pending promotion on behalf of its restaurant's owner and
    /// returns the newly issued code.
    ///
    /// Unknown promotions and approvers who do not own the restaurant are both
    /// reported as [`PromotionsServiceError::Forbidden`].
    async fn approve_promotion(
        &self,
        promotion: PromotionUuid,
        approver: UserUuid,
        offer_id: String,
    ) -> Result<String, PromotionsServiceError>;

    /// Consumes a code for `redeemer` and credits the promoter.
    ///
    /// Each user may redeem a given code once.
    async fn redeem_code(
        &self,
        code: String,
        redeemer: UserUuid,
    ) -> Result<RedemptionOutcome, PromotionsServiceError>;
}
