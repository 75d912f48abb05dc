//! Reviews Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};
use uuid::Uuid;

use crate::domain::{
    promotions::records::PromotionUuid,
    restaurants::records::RestaurantUuid,
    reviews::{
        data::NewReview,
        records::{ReviewDetails, ReviewRecord, ReviewUuid},
    },
    users::records::UserUuid,
};

const CREATE_REVIEW_SQL: &str = include_str!("sql/create_review.sql");
const CREATE_REVIEW_PHOTO_SQL: &str = include_str!("sql/create_review_photo.sql");
const LIST_RESTAURANT_REVIEWS_SQL: &str = include_str!("sql/list_restaurant_reviews.sql");
const LIST_RECENT_REVIEWS_SQL: &str = include_str!("sql/list_recent_reviews.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgReviewsRepository;

impl PgReviewsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Insert the review row. Photos and the promotion are attached by the
    /// caller, so the returned record has neither.
    pub(crate) async fn create_review(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        review: &NewReview,
    ) -> Result<ReviewRecord, sqlx::Error> {
        query_as::<Postgres, ReviewRecord>(CREATE_REVIEW_SQL)
            .bind(review.uuid.into_uuid())
            .bind(review.user_uuid.into_uuid())
            .bind(review.restaurant_uuid.into_uuid())
            .bind(i16::from(review.rating))
            .bind(review.review_text.as_str())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_review_photo(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        review: ReviewUuid,
        photo_url: &str,
    ) -> Result<(), sqlx::Error> {
        query(CREATE_REVIEW_PHOTO_SQL)
            .bind(Uuid::now_v7())
            .bind(review.into_uuid())
            .bind(photo_url)
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    /// Newest first.
    pub(crate) async fn list_restaurant_reviews(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        restaurant: RestaurantUuid,
        limit: u32,
    ) -> Result<Vec<ReviewDetails>, sqlx::Error> {
        query_as::<Postgres, ReviewDetails>(LIST_RESTAURANT_REVIEWS_SQL)
            .bind(restaurant.into_uuid())
            .bind(i64::from(limit))
            .fetch_all(&mut **tx)
            .await
    }

    /// Newest first, across all restaurants.
    pub(crate) async fn list_recent_reviews(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        limit: u32,
    ) -> Result<Vec<ReviewDetails>, sqlx::Error> {
        query_as::<Postgres, ReviewDetails>(LIST_RECENT_REVIEWS_SQL)
            .bind(i64::from(limit))
            .fetch_all(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for ReviewRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let rating: i16 = row.try_get("rating")?;

        let rating = u8::try_from(rating).map_err(|e| sqlx::Error::ColumnDecode {
            index: "rating".to_string(),
            source: Box::new(e),
        })?;

        Ok(Self {
            uuid: ReviewUuid::from_uuid(row.try_get("uuid")?),
            user_uuid: UserUuid::from_uuid(row.try_get("user_uuid")?),
            restaurant_uuid: RestaurantUuid::from_uuid(row.try_get("restaurant_uuid")?),
            rating,
            review_text: row.try_get("review_text")?,
            photo_urls: Vec::new(),
            promotion_uuid: None,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for ReviewDetails {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let mut review = ReviewRecord::from_row(row)?;

        review.photo_urls = row.try_get("photo_urls")?;
        review.promotion_uuid = row
            .try_get::<Option<Uuid>, _>("promotion_uuid")?
            .map(PromotionUuid::from_uuid);

        Ok(Self {
            review,
            author_username: row.try_get("author_username")?,
            author_level: row.try_get("author_level")?,
            restaurant_name: row.try_get("restaurant_name")?,
            cuisine_type: row.try_get("cuisine_type")?,
        })
    }
}
