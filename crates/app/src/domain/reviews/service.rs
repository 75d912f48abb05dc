//! Reviews Service

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::{
        promotions::{
            PgPromotionsRepository,
            data::NewPromotion,
            records::PromotionUuid,
        },
        restaurants::records::RestaurantUuid,
        reviews::{
            ReviewsServiceError,
            data::{MAX_RATING, MIN_RATING, NewReview},
            records::{ReviewDetails, ReviewRecord},
            repository::PgReviewsRepository,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgReviewsService {
    db: Db,
    reviews: PgReviewsRepository,
    promotions: PgPromotionsRepository,
}

impl PgReviewsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            reviews: PgReviewsRepository::new(),
            promotions: PgPromotionsRepository::new(),
        }
    }
}

#[async_trait]
impl ReviewsService for PgReviewsService {
    #[tracing::instrument(
        name = "reviews.service.create_review",
        skip(self, review),
        fields(
            review_uuid = %review.uuid,
            restaurant_uuid = %review.restaurant_uuid,
            user_uuid = %review.user_uuid,
            is_promoter = review.is_promoter,
            photo_count = review.photo_urls.len()
        ),
        err
    )]
    async fn create_review(&self, review: NewReview) -> Result<ReviewRecord, ReviewsServiceError> {
        if !(MIN_RATING..=MAX_RATING).contains(&review.rating) {
            return Err(ReviewsServiceError::InvalidRating);
        }

        let mut tx = self.db.begin().await?;

        let mut record = self.reviews.create_review(&mut tx, &review).await?;

        for photo_url in &review.photo_urls {
            self.reviews
                .create_review_photo(&mut tx, record.uuid, photo_url)
                .await?;
        }

        if review.is_promoter {
            let promotion = self
                .promotions
                .create_promotion(
                    &mut tx,
                    NewPromotion {
                        uuid: PromotionUuid::from_uuid(record.uuid.into_uuid()),
                        restaurant_uuid: record.restaurant_uuid,
                        created_by_user_uuid: record.user_uuid,
                    },
                )
                .await?;

            record.promotion_uuid = Some(promotion.uuid);
        }

        tx.commit().await?;

        record.photo_urls = review.photo_urls;

        info!(review_uuid = %record.uuid, "created review");

        Ok(record)
    }

    #[tracing::instrument(
        name = "reviews.service.list_restaurant_reviews",
        skip(self),
        fields(restaurant_uuid = %restaurant),
        err
    )]
    async fn list_restaurant_reviews(
        &self,
        restaurant: RestaurantUuid,
        limit: u32,
    ) -> Result<Vec<ReviewDetails>, ReviewsServiceError> {
        let mut tx = self.db.begin().await?;

        let reviews = self
            .reviews
            .list_restaurant_reviews(&mut tx, restaurant, limit)
            .await?;

        tx.commit().await?;

        Ok(reviews)
    }

    async fn list_recent_reviews(
        &self,
        limit: u32,
    ) -> Result<Vec<ReviewDetails>, ReviewsServiceError> {
        let mut tx = self.db.begin().await?;

        let reviews = self.reviews.list_recent_reviews(&mut tx, limit).await?;

        tx.commit().await?;

        Ok(reviews)
    }
}

#[automock]
#[async_trait]
pub trait ReviewsService: Send + Sync {
    /// Creates a review with its photos. When the author is a promoter a
    /// pending promotion sharing the review's uuid is opened in the same
    /// transaction.
    async fn create_review(&self, review: NewReview) -> Result<ReviewRecord, ReviewsServiceError>;

    /// Lists a restaurant's reviews newest first, with photos and authors.
    /// An unknown restaurant simply has no reviews.
    async fn list_restaurant_reviews(
        &self,
        restaurant: RestaurantUuid,
        limit: u32,
    ) -> Result<Vec<ReviewDetails>, ReviewsServiceError>;

    /// Lists the newest reviews across all restaurants.
    async fn list_recent_reviews(
        &self,
        limit: u32,
    ) -> Result<Vec<ReviewDetails>, ReviewsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{domain::reviews::records::ReviewUuid, test::TestContext};

    use super::*;

    fn new_review(
        user: crate::domain::users::records::UserUuid,
        restaurant: RestaurantUuid,
        rating: u8,
        is_promoter: bool,
    ) -> NewReview {
        NewReview {
            uuid: ReviewUuid::new(),
            user_uuid: user,
            restaurant_uuid: restaurant,
            rating,
            review_text: "Great ramen".to_string(),
            photo_urls: vec![
                "https://cdn.example.com/1.jpg".to_string(),
                "https://cdn.example.com/2.jpg".to_string(),
            ],
            is_promoter,
        }
    }

    #[tokio::test]
    async fn create_review_stores_photos_without_promotion() -> TestResult {
        let ctx = TestContext::new().await;
        let (_owner, restaurant) = ctx.create_restaurant().await;
        let author = ctx.create_user("author").await;

        let review = ctx
            .reviews
            .create_review(new_review(author, restaurant, 4, false))
            .await?;

        assert_eq!(review.rating, 4);
        assert_eq!(review.photo_urls.len(), 2);
        assert!(review.promotion_uuid.is_none());

        let photos: i64 =
            sqlx::query_scalar("SELECT count(*) FROM review_photos WHERE review_uuid = $1")
                .bind(review.uuid.into_uuid())
                .fetch_one(ctx.db.pool())
                .await?;

        let promotions: i64 = sqlx::query_scalar("SELECT count(*) FROM promotions")
            .fetch_one(ctx.db.pool())
            .await?;

        assert_eq!(photos, 2);
        assert_eq!(promotions, 0);

        Ok(())
    }

    #[tokio::test]
    async fn create_promoter_review_opens_pending_promotion() -> TestResult {
        let ctx = TestContext::new().await;
        let (_owner, restaurant) = ctx.create_restaurant().await;
        let author = ctx.create_user("author").await;

        let review = ctx
            .reviews
            .create_review(new_review(author, restaurant, 5, true))
            .await?;

        let promotion = review.promotion_uuid.ok_or("promotion was not created")?;

        assert_eq!(promotion.into_uuid(), review.uuid.into_uuid());

        let (is_active, creator): (bool, uuid::Uuid) = sqlx::query_as(
            "SELECT is_active, created_by_user_uuid FROM promotions WHERE uuid = $1",
        )
        .bind(promotion.into_uuid())
        .fetch_one(ctx.db.pool())
        .await?;

        assert!(!is_active);
        assert_eq!(creator, author.into_uuid());

        Ok(())
    }

    #[tokio::test]
    async fn create_review_rejects_out_of_range_rating() {
        let ctx = TestContext::new().await;
        let (_owner, restaurant) = ctx.create_restaurant().await;
        let author = ctx.create_user("author").await;

        for rating in [0, 6] {
            let result = ctx
                .reviews
                .create_review(new_review(author, restaurant, rating, false))
                .await;

            assert!(
                matches!(result, Err(ReviewsServiceError::InvalidRating)),
                "expected InvalidRating for {rating}, got {result:?}"
            );
        }
    }

    #[tokio::test]
    async fn create_review_unknown_restaurant_returns_invalid_reference() {
        let ctx = TestContext::new().await;
        let author = ctx.create_user("author").await;

        let result = ctx
            .reviews
            .create_review(new_review(author, RestaurantUuid::new(), 3, true))
            .await;

        assert!(
            matches!(result, Err(ReviewsServiceError::InvalidReference)),
            "expected InvalidReference, got {result:?}"
        );
    }

    #[tokio::test]
    async fn list_restaurant_reviews_includes_photos_authors_and_promotions() -> TestResult {
        let ctx = TestContext::new().await;
        let (_owner, restaurant) = ctx.create_restaurant().await;
        let (_other_owner, other_restaurant) = ctx.create_restaurant().await;
        let author = ctx.create_user("author").await;

        let plain = ctx
            .reviews
            .create_review(NewReview {
                photo_urls: Vec::new(),
                ..new_review(author, restaurant, 3, false)
            })
            .await?;

        let promoted = ctx
            .reviews
            .create_review(new_review(author, restaurant, 5, true))
            .await?;

        ctx.reviews
            .create_review(new_review(author, other_restaurant, 2, false))
            .await?;

        let reviews = ctx
            .reviews
            .list_restaurant_reviews(restaurant, 50)
            .await?;

        let uuids: Vec<_> = reviews.iter().map(|r| r.review.uuid).collect();

        assert_eq!(uuids, [promoted.uuid, plain.uuid]);

        let newest = &reviews[0];

        assert_eq!(
            newest.review.photo_urls,
            [
                "https://cdn.example.com/1.jpg",
                "https://cdn.example.com/2.jpg"
            ]
        );
        assert_eq!(newest.review.promotion_uuid, promoted.promotion_uuid);
        assert_eq!(newest.review.rating, 5);
        assert_eq!(newest.restaurant_name, "Test Kitchen");
        assert_eq!(newest.cuisine_type, "Fusion");
        assert_eq!(newest.author_username, "author");
        assert_eq!(newest.author_level, "Bronze");

        assert!(reviews[1].review.photo_urls.is_empty());
        assert!(reviews[1].review.promotion_uuid.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn list_restaurant_reviews_unknown_restaurant_is_empty() -> TestResult {
        let ctx = TestContext::new().await;

        let reviews = ctx
            .reviews
            .list_restaurant_reviews(RestaurantUuid::new(), 50)
            .await?;

        assert!(reviews.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn list_recent_reviews_spans_restaurants_up_to_limit() -> TestResult {
        let ctx = TestContext::new().await;
        let (_, first_restaurant) = ctx.create_restaurant().await;
        let (_, second_restaurant) = ctx.create_restaurant().await;
        let author = ctx.create_user("author").await;

        let oldest = ctx
            .reviews
            .create_review(new_review(author, first_restaurant, 4, false))
            .await?;
        let middle = ctx
            .reviews
            .create_review(new_review(author, second_restaurant, 3, false))
            .await?;
        let newest = ctx
            .reviews
            .create_review(new_review(author, first_restaurant, 5, false))
            .await?;

        let all = ctx.reviews.list_recent_reviews(20).await?;
        let uuids: Vec<_> = all.iter().map(|r| r.review.uuid).collect();

        assert_eq!(uuids, [newest.uuid, middle.uuid, oldest.uuid]);
        assert_eq!(all[1].review.restaurant_uuid, second_restaurant);

        let limited = ctx.reviews.list_recent_reviews(1).await?;

        assert_eq!(limited.len(), 1);
        assert_eq!(limited[0].review.uuid, newest.uuid);

        Ok(())
    }
}
