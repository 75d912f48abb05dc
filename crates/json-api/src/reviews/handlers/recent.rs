//! Recent Reviews Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use foodie_app::domain::reviews::records::ReviewDetails;

use crate::{extensions::*, reviews::errors::into_status_error, state::State};

const DEFAULT_LIMIT: u32 = 20;
const MAX_LIMIT: u32 = 100;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ReviewAuthorResponse {
    pub uuid: Uuid,

    pub username: String,

    /// Loyalty level
    pub level: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ReviewRestaurantResponse {
    pub uuid: Uuid,

    pub name: String,

    pub cuisine_type: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ReviewResponse {
    /// The unique identifier of the review
    pub uuid: Uuid,

    /// Star rating, 1 to 5
    pub rating: u8,

    pub review_text: String,

    /// Attached photo URLs, in upload order
    pub photo_urls: Vec<String>,

    /// Present when the author is promoting the restaurant
    pub promotion_uuid: Option<Uuid>,

    /// The date and time the review was posted
    pub created_at: String,

    pub author: ReviewAuthorResponse,

    pub restaurant: ReviewRestaurantResponse,
}

impl From<ReviewDetails> for ReviewResponse {
    fn from(details: ReviewDetails) -> Self {
        let review = details.review;

        Self {
            uuid: review.uuid.into_uuid(),
            rating: review.rating,
            review_text: review.review_text,
            photo_urls: review.photo_urls,
            promotion_uuid: review.promotion_uuid.map(|uuid| uuid.into_uuid()),
            created_at: review.created_at.to_string(),
            author: ReviewAuthorResponse {
                uuid: review.user_uuid.into_uuid(),
                username: details.author_username,
                level: details.author_level,
            },
            restaurant: ReviewRestaurantResponse {
                uuid: review.restaurant_uuid.into_uuid(),
                name: details.restaurant_name,
                cuisine_type: details.cuisine_type,
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ReviewsResponse {
    /// Newest first
    pub reviews: Vec<ReviewResponse>,
}

/// Recent Reviews Handler
///
/// Returns the newest reviews across all restaurants.
#[endpoint(
    tags("reviews"),
    summary = "Recent Reviews",
    responses(
        (status_code = StatusCode::OK, description = "Reviews, newest first"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    limit: QueryParam<u32, false>,
    depot: &mut Depot,
) -> Result<Json<ReviewsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let limit = limit.into_limit(DEFAULT_LIMIT, MAX_LIMIT)?;

    let reviews = state
        .app
        .reviews
        .list_recent_reviews(limit)
        .await
        .map_err(into_status_error)?;

    Ok(Json(ReviewsResponse {
        reviews: reviews.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
pub(crate) mod tests {
    use jiff::Timestamp;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::{Value, json};
    use testresult::TestResult;

    use foodie_app::domain::{
        promotions::records::PromotionUuid,
        restaurants::records::RestaurantUuid,
        reviews::{
            MockReviewsService,
            records::{ReviewRecord, ReviewUuid},
        },
        users::records::UserUuid,
    };

    use crate::test_helpers::public_reviews_service;

    use super::*;

    pub(crate) fn make_details(restaurant: RestaurantUuid, photo_urls: &[&str]) -> ReviewDetails {
        ReviewDetails {
            review: ReviewRecord {
                uuid: ReviewUuid::from_uuid(Uuid::from_u128(1)),
                user_uuid: UserUuid::from_uuid(Uuid::from_u128(2)),
                restaurant_uuid: restaurant,
                rating: 4,
                review_text: "Crispy gyoza".to_string(),
                photo_urls: photo_urls.iter().map(ToString::to_string).collect(),
                promotion_uuid: None,
                created_at: Timestamp::UNIX_EPOCH,
            },
            author_username: "bob".to_string(),
            author_level: "Silver".to_string(),
            restaurant_name: "Noodle Bar".to_string(),
            cuisine_type: "Japanese".to_string(),
        }
    }

    fn make_service(reviews: MockReviewsService) -> Service {
        public_reviews_service(reviews, Router::with_path("reviews/recent").get(handler))
    }

    #[tokio::test]
    async fn test_recent_reviews_returns_200_without_a_token() -> TestResult {
        let restaurant = RestaurantUuid::from_uuid(Uuid::from_u128(3));

        let mut mock = MockReviewsService::new();

        mock.expect_list_recent_reviews()
            .once()
            .withf(|limit| *limit == DEFAULT_LIMIT)
            .return_once(move |_| {
                let mut details = make_details(restaurant, &["https://cdn.example.com/1.jpg"]);

                details.review.promotion_uuid = Some(PromotionUuid::from_uuid(Uuid::from_u128(1)));

                Ok(vec![details])
            });

        let mut res = TestClient::get("http://example.com/reviews/recent")
            .send(&make_service(mock))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: Value = res.take_json().await?;

        assert_eq!(
            body,
            json!({
                "reviews": [{
                    "uuid": Uuid::from_u128(1),
                    "rating": 4,
                    "reviewText": "Crispy gyoza",
                    "photoUrls": ["https://cdn.example.com/1.jpg"],
                    "promotionUuid": Uuid::from_u128(1),
                    "createdAt": "1970-01-01T00:00:00Z",
                    "author": {
                        "uuid": Uuid::from_u128(2),
                        "username": "bob",
                        "level": "Silver"
                    },
                    "restaurant": {
                        "uuid": Uuid::from_u128(3),
                        "name": "Noodle Bar",
                        "cuisineType": "Japanese"
                    }
                }]
            })
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_recent_reviews_clamps_limit() -> TestResult {
        let mut mock = MockReviewsService::new();

        mock.expect_list_recent_reviews()
            .once()
            .withf(|limit| *limit == MAX_LIMIT)
            .return_once(|_| Ok(Vec::new()));

        let mut res = TestClient::get("http://example.com/reviews/recent?limit=5000")
            .send(&make_service(mock))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: Value = res.take_json().await?;

        assert_eq!(body, json!({ "reviews": [] }));

        Ok(())
    }

    #[tokio::test]
    async fn test_recent_reviews_zero_limit_returns_400() -> TestResult {
        let mut mock = MockReviewsService::new();

        mock.expect_list_recent_reviews().never();

        let res = TestClient::get("http://example.com/reviews/recent?limit=0")
            .send(&make_service(mock))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
