//! Get Restaurant Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{PathParam, QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use foodie_app::domain::restaurants::records::{RestaurantRecord, RestaurantUuid};

use crate::{
    extensions::*,
    restaurants::errors::into_status_error,
    reviews::{errors::into_status_error as into_review_status_error, recent::ReviewResponse},
    state::State,
};

const DEFAULT_REVIEW_LIMIT: u32 = 50;
const MAX_REVIEW_LIMIT: u32 = 100;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RestaurantResponse {
    /// The unique identifier of the restaurant
    pub uuid: Uuid,

    pub owner_uuid: Uuid,

    pub name: String,

    pub address: String,

    pub cuisine_type: String,

    pub is_verified: bool,

    /// The date and time the restaurant was registered
    pub created_at: String,
}

impl From<RestaurantRecord> for RestaurantResponse {
    fn from(restaurant: RestaurantRecord) -> Self {
        Self {
            uuid: restaurant.uuid.into_uuid(),
            owner_uuid: restaurant.owner_uuid.into_uuid(),
            name: restaurant.name,
            address: restaurant.address,
            cuisine_type: restaurant.cuisine_type,
            is_verified: restaurant.is_verified,
            created_at: restaurant.created_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RestaurantDetailResponse {
    pub restaurant: RestaurantResponse,

    /// Newest first, with photos
    pub reviews: Vec<ReviewResponse>,
}

/// Get Restaurant Handler
///
/// Returns a restaurant and its reviews.
#[endpoint(
    tags("restaurants"),
    summary = "Get Restaurant",
    responses(
        (status_code = StatusCode::OK, description = "Restaurant with reviews"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::NOT_FOUND, description = "Restaurant not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    restaurant: PathParam<Uuid>,
    limit: QueryParam<u32, false>,
    depot: &mut Depot,
) -> Result<Json<RestaurantDetailResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let limit = limit.into_limit(DEFAULT_REVIEW_LIMIT, MAX_REVIEW_LIMIT)?;
    let restaurant = RestaurantUuid::from_uuid(restaurant.into_inner());

    let record = state
        .app
        .restaurants
        .get_restaurant(restaurant)
        .await
        .map_err(into_status_error)?;

    let reviews = state
        .app
        .reviews
        .list_restaurant_reviews(restaurant, limit)
        .await
        .map_err(into_review_status_error)?;

    Ok(Json(RestaurantDetailResponse {
        restaurant: record.into(),
        reviews: reviews.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
pub(crate) mod tests {
    use jiff::Timestamp;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::Value;
    use testresult::TestResult;

    use foodie_app::domain::{
        restaurants::{MockRestaurantsService, RestaurantsServiceError},
        reviews::MockReviewsService,
        users::records::UserUuid,
    };

    use crate::{reviews::recent::tests::make_details, test_helpers::restaurants_service};

    use super::*;

    pub(crate) fn make_restaurant(uuid: RestaurantUuid) -> RestaurantRecord {
        RestaurantRecord {
            uuid,
            owner_uuid: UserUuid::from_uuid(Uuid::from_u128(9)),
            name: "Noodle Bar".to_string(),
            address: "1 High Street".to_string(),
            cuisine_type: "Japanese".to_string(),
            is_verified: false,
            has_encryption_key: true,
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        }
    }

    fn make_service(restaurants: MockRestaurantsService, reviews: MockReviewsService) -> Service {
        restaurants_service(
            restaurants,
            reviews,
            Router::with_path("restaurants/{restaurant}").get(handler),
        )
    }

    #[tokio::test]
    async fn test_get_restaurant_includes_reviews_with_photos() -> TestResult {
        let restaurant = RestaurantUuid::new();

        let mut restaurants = MockRestaurantsService::new();

        restaurants
            .expect_get_restaurant()
            .once()
            .withf(move |uuid| *uuid == restaurant)
            .return_once(|uuid| Ok(make_restaurant(uuid)));

        let mut reviews = MockReviewsService::new();

        reviews
            .expect_list_restaurant_reviews()
            .once()
            .withf(move |uuid, limit| *uuid == restaurant && *limit == DEFAULT_REVIEW_LIMIT)
            .return_once(move |uuid, _| {
                Ok(vec![make_details(
                    uuid,
                    &[
                        "https://cdn.example.com/1.jpg",
                        "https://cdn.example.com/2.jpg",
                    ],
                )])
            });

        let mut res = TestClient::get(format!("http://example.com/restaurants/{restaurant}"))
            .send(&make_service(restaurants, reviews))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: Value = res.take_json().await?;

        assert_eq!(body["restaurant"]["uuid"], restaurant.into_uuid().to_string());
        assert_eq!(body["restaurant"]["cuisineType"], "Japanese");
        assert!(
            body["restaurant"].get("hasEncryptionKey").is_none(),
            "key state must not be exposed"
        );
        assert_eq!(body["reviews"][0]["author"]["username"], "bob");
        assert_eq!(
            body["reviews"][0]["photoUrls"],
            serde_json::json!([
                "https://cdn.example.com/1.jpg",
                "https://cdn.example.com/2.jpg"
            ])
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_get_unknown_restaurant_returns_404() -> TestResult {
        let mut restaurants = MockRestaurantsService::new();

        restaurants
            .expect_get_restaurant()
            .once()
            .return_once(|_| Err(RestaurantsServiceError::NotFound));

        let mut reviews = MockReviewsService::new();

        reviews.expect_list_restaurant_reviews().never();

        let res = TestClient::get(format!(
            "http://example.com/restaurants/{}",
            RestaurantUuid::new()
        ))
        .send(&make_service(restaurants, reviews))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_restaurant_invalid_uuid_returns_400() -> TestResult {
        let mut restaurants = MockRestaurantsService::new();

        restaurants.expect_get_restaurant().never();

        let res = TestClient::get("http://example.com/restaurants/not-a-uuid")
            .send(&make_service(restaurants, MockReviewsService::new()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
