//! Restaurant Index Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{
    extensions::*, restaurants::errors::into_status_error, restaurants::get::RestaurantResponse,
    state::State,
};

const DEFAULT_LIMIT: u32 = 100;
const MAX_LIMIT: u32 = 100;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RestaurantsResponse {
    /// Newest first
    pub restaurants: Vec<RestaurantResponse>,
}

/// Restaurant Index Handler
///
/// Returns the most recently registered restaurants.
#[endpoint(
    tags("restaurants"),
    summary = "List Restaurants",
    responses(
        (status_code = StatusCode::OK, description = "Restaurants, newest first"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    limit: QueryParam<u32, false>,
    depot: &mut Depot,
) -> Result<Json<RestaurantsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let limit = limit.into_limit(DEFAULT_LIMIT, MAX_LIMIT)?;

    let restaurants = state
        .app
        .restaurants
        .list_restaurants(limit)
        .await
        .map_err(into_status_error)?;

    Ok(Json(RestaurantsResponse {
        restaurants: restaurants.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use foodie_app::domain::{
        restaurants::{MockRestaurantsService, records::RestaurantUuid},
        reviews::MockReviewsService,
    };

    use crate::{restaurants::get::tests::make_restaurant, test_helpers::restaurants_service};

    use super::*;

    fn make_service(restaurants: MockRestaurantsService) -> Service {
        restaurants_service(
            restaurants,
            MockReviewsService::new(),
            Router::with_path("restaurants").get(handler),
        )
    }

    #[tokio::test]
    async fn test_index_returns_restaurants_in_service_order() -> TestResult {
        let newer = RestaurantUuid::new();
        let older = RestaurantUuid::new();

        let mut mock = MockRestaurantsService::new();

        mock.expect_list_restaurants()
            .once()
            .withf(|limit| *limit == DEFAULT_LIMIT)
            .return_once(move |_| Ok(vec![make_restaurant(newer), make_restaurant(older)]));

        let mut res = TestClient::get("http://example.com/restaurants")
            .send(&make_service(mock))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: RestaurantsResponse = res.take_json().await?;
        let uuids: Vec<_> = body.restaurants.iter().map(|r| r.uuid).collect();

        assert_eq!(uuids, [newer.into_uuid(), older.into_uuid()]);

        Ok(())
    }

    #[tokio::test]
    async fn test_index_passes_requested_limit() -> TestResult {
        let mut mock = MockRestaurantsService::new();

        mock.expect_list_restaurants()
            .once()
            .withf(|limit| *limit == 10)
            .return_once(|_| Ok(Vec::new()));

        let res = TestClient::get("http://example.com/restaurants?limit=10")
            .send(&make_service(mock))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }
}
