//! Create Review Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use foodie_app::domain::{
    restaurants::records::RestaurantUuid,
    reviews::{data::NewReview, records::ReviewUuid},
};

use crate::{extensions::*, reviews::errors::into_status_error, state::State};

/// Create Review Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateReviewRequest {
    /// Star rating, 1 to 5
    pub rating: u8,

    /// Review body
    pub review_text: String,

    /// Opens a pending promotion for the restaurant owner to approve
    #[serde(default)]
    pub is_promoter: bool,

    /// Attached photo URLs
    #[serde(default)]
    pub photo_urls: Vec<String>,
}

/// Review Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ReviewCreatedResponse {
    /// Created review UUID; also the pending promotion's UUID for promoters
    pub uuid: Uuid,
}

/// Create Review Handler
#[endpoint(
    tags("reviews"),
    summary = "Create Review",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Review created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::NOT_FOUND, description = "Restaurant or author not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    restaurant: PathParam<Uuid>,
    json: JsonBody<CreateReviewRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ReviewCreatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    let request = json.into_inner();

    let review = state
        .app
        .reviews
        .create_review(NewReview {
            uuid: ReviewUuid::new(),
            user_uuid: user,
            restaurant_uuid: RestaurantUuid::from_uuid(restaurant.into_inner()),
            rating: request.rating,
            review_text: request.review_text,
            photo_urls: request.photo_urls,
            is_promoter: request.is_promoter,
        })
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(ReviewCreatedResponse {
        uuid: review.uuid.into_uuid(),
    }))
}
