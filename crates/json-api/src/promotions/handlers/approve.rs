//! Approve Promotion Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use foodie_app::domain::promotions::records::PromotionUuid;

use crate::{extensions::*, promotions::errors::into_status_error, state::State};

/// Approve Promotion Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApprovePromotionRequest {
    /// Offer the issued code grants
    pub offer_id: String,
}

/// Promotion Approved Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PromotionApprovedResponse {
    /// Shareable promotion code
    pub encrypted_code: String,
}

/// Approve Promotion Handler
///
/// Activates a pending promotion and issues its code. Only the owner of the
/// promotion's restaurant may approve it.
#[endpoint(
    tags("promotions"),
    summary = "Approve Promotion",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Promotion approved"),
        (status_code = StatusCode::FORBIDDEN, description = "Not the restaurant owner"),
        (status_code = StatusCode::CONFLICT, description = "Promotion is already active"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    promotion: PathParam<Uuid>,
    json: JsonBody<ApprovePromotionRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<PromotionApprovedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let approver = depot.user_uuid_or_401()?;

    let encrypted_code = state
        .app
        .promotions
        .approve_promotion(
            PromotionUuid::from_uuid(promotion.into_inner()),
            approver,
            json.into_inner().offer_id,
        )
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(PromotionApprovedResponse { encrypted_code }))
}
