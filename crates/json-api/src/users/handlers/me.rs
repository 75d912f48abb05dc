//! Current User Handler

use std::sync::Arc;

use salvo::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use foodie_app::domain::users::records::UserRecord;

use crate::{extensions::*, state::State, users::errors::into_status_error};

/// User Profile Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UserProfileResponse {
    /// The unique identifier of the user
    pub uuid: Uuid,

    pub username: String,

    pub email: String,

    /// Loyalty point balance
    pub loyalty_points: u64,

    /// Loyalty level
    pub level: String,
}

impl From<UserRecord> for UserProfileResponse {
    fn from(user: UserRecord) -> Self {
        Self {
            uuid: user.uuid.into_uuid(),
            username: user.username,
            email: user.email,
            loyalty_points: user.loyalty_points,
            level: user.level,
        }
    }
}

/// Current User Handler
///
/// Returns the authenticated user's profile and loyalty balance.
#[endpoint(
    tags("users"),
    summary = "Current User",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<UserProfileResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    let user = state
        .app
        .users
        .get_user(user)
        .await
        .map_err(into_status_error)?;

    Ok(Json(user.into()))
}
