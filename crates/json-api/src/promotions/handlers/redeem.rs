//! Redeem Code Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{extensions::*, promotions::errors::into_status_error, state::State};

/// Redeem Code Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RedeemCodeRequest {
    /// Code shared by a promoter
    pub encrypted_code: String,
}

/// Code Redeemed Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CodeRedeemedResponse {
    /// Always true on success
    pub ok: bool,

    /// Loyalty points credited to the promoter
    pub points_awarded: u64,
}

/// Redeem Code Handler
#[endpoint(
    tags("promotions"),
    summary = "Redeem Code",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Code redeemed"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid code"),
        (status_code = StatusCode::CONFLICT, description = "Code already redeemed"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<RedeemCodeRequest>,
    depot: &mut Depot,
) -> Result<Json<CodeRedeemedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let redeemer = depot.user_uuid_or_401()?;

    let outcome = state
        .app
        .promotions
        .redeem_code(json.into_inner().encrypted_code, redeemer)
        .await
        .map_err(into_status_error)?;

    Ok(Json(CodeRedeemedResponse {
        ok: true,
        points_awarded: outcome.points_awarded,
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::{Value, json};
    use testresult::TestResult;

    use foodie_app::domain::{
        promotions::{
            MockPromotionsService, PromotionsServiceError,
            records::{PromotionUuid, RedemptionOutcome, RedemptionUuid},
        },
        users::records::UserUuid,
    };

    use crate::test_helpers::{TEST_USER_UUID, promotions_service};

    use super::*;

    fn make_service(promotions: MockPromotionsService) -> Service {
        promotions_service(promotions, Router::with_path("promotions/redeem").post(handler))
    }

    #[tokio::test]
    async fn test_redeem_returns_points_awarded() -> TestResult {
        let mut mock = MockPromotionsService::new();

        mock.expect_redeem_code()
            .once()
            .withf(|code, redeemer| code == "sealed-code" && *redeemer == TEST_USER_UUID)
            .return_once(|_, _| {
                Ok(RedemptionOutcome {
                    redemption_uuid: RedemptionUuid::new(),
                    promotion_uuid: PromotionUuid::new(),
                    promoter_uuid: UserUuid::new(),
                    points_awarded: 10,
                })
            });

        mock.expect_approve_promotion().never();

        let mut res = TestClient::post("http://example.com/promotions/redeem")
            .json(&json!({ "encryptedCode": "sealed-code" }))
            .send(&make_service(mock))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: Value = res.take_json().await?;

        assert_eq!(body, json!({ "ok": true, "pointsAwarded": 10 }));

        Ok(())
    }

    #[tokio::test]
    async fn test_redeem_invalid_code_returns_400() -> TestResult {
        let mut mock = MockPromotionsService::new();

        mock.expect_redeem_code()
            .once()
            .return_once(|_, _| Err(PromotionsServiceError::InvalidCode));

        let res = TestClient::post("http://example.com/promotions/redeem")
            .json(&json!({ "encryptedCode": "tampered" }))
            .send(&make_service(mock))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_redeem_twice_returns_409() -> TestResult {
        let mut mock = MockPromotionsService::new();

        mock.expect_redeem_code()
            .once()
            .return_once(|_, _| Err(PromotionsServiceError::AlreadyRedeemed));

        let res = TestClient::post("http://example.com/promotions/redeem")
            .json(&json!({ "encryptedCode": "sealed-code" }))
            .send(&make_service(mock))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }

    #[tokio::test]
    async fn test_redeem_missing_code_returns_400() -> TestResult {
        let mut mock = MockPromotionsService::new();

        mock.expect_redeem_code().never();

        let res = TestClient::post("http://example.com/promotions/redeem")
            .json(&json!({ "code": "sealed-code" }))
            .send(&make_service(mock))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
