//! Promotion Errors

use salvo::http::StatusError;
use tracing::error;

use foodie_app::domain::promotions::PromotionsServiceError;

pub(crate) fn into_status_error(error: PromotionsServiceError) -> StatusError {
    match error {
        PromotionsServiceError::Forbidden => {
            StatusError::forbidden().brief("Not permitted to approve this promotion")
        }
        PromotionsServiceError::InvalidCode => StatusError::bad_request().brief("Invalid code"),
        PromotionsServiceError::AlreadyRedeemed => {
            StatusError::conflict().brief("Code already redeemed")
        }
        PromotionsServiceError::AlreadyActive => {
            StatusError::conflict().brief("Promotion is already active")
        }
        PromotionsServiceError::AlreadyExists => {
            StatusError::conflict().brief("Promotion already exists")
        }
        PromotionsServiceError::NotFound => StatusError::not_found(),
        PromotionsServiceError::InvalidReference
        | PromotionsServiceError::MissingRequiredData
        | PromotionsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid promotion payload")
        }
        PromotionsServiceError::Configuration(source) => {
            error!("restaurant key misconfigured: {source}");

            StatusError::internal_server_error()
        }
        PromotionsServiceError::Issuance(source) => {
            error!("failed to issue promotion code: {source}");

            StatusError::internal_server_error()
        }
        PromotionsServiceError::Sql(source) => {
            error!("failed to process promotion: {source}");

            StatusError::internal_server_error()
        }
    }
}
