//! Review Errors

use salvo::http::StatusError;
use tracing::error;

use foodie_app::domain::reviews::ReviewsServiceError;

pub(crate) fn into_status_error(error: ReviewsServiceError) -> StatusError {
    match error {
        ReviewsServiceError::InvalidRating => {
            StatusError::bad_request().brief("Rating must be between 1 and 5")
        }
        ReviewsServiceError::AlreadyExists => StatusError::conflict().brief("Review already exists"),
        ReviewsServiceError::InvalidReference => {
            StatusError::not_found().brief("Referenced resource not found")
        }
        ReviewsServiceError::MissingRequiredData | ReviewsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid review payload")
        }
        ReviewsServiceError::NotFound => StatusError::not_found(),
        ReviewsServiceError::Sql(source) => {
            error!("failed to process review: {source}");

            StatusError::internal_server_error()
        }
    }
}
