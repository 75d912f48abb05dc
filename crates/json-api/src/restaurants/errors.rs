//! Restaurant Errors

use salvo::http::StatusError;
use tracing::error;

use foodie_app::domain::restaurants::RestaurantsServiceError;

pub(crate) fn into_status_error(error: RestaurantsServiceError) -> StatusError {
    match error {
        RestaurantsServiceError::NotFound => {
            StatusError::not_found().brief("Restaurant not found")
        }
        RestaurantsServiceError::AlreadyExists => {
            StatusError::conflict().brief("Restaurant already exists")
        }
        RestaurantsServiceError::InvalidReference => {
            StatusError::not_found().brief("Referenced resource not found")
        }
        RestaurantsServiceError::MissingRequiredData | RestaurantsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid restaurant payload")
        }
        RestaurantsServiceError::Sql(source) => {
            error!("failed to process restaurant: {source}");

            StatusError::internal_server_error()
        }
    }
}
