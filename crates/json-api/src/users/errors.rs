//! User Errors

use salvo::http::StatusError;
use tracing::error;

use foodie_app::domain::users::UsersServiceError;

pub(crate) fn into_status_error(error: UsersServiceError) -> StatusError {
    match error {
        // A valid token for a user that no longer exists.
        UsersServiceError::NotFound => StatusError::unauthorized(),
        UsersServiceError::AlreadyExists => StatusError::conflict().brief("User already exists"),
        UsersServiceError::MissingRequiredData | UsersServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid user payload")
        }
        UsersServiceError::Sql(source) => {
            error!("failed to process user: {source}");

            StatusError::internal_server_error()
        }
    }
}
