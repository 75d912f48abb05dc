//! Promotions service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::domain::{codes::CodeError, restaurants::keys::RestaurantKeyError};

#[derive(Debug, Error)]
pub enum PromotionsServiceError {
    #[error("not permitted to approve this promotion")]
    Forbidden,

    #[error("invalid code")]
    InvalidCode,

    #[error("code already redeemed by this user")]
    AlreadyRedeemed,

    #[error("promotion is already active")]
    AlreadyActive,

    #[error("promotion already exists")]
    AlreadyExists,

    #[error("promotion not found")]
    NotFound,

    #[error("related resource not found")]
    InvalidReference,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("restaurant key misconfigured")]
    Configuration(#[source] RestaurantKeyError),

    #[error("failed to issue promotion code")]
    Issuance(#[source] CodeError),

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for PromotionsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::ForeignKeyViolation) => Self::InvalidReference,
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            _ => Self::Sql(error),
        }
    }
}

impl From<CodeError> for PromotionsServiceError {
    fn from(error: CodeError) -> Self {
        if error.is_invalid_code() {
            return Self::InvalidCode;
        }

        match error {
            CodeError::Key(RestaurantKeyError::Sql(error)) => Self::Sql(error),
            CodeError::Key(error) => Self::Configuration(error),
            error => Self::Issuance(error),
        }
    }
}
