//! Auth service errors.

use thiserror::Error;

use crate::auth::SessionTokenError;

#[derive(Debug, Error)]
pub enum AuthServiceError {
    /// Missing, malformed, expired or wrongly signed bearer token. Callers
    /// must not distinguish between these.
    #[error("invalid bearer token")]
    InvalidToken,

    #[error("token processing error")]
    Token(#[source] SessionTokenError),
}

impl From<SessionTokenError> for AuthServiceError {
    fn from(error: SessionTokenError) -> Self {
        match error {
            SessionTokenError::Rejected(_) => Self::InvalidToken,
            error => Self::Token(error),
        }
    }
}
