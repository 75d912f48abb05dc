//! Auth service.

use async_trait::async_trait;
use jiff::SignedDuration;
use mockall::automock;

use crate::{
    auth::{AuthServiceError, SessionTokens},
    domain::users::records::UserUuid,
};

/// Lifetime of tokens minted by the admin CLI unless overridden.
pub const DEFAULT_SESSION_TTL: SignedDuration = SignedDuration::from_hours(24 * 7);

#[derive(Debug, Clone)]
pub struct JwtAuthService {
    tokens: SessionTokens,
}

impl JwtAuthService {
    #[must_use]
    pub fn new(tokens: SessionTokens) -> Self {
        Self { tokens }
    }

    /// Issue a session token for `user`.
    ///
    /// # Errors
    ///
    /// Returns an error if signing fails.
    pub fn issue_session_token(
        &self,
        user: UserUuid,
        ttl: SignedDuration,
    ) -> Result<String, AuthServiceError> {
        Ok(self.tokens.issue(user, ttl)?)
    }
}

#[async_trait]
impl AuthService for JwtAuthService {
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<UserUuid, AuthServiceError> {
        let claims = self.tokens.verify(bearer_token)?;

        Ok(claims.uid)
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Resolve a bearer token to the user it was issued for.
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<UserUuid, AuthServiceError>;
}
