//! Session tokens: HS256 JWTs carrying the user uuid and an expiry.

use std::fmt;

use jiff::{SignedDuration, Timestamp};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::users::records::UserUuid;

/// Minimum signing secret length in bytes.
pub const MIN_SESSION_SECRET_BYTES: usize = 32;

const SESSION_ALGORITHM: Algorithm = Algorithm::HS256;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub uid: UserUuid,

    /// Expiry, unix seconds.
    pub exp: i64,
}

#[derive(Debug, Error)]
pub enum SessionTokenError {
    #[error("session secret must be at least {MIN_SESSION_SECRET_BYTES} bytes")]
    SecretTooShort,

    #[error("failed to sign session token")]
    Signing(#[source] jsonwebtoken::errors::Error),

    #[error("session token rejected")]
    Rejected(#[source] jsonwebtoken::errors::Error),
}

/// Signs and verifies session tokens with one shared secret.
#[derive(Clone)]
pub struct SessionTokens {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl SessionTokens {
    /// # Errors
    ///
    /// Returns [`SessionTokenError::SecretTooShort`] for secrets shorter than
    /// [`MIN_SESSION_SECRET_BYTES`].
    pub fn new(secret: &[u8]) -> Result<Self, SessionTokenError> {
        if secret.len() < MIN_SESSION_SECRET_BYTES {
            return Err(SessionTokenError::SecretTooShort);
        }

        let mut validation = Validation::new(SESSION_ALGORITHM);

        validation.set_required_spec_claims(&["exp"]);

        Ok(Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
        })
    }

    /// Mint a token for `user` valid for `ttl` from now.
    ///
    /// # Errors
    ///
    /// Returns an error if signing fails.
    pub fn issue(&self, user: UserUuid, ttl: SignedDuration) -> Result<String, SessionTokenError> {
        let claims = SessionClaims {
            uid: user,
            exp: Timestamp::now().as_second().saturating_add(ttl.as_secs()),
        };

        encode(&Header::new(SESSION_ALGORITHM), &claims, &self.encoding)
            .map_err(SessionTokenError::Signing)
    }

    /// Verify signature and expiry.
    ///
    /// # Errors
    ///
    /// Returns [`SessionTokenError::Rejected`] for any token that does not
    /// verify.
    pub fn verify(&self, token: &str) -> Result<SessionClaims, SessionTokenError> {
        decode::<SessionClaims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(SessionTokenError::Rejected)
    }
}

impl fmt::Debug for SessionTokens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionTokens(**redacted**)")
    }
}
