//! Auth Config

use std::fmt;

use clap::Args;
use foodie_app::auth::MIN_SESSION_SECRET_BYTES;

use crate::config::ConfigError;

/// Session token settings.
#[derive(Args)]
pub struct AuthConfig {
    /// Secret used to sign and verify session tokens
    #[arg(long, env = "JWT_SECRET", hide_env_values = true)]
    pub jwt_secret: String,
}

impl AuthConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.len() < MIN_SESSION_SECRET_BYTES {
            return Err(ConfigError::Invalid {
                field: "jwt_secret",
                reason: format!("must be at least {MIN_SESSION_SECRET_BYTES} bytes"),
            });
        }

        Ok(())
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"**redacted**")
            .finish()
    }
}
