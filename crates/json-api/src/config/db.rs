//! Database Config

use clap::Args;

use crate::config::ConfigError;

/// Database settings.
#[derive(Debug, Args)]
pub struct DatabaseConfig {
    /// `PostgreSQL` connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: String,
}

impl DatabaseConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        let is_postgres = ["postgres://", "postgresql://"]
            .iter()
            .any(|scheme| self.database_url.starts_with(scheme));

        if !is_postgres {
            return Err(ConfigError::Invalid {
                field: "database_url",
                reason: "expected a postgres:// or postgresql:// URL".to_string(),
            });
        }

        Ok(())
    }
}
