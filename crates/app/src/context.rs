//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    auth::{AuthService, JwtAuthService, SessionTokenError, SessionTokens},
    database::{self, Db},
    domain::{
        promotions::{PgPromotionsService, PromotionsService},
        restaurants::{PgRestaurantsService, RestaurantsService},
        reviews::{PgReviewsService, ReviewsService},
        users::{PgUsersService, UsersService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("invalid session secret")]
    SessionSecret(#[source] SessionTokenError),
}

#[derive(Clone)]
pub struct AppContext {
    pub users: Arc<dyn UsersService>,
    pub restaurants: Arc<dyn RestaurantsService>,
    pub reviews: Arc<dyn ReviewsService>,
    pub promotions: Arc<dyn PromotionsService>,
    pub auth: Arc<dyn AuthService>,
}

impl AppContext {
    /// Build application context from a database URL and the session token
    /// signing secret.
    ///
    /// # Errors
    ///
    /// Returns an error when the secret is too short or establishing a
    /// database connection fails.
    pub async fn from_database_url(url: &str, session_secret: &[u8]) -> Result<Self, AppInitError> {
        let tokens = SessionTokens::new(session_secret).map_err(AppInitError::SessionSecret)?;

        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        let db = Db::new(pool);

        Ok(Self {
            users: Arc::new(PgUsersService::new(db.clone())),
            restaurants: Arc::new(PgRestaurantsService::new(db.clone())),
            reviews: Arc::new(PgReviewsService::new(db.clone())),
            promotions: Arc::new(PgPromotionsService::new(db)),
            auth: Arc::new(JwtAuthService::new(tokens)),
        })
    }
}
