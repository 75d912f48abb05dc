//! Restaurants service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::restaurants::{
        RestaurantsServiceError,
        data::NewRestaurant,
        records::{RestaurantRecord, RestaurantUuid},
        repository::PgRestaurantsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgRestaurantsService {
    db: Db,
    repository: PgRestaurantsRepository,
}

impl PgRestaurantsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgRestaurantsRepository::new(),
        }
    }
}

#[async_trait]
impl RestaurantsService for PgRestaurantsService {
    #[tracing::instrument(
        name = "restaurants.service.create_restaurant",
        skip(self, restaurant),
        fields(
            restaurant_uuid = %restaurant.uuid,
            owner_uuid = %restaurant.owner_uuid
        ),
        err
    )]
    async fn create_restaurant(
        &self,
        restaurant: NewRestaurant,
    ) -> Result<RestaurantRecord, RestaurantsServiceError> {
        let mut tx = self.db.begin().await?;

        let record = self
            .repository
            .create_restaurant(&mut tx, restaurant)
            .await?;

        tx.commit().await?;

        info!(restaurant_uuid = %record.uuid, "created restaurant");

        Ok(record)
    }

    async fn get_restaurant(
        &self,
        restaurant: RestaurantUuid,
    ) -> Result<RestaurantRecord, RestaurantsServiceError> {
        let mut tx = self.db.begin().await?;

        let record = self.repository.get_restaurant(&mut tx, restaurant).await?;

        tx.commit().await?;

        Ok(record)
    }

    async fn list_restaurants(
        &self,
        limit: u32,
    ) -> Result<Vec<RestaurantRecord>, RestaurantsServiceError> {
        let mut tx = self.db.begin().await?;

        let records = self.repository.list_restaurants(&mut tx, limit).await?;

        tx.commit().await?;

        Ok(records)
    }
}

#[automock]
#[async_trait]
pub trait RestaurantsService: Send + Sync {
    /// Creates a restaurant owned by an existing user. No encryption key is
    /// issued until the first promotion is approved.
    async fn create_restaurant(
        &self,
        restaurant: NewRestaurant,
    ) -> Result<RestaurantRecord, RestaurantsServiceError>;

    /// Retrieves a single restaurant.
    async fn get_restaurant(
        &self,
        restaurant: RestaurantUuid,
    ) -> Result<RestaurantRecord, RestaurantsServiceError>;

    /// Lists up to `limit` restaurants, newest first.
    async fn list_restaurants(
        &self,
        limit: u32,
    ) -> Result<Vec<RestaurantRecord>, RestaurantsServiceError>;
}
