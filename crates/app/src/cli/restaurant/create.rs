use clap::Args;
use foodie_app::{
    database::{self, Db},
    domain::{
        restaurants::{
            PgRestaurantsService, RestaurantsService, data::NewRestaurant,
            records::RestaurantUuid,
        },
        users::records::UserUuid,
    },
};
use uuid::Uuid;

#[derive(Debug, Args)]
pub(crate) struct CreateRestaurantArgs {
    /// Restaurant display name
    #[arg(long)]
    name: String,

    /// UUID of the owning user; only the owner may approve promotions
    #[arg(long)]
    owner_uuid: Uuid,

    #[arg(long, default_value = "")]
    address: String,

    #[arg(long, default_value = "Unknown")]
    cuisine_type: String,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Optional restaurant UUID; generated when omitted
    #[arg(long)]
    restaurant_uuid: Option<Uuid>,
}

pub(crate) async fn run(args: CreateRestaurantArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = PgRestaurantsService::new(Db::new(pool));

    let restaurant = service
        .create_restaurant(NewRestaurant {
            uuid: args
                .restaurant_uuid
                .map_or_else(RestaurantUuid::new, RestaurantUuid::from_uuid),
            owner_uuid: UserUuid::from_uuid(args.owner_uuid),
            name: args.name,
            address: args.address,
            cuisine_type: args.cuisine_type,
        })
        .await
        .map_err(|error| format!("failed to create restaurant: {error}"))?;

    println!("restaurant_uuid: {}", restaurant.uuid);
    println!("restaurant_name: {}", restaurant.name);
    println!("owner_uuid: {}", restaurant.owner_uuid);

    Ok(())
}
