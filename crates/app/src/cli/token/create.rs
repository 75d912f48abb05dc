use clap::Args;
use foodie_app::{
    auth::{DEFAULT_SESSION_TTL, JwtAuthService, SessionTokens},
    database::{self, Db},
    domain::users::{PgUsersService, UsersService, records::UserUuid},
};
use jiff::SignedDuration;
use uuid::Uuid;

#[derive(Debug, Args)]
pub(crate) struct CreateTokenArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Session token signing secret (at least 32 bytes)
    #[arg(long, env = "JWT_SECRET", hide_env_values = true)]
    jwt_secret: String,

    /// User the token authenticates as
    #[arg(long)]
    user_uuid: Uuid,

    /// Token lifetime in hours; defaults to one week
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    ttl_hours: Option<u32>,
}

pub(crate) async fn run(args: CreateTokenArgs) -> Result<(), String> {
    let tokens = SessionTokens::new(args.jwt_secret.as_bytes())
        .map_err(|error| format!("invalid jwt secret: {error}"))?;

    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let user = PgUsersService::new(Db::new(pool))
        .get_user(UserUuid::from_uuid(args.user_uuid))
        .await
        .map_err(|error| format!("failed to load user: {error}"))?;

    let ttl = args
        .ttl_hours
        .map_or(DEFAULT_SESSION_TTL, |hours| {
            SignedDuration::from_hours(i64::from(hours))
        });

    let token = JwtAuthService::new(tokens)
        .issue_session_token(user.uuid, ttl)
        .map_err(|error| format!("failed to create token: {error}"))?;

    println!("user_uuid: {}", user.uuid);
    println!("token_ttl: {ttl:#}");
    println!("session_token: {token}");

    Ok(())
}
