//! App Router

use salvo::Router;

use crate::{auth, promotions, restaurants, reviews, users};

/// Read-only routes open to anonymous visitors.
pub(crate) fn public_router() -> Router {
    Router::new()
        .push(
            Router::with_path("restaurants")
                .get(restaurants::index::handler)
                .push(Router::with_path("{restaurant}").get(restaurants::get::handler)),
        )
        .push(Router::with_path("reviews/recent").get(reviews::recent::handler))
}

/// Routes that require an authenticated user.
pub(crate) fn app_router() -> Router {
    Router::new()
        .hoop(auth::middleware::handler)
        .push(
            Router::with_path("promotions")
                .push(Router::with_path("redeem").post(promotions::redeem::handler))
                .push(Router::with_path("{promotion}/approve").post(promotions::approve::handler)),
        )
        .push(
            Router::with_path("restaurants/{restaurant}/reviews").post(reviews::create::handler),
        )
        .push(Router::with_path("users/me").get(users::me::handler))
}
