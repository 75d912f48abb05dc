//! Test helpers.

use std::sync::Arc;

use foodie_app::{
    auth::MockAuthService,
    context::AppContext,
    domain::{
        promotions::MockPromotionsService, restaurants::MockRestaurantsService,
        reviews::MockReviewsService, users::MockUsersService, users::records::UserUuid,
    },
};
use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use crate::{extensions::*, state::State};

pub(crate) const TEST_USER_UUID: UserUuid = UserUuid::from_uuid(Uuid::nil());

#[salvo::handler]
pub(crate) async fn inject_user(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_user_uuid(TEST_USER_UUID);
    ctrl.call_next(req, depot, res).await;
}

fn strict_users_mock() -> MockUsersService {
    let mut users = MockUsersService::new();

    users.expect_create_user().never();
    users.expect_get_user().never();

    users
}

fn strict_restaurants_mock() -> MockRestaurantsService {
    let mut restaurants = MockRestaurantsService::new();

    restaurants.expect_create_restaurant().never();
    restaurants.expect_get_restaurant().never();
    restaurants.expect_list_restaurants().never();

    restaurants
}

fn strict_reviews_mock() -> MockReviewsService {
    let mut reviews = MockReviewsService::new();

    reviews.expect_create_review().never();
    reviews.expect_list_restaurant_reviews().never();
    reviews.expect_list_recent_reviews().never();

    reviews
}

fn strict_promotions_mock() -> MockPromotionsService {
    let mut promotions = MockPromotionsService::new();

    promotions.expect_approve_promotion().never();
    promotions.expect_redeem_code().never();

    promotions
}

fn strict_auth_mock() -> MockAuthService {
    let mut auth = MockAuthService::new();

    auth.expect_authenticate_bearer().never();

    auth
}

fn strict_context() -> AppContext {
    AppContext {
        users: Arc::new(strict_users_mock()),
        restaurants: Arc::new(strict_restaurants_mock()),
        reviews: Arc::new(strict_reviews_mock()),
        promotions: Arc::new(strict_promotions_mock()),
        auth: Arc::new(strict_auth_mock()),
    }
}

pub(crate) fn state_with_auth(auth: MockAuthService) -> Arc<State> {
    State::from_app_context(AppContext {
        auth: Arc::new(auth),
        ..strict_context()
    })
}

pub(crate) fn state_with_users(users: MockUsersService) -> Arc<State> {
    State::from_app_context(AppContext {
        users: Arc::new(users),
        ..strict_context()
    })
}

pub(crate) fn state_with_reviews(reviews: MockReviewsService) -> Arc<State> {
    State::from_app_context(AppContext {
        reviews: Arc::new(reviews),
        ..strict_context()
    })
}

pub(crate) fn state_with_restaurants(
    restaurants: MockRestaurantsService,
    reviews: MockReviewsService,
) -> Arc<State> {
    State::from_app_context(AppContext {
        restaurants: Arc::new(restaurants),
        reviews: Arc::new(reviews),
        ..strict_context()
    })
}

pub(crate) fn state_with_promotions(promotions: MockPromotionsService) -> Arc<State> {
    State::from_app_context(AppContext {
        promotions: Arc::new(promotions),
        ..strict_context()
    })
}

fn authed_service(state: Arc<State>, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state))
            .hoop(inject_user)
            .push(route),
    )
}

fn public_service(state: Arc<State>, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(state)).push(route))
}

pub(crate) fn users_service(users: MockUsersService, route: Router) -> Service {
    authed_service(state_with_users(users), route)
}

pub(crate) fn reviews_service(reviews: MockReviewsService, route: Router) -> Service {
    authed_service(state_with_reviews(reviews), route)
}

pub(crate) fn promotions_service(promotions: MockPromotionsService, route: Router) -> Service {
    authed_service(state_with_promotions(promotions), route)
}

pub(crate) fn public_reviews_service(reviews: MockReviewsService, route: Router) -> Service {
    public_service(state_with_reviews(reviews), route)
}

pub(crate) fn restaurants_service(
    restaurants: MockRestaurantsService,
    reviews: MockReviewsService,
    route: Router,
) -> Service {
    public_service(state_with_restaurants(restaurants, reviews), route)
}
