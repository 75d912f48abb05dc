//! Promotion Repositories

mod promotions;
mod redemptions;

pub(crate) use promotions::PgPromotionsRepository;
pub(crate) use redemptions::PgRedemptionsRepository;
