//! Promotions
//!
//! A promotion is created pending alongside a promoter's review, activated
//! once by the restaurant owner (which issues its code) and then redeemed by
//! any number of distinct users.

pub mod data;
mod errors;
pub mod records;
mod repositories;
pub mod service;

pub use errors::PromotionsServiceError;
pub(crate) use repositories::PgPromotionsRepository;
pub use service::*;
