//! Rewards
//!
//! Loyalty points are a running counter on the user; there is no ledger.

mod repository;

pub(crate) use repository::PgRewardsRepository;

/// Points credited to a promoter for each successful redemption of their code.
pub const REDEMPTION_REWARD_POINTS: u64 = 10;
