//! Promotion Handlers

pub(crate) mod approve;
pub(crate) mod redeem;
